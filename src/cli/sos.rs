// src/cli/sos.rs
// Emergency resources panel

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use mindspace::app::{Action, AppState, reduce};
use mindspace::sos::{SAFE_NOW_LABEL, render_panel};

pub async fn run() -> Result<()> {
    let state = reduce(AppState::default(), Action::OpenSos);
    info!(sos_open = state.sos_open, "SOS panel opened");

    println!("{}\n", render_panel());
    println!("Press Enter when you're ready: {}", SAFE_NOW_LABEL);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    lines.next_line().await?;

    let state = reduce(state, Action::CloseSos);
    info!(sos_open = state.sos_open, "SOS panel dismissed");
    Ok(())
}
