// src/cli/serve.rs

use anyhow::{Result, anyhow};
use std::time::Duration;

use mindspace::config::RelayConfig;

use super::ServeArgs;

pub async fn run(args: ServeArgs) -> Result<()> {
    let api_key = args
        .gemini_api_key
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| {
            anyhow!("GEMINI_API_KEY required (set via --gemini-api-key, env var, or .env)")
        })?;

    let config = RelayConfig {
        host: args.host,
        port: args.port,
        api_key,
        model: args.model,
        upstream_timeout: Duration::from_secs(args.upstream_timeout),
    };

    mindspace::api::run(config).await
}
