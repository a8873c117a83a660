// src/cli/breathe.rs

use anyhow::Result;

use mindspace::breathing::BreathingPattern;

pub async fn run(cycles: u32) -> Result<()> {
    let pattern = BreathingPattern::default();
    println!("Breathing Sanctuary - {} cycles\n", cycles);

    pattern
        .run(cycles, |cycle, phase| {
            println!(
                "[{}/{}] {:<5} {}s",
                cycle + 1,
                cycles,
                phase.label(),
                pattern.duration_of(phase).as_secs()
            );
        })
        .await;

    println!("\nWell done.");
    Ok(())
}
