// src/cli/assess.rs
// Run a quiz wizard on stdin

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use mindspace::assessment::{Answer, Band, QuizWizard, find_quiz};

pub async fn run(key: &str) -> Result<()> {
    let quiz = find_quiz(key)?;
    let mut wizard = QuizWizard::start(quiz)?;

    println!("{} - {}", quiz.title, quiz.description);
    let scale: Vec<String> = Answer::ALL
        .iter()
        .map(|a| format!("{}={}", a.value(), a.label()))
        .collect();
    println!("Answer each question with {}\n", scale.join(", "));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(question) = wizard.current_question() {
        println!("{}", question);
        let Some(line) = lines.next_line().await? else {
            println!("Quiz abandoned.");
            return Ok(());
        };

        let parsed = line
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(|v| Answer::try_from(v).ok());
        match parsed {
            Some(answer) => {
                wizard.answer(answer)?;
            }
            None => println!("Please answer 0, 1, 2 or 3."),
        }
    }

    if let Some(outcome) = wizard.result() {
        println!("\nResult: {} ({:.0}%)", outcome.label, outcome.percentage);
        println!("{}", outcome.insight);
        if outcome.band == Band::Elevated {
            println!("Run `mindspace sos` for emergency contacts.");
        }
    }
    if let Some(share) = wizard.share_text() {
        println!("\n{}", share);
    }

    Ok(())
}
