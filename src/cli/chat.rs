// src/cli/chat.rs
// Interactive chat against a running relay

use anyhow::{Context, Result};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

use mindspace::config::ClientConfig;
use mindspace::conversation::{ChatSession, MoodTag, RelayClient, SessionError};

use super::ChatArgs;

const HELP: &str = "Commands: /mood <calm|stressed|vulnerable|void>, /quit";

pub async fn run(args: ChatArgs) -> Result<()> {
    let config = ClientConfig {
        api_url: args.api_url,
        timeout: Duration::from_secs(args.timeout),
    };
    let client = RelayClient::new(&config).context("Failed to create relay client")?;
    println!("Connected to {}", client.endpoint());
    println!("{}", HELP);

    let mut session = ChatSession::new(client);
    if let Some(greeting) = session.log().last() {
        println!("\nMindSpace: {}\n", greeting.text());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();

        if input == "/quit" {
            break;
        }
        if let Some(mood) = input.strip_prefix("/mood") {
            match mood.parse::<MoodTag>() {
                Ok(tag) => {
                    session.set_mood(tag);
                    println!("[{} {}]", tag.icon(), tag);
                }
                Err(()) => println!("{}", HELP),
            }
            continue;
        }

        let result = session
            .send_and_await_reply(input)
            .await
            .map(|reply| reply.text().to_string());

        match result {
            Ok(reply) => {
                let mood = session.mood();
                println!("[{} {}]\nMindSpace: {}\n", mood.icon(), mood, reply);
            }
            Err(SessionError::Blank) => {}
            Err(_) => {
                if let Some(notice) = session.error() {
                    println!("! {}\n", notice);
                }
            }
        }
    }

    Ok(())
}
