// src/cli/account.rs
// Local session flag and community board commands

use anyhow::{Context, Result};

use mindspace::app::{Action, App, FileSessionFlag};
use mindspace::community::{CommunityBoard, CommunityTab};

use super::StateArgs;

fn open(args: &StateArgs) -> App<FileSessionFlag> {
    App::start(FileSessionFlag::new(args.dir()))
}

pub fn login(args: &StateArgs) -> Result<()> {
    let mut app = open(args);
    let state = app
        .dispatch(Action::LogIn)
        .context("Failed to save session flag")?;
    println!("Logged in. Profile: {}", state.page.path());
    Ok(())
}

pub fn logout(args: &StateArgs) -> Result<()> {
    let mut app = open(args);
    let state = app
        .dispatch(Action::LogOut)
        .context("Failed to clear session flag")?;
    println!("Logged out. Back to {}", state.page.path());
    Ok(())
}

pub fn status(args: &StateArgs) -> Result<()> {
    let app = open(args);
    let state = app.state();
    if state.logged_in {
        let visibility = if state.anonymous { "anonymous" } else { "public" };
        println!("Logged in ({}).", visibility);
    } else {
        println!("Not logged in.");
    }
    Ok(())
}

pub fn community(register: Option<&str>) -> Result<()> {
    let mut board = CommunityBoard::seeded();

    if let Some(id) = register {
        if board.register(id)? {
            println!("Registered for circle {}.\n", id);
        }
    }

    println!("{}", CommunityTab::Sessions.label());
    for circle in board.circles() {
        let marker = if board.is_registered(&circle.id) { "✓" } else { " " };
        println!(
            " {} [{}] {} - {} ({}, +{})",
            marker, circle.id, circle.topic, circle.speaker, circle.time, circle.attendees
        );
    }

    board.select_tab(CommunityTab::Wall);
    println!("\n{}", board.tab().label());
    for post in board.posts() {
        println!(
            "  {} ({}, {} reactions): {}",
            post.author_alias, post.posted, post.reactions, post.content
        );
    }

    Ok(())
}
