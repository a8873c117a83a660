// src/community.rs
//! Mocked community feed: live circles with one-way registration, an
//! anonymous wall, and the tab the user is looking at. Nothing is persisted.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CommunityTab {
    #[default]
    Sessions,
    Wall,
    Vibe,
}

impl CommunityTab {
    pub fn label(&self) -> &'static str {
        match self {
            CommunityTab::Sessions => "LIVE CIRCLES",
            CommunityTab::Wall => "ANONYMOUS WALL",
            CommunityTab::Vibe => "VIBE MAP",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiveCircle {
    pub id: String,
    pub topic: String,
    pub speaker: String,
    pub time: String,
    pub attendees: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WallPost {
    pub id: String,
    pub author_alias: String,
    pub content: String,
    pub reactions: u32,
    pub posted: String,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommunityError {
    #[error("no live circle with id {0}")]
    UnknownSession(String),
}

#[derive(Debug, Clone, Default)]
pub struct CommunityBoard {
    tab: CommunityTab,
    circles: Vec<LiveCircle>,
    posts: Vec<WallPost>,
    registered: HashSet<String>,
}

impl CommunityBoard {
    /// Board with the built-in sample circles and posts
    pub fn seeded() -> Self {
        let circles = vec![
            LiveCircle {
                id: "1".to_string(),
                topic: "Overcoming Academic Fatigue".to_string(),
                speaker: "Dr. Sarah Mitchell".to_string(),
                time: "Tomorrow, 2:00 PM".to_string(),
                attendees: 42,
            },
            LiveCircle {
                id: "2".to_string(),
                topic: "Mindful Social Media Use".to_string(),
                speaker: "James Clear".to_string(),
                time: "Friday, 10:00 AM".to_string(),
                attendees: 156,
            },
        ];
        let posts = vec![
            WallPost {
                id: "1".to_string(),
                author_alias: "Phantom_92".to_string(),
                content: "Finally finished my midterms. Feeling relieved but exhausted. Anyone else feeling the void?".to_string(),
                reactions: 24,
                posted: "2h ago".to_string(),
            },
            WallPost {
                id: "2".to_string(),
                author_alias: "ZenStudent".to_string(),
                content: "Just a reminder that you're doing your best, and that's enough. Take a deep breath today.".to_string(),
                reactions: 112,
                posted: "5h ago".to_string(),
            },
        ];

        Self {
            circles,
            posts,
            ..Self::default()
        }
    }

    pub fn tab(&self) -> CommunityTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: CommunityTab) {
        self.tab = tab;
    }

    pub fn circles(&self) -> &[LiveCircle] {
        &self.circles
    }

    pub fn posts(&self) -> &[WallPost] {
        &self.posts
    }

    /// Register for a circle. Returns false if already registered; there is no unregister.
    pub fn register(&mut self, id: &str) -> Result<bool, CommunityError> {
        if !self.circles.iter().any(|c| c.id == id) {
            return Err(CommunityError::UnknownSession(id.to_string()));
        }
        Ok(self.registered.insert(id.to_string()))
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.registered.contains(id)
    }
}
