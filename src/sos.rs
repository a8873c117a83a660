//! Emergency resources shown when the user asks for help right now.
//!
//! The list is fixed. Opening and dismissing the panel is app state, see
//! [`crate::app::Action::OpenSos`].

use serde::Serialize;

pub const SOS_HEADLINE: &str = "You are not alone.";
pub const SOS_INTRO: &str = "Help is available immediately. Please reach out to these resources.";
/// Label of the action that dismisses the panel
pub const SAFE_NOW_LABEL: &str = "I'm safe now";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SosResource {
    pub title: &'static str,
    /// Number to call or place to go
    pub contact: &'static str,
    pub note: &'static str,
}

pub const SOS_RESOURCES: [SosResource; 3] = [
    SosResource {
        title: "Campus Security",
        contact: "0123-456-7890",
        note: "24/7 Response Unit",
    },
    SosResource {
        title: "Crisis Line",
        contact: "988",
        note: "National Suicide Prevention",
    },
    SosResource {
        title: "Health Wing",
        contact: "Level 2, South Hall",
        note: "Walk-ins Welcome",
    },
];

pub fn resources() -> &'static [SosResource] {
    &SOS_RESOURCES
}

/// Plain-text rendering of the panel, one resource per line
pub fn render_panel() -> String {
    let mut out = format!("{}\n{}\n", SOS_HEADLINE, SOS_INTRO);
    for r in resources() {
        out.push_str(&format!(
            "\n  {:<16} {:<20} {}",
            r.title.to_uppercase(),
            r.contact,
            r.note
        ));
    }
    out
}
