// src/persona/mod.rs
// Persona used as the system instruction for every relayed chat.
// Only the campus companion exists; the enum leaves room for more.

pub mod companion;

pub use companion::COMPANION_PERSONA_PROMPT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Persona {
    /// Supportive, non-clinical companion for university students
    #[default]
    Companion,
}

impl Persona {
    /// System instruction sent with every request for this persona
    pub fn prompt(&self) -> &'static str {
        match self {
            Persona::Companion => COMPANION_PERSONA_PROMPT,
        }
    }
}
