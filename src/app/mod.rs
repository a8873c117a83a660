// src/app/mod.rs
//! Application shell state: theme, mocked login, current page, the SOS
//! panel and the profile's anonymity switch.
//!
//! State changes go through [`reduce`], a pure function. [`App`] wraps it and
//! persists the login flag at the three points it can change: start, login
//! and logout.

pub mod session_flag;

use tracing::{info, warn};

pub use session_flag::{
    FileSessionFlag, MemorySessionFlag, SESSION_FLAG_KEY, SessionFlagError, SessionFlagStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    TalkNow,
    Tests,
    Community,
    Login,
    Signup,
    Profile,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::TalkNow => "/talk",
            Page::Tests => "/tests",
            Page::Community => "/community",
            Page::Login => "/login",
            Page::Signup => "/signup",
            Page::Profile => "/profile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppState {
    pub theme: Theme,
    pub logged_in: bool,
    pub page: Page,
    /// Emergency resources panel is showing
    pub sos_open: bool,
    /// Hide the profile identity; on unless switched off
    pub anonymous: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            logged_in: false,
            page: Page::default(),
            sos_open: false,
            anonymous: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleTheme,
    /// Restore the persisted login flag at startup
    Restore { logged_in: bool },
    LogIn,
    LogOut,
    Navigate(Page),
    OpenSos,
    /// "I'm safe now"
    CloseSos,
    ToggleAnonymous,
}

pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        Action::ToggleTheme => AppState {
            theme: state.theme.toggled(),
            ..state
        },
        Action::Restore { logged_in } => AppState { logged_in, ..state },
        Action::LogIn => AppState {
            logged_in: true,
            page: Page::Profile,
            ..state
        },
        Action::LogOut => AppState {
            logged_in: false,
            page: Page::Home,
            anonymous: true,
            ..state
        },
        // Profile is only reachable when logged in
        Action::Navigate(Page::Profile) if !state.logged_in => AppState {
            page: Page::Login,
            ..state
        },
        Action::Navigate(page) => AppState { page, ..state },
        Action::OpenSos => AppState {
            sos_open: true,
            ..state
        },
        Action::CloseSos => AppState {
            sos_open: false,
            ..state
        },
        // The switch lives on the profile page
        Action::ToggleAnonymous if !state.logged_in => state,
        Action::ToggleAnonymous => AppState {
            anonymous: !state.anonymous,
            ..state
        },
    }
}

pub struct App<S> {
    state: AppState,
    store: S,
}

impl<S: SessionFlagStore> App<S> {
    /// Start the app, restoring the login flag. An unreadable flag counts as logged out.
    pub fn start(store: S) -> Self {
        let logged_in = store.load().unwrap_or_else(|e| {
            warn!("Could not read session flag: {}", e);
            false
        });
        let state = reduce(AppState::default(), Action::Restore { logged_in });
        Self { state, store }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn dispatch(&mut self, action: Action) -> Result<AppState, SessionFlagError> {
        match action {
            Action::LogIn => {
                self.store.save(true)?;
                info!("Session flag set");
            }
            Action::LogOut => {
                self.store.save(false)?;
                info!("Session flag cleared");
            }
            _ => {}
        }
        self.state = reduce(self.state, action);
        Ok(self.state)
    }
}
