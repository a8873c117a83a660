// src/app/session_flag.rs
// Local "logged in" flag. There is no server-side session behind it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

/// Name the flag is stored under
pub const SESSION_FLAG_KEY: &str = "mindspace_auth";

#[derive(Error, Debug)]
pub enum SessionFlagError {
    #[error("session flag I/O error: {0}")]
    Io(#[from] io::Error),
}

pub trait SessionFlagStore {
    fn load(&self) -> Result<bool, SessionFlagError>;
    fn save(&self, logged_in: bool) -> Result<(), SessionFlagError>;
}

/// File `<dir>/mindspace_auth` containing `true`; absent means logged out
#[derive(Debug, Clone)]
pub struct FileSessionFlag {
    path: PathBuf,
}

impl FileSessionFlag {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SESSION_FLAG_KEY),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionFlagStore for FileSessionFlag {
    fn load(&self) -> Result<bool, SessionFlagError> {
        match fs::read_to_string(&self.path) {
            Ok(value) => Ok(value.trim() == "true"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, logged_in: bool) -> Result<(), SessionFlagError> {
        if logged_in {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, "true")?;
        } else {
            match fs::remove_file(&self.path) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

/// In-memory flag; clones share the same value
#[derive(Debug, Clone, Default)]
pub struct MemorySessionFlag {
    value: Arc<AtomicBool>,
}

impl SessionFlagStore for MemorySessionFlag {
    fn load(&self) -> Result<bool, SessionFlagError> {
        Ok(self.value.load(Ordering::SeqCst))
    }

    fn save(&self, logged_in: bool) -> Result<(), SessionFlagError> {
        self.value.store(logged_in, Ordering::SeqCst);
        Ok(())
    }
}
