//! Persistence of a session between CLI invocations.
//!
//! One-shot commands (`git-sandbox run ...`) load the session, apply a single
//! command and save it again. The file is pretty JSON so it can be inspected
//! by hand; on load the repository invariants are re-checked because the file
//! did not necessarily come from the model.

use crate::core::{
    error::{Result, SandboxError},
    session::SessionStats,
    state::RepositoryState,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const SESSION_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionFile {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub state: RepositoryState,
    pub stats: SessionStats,
}

impl SessionFile {
    pub fn new(state: RepositoryState, stats: SessionStats) -> Self {
        Self {
            version: SESSION_FORMAT_VERSION,
            saved_at: Utc::now(),
            state,
            stats,
        }
    }
}

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored session, `None` if nothing was saved yet
    pub fn load(&self) -> Result<Option<SessionFile>> {
        log::debug!("Loading session from {}", self.path.display());

        if !self.path.exists() {
            log::debug!("Session file does not exist: {}", self.path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            log::error!("Failed to read session file '{}': {}", self.path.display(), e);
            SandboxError::session_read_failed(&self.path, e)
        })?;

        let file: SessionFile = serde_json::from_str(&content).map_err(|e| {
            log::error!("Failed to parse session file '{}': {}", self.path.display(), e);
            SandboxError::session_parse_failed(&self.path, e)
        })?;

        if file.version != SESSION_FORMAT_VERSION {
            return Err(SandboxError::corrupt_session(
                &self.path,
                format!("unsupported format version {}", file.version),
            ));
        }

        file.state
            .check_invariants()
            .map_err(|e| SandboxError::corrupt_session(&self.path, e.to_string()))?;

        log::debug!(
            "Loaded session with {} file(s) and {} commit(s), saved at {}",
            file.state.files.len(),
            file.state.commits.len(),
            file.saved_at
        );
        Ok(Some(file))
    }

    pub fn save(&self, state: &RepositoryState, stats: SessionStats) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                log::error!("Failed to create session directory '{}': {}", parent.display(), e);
                SandboxError::session_write_failed(parent, e)
            })?;
        }

        let json = serde_json::to_string_pretty(&SessionFile::new(state.clone(), stats))?;

        fs::write(&self.path, json).map_err(|e| {
            log::error!("Failed to write session file '{}': {}", self.path.display(), e);
            SandboxError::session_write_failed(&self.path, e)
        })?;

        log::debug!("Saved session to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{model::RepositoryModel, state::Scenario};
    use tempfile::TempDir;

    #[test]
    fn test_missing_session_loads_as_none() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = SessionStore::new(temp_dir.path().join("session.json"));
        assert!(store.load()?.is_none());
        Ok(())
    }

    #[test]
    fn test_saved_session_preserves_file_order() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = SessionStore::new(temp_dir.path().join("deep").join("session.json"));

        let mut model = RepositoryModel::new(Scenario::Remote);
        model.git_clone("https://github.com/example/repo.git")?;
        model.create_file("zeta.txt")?;
        model.create_file("alpha.txt")?;
        let stats = SessionStats {
            commands_executed: 3,
            files_created: 2,
            ..Default::default()
        };
        store.save(model.snapshot(), stats)?;

        let loaded = store.load()?.expect("session was saved");
        assert_eq!(&loaded.state, model.snapshot());
        assert_eq!(loaded.stats, stats);
        let names: Vec<_> = loaded.state.files.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec!["README.md", "index.html", "styles.css", "app.js", "zeta.txt", "alpha.txt"]
        );
        Ok(())
    }

    #[test]
    fn test_inconsistent_session_is_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("session.json");
        let store = SessionStore::new(&path);

        let mut state = RepositoryState::new(Scenario::Local);
        state.cloned = true;
        store.save(&state, SessionStats::default())?;

        let err = store.load().unwrap_err();
        assert!(matches!(err, SandboxError::CorruptSession { .. }));
        Ok(())
    }

    #[test]
    fn test_garbage_session_is_a_parse_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("session.json");
        std::fs::write(&path, "{ nope")?;

        let err = SessionStore::new(&path).load().unwrap_err();
        assert!(matches!(err, SandboxError::SessionParseFailed { .. }));
        Ok(())
    }
}
