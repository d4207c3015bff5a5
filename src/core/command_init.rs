//! Centralized initialization for commands that work on a persisted session.
//!
//! Every subcommand needs the same setup: resolve where the session lives,
//! load it (or start a fresh one in the configured scenario), and build the
//! terminal collaborators. [`SessionInit`] does this once so the commands only
//! contain their own logic.
//!
//! # Initialization Steps
//! 1. **Session location**: Explicit `--session` path, else the per-directory cache file
//! 2. **Session loading**: Load and validate the stored state, or start fresh
//! 3. **Collaborators**: Terminal presenter honouring the suggestion setting

use crate::core::{
    config::SandboxConfig,
    dirs::default_session_path,
    error::Result,
    output::TerminalPresenter,
    session::Session,
    store::SessionStore,
};
use std::env;
use std::path::PathBuf;

/// Everything a subcommand needs to operate on a session
pub struct SessionContext {
    pub session: Session,
    /// `None` for an in-memory session
    pub store: Option<SessionStore>,
    pub config: SandboxConfig,
}

pub struct SessionInit;

impl SessionInit {
    /// Load the stored session, or create a fresh one in the configured scenario
    pub fn initialize(config: SandboxConfig, session_path: Option<PathBuf>) -> Result<SessionContext> {
        let path = match session_path {
            Some(path) => path,
            None => default_session_path(&env::current_dir()?)?,
        };
        let store = SessionStore::new(path);

        let session = match store.load()? {
            Some(file) => {
                log::debug!("Resuming session from {}", store.path().display());
                Session::restore(file.state, file.stats, config.host_policy())
            }
            None => {
                log::debug!(
                    "No stored session, starting a fresh {} scenario",
                    config.default_scenario
                );
                Session::new(config.default_scenario, config.host_policy())
            }
        };

        Ok(SessionContext {
            session,
            store: Some(store),
            config,
        })
    }

    /// A fresh session that is never written to disk
    pub fn in_memory(config: SandboxConfig) -> SessionContext {
        SessionContext {
            session: Session::new(config.default_scenario, config.host_policy()),
            store: None,
            config,
        }
    }
}

impl SessionContext {
    /// Write the session to its store; a no-op for in-memory sessions
    pub fn save(&self) -> Result<()> {
        match &self.store {
            Some(store) => store.save(self.session.state(), self.session.stats()),
            None => Ok(()),
        }
    }

    pub fn presenter(&self) -> TerminalPresenter {
        TerminalPresenter {
            show_suggestions: self.config.show_suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Scenario;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_without_stored_session_uses_config_scenario() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = SandboxConfig {
            default_scenario: Scenario::Remote,
            ..Default::default()
        };

        let context =
            SessionInit::initialize(config, Some(temp_dir.path().join("session.json")))?;
        assert_eq!(context.session.state().scenario, Scenario::Remote);
        assert!(!context.session.state().initialized);
        Ok(())
    }

    #[test]
    fn test_initialize_resumes_saved_session() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("session.json");

        let mut context = SessionInit::initialize(SandboxConfig::default(), Some(path.clone()))?;
        context.session.execute("touch a.txt")?;
        context.session.execute("git init")?;
        context.save()?;

        let resumed = SessionInit::initialize(SandboxConfig::default(), Some(path))?;
        assert!(resumed.session.state().initialized);
        assert!(resumed.session.state().file("a.txt").is_some());
        assert_eq!(resumed.session.stats().commands_executed, 2);
        Ok(())
    }

    #[test]
    fn test_in_memory_session_saves_nothing() -> Result<()> {
        let mut context = SessionInit::in_memory(SandboxConfig::default());
        context.session.execute("touch a.txt")?;
        context.save()?;
        assert!(context.store.is_none());
        Ok(())
    }
}
