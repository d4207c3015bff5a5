//! Session driver and the presentation seams.
//!
//! A [`Session`] ties a [`RepositoryModel`] to the raw-text command surface:
//! it parses a line, dispatches it, keeps [`SessionStats`], and hands the
//! result to whatever [`Presenter`] and [`Notifier`] the caller supplies.
//!
//! Collaborators run strictly after the model has finished. A presenter that
//! fails is logged and otherwise ignored; it can never roll back or corrupt
//! the repository state.

use crate::core::{
    command::{Command, CommandParser},
    error::{Result, SandboxError},
    model::{Outcome, RepositoryModel},
    remote::HostPolicy,
    state::{RepositoryState, Scenario},
    suggestions::Suggestion,
};
use serde::{Deserialize, Serialize};
use std::io;

/// Renders the four zones from an immutable snapshot
pub trait Presenter {
    fn render(&mut self, state: &RepositoryState, suggestions: &[Suggestion]) -> io::Result<()>;
}

/// Shows human-readable results
pub trait Notifier {
    fn notify_success(&mut self, outcome: &Outcome);
    fn notify_error(&mut self, error: &SandboxError);
}

/// Progress counters for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub commands_executed: u64,
    pub files_created: u64,
    pub commits_created: u64,
    pub pushes_completed: u64,
}

impl SessionStats {
    fn record(&mut self, command: &Command) {
        self.commands_executed += 1;
        match command {
            Command::Touch { .. } => self.files_created += 1,
            Command::Commit { .. } => self.commits_created += 1,
            Command::Push => self.pushes_completed += 1,
            _ => {}
        }
    }
}

pub struct Session {
    model: RepositoryModel,
    stats: SessionStats,
}

impl Session {
    pub fn new(scenario: Scenario, host_policy: HostPolicy) -> Self {
        Self {
            model: RepositoryModel::new(scenario).with_host_policy(host_policy),
            stats: SessionStats::default(),
        }
    }

    /// Resume a session from persisted parts
    pub fn restore(state: RepositoryState, stats: SessionStats, host_policy: HostPolicy) -> Self {
        Self {
            model: RepositoryModel::from_state(state).with_host_policy(host_policy),
            stats,
        }
    }

    pub fn state(&self) -> &RepositoryState {
        self.model.snapshot()
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.model.suggestions()
    }

    /// Parse and run one input line.
    ///
    /// Syntax errors are returned before the model is touched; domain failures
    /// come back from the model with the state unchanged.
    pub fn execute(&mut self, line: &str) -> Result<Outcome> {
        let command = CommandParser::parse(line)?;
        let outcome = self.model.apply(&command)?;
        self.stats.record(&command);
        log::debug!(
            "'{}' succeeded with {} change(s)",
            command,
            outcome.changes.len()
        );
        Ok(outcome)
    }

    pub fn switch_scenario(&mut self, scenario: Scenario) -> Outcome {
        self.model.switch_scenario(scenario)
    }

    /// Run a line and report it through the collaborators
    pub fn execute_and_report<P, N>(
        &mut self,
        line: &str,
        presenter: &mut P,
        notifier: &mut N,
    ) -> Result<Outcome>
    where
        P: Presenter + ?Sized,
        N: Notifier + ?Sized,
    {
        let result = self.execute(line);
        match &result {
            Ok(outcome) => {
                notifier.notify_success(outcome);
                self.present(presenter);
            }
            Err(error) => {
                log::debug!(
                    "'{}' failed: {:?} {}",
                    line.trim(),
                    error.kind(),
                    error.detail().unwrap_or_default()
                );
                notifier.notify_error(error);
            }
        }
        result
    }

    /// Render the current state; rendering failures are logged only
    pub fn present<P>(&self, presenter: &mut P)
    where
        P: Presenter + ?Sized,
    {
        let suggestions = self.suggestions();
        if let Err(e) = presenter.render(self.state(), &suggestions) {
            log::warn!("Presenter failed (state is unaffected): {e}");
        }
    }
}
