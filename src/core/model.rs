//! The repository state machine.
//!
//! [`RepositoryModel`] exclusively owns a [`RepositoryState`] and exposes one
//! method per simulated command. Every method validates completely before it
//! mutates anything, so a failed command leaves the state exactly as it was.
//!
//! # Public API
//! - [`RepositoryModel`]: Owner of the state, one operation per command
//! - [`Outcome`]: Success message plus the list of [`Change`]s applied
//! - [`Change`]: A single state delta, for presenters that animate transitions

use crate::core::{
    command::{AddTarget, Command},
    error::{Result, SandboxError},
    remote::HostPolicy,
    state::{Commit, CommitId, FileEntry, RepositoryState, Scenario, Zone},
    suggestions::{derive_suggestions, Suggestion},
};

/// Files seeded into the working tree by a clone
pub const CLONE_SEED_FILES: [&str; 4] = ["README.md", "index.html", "styles.css", "app.js"];

/// Message of the synthetic commit created by a clone
pub const CLONE_COMMIT_MESSAGE: &str = "Initial commit";

/// One state delta produced by a successful operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    RepositoryInitialized,
    RepositoryCloned { url: String },
    FileCreated { name: String },
    FileRemoved { name: String },
    /// A file moved between the working tree and the staging area
    FileMoved { name: String, from: Zone, to: Zone },
    CommitCreated { id: CommitId },
    CommitPushed { id: CommitId },
    ScenarioSwitched { scenario: Scenario },
}

/// Result of a successful operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub message: String,
    pub changes: Vec<Change>,
}

impl Outcome {
    fn new(message: impl Into<String>, changes: Vec<Change>) -> Self {
        Self {
            message: message.into(),
            changes,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RepositoryModel {
    state: RepositoryState,
    host_policy: HostPolicy,
}

impl RepositoryModel {
    pub fn new(scenario: Scenario) -> Self {
        Self::from_state(RepositoryState::new(scenario))
    }

    /// Resume from a previously captured state
    pub fn from_state(state: RepositoryState) -> Self {
        Self {
            state,
            host_policy: HostPolicy::default(),
        }
    }

    pub fn with_host_policy(mut self, host_policy: HostPolicy) -> Self {
        self.host_policy = host_policy;
        self
    }

    /// Read-only view of the current state
    pub fn snapshot(&self) -> &RepositoryState {
        &self.state
    }

    /// Dispatch a parsed command to its operation
    pub fn apply(&mut self, command: &Command) -> Result<Outcome> {
        log::debug!("Applying command: {command}");
        match command {
            Command::Touch { name } => self.create_file(name),
            Command::Init => self.git_init(),
            Command::Add {
                target: AddTarget::All,
            } => self.git_add_all(),
            Command::Add {
                target: AddTarget::File(name),
            } => self.git_add(name),
            Command::Commit { message } => self.git_commit(message),
            Command::Push => self.git_push(),
            Command::Clone { url } => self.git_clone(url),
            Command::Restore {
                name,
                staged: false,
            } => self.git_restore(name),
            Command::Restore { name, staged: true } => self.git_restore_staged(name),
        }
    }

    /// Discard everything and start over in `scenario`
    pub fn switch_scenario(&mut self, scenario: Scenario) -> Outcome {
        log::debug!("Switching scenario to {scenario}");
        self.state = RepositoryState::new(scenario);

        let message = match scenario {
            Scenario::Remote => {
                "Switched to remote repository scenario. Try \"git clone https://github.com/example/repo.git\""
            }
            Scenario::Local => {
                "Switched to local workflow scenario. Start by creating files with \"touch filename\""
            }
        };
        Outcome::new(message, vec![Change::ScenarioSwitched { scenario }])
    }

    pub fn suggestions(&self) -> Vec<Suggestion> {
        derive_suggestions(&self.state)
    }

    pub fn create_file(&mut self, name: &str) -> Result<Outcome> {
        if name.is_empty() {
            return Err(SandboxError::EmptyFileName);
        }
        if self.state.files.contains_key(name) {
            return Err(SandboxError::duplicate_file(name));
        }

        self.state
            .files
            .insert(name.to_string(), FileEntry::default());

        Ok(Outcome::new(
            format!("Created file: {name}"),
            vec![Change::FileCreated {
                name: name.to_string(),
            }],
        ))
    }

    pub fn git_init(&mut self) -> Result<Outcome> {
        if self.state.initialized {
            return Err(SandboxError::AlreadyInitialized);
        }

        self.state.initialized = true;

        Ok(Outcome::new(
            "Initialized empty Git repository",
            vec![Change::RepositoryInitialized],
        ))
    }

    pub fn git_clone(&mut self, url: &str) -> Result<Outcome> {
        if self.state.initialized {
            return Err(SandboxError::AlreadyInitialized);
        }
        if !self.host_policy.accepts(url) {
            return Err(SandboxError::invalid_remote_url(url));
        }

        let id = self.allocate_commit_id()?;
        let mut changes = vec![Change::RepositoryCloned {
            url: url.to_string(),
        }];

        self.state.initialized = true;
        self.state.cloned = true;

        // a file touched before the clone is replaced, not created
        for name in CLONE_SEED_FILES {
            if self
                .state
                .files
                .insert(name.to_string(), FileEntry::cloned())
                .is_none()
            {
                changes.push(Change::FileCreated {
                    name: name.to_string(),
                });
            }
        }

        self.state.commits.push(Commit {
            id,
            message: CLONE_COMMIT_MESSAGE.to_string(),
            files: CLONE_SEED_FILES.iter().map(|name| name.to_string()).collect(),
            pushed: true,
        });
        changes.push(Change::CommitCreated { id });

        Ok(Outcome::new(format!("Cloned repository from {url}"), changes))
    }

    pub fn git_add(&mut self, name: &str) -> Result<Outcome> {
        self.ensure_initialized()?;
        let entry = self
            .state
            .files
            .get_mut(name)
            .ok_or_else(|| SandboxError::file_not_found(name))?;
        if entry.staged {
            return Err(SandboxError::already_staged(name));
        }

        entry.staged = true;

        Ok(Outcome::new(
            format!("Added {name} to staging area"),
            vec![staged_change(name)],
        ))
    }

    pub fn git_add_all(&mut self) -> Result<Outcome> {
        self.ensure_initialized()?;

        let changes: Vec<Change> = self
            .state
            .files
            .iter_mut()
            .filter(|(_, entry)| !entry.staged)
            .map(|(name, entry)| {
                entry.staged = true;
                staged_change(name)
            })
            .collect();

        if changes.is_empty() {
            return Err(SandboxError::NothingToAdd);
        }

        Ok(Outcome::new(
            format!("Added {} file(s) to staging area", changes.len()),
            changes,
        ))
    }

    /// Record every staged file in a new commit.
    ///
    /// A file that was committed before and staged again is included as well;
    /// `staged` and `committed` are independent flags.
    pub fn git_commit(&mut self, message: &str) -> Result<Outcome> {
        self.ensure_initialized()?;

        let staged: Vec<String> = self.state.staged_files().map(str::to_string).collect();
        if staged.is_empty() {
            return Err(SandboxError::NothingStaged);
        }

        let message = message.trim();
        if message.is_empty() {
            return Err(SandboxError::EmptyCommitMessage);
        }

        let id = self.allocate_commit_id()?;
        for name in &staged {
            if let Some(entry) = self.state.files.get_mut(name) {
                entry.staged = false;
                entry.committed = true;
            }
        }
        self.state.commits.push(Commit {
            id,
            message: message.to_string(),
            files: staged,
            pushed: false,
        });

        Ok(Outcome::new(
            format!("Committed changes: \"{message}\""),
            vec![Change::CommitCreated { id }],
        ))
    }

    pub fn git_push(&mut self) -> Result<Outcome> {
        self.ensure_initialized()?;
        if self.state.scenario == Scenario::Remote && !self.state.cloned {
            return Err(SandboxError::CloneRequired);
        }
        if self.state.unpushed_commits().next().is_none() {
            return Err(SandboxError::NothingToPush);
        }

        let RepositoryState { commits, files, .. } = &mut self.state;
        let mut changes = Vec::new();
        for commit in commits.iter_mut().filter(|commit| !commit.pushed) {
            commit.pushed = true;
            for name in &commit.files {
                if let Some(entry) = files.get_mut(name) {
                    entry.pushed = true;
                }
            }
            changes.push(Change::CommitPushed { id: commit.id });
        }

        Ok(Outcome::new(
            format!("Pushed {} commit(s) to remote repository", changes.len()),
            changes,
        ))
    }

    /// Discard working-tree changes to `name`.
    ///
    /// An untracked file is deleted outright. A tracked file only loses any
    /// pending staging; its committed history is untouched.
    pub fn git_restore(&mut self, name: &str) -> Result<Outcome> {
        self.ensure_initialized()?;
        let entry = *self
            .state
            .files
            .get(name)
            .ok_or_else(|| SandboxError::file_not_found(name))?;

        if entry.is_untracked() {
            self.state.files.shift_remove(name);
            return Ok(Outcome::new(
                format!("Deleted untracked file: {name}"),
                vec![Change::FileRemoved {
                    name: name.to_string(),
                }],
            ));
        }

        let mut changes = Vec::new();
        if entry.staged {
            self.set_staged(name, false);
            changes.push(unstaged_change(name));
        }

        Ok(Outcome::new(format!("Reverted changes to: {name}"), changes))
    }

    pub fn git_restore_staged(&mut self, name: &str) -> Result<Outcome> {
        self.ensure_initialized()?;
        let entry = self
            .state
            .files
            .get(name)
            .ok_or_else(|| SandboxError::file_not_found(name))?;
        if !entry.staged {
            return Err(SandboxError::not_staged(name));
        }

        self.set_staged(name, false);

        Ok(Outcome::new(
            format!("Unstaged: {name}"),
            vec![unstaged_change(name)],
        ))
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.state.initialized {
            Ok(())
        } else {
            Err(SandboxError::NotInitialized)
        }
    }

    /// Reserve the next commit id. Must run before any other mutation.
    fn allocate_commit_id(&mut self) -> Result<CommitId> {
        let id = self.state.next_commit_id;
        self.state.next_commit_id = id
            .checked_add(1)
            .ok_or_else(|| SandboxError::invariant_violation("commit ids exhausted"))?;
        Ok(id)
    }

    fn set_staged(&mut self, name: &str, staged: bool) {
        if let Some(entry) = self.state.files.get_mut(name) {
            entry.staged = staged;
        }
    }
}

fn staged_change(name: &str) -> Change {
    Change::FileMoved {
        name: name.to_string(),
        from: Zone::WorkingTree,
        to: Zone::StagingArea,
    }
}

fn unstaged_change(name: &str) -> Change {
    Change::FileMoved {
        name: name.to_string(),
        from: Zone::StagingArea,
        to: Zone::WorkingTree,
    }
}
