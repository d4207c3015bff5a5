//! Repository state data structures.
//!
//! This module defines the value types the repository model owns and the
//! presentation layer reads. A [`RepositoryState`] is the complete description
//! of one scenario session: which files exist, where each one sits in the
//! four-zone flow, and the linear commit history.
//!
//! # Public API
//! - [`Scenario`]: Local workflow or remote (clone-gated) workflow
//! - [`FileEntry`]: Flags for one simulated file
//! - [`Commit`]: One recorded commit
//! - [`RepositoryState`]: The aggregate, with zone queries and invariant checks
//! - [`Zone`]: The four places a file or commit can be shown in

use crate::core::error::{Result, SandboxError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Commit identifiers, allocated from 1 upwards and never reused
pub type CommitId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Plain local workflow, push goes to an implicit remote
    #[default]
    Local,
    /// Remote workflow, push requires the repository to come from a clone
    Remote,
}

impl Scenario {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Local => "local",
            Scenario::Remote => "remote",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = SandboxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(Scenario::Local),
            "remote" => Ok(Scenario::Remote),
            _ => Err(SandboxError::unknown_scenario(s)),
        }
    }
}

/// The four areas of the workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    WorkingTree,
    StagingArea,
    LocalHistory,
    RemoteHistory,
}

impl Zone {
    pub const ALL: [Zone; 4] = [
        Zone::WorkingTree,
        Zone::StagingArea,
        Zone::LocalHistory,
        Zone::RemoteHistory,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Zone::WorkingTree => "Working Directory",
            Zone::StagingArea => "Staging Area",
            Zone::LocalHistory => "Local Repository",
            Zone::RemoteHistory => "Remote Repository",
        }
    }

    pub fn empty_label(&self) -> &'static str {
        match self {
            Zone::WorkingTree => "No files yet",
            Zone::StagingArea => "No files staged",
            Zone::LocalHistory => "No commits yet",
            Zone::RemoteHistory => "No pushed commits",
        }
    }
}

/// One named file in the simulated tree. The name is the key in
/// [`RepositoryState::files`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileEntry {
    pub staged: bool,
    pub committed: bool,
    pub pushed: bool,
}

impl FileEntry {
    /// A file that arrived through a clone: already part of pushed history
    pub fn cloned() -> Self {
        Self {
            staged: false,
            committed: true,
            pushed: true,
        }
    }

    /// The zone the file is displayed in
    pub fn zone(&self) -> Zone {
        if self.staged {
            Zone::StagingArea
        } else {
            Zone::WorkingTree
        }
    }

    /// Never part of any commit
    pub fn is_untracked(&self) -> bool {
        !self.committed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub id: CommitId,
    pub message: String,
    pub files: Vec<String>,
    pub pushed: bool,
}

impl Commit {
    /// Display identifier, zero padded to six digits
    pub fn short_id(&self) -> String {
        format!("#{:06}", self.id)
    }

    pub fn zone(&self) -> Zone {
        if self.pushed {
            Zone::RemoteHistory
        } else {
            Zone::LocalHistory
        }
    }
}

/// The complete state of one scenario session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryState {
    pub scenario: Scenario,
    pub initialized: bool,
    pub cloned: bool,
    pub files: IndexMap<String, FileEntry>,
    pub commits: Vec<Commit>,
    pub next_commit_id: CommitId,
}

impl Default for RepositoryState {
    fn default() -> Self {
        Self::new(Scenario::default())
    }
}

impl RepositoryState {
    /// A fresh, uninitialized state for the given scenario
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            initialized: false,
            cloned: false,
            files: IndexMap::new(),
            commits: Vec::new(),
            next_commit_id: 1,
        }
    }

    pub fn file(&self, name: &str) -> Option<&FileEntry> {
        self.files.get(name)
    }

    /// File names shown in the working tree, in display order
    pub fn unstaged_files(&self) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .filter(|(_, entry)| !entry.staged)
            .map(|(name, _)| name.as_str())
    }

    /// File names shown in the staging area, in display order
    pub fn staged_files(&self) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .filter(|(_, entry)| entry.staged)
            .map(|(name, _)| name.as_str())
    }

    /// Commits not yet pushed (local history)
    pub fn unpushed_commits(&self) -> impl Iterator<Item = &Commit> {
        self.commits.iter().filter(|commit| !commit.pushed)
    }

    /// Commits already pushed (remote history)
    pub fn pushed_commits(&self) -> impl Iterator<Item = &Commit> {
        self.commits.iter().filter(|commit| commit.pushed)
    }

    /// Verify the structural invariants of the state.
    ///
    /// Holds after every model operation; used when loading a persisted
    /// session, where the data did not come from the model.
    pub fn check_invariants(&self) -> Result<()> {
        for (name, entry) in &self.files {
            if name.is_empty() {
                return Err(SandboxError::invariant_violation("empty file name"));
            }
            if entry.pushed && !entry.committed {
                return Err(SandboxError::invariant_violation(format!(
                    "file '{name}' is pushed but never committed"
                )));
            }
            if entry.committed && !self.initialized {
                return Err(SandboxError::invariant_violation(format!(
                    "file '{name}' is committed in an uninitialized repository"
                )));
            }
        }

        if self.cloned && !self.initialized {
            return Err(SandboxError::invariant_violation(
                "cloned repository is not initialized",
            ));
        }

        let mut previous: CommitId = 0;
        for commit in &self.commits {
            if commit.id <= previous {
                return Err(SandboxError::invariant_violation(format!(
                    "commit id {} is not strictly increasing",
                    commit.id
                )));
            }
            previous = commit.id;

            if commit.message.trim().is_empty() {
                return Err(SandboxError::invariant_violation(format!(
                    "commit {} has an empty message",
                    commit.id
                )));
            }

            let mut seen = HashSet::new();
            if !commit.files.iter().all(|name| seen.insert(name.as_str())) {
                return Err(SandboxError::invariant_violation(format!(
                    "commit {} lists a file twice",
                    commit.id
                )));
            }
        }

        if self.next_commit_id <= previous {
            return Err(SandboxError::invariant_violation(format!(
                "next commit id {} would reuse an existing id",
                self.next_commit_id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = RepositoryState::new(Scenario::Remote);
        assert_eq!(state.scenario, Scenario::Remote);
        assert!(!state.initialized);
        assert!(!state.cloned);
        assert!(state.files.is_empty());
        assert!(state.commits.is_empty());
        assert_eq!(state.next_commit_id, 1);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_scenario_from_str() {
        assert_eq!("LOCAL".parse::<Scenario>().unwrap(), Scenario::Local);
        assert_eq!("remote".parse::<Scenario>().unwrap(), Scenario::Remote);
        assert!("staging".parse::<Scenario>().is_err());
    }

    #[test]
    fn test_scenario_serializes_lowercase() {
        let json = serde_json::to_string(&Scenario::Remote).unwrap();
        assert_eq!(json, "\"remote\"");
    }

    #[test]
    fn test_file_zone_follows_staged_flag() {
        let mut entry = FileEntry::default();
        assert_eq!(entry.zone(), Zone::WorkingTree);
        entry.staged = true;
        assert_eq!(entry.zone(), Zone::StagingArea);
    }

    #[test]
    fn test_commit_short_id_is_padded() {
        let commit = Commit {
            id: 42,
            message: "x".to_string(),
            files: vec![],
            pushed: false,
        };
        assert_eq!(commit.short_id(), "#000042");
        assert_eq!(commit.zone(), Zone::LocalHistory);
    }

    #[test]
    fn test_zone_queries_preserve_insertion_order() {
        let mut state = RepositoryState::new(Scenario::Local);
        state.initialized = true;
        state.files.insert("b.txt".into(), FileEntry::default());
        state.files.insert(
            "a.txt".into(),
            FileEntry {
                staged: true,
                ..Default::default()
            },
        );
        state.files.insert("c.txt".into(), FileEntry::default());

        assert_eq!(
            state.unstaged_files().collect::<Vec<_>>(),
            vec!["b.txt", "c.txt"]
        );
        assert_eq!(state.staged_files().collect::<Vec<_>>(), vec!["a.txt"]);
    }

    #[test]
    fn test_invariants_reject_pushed_without_commit() {
        let mut state = RepositoryState::new(Scenario::Local);
        state.initialized = true;
        state.files.insert(
            "a.txt".into(),
            FileEntry {
                staged: false,
                committed: false,
                pushed: true,
            },
        );
        let err = state.check_invariants().unwrap_err();
        assert!(err.to_string().contains("pushed but never committed"));
    }

    #[test]
    fn test_invariants_reject_reused_commit_id() {
        let mut state = RepositoryState::new(Scenario::Local);
        state.initialized = true;
        state.commits.push(Commit {
            id: 3,
            message: "first".into(),
            files: vec!["a.txt".into()],
            pushed: false,
        });
        state.next_commit_id = 2;
        assert!(state.check_invariants().is_err());
    }

    #[test]
    fn test_invariants_reject_duplicate_files_in_commit() {
        let mut state = RepositoryState::new(Scenario::Local);
        state.initialized = true;
        state.commits.push(Commit {
            id: 1,
            message: "dup".into(),
            files: vec!["a.txt".into(), "a.txt".into()],
            pushed: false,
        });
        state.next_commit_id = 2;
        assert!(state.check_invariants().is_err());
    }
}
