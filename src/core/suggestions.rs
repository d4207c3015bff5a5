//! Advisory "what could I run next" hints derived from repository state.

use crate::core::state::{RepositoryState, Scenario};
use std::fmt;

pub const EXAMPLE_CLONE_URL: &str = "https://github.com/example/repo.git";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub command: String,
    pub description: &'static str,
}

impl Suggestion {
    fn new(command: impl Into<String>, description: &'static str) -> Self {
        Self {
            command: command.into(),
            description,
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command)
    }
}

/// Derive the ordered list of example commands for `state`.
///
/// Pure and deterministic. The file-creation example is always first; the
/// others follow the files, commits and scenario of `state`.
pub fn derive_suggestions(state: &RepositoryState) -> Vec<Suggestion> {
    let mut suggestions = vec![Suggestion::new("touch file.txt", "create a new file")];

    if !state.initialized {
        suggestions.push(Suggestion::new("git init", "start a repository here"));
    } else {
        if let Some(first) = state.unstaged_files().next() {
            suggestions.push(Suggestion::new("git add .", "stage every file"));
            suggestions.push(Suggestion::new(format!("git add {first}"), "stage one file"));
        }

        if let Some(first) = state.staged_files().next() {
            suggestions.push(Suggestion::new(
                "git commit -m \"Your message\"",
                "record the staged files",
            ));
            suggestions.push(Suggestion::new(
                format!("git restore --staged {first}"),
                "take a file back out of staging",
            ));
        }

        if state.unpushed_commits().next().is_some() {
            suggestions.push(Suggestion::new("git push", "publish local commits"));
        }

        if state.scenario == Scenario::Remote && !state.cloned {
            suggestions.push(Suggestion::new(
                format!("git clone {EXAMPLE_CLONE_URL}"),
                "copy a remote repository",
            ));
        }
    }

    if suggestions.is_empty() {
        suggestions.push(Suggestion::new("touch README.md", "create a new file"));
        suggestions.push(Suggestion::new("git init", "start a repository here"));
    }

    suggestions
}
