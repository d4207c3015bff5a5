//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`SandboxError`] which covers every failure git-sandbox can
//! report. It uses `thiserror` for ergonomic error definitions and includes
//! specialized error constructors for common failure scenarios.
//!
//! # Public API
//! - [`SandboxError`]: Main error enum covering all failure modes
//! - [`ErrorKind`]: Flat classification of the expected command failures
//! - [`Result<T>`]: Type alias for `std::result::Result<T, SandboxError>`
//!
//! # Error Categories
//! - **Command syntax**: Usage errors and unknown commands, raised before the model runs
//! - **Repository rules**: Illegal transitions rejected by the repository model
//! - **Session storage**: I/O and serialization failures around the persisted session

use std::path::PathBuf;
use thiserror::Error;

/// Classification of the expected (non-exceptional) command outcomes.
///
/// Every domain variant of [`SandboxError`] maps onto exactly one kind; callers
/// that only care about *what* went wrong match on this instead of the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UsageError,
    UnknownCommand,
    InvalidArgument,
    DuplicateFile,
    FileNotFound,
    AlreadyStaged,
    NotStaged,
    NothingToAdd,
    NothingStaged,
    NothingToPush,
    NotInitialized,
    AlreadyInitialized,
    CloneRequired,
}

/// Domain-specific error types for git-sandbox
#[derive(Error, Debug)]
pub enum SandboxError {
    // Command syntax errors
    #[error("Usage: {usage}")]
    Usage { usage: &'static str },

    #[error("Command not recognized: {command}")]
    UnknownCommand { command: String },

    #[error("Git command not supported: {command}")]
    UnknownGitCommand { command: String },

    // Argument errors
    #[error("File name must not be empty")]
    EmptyFileName,

    #[error("Please provide a commit message")]
    EmptyCommitMessage,

    #[error("Please provide a valid Git repository URL: {url}")]
    InvalidRemoteUrl { url: String },

    #[error("Unknown scenario: {name}. Use 'local' or 'remote'")]
    UnknownScenario { name: String },

    // Working tree and staging errors
    #[error("File already exists: {name}")]
    DuplicateFile { name: String },

    #[error("File not found: {name}")]
    FileNotFound { name: String },

    #[error("File already staged: {name}")]
    AlreadyStaged { name: String },

    #[error("File is not staged: {name}")]
    NotStaged { name: String },

    #[error("No unstaged files to add")]
    NothingToAdd,

    #[error("Nothing to commit (no files staged)")]
    NothingStaged,

    #[error("Nothing to push (all commits are up to date)")]
    NothingToPush,

    // Repository lifecycle errors
    #[error("Please initialize repository with git init first")]
    NotInitialized,

    #[error("Repository already initialized. Switch scenario to start fresh")]
    AlreadyInitialized,

    #[error("Please clone a repository first or switch to local scenario")]
    CloneRequired,

    // Session storage errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not determine the {kind} directory")]
    DirectoryNotFound { kind: &'static str },

    #[error("Failed to write session file '{path}': {source}")]
    SessionWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read session file '{path}': {source}")]
    SessionReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse session file '{path}': {source}")]
    SessionParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Session file '{path}' is inconsistent: {reason}")]
    CorruptSession { path: PathBuf, reason: String },

    #[error("Invalid repository state: {reason}")]
    InvariantViolation { reason: String },
}

/// Convenience type alias for Results using SandboxError
pub type Result<T> = std::result::Result<T, SandboxError>;

impl SandboxError {
    /// The classification of this error, or `None` for storage failures
    pub fn kind(&self) -> Option<ErrorKind> {
        let kind = match self {
            Self::Usage { .. } => ErrorKind::UsageError,
            Self::UnknownCommand { .. } | Self::UnknownGitCommand { .. } => {
                ErrorKind::UnknownCommand
            }
            Self::EmptyFileName
            | Self::EmptyCommitMessage
            | Self::InvalidRemoteUrl { .. }
            | Self::UnknownScenario { .. } => ErrorKind::InvalidArgument,
            Self::DuplicateFile { .. } => ErrorKind::DuplicateFile,
            Self::FileNotFound { .. } => ErrorKind::FileNotFound,
            Self::AlreadyStaged { .. } => ErrorKind::AlreadyStaged,
            Self::NotStaged { .. } => ErrorKind::NotStaged,
            Self::NothingToAdd => ErrorKind::NothingToAdd,
            Self::NothingStaged => ErrorKind::NothingStaged,
            Self::NothingToPush => ErrorKind::NothingToPush,
            Self::NotInitialized => ErrorKind::NotInitialized,
            Self::AlreadyInitialized => ErrorKind::AlreadyInitialized,
            Self::CloneRequired => ErrorKind::CloneRequired,
            Self::Io(_)
            | Self::Json(_)
            | Self::DirectoryNotFound { .. }
            | Self::SessionWriteFailed { .. }
            | Self::SessionReadFailed { .. }
            | Self::SessionParseFailed { .. }
            | Self::CorruptSession { .. }
            | Self::InvariantViolation { .. } => return None,
        };
        Some(kind)
    }

    /// The offending name or URL, when the failure concerns one
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::UnknownCommand { command } | Self::UnknownGitCommand { command } => {
                Some(command)
            }
            Self::InvalidRemoteUrl { url } => Some(url),
            Self::UnknownScenario { name }
            | Self::DuplicateFile { name }
            | Self::FileNotFound { name }
            | Self::AlreadyStaged { name }
            | Self::NotStaged { name } => Some(name),
            _ => None,
        }
    }

    /// True for failures that are expected outcomes of a user command
    pub fn is_domain(&self) -> bool {
        self.kind().is_some()
    }

    /// Create a usage error carrying the expected command shape
    pub fn usage(usage: &'static str) -> Self {
        Self::Usage { usage }
    }

    /// Create an unknown command error
    pub fn unknown_command(command: impl Into<String>) -> Self {
        Self::UnknownCommand {
            command: command.into(),
        }
    }

    /// Create an unknown git sub-command error
    pub fn unknown_git_command(command: impl Into<String>) -> Self {
        Self::UnknownGitCommand {
            command: command.into(),
        }
    }

    /// Create an invalid remote URL error
    pub fn invalid_remote_url(url: impl Into<String>) -> Self {
        Self::InvalidRemoteUrl { url: url.into() }
    }

    /// Create an unknown scenario error
    pub fn unknown_scenario(name: impl Into<String>) -> Self {
        Self::UnknownScenario { name: name.into() }
    }

    /// Create a duplicate file error
    pub fn duplicate_file(name: impl Into<String>) -> Self {
        Self::DuplicateFile { name: name.into() }
    }

    /// Create a file not found error
    pub fn file_not_found(name: impl Into<String>) -> Self {
        Self::FileNotFound { name: name.into() }
    }

    /// Create an already staged error
    pub fn already_staged(name: impl Into<String>) -> Self {
        Self::AlreadyStaged { name: name.into() }
    }

    /// Create a not staged error
    pub fn not_staged(name: impl Into<String>) -> Self {
        Self::NotStaged { name: name.into() }
    }

    /// Create a session write failed error
    pub fn session_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SessionWriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a session read failed error
    pub fn session_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SessionReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a session parse failed error
    pub fn session_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::SessionParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a corrupt session error
    pub fn corrupt_session(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::CorruptSession {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invariant violation error
    pub fn invariant_violation(reason: impl Into<String>) -> Self {
        Self::InvariantViolation {
            reason: reason.into(),
        }
    }
}
