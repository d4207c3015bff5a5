//! Git Sandbox - an interactive simulator for learning the basic git workflow.
//!
//! Nothing here touches a real repository. The library models four zones
//! (working tree, staging area, local history, remote history) and the handful
//! of commands that move files between them, along with the suggestions that
//! guide a learner to the next legal step.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Command parsing for the simulated shell
//! - The repository model and its state
//! - Next-step suggestions
//! - Sessions, presentation seams and persistence
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    derive_suggestions,
    render_template,
    render_template_plain,
    strip_ansi_codes,

    AddTarget,
    Change,
    // Command parsing
    Command,
    CommandParser,
    Commit,
    CommitId,
    // Error handling
    ErrorKind,
    FileEntry,
    HostPolicy,
    Notifier,
    Outcome,
    Presenter,
    // Repository model
    RepositoryModel,
    // State
    RepositoryState,
    Result,
    SandboxConfig,
    SandboxError,
    Scenario,
    // Sessions
    Session,
    SessionStats,
    SessionStore,
    Suggestion,

    TemplateContext,
    // UI and formatting
    Templates,
    Zone,
    TEMPLATES,
};
