//! Core functionality for the git-sandbox tool.
//!
//! This module provides the simulated repository, command parsing, sessions,
//! persistence and the terminal presentation of the four zones.

pub mod colors;
pub mod command;
pub mod command_init;
pub mod config;
pub mod dirs;
pub mod error;
pub mod model;
pub mod output;
pub mod remote;
pub mod session;
pub mod state;
pub mod store;
pub mod suggestions;
pub mod templates;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{ErrorKind, Result, SandboxError};

// === State ===
// Files, commits and the four zones they can sit in
pub use state::{Commit, CommitId, FileEntry, RepositoryState, Scenario, Zone};

// === Command parsing ===
// Turns a raw input line like `git add .` into a typed command
pub use command::{AddTarget, Command, CommandParser};

// === Repository model ===
// Validates and applies commands to the state
pub use model::{Change, Outcome, RepositoryModel};
pub use remote::HostPolicy;

// === Suggestions ===
pub use suggestions::{derive_suggestions, Suggestion};

// === Sessions ===
// Session orchestration, presentation seams and persistence
pub use command_init::{SessionContext, SessionInit};
pub use config::SandboxConfig;
pub use session::{Notifier, Presenter, Session, SessionStats};
pub use store::{SessionFile, SessionStore};

// === UI templates ===
// Template system for consistent output formatting with colors
pub use templates::{
    render_template, render_template_plain, strip_ansi_codes, TemplateContext, Templates, TEMPLATES,
};

// === Color system ===
pub use colors::{get_colored_name, get_zone_color_style, get_zone_header};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_error, print_info, print_section_header, print_success};
