//! Unified output formatting utilities for consistent CLI presentation.
//!
//! This module provides the standard message printers plus the terminal
//! implementations of the [`Presenter`] and [`Notifier`] seams.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, green for success, zone colors for items
//! - **Standardized spacing**: Newline before and after all command outputs
//! - **Snapshot rendering**: The presenter only ever reads an immutable state

use crate::core::{
    colors::get_zone_header,
    error::SandboxError,
    model::Outcome,
    session::{Notifier, Presenter, SessionStats},
    state::{RepositoryState, Zone},
    suggestions::Suggestion,
    templates::{render_template, TemplateContext, TEMPLATES},
};
use colored::*;
use std::io::{self, Write};

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Write the four zones of `state` followed by the suggestions
pub fn write_zones<W: Write>(
    out: &mut W,
    state: &RepositoryState,
    suggestions: &[Suggestion],
) -> io::Result<()> {
    let repository = match (state.initialized, state.cloned) {
        (false, _) => " (no repository)",
        (true, false) => " (.git)",
        (true, true) => " (.git, cloned)",
    };
    let header = TemplateContext {
        scenario: Some(state.scenario.as_str()),
        repository: Some(repository),
        ..Default::default()
    };
    writeln!(out)?;
    writeln!(out, "{}", render_template(TEMPLATES.header_scenario, &header))?;

    for zone in Zone::ALL {
        writeln!(out)?;
        writeln!(out, "{}", get_zone_header(zone))?;
        match zone {
            Zone::WorkingTree => write_files(out, zone, state.unstaged_files())?,
            Zone::StagingArea => write_files(out, zone, state.staged_files())?,
            Zone::LocalHistory => write_commits(out, zone, state.unpushed_commits())?,
            Zone::RemoteHistory => write_commits(out, zone, state.pushed_commits())?,
        }
    }

    if !suggestions.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "Try:".bright_black())?;
        for suggestion in suggestions {
            let context = TemplateContext {
                command: Some(&suggestion.command),
                ..Default::default()
            };
            writeln!(out, "{}", render_template(TEMPLATES.suggestion_line, &context))?;
        }
    }
    writeln!(out)
}

fn write_files<'a, W: Write>(
    out: &mut W,
    zone: Zone,
    names: impl Iterator<Item = &'a str>,
) -> io::Result<()> {
    let mut empty = true;
    for (i, name) in names.enumerate() {
        empty = false;
        let context = TemplateContext {
            filename: Some(name),
            n: Some(i + 1),
            zone: Some(zone),
            ..Default::default()
        };
        writeln!(out, "{}", render_template(TEMPLATES.file_line, &context))?;
    }
    if empty {
        write_empty(out, zone)?;
    }
    Ok(())
}

fn write_commits<'a, W: Write>(
    out: &mut W,
    zone: Zone,
    commits: impl Iterator<Item = &'a crate::core::state::Commit>,
) -> io::Result<()> {
    let mut empty = true;
    for commit in commits {
        empty = false;
        let short_id = commit.short_id();
        let files = commit.files.join(", ");
        let context = TemplateContext {
            commit_id: Some(commit.id),
            short_id: Some(&short_id),
            commit_message: Some(&commit.message),
            files: Some(&files),
            zone: Some(zone),
            ..Default::default()
        };
        writeln!(out, "{}", render_template(TEMPLATES.commit_header, &context))?;
        writeln!(out, "{}", render_template(TEMPLATES.commit_message, &context))?;
        writeln!(out, "{}", render_template(TEMPLATES.commit_files, &context))?;
    }
    if empty {
        write_empty(out, zone)?;
    }
    Ok(())
}

fn write_empty<W: Write>(out: &mut W, zone: Zone) -> io::Result<()> {
    let context = TemplateContext {
        empty_label: Some(zone.empty_label()),
        ..Default::default()
    };
    writeln!(out, "{}", render_template(TEMPLATES.zone_empty, &context))
}

/// Print the session counters
pub fn print_stats(stats: &SessionStats) {
    print_section_header("Your Progress");
    for (label, value) in [
        ("Commands", stats.commands_executed),
        ("Files Created", stats.files_created),
        ("Commits", stats.commits_created),
        ("Pushes", stats.pushes_completed),
    ] {
        println!("   {} {}", format!("{label}:").bright_black(), value.to_string().white());
    }
    println!();
}

/// Presenter that draws the zones on stdout
pub struct TerminalPresenter {
    pub show_suggestions: bool,
}

impl Presenter for TerminalPresenter {
    fn render(&mut self, state: &RepositoryState, suggestions: &[Suggestion]) -> io::Result<()> {
        let suggestions: &[Suggestion] = if self.show_suggestions {
            suggestions
        } else {
            &[]
        };
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_zones(&mut out, state, suggestions)?;
        out.flush()
    }
}

/// Notifier that prints through the standard message printers
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify_success(&mut self, outcome: &Outcome) {
        print_success(&outcome.message);
    }

    fn notify_error(&mut self, error: &SandboxError) {
        print_error(&error.to_string());
    }
}
