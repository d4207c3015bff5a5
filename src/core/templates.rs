//! Template system for consistent zone output.
//!
//! This module renders the lines that make up a zone listing: the zone header,
//! one line per file, and the header/message/file lines of a commit. Templates
//! are plain strings with `{placeholder}` slots filled in a single pass; colors
//! are applied afterwards based on which template is being rendered.
//!
//! # Public API
//! - [`Templates`]: Template definitions for all output lines
//! - [`TemplateContext`]: Context data for template rendering
//! - [`TEMPLATES`]: Global template instance with default formatting
//! - [`render_template`]: Main rendering function with colors
//! - [`render_template_plain`]: Plain text rendering for testing
//! - [`strip_ansi_codes`]: Utility for removing color codes

use crate::core::{colors::get_colored_name, state::Zone};
use colored::*;
use std::fmt::Write;

/// Template definitions for all output formatting
pub struct Templates {
    pub header_scenario: &'static str,
    pub zone_empty: &'static str,
    pub file_line: &'static str,
    pub commit_header: &'static str,
    pub commit_message: &'static str,
    pub commit_files: &'static str,
    pub suggestion_line: &'static str,
}

/// Global templates instance
pub static TEMPLATES: Templates = Templates {
    header_scenario: "Scenario: {scenario}{repository}",
    zone_empty: "   {empty_label}",
    file_line: "   [{n}] {filename}",
    commit_header: "   Commit {commit_id} {short_id}",
    commit_message: "      {commit_message}",
    commit_files: "      {files}",
    suggestion_line: "   $ {command}",
};

/// Context for template rendering
#[derive(Debug, Default)]
pub struct TemplateContext<'a> {
    pub scenario: Option<&'a str>,
    pub repository: Option<&'a str>,
    pub empty_label: Option<&'a str>,
    pub filename: Option<&'a str>,
    pub n: Option<usize>,
    pub commit_id: Option<u64>,
    pub short_id: Option<&'a str>,
    pub commit_message: Option<&'a str>,
    pub files: Option<&'a str>,
    pub command: Option<&'a str>,
    pub zone: Option<Zone>,
}

/// Render a template with context and apply colors
pub fn render_template(template: &str, context: &TemplateContext) -> String {
    let mut result = String::with_capacity(template.len() + 64);
    render_template_single_pass(template, context, &mut result);
    apply_colors(&result, template, context)
}

/// Render template without colors for testing
pub fn render_template_plain(template: &str, context: &TemplateContext) -> String {
    let mut result = String::with_capacity(template.len() + 64);
    render_template_single_pass(template, context, &mut result);
    result
}

fn render_template_single_pass(template: &str, context: &TemplateContext, output: &mut String) {
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            output.push(ch);
            continue;
        }

        let mut placeholder = String::new();
        let mut found_closing = false;
        for next_ch in chars.by_ref() {
            if next_ch == '}' {
                found_closing = true;
                break;
            }
            placeholder.push(next_ch);
        }

        if !found_closing {
            output.push(ch);
            output.push_str(&placeholder);
            continue;
        }

        let text = match placeholder.as_str() {
            "scenario" => context.scenario,
            "repository" => context.repository,
            "empty_label" => context.empty_label,
            "filename" => context.filename,
            "short_id" => context.short_id,
            "commit_message" => context.commit_message,
            "files" => context.files,
            "command" => context.command,
            "n" => {
                if let Some(value) = context.n {
                    let _ = write!(output, "{value}");
                }
                continue;
            }
            "commit_id" => {
                if let Some(value) = context.commit_id {
                    let _ = write!(output, "{value}");
                }
                continue;
            }
            _ => {
                // Unknown placeholder, keep as-is
                output.push('{');
                output.push_str(&placeholder);
                output.push('}');
                continue;
            }
        };

        if let Some(value) = text {
            output.push_str(value);
        }
    }
}

fn apply_colors(text: &str, template: &str, context: &TemplateContext) -> String {
    let mut result = String::with_capacity(text.len() + 64);
    let zone = context.zone;

    match template {
        t if t == TEMPLATES.header_scenario => {
            let _ = write!(
                result,
                "Scenario: {}{}",
                context.scenario.unwrap_or_default().blue(),
                context.repository.unwrap_or_default().bright_black()
            );
        }
        t if t == TEMPLATES.zone_empty => {
            let _ = write!(result, "   {}", context.empty_label.unwrap_or_default().bright_black());
        }
        t if t == TEMPLATES.file_line => {
            let _ = write!(
                result,
                "   {}{}{} ",
                "[".bright_black(),
                context.n.unwrap_or_default().to_string().white(),
                "]".bright_black()
            );
            if let (Some(filename), Some(zone)) = (context.filename, zone) {
                let _ = write!(result, "{}", get_colored_name(zone, filename));
            }
        }
        t if t == TEMPLATES.commit_header => {
            let header = format!("Commit {}", context.commit_id.unwrap_or_default());
            let colored = match zone {
                Some(zone) => get_colored_name(zone, &header).bold(),
                None => header.bold(),
            };
            let _ = write!(
                result,
                "   {} {}",
                colored,
                context.short_id.unwrap_or_default().bright_black()
            );
        }
        t if t == TEMPLATES.commit_message => {
            let _ = write!(result, "      {}", context.commit_message.unwrap_or_default().white());
        }
        t if t == TEMPLATES.commit_files => {
            let _ = write!(result, "      {}", context.files.unwrap_or_default().bright_black());
        }
        t if t == TEMPLATES.suggestion_line => {
            let _ = write!(
                result,
                "   {} {}",
                "$".bright_black(),
                context.command.unwrap_or_default().white()
            );
        }
        _ => result.push_str(text),
    }

    result
}

/// Strip ANSI color codes for testing
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next(); // consume '['
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}
