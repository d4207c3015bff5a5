use crate::core::{command_init::SessionContext, error::Result, print_section_header};
use colored::*;

/// Print the commands that make sense next, with a short explanation each
pub fn execute_suggest(context: SessionContext) -> Result<()> {
    let suggestions = context.session.suggestions();
    let width = suggestions
        .iter()
        .map(|suggestion| suggestion.command.len())
        .max()
        .unwrap_or_default();

    print_section_header("Suggested commands");
    for suggestion in &suggestions {
        println!(
            "   {} {}  {}",
            "$".bright_black(),
            format!("{:<width$}", suggestion.command).white(),
            suggestion.description.bright_black(),
        );
    }
    println!();

    Ok(())
}
