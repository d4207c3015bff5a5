//! Interactive loop over the simulated shell.
//!
//! Lines are either meta-commands of the sandbox itself (`help`, `status`,
//! `scenario remote`, ...) or simulated commands that go to the session. Each
//! simulated command is processed to completion before the next line is read.

use crate::core::{
    command_init::SessionContext,
    error::Result,
    output::{print_stats, TerminalNotifier},
    print_error, print_info, print_section_header, print_success,
    session::{Notifier, Presenter},
    state::Scenario,
};
use colored::*;
use std::io::{self, BufRead, Write};

const WELCOME: &str = "Welcome! Start by creating files with \"touch filename\"";

const HELP_LINES: [(&str, &str); 13] = [
    ("touch <filename>", "create a file in the working tree"),
    ("git init", "turn the directory into a repository"),
    ("git clone <url>", "copy a remote repository"),
    ("git add <filename|.>", "stage one file or every file"),
    ("git commit -m \"<message>\"", "record the staged files"),
    ("git push", "publish local commits"),
    ("git restore <filename>", "discard changes or delete an untracked file"),
    ("git restore --staged <filename>", "unstage a file"),
    ("status", "show the four zones again"),
    ("hints", "show suggested next commands"),
    ("stats", "show your progress"),
    ("scenario <local|remote>", "start over in another scenario"),
    ("exit", "leave the sandbox"),
];

#[derive(Debug, PartialEq, Eq)]
enum Directive<'a> {
    Help,
    Status,
    Hints,
    Stats,
    Scenario(Option<&'a str>),
    Exit,
    Simulated(&'a str),
}

fn classify(line: &str) -> Directive<'_> {
    let mut tokens = line.split_whitespace();
    let first = tokens.next().map(str::to_lowercase);
    match first.as_deref() {
        Some("help") => Directive::Help,
        Some("status") => Directive::Status,
        Some("hints") | Some("suggest") => Directive::Hints,
        Some("stats") => Directive::Stats,
        Some("scenario") => Directive::Scenario(tokens.next()),
        Some("exit") | Some("quit") => Directive::Exit,
        _ => Directive::Simulated(line),
    }
}

/// Run the interactive loop on stdin
pub fn execute_repl(context: SessionContext) -> Result<()> {
    let stdin = io::stdin();
    let mut presenter = context.presenter();
    let mut notifier = TerminalNotifier;
    run_loop(stdin.lock(), context, &mut presenter, &mut notifier)
}

fn run_loop<R, P, N>(
    input: R,
    mut context: SessionContext,
    presenter: &mut P,
    notifier: &mut N,
) -> Result<()>
where
    R: BufRead,
    P: Presenter,
    N: Notifier,
{
    print_info(WELCOME);
    context.session.present(presenter);

    let mut lines = input.lines();
    loop {
        print!("{} ", format!("[{}] $", context.session.state().scenario).bright_black());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match classify(line) {
            Directive::Help => print_help(),
            Directive::Status => context.session.present(presenter),
            Directive::Hints => {
                print_section_header("Try");
                for suggestion in context.session.suggestions() {
                    println!("   {} {}", "$".bright_black(), suggestion.command.white());
                }
            }
            Directive::Stats => print_stats(&context.session.stats()),
            Directive::Scenario(name) => {
                let Some(name) = name else {
                    print_error("Usage: scenario <local|remote>");
                    continue;
                };
                match name.parse::<Scenario>() {
                    Ok(scenario) => {
                        let outcome = context.session.switch_scenario(scenario);
                        print_success(&outcome.message);
                        context.session.present(presenter);
                        save_session(&context);
                    }
                    Err(e) => notifier.notify_error(&e),
                }
            }
            Directive::Exit => break,
            Directive::Simulated(line) => {
                if context
                    .session
                    .execute_and_report(line, presenter, notifier)
                    .is_ok()
                {
                    save_session(&context);
                }
            }
        }
    }

    Ok(())
}

fn save_session(context: &SessionContext) {
    if let Err(e) = context.save() {
        log::warn!("Session save failed (continuing in memory): {e}");
        print_error(&format!("Could not save session: {e}"));
    }
}

fn print_help() {
    print_section_header("Commands");
    let width = HELP_LINES
        .iter()
        .map(|(command, _)| command.len())
        .max()
        .unwrap_or_default();
    for (command, description) in HELP_LINES {
        println!(
            "   {}  {}",
            format!("{command:<width$}").white(),
            description.bright_black()
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        command_init::SessionInit, config::SandboxConfig, error::SandboxError, model::Outcome,
        state::RepositoryState, store::SessionStore, suggestions::Suggestion,
    };
    use std::io::Cursor;
    use tempfile::TempDir;

    #[derive(Default)]
    struct Silent {
        renders: usize,
        messages: Vec<String>,
    }

    impl Presenter for Silent {
        fn render(&mut self, _: &RepositoryState, _: &[Suggestion]) -> io::Result<()> {
            self.renders += 1;
            Ok(())
        }
    }

    impl Notifier for Silent {
        fn notify_success(&mut self, outcome: &Outcome) {
            self.messages.push(outcome.message.clone());
        }

        fn notify_error(&mut self, error: &SandboxError) {
            self.messages.push(error.to_string());
        }
    }

    #[test]
    fn test_classify_meta_commands() {
        assert_eq!(classify("HELP"), Directive::Help);
        assert_eq!(classify("scenario remote"), Directive::Scenario(Some("remote")));
        assert_eq!(classify("scenario"), Directive::Scenario(None));
        assert_eq!(classify("quit"), Directive::Exit);
        assert_eq!(classify("git push"), Directive::Simulated("git push"));
    }

    #[test]
    fn test_loop_runs_until_exit_and_persists() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("session.json");
        let context = SessionInit::initialize(SandboxConfig::default(), Some(path.clone()))?;

        let input = Cursor::new("touch a.txt\n\ngit add a.txt\ngit init\nexit\ntouch b.txt\n");
        let mut presenter = Silent::default();
        let mut notifier = Silent::default();
        run_loop(input, context, &mut presenter, &mut notifier)?;

        assert_eq!(
            notifier.messages,
            vec![
                "Created file: a.txt",
                "Please initialize repository with git init first",
                "Initialized empty Git repository",
            ]
        );
        // initial render plus one per successful command
        assert_eq!(presenter.renders, 3);

        let stored = SessionStore::new(&path).load()?.expect("session saved");
        assert!(stored.state.initialized);
        assert!(stored.state.file("b.txt").is_none());
        Ok(())
    }

    #[test]
    fn test_loop_switches_scenario_in_memory() -> Result<()> {
        let context = SessionInit::in_memory(SandboxConfig::default());

        let input = Cursor::new("scenario remote\ngit clone https://github.com/example/repo.git\n");
        let mut presenter = Silent::default();
        let mut notifier = Silent::default();
        run_loop(input, context, &mut presenter, &mut notifier)?;

        assert_eq!(
            notifier.messages,
            vec!["Cloned repository from https://github.com/example/repo.git"]
        );
        // initial render, scenario switch, clone
        assert_eq!(presenter.renders, 3);
        Ok(())
    }
}
