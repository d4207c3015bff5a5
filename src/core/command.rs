//! Parsing of raw input lines into typed commands.
//!
//! This module provides [`CommandParser`] which turns a line such as
//! `git commit -m "first commit"` into a [`Command`] value. Syntax problems are
//! reported here as usage or unknown-command errors, before the repository model
//! is ever consulted.
//!
//! # Grammar
//! - Tokens are separated by whitespace
//! - Verbs (`touch`, `git`) and git sub-commands are case-insensitive
//! - Extra trailing tokens are ignored
//! - A commit message is every token after `-m`, rejoined with single spaces,
//!   with all double quotes removed

use crate::core::error::{Result, SandboxError};
use std::fmt;

pub const TOUCH_USAGE: &str = "touch <filename>";
pub const GIT_USAGE: &str = "git <command>";
pub const ADD_USAGE: &str = "git add <filename|.>";
pub const COMMIT_USAGE: &str = "git commit -m \"commit message\"";
pub const CLONE_USAGE: &str = "git clone <repository-url>";
pub const RESTORE_USAGE: &str = "git restore [--staged] <file>";
pub const RESTORE_STAGED_USAGE: &str = "git restore --staged <file>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddTarget {
    /// `git add .`
    All,
    File(String),
}

/// A validated simulated command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Touch { name: String },
    Init,
    Add { target: AddTarget },
    Commit { message: String },
    Push,
    Clone { url: String },
    Restore { name: String, staged: bool },
}

impl Command {
    /// Short name used in logs and statistics
    pub fn name(&self) -> &'static str {
        match self {
            Command::Touch { .. } => "touch",
            Command::Init => "init",
            Command::Add { .. } => "add",
            Command::Commit { .. } => "commit",
            Command::Push => "push",
            Command::Clone { .. } => "clone",
            Command::Restore { .. } => "restore",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Touch { name } => write!(f, "touch {name}"),
            Command::Init => f.write_str("git init"),
            Command::Add {
                target: AddTarget::All,
            } => f.write_str("git add ."),
            Command::Add {
                target: AddTarget::File(name),
            } => write!(f, "git add {name}"),
            Command::Commit { message } => write!(f, "git commit -m \"{message}\""),
            Command::Push => f.write_str("git push"),
            Command::Clone { url } => write!(f, "git clone {url}"),
            Command::Restore { name, staged } => {
                if *staged {
                    write!(f, "git restore --staged {name}")
                } else {
                    write!(f, "git restore {name}")
                }
            }
        }
    }
}

/// Tokenizer and parser for the simulated shell
pub struct CommandParser;

impl CommandParser {
    /// Parse one input line into a [`Command`]
    ///
    /// # Examples
    /// ```
    /// use git_sandbox::core::command::{AddTarget, Command, CommandParser};
    ///
    /// let command = CommandParser::parse("git add .")?;
    /// assert_eq!(command, Command::Add { target: AddTarget::All });
    /// # Ok::<(), git_sandbox::SandboxError>(())
    /// ```
    pub fn parse(line: &str) -> Result<Command> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((verb, args)) = tokens.split_first() else {
            return Err(SandboxError::usage(GIT_USAGE));
        };

        match verb.to_lowercase().as_str() {
            "touch" => {
                let name = args.first().ok_or_else(|| SandboxError::usage(TOUCH_USAGE))?;
                Ok(Command::Touch {
                    name: (*name).to_string(),
                })
            }
            "git" => Self::parse_git(args),
            other => Err(SandboxError::unknown_command(other)),
        }
    }

    fn parse_git(args: &[&str]) -> Result<Command> {
        let Some((sub, rest)) = args.split_first() else {
            return Err(SandboxError::usage(GIT_USAGE));
        };

        match sub.to_lowercase().as_str() {
            "init" => Ok(Command::Init),
            "add" => {
                let target = rest.first().ok_or_else(|| SandboxError::usage(ADD_USAGE))?;
                let target = match *target {
                    "." => AddTarget::All,
                    name => AddTarget::File(name.to_string()),
                };
                Ok(Command::Add { target })
            }
            "commit" => match rest.split_first() {
                Some((&"-m", words)) => Ok(Command::Commit {
                    message: words.join(" ").replace('"', ""),
                }),
                _ => Err(SandboxError::usage(COMMIT_USAGE)),
            },
            "push" => Ok(Command::Push),
            "clone" => {
                let url = rest.first().ok_or_else(|| SandboxError::usage(CLONE_USAGE))?;
                Ok(Command::Clone {
                    url: (*url).to_string(),
                })
            }
            "restore" => match rest {
                [] => Err(SandboxError::usage(RESTORE_USAGE)),
                ["--staged"] => Err(SandboxError::usage(RESTORE_STAGED_USAGE)),
                ["--staged", name, ..] => Ok(Command::Restore {
                    name: (*name).to_string(),
                    staged: true,
                }),
                [name, ..] => Ok(Command::Restore {
                    name: (*name).to_string(),
                    staged: false,
                }),
            },
            other => Err(SandboxError::unknown_git_command(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    fn kind_of(line: &str) -> Option<ErrorKind> {
        CommandParser::parse(line).unwrap_err().kind()
    }

    #[test]
    fn test_parse_touch() -> Result<()> {
        assert_eq!(
            CommandParser::parse("touch notes.md")?,
            Command::Touch {
                name: "notes.md".to_string()
            }
        );
        Ok(())
    }

    #[test]
    fn test_verbs_are_case_insensitive() -> Result<()> {
        assert_eq!(CommandParser::parse("GIT Init")?, Command::Init);
        assert_eq!(CommandParser::parse("  git   PUSH  ")?, Command::Push);
        Ok(())
    }

    #[test]
    fn test_parse_add_variants() -> Result<()> {
        assert_eq!(
            CommandParser::parse("git add .")?,
            Command::Add {
                target: AddTarget::All
            }
        );
        assert_eq!(
            CommandParser::parse("git add a.txt")?,
            Command::Add {
                target: AddTarget::File("a.txt".to_string())
            }
        );
        Ok(())
    }

    #[test]
    fn test_parse_commit_message_strips_quotes() -> Result<()> {
        assert_eq!(
            CommandParser::parse("git commit -m \"first   commit\" here")?,
            Command::Commit {
                message: "first commit here".to_string()
            }
        );
        Ok(())
    }

    #[test]
    fn test_parse_commit_with_missing_message_is_left_to_the_model() -> Result<()> {
        assert_eq!(
            CommandParser::parse("git commit -m")?,
            Command::Commit {
                message: String::new()
            }
        );
        Ok(())
    }

    #[test]
    fn test_commit_without_flag_is_usage_error() {
        assert_eq!(kind_of("git commit"), Some(ErrorKind::UsageError));
        assert_eq!(kind_of("git commit hello"), Some(ErrorKind::UsageError));
    }

    #[test]
    fn test_parse_restore_variants() -> Result<()> {
        assert_eq!(
            CommandParser::parse("git restore a.txt")?,
            Command::Restore {
                name: "a.txt".to_string(),
                staged: false
            }
        );
        assert_eq!(
            CommandParser::parse("git restore --staged a.txt")?,
            Command::Restore {
                name: "a.txt".to_string(),
                staged: true
            }
        );
        assert_eq!(kind_of("git restore --staged"), Some(ErrorKind::UsageError));
        assert_eq!(kind_of("git restore"), Some(ErrorKind::UsageError));
        Ok(())
    }

    #[test]
    fn test_missing_arguments_are_usage_errors() {
        for line in ["touch", "git", "git add", "git clone", ""] {
            assert_eq!(kind_of(line), Some(ErrorKind::UsageError), "line: {line:?}");
        }
    }

    #[test]
    fn test_unknown_verbs() {
        let err = CommandParser::parse("ls -la").unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::UnknownCommand));
        assert_eq!(err.to_string(), "Command not recognized: ls");

        let err = CommandParser::parse("git rebase main").unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::UnknownCommand));
        assert_eq!(err.to_string(), "Git command not supported: rebase");
    }

    #[test]
    fn test_display_round_trips_through_parser() -> Result<()> {
        for line in [
            "touch a.txt",
            "git init",
            "git add .",
            "git commit -m \"hello world\"",
            "git clone https://github.com/example/repo.git",
            "git restore --staged a.txt",
        ] {
            let command = CommandParser::parse(line)?;
            assert_eq!(CommandParser::parse(&command.to_string())?, command);
        }
        Ok(())
    }
}
