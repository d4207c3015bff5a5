use anyhow::Context;
use clap::{Parser, Subcommand};
use git_sandbox::commands::*;
use git_sandbox::core::{
    colors::set_color_enabled,
    command_init::SessionInit,
    config::SandboxConfig,
    error::Result,
    print_error,
    state::Scenario,
};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-sandbox")]
#[command(about = "Learn the git workflow in a simulated repository")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Session file to use instead of the per-directory default
    #[arg(long, global = true, value_name = "PATH")]
    session: Option<PathBuf>,

    /// Configuration file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Do not print suggested next commands
    #[arg(long, global = true)]
    no_suggestions: bool,

    /// Only accept clone URLs whose host is an allowed remote host
    #[arg(long, global = true)]
    strict_hosts: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive sandbox (default)
    Repl {
        /// Scenario to start in (local or remote)
        #[arg(long)]
        scenario: Option<String>,
    },
    /// Run one simulated command against the saved session
    Run {
        /// The command, e.g. `git commit -m "first commit"`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Show the four zones of the saved session
    Status {
        /// Also show progress counters
        #[arg(long)]
        stats: bool,
    },
    /// Start the saved session over in a scenario (local or remote)
    Scenario { name: String },
    /// Show suggested next commands for the saved session
    Suggest,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{e:#}; using default configuration");
            SandboxConfig::default()
        }
    };
    set_color_enabled(config.color);

    if let Err(e) = dispatch(cli, config) {
        if !e.is_domain() {
            log::debug!("{e:?}");
        }
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<SandboxConfig> {
    let mut config = match &cli.config {
        Some(path) => SandboxConfig::load_or_create_at(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SandboxConfig::load_or_create().context("Failed to load config")?,
    };

    if cli.no_color {
        config.color = false;
    }
    if cli.no_suggestions {
        config.show_suggestions = false;
    }
    if cli.strict_hosts {
        config.strict_remote_hosts = true;
    }
    Ok(config)
}

fn dispatch(cli: Cli, mut config: SandboxConfig) -> Result<()> {
    let session = cli.session;
    match cli.command.unwrap_or(Commands::Repl { scenario: None }) {
        Commands::Repl { scenario } => {
            if let Some(name) = scenario {
                config.default_scenario = name.parse::<Scenario>()?;
            }
            let context = match session {
                Some(path) => SessionInit::initialize(config, Some(path))?,
                None => SessionInit::in_memory(config),
            };
            execute_repl(context)
        }
        Commands::Run { words } => execute_run(words, SessionInit::initialize(config, session)?),
        Commands::Status { stats } => {
            execute_status(SessionInit::initialize(config, session)?, stats)
        }
        Commands::Scenario { name } => {
            execute_scenario(&name, SessionInit::initialize(config, session)?)
        }
        Commands::Suggest => execute_suggest(SessionInit::initialize(config, session)?),
    }
}
