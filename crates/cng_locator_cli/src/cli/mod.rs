pub mod args;
pub mod color;
pub mod commands;
pub mod export;
pub mod validate;

use anyhow::{Context, Result};
use clap::Parser;
use cng_locator_core::LocatorError;
use cng_locator_core::config::Config;
use tracing_subscriber::EnvFilter;

use args::{Cli, Commands, ConfigCmd};

pub const LOG_ENV: &str = "CNG_LOCATOR_LOG";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.cmd {
        Commands::Near(args) => commands::near::run(&load_config(&cli)?, args),

        Commands::Route(args) => commands::route::run(&load_config(&cli)?, args),

        Commands::Models { output } => commands::models::run(output),

        Commands::Distance { from, to } => commands::distance::run(from, to),

        Commands::Config { cmd } => match cmd {
            ConfigCmd::Show => commands::config::run_show(&load_config(&cli)?),
            // Works even when the current config file is broken.
            ConfigCmd::Path => commands::config::run_path(),
        },
    }
}

/// Diagnostics go to stderr; `--verbose` wins over the environment filter.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// File and environment first, then command-line flags.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut cfg = Config::load(cli.config.as_deref()).context("Unable to load configuration")?;
    apply_flags(&mut cfg, cli);
    cfg.validate()?;
    tracing::debug!(
        backend = %cfg.backend_url,
        router = %cfg.router_url,
        timeout_secs = cfg.timeout_secs,
        "configuration loaded"
    );
    Ok(cfg)
}

/// Follow-up advice for a failed command, picked from the core error kind.
pub fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    let core = err.chain().find_map(|e| e.downcast_ref::<LocatorError>())?;
    if core.is_user_input() {
        Some("Check the command arguments (see --help and `cng_locator models`).")
    } else if core.is_transport() {
        Some("Check that the backend and router are reachable (`cng_locator config show`).")
    } else {
        None
    }
}

fn apply_flags(cfg: &mut Config, cli: &Cli) {
    if let Some(url) = &cli.backend_url {
        cfg.backend_url = url.clone();
    }
    if let Some(url) = &cli.router_url {
        cfg.router_url = url.clone();
    }
    if let Some(secs) = cli.timeout {
        cfg.timeout_secs = secs;
    }
}
