//! Hangman client - terminal front end
//!
//! Connects to a hangman server and plays rounds from the keyboard, or lets
//! the frequency bot play with `--auto`.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use hangman_client::{
    AutoPresenter, ClientConfig, ConsolePresenter, Presenter, Session, TcpLineChannel,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print()?;
            std::process::exit(cli::exit_code(&e));
        }
    };

    initialize_tracing(&cli);

    let config = load_config(&cli)?;
    run_session(config, cli.auto).await
}

/// Logs go to stderr so they never mix with the game on stdout.
fn initialize_tracing(cli: &Cli) {
    let default_filter = if cli.debug {
        "info,hangman_client=debug"
    } else if cli.auto.is_some() {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the effective configuration: command line over config file over defaults.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::default(),
    };

    if let Some(server) = &cli.server {
        info!(server = %server, "Overriding server host");
        config = config.with_host(server.clone());
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }
    if let Some(mode) = cli.verdicts {
        config = config.with_verdict_mode(mode);
    }

    Ok(config)
}

/// Connects and plays until the player quits or the session fails.
#[instrument(skip(config), fields(host = %config.host(), port = config.port()))]
async fn run_session(config: ClientConfig, auto_rounds: Option<u32>) -> Result<()> {
    let channel = TcpLineChannel::connect(config.host(), *config.port())
        .await
        .context("Could not reach the hangman server")?;

    let presenter: Box<dyn Presenter> = match auto_rounds {
        Some(rounds) => Box::new(AutoPresenter::new("Auto", rounds)),
        None => Box::new(ConsolePresenter::stdio()),
    };

    let summary = Session::new(channel, presenter, &config)
        .run()
        .await
        .context("Hangman session ended with an error")?;

    info!(
        rounds_won = summary.rounds_won,
        rounds_lost = summary.rounds_lost,
        "Goodbye"
    );
    Ok(())
}
