use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::error;
use tracing_subscriber::{prelude::*, EnvFilter};

use mana_ccg::games::sample::SampleGameBuilder;
use mana_ccg::{EngineConfig, SessionError, StdConsole};

fn main() -> ExitCode {
    if let Err(err) = init_logging() {
        eprintln!("failed to initialise logging: {err:#}");
    }

    let config = if std::env::args().skip(1).any(|arg| arg == "--legacy") {
        EngineConfig::legacy()
    } else {
        EngineConfig::default()
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<SessionError>() {
            Some(session_err) => {
                error!("session aborted: {session_err}");
                ExitCode::from(session_err.exit_code())
            }
            None => {
                error!("{err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(config: EngineConfig) -> Result<()> {
    let mut session = SampleGameBuilder::new()
        .config(config)
        .build()
        .context("failed to build sample game")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = StdConsole::new(stdin.lock(), stdout.lock());

    session.run(&mut console)?;
    Ok(())
}

fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries the game screen, so logs go to stderr.
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()?;

    Ok(())
}
