use anyhow::{Context, Result};
use clap::Parser;
use mediadex::mediadex_core::{Cli, Config, LoggingConfig, RunStats, run};
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = Config::from(Cli::parse());

    match try_main(&config) {
        Ok(stats) => {
            if config.dry_run {
                println!("[dry run] {stats}");
            } else {
                println!("{stats}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            if config.logging.debug {
                eprintln!("mediadex: {e:?}");
            } else {
                eprintln!("mediadex: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn try_main(config: &Config) -> Result<RunStats> {
    init_logging(&config.logging)?;

    ctrlc::set_handler(|| {
        log::info!("Received interrupt, stopping");
        std::process::exit(1);
    })
    .context("failed to install signal handler")?;

    Ok(run(config))
}

/// Route log records to the console, or to the log file when one was
/// requested.
fn init_logging(logging: &LoggingConfig) -> Result<()> {
    match &logging.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            WriteLogger::init(logging.level(), LogConfig::default(), file)?;
        }
        None => {
            TermLogger::init(
                logging.level(),
                LogConfig::default(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )?;
        }
    }
    Ok(())
}
