use clap::Parser;
use simplelog::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Index photos and videos into a date-organized directory tree")]
pub struct Cli {
    /// Directory to scan for media files
    #[arg(long, value_name = "DIR")]
    pub input_dir: PathBuf,

    /// Directory to copy indexed files into
    #[arg(long, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// File extension to index, including the leading dot (repeatable)
    #[arg(long = "extension", value_name = "EXT", required = true)]
    pub extensions: Vec<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Write log output to this file instead of the console
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Report what would be copied without making changes
    #[arg(long)]
    pub dry_run: bool,
}

/// Resolved run configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub extensions: Vec<String>,
    pub dry_run: bool,
    pub logging: LoggingConfig,
}

/// Logging setup handed to the entry point.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub debug: bool,
    pub log_file: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            input_dir: cli.input_dir,
            output_dir: cli.output_dir,
            extensions: cli.extensions,
            dry_run: cli.dry_run,
            logging: LoggingConfig {
                debug: cli.debug,
                log_file: cli.log,
            },
        }
    }
}
