pub mod cli;
pub mod error;
pub mod exif;
pub mod index;
pub mod scan;

pub use cli::{Cli, Config, LoggingConfig};
pub use error::{MediadexError, Result};
pub use exif::read_capture_date;
pub use index::{Outcome, RunStats, index_file, run};
pub use scan::discover_files;
