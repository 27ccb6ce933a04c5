use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::mediadex_core::cli::Config;
use crate::mediadex_core::error::{MediadexError, Result};
use crate::mediadex_core::exif::read_capture_date;
use crate::mediadex_core::scan::discover_files;

/// Date formats for the destination path components (YYYY/YYYY-MM-DD).
const YEAR_FORMAT: &[FormatItem] = format_description!("[year]");
const DAY_FORMAT: &[FormatItem] = format_description!("[year]-[month]-[day]");

/// Result of indexing a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Copied {
        source: PathBuf,
        destination: PathBuf,
    },
    Skipped {
        destination: PathBuf,
    },
}

/// Counts accumulated over a whole run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub files_copied: usize,
    pub files_skipped: usize,
    pub files_failed: usize,
}

impl std::fmt::Display for RunStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} files copied, {} skipped, {} failed",
            self.files_copied, self.files_skipped, self.files_failed
        )
    }
}

/// Index every matched file under the configured input directory.
///
/// Files are processed strictly one at a time. Per-file failures are
/// logged and counted; they never abort the traversal.
pub fn run(config: &Config) -> RunStats {
    for ext in &config.extensions {
        if !ext.starts_with('.') {
            log::warn!("Extension \"{ext}\" has no leading dot and will never match");
        }
    }

    let mut stats = RunStats::default();
    for path in discover_files(&config.input_dir, &config.extensions) {
        match index_file(&path, &config.output_dir, config.dry_run) {
            Ok(Outcome::Copied { .. }) => stats.files_copied += 1,
            Ok(Outcome::Skipped { .. }) => stats.files_skipped += 1,
            Err(e) => {
                log::error!("{e}");
                stats.files_failed += 1;
            }
        }
    }

    stats
}

/// Copy a single file into its date-derived place under
/// `destination_root`, unless a same-named file is already there.
pub fn index_file(source: &Path, destination_root: &Path, dry_run: bool) -> Result<Outcome> {
    let date = effective_date(source)?;
    let dest_dir = destination_dir(destination_root, date)?;
    let destination = dest_dir.join(source.file_name().unwrap_or_default());

    // Presence of a same-named file is the whole dedup check; content
    // is never compared.
    if destination.exists() {
        log::info!("Skipping {}, file already exists", destination.display());
        return Ok(Outcome::Skipped { destination });
    }

    if dry_run {
        log::info!(
            "Would copy {} to {}",
            source.display(),
            destination.display()
        );
        return Ok(Outcome::Copied {
            source: source.to_path_buf(),
            destination,
        });
    }

    if !dest_dir.is_dir() {
        log::debug!("Creating directory {}", dest_dir.display());
        create_dest_dir(&dest_dir).map_err(|e| MediadexError::CreateDir {
            path: dest_dir.clone(),
            source: e,
        })?;
    }

    log::info!("Copying {} to {}", source.display(), destination.display());
    let modified = fs::metadata(source)
        .ok()
        .map(|m| FileTime::from_last_modification_time(&m));
    fs::copy(source, &destination).map_err(|e| MediadexError::Copy {
        from: source.to_path_buf(),
        to: destination.clone(),
        source: e,
    })?;

    // fs::copy carries permissions but not timestamps.
    if let Some(mtime) = modified {
        if let Err(e) = filetime::set_file_mtime(&destination, mtime) {
            log::warn!(
                "Could not preserve mtime on {}: {}",
                destination.display(),
                e
            );
        }
    }

    Ok(Outcome::Copied {
        source: source.to_path_buf(),
        destination,
    })
}

/// Effective capture date for filing: embedded metadata first, then the
/// file's last-modified time in UTC.
fn effective_date(path: &Path) -> Result<PrimitiveDateTime> {
    if let Some(taken) = read_capture_date(path) {
        log::debug!("Read capture date {taken} from {}", path.display());
        return Ok(taken);
    }

    let metadata = fs::metadata(path).map_err(|e| MediadexError::FileMetadata {
        path: path.to_path_buf(),
        source: e,
    })?;
    let modified = metadata.modified().map_err(|e| MediadexError::FileMetadata {
        path: path.to_path_buf(),
        source: e,
    })?;

    let utc = OffsetDateTime::from(modified);
    log::debug!(
        "No capture date in {}, falling back to mtime {utc}",
        path.display()
    );
    Ok(PrimitiveDateTime::new(utc.date(), utc.time()))
}

/// Destination directory for a given effective date.
fn destination_dir(root: &Path, date: PrimitiveDateTime) -> Result<PathBuf> {
    Ok(root
        .join(date.format(YEAR_FORMAT)?)
        .join(date.format(DAY_FORMAT)?))
}

#[cfg(unix)]
fn create_dest_dir(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o755).create(path)
}

#[cfg(not(unix))]
fn create_dest_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}
