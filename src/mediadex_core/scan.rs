use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively enumerate files under `root` whose extension is in the
/// requested set.
///
/// Extensions are matched exactly, case-sensitively, and include the
/// leading dot: ".jpg" matches "photo.jpg" but not "photo.JPG".
/// Traversal order is filesystem-dependent. An absent or non-directory
/// root yields an empty iterator rather than an error.
pub fn discover_files<'a>(
    root: &Path,
    extensions: &'a [String],
) -> impl Iterator<Item = PathBuf> + 'a {
    let walker = if root.is_dir() {
        Some(WalkDir::new(root).into_iter())
    } else {
        log::debug!(
            "Input directory {} does not exist, nothing to scan",
            root.display()
        );
        None
    };

    walker
        .into_iter()
        .flatten()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("Skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(move |entry| matches_extension(entry.path(), extensions))
        .map(|entry| entry.into_path())
}

/// Check a path against the dot-prefixed extension set.
fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => {
            let dotted = format!(".{ext}");
            extensions.iter().any(|wanted| *wanted == dotted)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_exact_dotted_extension() {
        let exts = vec![".jpg".to_string(), ".mp4".to_string()];
        assert!(matches_extension(Path::new("photo.jpg"), &exts));
        assert!(matches_extension(Path::new("clip.mp4"), &exts));
        assert!(!matches_extension(Path::new("notes.txt"), &exts));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let exts = vec![".jpg".to_string()];
        assert!(!matches_extension(Path::new("photo.JPG"), &exts));
    }

    #[test]
    fn test_files_without_extension_never_match() {
        let exts = vec![".jpg".to_string()];
        assert!(!matches_extension(Path::new("README"), &exts));
        assert!(!matches_extension(Path::new(".hidden"), &exts));
    }

    #[test]
    fn test_only_final_extension_is_considered() {
        let exts = vec![".gz".to_string()];
        assert!(matches_extension(Path::new("archive.tar.gz"), &exts));
        assert!(!matches_extension(Path::new("archive.gz.tar"), &exts));
    }

    #[test]
    fn test_absent_root_yields_nothing() {
        let exts = vec![".jpg".to_string()];
        let found = discover_files(Path::new("/nonexistent/mediadex-test"), &exts).count();
        assert_eq!(found, 0);
    }
}
