use exif::{In, Tag};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use time::PrimitiveDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;

/// Date format used in EXIF data.
pub const EXIF_DATE_FORMAT: &[FormatItem] =
    format_description!("[year]:[month]:[day] [hour]:[minute]:[second]");

/// Capture timestamp tags, in order of preference.
const DATE_TAGS: [Tag; 3] = [Tag::DateTimeOriginal, Tag::DateTimeDigitized, Tag::DateTime];

/// Read the embedded capture timestamp from a media file.
///
/// Returns `None` on any failure: unreadable file, container format
/// without Exif support, missing date tags, corrupt metadata. Callers
/// substitute the filesystem timestamp when absent.
pub fn read_capture_date(path: &Path) -> Option<PrimitiveDateTime> {
    let file = File::open(path).ok()?;
    let exif = exif::Reader::new()
        .read_from_container(&mut BufReader::new(file))
        .ok()?;

    DATE_TAGS.iter().find_map(|tag| {
        let field = exif.get_field(*tag, In::PRIMARY)?;
        parse_exif_datetime(&field.display_value().to_string())
    })
}

/// Parse an EXIF datetime string. The standard form is
/// `YYYY:MM:DD HH:MM:SS`, but separators vary between writers.
fn parse_exif_datetime(value: &str) -> Option<PrimitiveDateTime> {
    let cleaned = value
        .trim()
        .trim_matches('"')
        .replace('-', ":")
        .replace('/', ":");
    PrimitiveDateTime::parse(&cleaned, EXIF_DATE_FORMAT).ok()
}
