use filetime::FileTime;
use std::path::Path;

/// 2020-01-02T00:00:00Z
pub const MTIME_2020_01_02: i64 = 1_577_923_200;

/// 2021-03-15T00:00:00Z
pub const MTIME_2021_03_15: i64 = 1_615_766_400;

/// Build a minimal TIFF byte stream whose IFD0 carries a single ASCII
/// DateTime tag (0x0132) with the given `YYYY:MM:DD HH:MM:SS` value.
pub fn exif_tiff_bytes(datetime: &str) -> Vec<u8> {
    assert_eq!(
        datetime.len(),
        19,
        "EXIF datetime must be YYYY:MM:DD HH:MM:SS"
    );

    let mut bytes = Vec::new();
    // Header: little-endian byte order, magic 42, IFD0 at offset 8.
    bytes.extend_from_slice(b"II");
    bytes.extend_from_slice(&42u16.to_le_bytes());
    bytes.extend_from_slice(&8u32.to_le_bytes());
    // IFD0 holds one entry.
    bytes.extend_from_slice(&1u16.to_le_bytes());
    // Tag 0x0132 (DateTime), type 2 (ASCII), count 20, value stored at
    // offset 26 (directly after this IFD).
    bytes.extend_from_slice(&0x0132u16.to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&20u32.to_le_bytes());
    bytes.extend_from_slice(&26u32.to_le_bytes());
    // No further IFDs.
    bytes.extend_from_slice(&0u32.to_le_bytes());
    // The datetime string, NUL-terminated.
    bytes.extend_from_slice(datetime.as_bytes());
    bytes.push(0);
    bytes
}

/// Wrap the TIFF payload in a JPEG APP1 segment so the result reads as
/// a .jpg file with embedded Exif metadata.
pub fn exif_jpeg_bytes(datetime: &str) -> Vec<u8> {
    let tiff = exif_tiff_bytes(datetime);

    let mut bytes = Vec::new();
    bytes.extend_from_slice(&[0xFF, 0xD8]); // SOI
    bytes.extend_from_slice(&[0xFF, 0xE1]); // APP1
    bytes.extend_from_slice(&((2 + 6 + tiff.len()) as u16).to_be_bytes());
    bytes.extend_from_slice(b"Exif\0\0");
    bytes.extend_from_slice(&tiff);
    bytes.extend_from_slice(&[0xFF, 0xD9]); // EOI
    bytes
}

pub fn set_mtime(path: &Path, unix_seconds: i64) {
    filetime::set_file_mtime(path, FileTime::from_unix_time(unix_seconds, 0)).unwrap();
}
