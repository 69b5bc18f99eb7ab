//! Capture timestamp extraction from EXIF metadata.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use exif::{In, Value};

use crate::error::{Error, Result};

/// Read the capture timestamp stored under `tag_id` in the primary image.
///
/// The tag is matched by number in any IFD context, so both
/// `DateTimeOriginal` (36867) and the TIFF `DateTime` (306) work.
pub fn read_capture_timestamp(path: &Path, tag_id: u16) -> Result<NaiveDateTime> {
    let file = File::open(path).map_err(|e| unavailable(path, format!("cannot open: {}", e)))?;
    let mut reader = BufReader::new(file);

    let exif = exif::Reader::new()
        .read_from_container(&mut reader)
        .map_err(|e| unavailable(path, e.to_string()))?;

    let field = exif
        .fields()
        .find(|field| field.tag.number() == tag_id && field.ifd_num == In::PRIMARY)
        .ok_or_else(|| unavailable(path, format!("tag {} not present", tag_id)))?;

    let raw = match &field.value {
        Value::Ascii(values) => values
            .first()
            .ok_or_else(|| unavailable(path, format!("tag {} is empty", tag_id)))?,
        other => {
            return Err(unavailable(
                path,
                format!("tag {} is not a text value ({:?})", tag_id, other),
            ))
        }
    };

    parse_exif_datetime(raw).ok_or_else(|| {
        unavailable(
            path,
            format!(
                "tag {} holds an unparseable date '{}'",
                tag_id,
                String::from_utf8_lossy(raw)
            ),
        )
    })
}

/// Parse an EXIF `YYYY:MM:DD HH:MM:SS` value into a calendar date-time.
pub fn parse_exif_datetime(raw: &[u8]) -> Option<NaiveDateTime> {
    let dt = exif::DateTime::from_ascii(raw).ok()?;

    NaiveDate::from_ymd_opt(dt.year.into(), dt.month.into(), dt.day.into())?.and_hms_opt(
        dt.hour.into(),
        dt.minute.into(),
        dt.second.into(),
    )
}

fn unavailable(path: &Path, reason: String) -> Error {
    Error::MetadataUnavailable {
        path: path.to_path_buf(),
        reason,
    }
}
