//! vCard 3.0 export.
//!
//! Field values are written verbatim: commas, semicolons and line breaks are
//! not escaped.

use std::path::{Path, PathBuf};

use crate::config::VCardFields;
use crate::error::CardResult;

/// MIME type of the exported file.
pub const VCARD_MIME: &str = "text/vcard";

/// Serialize `fields` into a vCard with a fixed line layout.
///
/// Lines are joined with `\n` and there is no trailing newline.
pub fn encode(fields: &VCardFields) -> String {
    [
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("N:{};{};;;", fields.last_name, fields.first_name),
        format!("FN:{}", fields.full_name),
        format!("ORG:{}", fields.organization),
        format!("TITLE:{}", fields.title),
        format!("EMAIL;TYPE=HOME:{}", fields.email),
        format!("TEL;TYPE=CELL:{}", fields.phone),
        format!("URL:{}", fields.url),
        format!("ADR:;;{}", fields.address),
        format!("NOTE:{}", fields.note),
        "END:VCARD".to_string(),
    ]
    .join("\n")
}

/// Write the encoded card.
///
/// If `target` is an existing directory the file is created inside it under
/// `fields.download_name`; otherwise `target` is the file path itself.
/// Returns the path written.
pub fn write_vcard(target: impl AsRef<Path>, fields: &VCardFields) -> CardResult<PathBuf> {
    let target = target.as_ref();
    let path = if target.is_dir() {
        target.join(&fields.download_name)
    } else {
        target.to_path_buf()
    };
    std::fs::write(&path, encode(fields))?;
    tracing::info!(path = %path.display(), "vCard written");
    Ok(path)
}
