// LogTally - core/source.rs
//
// Line Source: opens a log file path, validates it, and materialises its
// lines in file order. Produces no parsed structure; callers treat lines
// as opaque strings until the Statistics Engine queries them.
//
// Error policy: environment conditions (wrong extension, missing file,
// unreadable content) are diagnostics plus an empty collection, never
// errors. The only hard failure is the contract violation of a path that
// is not representable as text.

use crate::core::model::LineCollection;
use crate::util::constants;
use crate::util::error::SourceError;
use std::fs;
use std::path::Path;

/// Read a log file into a [`LineCollection`].
///
/// Validation order:
/// 1. The path must be valid UTF-8 text, else `SourceError::PathNotUtf8`.
/// 2. The path must end in an accepted suffix (`.log` or `.txt`), else a
///    warning is logged and the empty collection is returned.
/// 3. The path must be an existing regular file, else warning + empty.
/// 4. The file must read as UTF-8 text; any open/read failure is caught,
///    logged, and converted to the empty collection.
///
/// Each line is stripped of its trailing line-terminator only; leading and
/// trailing whitespace inside the content is preserved. Idempotent for an
/// unchanged file.
pub fn read_log(path: &Path) -> Result<LineCollection, SourceError> {
    let path_text = path.to_str().ok_or_else(|| SourceError::PathNotUtf8 {
        path: path.to_path_buf(),
    })?;

    if !constants::ACCEPTED_EXTENSIONS
        .iter()
        .any(|ext| path_text.ends_with(ext))
    {
        tracing::warn!(
            path = path_text,
            accepted = ?constants::ACCEPTED_EXTENSIONS,
            "Unsupported file type, returning empty collection"
        );
        return Ok(LineCollection::default());
    }

    if !path.is_file() {
        tracing::warn!(path = path_text, "Log file does not exist");
        return Ok(LineCollection::default());
    }

    // Single scoped open-read-close; the handle is released on every exit
    // path including I/O errors.
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = path_text, error = %e, "Error reading log file");
            return Ok(LineCollection::default());
        }
    };

    let entries: Vec<String> = content.lines().map(str::to_string).collect();
    let collection = LineCollection::from_lines(entries);

    tracing::debug!(
        path = path_text,
        total_entries = collection.total_entries,
        "Log file read"
    );

    Ok(collection)
}
