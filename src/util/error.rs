// LogTally - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation. Only contract violations and
// data-shape violations become errors; recoverable environment
// conditions in the Line Source are diagnostics + empty results.

use std::fmt;
use std::path::PathBuf;

/// Top-level error type for all LogTally operations.
/// Errors are categorised by the component that produced them.
#[derive(Debug)]
pub enum TallyError {
    /// Line Source contract violation.
    Source(SourceError),

    /// Statistics Engine contract or data-shape violation.
    Stats(StatsError),

    /// JSON serialisation of presenter output failed.
    Json(serde_json::Error),
}

impl fmt::Display for TallyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(e) => write!(f, "Line source error: {e}"),
            Self::Stats(e) => write!(f, "Statistics error: {e}"),
            Self::Json(e) => write!(f, "JSON output error: {e}"),
        }
    }
}

impl std::error::Error for TallyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(e) => Some(e),
            Self::Stats(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

// ---------------------------------------------------------------------------
// Line Source errors
// ---------------------------------------------------------------------------

/// Contract violations in the Line Source.
///
/// Environment conditions (missing file, wrong extension, unreadable
/// content) do not appear here; they are logged and turned into an empty
/// `LineCollection` instead.
#[derive(Debug)]
pub enum SourceError {
    /// The path argument is not representable as UTF-8 text.
    PathNotUtf8 { path: PathBuf },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathNotUtf8 { path } => {
                write!(f, "Path '{}' is not valid UTF-8 text", path.display())
            }
        }
    }
}

impl std::error::Error for SourceError {}

impl From<SourceError> for TallyError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

// ---------------------------------------------------------------------------
// Statistics Engine errors
// ---------------------------------------------------------------------------

/// Errors raised by Statistics Engine queries.
#[derive(Debug)]
pub enum StatsError {
    /// A recent-entries count of zero or below was requested.
    CountOutOfRange { requested: i64 },

    /// A line has fewer than the two leading tokens a timestamp needs.
    MissingTimestamp { line_number: usize },

    /// A line's leading tokens did not parse as `YYYY-MM-DD HH:MM:SS`.
    TimestampParse {
        line_number: usize,
        raw: String,
        source: chrono::ParseError,
    },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountOutOfRange { requested } => {
                write!(f, "Recent-entry count must be positive, got {requested}")
            }
            Self::MissingTimestamp { line_number } => {
                write!(f, "Line {line_number}: no leading timestamp tokens")
            }
            Self::TimestampParse {
                line_number,
                raw,
                source,
            } => write!(
                f,
                "Line {line_number}: cannot parse timestamp '{raw}': {source}"
            ),
        }
    }
}

impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TimestampParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<StatsError> for TallyError {
    fn from(e: StatsError) -> Self {
        Self::Stats(e)
    }
}

/// Convenience type alias for LogTally results.
pub type Result<T> = std::result::Result<T, TallyError>;
