// LogTally - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
// These types are the shared vocabulary between the Line Source,
// the Statistics Engine, and the presenter.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Line collection (output of the Line Source)
// =============================================================================

/// The ordered sequence of raw log lines read from one file, plus its count.
///
/// Invariant: `total_entries == entries.len()`, guaranteed by construction.
/// A collection is created once per read and never mutated; re-reading the
/// file produces a new collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineCollection {
    /// Number of lines read.
    pub total_entries: usize,

    /// Raw lines in file order, trailing line-terminators stripped.
    /// Opaque text: all interpretation happens in the Statistics Engine.
    pub entries: Vec<String>,
}

impl LineCollection {
    /// Build a collection from raw lines, deriving the count.
    pub fn from_lines(entries: Vec<String>) -> Self {
        Self {
            total_entries: entries.len(),
            entries,
        }
    }

    /// True when nothing was read (missing file, rejected extension, or an
    /// I/O failure — callers treat this as "nothing to analyse").
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Severity
// =============================================================================

/// The closed set of severity levels tracked by level statistics.
///
/// Any other token in a line (e.g. CRITICAL) is invisible to level counts
/// but still contributes to the total entry count.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Returns all variants in display order.
    pub fn all() -> &'static [Severity] {
        &[Severity::Info, Severity::Warning, Severity::Error]
    }

    /// Canonical token as it appears in log lines.
    pub fn token(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }

    /// Token surrounded by single spaces, the exact needle used by the
    /// level-count substring test.
    pub(crate) fn padded_token(&self) -> &'static str {
        match self {
            Severity::Info => " INFO ",
            Severity::Warning => " WARNING ",
            Severity::Error => " ERROR ",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

// =============================================================================
// Compiled summary
// =============================================================================

/// The combined statistics bundle for one analysis run.
///
/// `BTreeMap` keeps the level order deterministic so repeated summaries over
/// an unchanged collection serialise byte-identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogSummary {
    /// Total lines in the collection, regardless of shape.
    pub total_entries: usize,

    /// Count per recognised severity level (zero-initialised over the full
    /// level set, so absent levels still appear with a count of 0).
    pub by_level: BTreeMap<Severity, usize>,

    /// Number of distinct user identifiers across all lines.
    pub unique_users: usize,

    /// Most recent raw lines, newest first.
    pub recent_entries: Vec<String>,
}
