// LogTally - core/stats.rs
//
// Statistics Engine: read queries over a fixed line collection.
// Unique-user counting, per-level counts, recency ordering, and the
// compiled summary. Owns no I/O; every operation runs to completion
// synchronously.

use crate::core::extract;
use crate::core::model::{LineCollection, LogSummary, Severity};
use crate::util::constants;
use crate::util::error::StatsError;
use chrono::NaiveDateTime;
use std::collections::{BTreeMap, HashSet};

/// Statistics over one immutable line collection.
///
/// All operations are read queries. The single mutable field caches the
/// last computed level counts as incidental state; nothing depends on it
/// for correctness.
#[derive(Debug)]
pub struct LogStats {
    entries: Vec<String>,
    total_entries: usize,
    last_stats: Option<BTreeMap<Severity, usize>>,
}

impl LogStats {
    /// Build an engine over the lines of one analysis run.
    pub fn new(collection: LineCollection) -> Self {
        Self {
            total_entries: collection.total_entries,
            entries: collection.entries,
            last_stats: None,
        }
    }

    /// Total number of lines in the collection.
    pub fn total_entries(&self) -> usize {
        self.total_entries
    }

    /// Count distinct user identifiers across all lines.
    ///
    /// Each line is run through the ordered extractor list; at most one
    /// identifier per line, duplicates across lines collapse. Lines with no
    /// recognisable user pattern contribute nothing.
    pub fn unique_user_count(&self) -> usize {
        let mut users: HashSet<&str> = HashSet::new();
        for entry in &self.entries {
            if let Some(user) = extract::extract_user(entry) {
                tracing::debug!(user, entry = %entry, "Found user");
                users.insert(user);
            }
        }
        users.len()
    }

    /// Count lines per severity level.
    ///
    /// A line counts toward a level when it contains the token surrounded
    /// by single spaces. A line containing two level tokens increments both
    /// counters. The result is zero-initialised over the full level set and
    /// cached on the engine.
    pub fn level_counts(&mut self) -> BTreeMap<Severity, usize> {
        let mut counts: BTreeMap<Severity, usize> =
            Severity::all().iter().map(|s| (*s, 0)).collect();

        for entry in &self.entries {
            for severity in Severity::all() {
                if entry.contains(severity.padded_token()) {
                    *counts.entry(*severity).or_insert(0) += 1;
                }
            }
        }

        self.last_stats = Some(counts.clone());
        counts
    }

    /// The level counts from the most recent `level_counts` call, if any.
    pub fn last_level_counts(&self) -> Option<&BTreeMap<Severity, usize>> {
        self.last_stats.as_ref()
    }

    /// Return the `count` most recent lines, newest first.
    ///
    /// `count` must be positive; a count above the total entry count clamps
    /// down silently. Every line's leading two tokens must parse as
    /// `YYYY-MM-DD HH:MM:SS` — one malformed line fails the whole query,
    /// since an ordering over a partially parsed set would be meaningless.
    /// Equal timestamps keep file order (stable sort).
    pub fn recent_entries(&self, count: i64) -> Result<Vec<String>, StatsError> {
        if count <= 0 {
            return Err(StatsError::CountOutOfRange { requested: count });
        }
        let take = (count as usize).min(self.total_entries);

        let mut stamped: Vec<(NaiveDateTime, &String)> = Vec::with_capacity(self.entries.len());
        for (idx, entry) in self.entries.iter().enumerate() {
            stamped.push((parse_leading_timestamp(entry, idx + 1)?, entry));
        }
        stamped.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(stamped
            .into_iter()
            .take(take)
            .map(|(_, entry)| entry.clone())
            .collect())
    }

    /// Compile the combined summary with the default recent-entry count.
    ///
    /// All four sub-results are recomputed on every call; two calls over an
    /// unchanged collection yield identical summaries.
    pub fn summary(&mut self) -> Result<LogSummary, StatsError> {
        self.summary_with(constants::DEFAULT_RECENT_COUNT)
    }

    /// Compile the combined summary with an explicit recent-entry count.
    pub fn summary_with(&mut self, recent_count: i64) -> Result<LogSummary, StatsError> {
        let recent_entries = self.recent_entries(recent_count)?;
        let summary = LogSummary {
            total_entries: self.total_entries,
            by_level: self.level_counts(),
            unique_users: self.unique_user_count(),
            recent_entries,
        };

        tracing::debug!(
            total_entries = summary.total_entries,
            unique_users = summary.unique_users,
            recent = summary.recent_entries.len(),
            "Summary compiled"
        );

        Ok(summary)
    }
}

/// Parse a line's first two whitespace-separated tokens as a timestamp.
fn parse_leading_timestamp(entry: &str, line_number: usize) -> Result<NaiveDateTime, StatsError> {
    let mut tokens = entry.split_whitespace();
    let (date, time) = match (tokens.next(), tokens.next()) {
        (Some(date), Some(time)) => (date, time),
        _ => return Err(StatsError::MissingTimestamp { line_number }),
    };

    let raw = format!("{date} {time}");
    NaiveDateTime::parse_from_str(&raw, constants::TIMESTAMP_FORMAT).map_err(|source| {
        StatsError::TimestampParse {
            line_number,
            raw,
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The canonical seven-line sample: 3 INFO, 2 WARNING, 1 ERROR,
    /// 1 CRITICAL, three distinct user emails, timestamps 09:15-16:42.
    fn sample_lines() -> Vec<String> {
        [
            "2025-10-20 09:15:42 INFO User registration: sarah.miller@techcorp.com",
            "2025-10-20 10:22:18 WARNING Disk space below 20% on /dev/sda1",
            "2025-10-20 11:45:33 ERROR Failed to send email to admin@company.org",
            "2025-10-20 13:08:55 INFO User login: bob.wilson@startup.io",
            "2025-10-20 14:30:12 CRITICAL System reboot required after update",
            "2025-10-20 15:17:29 WARNING API rate limit exceeded for client 192.168.1.100",
            "2025-10-20 16:42:07 INFO Password changed for user: kate.jones@domain.net",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn sample_engine() -> LogStats {
        LogStats::new(LineCollection::from_lines(sample_lines()))
    }

    // -------------------------------------------------------------------------
    // Unique users
    // -------------------------------------------------------------------------

    #[test]
    fn test_unique_user_count_deduplicates() {
        let engine = sample_engine();
        // sarah.miller, bob.wilson, kate.jones; the ERROR line's bare email
        // has no recognised user prefix and must not count.
        assert_eq!(engine.unique_user_count(), 3);
    }

    #[test]
    fn test_unique_user_count_collapses_repeat_logins() {
        let engine = LogStats::new(LineCollection::from_lines(vec![
            "2025-10-20 09:00:00 INFO User login: same@user.com".to_string(),
            "2025-10-20 10:00:00 INFO User login: same@user.com".to_string(),
        ]));
        assert_eq!(engine.unique_user_count(), 1);
    }

    #[test]
    fn test_unique_user_count_without_user_lines_is_zero() {
        let engine = LogStats::new(LineCollection::from_lines(vec![
            "2025-10-20 09:00:00 INFO Service started".to_string(),
            "2025-10-20 09:01:00 WARNING Slow response".to_string(),
        ]));
        assert_eq!(engine.unique_user_count(), 0);
    }

    // -------------------------------------------------------------------------
    // Level counts
    // -------------------------------------------------------------------------

    #[test]
    fn test_level_counts_exact() {
        let mut engine = sample_engine();
        let counts = engine.level_counts();
        assert_eq!(counts[&Severity::Info], 3);
        assert_eq!(counts[&Severity::Warning], 2);
        assert_eq!(counts[&Severity::Error], 1);
        // CRITICAL is outside the closed level set.
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_level_counts_zero_initialised() {
        let mut engine = LogStats::new(LineCollection::default());
        let counts = engine.level_counts();
        assert_eq!(counts[&Severity::Info], 0);
        assert_eq!(counts[&Severity::Warning], 0);
        assert_eq!(counts[&Severity::Error], 0);
    }

    #[test]
    fn test_level_token_requires_surrounding_spaces() {
        let mut engine = LogStats::new(LineCollection::from_lines(vec![
            // Token at line start has no leading space: not counted.
            "INFO leading token".to_string(),
            // Token embedded in a longer word: not counted.
            "2025-10-20 09:00:00 INFORMATIONAL notice".to_string(),
        ]));
        let counts = engine.level_counts();
        assert_eq!(counts[&Severity::Info], 0);
    }

    #[test]
    fn test_line_with_two_tokens_double_counts() {
        // One line can legitimately increment both INFO and WARNING.
        let mut engine = LogStats::new(LineCollection::from_lines(vec![
            "2025-10-20 09:00:00 INFO escalated to WARNING state".to_string(),
        ]));
        let counts = engine.level_counts();
        assert_eq!(counts[&Severity::Info], 1);
        assert_eq!(counts[&Severity::Warning], 1);
    }

    #[test]
    fn test_level_counts_cached() {
        let mut engine = sample_engine();
        assert!(engine.last_level_counts().is_none());
        let counts = engine.level_counts();
        assert_eq!(engine.last_level_counts(), Some(&counts));
    }

    // -------------------------------------------------------------------------
    // Recent entries
    // -------------------------------------------------------------------------

    #[test]
    fn test_recent_five_descending() {
        let engine = sample_engine();
        let recent = engine.recent_entries(5).unwrap();
        assert_eq!(recent.len(), 5);
        assert!(recent[0].starts_with("2025-10-20 16:42:07"));
        assert!(recent[1].starts_with("2025-10-20 15:17:29"));
        assert!(recent[2].starts_with("2025-10-20 14:30:12"));
        assert!(recent[3].starts_with("2025-10-20 13:08:55"));
        assert!(recent[4].starts_with("2025-10-20 11:45:33"));
    }

    #[test]
    fn test_recent_count_clamps_to_total() {
        let engine = sample_engine();
        let recent = engine.recent_entries(100).unwrap();
        assert_eq!(recent.len(), 7);
        assert!(recent[0].starts_with("2025-10-20 16:42:07"));
        assert!(recent[6].starts_with("2025-10-20 09:15:42"));
    }

    #[test]
    fn test_recent_count_zero_or_negative_is_range_error() {
        let engine = sample_engine();
        assert!(matches!(
            engine.recent_entries(0),
            Err(StatsError::CountOutOfRange { requested: 0 })
        ));
        assert!(matches!(
            engine.recent_entries(-3),
            Err(StatsError::CountOutOfRange { requested: -3 })
        ));
    }

    #[test]
    fn test_malformed_timestamp_fails_whole_query() {
        let engine = LogStats::new(LineCollection::from_lines(vec![
            "2025-10-20 09:00:00 INFO fine".to_string(),
            "not-a-date 09:01:00 INFO broken".to_string(),
        ]));
        assert!(matches!(
            engine.recent_entries(1),
            Err(StatsError::TimestampParse { line_number: 2, .. })
        ));
    }

    #[test]
    fn test_line_without_tokens_fails_whole_query() {
        let engine = LogStats::new(LineCollection::from_lines(vec![
            "2025-10-20 09:00:00 INFO fine".to_string(),
            "short".to_string(),
        ]));
        assert!(matches!(
            engine.recent_entries(1),
            Err(StatsError::MissingTimestamp { line_number: 2 })
        ));
    }

    #[test]
    fn test_equal_timestamps_keep_file_order() {
        let engine = LogStats::new(LineCollection::from_lines(vec![
            "2025-10-20 09:00:00 INFO first".to_string(),
            "2025-10-20 09:00:00 INFO second".to_string(),
        ]));
        let recent = engine.recent_entries(2).unwrap();
        assert!(recent[0].ends_with("first"));
        assert!(recent[1].ends_with("second"));
    }

    // -------------------------------------------------------------------------
    // Compiled summary
    // -------------------------------------------------------------------------

    #[test]
    fn test_summary_bundles_all_statistics() {
        let mut engine = sample_engine();
        let summary = engine.summary().unwrap();
        assert_eq!(summary.total_entries, 7);
        assert_eq!(summary.unique_users, 3);
        assert_eq!(summary.by_level[&Severity::Info], 3);
        assert_eq!(summary.recent_entries.len(), 5);
        assert!(summary.recent_entries[0].starts_with("2025-10-20 16:42:07"));
    }

    #[test]
    fn test_summary_is_idempotent() {
        let mut engine = sample_engine();
        let first = engine.summary().unwrap();
        let second = engine.summary().unwrap();
        assert_eq!(first, second);
        // Byte-identical once serialised, too.
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_summary_of_empty_collection() {
        let mut engine = LogStats::new(LineCollection::default());
        let summary = engine.summary().unwrap();
        assert_eq!(summary.total_entries, 0);
        assert_eq!(summary.unique_users, 0);
        assert!(summary.recent_entries.is_empty());
        assert_eq!(summary.by_level[&Severity::Error], 0);
    }
}
