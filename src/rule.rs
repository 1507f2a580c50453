//! Core email rewrite rule.
//!
//! [`EmailRewriteRule`] is the per-commit callback handed to a history
//! rewriting engine: the engine enumerates commits and calls
//! [`apply`](EmailRewriteRule::apply) once per commit. Commits whose
//! committer date falls inside the rule's UTC year window get both email
//! fields overwritten with the replacement address; all other commits are
//! left untouched.

use chrono::{DateTime, Datelike, Utc};
use tracing::{debug, trace, warn};

use crate::config::RuleConfig;
use crate::models::CommitRecord;

/// The replacement address written into matching commits.
///
/// Rewritten commits carry these exact bytes: no surrounding whitespace,
/// no trailing newline.
pub const REPLACEMENT_EMAIL: &str = "eyesibar21@gmail.com";

/// First UTC year (inclusive) of the built-in rewrite window.
pub const DEFAULT_YEAR_START: i32 = 2025;

/// First UTC year past the window (exclusive) for the built-in rule.
pub const DEFAULT_YEAR_END: i32 = 2026;

/// Per-commit email rewrite rule.
///
/// Holds only immutable data after construction, so a single instance can
/// be shared across threads by an engine that rewrites commits in
/// parallel. Re-applying the rule to an already-rewritten commit
/// reproduces the same state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRewriteRule {
    /// Replacement email address, raw bytes.
    replacement: Vec<u8>,
    /// First UTC year (inclusive) the rule fires for.
    year_start: i32,
    /// First UTC year (exclusive) past the window.
    year_end: i32,
}

impl EmailRewriteRule {
    /// The built-in rule: rewrite commits from 2025 to [`REPLACEMENT_EMAIL`].
    pub fn new() -> Self {
        Self {
            replacement: REPLACEMENT_EMAIL.as_bytes().to_vec(),
            year_start: DEFAULT_YEAR_START,
            year_end: DEFAULT_YEAR_END,
        }
    }

    /// Build a rule from a validated [`RuleConfig`].
    ///
    /// A rule built from `RuleConfig::default()` behaves identically to
    /// [`EmailRewriteRule::new`].
    pub fn from_config(config: &RuleConfig) -> Self {
        Self {
            replacement: config.replacement_email.as_bytes().to_vec(),
            year_start: config.year_start,
            year_end: config.year_end,
        }
    }

    /// Whether a committer date (epoch seconds) falls inside the rewrite
    /// window, judged by its UTC calendar year.
    ///
    /// Timestamps with no representable UTC date never match.
    pub fn matches(&self, committer_date: i64) -> bool {
        match utc_year(committer_date) {
            Some(year) => self.year_start <= year && year < self.year_end,
            None => {
                warn!(committer_date, "committer date has no representable UTC date");
                false
            }
        }
    }

    /// Apply the rule to one commit record.
    ///
    /// Invoked once per commit by the rewriting engine. When the committer
    /// date matches, both `author_email` and `committer_email` are
    /// overwritten with the replacement address; otherwise the record is
    /// left unchanged.
    pub fn apply(&self, commit: &mut CommitRecord) {
        if self.matches(commit.committer_date) {
            debug!(
                committer_date = commit.committer_date,
                "rewriting commit author/committer emails"
            );
            commit.author_email = self.replacement.clone();
            commit.committer_email = self.replacement.clone();
        } else {
            trace!(
                committer_date = commit.committer_date,
                "commit outside rewrite window"
            );
        }
    }
}

impl Default for EmailRewriteRule {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive the UTC calendar year from an epoch-seconds timestamp.
fn utc_year(epoch_secs: i64) -> Option<i32> {
    DateTime::<Utc>::from_timestamp(epoch_secs, 0).map(|dt| dt.year())
}
