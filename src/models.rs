//! Domain model types shared with the embedding rewrite engine.

use serde::{Deserialize, Serialize};

/// Mutable view of one commit's rewrite-relevant metadata.
///
/// The rewriting engine owns the full commit object; this record carries
/// the three fields the email rewrite rule reads and writes. The email
/// fields are raw bytes because git identities are not guaranteed to be
/// valid UTF-8.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitRecord {
    /// Committer timestamp, seconds since the Unix epoch (UTC).
    pub committer_date: i64,
    /// Author email address, raw bytes.
    pub author_email: Vec<u8>,
    /// Committer email address, raw bytes.
    pub committer_email: Vec<u8>,
}
