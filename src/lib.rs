//! Per-commit email rewrite rule for git history rewriting engines.
//!
//! This crate provides the callback side of a history rewrite: an engine
//! that walks commits hands each record to [`EmailRewriteRule::apply`],
//! which overwrites the author and committer email addresses of commits
//! whose committer date falls inside a UTC year window. Commit graph
//! traversal, object rewriting, and ref updates belong to the engine, not
//! this crate.

pub mod config;
pub mod errors;
pub mod models;
pub mod rule;

// Re-exports for convenience.
pub use config::RuleConfig;
pub use models::CommitRecord;
pub use rule::{EmailRewriteRule, REPLACEMENT_EMAIL};
