//! The configuration document and its merge rules.
//!
//! # Read/write asymmetry
//!
//! Reads and writes treat the document differently:
//!
//! - **Reads** always produce a complete [`schema::AppConfig`].  Whatever the
//!   on-disk JSON contains is laid over the defaults by
//!   [`merge::merge_over_defaults`], so callers never see a missing section.
//! - **Writes** persist exactly what the caller supplied.  No merge happens
//!   on the way to disk; the next read fills the gaps again.

/// Explicit field-by-field overlay of on-disk JSON onto the defaults.
pub mod merge;

/// Typed sections and their literal defaults.
pub mod schema;
