//! # hab-content
//!
//! The ingestion half of the Habitat pipeline: file discovery over the
//! configured content roots and legacy paths, envelope-shape normalization of
//! the heterogeneous hand-authored JSON files, bounded-concurrency loading,
//! and the deterministic per-kind merge fold.
//!
//! Every stage accumulates issues into an [`hab_core::IssueSet`] instead of
//! raising; one malformed file never aborts a run.

pub mod discover;
pub mod envelope;
pub mod loader;
pub mod merge;

pub use discover::{DiscoveryOutcome, discover};
pub use loader::{LoadOutcome, LoadedFile, load_all};
pub use merge::{MergedContent, merge};
