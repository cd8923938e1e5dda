//! Zip and gzip extraction from a flat source directory.
//!
//! # Architecture
//!
//! - `format.rs` - Entry classification by name suffix
//! - `sanitize.rs` - Path sanitization (zip-slip prevention)
//! - `options.rs` - Extraction options and overwrite policy
//! - `extract/` - Directory loop and per-format implementations
//! - `report.rs` - Per-archive and per-run results

pub use error::{Error, Result};
pub use extract::{decompress_gzip, extract_dir, extract_zip};
pub use format::{EntryClass, classify, gzip_output_name};
pub use options::{ExtractOptions, OverwritePolicy};
pub use report::{ArchiveReport, EntryOutcome, ExtractedEntry, RunReport};
pub use sanitize::{SanitizedPath, sanitize_path};

pub mod extract;
pub mod options;
mod error;
mod format;
mod report;
mod sanitize;
