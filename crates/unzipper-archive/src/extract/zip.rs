use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ::zip::ZipArchive;
use ::zip::result::ZipError;
use tracing::{debug, info};

use super::{ensure_directory, write_file};
use crate::error::{Error, Result};
use crate::format::EntryClass;
use crate::options::ExtractOptions;
use crate::report::{ArchiveReport, EntryOutcome, ExtractedEntry};
use crate::sanitize::{SanitizedPath, sanitize_path};

/// Unpack every member of the zip archive at `path` into `destination`.
///
/// Member paths are kept relative to `destination`. Existing files are
/// handled according to [`ExtractOptions::overwrite`].
pub fn extract_zip(path: &Path, destination: &Path, options: &ExtractOptions) -> Result<ArchiveReport> {
    let corrupt = |source: ZipError| Error::CorruptZip {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file)).map_err(corrupt)?;
    let mut report = ArchiveReport::new(path.to_path_buf(), EntryClass::Zip);

    info!(archive = %path.display(), members = archive.len(), "extracting zip archive");

    for index in 0..archive.len() {
        let mut member = archive.by_index(index).map_err(corrupt)?;
        let SanitizedPath {
            original: original_path,
            relative,
            resolved: target,
        } = sanitize_path(member.name(), destination)?;

        if member.is_dir() {
            ensure_directory(&target)?;
            report.push(ExtractedEntry {
                original_path,
                target_path: target,
                size: 0,
                is_directory: true,
                outcome: EntryOutcome::Written,
            });
            continue;
        }

        let (size, outcome) = if options.overwrite.admit(&target)? {
            debug!(member = %relative.display(), target = %target.display(), "writing");
            let size = write_file(&mut member, &target, |e| corrupt(ZipError::Io(e)))?;
            (size, EntryOutcome::Written)
        } else {
            debug!(member = %relative.display(), target = %target.display(), "output exists, skipping");
            (member.size(), EntryOutcome::Skipped)
        };

        report.push(ExtractedEntry {
            original_path,
            target_path: target,
            size,
            is_directory: false,
            outcome,
        });
    }

    Ok(report)
}
