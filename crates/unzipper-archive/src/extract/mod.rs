//! Extraction of a flat source directory of zip and gzip files.
//!
//! Entries are handled one at a time in directory-listing order. Every
//! archive and output handle is dropped before the next entry is opened,
//! and the first error ends the run.
//!
//! Output files are streamed into a temporary file next to their target and
//! renamed into place once complete, so a failing entry leaves no partial
//! output behind.

use std::fs::{self, ReadDir};
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::format::{EntryClass, classify};
use crate::options::ExtractOptions;
use crate::report::RunReport;

mod gzip;
mod zip;

pub use self::gzip::decompress_gzip;
pub use self::zip::extract_zip;

const STAGING_PREFIX: &str = ".unzipper-";

/// Mode requested for new outputs; the umask still applies.
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o666;

/// Extract every zip and gzip entry of `source` into `destination`.
///
/// `source` is only read. Entries matching neither suffix are recorded in
/// [`RunReport::ignored`] and otherwise left alone.
pub fn extract_dir(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    options: &ExtractOptions,
) -> Result<RunReport> {
    let source = source.as_ref();
    let destination = destination.as_ref();
    let listing = open_source(source)?;
    let mut report = RunReport::default();

    for dir_entry in listing {
        let dir_entry = dir_entry?;
        let path = dir_entry.path();

        let class = classify(&dir_entry.file_name());
        debug!(entry = %path.display(), %class, "classified entry");

        match class {
            EntryClass::Zip => report.archives.push(extract_zip(&path, destination, options)?),
            EntryClass::Gzip => report.archives.push(decompress_gzip(&path, destination, options)?),
            EntryClass::Ignored => {
                debug!(entry = %path.display(), "ignoring entry");
                report.ignored.push(path);
            }
        }
    }

    info!(
        source = %source.display(),
        archives = report.archives.len(),
        files = report.files_written(),
        skipped = report.files_skipped(),
        bytes = report.total_bytes(),
        "extraction finished"
    );

    Ok(report)
}

fn open_source(source: &Path) -> Result<ReadDir> {
    match fs::metadata(source) {
        Ok(meta) if meta.is_dir() => Ok(fs::read_dir(source)?),
        Ok(_) => Err(Error::NotADirectory {
            path: source.to_path_buf(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::MissingSourceDirectory {
            path: source.to_path_buf(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Stream `reader` into `target` through a staged temporary file.
///
/// Read failures go through `read_error` so each format can report its own
/// corruption variant; write failures are [`Error::ExtractionFailed`].
fn write_file<R, F>(reader: &mut R, target: &Path, read_error: F) -> Result<u64>
where
    R: Read + ?Sized,
    F: Fn(io::Error) -> Error,
{
    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    ensure_directory(parent)?;

    let failed = |source: io::Error| Error::ExtractionFailed {
        path: target.to_path_buf(),
        source,
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(STAGING_PREFIX);
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(NEW_FILE_MODE));
    }
    let mut staged = builder.tempfile_in(parent).map_err(failed)?;

    let mut buffer = [0u8; 8192];
    let mut written = 0u64;
    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(read_error(e)),
        };
        staged.write_all(&buffer[..n]).map_err(failed)?;
        written += n as u64;
    }
    staged.as_file().sync_all().map_err(failed)?;

    // An overwritten output keeps its mode.
    if let Ok(existing) = fs::metadata(target) {
        fs::set_permissions(staged.path(), existing.permissions()).map_err(failed)?;
    }

    staged.persist(target).map_err(|e| failed(e.error))?;
    Ok(written)
}

fn ensure_directory(path: &Path) -> Result<()> {
    if !path.is_dir() {
        fs::create_dir_all(path).map_err(|e| Error::DirectoryCreationFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}
