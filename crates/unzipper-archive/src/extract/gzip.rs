use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::mem;
use std::path::{Path, PathBuf};

use flate2::bufread::GzDecoder;
use tracing::{debug, info};

use super::write_file;
use crate::error::{Error, Result};
use crate::format::{EntryClass, gzip_output_name};
use crate::options::ExtractOptions;
use crate::report::{ArchiveReport, EntryOutcome, ExtractedEntry};

/// Decompress the gzip file at `path` into `destination`.
///
/// The output is named after `path` with its `.gz` suffix removed.
/// Concatenated gzip members are decoded back to back into that one file.
/// An empty file decodes to an empty output, and NUL padding after the last
/// member is ignored.
pub fn decompress_gzip(path: &Path, destination: &Path, options: &ExtractOptions) -> Result<ArchiveReport> {
    let name = path.file_name().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
    })?;
    let output_name = gzip_output_name(name)?;
    let target = destination.join(&output_name);
    let mut report = ArchiveReport::new(path.to_path_buf(), EntryClass::Gzip);

    if !options.overwrite.admit(&target)? {
        debug!(target = %target.display(), "output exists, skipping");
        report.push(ExtractedEntry {
            original_path: PathBuf::from(name),
            target_path: target,
            size: 0,
            is_directory: false,
            outcome: EntryOutcome::Skipped,
        });
        return Ok(report);
    }

    let file = File::open(path)?;
    let mut decoder = GzipMembers::new(BufReader::new(file));
    let size = write_file(&mut decoder, &target, |source| Error::CorruptGzip {
        path: path.to_path_buf(),
        source,
    })?;

    info!(archive = %path.display(), output = %output_name.display(), bytes = size, "decompressed gzip stream");

    report.push(ExtractedEntry {
        original_path: PathBuf::from(name),
        target_path: target,
        size,
        is_directory: false,
        outcome: EntryOutcome::Written,
    });

    Ok(report)
}

/// Reads gzip members one after another until end of input.
///
/// Zero bytes are skipped between members but not before the first one,
/// so a file of NULs is still rejected as a bad header.
struct GzipMembers<R: BufRead> {
    state: MemberState<R>,
    after_member: bool,
}

enum MemberState<R: BufRead> {
    Between(R),
    Decoding(GzDecoder<R>),
    Done,
}

impl<R: BufRead> GzipMembers<R> {
    fn new(reader: R) -> Self {
        Self {
            state: MemberState::Between(reader),
            after_member: false,
        }
    }
}

impl<R: BufRead> Read for GzipMembers<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        loop {
            match mem::replace(&mut self.state, MemberState::Done) {
                MemberState::Done => return Ok(0),
                MemberState::Between(mut reader) => {
                    if !has_member(&mut reader, self.after_member)? {
                        return Ok(0);
                    }
                    self.state = MemberState::Decoding(GzDecoder::new(reader));
                }
                MemberState::Decoding(mut decoder) => {
                    let n = decoder.read(buf)?;
                    if n > 0 {
                        self.state = MemberState::Decoding(decoder);
                        return Ok(n);
                    }
                    self.after_member = true;
                    self.state = MemberState::Between(decoder.into_inner());
                }
            }
        }
    }
}

/// Whether another member starts here, consuming NUL padding if allowed.
fn has_member<R: BufRead>(reader: &mut R, skip_padding: bool) -> io::Result<bool> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(false);
        }
        if !skip_padding {
            return Ok(true);
        }
        let zeros = buf.iter().take_while(|b| **b == 0).count();
        let rest = buf.len() - zeros;
        reader.consume(zeros);
        if rest > 0 {
            return Ok(true);
        }
    }
}
