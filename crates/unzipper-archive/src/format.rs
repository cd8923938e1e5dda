use std::ffi::OsStr;
use std::fmt;
use std::path::PathBuf;

use crate::error::{Error, Result};

const ZIP_SUFFIX: &str = "zip";
const GZIP_SUFFIX: &str = ".gz";

/// Branch taken for a source directory entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryClass {
    Zip,
    Gzip,
    Ignored,
}

impl EntryClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Gzip => "gzip",
            Self::Ignored => "ignored",
        }
    }
}

impl fmt::Display for EntryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a source directory entry by name alone.
///
/// The zip branch matches a bare `zip` suffix, not `.zip`: a file called
/// `notzip` is opened as an archive too. The zip check runs first.
pub fn classify(name: &OsStr) -> EntryClass {
    let name = name.to_string_lossy();
    if name.ends_with(ZIP_SUFFIX) {
        EntryClass::Zip
    } else if name.ends_with(GZIP_SUFFIX) {
        EntryClass::Gzip
    } else {
        EntryClass::Ignored
    }
}

/// Output file name for a gzip entry: the entry name minus its `.gz`.
pub fn gzip_output_name(name: &OsStr) -> Result<PathBuf> {
    name.to_str()
        .and_then(|n| n.strip_suffix(GZIP_SUFFIX))
        .filter(|stem| !stem.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| Error::InvalidPath {
            path: PathBuf::from(name),
        })
}
