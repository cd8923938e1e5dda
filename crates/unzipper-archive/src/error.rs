use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("source directory '{path}' does not exist")]
    MissingSourceDirectory { path: PathBuf },

    #[error("source path '{path}' is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("'{path}' is not a valid zip archive: {source}")]
    CorruptZip {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    #[error("'{path}' is not a valid gzip stream: {source}")]
    CorruptGzip { path: PathBuf, source: io::Error },

    #[error("zip-slip attack detected: entry '{entry}' resolves outside '{base}'")]
    ZipSlip { entry: PathBuf, base: PathBuf },

    #[error("invalid entry name '{path}'")]
    InvalidPath { path: PathBuf },

    #[error("failed to extract '{path}': {source}")]
    ExtractionFailed { path: PathBuf, source: io::Error },

    #[error("failed to create directory: {path}: {source}")]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },

    #[error("output '{path}' already exists")]
    OutputExists { path: PathBuf },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
