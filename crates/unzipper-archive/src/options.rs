use std::path::Path;

use crate::Result;
use crate::error::Error;

#[derive(Clone, Debug, Default)]
pub struct ExtractOptions {
    pub overwrite: OverwritePolicy,
}

impl ExtractOptions {
    pub fn overwrite(mut self, policy: OverwritePolicy) -> Self {
        self.overwrite = policy;
        self
    }
}

/// What to do when an output file already exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    /// Replace the existing file without asking.
    #[default]
    Overwrite,
    /// Keep the existing file and move on.
    Skip,
    /// Fail the run with [`Error::OutputExists`].
    Error,
}

impl OverwritePolicy {
    /// Returns `true` when `target` should be written.
    pub fn admit(self, target: &Path) -> Result<bool> {
        if !target.try_exists()? {
            return Ok(true);
        }
        match self {
            Self::Overwrite => Ok(true),
            Self::Skip => Ok(false),
            Self::Error => Err(Error::OutputExists {
                path: target.to_path_buf(),
            }),
        }
    }
}
