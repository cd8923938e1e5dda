use std::path::PathBuf;

use crate::format::EntryClass;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryOutcome {
    Written,
    /// Left alone because the target existed under [`crate::OverwritePolicy::Skip`].
    Skipped,
}

#[derive(Clone, Debug)]
pub struct ExtractedEntry {
    pub original_path: PathBuf,
    pub target_path: PathBuf,
    pub size: u64,
    pub is_directory: bool,
    pub outcome: EntryOutcome,
}

/// Result of processing one zip or gzip entry of the source directory.
#[derive(Clone, Debug)]
pub struct ArchiveReport {
    pub source: PathBuf,
    pub class: EntryClass,
    pub entries: Vec<ExtractedEntry>,
    pub total_bytes: u64,
}

impl ArchiveReport {
    pub(crate) fn new(source: PathBuf, class: EntryClass) -> Self {
        Self {
            source,
            class,
            entries: Vec::new(),
            total_bytes: 0,
        }
    }

    pub(crate) fn push(&mut self, entry: ExtractedEntry) {
        if entry.outcome == EntryOutcome::Written {
            self.total_bytes += entry.size;
        }
        self.entries.push(entry);
    }

    pub fn written(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| !e.is_directory && e.outcome == EntryOutcome::Written)
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.outcome == EntryOutcome::Skipped)
            .count()
    }
}

/// Result of one pass over the source directory.
#[derive(Clone, Debug, Default)]
pub struct RunReport {
    pub archives: Vec<ArchiveReport>,
    pub ignored: Vec<PathBuf>,
}

impl RunReport {
    pub fn files_written(&self) -> usize {
        self.archives.iter().map(ArchiveReport::written).sum()
    }

    pub fn files_skipped(&self) -> usize {
        self.archives.iter().map(ArchiveReport::skipped).sum()
    }

    pub fn total_bytes(&self) -> u64 {
        self.archives.iter().map(|a| a.total_bytes).sum()
    }
}
