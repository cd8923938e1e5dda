use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use unzipper_archive::OverwritePolicy;

pub const DEFAULT_SOURCE: &str = "../zipped/";

#[derive(Clone, Debug, Parser)]
#[command(name = "unzipper", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct App {
    /// Directory holding the .zip and .gz files
    #[arg(env = "UNZIPPER_SOURCE", default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Directory the extracted files are written to
    #[arg(short = 'C', long = "dest", default_value = ".")]
    pub dest: PathBuf,

    /// What to do when an output file already exists
    #[arg(long, value_enum, default_value_t = OnConflict::Overwrite)]
    pub on_conflict: OnConflict,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OnConflict {
    Overwrite,
    Skip,
    Error,
}

impl From<OnConflict> for OverwritePolicy {
    fn from(value: OnConflict) -> Self {
        match value {
            OnConflict::Overwrite => OverwritePolicy::Overwrite,
            OnConflict::Skip => OverwritePolicy::Skip,
            OnConflict::Error => OverwritePolicy::Error,
        }
    }
}

impl App {
    /// Default log directive when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
