use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use unzipper_archive::{ExtractOptions, extract_dir};

use crate::cli::App;

mod cli;

fn main() -> Result<()> {
    let app = App::parse();
    init_logging(app.log_level());

    let options = ExtractOptions::default().overwrite(app.on_conflict.into());
    extract_dir(&app.source, &app.dest, &options).with_context(|| {
        format!(
            "failed to extract archives from '{}' into '{}'",
            app.source.display(),
            app.dest.display()
        )
    })?;

    Ok(())
}

/// Logs go to stderr. `RUST_LOG` overrides the level picked from the flags.
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
