//! Run with: cargo run --bin count_reservations -- clienti.json

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clienti_tools::{
    config::{self, settings::Settings},
    modules::reservation::controller,
    services::console::Console,
};

/// Count the records in a JSON export of the reservation collection.
#[derive(Debug, Parser)]
struct Args {
    /// Export file to read (defaults to CLIENTI_EXPORT_PATH)
    path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    config::logging::init();

    let args = Args::parse();
    let path = args.path.unwrap_or_else(|| Settings::from_env().export_path);
    let mut console = Console::stdio();

    controller::count_reservations(&mut console, &path)
        .with_context(|| format!("error while reading '{}'", path.display()))?;

    Ok(())
}
