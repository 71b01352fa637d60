//! Run with: cargo run --bin stats_reservations -- clienti.json --date 2025-08-15 --csv daily.csv

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clienti_tools::{
    config::{self, settings::Settings},
    modules::reservation::{controller, selector::Selector},
    services::console::Console,
};

/// Adult/child counts and revenue from a JSON export of the reservation collection.
#[derive(Debug, Parser)]
struct Args {
    /// Export file to read (defaults to CLIENTI_EXPORT_PATH)
    path: Option<PathBuf>,
    /// Only count reservations on this date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,
    /// Also write the per-day table to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    config::logging::init();

    let args = Args::parse();
    let settings = Settings::from_env();
    let path = args.path.unwrap_or_else(|| settings.export_path.clone());
    let selector = Selector::new(&settings.child_marker);
    let mut console = Console::stdio();

    controller::report_stats(
        &mut console,
        &path,
        &selector,
        args.date.as_deref().map(str::trim),
        args.csv.as_deref(),
    )
    .with_context(|| format!("error while reading '{}'", path.display()))?;

    Ok(())
}
