//! Run with: cargo run --bin export_reservations

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clienti_tools::{
    config::{self, settings::Settings},
    modules::reservation::{controller, schema::ExportReport},
    services::console::Console,
    AppState,
};

/// Export the whole reservation collection to a local JSON file.
#[derive(Debug, Parser)]
struct Args {
    /// Output file (defaults to CLIENTI_EXPORT_PATH)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
    /// Overwrite without asking
    #[arg(long, short = 'y')]
    yes: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    config::logging::init();

    let args = Args::parse();
    let settings = Settings::from_env();
    let path = args.output.unwrap_or_else(|| settings.export_path.clone());
    let mut console = Console::stdio();

    let state = AppState::connect(settings)
        .await
        .context("could not connect to MongoDB")?;
    let store = state.reservations();

    let report = controller::export_reservations(&store, &mut console, &path, args.yes)
        .await
        .context("export failed")?;

    if let ExportReport::Exported { .. } = report {
        controller::count_reservations(&mut console, &path)
            .with_context(|| format!("error while reading '{}'", path.display()))?;
    }

    Ok(())
}
