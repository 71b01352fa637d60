//! Run with: cargo run --bin delete_reservations -- --date 2025-08-15 --time 20:30

use anyhow::Context;
use clap::Parser;
use clienti_tools::{
    config::{self, settings::Settings},
    modules::reservation::{controller, schema::DeleteRequest, selector::Selector},
    services::console::Console,
    AppState,
};

/// Delete the reservations closest to a time of day on a given date.
#[derive(Debug, Parser)]
struct Args {
    /// Reservation date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<String>,
    /// Target time (HH:MM, 24h)
    #[arg(long)]
    time: Option<String>,
    /// How many adult reservations to delete
    #[arg(long)]
    adults: Option<u32>,
    /// How many child reservations to delete
    #[arg(long)]
    children: Option<u32>,
    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    yes: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    config::logging::init();

    let args = Args::parse();
    let settings = Settings::from_env();
    let mut console = Console::stdio();

    let request = DeleteRequest {
        date: match args.date {
            Some(date) => date,
            None => console.ask("Date (YYYY-MM-DD): ")?,
        },
        time: match args.time {
            Some(time) => time,
            None => console.ask("Time (HH:MM, 24h): ")?,
        },
        adults: match args.adults {
            Some(n) => n,
            None => console.ask_parsed("How many adults to delete? ")?,
        },
        children: match args.children {
            Some(n) => n,
            None => console.ask_parsed("How many children to delete? ")?,
        },
    };
    let criteria = request.into_criteria()?;

    let state = AppState::connect(settings)
        .await
        .context("could not connect to MongoDB")?;
    let store = state.reservations();
    let selector = Selector::new(&state.settings.child_marker);

    let report = controller::delete_reservations(&store, &mut console, &selector, &criteria, args.yes)
        .await
        .context("delete failed")?;

    tracing::info!(?report, "done");
    Ok(())
}
