use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use crate::error::AppError;
use crate::modules::reservation::{
    crud::ReservationStore,
    model::{Category, Reservation},
    schema::{DeleteCriteria, DeleteReport, ExportReport},
    selector::{SelectOutcome, Selector},
    stats::{Stats, Tally},
};
use crate::services::console::Console;
use crate::services::json_file;

fn summary_line(r: &Reservation) -> String {
    format!("- {}: {} ({})", r.id, r.description, r.time.as_deref().unwrap_or_default())
}

pub async fn delete_reservations<S, R, W>(
    store: &S,
    console: &mut Console<R, W>,
    selector: &Selector,
    criteria: &DeleteCriteria,
    assume_yes: bool,
) -> Result<DeleteReport, AppError>
where
    S: ReservationStore,
    R: BufRead,
    W: Write,
{
    let candidates = store.find_by_date(&criteria.date).await?;

    let selection = match selector.select(&candidates, criteria.target, criteria.quota) {
        SelectOutcome::NoCandidates => {
            console.say(format!("No reservations found for {}.", criteria.date))?;
            return Ok(DeleteReport::NoCandidates);
        }
        SelectOutcome::Selected(selection) if selection.is_empty() => {
            console.say("No reservations to delete for the given criteria.")?;
            return Ok(DeleteReport::NothingSelected);
        }
        SelectOutcome::Selected(selection) => selection,
    };

    tracing::info!(
        date = %criteria.date,
        target = %criteria.target,
        candidates = candidates.len(),
        selected = selection.len(),
        "selected reservations for deletion"
    );

    console.say("Reservations selected for deletion:")?;
    for reservation in selection.reservations() {
        console.say(summary_line(reservation))?;
    }

    let shortfall = selection.shortfall(criteria.quota);
    for category in [Category::Adult, Category::Child] {
        let missing = shortfall.of(category);
        if missing > 0 {
            console.say(format!(
                "Warning: only {} of {} requested {} reservations found.",
                selection.count(category),
                criteria.quota.of(category),
                category.label()
            ))?;
        }
    }

    if !assume_yes && !console.confirm("Confirm deletion of these reservations?")? {
        console.say("Operation cancelled.")?;
        return Ok(DeleteReport::Cancelled { selected: selection.len() });
    }

    let mut deleted = 0;
    let mut missing = 0;
    for reservation in selection.reservations() {
        if store.delete(reservation).await? {
            deleted += 1;
        } else {
            tracing::warn!(id = %reservation.id, "reservation vanished before it could be deleted");
            missing += 1;
        }
    }

    console.say(format!("Deleted {} reservations.", deleted))?;
    if missing > 0 {
        console.say(format!("{} reservations were already gone.", missing))?;
    }

    Ok(DeleteReport::Deleted {
        deleted,
        missing,
        adults: selection.adults(),
        children: selection.children(),
    })
}

pub async fn export_reservations<S, R, W>(
    store: &S,
    console: &mut Console<R, W>,
    path: &Path,
    assume_yes: bool,
) -> Result<ExportReport, AppError>
where
    S: ReservationStore,
    R: BufRead,
    W: Write,
{
    let prompt = format!("Download all reservations and overwrite '{}'?", path.display());
    if !assume_yes && !console.confirm(&prompt)? {
        console.say("Operation cancelled.")?;
        return Ok(ExportReport::Cancelled);
    }

    let records = store.export_all().await?;
    json_file::write_records(path, &records)?;

    console.say(format!(
        "Export complete: {} reservations saved to '{}'.",
        records.len(),
        path.display()
    ))?;

    Ok(ExportReport::Exported {
        count: records.len(),
        path: path.display().to_string(),
    })
}

pub fn count_reservations<R, W>(console: &mut Console<R, W>, path: &Path) -> Result<usize, AppError>
where
    R: BufRead,
    W: Write,
{
    let count = json_file::count_records(path)?;
    console.say(format!("Reservations found: {}", count))?;
    Ok(count)
}

fn tally_line(label: &str, tally: &Tally) -> String {
    format!(
        "{:<12} {:>7} {:>9} {:>6} {:>8}",
        label,
        tally.adults,
        tally.children,
        tally.total(),
        tally.revenue()
    )
}

fn tally_header(first: &str) -> String {
    format!(
        "{:<12} {:>7} {:>9} {:>6} {:>8}",
        first, "adults", "children", "total", "revenue"
    )
}

// Reads a JSON export and prints per-day, per-hour and half-hour slot tallies.
// With `csv`, the per-day table is also written there.
pub fn report_stats<R, W>(
    console: &mut Console<R, W>,
    path: &Path,
    selector: &Selector,
    date: Option<&str>,
    csv: Option<&Path>,
) -> Result<Stats, AppError>
where
    R: BufRead,
    W: Write,
{
    let records: Vec<Reservation> = json_file::read_records(path)?
        .iter()
        .map(Reservation::from_json)
        .collect();
    let stats = Stats::compute(&records, selector, date);

    tracing::info!(
        path = %path.display(),
        records = records.len(),
        counted = stats.total.total(),
        "computed reservation stats"
    );

    if stats.is_empty() {
        match date {
            Some(date) => console.say(format!("No reservations found for {}.", date))?,
            None => console.say("No reservations found.")?,
        }
    } else {
        console.say(tally_header("date"))?;
        for (day, tally) in &stats.daily {
            console.say(tally_line(day, tally))?;
        }

        console.say("")?;
        console.say(tally_header("hour"))?;
        for (hour, tally) in &stats.hourly {
            console.say(tally_line(&format!("{:02}:00", hour), tally))?;
        }

        console.say("")?;
        console.say(tally_header("slot"))?;
        for (slot, tally) in &stats.slots {
            console.say(tally_line(slot, tally))?;
        }

        console.say("")?;
        console.say(tally_line("TOTAL", &stats.total))?;
        if let Some((day, tally)) = stats.busiest_day() {
            console.say(format!("Busiest day: {} ({} reservations)", day, tally.total()))?;
        }
    }

    if let Some(csv_path) = csv {
        let file = File::create(csv_path).map_err(|e| AppError::io(csv_path, e))?;
        stats
            .write_daily_csv(BufWriter::new(file))
            .map_err(|e| AppError::Csv { path: csv_path.to_path_buf(), source: e })?;
        console.say(format!("Daily stats written to '{}'.", csv_path.display()))?;
    }

    Ok(stats)
}
