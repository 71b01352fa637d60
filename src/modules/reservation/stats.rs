use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::modules::reservation::model::{Category, Reservation};
use crate::modules::reservation::selector::Selector;

pub const PRICE_ADULT: u32 = 3;
pub const PRICE_CHILD: u32 = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub adults: u32,
    pub children: u32,
}

impl Tally {
    pub fn new(adults: u32, children: u32) -> Self {
        Self { adults, children }
    }

    fn add(&mut self, category: Category) {
        match category {
            Category::Adult => self.adults += 1,
            Category::Child => self.children += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.adults.saturating_add(self.children)
    }

    pub fn revenue(&self) -> u32 {
        self.adults * PRICE_ADULT + self.children * PRICE_CHILD
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub daily: BTreeMap<String, Tally>,
    pub hourly: BTreeMap<u32, Tally>,
    pub slots: BTreeMap<String, Tally>,
    pub total: Tally,
}

#[derive(Debug, Serialize)]
struct DailyCsvRow<'a> {
    date: &'a str,
    clients: u32,
    adults: u32,
    children: u32,
    revenue: u32,
}

impl Stats {
    // Records without a date are skipped; `date` keeps only exact matches
    pub fn compute(records: &[Reservation], selector: &Selector, date: Option<&str>) -> Self {
        let mut stats = Stats::default();

        let kept = records
            .iter()
            .filter(|r| !r.date.is_empty())
            .filter(|r| date.map_or(true, |d| r.date == d));

        for reservation in kept {
            let category = selector.category(reservation);
            let time = reservation.time_of_day();

            stats.daily.entry(reservation.date.clone()).or_default().add(category);
            stats.hourly.entry(time.hour()).or_default().add(category);
            stats.slots.entry(time.half_hour_slot()).or_default().add(category);
            stats.total.add(category);
        }

        stats
    }

    pub fn is_empty(&self) -> bool {
        self.total.total() == 0
    }

    pub fn busiest_day(&self) -> Option<(&str, Tally)> {
        // Reversed so that ties go to the earliest date
        self.daily
            .iter()
            .rev()
            .max_by_key(|(_, tally)| tally.total())
            .map(|(date, tally)| (date.as_str(), *tally))
    }

    pub fn write_daily_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
        wtr.write_record(["date", "clients", "adults", "children", "revenue"])?;
        for (date, tally) in &self.daily {
            wtr.serialize(DailyCsvRow {
                date,
                clients: tally.total(),
                adults: tally.adults,
                children: tally.children,
                revenue: tally.revenue(),
            })?;
        }
        wtr.flush()?;
        Ok(())
    }
}
