use bson::{Bson, Document};
use chrono::{NaiveTime, Timelike};
use serde_json::Value;

use crate::error::AppError;

pub const FIELD_ID: &str = "_id";
pub const FIELD_DATE: &str = "data";
pub const FIELD_TIME: &str = "orario";
pub const FIELD_DESCRIPTION: &str = "descrizione";

const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: String,
    // Stored `_id` as is, deletes must match on this rather than on `id`
    pub raw_id: Bson,
    pub date: String,
    pub time: Option<String>,
    pub description: String,
}

impl Reservation {
    pub fn new(id: impl Into<String>, date: impl Into<String>, time: Option<&str>, description: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            raw_id: Bson::String(id.clone()),
            id,
            date: date.into(),
            time: time.map(str::to_string),
            description: description.into(),
        }
    }

    // A non-string `orario` counts as missing
    pub fn from_document(doc: &Document) -> Self {
        let text = |key: &str| doc.get_str(key).ok().map(str::to_string);
        let raw_id = doc.get(FIELD_ID).cloned().unwrap_or(Bson::Null);

        Self {
            id: id_to_string(&raw_id),
            raw_id,
            date: text(FIELD_DATE).unwrap_or_default(),
            time: text(FIELD_TIME),
            description: text(FIELD_DESCRIPTION).unwrap_or_default(),
        }
    }

    pub fn from_json(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        let id = match value.get("id") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };

        Self {
            raw_id: Bson::String(id.clone()),
            id,
            date: text(FIELD_DATE).unwrap_or_default(),
            time: text(FIELD_TIME),
            description: text(FIELD_DESCRIPTION).unwrap_or_default(),
        }
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::parse_lenient(self.time.as_deref())
    }
}

pub fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        Bson::Null => String::new(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn midnight() -> Self {
        Self(NaiveTime::default())
    }

    pub fn parse(value: &str) -> Result<Self, AppError> {
        NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
            .map(Self)
            .map_err(|_| AppError::InvalidInput(format!("'{}' is not a valid time (HH:MM, 24h)", value.trim())))
    }

    // Out-of-range values such as "25:00" or "12:61" are unparsable here and
    // land on midnight too, unlike a plain split-and-add of the two numbers.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        value
            .and_then(|v| Self::parse(v).ok())
            .unwrap_or_else(Self::midnight)
    }

    pub fn minutes(&self) -> u32 {
        self.0.hour() * 60 + self.0.minute()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn half_hour_slot(&self) -> String {
        let minute = if self.0.minute() < 30 { 0 } else { 30 };
        format!("{:02}:{:02}", self.0.hour(), minute)
    }

    pub fn distance(&self, other: TimeOfDay) -> u32 {
        self.minutes().abs_diff(other.minutes())
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Adult,
    Child,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Adult => "adult",
            Category::Child => "child",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quota {
    pub adults: u32,
    pub children: u32,
}

impl Quota {
    pub fn new(adults: u32, children: u32) -> Self {
        Self { adults, children }
    }

    pub fn of(&self, category: Category) -> u32 {
        match category {
            Category::Adult => self.adults,
            Category::Child => self.children,
        }
    }

    pub fn total(&self) -> u32 {
        self.adults.saturating_add(self.children)
    }
}
