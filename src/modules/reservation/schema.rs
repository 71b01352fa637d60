use std::borrow::Cow;

use chrono::NaiveDate;
use validator::{Validate, ValidationError};

use crate::error::AppError;
use crate::modules::reservation::model::{Quota, TimeOfDay};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Validate)]
pub struct DeleteRequest {
    #[validate(custom(function = "validate_date"))]
    pub date: String,
    #[validate(custom(function = "validate_time"))]
    pub time: String,
    pub adults: u32,
    pub children: u32,
}

impl DeleteRequest {
    pub fn into_criteria(self) -> Result<DeleteCriteria, AppError> {
        self.validate()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;

        Ok(DeleteCriteria {
            target: TimeOfDay::parse(&self.time)?,
            date: self.date.trim().to_string(),
            quota: Quota::new(self.adults, self.children),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCriteria {
    pub date: String,
    pub target: TimeOfDay,
    pub quota: Quota,
}

fn validate_date(value: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| ValidationError::new("date").with_message(Cow::from("Date must be YYYY-MM-DD")))
}

fn validate_time(value: &str) -> Result<(), ValidationError> {
    TimeOfDay::parse(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("time").with_message(Cow::from("Time must be HH:MM, 24h")))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteReport {
    NoCandidates,
    NothingSelected,
    Cancelled { selected: usize },
    Deleted {
        deleted: usize,
        missing: usize,
        adults: u32,
        children: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportReport {
    Cancelled,
    Exported { count: usize, path: String },
}
