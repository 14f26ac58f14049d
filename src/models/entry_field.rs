use crate::errors::{AppError, AppResult};
use std::fmt;

/// Fields of a [`TimeEntry`](super::time_entry::TimeEntry) that a user may edit.
///
/// `totalHours` is intentionally absent: it is always derived from the
/// in/out pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Employee,
    InTime,
    OutTime,
}

impl EntryField {
    /// Parse a field name from CLI input (case-insensitive).
    /// Accepts both the JSON key (`inTime`) and short aliases (`in`).
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.to_lowercase().as_str() {
            "employee" | "emp" | "name" => Ok(Self::Employee),
            "intime" | "in" | "in_time" | "in-time" => Ok(Self::InTime),
            "outtime" | "out" | "out_time" | "out-time" => Ok(Self::OutTime),
            _ => Err(AppError::InvalidField(s.to_string())),
        }
    }

    /// JSON key as stored in the snapshot
    pub fn as_key(&self) -> &'static str {
        match self {
            EntryField::Employee => "employee",
            EntryField::InTime => "inTime",
            EntryField::OutTime => "outTime",
        }
    }

    pub fn is_time(&self) -> bool {
        matches!(self, EntryField::InTime | EntryField::OutTime)
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}
