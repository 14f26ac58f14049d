use super::entry_field::EntryField;
use serde::{Deserialize, Serialize};

pub const DEFAULT_EMPLOYEE: &str = "New_Employee";
pub const DEFAULT_TIME: &str = "00:00";

/// One employee's clock-in/clock-out record.
///
/// Serialized with camelCase keys; the snapshot layout is shared with data
/// written by earlier versions of the tool, so the names must not change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: u32,
    pub employee: String,
    pub in_time: String,  // "HH:MM"
    pub out_time: String, // "HH:MM"

    /// Encoded hours: integer part = hours, two fractional digits = minutes.
    /// `1h30m` is `1.30`, not `1.5`.
    #[serde(default)]
    pub total_hours: Option<f64>,
}

impl TimeEntry {
    /// Blank row created by "add".
    pub fn template(id: u32) -> Self {
        Self {
            id,
            employee: DEFAULT_EMPLOYEE.to_string(),
            in_time: DEFAULT_TIME.to_string(),
            out_time: DEFAULT_TIME.to_string(),
            total_hours: Some(0.0),
        }
    }

    /// Demonstration row seeded into an empty store.
    pub fn demo() -> Self {
        Self {
            id: 1,
            employee: "John Doe".to_string(),
            in_time: "09:00".to_string(),
            out_time: "17:00".to_string(),
            total_hours: Some(8.0),
        }
    }

    pub fn set(&mut self, field: EntryField, value: &str) {
        let slot = match field {
            EntryField::Employee => &mut self.employee,
            EntryField::InTime => &mut self.in_time,
            EntryField::OutTime => &mut self.out_time,
        };
        *slot = value.to_string();
    }
}
