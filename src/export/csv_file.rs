use crate::core::calculator::format_encoded;
use crate::errors::AppResult;
use crate::models::TimeEntry;
use csv::Writer;
use std::path::Path;

/// Write the entries as CSV, followed by a `TOTAL` row with the aggregate.
pub(crate) fn write_csv(path: &Path, entries: &[TimeEntry], total: &str) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["id", "employee", "in_time", "out_time", "total_hours"])?;

    for e in entries {
        wtr.write_record([
            e.id.to_string(),
            e.employee.clone(),
            e.in_time.clone(),
            e.out_time.clone(),
            format_encoded(e.total_hours),
        ])?;
    }

    wtr.write_record(["", "TOTAL", "", "", total])?;

    wtr.flush()?;
    Ok(())
}
