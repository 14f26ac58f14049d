use crate::errors::AppResult;
use crate::models::TimeEntry;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    entries: &'a [TimeEntry],
    total_work_hours: &'a str,
}

/// Write the entries (snapshot layout) plus the aggregate as pretty JSON.
pub(crate) fn write_json(path: &Path, entries: &[TimeEntry], total: &str) -> AppResult<()> {
    let doc = JsonExport {
        entries,
        total_work_hours: total,
    };
    let json = serde_json::to_string_pretty(&doc)?;
    std::fs::write(path, json)?;
    Ok(())
}
