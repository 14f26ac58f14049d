use super::fs_utils::ensure_writable;
use super::{ExportFormat, csv_file, json_file, notify_export_success};
use crate::core::calculator::sum_and_format;
use crate::errors::{AppError, AppResult};
use crate::models::TimeEntry;
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Write `entries` to `file` in `format`. Returns the final path.
    pub fn export(
        entries: &[TimeEntry],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<String> {
        let path = expand_tilde(file);
        if path.as_os_str().is_empty() {
            return Err(AppError::Export("empty output path".to_string()));
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        ensure_writable(&path, force)?;

        let total = sum_and_format(entries);
        match format {
            ExportFormat::Csv => csv_file::write_csv(&path, entries, &total)?,
            ExportFormat::Json => json_file::write_json(&path, entries, &total)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), &path);
        Ok(path.to_string_lossy().to_string())
    }
}
