use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::format_encoded;
use crate::errors::AppResult;
use crate::models::EntryField;
use crate::ui::messages::{success, warning};

use super::open_store;

/// Append a new entry, optionally filling its fields right away.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        employee,
        in_time,
        out_time,
    } = cmd
    {
        let fields: Vec<(EntryField, &str)> = [
            (EntryField::Employee, employee),
            (EntryField::InTime, in_time),
            (EntryField::OutTime, out_time),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect();

        let mut store = open_store(cfg)?;
        let entry = store.add_with(&fields)?;
        let id = entry.id;
        let total = format_encoded(entry.total_hours);

        let shared = store.entries().iter().filter(|e| e.id == id).count();
        if shared > 1 {
            warning(format!(
                "{shared} entries now share id #{id}; edit/del will affect all of them."
            ));
        }

        store
            .backend()
            .audit("add", &format!("#{id}"), &format!("Entry added (total {total})"));
        success(format!("Entry #{id} added (total {total})."));
    }

    Ok(())
}
