use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::format_encoded;
use crate::errors::AppResult;
use crate::models::EntryField;
use crate::ui::messages::{success, warning};

use super::open_store;

/// Field-level update of an entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, field, value } = cmd {
        let field = EntryField::parse(field)?;

        let mut store = open_store(cfg)?;
        let touched = store.update(*id, field, value)?;

        if touched == 0 {
            warning(format!("No entry with id #{id}; nothing changed."));
            return Ok(());
        }

        if touched > 1 {
            warning(format!("{touched} entries share id #{id}; all were updated."));
        }

        let total = store
            .find(*id)
            .map(|e| format_encoded(e.total_hours))
            .unwrap_or_default();

        store.backend().audit(
            "edit",
            &format!("#{id}"),
            &format!("{field} = '{value}' (total {total})"),
        );
        success(format!("Entry #{id}: {field} set to '{value}', total hours {total}."));
    }

    Ok(())
}
