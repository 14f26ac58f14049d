use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use super::open_store;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = open_store(cfg)?;

        let Some(entry) = store.find(*id) else {
            warning(format!("No entry with id #{id}; nothing deleted."));
            return Ok(());
        };

        if !*yes {
            let prompt = format!(
                "Delete entry #{} ({}, {}-{})? This action is irreversible.",
                id, entry.employee, entry.in_time, entry.out_time
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let removed = store.remove(*id)?;
        store
            .backend()
            .audit("del", &format!("#{id}"), &format!("{removed} entries removed"));
        success(format!("Entry #{id} has been deleted."));
    }

    Ok(())
}
