use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

use super::open_store;

/// Print the aggregated total alone, suitable for scripts.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Total = cmd {
        let store = open_store(cfg)?;
        println!("{}", store.total_display());
    }
    Ok(())
}
