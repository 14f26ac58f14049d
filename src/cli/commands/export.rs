use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

use super::open_store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = open_store(cfg)?;
        let written = ExportLogic::export(store.entries(), *format, file, *force)?;
        store.backend().audit(
            "export",
            format.as_str(),
            &format!("{} entries written to {}", store.entries().len(), written),
        );
    }
    Ok(())
}
