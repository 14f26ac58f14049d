pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod total;

use crate::config::Config;
use crate::core::store::{EntryStore, StoreOptions};
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::notice;

pub type Store = EntryStore<SqliteStore>;

/// Open the configured database and load the entry collection.
pub(crate) fn open_store(cfg: &Config) -> AppResult<Store> {
    let backend = SqliteStore::open(&cfg.database)?;
    let store = EntryStore::open(backend, StoreOptions::from(cfg))?;

    if store.was_seeded() {
        store
            .backend()
            .audit("seed", "#1", "Empty store seeded with demonstration entry");
        notice("Empty store: added demonstration entry for John Doe.");
    }

    Ok(store)
}
