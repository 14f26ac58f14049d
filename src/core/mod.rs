pub mod calculator;
pub mod config;
pub mod log;
pub mod store;

pub use store::{EntryStore, StoreOptions};
