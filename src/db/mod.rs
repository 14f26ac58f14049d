pub mod initialize;
pub mod kv;
pub mod log;
pub mod migrate;
pub mod pool;

pub use kv::SqliteStore;
