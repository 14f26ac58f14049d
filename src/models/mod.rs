pub mod entry_field;
pub mod time_entry;

pub use entry_field::EntryField;
pub use time_entry::TimeEntry;
