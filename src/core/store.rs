//! The entry collection and its lifecycle.
//!
//! The in-memory `Vec<TimeEntry>` is the source of truth for the session.
//! The backend snapshot is read once in [`EntryStore::open`] and rewritten
//! wholesale after every mutation through [`EntryStore::persist`].

use crate::config::IdStrategy;
use crate::core::calculator::{aggregate, duration};
use crate::errors::AppResult;
use crate::models::{EntryField, TimeEntry};
use crate::storage::KeyValueStore;
use crate::utils::time::require_time;

pub const DEFAULT_STORAGE_KEY: &str = "entries";

#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub key: String,
    pub id_strategy: IdStrategy,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            key: DEFAULT_STORAGE_KEY.to_string(),
            id_strategy: IdStrategy::Count,
        }
    }
}

impl From<&crate::config::Config> for StoreOptions {
    fn from(cfg: &crate::config::Config) -> Self {
        Self {
            key: cfg.storage_key.clone(),
            id_strategy: cfg.id_strategy,
        }
    }
}

pub struct EntryStore<S: KeyValueStore> {
    backend: S,
    options: StoreOptions,
    entries: Vec<TimeEntry>,
    seeded: bool,
}

impl<S: KeyValueStore> EntryStore<S> {
    /// Open the collection, seeding the demo entry into an empty backend.
    pub fn open(backend: S, options: StoreOptions) -> AppResult<Self> {
        let mut store = Self {
            backend,
            options,
            entries: vec![TimeEntry::demo()],
            seeded: false,
        };
        store.initialize()?;
        Ok(store)
    }

    /// First activation: an absent or empty snapshot is replaced by the
    /// in-memory default; anything else becomes the current state.
    /// A snapshot that does not parse is a hard error.
    fn initialize(&mut self) -> AppResult<()> {
        match self.backend.get(&self.options.key)? {
            Some(raw) if !raw.is_empty() => {
                self.entries = serde_json::from_str(&raw)?;
            }
            _ => {
                self.entries = vec![TimeEntry::demo()];
                self.persist()?;
                self.seeded = true;
            }
        }
        Ok(())
    }

    /// Whether `open` found an empty backend and wrote the demo entry.
    pub fn was_seeded(&self) -> bool {
        self.seeded
    }

    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    /// First entry carrying `id`.
    pub fn find(&self, id: u32) -> Option<&TimeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    fn next_id(&self) -> u32 {
        match self.options.id_strategy {
            IdStrategy::Count => self.entries.len() as u32 + 1,
            IdStrategy::Monotonic => self.entries.iter().map(|e| e.id).max().unwrap_or(0) + 1,
        }
    }

    /// Append a blank entry and return a copy of it.
    pub fn add(&mut self) -> AppResult<TimeEntry> {
        self.add_with(&[])
    }

    /// Append a template entry with `fields` already applied, so only the
    /// new row changes even when its id is shared with a live entry.
    pub fn add_with(&mut self, fields: &[(EntryField, &str)]) -> AppResult<TimeEntry> {
        for (field, value) in fields {
            if field.is_time() {
                require_time(value)?;
            }
        }

        let mut entry = TimeEntry::template(self.next_id());
        if !fields.is_empty() {
            for (field, value) in fields {
                entry.set(*field, value);
            }
            entry.total_hours = duration::compute(&entry.in_time, &entry.out_time).ok();
        }

        self.entries.push(entry.clone());
        self.persist()?;
        Ok(entry)
    }

    /// Set `field` on every entry with `id`, then recompute its total from
    /// the updated in/out pair. Returns how many rows matched; the
    /// collection is persisted even when none did.
    ///
    /// Time values are validated first, so a malformed time leaves the
    /// collection untouched.
    pub fn update(&mut self, id: u32, field: EntryField, value: &str) -> AppResult<usize> {
        if field.is_time() {
            require_time(value)?;
        }

        let mut touched = 0;
        for entry in self.entries.iter_mut().filter(|e| e.id == id) {
            entry.set(field, value);
            // always recomputed, whichever field changed
            entry.total_hours = duration::compute(&entry.in_time, &entry.out_time).ok();
            touched += 1;
        }

        self.persist()?;
        Ok(touched)
    }

    /// Drop every entry with `id`. Returns how many were removed.
    pub fn remove(&mut self, id: u32) -> AppResult<usize> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = before - self.entries.len();
        self.persist()?;
        Ok(removed)
    }

    /// Aggregated `H:MM` of the current collection.
    pub fn total_display(&self) -> String {
        aggregate::sum_and_format(&self.entries)
    }

    /// Overwrite the backend snapshot with the full collection.
    pub fn persist(&mut self) -> AppResult<()> {
        let json = serde_json::to_string(&self.entries)?;
        self.backend.set(&self.options.key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::storage::MemoryStore;

    fn fresh() -> EntryStore<MemoryStore> {
        EntryStore::open(MemoryStore::new(), StoreOptions::default()).unwrap()
    }

    fn snapshot(store: &EntryStore<MemoryStore>) -> Vec<TimeEntry> {
        let raw = store.backend().get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn empty_backend_is_seeded_with_demo() {
        let store = fresh();
        assert!(store.was_seeded());
        assert_eq!(store.entries(), &[TimeEntry::demo()]);
        assert_eq!(snapshot(&store), vec![TimeEntry::demo()]);
        assert_eq!(store.total_display(), "8:00");
    }

    #[test]
    fn empty_string_counts_as_absent() {
        let store =
            EntryStore::open(MemoryStore::with_value("entries", ""), StoreOptions::default())
                .unwrap();
        assert!(store.was_seeded());
        assert_eq!(store.entries().len(), 1);
    }

    #[test]
    fn existing_snapshot_wins_over_default() {
        let backend = MemoryStore::with_value("entries", "[]");
        let store = EntryStore::open(backend, StoreOptions::default()).unwrap();
        assert!(!store.was_seeded());
        assert!(store.entries().is_empty());
        assert_eq!(store.total_display(), "0:00");
    }

    #[test]
    fn corrupted_snapshot_is_fatal() {
        let backend = MemoryStore::with_value("entries", "{not json");
        let err = EntryStore::open(backend, StoreOptions::default()).err();
        assert!(matches!(err, Some(AppError::Json(_))));
    }

    #[test]
    fn add_appends_template_and_persists() {
        let mut store = fresh();
        let e = store.add().unwrap();
        assert_eq!(e, TimeEntry::template(2));
        assert_eq!(e.employee, "New_Employee");
        assert_eq!(e.total_hours, Some(0.0));
        assert_eq!(snapshot(&store).len(), 2);
    }

    #[test]
    fn update_recomputes_total() {
        let mut store = fresh();
        let id = store.add().unwrap().id;
        store.update(id, EntryField::InTime, "09:00").unwrap();
        store.update(id, EntryField::OutTime, "17:30").unwrap();

        let e = store.find(id).unwrap();
        assert_eq!(e.total_hours, Some(8.30));
        assert_eq!(snapshot(&store)[1].total_hours, Some(8.30));
        assert_eq!(store.total_display(), "16:30");
    }

    #[test]
    fn editing_employee_also_recomputes() {
        // stale total in the snapshot is replaced on any edit
        let raw = r#"[{"id":1,"employee":"A","inTime":"09:45","outTime":"10:15","totalHours":5}]"#;
        let mut store =
            EntryStore::open(MemoryStore::with_value("entries", raw), StoreOptions::default())
                .unwrap();
        store.update(1, EntryField::Employee, "B").unwrap();
        let e = store.find(1).unwrap();
        assert_eq!(e.employee, "B");
        assert_eq!(e.total_hours, Some(0.30));
    }

    #[test]
    fn update_with_same_value_is_idempotent() {
        let mut store = fresh();
        store.update(1, EntryField::OutTime, "17:30").unwrap();
        let before = store.find(1).unwrap().total_hours;
        store.update(1, EntryField::OutTime, "17:30").unwrap();
        store.update(1, EntryField::InTime, "09:00").unwrap();
        assert_eq!(store.find(1).unwrap().total_hours, before);
    }

    #[test]
    fn update_unknown_id_touches_nothing() {
        let mut store = fresh();
        assert_eq!(store.update(42, EntryField::Employee, "X").unwrap(), 0);
        assert_eq!(store.entries(), &[TimeEntry::demo()]);
    }

    #[test]
    fn malformed_time_leaves_entry_untouched() {
        let mut store = fresh();
        let err = store.update(1, EntryField::InTime, "9am").err();
        assert!(matches!(err, Some(AppError::InvalidTime(_))));
        assert_eq!(store.find(1).unwrap(), &TimeEntry::demo());
    }

    #[test]
    fn remove_drops_and_persists() {
        let mut store = fresh();
        store.add().unwrap();
        assert_eq!(store.remove(1).unwrap(), 1);
        assert_eq!(store.entries().len(), 1);
        assert_eq!(snapshot(&store).len(), 1);
        assert_eq!(store.remove(1).unwrap(), 0);
    }

    #[test]
    fn count_ids_collide_after_delete_then_add() {
        let backend = MemoryStore::with_value("entries", "[]");
        let mut store = EntryStore::open(backend, StoreOptions::default()).unwrap();
        for _ in 0..3 {
            store.add().unwrap();
        }
        store.remove(2).unwrap();
        let new = store.add().unwrap();

        // len + 1 = 3, which entry #3 already has
        assert_eq!(new.id, 3);
        let ids: Vec<u32> = store.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3, 3]);

        // an edit now lands on both rows
        assert_eq!(store.update(3, EntryField::Employee, "Both").unwrap(), 2);
        assert_eq!(store.remove(3).unwrap(), 2);
    }

    #[test]
    fn add_with_fields_leaves_same_id_row_alone() {
        let backend = MemoryStore::with_value("entries", "[]");
        let mut store = EntryStore::open(backend, StoreOptions::default()).unwrap();
        for _ in 0..3 {
            store.add().unwrap();
        }
        store.update(3, EntryField::Employee, "Carl").unwrap();
        store.remove(2).unwrap();

        // len + 1 = 3 again: shares the id of the live row #3
        let new = store
            .add_with(&[
                (EntryField::Employee, "Dora"),
                (EntryField::InTime, "12:00"),
                (EntryField::OutTime, "12:30"),
            ])
            .unwrap();
        assert_eq!(new.id, 3);
        assert_eq!(new.total_hours, Some(0.30));

        let rows: Vec<&str> = store.entries().iter().map(|e| e.employee.as_str()).collect();
        assert_eq!(rows, vec!["New_Employee", "Carl", "Dora"]);
        assert_eq!(snapshot(&store)[1].employee, "Carl");
    }

    #[test]
    fn add_with_bad_time_appends_nothing() {
        let mut store = fresh();
        let err = store.add_with(&[(EntryField::InTime, "25:00")]).err();
        assert!(matches!(err, Some(AppError::InvalidTime(_))));
        assert_eq!(store.entries().len(), 1);
    }

    #[test]
    fn monotonic_ids_never_collide() {
        let options = StoreOptions {
            id_strategy: IdStrategy::Monotonic,
            ..StoreOptions::default()
        };
        let mut store = EntryStore::open(MemoryStore::with_value("entries", "[]"), options).unwrap();
        for _ in 0..3 {
            store.add().unwrap();
        }
        store.remove(2).unwrap();
        assert_eq!(store.add().unwrap().id, 4);
    }

    #[test]
    fn custom_key_is_used() {
        let options = StoreOptions {
            key: "tyme.entries".to_string(),
            ..StoreOptions::default()
        };
        let store = EntryStore::open(MemoryStore::new(), options).unwrap();
        assert!(store.backend().get("tyme.entries").unwrap().is_some());
        assert!(store.backend().get("entries").unwrap().is_none());
    }
}
