//! JSON File Store - Concrete Adapter for the RecordStore Port
//!
//! Binds one entity type to one backing file and builds save, remove
//! and list out of the whole-file primitive in [`json_file`]. Nothing is
//! cached between calls; every operation goes back to disk.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, instrument, warn};

use super::json_file::{self, WriteMode};
use crate::domain::{Customer, Hotel, Record, Reservation};
use crate::ports::{RecordStore, Result, StoreError};

/// Store for [`Hotel`] records.
pub type HotelStore = JsonFileStore<Hotel>;
/// Store for [`Customer`] records.
pub type CustomerStore = JsonFileStore<Customer>;
/// Store for [`Reservation`] records.
pub type ReservationStore = JsonFileStore<Reservation>;

/// Record store backed by a single JSON array file.
#[derive(Debug, Clone)]
pub struct JsonFileStore<R> {
    /// Backing file.
    path: PathBuf,
    /// How full-collection writes reach the disk.
    mode: WriteMode,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> JsonFileStore<R> {
    /// Create a store over an explicit backing file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mode: WriteMode::Direct,
            _record: PhantomData,
        }
    }

    /// Create a store over the entity's canonical file inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(R::DEFAULT_FILE))
    }

    /// Switch how writes reach the disk.
    #[must_use]
    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file holding an empty array if it is absent.
    ///
    /// Existing files are never touched, even unparseable ones. Returns
    /// whether a file was created.
    #[instrument(skip(self), fields(kind = R::KIND, path = %self.path.display()))]
    pub fn ensure_exists(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        json_file::write::<Value>(&self.path, &[], self.mode)?;
        info!("Initialized empty backing file");
        Ok(true)
    }
}

impl<R: Record> RecordStore<R> for JsonFileStore<R> {
    #[instrument(skip(self, record), fields(kind = R::KIND, key = record.key()))]
    fn save(&self, record: &R) -> Result<()> {
        let element = serde_json::to_value(record).map_err(|e| StoreError::serialize(&self.path, e))?;
        json_file::append(&self.path, element, self.mode)?;
        info!("Record saved");
        Ok(())
    }

    /// Elements without a string identity field never match and are kept.
    #[instrument(skip(self), fields(kind = R::KIND))]
    fn remove(&self, key: &str) -> Result<usize> {
        let mut elements = json_file::read(&self.path)?;
        let before = elements.len();
        elements.retain(|e| key_of::<R>(e) != Some(key));
        let removed = before - elements.len();

        json_file::write(&self.path, &elements, self.mode)?;
        info!(removed, remaining = elements.len(), "Records removed");
        Ok(removed)
    }

    /// Elements that do not fit the record shape are skipped with a
    /// warning; they stay in the backing file.
    fn list(&self) -> Result<Vec<R>> {
        let elements = json_file::read(&self.path)?;
        let mut records = Vec::with_capacity(elements.len());

        for (index, element) in elements.into_iter().enumerate() {
            match serde_json::from_value::<R>(element) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!(
                        kind = R::KIND,
                        path = %self.path.display(),
                        index,
                        error = %e,
                        "Skipping malformed record"
                    );
                }
            }
        }

        Ok(records)
    }

    fn is_healthy(&self) -> bool {
        let dir_ok = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.is_dir(),
            _ => true,
        };
        if !dir_ok {
            return false;
        }
        if !self.path.exists() {
            return true; // First run is OK
        }
        fs::metadata(&self.path).is_ok_and(|m| m.is_file())
    }
}

/// Identity field of a raw element, when present as a string.
fn key_of<R: Record>(element: &Value) -> Option<&str> {
    element.get(R::KEY_FIELD).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn setup<R: Record>() -> (TempDir, JsonFileStore<R>) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::in_dir(temp_dir.path());
        (temp_dir, store)
    }

    #[test]
    fn test_save_then_list() {
        let (_dir, store) = setup::<Hotel>();
        let hotel = Hotel::new("Grand Hotel", "NYC");

        store.save(&hotel).unwrap();

        assert_eq!(store.list().unwrap(), vec![hotel]);
    }

    #[test]
    fn test_remove_drops_every_match() {
        let (_dir, store) = setup::<Customer>();
        store.save(&Customer::new("John Doe", "john@example.com")).unwrap();
        store.save(&Customer::new("Jane Smith", "jane@example.com")).unwrap();
        store.save(&Customer::new("John Doe", "jd@work.example")).unwrap();
        store.save(&Customer::new("Alice Brown", "alice@example.com")).unwrap();

        let removed = store.remove("John Doe").unwrap();

        assert_eq!(removed, 2);
        assert_eq!(
            store.list().unwrap(),
            vec![
                Customer::new("Jane Smith", "jane@example.com"),
                Customer::new("Alice Brown", "alice@example.com"),
            ]
        );
    }

    #[test]
    fn test_remove_is_exact_match() {
        let (_dir, store) = setup::<Hotel>();
        store.save(&Hotel::new("Grand Hotel", "NYC")).unwrap();

        assert_eq!(store.remove("grand hotel").unwrap(), 0);
        assert_eq!(store.remove("Grand").unwrap(), 0);
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_on_missing_file_creates_empty_array() {
        let (_dir, store) = setup::<Reservation>();

        assert_eq!(store.remove("John Doe").unwrap(), 0);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
    }

    #[test]
    fn test_ensure_exists_creates_once() {
        let (_dir, store) = setup::<Hotel>();

        assert!(store.ensure_exists().unwrap());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");

        store.save(&Hotel::new("Grand Hotel", "NYC")).unwrap();
        assert!(!store.ensure_exists().unwrap());
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_ensure_exists_keeps_corrupt_file() {
        let (_dir, store) = setup::<Hotel>();
        fs::write(store.path(), "not json").unwrap();

        assert!(!store.ensure_exists().unwrap());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "not json");
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_atomic_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = ReservationStore::in_dir(temp_dir.path()).with_write_mode(WriteMode::Atomic);

        store.save(&Reservation::new("John Doe", "Grand Hotel")).unwrap();
        store.save(&Reservation::new("Jane Smith", "Beach Resort")).unwrap();
        store.remove("John Doe").unwrap();

        assert_eq!(
            store.list().unwrap(),
            vec![Reservation::new("Jane Smith", "Beach Resort")]
        );
    }

    #[test]
    fn test_save_keeps_unusual_records() {
        let (_dir, store) = setup::<Hotel>();
        fs::write(store.path(), r#"[{"name": "A", "location": "L"}, {"name": "B"}]"#).unwrap();

        store.save(&Hotel::new("C", "M")).unwrap();

        let elements = json_file::read(store.path()).unwrap();
        assert_eq!(
            elements,
            vec![
                json!({ "name": "A", "location": "L" }),
                json!({ "name": "B" }),
                json!({ "name": "C", "location": "M" }),
            ]
        );
    }

    #[test]
    fn test_list_skips_malformed_records() {
        let (_dir, store) = setup::<Hotel>();
        fs::write(
            store.path(),
            r#"[{"name": "A", "location": "L"}, {"name": "B"}, 42, {"name": "C", "location": "M", "stars": "5"}]"#,
        )
        .unwrap();

        assert_eq!(
            store.list().unwrap(),
            vec![Hotel::new("A", "L"), Hotel::new("C", "M")]
        );
        // Listing never rewrites.
        assert_eq!(json_file::read(store.path()).unwrap().len(), 4);
    }

    #[test]
    fn test_remove_keeps_non_matching_elements_verbatim() {
        let (_dir, store) = setup::<Reservation>();
        fs::write(
            store.path(),
            r#"[
                {"customer": "John Doe", "hotel": "Grand Hotel"},
                {"customer": "Jane Smith", "hotel": "Beach Resort", "nights": "3"},
                {"hotel": "Orphan Inn"},
                {"customer": 5, "hotel": "Numbered"},
                {"customer": "John Doe"}
            ]"#,
        )
        .unwrap();

        assert_eq!(store.remove("John Doe").unwrap(), 2);

        assert_eq!(
            json_file::read(store.path()).unwrap(),
            vec![
                json!({ "customer": "Jane Smith", "hotel": "Beach Resort", "nights": "3" }),
                json!({ "hotel": "Orphan Inn" }),
                json!({ "customer": 5, "hotel": "Numbered" }),
            ]
        );
    }

    #[test]
    fn test_health() {
        let (dir, store) = setup::<Hotel>();
        assert!(store.is_healthy());

        let missing = HotelStore::new(dir.path().join("nope").join("hotels.json"));
        assert!(!missing.is_healthy());

        let on_dir = HotelStore::new(dir.path());
        assert!(!on_dir.is_healthy());
    }
}
