//! Persistence Adapters - Whole-file JSON Storage
//!
//! Implements the RecordStore port with one pretty-printed JSON array
//! per entity type, plus timestamped backup snapshots of those files.
//! No database dependency.

pub mod backup;
pub mod json_file;
pub mod store;

pub use json_file::WriteMode;
pub use store::{CustomerStore, HotelStore, JsonFileStore, ReservationStore};
