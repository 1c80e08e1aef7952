//! Bootstrap Use Case - Storage Initialization
//!
//! Builds the three file-backed stores from configuration and makes
//! sure each backing file exists before anything reads it.
//!
//! Startup flow:
//! 1. Create the data directory if needed
//! 2. Optionally snapshot the current backing files
//! 3. Create each missing backing file holding `[]`

use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use super::desk::ReservationDesk;
use crate::adapters::persistence::{CustomerStore, HotelStore, ReservationStore, backup};
use crate::config::{BackupConfig, StorageConfig};

/// Desk wired to JSON file stores.
pub type FileDesk = ReservationDesk<HotelStore, CustomerStore, ReservationStore>;

/// Build the three stores described by `storage`.
pub fn open_stores(storage: &StorageConfig) -> (HotelStore, CustomerStore, ReservationStore) {
  let mode = storage.write_mode();
  (
    HotelStore::new(storage.hotels_path()).with_write_mode(mode),
    CustomerStore::new(storage.customers_path()).with_write_mode(mode),
    ReservationStore::new(storage.reservations_path()).with_write_mode(mode),
  )
}

/// Prepare storage and return a desk over it.
pub fn bootstrap(storage: &StorageConfig, backup_config: &BackupConfig) -> Result<FileDesk> {
  fs::create_dir_all(&storage.data_dir).with_context(|| {
    format!(
      "Failed to create data directory: {}",
      storage.data_dir.display()
    )
  })?;

  if backup_config.on_startup {
    let written = backup::snapshot_now(&storage.all_paths())
      .context("Failed to snapshot backing files")?;
    info!(count = written.len(), "Startup backup complete");
  }

  let (hotels, customers, reservations) = open_stores(storage);

  let mut created = 0;
  for was_created in [
    hotels.ensure_exists()?,
    customers.ensure_exists()?,
    reservations.ensure_exists()?,
  ] {
    created += usize::from(was_created);
  }

  info!(
    data_dir = %storage.data_dir.display(),
    created,
    "Backing files ready"
  );

  Ok(ReservationDesk::new(hotels, customers, reservations))
}
