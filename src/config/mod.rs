//! Configuration Module - TOML-based Application Configuration
//!
//! Loads and validates configuration from `config.toml`. Every field
//! has a default, so an empty file (or no file at all) gives the
//! canonical layout: the three backing files in the working directory.

pub mod loader;

use std::path::PathBuf;

use serde::Deserialize;

use crate::adapters::persistence::WriteMode;
use crate::domain::{Customer, Hotel, Record, Reservation};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
  /// Application identity and logging.
  #[serde(default)]
  pub app: AppSection,
  /// Backing file locations and write behaviour.
  #[serde(default)]
  pub storage: StorageConfig,
  /// Startup backup behaviour.
  #[serde(default)]
  pub backup: BackupConfig,
}

/// Application identity and logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
  /// Human-readable name used in the startup log line.
  #[serde(default = "default_name")]
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Emit JSON log lines instead of human-readable ones.
  #[serde(default)]
  pub json_logs: bool,
}

impl Default for AppSection {
  fn default() -> Self {
    Self {
      name: default_name(),
      log_level: default_log_level(),
      json_logs: false,
    }
  }
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
  /// Directory holding the backing files.
  #[serde(default = "default_data_dir")]
  pub data_dir: PathBuf,
  /// Hotel backing file name, relative to `data_dir`.
  #[serde(default = "default_hotels_file")]
  pub hotels_file: String,
  /// Customer backing file name, relative to `data_dir`.
  #[serde(default = "default_customers_file")]
  pub customers_file: String,
  /// Reservation backing file name, relative to `data_dir`.
  #[serde(default = "default_reservations_file")]
  pub reservations_file: String,
  /// Write through a temp file and rename instead of in place.
  #[serde(default)]
  pub atomic_writes: bool,
}

impl StorageConfig {
  pub fn hotels_path(&self) -> PathBuf {
    self.data_dir.join(&self.hotels_file)
  }

  pub fn customers_path(&self) -> PathBuf {
    self.data_dir.join(&self.customers_file)
  }

  pub fn reservations_path(&self) -> PathBuf {
    self.data_dir.join(&self.reservations_file)
  }

  /// All three backing files, hotels first.
  pub fn all_paths(&self) -> [PathBuf; 3] {
    [self.hotels_path(), self.customers_path(), self.reservations_path()]
  }

  pub const fn write_mode(&self) -> WriteMode {
    if self.atomic_writes {
      WriteMode::Atomic
    } else {
      WriteMode::Direct
    }
  }
}

impl Default for StorageConfig {
  fn default() -> Self {
    Self {
      data_dir: default_data_dir(),
      hotels_file: default_hotels_file(),
      customers_file: default_customers_file(),
      reservations_file: default_reservations_file(),
      atomic_writes: false,
    }
  }
}

/// Backup configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackupConfig {
  /// Snapshot the existing backing files before bootstrapping.
  #[serde(default)]
  pub on_startup: bool,
}

// Default value functions for serde

fn default_name() -> String {
  "hotel-reservations".to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_data_dir() -> PathBuf {
  PathBuf::from(".")
}

fn default_hotels_file() -> String {
  Hotel::DEFAULT_FILE.to_string()
}

fn default_customers_file() -> String {
  Customer::DEFAULT_FILE.to_string()
}

fn default_reservations_file() -> String {
  Reservation::DEFAULT_FILE.to_string()
}
