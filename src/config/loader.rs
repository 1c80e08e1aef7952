//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating storage parameters, and
//! providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
  let path = path.as_ref();

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)
    .with_context(|| format!("Invalid config file: {}", path.display()))?;

  info!(
    data_dir = %config.storage.data_dir.display(),
    atomic_writes = config.storage.atomic_writes,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Load `path` if it exists, otherwise fall back to the defaults.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<AppConfig> {
  let path = path.as_ref();
  if path.exists() {
    load_config(path)
  } else {
    Ok(AppConfig::default())
  }
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig = toml::from_str(content).context("Failed to parse config TOML")?;
  validate_config(&config)?;
  Ok(config)
}

/// Validate storage parameters.
///
/// Checks for:
/// - Non-empty data directory
/// - Non-empty, plain file names
/// - Three distinct backing files
fn validate_config(config: &AppConfig) -> Result<()> {
  let storage = &config.storage;

  anyhow::ensure!(
    !storage.data_dir.as_os_str().is_empty(),
    "storage.data_dir must not be empty"
  );

  for (field, name) in [
    ("hotels_file", &storage.hotels_file),
    ("customers_file", &storage.customers_file),
    ("reservations_file", &storage.reservations_file),
  ] {
    anyhow::ensure!(!name.trim().is_empty(), "storage.{field} must not be empty");
    anyhow::ensure!(
      !name.contains('/') && !name.contains('\\'),
      "storage.{field} must be a file name, got {name:?}"
    );
  }

  anyhow::ensure!(
    storage.hotels_file != storage.customers_file
      && storage.customers_file != storage.reservations_file
      && storage.hotels_file != storage.reservations_file,
    "storage backing files must be distinct"
  );

  Ok(())
}
