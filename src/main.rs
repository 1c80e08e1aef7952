//! Hotel Reservations — Entry Point
//!
//! Prepares the hotel, customer and reservation backing files and
//! reports what they hold.
//!
//! Wiring sequence:
//! 1. Load config.toml (defaults when absent) + validate
//! 2. Init tracing (plain or JSON structured logging)
//! 3. Optionally snapshot existing backing files
//! 4. Create any missing backing file holding `[]`
//! 5. Log a summary of every collection

use anyhow::{Context, Result};
use tracing::{info, warn};

use hotel_reservations::config;
use hotel_reservations::usecases;

fn main() -> Result<()> {
    // ── 1. Load configuration from config.toml ──────────────
    let config = config::loader::load_or_default("config.toml")
        .context("Failed to load configuration")?;

    // ── 2. Initialize logging ───────────────────────────────
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.app.log_level));
    if config.app.json_logs {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!(
        name = %config.app.name,
        version = env!("CARGO_PKG_VERSION"),
        data_dir = %config.storage.data_dir.display(),
        "Starting"
    );

    // ── 3-4. Backup + bootstrap backing files ───────────────
    let desk = usecases::bootstrap(&config.storage, &config.backup)
        .context("Failed to prepare backing files")?;

    if !desk.is_healthy() {
        warn!("Storage health check failed");
    }

    // ── 5. Summary ──────────────────────────────────────────
    let summary = desk.summary().context("Failed to read collections")?;
    info!(
        hotels = summary.hotels,
        customers = summary.customers,
        reservations = summary.reservations,
        "Collections loaded"
    );

    Ok(())
}
