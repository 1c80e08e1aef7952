//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates the record stores behind the port interface.
//!
//! Use cases:
//! - `ReservationDesk`: hotel, customer and reservation operations
//! - `bootstrap`: storage initialization from configuration

pub mod bootstrap;
pub mod desk;

pub use bootstrap::{FileDesk, bootstrap, open_stores};
pub use desk::{ReservationDesk, Summary};
