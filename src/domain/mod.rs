//! Domain layer - Persisted entities.
//!
//! Plain serializable records with no I/O. Every entity implements
//! [`Record`], which is all the storage layer needs to know about it.

pub mod booking;
pub mod record;

pub use booking::{Customer, CustomerName, Hotel, HotelName, Reservation};
pub use record::Record;
