//! Reservation Desk Use Case - Entity Operations
//!
//! Gives each entity its own vocabulary (add/remove hotels, register
//! customers, book and cancel reservations) over three independent
//! record stores. The stores never consult each other: booking a
//! reservation does not check that the customer or hotel exists.

use tracing::info;

use crate::domain::{Customer, Hotel, Reservation};
use crate::ports::{RecordStore, Result};

/// Counts of every stored collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
  pub hotels: usize,
  pub customers: usize,
  pub reservations: usize,
}

/// Front desk over the hotel, customer and reservation stores.
pub struct ReservationDesk<H, C, R> {
  hotels: H,
  customers: C,
  reservations: R,
}

impl<H, C, R> ReservationDesk<H, C, R>
where
  H: RecordStore<Hotel>,
  C: RecordStore<Customer>,
  R: RecordStore<Reservation>,
{
  pub const fn new(hotels: H, customers: C, reservations: R) -> Self {
    Self {
      hotels,
      customers,
      reservations,
    }
  }

  // ── Hotels ──────────────────────────────────────────────

  pub fn add_hotel(&self, hotel: &Hotel) -> Result<()> {
    self.hotels.save(hotel)
  }

  /// Delete every hotel named `name`.
  pub fn remove_hotel(&self, name: &str) -> Result<usize> {
    self.hotels.remove(name)
  }

  pub fn hotels(&self) -> Result<Vec<Hotel>> {
    self.hotels.list()
  }

  // ── Customers ───────────────────────────────────────────

  pub fn register_customer(&self, customer: &Customer) -> Result<()> {
    self.customers.save(customer)
  }

  /// Delete every customer named `name`.
  ///
  /// Reservations held under that name are left in place.
  pub fn remove_customer(&self, name: &str) -> Result<usize> {
    self.customers.remove(name)
  }

  pub fn customers(&self) -> Result<Vec<Customer>> {
    self.customers.list()
  }

  // ── Reservations ────────────────────────────────────────

  pub fn book(&self, reservation: &Reservation) -> Result<()> {
    self.reservations.save(reservation)
  }

  /// Cancel every reservation held by `customer`.
  pub fn cancel(&self, customer: &str) -> Result<usize> {
    let cancelled = self.reservations.remove(customer)?;
    if cancelled > 1 {
      info!(customer, cancelled, "Cancelled several reservations for one customer");
    }
    Ok(cancelled)
  }

  pub fn reservations(&self) -> Result<Vec<Reservation>> {
    self.reservations.list()
  }

  // ── Whole desk ──────────────────────────────────────────

  /// Count every collection.
  pub fn summary(&self) -> Result<Summary> {
    Ok(Summary {
      hotels: self.hotels.list()?.len(),
      customers: self.customers.list()?.len(),
      reservations: self.reservations.list()?.len(),
    })
  }

  pub fn is_healthy(&self) -> bool {
    self.hotels.is_healthy() && self.customers.is_healthy() && self.reservations.is_healthy()
  }
}
