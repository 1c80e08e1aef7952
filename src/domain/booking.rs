//! Hotel, customer and reservation entities.
//!
//! All fields are plain strings. Nothing here is validated or cross
//! referenced: a reservation names its customer and hotel by value and
//! neither has to exist.

use serde::{Deserialize, Serialize};

use super::record::Record;

/// Hotel name, used as the delete key.
pub type HotelName = String;

/// Customer name, used as the delete key and the reservation cancel key.
pub type CustomerName = String;

/// A hotel listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: HotelName,
    pub location: String,
}

impl Hotel {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}

impl Record for Hotel {
    const KIND: &'static str = "hotel";
    const DEFAULT_FILE: &'static str = "hotels.json";
    const KEY_FIELD: &'static str = "name";

    fn key(&self) -> &str {
        &self.name
    }
}

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: CustomerName,
    pub email: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Record for Customer {
    const KIND: &'static str = "customer";
    const DEFAULT_FILE: &'static str = "customers.json";
    const KEY_FIELD: &'static str = "name";

    fn key(&self) -> &str {
        &self.name
    }
}

/// A booking of a hotel by a customer.
///
/// There is no reservation id. Cancelling goes through the customer
/// name, so every reservation held by that customer is dropped at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub customer: CustomerName,
    pub hotel: HotelName,
}

impl Reservation {
    pub fn new(customer: impl Into<String>, hotel: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            hotel: hotel.into(),
        }
    }
}

impl Record for Reservation {
    const KIND: &'static str = "reservation";
    const DEFAULT_FILE: &'static str = "reservations.json";
    const KEY_FIELD: &'static str = "customer";

    fn key(&self) -> &str {
        &self.customer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_fields() {
        assert_eq!(Hotel::new("Grand Hotel", "NYC").key(), "Grand Hotel");
        assert_eq!(
            Customer::new("John Doe", "john@example.com").key(),
            "John Doe"
        );
        assert_eq!(Reservation::new("John Doe", "Grand Hotel").key(), "John Doe");
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(Reservation::new("Jane Smith", "Beach Resort")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "customer": "Jane Smith", "hotel": "Beach Resort" })
        );

        let json = serde_json::to_value(Customer::new("John Doe", "john@example.com")).unwrap();
        assert_eq!(json["email"], "john@example.com");
    }

    #[test]
    fn test_key_field_names_serialized_field() {
        let hotel = serde_json::to_value(Hotel::new("Grand Hotel", "NYC")).unwrap();
        assert_eq!(hotel[Hotel::KEY_FIELD], "Grand Hotel");

        let reservation = serde_json::to_value(Reservation::new("John Doe", "Grand Hotel")).unwrap();
        assert_eq!(reservation[Reservation::KEY_FIELD], "John Doe");
    }

    #[test]
    fn test_default_files_are_distinct() {
        assert_ne!(Hotel::DEFAULT_FILE, Customer::DEFAULT_FILE);
        assert_ne!(Customer::DEFAULT_FILE, Reservation::DEFAULT_FILE);
        assert_ne!(Hotel::DEFAULT_FILE, Reservation::DEFAULT_FILE);
    }
}
