//! Record trait shared by every persisted entity.
//!
//! A record is one flat JSON object inside a backing file. Each entity
//! names the file it lives in and the field used as its identity key
//! for exact-match removal.

use std::fmt::Debug;

use serde::{Serialize, de::DeserializeOwned};

/// A flat JSON object stored in a whole-file JSON array.
pub trait Record: Serialize + DeserializeOwned + Clone + Debug {
    /// Short lowercase name used in log fields ("hotel", "customer", ...).
    const KIND: &'static str;

    /// Canonical backing file name.
    const DEFAULT_FILE: &'static str;

    /// Name of the identity field in the stored JSON object.
    const KEY_FIELD: &'static str;

    /// Identity field value. Removal matches on exact equality.
    fn key(&self) -> &str;
}
