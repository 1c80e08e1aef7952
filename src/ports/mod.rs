//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interface the use-case layer requires from storage.
//! Adapters implement it.
//!
//! - `RecordStore`: whole-collection persistence for one entity type
//! - `StoreError`: failures a store can surface

pub mod error;
pub mod repository;

pub use error::{Result, StoreError};
pub use repository::RecordStore;
