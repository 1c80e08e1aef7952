//! Repository Port - Record Persistence Interface
//!
//! One store per entity type, each bound to a single backing file that
//! holds the whole collection as a JSON array. Every mutation rewrites
//! the full collection; there is no partial update.

use super::error::Result;
use crate::domain::Record;

/// Trait for whole-collection record stores.
///
/// Implementations are synchronous and hold no long-lived handles.
/// Concurrent writers on the same backing file race and the last
/// writer wins.
pub trait RecordStore<R: Record> {
  /// Append one record to the end of the collection.
  fn save(&self, record: &R) -> Result<()>;

  /// Remove every record whose key equals `key`, keeping the rest in
  /// order. Returns how many records were removed.
  fn remove(&self, key: &str) -> Result<usize>;

  /// Full collection in file order. Missing or corrupt storage reads as
  /// empty.
  fn list(&self) -> Result<Vec<R>>;

  /// Check that the backing storage is reachable.
  fn is_healthy(&self) -> bool;
}
