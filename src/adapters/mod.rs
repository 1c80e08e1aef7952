//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! file I/O.
//!
//! - `persistence`: JSON array files and backup snapshots

pub mod persistence;
