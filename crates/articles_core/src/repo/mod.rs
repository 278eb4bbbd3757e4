//! Library abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the `Library` contract consumed by the worker.
//! - Keep SQLite details out of preparation and orchestration code.
//!
//! # Invariants
//! - Libraries store what they are given; validation belongs to the preparer.
//! - Articles are grouped by the caller-supplied year, not by their own dates.

pub mod library;
pub mod memory_library;
pub mod sqlite_library;
