//! Domain model for article ingestion.
//!
//! # Responsibility
//! - Define the record shape flowing from callers through preparation into
//!   library storage.
//!
//! # Invariants
//! - Raw candidates may have any field absent.
//! - Presence guarantees only hold for records produced by the preparer.

pub mod article;
