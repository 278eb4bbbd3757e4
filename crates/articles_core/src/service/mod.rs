//! Core use-case services.
//!
//! # Responsibility
//! - Hold the preparation rules for candidate batches.
//! - Orchestrate library calls into worker-level APIs.
//!
//! # Invariants
//! - Services stay storage-agnostic; they only see the `Library` trait.

pub mod catalog;
pub mod preparer;
pub mod worker;
