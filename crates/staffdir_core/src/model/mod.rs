//! Domain model for the employee directory.
//!
//! # Responsibility
//! - Define the canonical employee record used by core business logic.
//! - Own the required-field and email-shape constraint checks that every
//!   write path must pass before touching storage.
//!
//! # Invariants
//! - A persisted employee always carries a store-assigned `id`.
//! - `email` is unique among persisted records (enforced at the store).

pub mod employee;
