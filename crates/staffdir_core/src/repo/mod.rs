//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the employee store contract consumed by the service layer.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Employee::validate()` before SQL
//!   mutations.
//! - Repository APIs return semantic errors (`Constraint`, `NotFound`) in
//!   addition to DB transport errors; lookups signal absence with `None`,
//!   never an error.

pub mod employee_repo;
