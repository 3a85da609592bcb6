//! Employee use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for transport callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic and performs no retries; store
//!   errors propagate unchanged.

use crate::model::employee::{Employee, EmployeeId};
use crate::repo::employee_repo::{EmployeeRepository, RepoResult};

/// Use-case service wrapper for employee CRUD operations.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new employee record.
    ///
    /// # Contract
    /// - Delegates directly to `save`; constraint violations (including a
    ///   duplicate email, discovered only at the store) propagate unchanged.
    /// - Returns the persisted record with its store-assigned id.
    pub fn create_employee(&self, employee: &Employee) -> RepoResult<Employee> {
        self.repo.save(employee)
    }

    /// Returns all employee records.
    pub fn get_all_employees(&self) -> RepoResult<Vec<Employee>> {
        self.repo.find_all()
    }

    /// Keyed lookup. An unknown id is an absent result, not an error; the
    /// caller decides how to surface absence.
    pub fn get_employee_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        self.repo.find_by_id(id)
    }

    /// Overwrites the mutable fields of the record stored under `id`.
    ///
    /// # Contract
    /// - An id the store never issued yields `RepoError::NotFound`; update
    ///   never creates a record.
    pub fn update_employee(&self, id: EmployeeId, employee: &Employee) -> RepoResult<Employee> {
        let mut record = employee.clone();
        record.id = Some(id);
        self.repo.save(&record)
    }

    /// Deletes by id. Idempotent; unknown ids are a silent no-op.
    pub fn delete_employee(&self, id: EmployeeId) -> RepoResult<()> {
        self.repo.delete_by_id(id)
    }
}
