//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical employee record shared by store and service.
//! - Provide the constraint checks enforced on every write path.
//!
//! # Invariants
//! - `id` is `None` until the store assigns one on insert; it never changes
//!   afterwards.
//! - `first_name`, `last_name` and `email` are never blank in a record that
//!   passed `validate()`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned surrogate identifier. Always positive once assigned.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EmployeeId = i64;

/// Shape check only; deliverability is not this layer's concern.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile"));

/// A rejected write: a required field is blank, the email is malformed, or
/// the email is already taken by another record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// Required field is absent or blank. Carries the wire-level field name.
    MissingField { field: &'static str },
    /// Email does not look like an address.
    InvalidEmail { email: String },
    /// Email is already registered to a different record.
    DuplicateEmail { email: String },
}

impl Display for ConstraintViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { field } => {
                write!(f, "required field `{field}` is missing or blank")
            }
            Self::InvalidEmail { email } => {
                write!(f, "`{email}` is not a valid email address")
            }
            Self::DuplicateEmail { email } => {
                write!(f, "email `{email}` is already registered")
            }
        }
    }
}

impl Error for ConstraintViolation {}

/// Canonical employee record, transient or persisted.
///
/// Serialized field names follow the wire schema (`firstName`, `lastName`);
/// `id` is omitted from JSON while the record is transient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// `None` for a record not yet persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Employee {
    /// Creates a transient employee record with no id.
    ///
    /// The store assigns the id on the first successful `save`.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Creates a record bound to an already-issued id.
    ///
    /// Used by update paths where identity is supplied by the caller.
    pub fn with_id(
        id: EmployeeId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(first_name, last_name, email)
        }
    }

    /// Returns whether this record has been persisted.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Checks the required-field and email-shape constraints.
    ///
    /// # Contract
    /// - Blank (empty or whitespace-only) fields are rejected.
    /// - Email uniqueness is NOT checked here; only the store can decide it.
    pub fn validate(&self) -> Result<(), ConstraintViolation> {
        for (field, value) in [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
        ] {
            if value.trim().is_empty() {
                return Err(ConstraintViolation::MissingField { field });
            }
        }

        if !EMAIL_SHAPE.is_match(&self.email) {
            return Err(ConstraintViolation::InvalidEmail {
                email: self.email.clone(),
            });
        }

        Ok(())
    }
}
