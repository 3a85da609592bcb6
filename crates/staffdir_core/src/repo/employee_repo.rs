//! Employee store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and lookup APIs over the `employees` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must pass `Employee::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - Email uniqueness is decided atomically by the store's UNIQUE index,
//!   never by a read-then-write in this layer.

use crate::db::{migrations, DbError};
use crate::model::employee::{ConstraintViolation, Employee, EmployeeId};
use rusqlite::{ffi, params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    id,
    first_name,
    last_name,
    email
FROM employees";

const EMPLOYEES_TABLE: &str = "employees";
const REQUIRED_COLUMNS: &[&str] = &["id", "first_name", "last_name", "email"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for employee persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// A write was rejected: blank required field, malformed email, or an
    /// email already registered to another record.
    Constraint(ConstraintViolation),
    /// An update addressed an id the store never issued or has released.
    NotFound(EmployeeId),
    Db(DbError),
    /// Persisted state failed model validation on read.
    InvalidData(String),
    /// The connection has not been migrated to the supported schema version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constraint(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "employee not found: {id}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted employee data: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match supported {expected_version}; \
                 open connections through db::open_db"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Constraint(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConstraintViolation> for RepoError {
    fn from(value: ConstraintViolation) -> Self {
        Self::Constraint(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Store contract for employee records.
///
/// Lookup operations signal absence with `Ok(None)` / an empty `Vec`;
/// deletes are idempotent and succeed on missing rows. `save` is the single
/// write entry point for both insert and overwrite.
pub trait EmployeeRepository {
    /// Inserts the record when `id` is unset, assigning a fresh id;
    /// overwrites the record with matching id otherwise.
    ///
    /// # Errors
    /// - `Constraint` when a required field is blank, the email is
    ///   malformed, or the email belongs to a different record.
    /// - `NotFound` when `id` is set but no such row exists; overwrite
    ///   never silently inserts.
    fn save(&self, employee: &Employee) -> RepoResult<Employee>;

    /// Keyed lookup; absent ids are `Ok(None)`, never an error.
    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;

    /// Exact-match lookup on the unique email column.
    fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>>;

    /// All records whose last name matches `pattern` under SQL `LIKE`
    /// semantics: `%`/`_` wildcards, ASCII case-insensitive. The pattern is
    /// passed through verbatim.
    fn find_by_last_name_like(&self, pattern: &str) -> RepoResult<Vec<Employee>>;

    /// Exact, case-sensitive match on first name.
    fn find_by_first_name(&self, first_name: &str) -> RepoResult<Vec<Employee>>;

    /// All records, ordered by id for stable output; order carries no
    /// semantic meaning.
    fn find_all(&self) -> RepoResult<Vec<Employee>>;

    /// Idempotent removal by id; missing rows are a silent no-op.
    fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()>;

    /// Idempotent removal of a record; transient records are a no-op.
    fn delete(&self, employee: &Employee) -> RepoResult<()>;

    /// Removes every record. Test-isolation helper, not part of the
    /// production contract surface.
    fn delete_all(&self) -> RepoResult<()>;

    /// Number of persisted records.
    fn count(&self) -> RepoResult<u64>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    /// Constructs a repository after verifying the connection is ready:
    /// migrated to the supported schema version with the `employees` table
    /// and its required columns present.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn save(&self, employee: &Employee) -> RepoResult<Employee> {
        employee.validate()?;

        match employee.id {
            None => {
                self.conn
                    .execute(
                        "INSERT INTO employees (first_name, last_name, email)
                         VALUES (?1, ?2, ?3);",
                        params![
                            employee.first_name.as_str(),
                            employee.last_name.as_str(),
                            employee.email.as_str(),
                        ],
                    )
                    .map_err(|err| map_write_error(err, &employee.email))?;

                let mut persisted = employee.clone();
                persisted.id = Some(self.conn.last_insert_rowid());
                Ok(persisted)
            }
            Some(id) => {
                let changed = self
                    .conn
                    .execute(
                        "UPDATE employees
                         SET
                            first_name = ?1,
                            last_name = ?2,
                            email = ?3,
                            updated_at = (strftime('%s', 'now') * 1000)
                         WHERE id = ?4;",
                        params![
                            employee.first_name.as_str(),
                            employee.last_name.as_str(),
                            employee.email.as_str(),
                            id,
                        ],
                    )
                    .map_err(|err| map_write_error(err, &employee.email))?;

                if changed == 0 {
                    return Err(RepoError::NotFound(id));
                }

                Ok(employee.clone())
            }
        }
    }

    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_employee_row(row)?));
        }

        Ok(None)
    }

    fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE email = ?1;"))?;

        let mut rows = stmt.query([email])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_employee_row(row)?));
        }

        Ok(None)
    }

    fn find_by_last_name_like(&self, pattern: &str) -> RepoResult<Vec<Employee>> {
        self.query_many(
            &format!("{EMPLOYEE_SELECT_SQL} WHERE last_name LIKE ?1 ORDER BY id;"),
            [pattern],
        )
    }

    fn find_by_first_name(&self, first_name: &str) -> RepoResult<Vec<Employee>> {
        self.query_many(
            &format!("{EMPLOYEE_SELECT_SQL} WHERE first_name = ?1 ORDER BY id;"),
            [first_name],
        )
    }

    fn find_all(&self) -> RepoResult<Vec<Employee>> {
        self.query_many(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY id;"), [])
    }

    fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()> {
        // Zero affected rows is success: delete is idempotent by contract.
        self.conn
            .execute("DELETE FROM employees WHERE id = ?1;", [id])?;
        Ok(())
    }

    fn delete(&self, employee: &Employee) -> RepoResult<()> {
        match employee.id {
            Some(id) => self.delete_by_id(id),
            None => Ok(()),
        }
    }

    fn delete_all(&self) -> RepoResult<()> {
        self.conn.execute("DELETE FROM employees;", [])?;
        Ok(())
    }

    fn count(&self) -> RepoResult<u64> {
        let count =
            self.conn
                .query_row("SELECT COUNT(*) FROM employees;", [], |row| {
                    row.get::<_, i64>(0)
                })?;
        Ok(count as u64)
    }
}

impl SqliteEmployeeRepository<'_> {
    fn query_many<P: rusqlite::Params>(&self, sql: &str, params: P) -> RepoResult<Vec<Employee>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut employees = Vec::new();

        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }

        Ok(employees)
    }
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    let employee = Employee {
        id: Some(row.get("id")?),
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        email: row.get("email")?,
    };

    employee
        .validate()
        .map_err(|err| RepoError::InvalidData(err.to_string()))?;

    Ok(employee)
}

/// The UNIQUE index on `email` is the only constraint a validated record can
/// still trip at SQL level.
fn map_write_error(err: rusqlite::Error, email: &str) -> RepoError {
    match &err {
        rusqlite::Error::SqliteFailure(code, _)
            if code.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            RepoError::Constraint(ConstraintViolation::DuplicateEmail {
                email: email.to_string(),
            })
        }
        _ => RepoError::Db(DbError::Sqlite(err)),
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let actual_version =
        conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    let expected_version = migrations::latest_version();

    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [EMPLOYEES_TABLE],
        |row| row.get(0),
    )?;
    if table_exists == 0 {
        return Err(RepoError::MissingRequiredTable(EMPLOYEES_TABLE));
    }

    for &column in REQUIRED_COLUMNS {
        let column_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM pragma_table_info(?1)
                WHERE name = ?2
            );",
            params![EMPLOYEES_TABLE, column],
            |row| row.get(0),
        )?;
        if column_exists == 0 {
            return Err(RepoError::MissingRequiredColumn {
                table: EMPLOYEES_TABLE,
                column,
            });
        }
    }

    Ok(())
}
