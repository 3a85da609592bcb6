use rusqlite::Connection;
use staffdir_core::db::migrations::latest_version;
use staffdir_core::db::{open_db, open_db_in_memory, DbError};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "employees");
    assert_index_exists(&conn, "idx_employees_email");
    assert_index_exists(&conn, "idx_employees_last_name");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("staffdir.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "employees");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn schema_rejects_blank_fields_and_duplicate_emails_without_model_checks() {
    let conn = open_db_in_memory().unwrap();

    // Raw SQL writes bypass Employee::validate(); the schema must still
    // hold the line.
    let blank = conn.execute(
        "INSERT INTO employees (first_name, last_name, email)
         VALUES ('  ', 'Karadag', 'karadagoguzkaan@gmail.com');",
        [],
    );
    assert!(blank.is_err());

    conn.execute(
        "INSERT INTO employees (first_name, last_name, email)
         VALUES ('Oguz', 'Karadag', 'karadagoguzkaan@gmail.com');",
        [],
    )
    .unwrap();

    let duplicate = conn.execute(
        "INSERT INTO employees (first_name, last_name, email)
         VALUES ('Selcuk', 'Karadag', 'karadagoguzkaan@gmail.com');",
        [],
    );
    assert!(duplicate.is_err());
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}

fn assert_index_exists(conn: &Connection, index_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'index' AND name = ?1
            );",
            [index_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "index {index_name} does not exist");
}
