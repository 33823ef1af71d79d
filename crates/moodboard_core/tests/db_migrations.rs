use moodboard_core::db::migrations::{apply_migrations, latest_version};
use moodboard_core::db::open_db_in_memory;
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "mood_entries");
}

#[test]
fn applying_migrations_twice_is_idempotent() {
    let mut conn = Connection::open_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();
    apply_migrations(&mut conn).unwrap();

    assert_eq!(schema_version(&conn), latest_version());
}

#[test]
fn each_open_returns_an_independent_empty_database() {
    let first = open_db_in_memory().unwrap();
    first
        .execute(
            "INSERT INTO mood_entries (id, mood, comment, employee_name, created_at)
             VALUES ('11111111-2222-4333-8444-555555555555', 'sad', NULL, 'Anonymous', 0);",
            [],
        )
        .unwrap();

    let second = open_db_in_memory().unwrap();
    assert_eq!(row_count(&first), 1);
    assert_eq!(row_count(&second), 0);
}

#[test]
fn schema_rejects_unknown_mood_category() {
    let conn = open_db_in_memory().unwrap();

    let result = conn.execute(
        "INSERT INTO mood_entries (id, mood, comment, employee_name, created_at)
         VALUES ('11111111-2222-4333-8444-555555555555', 'angry', NULL, 'Anonymous', 0);",
        [],
    );
    assert!(result.is_err());
}

fn row_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM mood_entries;", [], |row| row.get(0))
        .unwrap()
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
