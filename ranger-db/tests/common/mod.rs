//! Shared fixtures for database tests.

#![allow(dead_code)]

use ranger_db::WpDatabase;
use rusqlite::{Connection, params};

/// Creates the subset of the WordPress schema the report reads.
pub fn create_schema(conn: &Connection, prefix: &str) {
    conn.execute_batch(&format!(
        "
        CREATE TABLE {prefix}posts (
            ID INTEGER PRIMARY KEY AUTOINCREMENT,
            post_type TEXT NOT NULL,
            post_status TEXT NOT NULL,
            post_content TEXT NOT NULL
        );

        CREATE TABLE {prefix}postmeta (
            meta_id INTEGER PRIMARY KEY AUTOINCREMENT,
            post_id INTEGER NOT NULL,
            meta_key TEXT,
            meta_value TEXT
        );

        CREATE TABLE {prefix}options (
            option_id INTEGER PRIMARY KEY AUTOINCREMENT,
            option_name TEXT NOT NULL UNIQUE,
            option_value TEXT NOT NULL
        );
        "
    ))
    .unwrap();
}

pub fn create_sitemeta(conn: &Connection, prefix: &str) {
    conn.execute_batch(&format!(
        "CREATE TABLE {prefix}sitemeta (
            meta_id INTEGER PRIMARY KEY AUTOINCREMENT,
            site_id INTEGER NOT NULL,
            meta_key TEXT,
            meta_value TEXT
        );"
    ))
    .unwrap();
}

pub fn insert_post(conn: &Connection, prefix: &str, post_type: &str, status: &str, content: &str) -> i64 {
    conn.execute(
        &format!(
            "INSERT INTO {prefix}posts (post_type, post_status, post_content) VALUES (?1, ?2, ?3)"
        ),
        params![post_type, status, content],
    )
    .unwrap();
    conn.last_insert_rowid()
}

pub fn insert_meta(conn: &Connection, prefix: &str, post_id: i64, key: &str, value: &str) {
    conn.execute(
        &format!("INSERT INTO {prefix}postmeta (post_id, meta_key, meta_value) VALUES (?1, ?2, ?3)"),
        params![post_id, key, value],
    )
    .unwrap();
}

pub fn set_option(conn: &Connection, prefix: &str, name: &str, value: &str) {
    conn.execute(
        &format!("INSERT OR REPLACE INTO {prefix}options (option_name, option_value) VALUES (?1, ?2)"),
        params![name, value],
    )
    .unwrap();
}

pub fn set_sitemeta(conn: &Connection, prefix: &str, key: &str, value: &str) {
    conn.execute(
        &format!("INSERT INTO {prefix}sitemeta (site_id, meta_key, meta_value) VALUES (1, ?1, ?2)"),
        params![key, value],
    )
    .unwrap();
}

/// Serializes a list of strings the way PHP's `serialize()` does.
pub fn php_list(items: &[&str]) -> String {
    let body: String = items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("i:{i};s:{}:\"{item}\";", item.len()))
        .collect();
    format!("a:{}:{{{body}}}", items.len())
}

/// A database with the default prefix, populated by `fill`.
pub fn database_with(fill: impl FnOnce(&Connection)) -> WpDatabase {
    let conn = Connection::open_in_memory().unwrap();
    create_schema(&conn, "wp_");
    fill(&conn);
    WpDatabase::from_connection(conn, "wp_").unwrap()
}
