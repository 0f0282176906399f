use pretty_assertions::assert_eq;
use stele_core::{stmt::Type, Table};
use stele_cql as cql;

fn users() -> Table {
    let mut table = Table::new("users");
    table.push_column("key", Type::Text, true).unwrap();
    table.push_column("email", Type::Text, false).unwrap();
    table
}

fn events() -> Table {
    let mut table = Table::new("events");
    table.push_column("day", Type::Text, true).unwrap();
    table.push_column("at", Type::Timestamp, true).unwrap();
    table.push_column("source", Type::Uuid, false).unwrap();
    table.push_column("payload", Type::Blob, false).unwrap();
    table
}

#[test]
fn insert_lists_all_columns_in_declared_order() {
    assert_eq!(
        cql::insert(&users()),
        "INSERT INTO users (key, email) VALUES (?, ?)"
    );
    assert_eq!(
        cql::insert(&events()),
        "INSERT INTO events (day, at, source, payload) VALUES (?, ?, ?, ?)"
    );
}

#[test]
fn insert_if_not_exists_appends_condition() {
    assert_eq!(
        cql::insert_if_not_exists(&users()),
        "INSERT INTO users (key, email) VALUES (?, ?) IF NOT EXISTS"
    );
}

#[test]
fn update_assigns_non_key_columns_and_filters_on_keys() {
    assert_eq!(
        cql::update(&users()).unwrap(),
        "UPDATE users SET email = ? WHERE key = ?"
    );
    assert_eq!(
        cql::update(&events()).unwrap(),
        "UPDATE events SET source = ?, payload = ? WHERE day = ? AND at = ?"
    );
}

#[test]
fn delete_filters_on_key_columns_only() {
    assert_eq!(
        cql::delete(&users()).unwrap(),
        "DELETE FROM users WHERE key = ?"
    );
    assert_eq!(
        cql::delete(&events()).unwrap(),
        "DELETE FROM events WHERE day = ? AND at = ?"
    );
}

#[test]
fn update_requires_a_primary_key() {
    let mut table = Table::new("log");
    table.push_column("line", Type::Text, false).unwrap();

    let err = cql::update(&table).unwrap_err();
    assert!(err.is_unsupported_shape());
    let err = cql::delete(&table).unwrap_err();
    assert!(err.is_unsupported_shape());
}

#[test]
fn update_requires_a_non_key_column() {
    let mut table = Table::new("membership");
    table.push_column("org", Type::Uuid, true).unwrap();
    table.push_column("member", Type::Uuid, true).unwrap();

    let err = cql::update(&table).unwrap_err();
    assert!(err.is_unsupported_shape());

    // DELETE is still fine: it only binds the key columns
    assert_eq!(
        cql::delete(&table).unwrap(),
        "DELETE FROM membership WHERE org = ? AND member = ?"
    );
}

#[test]
fn non_bare_identifiers_are_quoted() {
    let mut table = Table::new("UserEvents");
    table.push_column("Key", Type::Text, true).unwrap();
    table.push_column("body", Type::Text, false).unwrap();

    assert_eq!(
        cql::insert(&table),
        "INSERT INTO \"UserEvents\" (\"Key\", body) VALUES (?, ?)"
    );
    assert_eq!(
        cql::update(&table).unwrap(),
        "UPDATE \"UserEvents\" SET body = ? WHERE \"Key\" = ?"
    );
}

#[test]
fn prepend_update_scopes_caller_text() {
    assert_eq!(
        cql::prepend_update(&users(), "SET email = ? WHERE key = ?"),
        "UPDATE users SET email = ? WHERE key = ?"
    );
    assert_eq!(
        cql::prepend_update(&users(), "  SET email = ? WHERE key = ? "),
        "UPDATE users SET email = ? WHERE key = ?"
    );
}

#[test]
fn prepend_delete_scopes_caller_text() {
    assert_eq!(
        cql::prepend_delete(&users(), "WHERE key = ?"),
        "DELETE FROM users WHERE key = ?"
    );
}

#[test]
fn generation_is_deterministic() {
    let table = events();
    assert_eq!(cql::insert(&table), cql::insert(&table));
    assert_eq!(cql::update(&table).unwrap(), cql::update(&table).unwrap());
}
