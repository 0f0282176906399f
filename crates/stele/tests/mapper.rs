use pretty_assertions::assert_eq;
use stele::{
    registry,
    stmt::{Type, Value},
    Consistency, Mapper, Mapping, QueryOptions, RetryPolicy,
};
use uuid::Uuid;

use std::sync::Arc;

struct Track {
    id: Uuid,
    title: String,
    plays: i64,
}

fn register_track() {
    registry().register(
        Mapping::<Track>::builder("tracks")
            .key_column("id", Type::Uuid, |t| Value::from(t.id))
            .column("title", Type::Text, |t| Value::from(t.title.as_str()))
            .column("plays", Type::BigInt, |t| Value::from(t.plays))
            .build()
            .unwrap(),
    );
}

fn track() -> Track {
    Track {
        id: Uuid::nil(),
        title: "mercy".into(),
        plays: 3,
    }
}

#[test]
fn insert_statement() {
    register_track();
    let stmt = Mapper::new().insert(&track()).unwrap();
    assert_eq!(
        stmt.cql(),
        "INSERT INTO tracks (id, title, plays) VALUES (?, ?, ?)"
    );
    assert_eq!(
        stmt.values(),
        &[
            Value::Uuid(Uuid::nil()),
            Value::Text("mercy".into()),
            Value::BigInt(3)
        ]
    );
}

#[test]
fn conditional_insert_is_legal_outside_a_batch() {
    register_track();
    let stmt = Mapper::new().insert_if_not_exists(&track()).unwrap();
    assert_eq!(
        stmt.cql(),
        "INSERT INTO tracks (id, title, plays) VALUES (?, ?, ?) IF NOT EXISTS"
    );
    // Same bind values as the unconditional insert
    assert_eq!(stmt.values().len(), 3);
}

#[test]
fn update_statement() {
    register_track();
    let stmt = Mapper::new().update(&track()).unwrap();
    assert_eq!(
        stmt.cql(),
        "UPDATE tracks SET title = ?, plays = ? WHERE id = ?"
    );
    assert_eq!(
        stmt.values(),
        &[
            Value::Text("mercy".into()),
            Value::BigInt(3),
            Value::Uuid(Uuid::nil())
        ]
    );
}

#[test]
fn delete_statement() {
    register_track();
    let stmt = Mapper::new().delete(&track()).unwrap();
    assert_eq!(stmt.cql(), "DELETE FROM tracks WHERE id = ?");
    assert_eq!(stmt.values(), &[Value::Uuid(Uuid::nil())]);
}

#[test]
fn scoped_statements() {
    register_track();
    let mapper = Mapper::new();

    let stmt = mapper
        .update_where::<Track>(
            "SET plays = ? WHERE id = ?",
            vec![Value::from(4i64), Value::Uuid(Uuid::nil())],
        )
        .unwrap();
    assert_eq!(stmt.cql(), "UPDATE tracks SET plays = ? WHERE id = ?");
    assert_eq!(
        stmt.values(),
        &[Value::BigInt(4), Value::Uuid(Uuid::nil())]
    );

    let stmt = mapper
        .delete_where::<Track>("WHERE id = ?", vec![Value::Uuid(Uuid::nil())])
        .unwrap();
    assert_eq!(stmt.cql(), "DELETE FROM tracks WHERE id = ?");
}

#[test]
fn unmapped_type_fails() {
    struct Unmapped;

    let err = Mapper::new().insert(&Unmapped).unwrap_err();
    assert!(err.is_mapping_not_found());
}

#[derive(Debug)]
struct AlwaysRetry;

impl RetryPolicy for AlwaysRetry {}

#[test]
fn retry_policy_is_an_opaque_passthrough() {
    register_track();
    let policy: Arc<dyn RetryPolicy> = Arc::new(AlwaysRetry);
    let stmt = Mapper::new()
        .insert_with(
            &track(),
            QueryOptions::new()
                .consistency(Consistency::One)
                .retry_policy(policy),
        )
        .unwrap();

    assert!(stmt.options().retry_policy.is_some());
    assert_eq!(stmt.options().consistency, Some(Consistency::One));
}
