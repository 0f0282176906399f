//! Canonical statement text generation.
//!
//! Every generated statement derives its placeholder order from the table's
//! declared column order: INSERT binds all columns in declared order, UPDATE
//! binds non-key columns then key columns, DELETE binds key columns only.
//! The value collector resolves the same order from the same mapping, which
//! is what keeps text and values aligned.

#[macro_use]
mod fmt;
use fmt::ToCql;

mod delim;
use delim::{And, Comma};

mod ident;
use ident::Ident;

use stele_core::{
    schema::{Column, Table},
    Error, Result,
};

struct Formatter<'a> {
    /// Where to write the generated CQL
    dst: &'a mut String,
}

/// `column = ?`
struct Bind<'a>(&'a Column);

impl ToCql for Bind<'_> {
    fn to_cql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(&self.0.name), " = ?");
    }
}

/// Generates `INSERT INTO t (a, b) VALUES (?, ?)` over all mapped columns in
/// declared order.
pub fn insert(table: &Table) -> String {
    let mut ret = String::new();
    let f = &mut Formatter { dst: &mut ret };

    fmt!(f,
        "INSERT INTO ", Ident(table.name()),
        " (", Comma(table.columns().iter().map(|column| Ident(&column.name))), ")",
        " VALUES (", Comma(table.columns().iter().map(|_| "?")), ")",
    );

    ret
}

/// Generates an INSERT guarded by `IF NOT EXISTS`.
///
/// The placeholder order is identical to [`insert`]. Conditional statements
/// are only valid outside of batches; the batch container rejects them.
pub fn insert_if_not_exists(table: &Table) -> String {
    let mut ret = insert(table);
    ret.push_str(" IF NOT EXISTS");
    ret
}

/// Generates `UPDATE t SET x = ?, y = ? WHERE k = ?`: assignments for every
/// non-key column in declared order, filtered on the key columns in declared
/// key order.
pub fn update(table: &Table) -> Result<String> {
    require_primary_key(table, "UPDATE")?;

    let assignments: Vec<_> = table.non_key_columns().collect();
    if assignments.is_empty() {
        return Err(Error::unsupported_shape(format!(
            "every column of table `{}` is part of the primary key; UPDATE has nothing to assign",
            table.name()
        )));
    }

    let mut ret = String::new();
    let f = &mut Formatter { dst: &mut ret };

    fmt!(f,
        "UPDATE ", Ident(table.name()),
        " SET ", Comma(assignments.into_iter().map(Bind)),
        " WHERE ", And(table.primary_key_columns().map(Bind)),
    );

    Ok(ret)
}

/// Generates `DELETE FROM t WHERE k = ?`, filtered on the key columns in
/// declared key order.
pub fn delete(table: &Table) -> Result<String> {
    require_primary_key(table, "DELETE")?;

    let mut ret = String::new();
    let f = &mut Formatter { dst: &mut ret };

    fmt!(f,
        "DELETE FROM ", Ident(table.name()),
        " WHERE ", And(table.primary_key_columns().map(Bind)),
    );

    Ok(ret)
}

/// Scopes a caller-authored `SET ... WHERE ...` clause to the table by
/// prefixing `UPDATE t `. The caller's bind values are untouched.
pub fn prepend_update(table: &Table, cql: &str) -> String {
    let mut ret = String::new();
    let f = &mut Formatter { dst: &mut ret };

    fmt!(f, "UPDATE ", Ident(table.name()), " ", cql.trim());

    ret
}

/// Scopes a caller-authored `WHERE ...` clause to the table by prefixing
/// `DELETE FROM t `. The caller's bind values are untouched.
pub fn prepend_delete(table: &Table, cql: &str) -> String {
    let mut ret = String::new();
    let f = &mut Formatter { dst: &mut ret };

    fmt!(f, "DELETE FROM ", Ident(table.name()), " ", cql.trim());

    ret
}

fn require_primary_key(table: &Table, operation: &str) -> Result<()> {
    if table.has_primary_key() {
        Ok(())
    } else {
        Err(Error::unsupported_shape(format!(
            "table `{}` has no primary key columns; {} requires at least one",
            table.name(),
            operation
        )))
    }
}
