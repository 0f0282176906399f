//! Shared statement-building path for [`Batch`](crate::Batch) and
//! [`Mapper`](crate::Mapper).
//!
//! Each function resolves the record type's mapping, generates (or scopes)
//! the statement text, obtains the matching value collector, and bundles the
//! result into a [`Statement`]. Everything fails here, at construction time;
//! nothing is deferred to the executor.

use crate::collector::{collector_for, ValueOrdering};
use crate::mapping::registry;
use crate::options::QueryOptions;
use crate::statement::Statement;
use stele_core::{stmt::Value, Result};
use stele_cql as cql;

pub(crate) fn insert<M: 'static>(record: &M, options: QueryOptions) -> Result<Statement> {
    options.validate()?;
    let mapping = registry().get::<M>()?;
    let text = cql::insert(mapping.table());
    let values = collector_for(&mapping, &text, ValueOrdering::Declared)?.collect(record)?;
    Ok(Statement::with_options(text, values, options))
}

pub(crate) fn insert_if_not_exists<M: 'static>(
    record: &M,
    options: QueryOptions,
) -> Result<Statement> {
    options.validate()?;
    let mapping = registry().get::<M>()?;
    let text = cql::insert_if_not_exists(mapping.table());
    // The condition adds no placeholders; values are the full declared set
    let values = collector_for(&mapping, &text, ValueOrdering::Declared)?.collect(record)?;
    Ok(Statement::with_options(text, values, options))
}

pub(crate) fn update<M: 'static>(record: &M, options: QueryOptions) -> Result<Statement> {
    options.validate()?;
    let mapping = registry().get::<M>()?;
    let text = cql::update(mapping.table())?;
    let values = collector_for(&mapping, &text, ValueOrdering::KeysLast)?.collect(record)?;
    Ok(Statement::with_options(text, values, options))
}

pub(crate) fn delete<M: 'static>(record: &M, options: QueryOptions) -> Result<Statement> {
    options.validate()?;
    let mapping = registry().get::<M>()?;
    let text = cql::delete(mapping.table())?;
    let values = collector_for(&mapping, &text, ValueOrdering::KeysOnly)?.collect(record)?;
    Ok(Statement::with_options(text, values, options))
}

pub(crate) fn update_scoped<M: 'static>(
    text: &str,
    values: Vec<Value>,
    options: QueryOptions,
) -> Result<Statement> {
    options.validate()?;
    let mapping = registry().get::<M>()?;
    let text = cql::prepend_update(mapping.table(), text);
    Ok(Statement::with_options(text, values, options))
}

pub(crate) fn delete_scoped<M: 'static>(
    text: &str,
    values: Vec<Value>,
    options: QueryOptions,
) -> Result<Statement> {
    options.validate()?;
    let mapping = registry().get::<M>()?;
    let text = cql::prepend_delete(mapping.table(), text);
    Ok(Statement::with_options(text, values, options))
}

pub(crate) fn raw(text: impl Into<String>, values: Vec<Value>, options: QueryOptions) -> Result<Statement> {
    options.validate()?;
    Ok(Statement::with_options(text, values, options))
}
