use crate::build;
use crate::options::QueryOptions;
use crate::statement::Statement;
use stele_core::{stmt::Value, Result};

/// Builds single mapped statements, outside of any batch.
///
/// Each method resolves the record type's registered mapping and returns a
/// finished [`Statement`] for the executor. Unlike a [`Batch`], a standalone
/// conditional insert is legal here.
///
/// [`Batch`]: crate::Batch
#[derive(Debug, Clone, Copy, Default)]
pub struct Mapper;

impl Mapper {
    pub fn new() -> Self {
        Self
    }

    /// An INSERT of all mapped columns of `record`.
    pub fn insert<M: 'static>(&self, record: &M) -> Result<Statement> {
        build::insert(record, QueryOptions::default())
    }

    pub fn insert_with<M: 'static>(&self, record: &M, options: QueryOptions) -> Result<Statement> {
        build::insert(record, options)
    }

    /// An INSERT applied only if no row with the record's primary key
    /// exists. The condition is evaluated by the database; the statement
    /// binds the same values as [`insert`](Self::insert).
    pub fn insert_if_not_exists<M: 'static>(&self, record: &M) -> Result<Statement> {
        build::insert_if_not_exists(record, QueryOptions::default())
    }

    pub fn insert_if_not_exists_with<M: 'static>(
        &self,
        record: &M,
        options: QueryOptions,
    ) -> Result<Statement> {
        build::insert_if_not_exists(record, options)
    }

    /// An UPDATE of `record`'s non-key columns, keyed on its primary key.
    pub fn update<M: 'static>(&self, record: &M) -> Result<Statement> {
        build::update(record, QueryOptions::default())
    }

    pub fn update_with<M: 'static>(&self, record: &M, options: QueryOptions) -> Result<Statement> {
        build::update(record, options)
    }

    /// A caller-authored `SET ... WHERE ...` clause scoped to `M`'s table.
    pub fn update_where<M: 'static>(&self, cql: &str, values: Vec<Value>) -> Result<Statement> {
        build::update_scoped::<M>(cql, values, QueryOptions::default())
    }

    pub fn update_where_with<M: 'static>(
        &self,
        cql: &str,
        values: Vec<Value>,
        options: QueryOptions,
    ) -> Result<Statement> {
        build::update_scoped::<M>(cql, values, options)
    }

    /// A DELETE of `record`, keyed on its primary key.
    pub fn delete<M: 'static>(&self, record: &M) -> Result<Statement> {
        build::delete(record, QueryOptions::default())
    }

    pub fn delete_with<M: 'static>(&self, record: &M, options: QueryOptions) -> Result<Statement> {
        build::delete(record, options)
    }

    /// A caller-authored `WHERE ...` clause scoped to `M`'s table.
    pub fn delete_where<M: 'static>(&self, cql: &str, values: Vec<Value>) -> Result<Statement> {
        build::delete_scoped::<M>(cql, values, QueryOptions::default())
    }

    pub fn delete_where_with<M: 'static>(
        &self,
        cql: &str,
        values: Vec<Value>,
        options: QueryOptions,
    ) -> Result<Statement> {
        build::delete_scoped::<M>(cql, values, options)
    }
}
