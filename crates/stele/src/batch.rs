use crate::build;
use crate::options::QueryOptions;
use crate::statement::Statement;
use stele_core::{
    stmt::{Type, Value},
    Error, Result,
};

/// How the executor should apply a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchKind {
    /// Atomic: either every statement applies or none does.
    #[default]
    Logged,
    /// No atomicity guarantee across statements; cheaper.
    Unlogged,
    /// Required for mutations of counter columns.
    Counter,
}

/// An ordered, append-only collection of statements submitted to the
/// database as one unit.
///
/// A batch is a pure builder: appending generates statement text and
/// collects bind values, but performs no I/O. Statements are handed to the
/// executor in exactly the order they were appended. Every error a batch
/// operation can produce is raised at append time, so an assembled batch is
/// either fully valid or never produced.
///
/// A batch is intended to be assembled by one logical call path and then
/// handed off; it is not designed for concurrent mutation.
///
/// ```no_run
/// use stele::{Batch, stmt::Value};
/// # struct User { key: String, email: String }
/// # fn run(user: User) -> stele::Result<()> {
/// let mut batch = Batch::new();
/// batch.insert(&user)?;
/// batch.execute("UPDATE counters SET n = n + 1 WHERE k = ?", vec![Value::from("signups")]);
/// let statements = batch.into_statements();
/// # Ok(()) }
/// ```
#[derive(Debug, Default)]
pub struct Batch {
    kind: BatchKind,
    statements: Vec<Statement>,
}

impl Batch {
    /// Creates an empty logged (atomic) batch.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unlogged() -> Self {
        Self {
            kind: BatchKind::Unlogged,
            statements: vec![],
        }
    }

    pub fn counter() -> Self {
        Self {
            kind: BatchKind::Counter,
            statements: vec![],
        }
    }

    pub fn kind(&self) -> BatchKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// The appended statements, in append order.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Hands the statements off for execution, consuming the batch.
    pub fn into_statements(self) -> Vec<Statement> {
        self.statements
    }

    /// Appends an INSERT of all mapped columns of `record`.
    pub fn insert<M: 'static>(&mut self, record: &M) -> Result<()> {
        self.insert_with(record, QueryOptions::default())
    }

    pub fn insert_with<M: 'static>(&mut self, record: &M, options: QueryOptions) -> Result<()> {
        self.statements.push(build::insert(record, options)?);
        Ok(())
    }

    /// Conditional inserts cannot participate in an atomic batch, so this
    /// always fails with an unsupported-operation error and appends nothing.
    /// Use [`Mapper::insert_if_not_exists`] for a standalone conditional
    /// insert.
    ///
    /// [`Mapper::insert_if_not_exists`]: crate::Mapper::insert_if_not_exists
    pub fn insert_if_not_exists<M: 'static>(&mut self, record: &M) -> Result<()> {
        self.insert_if_not_exists_with(record, QueryOptions::default())
    }

    pub fn insert_if_not_exists_with<M: 'static>(
        &mut self,
        _record: &M,
        _options: QueryOptions,
    ) -> Result<()> {
        Err(Error::unsupported_operation(
            "conditional statements cannot be executed inside an atomic batch",
        ))
    }

    /// Appends an UPDATE of `record`'s non-key columns, keyed on its primary
    /// key.
    pub fn update<M: 'static>(&mut self, record: &M) -> Result<()> {
        self.update_with(record, QueryOptions::default())
    }

    pub fn update_with<M: 'static>(&mut self, record: &M, options: QueryOptions) -> Result<()> {
        self.statements.push(build::update(record, options)?);
        Ok(())
    }

    /// Appends a caller-authored `SET ... WHERE ...` clause scoped to `M`'s
    /// table. `values` are bound as supplied, unconverted.
    pub fn update_where<M: 'static>(&mut self, cql: &str, values: Vec<Value>) -> Result<()> {
        self.update_where_with::<M>(cql, values, QueryOptions::default())
    }

    pub fn update_where_with<M: 'static>(
        &mut self,
        cql: &str,
        values: Vec<Value>,
        options: QueryOptions,
    ) -> Result<()> {
        self.statements
            .push(build::update_scoped::<M>(cql, values, options)?);
        Ok(())
    }

    /// Appends a DELETE of `record`, keyed on its primary key.
    pub fn delete<M: 'static>(&mut self, record: &M) -> Result<()> {
        self.delete_with(record, QueryOptions::default())
    }

    pub fn delete_with<M: 'static>(&mut self, record: &M, options: QueryOptions) -> Result<()> {
        self.statements.push(build::delete(record, options)?);
        Ok(())
    }

    /// Appends a caller-authored `WHERE ...` clause scoped to `M`'s table.
    pub fn delete_where<M: 'static>(&mut self, cql: &str, values: Vec<Value>) -> Result<()> {
        self.delete_where_with::<M>(cql, values, QueryOptions::default())
    }

    pub fn delete_where_with<M: 'static>(
        &mut self,
        cql: &str,
        values: Vec<Value>,
        options: QueryOptions,
    ) -> Result<()> {
        self.statements
            .push(build::delete_scoped::<M>(cql, values, options)?);
        Ok(())
    }

    /// Appends a raw statement with no mapping involved: the escape hatch
    /// for statements over unmapped tables.
    pub fn execute(&mut self, cql: impl Into<String>, values: Vec<Value>) {
        self.statements.push(Statement::new(cql, values));
    }

    pub fn execute_with(
        &mut self,
        cql: impl Into<String>,
        values: Vec<Value>,
        options: QueryOptions,
    ) -> Result<()> {
        self.statements.push(build::raw(cql, values, options)?);
        Ok(())
    }

    /// Converts a single value to the given database type, for use as a raw
    /// statement argument.
    pub fn convert_argument(&self, value: impl Into<Value>, ty: &Type) -> Result<Value> {
        ty.cast(value.into())
    }
}
