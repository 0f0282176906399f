use crate::options::QueryOptions;
use stele_core::stmt::Value;

/// One executable statement: query text, the bind values in the text's
/// placeholder order, and per-statement execution options.
///
/// Immutable once constructed. The executor consumes statements in the order
/// they were produced; two statements with identical text are distinct
/// entries, never deduplicated.
#[derive(Debug, Clone)]
pub struct Statement {
    cql: String,
    values: Vec<Value>,
    options: QueryOptions,
}

impl Statement {
    pub fn new(cql: impl Into<String>, values: Vec<Value>) -> Self {
        Self::with_options(cql, values, QueryOptions::default())
    }

    pub fn with_options(cql: impl Into<String>, values: Vec<Value>, options: QueryOptions) -> Self {
        Self {
            cql: cql.into(),
            values,
            options,
        }
    }

    pub fn cql(&self) -> &str {
        &self.cql
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn options(&self) -> &QueryOptions {
        &self.options
    }
}
