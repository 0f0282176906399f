mod batch;
pub use batch::{Batch, BatchKind};

mod build;

mod collector;
pub use collector::{ValueCollector, ValueOrdering};

mod mapper;
pub use mapper::Mapper;

pub mod mapping;
pub use mapping::{registry, Mapping, MappingBuilder, Registry};

mod options;
pub use options::{Consistency, QueryOptions, RetryPolicy};

mod statement;
pub use statement::Statement;

pub use stele_core::{schema, stmt, Error, Result};

use stele_core::stmt::{Type, Value};

/// Converts a single value to the given database type, outside of any record
/// mapping. Useful for arguments to raw statements.
pub fn convert_value(value: impl Into<Value>, ty: &Type) -> Result<Value> {
    ty.cast(value.into())
}
