mod builder;
pub use builder::MappingBuilder;

mod registry;
pub use registry::{registry, Registry};

use stele_core::{
    schema::{ColumnId, Table},
    stmt::Value,
};

use std::fmt;

/// Extracts one column's value from a record.
pub type Getter<M> = fn(&M) -> Value;

/// The declared mapping between a record type and its table.
///
/// Holds the untyped table schema plus one typed getter per column, aligned
/// by column index. Built once with [`MappingBuilder`], registered in the
/// [`Registry`], and shared immutably for the life of the process.
pub struct Mapping<M> {
    table: Table,
    getters: Vec<Getter<M>>,
}

impl<M> Mapping<M> {
    /// Starts declaring a mapping onto the named table.
    pub fn builder(table: impl Into<String>) -> MappingBuilder<M> {
        MappingBuilder::new(table)
    }

    pub(crate) fn new(table: Table, getters: Vec<Getter<M>>) -> Self {
        debug_assert_eq!(table.columns().len(), getters.len());
        Self { table, getters }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub(crate) fn getter(&self, id: ColumnId) -> Option<Getter<M>> {
        self.getters.get(id.0).copied()
    }
}

impl<M> fmt::Debug for Mapping<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapping").field("table", &self.table).finish()
    }
}
