use crate::stmt;

use std::fmt;

/// A mapped column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Uniquely identifies the column within its table.
    pub id: ColumnId,

    /// The name of the column in the database.
    pub name: String,

    /// The declared database type of the column. Every value bound to this
    /// column is converted to this type before it is handed to the executor.
    pub ty: stmt::Type,

    /// True if the column is part of the table's primary key
    pub primary_key: bool,
}

/// Index of a column within its owning table.
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct ColumnId(pub usize);

impl From<&Column> for ColumnId {
    fn from(value: &Column) -> Self {
        value.id
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({})", self.0)
    }
}
