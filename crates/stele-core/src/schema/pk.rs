use super::ColumnId;

/// The primary key of a mapped table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimaryKey {
    /// Columns composing the primary key, in declared key order.
    ///
    /// This order drives the placeholder order of every generated WHERE
    /// clause, so it must match the order the values are collected in.
    pub columns: Vec<ColumnId>,
}
