use super::{Column, ColumnId, PrimaryKey};
use crate::{stmt, Error, Result};

use indexmap::IndexMap;

/// A mapped table: the ordered set of columns one record type maps onto.
///
/// Column order is the declaration order, and it is the single source of
/// truth for both generated statement text and collected bind values.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    columns: Vec<Column>,
    primary_key: PrimaryKey,
    by_name: IndexMap<String, ColumnId>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: vec![],
            primary_key: PrimaryKey::default(),
            by_name: IndexMap::new(),
        }
    }

    /// Appends a column. Key columns join the primary key in the order they
    /// are declared.
    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        ty: stmt::Type,
        primary_key: bool,
    ) -> Result<ColumnId> {
        let name = name.into();
        let id = ColumnId(self.columns.len());

        if self.by_name.contains_key(&name) {
            return Err(Error::unsupported_shape(format!(
                "column `{}` is declared twice on table `{}`",
                name, self.name
            )));
        }

        self.by_name.insert(name.clone(), id);
        self.columns.push(Column {
            id,
            name,
            ty,
            primary_key,
        });

        if primary_key {
            self.primary_key.columns.push(id);
        }

        Ok(id)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        &self.columns[id.into().0]
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.by_name.get(name).map(|id| &self.columns[id.0])
    }

    pub fn primary_key(&self) -> &PrimaryKey {
        &self.primary_key
    }

    pub fn has_primary_key(&self) -> bool {
        !self.primary_key.columns.is_empty()
    }

    pub fn primary_key_columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.primary_key
            .columns
            .iter()
            .map(|column_id| &self.columns[column_id.0])
    }

    pub fn non_key_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter().filter(|column| !column.primary_key)
    }
}
