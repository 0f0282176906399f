use super::{Getter, Mapping};
use stele_core::{stmt::Type, Result, Table};

/// Declares a record type's table mapping, column by column.
///
/// This replaces runtime type inspection with an explicit declaration made
/// once, at registration time:
///
/// ```
/// use stele::{stmt::{Type, Value}, Mapping};
///
/// struct User {
///     key: String,
///     email: String,
/// }
///
/// let mapping = Mapping::<User>::builder("users")
///     .key_column("key", Type::Text, |u| Value::from(u.key.as_str()))
///     .column("email", Type::Text, |u| Value::from(u.email.as_str()))
///     .build()
///     .unwrap();
/// assert_eq!(mapping.table().name(), "users");
/// ```
pub struct MappingBuilder<M> {
    table: Table,
    getters: Vec<Getter<M>>,
    /// First declaration error, surfaced by `build()`
    error: Option<stele_core::Error>,
}

impl<M> MappingBuilder<M> {
    pub(crate) fn new(table: impl Into<String>) -> Self {
        Self {
            table: Table::new(table),
            getters: vec![],
            error: None,
        }
    }

    /// Declares a non-key column.
    pub fn column(self, name: impl Into<String>, ty: Type, getter: Getter<M>) -> Self {
        self.push(name, ty, false, getter)
    }

    /// Declares a primary-key column. Key columns join the WHERE clause of
    /// generated UPDATE and DELETE statements in the order they are declared.
    pub fn key_column(self, name: impl Into<String>, ty: Type, getter: Getter<M>) -> Self {
        self.push(name, ty, true, getter)
    }

    /// Finishes the declaration.
    ///
    /// Fails if any column declaration was invalid (currently: a duplicate
    /// column name). A mapping with no key columns builds successfully and
    /// supports INSERT; UPDATE and DELETE fail for it at generation time.
    pub fn build(self) -> Result<Mapping<M>> {
        if let Some(error) = self.error {
            return Err(error);
        }
        Ok(Mapping::new(self.table, self.getters))
    }

    fn push(mut self, name: impl Into<String>, ty: Type, primary_key: bool, getter: Getter<M>) -> Self {
        if self.error.is_some() {
            return self;
        }
        match self.table.push_column(name, ty, primary_key) {
            Ok(_) => self.getters.push(getter),
            Err(error) => self.error = Some(error),
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stele_core::stmt::Value;

    struct User {
        key: String,
    }

    #[test]
    fn duplicate_column_fails_at_build() {
        let err = Mapping::<User>::builder("users")
            .key_column("key", Type::Text, |u: &User| Value::from(u.key.as_str()))
            .column("key", Type::Text, |u: &User| Value::from(u.key.as_str()))
            .build()
            .unwrap_err();
        assert!(err.is_unsupported_shape());
    }

    #[test]
    fn keyless_mapping_builds() {
        let mapping = Mapping::<User>::builder("audit")
            .column("line", Type::Text, |u: &User| Value::from(u.key.as_str()))
            .build()
            .unwrap();
        assert!(!mapping.table().has_primary_key());
    }
}
