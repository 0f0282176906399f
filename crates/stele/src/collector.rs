use crate::mapping::{Getter, Mapping};
use stele_core::{
    err,
    schema::ColumnId,
    stmt::{Type, Value},
    Error, Result,
};

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

/// The positional orderings a generated statement can require of its bind
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueOrdering {
    /// All mapped columns, in declared order (INSERT).
    Declared,
    /// Non-key columns first, key columns appended last (UPDATE).
    KeysLast,
    /// Key columns only (DELETE).
    KeysOnly,
}

/// Extracts a record's bind values in the positional order one generated
/// statement requires.
///
/// The resolved column order and per-column converters are computed once,
/// when the collector is built; applying it to a record is a straight walk
/// over that order. The order always matches the placeholder order of the
/// statement generated with the same ordering mode from the same mapping,
/// which is the subsystem's central correctness contract.
pub struct ValueCollector<M> {
    columns: Vec<BoundColumn<M>>,
}

impl<M> std::fmt::Debug for ValueCollector<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueCollector")
            .field("columns", &self.columns)
            .finish()
    }
}

struct BoundColumn<M> {
    name: String,
    ty: Type,
    getter: Getter<M>,
}

impl<M> std::fmt::Debug for BoundColumn<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundColumn")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("getter", &self.getter)
            .finish()
    }
}

impl<M> ValueCollector<M> {
    pub(crate) fn build(mapping: &Mapping<M>, ordering: ValueOrdering) -> Result<Self> {
        let table = mapping.table();

        if ordering != ValueOrdering::Declared && !table.has_primary_key() {
            return Err(Error::unsupported_shape(format!(
                "table `{}` has no primary key columns",
                table.name()
            )));
        }

        let ids: Vec<ColumnId> = match ordering {
            ValueOrdering::Declared => table.columns().iter().map(ColumnId::from).collect(),
            ValueOrdering::KeysLast => table
                .non_key_columns()
                .map(ColumnId::from)
                .chain(table.primary_key().columns.iter().copied())
                .collect(),
            ValueOrdering::KeysOnly => table.primary_key().columns.clone(),
        };

        let mut columns = Vec::with_capacity(ids.len());
        for id in ids {
            let column = table.column(id);
            let getter = mapping
                .getter(id)
                .ok_or_else(|| Error::missing_column(&column.name, table.name()))?;
            columns.push(BoundColumn {
                name: column.name.clone(),
                ty: column.ty.clone(),
                getter,
            });
        }

        Ok(Self { columns })
    }

    /// Extracts and converts the record's values, in collector order.
    pub fn collect(&self, record: &M) -> Result<Vec<Value>> {
        let mut values = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            let value = (column.getter)(record);
            let value = column
                .ty
                .cast(value)
                .map_err(|e| e.context(err!("cannot bind column `{}`", column.name)))?;
            values.push(value);
        }
        Ok(values)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

type Erased = Arc<dyn Any + Send + Sync>;

/// Collector cache, keyed by (record type, ordering) then by statement text.
///
/// Keying by text means a caller supplying custom statement text for an
/// already-mapped type gets its own entry, and repeated batch operations on
/// the same type and statement reuse one collector. Reads take the outer
/// lock shared; first use builds outside the lock and inserts if still
/// absent, so concurrent first use converges on a single collector.
fn cache() -> &'static RwLock<HashMap<(TypeId, ValueOrdering), HashMap<String, Erased>>> {
    static CACHE: OnceLock<RwLock<HashMap<(TypeId, ValueOrdering), HashMap<String, Erased>>>> =
        OnceLock::new();
    CACHE.get_or_init(Default::default)
}

/// Returns the collector for `(M, cql, ordering)`, building and caching it on
/// first use.
pub(crate) fn collector_for<M: 'static>(
    mapping: &Mapping<M>,
    cql: &str,
    ordering: ValueOrdering,
) -> Result<Arc<ValueCollector<M>>> {
    let outer_key = (TypeId::of::<M>(), ordering);

    {
        let cache = cache().read().unwrap();
        if let Some(entry) = cache.get(&outer_key).and_then(|by_cql| by_cql.get(cql)) {
            return Ok(downcast::<M>(entry));
        }
    }

    let built: Erased = Arc::new(ValueCollector::build(mapping, ordering)?);

    let mut cache = cache().write().unwrap();
    let entry = cache
        .entry(outer_key)
        .or_default()
        .entry(cql.to_owned())
        .or_insert(built);
    Ok(downcast::<M>(entry))
}

fn downcast<M: 'static>(entry: &Erased) -> Arc<ValueCollector<M>> {
    // Entries are keyed by TypeId::of::<M>, so the stored type is always
    // ValueCollector<M>
    Arc::downcast(entry.clone()).expect("collector cache entry stored under wrong type id")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Track {
        id: i64,
        title: String,
        plays: i32,
    }

    fn mapping() -> Mapping<Track> {
        Mapping::builder("tracks")
            .key_column("id", Type::BigInt, |t: &Track| Value::from(t.id))
            .column("title", Type::Text, |t: &Track| {
                Value::from(t.title.as_str())
            })
            .column("plays", Type::BigInt, |t: &Track| Value::from(t.plays))
            .build()
            .unwrap()
    }

    fn track() -> Track {
        Track {
            id: 9,
            title: "mercy".into(),
            plays: 3,
        }
    }

    #[test]
    fn declared_order_covers_all_columns() {
        let collector = ValueCollector::build(&mapping(), ValueOrdering::Declared).unwrap();
        assert_eq!(collector.len(), 3);
        assert_eq!(
            collector.collect(&track()).unwrap(),
            vec![
                Value::BigInt(9),
                Value::Text("mercy".into()),
                Value::BigInt(3)
            ]
        );
    }

    #[test]
    fn keys_last_moves_key_columns_to_the_end() {
        let collector = ValueCollector::build(&mapping(), ValueOrdering::KeysLast).unwrap();
        assert_eq!(
            collector.collect(&track()).unwrap(),
            vec![
                Value::Text("mercy".into()),
                Value::BigInt(3),
                Value::BigInt(9)
            ]
        );
    }

    #[test]
    fn keys_only_restricts_to_key_columns() {
        let collector = ValueCollector::build(&mapping(), ValueOrdering::KeysOnly).unwrap();
        assert_eq!(collector.collect(&track()).unwrap(), vec![Value::BigInt(9)]);
    }

    #[test]
    fn values_are_converted_to_the_declared_type() {
        // `plays` is declared bigint but the getter produces an int
        let collector = ValueCollector::build(&mapping(), ValueOrdering::Declared).unwrap();
        let values = collector.collect(&track()).unwrap();
        assert_eq!(values[2], Value::BigInt(3));
    }

    #[test]
    fn keyless_mapping_rejects_key_orderings() {
        struct Line(String);
        let mapping = Mapping::builder("log")
            .column("line", Type::Text, |l: &Line| Value::from(l.0.as_str()))
            .build()
            .unwrap();

        assert!(ValueCollector::build(&mapping, ValueOrdering::Declared).is_ok());
        let err = ValueCollector::build(&mapping, ValueOrdering::KeysLast).unwrap_err();
        assert!(err.is_unsupported_shape());
        let err = ValueCollector::build(&mapping, ValueOrdering::KeysOnly).unwrap_err();
        assert!(err.is_unsupported_shape());
    }

    #[test]
    fn cached_collectors_produce_identical_sequences() {
        let mapping = mapping();
        let a = collector_for(&mapping, "INSERT ...", ValueOrdering::Declared).unwrap();
        let b = collector_for(&mapping, "INSERT ...", ValueOrdering::Declared).unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(
            a.collect(&track()).unwrap(),
            b.collect(&track()).unwrap()
        );
    }

    #[test]
    fn custom_text_gets_its_own_entry() {
        let mapping = mapping();
        let a = collector_for(&mapping, "one", ValueOrdering::KeysOnly).unwrap();
        let b = collector_for(&mapping, "two", ValueOrdering::KeysOnly).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
    }
}
