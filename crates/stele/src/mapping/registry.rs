use super::Mapping;
use stele_core::{Error, Result};

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

/// Process-wide store of declared record mappings.
///
/// Read-mostly after warm-up: registration uses an insert-if-absent
/// discipline, so two threads racing to register the same type converge on a
/// single stored mapping. Mappings are immutable once stored and are never
/// torn down during normal operation.
pub struct Registry {
    mappings: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

/// The process-wide registry consulted by [`Batch`] and [`Mapper`].
///
/// [`Batch`]: crate::Batch
/// [`Mapper`]: crate::Mapper
pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::new)
}

impl Registry {
    pub fn new() -> Self {
        Self {
            mappings: RwLock::new(HashMap::new()),
        }
    }

    /// Stores the mapping for `M` and returns the stored handle.
    ///
    /// Insert-if-absent: if a mapping for `M` is already registered, the
    /// existing one wins and is returned unchanged.
    pub fn register<M: 'static>(&self, mapping: Mapping<M>) -> Arc<Mapping<M>> {
        let mut mappings = self.mappings.write().unwrap();
        let entry = mappings
            .entry(TypeId::of::<M>())
            .or_insert_with(|| Arc::new(mapping));
        Self::downcast(entry)
    }

    /// Returns the registered mapping for `M`.
    pub fn get<M: 'static>(&self) -> Result<Arc<Mapping<M>>> {
        let mappings = self.mappings.read().unwrap();
        match mappings.get(&TypeId::of::<M>()) {
            Some(entry) => Ok(Self::downcast(entry)),
            None => Err(Error::mapping_not_found(type_name::<M>())),
        }
    }

    pub fn is_registered<M: 'static>(&self) -> bool {
        self.mappings
            .read()
            .unwrap()
            .contains_key(&TypeId::of::<M>())
    }

    fn downcast<M: 'static>(entry: &Arc<dyn Any + Send + Sync>) -> Arc<Mapping<M>> {
        // Entries are keyed by TypeId::of::<M>, so the stored type is always
        // Mapping<M>
        Arc::downcast(entry.clone()).expect("registry entry stored under wrong type id")
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stele_core::stmt::{Type, Value};

    struct Point {
        x: i32,
    }

    fn point_mapping() -> Mapping<Point> {
        Mapping::builder("points")
            .key_column("x", Type::Int, |p: &Point| Value::from(p.x))
            .build()
            .unwrap()
    }

    #[test]
    fn unregistered_type_fails() {
        struct Unregistered;

        let registry = Registry::new();
        let err = registry.get::<Unregistered>().unwrap_err();
        assert!(err.is_mapping_not_found());
    }

    #[test]
    fn first_registration_wins() {
        let registry = Registry::new();

        let first = registry.register(point_mapping());

        // A different declaration for the same type; it must lose.
        let other = Mapping::builder("points_v2")
            .key_column("x", Type::Int, |p: &Point| Value::from(p.x))
            .build()
            .unwrap();
        let second = registry.register(other);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.table().name(), "points");
    }

    #[test]
    fn get_returns_registered_mapping() {
        let registry = Registry::new();
        registry.register(point_mapping());

        let mapping = registry.get::<Point>().unwrap();
        assert_eq!(mapping.table().name(), "points");
        assert!(registry.is_registered::<Point>());
    }
}
