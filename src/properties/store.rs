//! PropertyStore — the typed key-value store on graph entities.
//!
//! Values of arbitrary types live behind one erased trait object per entry;
//! the typed key recovers the concrete type at the lookup boundary. The map
//! itself is keyed by [`PropertyId`], so a lookup through a given key can only
//! ever see values stored through that same key.

use std::any::{Any, type_name};
use std::fmt;

use hashbrown::HashMap;

use super::key::{DefaultKind, Property, PropertyId};

// ============================================================================
// Erased values
// ============================================================================

/// Capability bound for anything stored in a [`PropertyStore`].
///
/// Blanket-implemented for every `Any + Clone + Debug + Send + Sync` type, so
/// plain data (numbers, enums, geometry, vectors of those) qualifies without
/// ceremony. `Send + Sync` keeps property keys usable from statics.
pub trait PropertyValue: Any + fmt::Debug + Send + Sync {
    /// Clone behind the erased pointer.
    fn clone_boxed(&self) -> Box<dyn PropertyValue>;

    /// Upcast for typed recovery.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for typed recovery.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any + Clone + fmt::Debug + Send + Sync> PropertyValue for T {
    fn clone_boxed(&self) -> Box<dyn PropertyValue> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Clone for Box<dyn PropertyValue> {
    fn clone(&self) -> Self {
        self.as_ref().clone_boxed()
    }
}

/// One materialized entry: the erased value plus the key name for diagnostics.
#[derive(Clone)]
struct Entry {
    name: &'static str,
    value: Box<dyn PropertyValue>,
}

// ============================================================================
// PropertyStore
// ============================================================================

/// A mutable, per-entity container mapping typed property keys to values.
///
/// Most entities carry no properties at all, so the backing map is only
/// allocated on the first `set`. Lookups for keys that were never set resolve
/// to the key's default; see [`PropertyStore::get`] for the memoization rule.
///
/// Not synchronized: a store is exclusively owned by the computation that
/// owns its entity.
#[derive(Clone, Default)]
pub struct PropertyStore {
    map: Option<HashMap<PropertyId, Entry>>,
}

impl PropertyStore {
    /// Create an empty store. Allocates nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value for the given key, overwriting any previous entry.
    ///
    /// Returns `&mut Self` for chaining:
    /// `store.set(&A, x).set(&B, y);`
    pub fn set<T: PropertyValue + Clone>(&mut self, property: &Property<T>, value: T) -> &mut Self {
        self.map.get_or_insert_with(HashMap::new).insert(
            property.id(),
            Entry {
                name: property.name(),
                value: Box::new(value),
            },
        );
        self
    }

    /// Remove the entry for the given key, if any.
    ///
    /// The entry is physically removed; a later `get` observes the key's
    /// default again. Unsetting an absent key is not an error.
    pub fn unset<T: PropertyValue + Clone>(&mut self, property: &Property<T>) -> &mut Self {
        if let Some(map) = self.map.as_mut() {
            map.remove(&property.id());
        }
        self
    }

    /// Resolve the value for the given key.
    ///
    /// Returns the stored value if present, otherwise the key's default.
    /// A [`DefaultKind::Shared`] default is stored before it is returned, so
    /// the entity owns a single stable instance that later `get` and
    /// [`get_mut`](Self::get_mut) calls observe. A [`DefaultKind::Value`]
    /// default is returned without touching the store.
    ///
    /// # Panics
    ///
    /// If the stored value is not of the key's type. The map is keyed by
    /// per-key-unique ids, so this indicates a bug in the caller's key
    /// handling, not a data condition.
    pub fn get<T: PropertyValue + Clone>(&mut self, property: &Property<T>) -> T {
        if let Some(entry) = self.map.as_ref().and_then(|m| m.get(&property.id())) {
            return downcast::<T>(entry).clone();
        }
        let default = property.default_value();
        if property.kind() == DefaultKind::Shared {
            self.set(property, default.clone());
        }
        default
    }

    /// Mutable access to the value for the given key.
    ///
    /// Absent entries are materialized from the default first: in-place
    /// mutation requires an entity-owned entry regardless of the key's
    /// default classification.
    ///
    /// # Panics
    ///
    /// If the stored value is not of the key's type (see [`get`](Self::get)).
    pub fn get_mut<T: PropertyValue + Clone>(&mut self, property: &Property<T>) -> &mut T {
        let entry = self
            .map
            .get_or_insert_with(HashMap::new)
            .entry(property.id())
            .or_insert_with(|| Entry {
                name: property.name(),
                value: Box::new(property.default_value()),
            });
        downcast_mut::<T>(entry)
    }

    /// The stored value for the given key, without default resolution.
    ///
    /// # Panics
    ///
    /// If the stored value is not of the key's type (see [`get`](Self::get)).
    pub fn peek<T: PropertyValue + Clone>(&self, property: &Property<T>) -> Option<&T> {
        self.map
            .as_ref()
            .and_then(|m| m.get(&property.id()))
            .map(downcast::<T>)
    }

    /// Whether an entry for the given key is materialized.
    pub fn contains<T: PropertyValue + Clone>(&self, property: &Property<T>) -> bool {
        self.map
            .as_ref()
            .is_some_and(|m| m.contains_key(&property.id()))
    }

    /// Copy every materialized entry of `other` into this store.
    ///
    /// Entries of `other` overwrite entries for the same key here; keys only
    /// present in this store are left untouched (a right-biased union, not a
    /// replace). Defaults that were never materialized in `other` are not
    /// copied. `None` is a no-op.
    pub fn copy_properties<'a>(
        &mut self,
        other: impl Into<Option<&'a PropertyStore>>,
    ) -> &mut Self {
        let Some(other) = other.into() else {
            return self;
        };
        let Some(src) = other.map.as_ref() else {
            return self;
        };
        if src.is_empty() {
            return self;
        }
        let dst = self.map.get_or_insert_with(HashMap::new);
        for (id, entry) in src {
            dst.insert(*id, entry.clone());
        }
        self
    }

    /// Iterate over all materialized entries as `(id, erased value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyId, &dyn PropertyValue)> + '_ {
        self.map
            .iter()
            .flatten()
            .map(|(id, entry)| (*id, entry.value.as_ref()))
    }

    /// Number of materialized entries.
    pub fn len(&self) -> usize {
        self.map.as_ref().map_or(0, |m| m.len())
    }

    /// Whether no entries are materialized.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn downcast<T: PropertyValue>(entry: &Entry) -> &T {
    entry
        .value
        .as_ref()
        .as_any()
        .downcast_ref::<T>()
        .unwrap_or_else(|| type_mismatch(entry, type_name::<T>()))
}

fn downcast_mut<T: PropertyValue>(entry: &mut Entry) -> &mut T {
    if !entry.value.as_ref().as_any().is::<T>() {
        type_mismatch(entry, type_name::<T>());
    }
    entry.value.as_mut().as_any_mut().downcast_mut::<T>().unwrap()
}

fn type_mismatch(entry: &Entry, expected: &str) -> ! {
    panic!(
        "property '{}': stored value {:?} is not a {expected}",
        entry.name, entry.value
    )
}

impl fmt::Debug for PropertyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for entry in self.map.iter().flatten().map(|(_, e)| e) {
            map.entry(&entry.name, &entry.value);
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::key::Property;
    use super::*;

    #[test]
    fn test_set_get_roundtrip() {
        let key = Property::new("weight", 0.0_f64);
        let mut store = PropertyStore::new();
        store.set(&key, 4.5);
        assert_eq!(store.get(&key), 4.5);
    }

    #[test]
    fn test_unset_reverts_to_default() {
        let key = Property::new("weight", 1.0_f64);
        let mut store = PropertyStore::new();
        store.set(&key, 4.5).unset(&key);
        assert_eq!(store.get(&key), 1.0);
        assert!(!store.contains(&key));
    }

    #[test]
    fn test_value_default_not_memoized() {
        let key = Property::new("count", 7_i64);
        let mut store = PropertyStore::new();
        assert_eq!(store.get(&key), 7);
        assert!(store.is_empty());
    }

    #[test]
    fn test_shared_default_memoized() {
        let key = Property::shared("tags", Vec::<String>::new());
        let mut store = PropertyStore::new();
        assert_eq!(store.get(&key), Vec::<String>::new());
        assert!(store.contains(&key));

        store.get_mut(&key).push("fixed".to_string());
        assert_eq!(store.get(&key), vec!["fixed".to_string()]);
    }

    #[test]
    fn test_copy_is_right_biased_union() {
        let k1 = Property::new("one", 0_i64);
        let k2 = Property::new("two", 0_i64);
        let k3 = Property::new("three", 0_i64);

        let mut a = PropertyStore::new();
        a.set(&k1, 1).set(&k2, 2);
        let mut b = PropertyStore::new();
        b.set(&k2, 99).set(&k3, 3);

        a.copy_properties(&b);
        assert_eq!(a.get(&k1), 1);
        assert_eq!(a.get(&k2), 99);
        assert_eq!(a.get(&k3), 3);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_copy_none_is_noop() {
        let k = Property::new("one", 0_i64);
        let mut a = PropertyStore::new();
        a.set(&k, 1);
        a.copy_properties(None);
        assert_eq!(a.len(), 1);
        assert_eq!(a.get(&k), 1);
    }

    #[test]
    fn test_unset_never_allocates() {
        let k = Property::new("one", 0_i64);
        let mut store = PropertyStore::new();
        store.unset(&k);
        assert!(store.map.is_none());
    }

    #[test]
    fn test_peek_does_not_resolve_defaults() {
        let k = Property::shared("pos", (0.0_f64, 0.0_f64));
        let store = PropertyStore::new();
        assert_eq!(store.peek(&k), None);
    }
}
