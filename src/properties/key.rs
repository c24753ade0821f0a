//! Typed property keys.
//!
//! A [`Property`] identifies one typed slot on a graph entity. Identity is the
//! key *instance*, never its name or default: two keys declared with the same
//! name remain distinct properties. Keys are created once, usually as
//! process-wide statics, and shared read-only by every store that uses them.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::store::PropertyValue;

/// Opaque property identifier.
///
/// Minted from a process-wide counter when the key is constructed, so every
/// `Property` instance is a distinct property regardless of its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyId(u64);

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

static NEXT_PROPERTY_ID: AtomicU64 = AtomicU64::new(1);

impl PropertyId {
    fn next() -> Self {
        PropertyId(NEXT_PROPERTY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

// ============================================================================
// Default classification
// ============================================================================

/// How a key's default value behaves when resolved by a store.
///
/// The classification is declared at the key, not inferred from the value
/// type. It decides whether [`PropertyStore::get`](super::PropertyStore::get)
/// materializes the default into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultKind {
    /// Value-like default: cheap to re-derive, harmless to hand out again.
    /// Never stored by a lookup.
    Value,

    /// Mutable-shareable default: callers treat the resolved value as
    /// entity-owned and may mutate it in place. The first lookup stores a
    /// fresh instance so every later lookup observes the same entry.
    Shared,
}

// ============================================================================
// Property
// ============================================================================

/// An immutable typed property key with a default value.
///
/// Declare keys as statics and pass them by reference:
///
/// ```
/// use std::sync::LazyLock;
/// use layograph::{Property, PropertyStore};
///
/// static WEIGHT: LazyLock<Property<f64>> =
///     LazyLock::new(|| Property::new("weight", 1.0));
///
/// let mut store = PropertyStore::new();
/// assert_eq!(store.get(&WEIGHT), 1.0);
/// store.set(&WEIGHT, 2.5);
/// assert_eq!(store.get(&WEIGHT), 2.5);
/// ```
pub struct Property<T> {
    id: PropertyId,
    name: &'static str,
    default: T,
    kind: DefaultKind,
}

impl<T: PropertyValue + Clone> Property<T> {
    /// Declare a key whose default is value-like (never memoized).
    pub fn new(name: &'static str, default: T) -> Self {
        Self {
            id: PropertyId::next(),
            name,
            default,
            kind: DefaultKind::Value,
        }
    }

    /// Declare a key whose default is mutable-shareable (memoized per store).
    pub fn shared(name: &'static str, default: T) -> Self {
        Self {
            id: PropertyId::next(),
            name,
            default,
            kind: DefaultKind::Shared,
        }
    }

    /// The identity of this key.
    pub fn id(&self) -> PropertyId {
        self.id
    }

    /// Diagnostic name. Plays no part in identity.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The declared default classification.
    pub fn kind(&self) -> DefaultKind {
        self.kind
    }

    /// A fresh instance of the default value.
    ///
    /// Each call clones the prototype, so a memoized default is owned by the
    /// store that materialized it and never aliased between entities.
    pub fn default_value(&self) -> T {
        self.default.clone()
    }
}

impl<T> PartialEq for Property<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for Property<T> {}

impl<T> std::hash::Hash for Property<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("default", &self.default)
            .field("kind", &self.kind)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_not_structural() {
        let a = Property::new("spacing", 10.0_f64);
        let b = Property::new("spacing", 10.0_f64);
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_default_value_is_fresh() {
        let key = Property::shared("labels", vec!["a".to_string()]);
        let first = key.default_value();
        let mut second = key.default_value();
        second.push("b".to_string());
        assert_eq!(first, vec!["a".to_string()]);
    }
}
