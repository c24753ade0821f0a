//! # Layout Options
//!
//! Enumerated option values and the core option keys they are stored under.
//! Options carry no behavior of their own — layout algorithms read them from
//! entity property stores and decide what to honor.

use std::sync::LazyLock;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::model::{Padding, Point, Size};
use crate::properties::Property;

// ============================================================================
// Alignment
// ============================================================================

/// Node alignment within the space assigned by the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Alignment {
    /// Let the algorithm decide.
    #[default]
    Automatic,
    Left,
    Right,
    Top,
    Bottom,
    Center,
}

// ============================================================================
// Size options
// ============================================================================

bitflags! {
    /// Flags modifying how size constraints of a node are applied.
    ///
    /// Only meaningful to algorithms that honor minimum sizes; an algorithm
    /// may support a subset of these flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SizeOptions: u8 {
        /// When no minimum size is set on an element, assume an
        /// algorithm-determined default minimum.
        const DEFAULT_MINIMUM_SIZE = 0b0001;
        /// Treat minimum size plus computed padding as the lower bound,
        /// instead of applying the minimum to the whole node size.
        const MINIMUM_SIZE_ACCOUNTS_FOR_PADDING = 0b0010;
        /// Compute node padding and publish it as part of the result.
        const COMPUTE_PADDING = 0b0100;
        /// Apply algorithm-computed padding directly to child positions.
        const APPLY_ADDITIONAL_PADDING = 0b1000;
    }
}

impl Default for SizeOptions {
    fn default() -> Self {
        Self::DEFAULT_MINIMUM_SIZE
    }
}

// Serialized as the raw bit pattern; unknown bits are rejected on the way in.
impl Serialize for SizeOptions {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for SizeOptions {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u8::deserialize(deserializer)?;
        SizeOptions::from_bits(bits)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown size option bits {bits:#x}")))
    }
}

// ============================================================================
// Core option keys
// ============================================================================

/// How a node is aligned within its assigned space.
pub static ALIGNMENT: LazyLock<Property<Alignment>> =
    LazyLock::new(|| Property::new("alignment", Alignment::Automatic));

/// Size-constraint modifier flags.
pub static SIZE_OPTIONS: LazyLock<Property<SizeOptions>> =
    LazyLock::new(|| Property::new("sizeOptions", SizeOptions::default()));

/// Space reserved between an entity's border and its content.
///
/// Shared default: algorithms adjust the resolved padding in place, so each
/// entity must own its instance.
pub static PADDING: LazyLock<Property<Padding>> =
    LazyLock::new(|| Property::shared("padding", Padding::uniform(12.0)));

/// Lower bound on a node's size.
pub static MINIMUM_SIZE: LazyLock<Property<Size>> =
    LazyLock::new(|| Property::shared("minimumSize", Size::ZERO));

/// A position prescribed by the host, honored by interactive algorithms.
pub static POSITION: LazyLock<Property<Point>> =
    LazyLock::new(|| Property::shared("position", Point::ORIGIN));

/// Minimal space to leave between two nodes.
pub static SPACING_NODE_NODE: LazyLock<Property<f64>> =
    LazyLock::new(|| Property::new("spacing.nodeNode", 20.0));

/// Factor applied to an entity's geometry when results are written back.
pub static SCALE_FACTOR: LazyLock<Property<f64>> =
    LazyLock::new(|| Property::new("scaleFactor", 1.0));

/// Excludes an entity from layout entirely.
pub static NO_LAYOUT: LazyLock<Property<bool>> =
    LazyLock::new(|| Property::new("noLayout", false));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::PropertyStore;

    #[test]
    fn test_enum_defaults() {
        assert_eq!(Alignment::default(), Alignment::Automatic);
        assert_eq!(SizeOptions::default(), SizeOptions::DEFAULT_MINIMUM_SIZE);
    }

    #[test]
    fn test_value_like_keys_resolve_without_memoizing() {
        let mut store = PropertyStore::new();
        assert_eq!(store.get(&ALIGNMENT), Alignment::Automatic);
        assert_eq!(store.get(&SPACING_NODE_NODE), 20.0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_padding_is_entity_owned() {
        let mut a = PropertyStore::new();
        let mut b = PropertyStore::new();
        a.get_mut(&PADDING).left = 99.0;
        assert_eq!(b.get(&PADDING).left, 12.0);
        assert_eq!(a.get(&PADDING).left, 99.0);
    }

    #[test]
    fn test_size_options_combine() {
        let flags = SizeOptions::DEFAULT_MINIMUM_SIZE | SizeOptions::COMPUTE_PADDING;
        assert!(flags.contains(SizeOptions::COMPUTE_PADDING));
        assert!(!flags.contains(SizeOptions::APPLY_ADDITIONAL_PADDING));
    }
}
