//! Node in the internal layout graph.

use std::fmt;

use smallvec::SmallVec;

use super::geometry::{Point, Size};
use super::port::PortId;
use crate::properties::{PropertyHolder, PropertyStore};

/// Opaque node identifier, indexing into the owning [`LayoutGraph`] arena.
///
/// [`LayoutGraph`]: super::LayoutGraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node in the internal layout graph.
///
/// Carries the geometry the layout algorithm works on and one property store
/// seeded during import. The store lives and dies with the node.
#[derive(Debug, Clone, Default)]
pub struct LayoutNode {
    pub position: Point,
    pub size: Size,
    /// Ports attached to this node, in attachment order.
    pub ports: SmallVec<[PortId; 4]>,
    pub properties: PropertyStore,
}

impl LayoutNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }
}

impl PropertyHolder for LayoutNode {
    fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyStore {
        &mut self.properties
    }
}
