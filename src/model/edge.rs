//! Edge in the internal layout graph.

use std::fmt;

use smallvec::SmallVec;

use super::geometry::Point;
use super::node::NodeId;
use super::port::PortId;
use crate::properties::{PropertyHolder, PropertyStore};

/// Opaque edge identifier, indexing into the owning [`LayoutGraph`] arena.
///
/// [`LayoutGraph`]: super::LayoutGraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct EdgeId(pub u32);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed edge in the internal layout graph.
#[derive(Debug, Clone)]
pub struct LayoutEdge {
    pub source: NodeId,
    pub target: NodeId,
    /// Port the edge leaves through, if the source node exposes ports.
    pub source_port: Option<PortId>,
    /// Port the edge enters through, if the target node exposes ports.
    pub target_port: Option<PortId>,
    /// Intermediate routing points, source to target order.
    pub bend_points: SmallVec<[Point; 2]>,
    pub properties: PropertyStore,
}

impl LayoutEdge {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self {
            source,
            target,
            source_port: None,
            target_port: None,
            bend_points: SmallVec::new(),
            properties: PropertyStore::new(),
        }
    }

    /// The other endpoint of this edge, seen from `from`.
    pub fn other_node(&self, from: NodeId) -> Option<NodeId> {
        if from == self.source {
            Some(self.target)
        } else if from == self.target {
            Some(self.source)
        } else {
            None
        }
    }
}

impl PropertyHolder for LayoutEdge {
    fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyStore {
        &mut self.properties
    }
}
