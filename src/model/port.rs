//! Port on a layout node.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::{Point, Size};
use super::node::NodeId;
use crate::properties::{PropertyHolder, PropertyStore};

/// Opaque port identifier, indexing into the owning [`LayoutGraph`] arena.
///
/// [`LayoutGraph`]: super::LayoutGraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortId(pub u32);

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which border of its node a port sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PortSide {
    #[default]
    Undefined,
    North,
    East,
    South,
    West,
}

/// An edge attachment point on a node's border.
#[derive(Debug, Clone)]
pub struct LayoutPort {
    /// The node this port is attached to.
    pub owner: NodeId,
    /// Position relative to the owner's top-left corner.
    pub anchor: Point,
    pub size: Size,
    pub side: PortSide,
    pub properties: PropertyStore,
}

impl LayoutPort {
    pub fn new(owner: NodeId) -> Self {
        Self {
            owner,
            anchor: Point::ORIGIN,
            size: Size::ZERO,
            side: PortSide::Undefined,
            properties: PropertyStore::new(),
        }
    }
}

impl PropertyHolder for LayoutPort {
    fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyStore {
        &mut self.properties
    }
}
