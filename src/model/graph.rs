//! The internal layout graph.
//!
//! An arena owning every entity of one layout run. Ids are indices into the
//! arena, so entity lookup is O(1) and the transformer's correlation tables
//! can reference entities without back-pointers.

use smallvec::SmallVec;

use super::edge::{EdgeId, LayoutEdge};
use super::geometry::Point;
use super::node::{LayoutNode, NodeId};
use super::port::{LayoutPort, PortId};
use crate::properties::{PropertyHolder, PropertyStore};

/// The normalized graph model a layout algorithm operates on.
///
/// Entities are created through `add_*` and never removed; a graph is built
/// once per layout run and discarded with it.
#[derive(Debug, Clone, Default)]
pub struct LayoutGraph {
    nodes: Vec<LayoutNode>,
    edges: Vec<LayoutEdge>,
    ports: Vec<LayoutPort>,
    pub properties: PropertyStore,
}

impl LayoutGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Add a node and return its id.
    pub fn add_node(&mut self, node: LayoutNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Add an edge between two existing nodes and return its id.
    pub fn add_edge(&mut self, edge: LayoutEdge) -> EdgeId {
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(edge);
        id
    }

    /// Attach a port to its owner node and return its id.
    pub fn add_port(&mut self, port: LayoutPort) -> PortId {
        let id = PortId(self.ports.len() as u32);
        let owner = port.owner;
        self.ports.push(port);
        self.nodes[owner.0 as usize].ports.push(id);
        id
    }

    // ========================================================================
    // Access
    // ========================================================================

    pub fn node(&self, id: NodeId) -> &LayoutNode {
        &self.nodes[id.0 as usize]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut LayoutNode {
        &mut self.nodes[id.0 as usize]
    }

    pub fn edge(&self, id: EdgeId) -> &LayoutEdge {
        &self.edges[id.0 as usize]
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> &mut LayoutEdge {
        &mut self.edges[id.0 as usize]
    }

    pub fn port(&self, id: PortId) -> &LayoutPort {
        &self.ports[id.0 as usize]
    }

    pub fn port_mut(&mut self, id: PortId) -> &mut LayoutPort {
        &mut self.ports[id.0 as usize]
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(|i| NodeId(i as u32))
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(|i| EdgeId(i as u32))
    }

    pub fn port_ids(&self) -> impl Iterator<Item = PortId> + '_ {
        (0..self.ports.len()).map(|i| PortId(i as u32))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &LayoutNode> {
        self.nodes.iter()
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut LayoutNode> {
        self.nodes.iter_mut()
    }

    pub fn edges(&self) -> impl Iterator<Item = &LayoutEdge> {
        self.edges.iter()
    }

    pub fn edges_mut(&mut self) -> impl Iterator<Item = &mut LayoutEdge> {
        self.edges.iter_mut()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn port_count(&self) -> usize {
        self.ports.len()
    }

    /// Edges incident to the given node, in insertion order.
    pub fn incident_edges(&self, node: NodeId) -> SmallVec<[EdgeId; 4]> {
        self.edge_ids()
            .filter(|id| {
                let e = self.edge(*id);
                e.source == node || e.target == node
            })
            .collect()
    }

    /// Shift a node and everything anchored to it by the given offset.
    pub fn translate_node(&mut self, id: NodeId, offset: Point) {
        self.node_mut(id).position += offset;
    }
}

impl PropertyHolder for LayoutGraph {
    fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyStore {
        &mut self.properties
    }
}

#[cfg(test)]
mod tests {
    use super::super::geometry::Size;
    use super::*;

    #[test]
    fn test_arena_ids_are_dense() {
        let mut graph = LayoutGraph::new();
        let a = graph.add_node(LayoutNode::new());
        let b = graph.add_node(LayoutNode::new().with_size(Size::new(10.0, 10.0)));
        assert_eq!(a, NodeId(0));
        assert_eq!(b, NodeId(1));
        assert_eq!(graph.node(b).size, Size::new(10.0, 10.0));
    }

    #[test]
    fn test_ports_attach_to_owner() {
        let mut graph = LayoutGraph::new();
        let n = graph.add_node(LayoutNode::new());
        let p = graph.add_port(LayoutPort::new(n));
        assert_eq!(graph.node(n).ports.as_slice(), &[p]);
        assert_eq!(graph.port(p).owner, n);
    }

    #[test]
    fn test_incident_edges() {
        let mut graph = LayoutGraph::new();
        let a = graph.add_node(LayoutNode::new());
        let b = graph.add_node(LayoutNode::new());
        let c = graph.add_node(LayoutNode::new());
        let ab = graph.add_edge(LayoutEdge::new(a, b));
        let bc = graph.add_edge(LayoutEdge::new(b, c));
        assert_eq!(graph.incident_edges(b).as_slice(), &[ab, bc]);
        assert_eq!(graph.incident_edges(a).as_slice(), &[ab]);
    }
}
