//! A minimal embeddable host diagram format and its transformer.
//!
//! This is the reference implementation of [`GraphTransformer`]: a flat
//! diagram of boxes and connections, the kind of model a host application
//! would hand over for layout. Real integrations implement the trait for
//! their own formats; this one doubles as the test vehicle for the round-trip
//! contract.

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use super::{GraphTransformer, TransformerState};
use crate::model::{EdgeId, LayoutEdge, LayoutGraph, LayoutNode, NodeId, Padding, Point, Size};
use crate::options::{
    ALIGNMENT, Alignment, MINIMUM_SIZE, PADDING, POSITION, SIZE_OPTIONS, SPACING_NODE_NODE,
    SizeOptions,
};
use crate::properties::PropertyHolder;
use crate::{Error, Result};

// ============================================================================
// Host format
// ============================================================================

/// A box in the host diagram.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramNode {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Layout options set on this element, if any.
    pub alignment: Option<Alignment>,
    pub size_options: Option<SizeOptions>,
    pub minimum_size: Option<Size>,
    pub padding: Option<Padding>,
    /// Excluded elements get no internal counterpart and are never touched.
    pub no_layout: bool,
}

impl DiagramNode {
    pub fn new(id: u64, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn with_size_options(mut self, size_options: SizeOptions) -> Self {
        self.size_options = Some(size_options);
        self
    }

    pub fn with_minimum_size(mut self, minimum_size: Size) -> Self {
        self.minimum_size = Some(minimum_size);
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn excluded(mut self) -> Self {
        self.no_layout = true;
        self
    }
}

/// A connection between two boxes in the host diagram.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramEdge {
    pub id: u64,
    pub source: u64,
    pub target: u64,
    /// Routing points, source to target order.
    pub waypoints: Vec<Point>,
}

impl DiagramEdge {
    pub fn new(id: u64, source: u64, target: u64) -> Self {
        Self {
            id,
            source,
            target,
            waypoints: Vec::new(),
        }
    }
}

/// The host diagram: flat boxes plus connections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
    /// Space to keep between disconnected components, if the host cares.
    pub component_spacing: Option<f64>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: DiagramNode) -> &mut Self {
        self.nodes.push(node);
        self
    }

    pub fn add_edge(&mut self, edge: DiagramEdge) -> &mut Self {
        self.edges.push(edge);
        self
    }

    pub fn node(&self, id: u64) -> Option<&DiagramNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// Host element ids must be unique; a duplicate makes reverse correlation
/// ambiguous and is rejected at import.
pub(crate) fn validate_host(host: &Diagram) -> Result<()> {
    let mut seen = HashSet::new();
    for node in &host.nodes {
        if !seen.insert(node.id) {
            return Err(Error::HostGraph(format!(
                "duplicate node id {} in host diagram",
                node.id
            )));
        }
    }
    seen.clear();
    for edge in &host.edges {
        if !seen.insert(edge.id) {
            return Err(Error::HostGraph(format!(
                "duplicate edge id {} in host diagram",
                edge.id
            )));
        }
    }
    Ok(())
}

// ============================================================================
// DiagramTransformer
// ============================================================================

/// One-to-one transformer: one internal node per diagram node, one internal
/// edge per diagram edge between imported nodes.
///
/// Owns the internal graph and the internal-to-host correlation tables for
/// one layout run.
#[derive(Debug, Default)]
pub struct DiagramTransformer {
    state: TransformerState,
    graph: LayoutGraph,
    /// Internal node -> originating host node id.
    node_host: HashMap<NodeId, u64>,
    /// Internal edge -> originating host edge id.
    edge_host: HashMap<EdgeId, u64>,
}

impl DiagramTransformer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The internal graph built by `import_graph`. Empty before import.
    pub fn graph(&self) -> &LayoutGraph {
        &self.graph
    }

    /// Mutable access for the layout algorithm running between import and
    /// apply.
    pub fn graph_mut(&mut self) -> &mut LayoutGraph {
        &mut self.graph
    }
}

impl GraphTransformer<Diagram> for DiagramTransformer {
    fn import_graph(&mut self, host: &Diagram) -> Result<&mut LayoutGraph> {
        self.state.begin_import()?;
        validate_host(host)?;

        let mut imported: HashMap<u64, NodeId> = HashMap::new();
        for host_node in &host.nodes {
            if host_node.no_layout {
                continue;
            }
            let mut node = LayoutNode::new()
                .with_position(Point::new(host_node.x, host_node.y))
                .with_size(Size::new(host_node.width, host_node.height));
            // Interactive algorithms read the position the host prescribed.
            node.set_property(&POSITION, Point::new(host_node.x, host_node.y));
            if let Some(alignment) = host_node.alignment {
                node.set_property(&ALIGNMENT, alignment);
            }
            if let Some(size_options) = host_node.size_options {
                node.set_property(&SIZE_OPTIONS, size_options);
            }
            if let Some(minimum_size) = host_node.minimum_size {
                node.set_property(&MINIMUM_SIZE, minimum_size);
            }
            if let Some(padding) = host_node.padding {
                node.set_property(&PADDING, padding);
            }
            let id = self.graph.add_node(node);
            imported.insert(host_node.id, id);
            self.node_host.insert(id, host_node.id);
        }

        for host_edge in &host.edges {
            // Edges touching excluded or unknown endpoints stay host-only.
            let (Some(&source), Some(&target)) = (
                imported.get(&host_edge.source),
                imported.get(&host_edge.target),
            ) else {
                continue;
            };
            let mut edge = LayoutEdge::new(source, target);
            edge.bend_points.extend(host_edge.waypoints.iter().copied());
            let id = self.graph.add_edge(edge);
            self.edge_host.insert(id, host_edge.id);
        }

        if let Some(spacing) = host.component_spacing {
            self.graph.set_property(&SPACING_NODE_NODE, spacing);
        }

        tracing::debug!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            skipped_nodes = host.nodes.len() - self.graph.node_count(),
            "imported host diagram"
        );
        Ok(&mut self.graph)
    }

    fn apply_layout(&mut self, host: &mut Diagram) -> Result<()> {
        self.state.begin_apply()?;

        let node_slots: HashMap<u64, usize> = host
            .nodes
            .iter()
            .enumerate()
            .map(|(slot, n)| (n.id, slot))
            .collect();
        let edge_slots: HashMap<u64, usize> = host
            .edges
            .iter()
            .enumerate()
            .map(|(slot, e)| (e.id, slot))
            .collect();

        let mut written = 0usize;
        for (&internal, host_id) in &self.node_host {
            // A host element that vanished since import is a correlation gap,
            // not an error.
            let Some(&slot) = node_slots.get(host_id) else {
                continue;
            };
            let node = self.graph.node(internal);
            let target = &mut host.nodes[slot];
            target.x = node.position.x;
            target.y = node.position.y;
            target.width = node.size.width;
            target.height = node.size.height;
            written += 1;
        }

        for (&internal, host_id) in &self.edge_host {
            let Some(&slot) = edge_slots.get(host_id) else {
                continue;
            };
            let edge = self.graph.edge(internal);
            host.edges[slot].waypoints = edge.bend_points.to_vec();
        }

        tracing::debug!(nodes = written, "applied layout to host diagram");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_box_host() -> Diagram {
        let mut host = Diagram::new();
        host.add_node(DiagramNode::new(1, 0.0, 0.0, 40.0, 30.0))
            .add_node(DiagramNode::new(2, 100.0, 0.0, 40.0, 30.0))
            .add_edge(DiagramEdge::new(10, 1, 2));
        host
    }

    #[test]
    fn test_import_builds_one_entity_per_element() {
        let host = two_box_host();
        let mut transformer = DiagramTransformer::new();
        let graph = transformer.import_graph(&host).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_import_seeds_options() {
        let mut host = Diagram::new();
        host.add_node(
            DiagramNode::new(1, 0.0, 0.0, 40.0, 30.0).with_alignment(Alignment::Center),
        );
        let mut transformer = DiagramTransformer::new();
        let graph = transformer.import_graph(&host).unwrap();
        let node = graph.node_mut(NodeId(0));
        assert!(node.has_property(&ALIGNMENT));
        assert_eq!(node.get_property(&ALIGNMENT), Alignment::Center);
    }

    #[test]
    fn test_import_rejects_duplicate_ids() {
        let mut host = Diagram::new();
        host.add_node(DiagramNode::new(1, 0.0, 0.0, 1.0, 1.0))
            .add_node(DiagramNode::new(1, 5.0, 5.0, 1.0, 1.0));
        let mut transformer = DiagramTransformer::new();
        assert!(matches!(
            transformer.import_graph(&host),
            Err(Error::HostGraph(_))
        ));
    }

    #[test]
    fn test_excluded_nodes_get_no_counterpart() {
        let mut host = two_box_host();
        host.add_node(DiagramNode::new(3, 7.0, 7.0, 1.0, 1.0).excluded());
        host.add_edge(DiagramEdge::new(11, 2, 3));
        let mut transformer = DiagramTransformer::new();
        let graph = transformer.import_graph(&host).unwrap();
        assert_eq!(graph.node_count(), 2);
        // The edge into the excluded node stays host-only.
        assert_eq!(graph.edge_count(), 1);
    }
}
