//! Connected-component transformer.
//!
//! For compaction problems the layout algorithm does not care about the
//! individual boxes, only about the disconnected components they form. This
//! transformer imports one internal node per connected component of the host
//! diagram — sized to the component's bounding box — and applies the
//! component's displacement back to every member element.

use hashbrown::{HashMap, HashSet};

use super::diagram::{Diagram, DiagramNode, validate_host};
use super::{GraphTransformer, TransformerState};
use crate::model::{LayoutGraph, LayoutNode, NodeId, Point, Size};
use crate::options::SPACING_NODE_NODE;
use crate::properties::PropertyHolder;
use crate::Result;

// ============================================================================
// Union-find over host nodes
// ============================================================================

struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            // Path halving.
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            self.parent[rb] = ra;
        }
    }
}

// ============================================================================
// ComponentTransformer
// ============================================================================

/// Per-component bookkeeping recorded at import time.
#[derive(Debug)]
struct ComponentRecord {
    node: NodeId,
    /// Host node ids belonging to this component.
    members: Vec<u64>,
    /// Host edge ids with both endpoints inside this component.
    member_edges: Vec<u64>,
    /// Bounding-box origin at import time; apply shifts by the difference.
    origin: Point,
}

/// One internal node per connected component of the host diagram.
///
/// The layout algorithm places the component nodes; `apply_layout` moves each
/// member box (and its edge waypoints) by its component's displacement.
/// Component shapes are opaque to the algorithm; only their bounding boxes
/// travel into the internal graph.
#[derive(Debug, Default)]
pub struct ComponentTransformer {
    state: TransformerState,
    graph: LayoutGraph,
    components: Vec<ComponentRecord>,
}

impl ComponentTransformer {
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

    /// Number of components found by import.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}

impl GraphTransformer<Diagram> for ComponentTransformer {
    fn import_graph(&mut self, host: &Diagram) -> Result<&mut LayoutGraph> {
        self.state.begin_import()?;
        validate_host(host)?;

        // Host nodes participating in layout, in host order.
        let members: Vec<&DiagramNode> = host.nodes.iter().filter(|n| !n.no_layout).collect();
        let slot_of: HashMap<u64, usize> = members
            .iter()
            .enumerate()
            .map(|(slot, n)| (n.id, slot))
            .collect();

        let mut union_find = UnionFind::new(members.len());
        for edge in &host.edges {
            if let (Some(&a), Some(&b)) = (slot_of.get(&edge.source), slot_of.get(&edge.target)) {
                union_find.union(a, b);
            }
        }

        // Group member slots by component root, preserving host order.
        let mut groups: HashMap<usize, Vec<usize>> = HashMap::new();
        let mut roots: Vec<usize> = Vec::new();
        for slot in 0..members.len() {
            let root = union_find.find(slot);
            let group = groups.entry(root).or_insert_with(|| {
                roots.push(root);
                Vec::new()
            });
            group.push(slot);
        }

        for root in roots {
            let slots = &groups[&root];
            let mut min = Point::new(f64::INFINITY, f64::INFINITY);
            let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
            for &slot in slots {
                let n = members[slot];
                min.x = min.x.min(n.x);
                min.y = min.y.min(n.y);
                max.x = max.x.max(n.x + n.width);
                max.y = max.y.max(n.y + n.height);
            }

            let node = self.graph.add_node(
                LayoutNode::new()
                    .with_position(min)
                    .with_size(Size::new(max.x - min.x, max.y - min.y)),
            );

            let member_ids: Vec<u64> = slots.iter().map(|&slot| members[slot].id).collect();
            let member_set: HashSet<u64> = member_ids.iter().copied().collect();
            let member_edges = host
                .edges
                .iter()
                .filter(|e| member_set.contains(&e.source) && member_set.contains(&e.target))
                .map(|e| e.id)
                .collect();

            self.components.push(ComponentRecord {
                node,
                members: member_ids,
                member_edges,
                origin: min,
            });
        }

        if let Some(spacing) = host.component_spacing {
            self.graph.set_property(&SPACING_NODE_NODE, spacing);
        }

        tracing::debug!(
            components = self.components.len(),
            members = members.len(),
            "imported host diagram as connected components"
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

        for record in &self.components {
            let offset = self.graph.node(record.node).position - record.origin;
            if offset.x == 0.0 && offset.y == 0.0 {
                continue;
            }
            for member in &record.members {
                let Some(&slot) = node_slots.get(member) else {
                    continue;
                };
                host.nodes[slot].x += offset.x;
                host.nodes[slot].y += offset.y;
            }
            for member in &record.member_edges {
                let Some(&slot) = edge_slots.get(member) else {
                    continue;
                };
                for waypoint in &mut host.edges[slot].waypoints {
                    *waypoint += offset;
                }
            }
        }

        tracing::debug!(
            components = self.components.len(),
            "applied component displacements to host diagram"
        );
        Ok(())
    }
}
