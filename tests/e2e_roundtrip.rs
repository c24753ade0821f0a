//! End-to-end tests for the host round trip.
//!
//! Each test exercises: host diagram -> import_graph -> (algorithm mutation)
//! -> apply_layout, checking what lands back on the host.

use layograph::options::{ALIGNMENT, Alignment, MINIMUM_SIZE, POSITION, SPACING_NODE_NODE};
use layograph::options::SizeOptions;
use layograph::transform::{
    ComponentTransformer, Diagram, DiagramEdge, DiagramNode, DiagramTransformer,
};
use layograph::{Error, GraphTransformer, NodeId, Point, PropertyHolder, Size};
use pretty_assertions::assert_eq;

fn sample_host() -> Diagram {
    let mut host = Diagram::new();
    host.add_node(
        DiagramNode::new(1, 0.0, 0.0, 40.0, 30.0)
            .with_size_options(SizeOptions::DEFAULT_MINIMUM_SIZE | SizeOptions::COMPUTE_PADDING),
    )
    .add_node(DiagramNode::new(2, 100.0, 50.0, 60.0, 20.0))
    .add_edge(DiagramEdge::new(10, 1, 2));
    host.edges[0].waypoints = vec![Point::new(50.0, 25.0)];
    host
}

// ============================================================================
// 1. Identity round trip: no mutation, host comes back bit-identical
// ============================================================================

#[test]
fn test_identity_roundtrip_leaves_host_unchanged() {
    let mut host = sample_host();
    let original = host.clone();

    let mut transformer = DiagramTransformer::new();
    transformer.import_graph(&host).unwrap();
    transformer.apply_layout(&mut host).unwrap();

    assert_eq!(host, original);
}

// ============================================================================
// 2. Algorithm results land on the host
// ============================================================================

#[test]
fn test_layout_results_are_written_back() {
    let mut host = sample_host();

    let mut transformer = DiagramTransformer::new();
    let graph = transformer.import_graph(&host).unwrap();
    graph.node_mut(NodeId(0)).position = Point::new(10.0, 20.0);
    graph.node_mut(NodeId(1)).size = Size::new(80.0, 25.0);
    graph
        .edge_mut(layograph::EdgeId(0))
        .bend_points
        .push(Point::new(70.0, 40.0));
    transformer.apply_layout(&mut host).unwrap();

    assert_eq!(host.node(1).unwrap().x, 10.0);
    assert_eq!(host.node(1).unwrap().y, 20.0);
    assert_eq!(host.node(2).unwrap().width, 80.0);
    assert_eq!(
        host.edges[0].waypoints,
        vec![Point::new(50.0, 25.0), Point::new(70.0, 40.0)]
    );
}

// ============================================================================
// 3. Host options are seeded into entity stores
// ============================================================================

#[test]
fn test_host_options_seed_property_stores() {
    let mut host = Diagram::new();
    host.component_spacing = Some(35.0);
    host.add_node(
        DiagramNode::new(1, 0.0, 0.0, 40.0, 30.0)
            .with_alignment(Alignment::Left)
            .with_minimum_size(Size::new(10.0, 10.0)),
    );
    host.add_node(DiagramNode::new(2, 0.0, 0.0, 40.0, 30.0));

    let mut transformer = DiagramTransformer::new();
    let graph = transformer.import_graph(&host).unwrap();

    assert_eq!(graph.get_property(&SPACING_NODE_NODE), 35.0);

    let configured = graph.node_mut(NodeId(0));
    assert_eq!(configured.get_property(&ALIGNMENT), Alignment::Left);
    assert_eq!(configured.get_property(&MINIMUM_SIZE), Size::new(10.0, 10.0));

    // The unconfigured node resolves defaults instead.
    let plain = graph.node_mut(NodeId(1));
    assert!(!plain.has_property(&ALIGNMENT));
    assert_eq!(plain.get_property(&ALIGNMENT), Alignment::Automatic);
    // Every imported node records the position the host prescribed.
    assert_eq!(plain.get_property(&POSITION), Point::ORIGIN);
}

// ============================================================================
// 4. Excluded host elements are never touched
// ============================================================================

#[test]
fn test_excluded_elements_stay_untouched() {
    let mut host = sample_host();
    host.add_node(DiagramNode::new(3, 7.0, 8.0, 9.0, 10.0).excluded());
    host.add_edge(DiagramEdge::new(11, 2, 3));
    host.edges[1].waypoints = vec![Point::new(1.0, 2.0)];

    let mut transformer = DiagramTransformer::new();
    let graph = transformer.import_graph(&host).unwrap();
    assert_eq!(graph.node_count(), 2);
    for node in graph.nodes_mut() {
        node.position += Point::new(5.0, 5.0);
    }
    transformer.apply_layout(&mut host).unwrap();

    let excluded = host.node(3).unwrap();
    assert_eq!((excluded.x, excluded.y), (7.0, 8.0));
    assert_eq!(host.edges[1].waypoints, vec![Point::new(1.0, 2.0)]);
    // Imported neighbors did move.
    assert_eq!(host.node(1).unwrap().x, 5.0);
}

// ============================================================================
// 5. Lifecycle contract violations fail fast
// ============================================================================

#[test]
fn test_double_import_is_a_contract_violation() {
    let host = sample_host();
    let mut transformer = DiagramTransformer::new();
    transformer.import_graph(&host).unwrap();
    assert!(matches!(
        transformer.import_graph(&host),
        Err(Error::ContractViolation(_))
    ));
}

#[test]
fn test_apply_before_import_is_a_contract_violation() {
    let mut host = sample_host();
    let mut transformer = DiagramTransformer::new();
    assert!(matches!(
        transformer.apply_layout(&mut host),
        Err(Error::ContractViolation(_))
    ));
}

#[test]
fn test_double_apply_is_a_contract_violation() {
    let mut host = sample_host();
    let mut transformer = DiagramTransformer::new();
    transformer.import_graph(&host).unwrap();
    transformer.apply_layout(&mut host).unwrap();
    assert!(matches!(
        transformer.apply_layout(&mut host),
        Err(Error::ContractViolation(_))
    ));
}

// ============================================================================
// 6. Component transformer: displacement lands on members only
// ============================================================================

#[test]
fn test_component_displacement_roundtrip() {
    let mut host = Diagram::new();
    host.add_node(DiagramNode::new(1, 0.0, 0.0, 10.0, 10.0))
        .add_node(DiagramNode::new(2, 30.0, 0.0, 10.0, 10.0))
        .add_node(DiagramNode::new(3, 200.0, 200.0, 10.0, 10.0))
        .add_edge(DiagramEdge::new(10, 1, 2));
    host.edges[0].waypoints = vec![Point::new(15.0, 5.0)];

    let mut transformer = ComponentTransformer::new();
    transformer.import_graph(&host).unwrap();
    assert_eq!(transformer.component_count(), 2);

    // Pack the first component 40 units down, as a compaction pass would.
    transformer
        .graph_mut()
        .translate_node(NodeId(0), Point::new(0.0, 40.0));
    transformer.apply_layout(&mut host).unwrap();

    assert_eq!(host.node(1).unwrap().y, 40.0);
    assert_eq!(host.node(2).unwrap().y, 40.0);
    assert_eq!(host.edges[0].waypoints, vec![Point::new(15.0, 45.0)]);
    // The isolated component was not displaced.
    assert_eq!(host.node(3).unwrap().y, 200.0);
}

#[test]
fn test_component_identity_roundtrip() {
    let mut host = sample_host();
    let original = host.clone();

    let mut transformer = ComponentTransformer::new();
    transformer.import_graph(&host).unwrap();
    transformer.apply_layout(&mut host).unwrap();

    assert_eq!(host, original);
}

// ============================================================================
// 7. The host format itself round-trips through serde
// ============================================================================

#[test]
fn test_diagram_json_roundtrip() {
    let host = sample_host();
    let json = serde_json::to_string(&host).unwrap();
    let back: Diagram = serde_json::from_str(&json).unwrap();
    assert_eq!(back, host);
}
