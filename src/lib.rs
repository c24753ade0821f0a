//! # layograph — Typed Properties and Host-Graph Adapters for Layout
//!
//! The plumbing every graph layout pipeline needs and no algorithm wants to
//! own: a type-safe property system for attaching configuration and results
//! to graph entities, and a round-trip transformer contract that imports any
//! host graph format into an internal layout model and writes computed
//! geometry back.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `GraphTransformer` is the contract between host
//!    formats and the layout model; `PropertyHolder` is the contract between
//!    algorithms and entity data
//! 2. **Identity-keyed properties**: a `Property<T>` is the same property
//!    only as the same key instance — names and defaults never collide
//! 3. **Pure data model**: `LayoutGraph` and its entities carry geometry and
//!    properties, nothing else — no I/O, no locking, no async
//! 4. **Single-use transformers**: one import, one apply, enforced
//!
//! ## Quick Start
//!
//! ```rust
//! use layograph::transform::{Diagram, DiagramNode, DiagramTransformer};
//! use layograph::{GraphTransformer, Point};
//!
//! # fn example() -> layograph::Result<()> {
//! let mut host = Diagram::new();
//! host.add_node(DiagramNode::new(1, 0.0, 0.0, 40.0, 30.0));
//! host.add_node(DiagramNode::new(2, 0.0, 0.0, 40.0, 30.0));
//!
//! // Import, let an algorithm place the nodes, apply back.
//! let mut transformer = DiagramTransformer::new();
//! let graph = transformer.import_graph(&host)?;
//! for (i, node) in graph.nodes_mut().enumerate() {
//!     node.position = Point::new(0.0, i as f64 * 50.0);
//! }
//! transformer.apply_layout(&mut host)?;
//!
//! assert_eq!(host.node(2).unwrap().y, 50.0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! Configuration travels through typed property keys:
//!
//! ```rust
//! use layograph::options::{ALIGNMENT, Alignment, PADDING};
//! use layograph::PropertyStore;
//!
//! let mut store = PropertyStore::new();
//! store.set(&ALIGNMENT, Alignment::Center);
//! assert_eq!(store.get(&ALIGNMENT), Alignment::Center);
//!
//! // Unset keys resolve to their declared defaults.
//! assert_eq!(store.get(&PADDING).left, 12.0);
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod options;
pub mod properties;
pub mod transform;

// ============================================================================
// Re-exports: Properties
// ============================================================================

pub use properties::{
    DefaultKind, Property, PropertyHolder, PropertyId, PropertyStore, PropertyValue,
};

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    EdgeId, LayoutEdge, LayoutGraph, LayoutNode, LayoutPort, NodeId, Padding, Point, PortId,
    PortSide, Size,
};

// ============================================================================
// Re-exports: Transform
// ============================================================================

pub use transform::{GraphTransformer, TransformerState};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transformer misuse: out-of-sequence import/apply. A caller bug, not a
    /// data condition.
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    /// Malformed host input, e.g. duplicate element ids.
    #[error("Host graph error: {0}")]
    HostGraph(String),
}

pub type Result<T> = std::result::Result<T, Error>;
