//! # Host-Graph Transformers
//!
//! This is THE contract between a host application's graph format and the
//! internal layout model. A transformer imports the host graph into a
//! [`LayoutGraph`], a layout algorithm mutates that graph, and the transformer
//! applies the results back onto the host.
//!
//! ## Implementations
//!
//! | Transformer | Module | Description |
//! |-------------|--------|-------------|
//! | `DiagramTransformer` | `diagram` | One internal node per diagram node |
//! | `ComponentTransformer` | `components` | One internal node per connected component |

pub mod components;
pub mod diagram;

use crate::model::LayoutGraph;
use crate::{Error, Result};

pub use components::ComponentTransformer;
pub use diagram::{Diagram, DiagramEdge, DiagramNode, DiagramTransformer};

// ============================================================================
// Transformer lifecycle
// ============================================================================

/// The strictly linear lifecycle of a transformer instance.
///
/// A transformer is single-use: one import, one apply. Out-of-sequence calls
/// are caller bugs and fail fast with [`Error::ContractViolation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformerState {
    #[default]
    Unimported,
    Imported,
    Applied,
}

impl TransformerState {
    /// Guard for `import_graph`: advances `Unimported -> Imported`.
    pub fn begin_import(&mut self) -> Result<()> {
        match self {
            TransformerState::Unimported => {
                *self = TransformerState::Imported;
                Ok(())
            }
            _ => Err(Error::ContractViolation(
                "import_graph called twice on a single-use transformer".into(),
            )),
        }
    }

    /// Guard for `apply_layout`: advances `Imported -> Applied`.
    pub fn begin_apply(&mut self) -> Result<()> {
        match self {
            TransformerState::Imported => {
                *self = TransformerState::Applied;
                Ok(())
            }
            TransformerState::Unimported => Err(Error::ContractViolation(
                "apply_layout called before import_graph".into(),
            )),
            TransformerState::Applied => Err(Error::ContractViolation(
                "apply_layout called twice on a single-use transformer".into(),
            )),
        }
    }
}

// ============================================================================
// GraphTransformer trait
// ============================================================================

/// Round-trip adapter between a host graph representation and the internal
/// layout model.
///
/// Generic over the host type `G`: host formats are unrelated across
/// integrations, so there is no common host base to inherit from. A
/// transformer instance is exclusively owned by one layout run:
///
/// 1. `import_graph` builds the internal graph, seeds entity property stores
///    from host-side options, and records one correlation entry per created
///    entity for O(1) reverse lookup.
/// 2. The layout algorithm mutates the returned [`LayoutGraph`].
/// 3. `apply_layout` writes computed geometry back onto the host elements.
///
/// The host is passed to both calls; correlation is by host element identity,
/// so both calls must see the same host instance.
pub trait GraphTransformer<G> {
    /// Build the internal layout graph from the host representation.
    ///
    /// Creates one internal entity per relevant host element. Host elements
    /// the transformer deliberately excludes get no counterpart and are left
    /// untouched by `apply_layout`. Single-use: a second call is a contract
    /// violation.
    fn import_graph(&mut self, host: &G) -> Result<&mut LayoutGraph>;

    /// Write computed results back onto the host graph.
    ///
    /// Visits every entity created during import exactly once, resolving its
    /// host counterpart through the correlation recorded at import time. The
    /// internal graph is read, never changed. Callable exactly once, after
    /// `import_graph`.
    fn apply_layout(&mut self, host: &mut G) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_is_linear() {
        let mut state = TransformerState::default();
        assert!(state.begin_apply().is_err());
        assert!(state.begin_import().is_ok());
        assert!(state.begin_import().is_err());
        assert!(state.begin_apply().is_ok());
        assert!(state.begin_apply().is_err());
    }
}
