//! # Typed Property System
//!
//! Strongly-typed, identity-compared keys ([`Property`]) resolving to values
//! inside per-entity containers ([`PropertyStore`]). This is the sole channel
//! through which layout algorithms read configuration and publish computed
//! results onto graph entities.
//!
//! Design rule: pure data plumbing — no I/O, no locking, no async. A store is
//! exclusively owned by the computation that owns its entity; only the keys
//! themselves are shared process-wide.

pub mod holder;
pub mod key;
pub mod store;

pub use holder::PropertyHolder;
pub use key::{DefaultKind, Property, PropertyId};
pub use store::{PropertyStore, PropertyValue};
