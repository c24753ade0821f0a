//! The property-holder seam.
//!
//! Every graph entity owns exactly one [`PropertyStore`]; this trait is the
//! contract through which generic code (option seeding, layout algorithms)
//! reaches it without knowing the entity type.

use super::key::Property;
use super::store::{PropertyStore, PropertyValue};

/// Anything that owns a [`PropertyStore`].
pub trait PropertyHolder {
    /// Read access to the entity's store.
    fn properties(&self) -> &PropertyStore;

    /// Write access to the entity's store.
    fn properties_mut(&mut self) -> &mut PropertyStore;

    /// Resolve a property on this entity (stored value or default).
    fn get_property<T: PropertyValue + Clone>(&mut self, property: &Property<T>) -> T {
        self.properties_mut().get(property)
    }

    /// Store a property value on this entity.
    fn set_property<T: PropertyValue + Clone>(
        &mut self,
        property: &Property<T>,
        value: T,
    ) -> &mut Self
    where
        Self: Sized,
    {
        self.properties_mut().set(property, value);
        self
    }

    /// Whether this entity has a materialized entry for the property.
    fn has_property<T: PropertyValue + Clone>(&self, property: &Property<T>) -> bool {
        self.properties().contains(property)
    }
}
