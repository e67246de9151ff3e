//! `PropertySet` and related types for pass communication.
//!
//! This module provides the [`PropertySet`] type, which enables compilation
//! passes to share data with each other. It contains the standard basis-gates
//! property and supports arbitrary custom properties.
//!
//! # Examples
//!
//! ## Basic usage with a target basis
//!
//! ```
//! use skinfaxi_compile::{BasisGates, PropertySet};
//!
//! let props = PropertySet::new().with_basis(BasisGates::simulator());
//!
//! assert!(props.basis_gates.as_ref().unwrap().contains("cz"));
//! ```
//!
//! ## Custom properties for pass communication
//!
//! ```
//! use skinfaxi_compile::PropertySet;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct RewriteStats {
//!     gates_rewritten: usize,
//! }
//!
//! let mut props = PropertySet::new();
//! props.insert(RewriteStats { gates_rewritten: 7 });
//!
//! let stats = props.get::<RewriteStats>().unwrap();
//! assert_eq!(stats.gates_rewritten, 7);
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};

/// Basis gates for the target backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasisGates {
    /// List of gate names in the basis.
    gates: Vec<String>,
}

impl BasisGates {
    /// Create a new basis gates set.
    pub fn new(gates: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            gates: gates.into_iter().map(std::convert::Into::into).collect(),
        }
    }

    /// Check if a gate is in the basis.
    ///
    /// Note: This uses linear search over the gate list. For large basis gate
    /// sets, consider using a `HashSet<String>` for O(1) lookups instead.
    pub fn contains(&self, gate: &str) -> bool {
        self.gates.iter().any(|g| g == gate)
    }

    /// Get the basis gates.
    pub fn gates(&self) -> &[String] {
        &self.gates
    }

    /// The native basis of the statevector simulator.
    pub fn simulator() -> Self {
        Self::new([
            "id", "x", "y", "z", "h", "s", "sdg", "t", "tdg", "p", "cx", "cy", "cz", "swap",
            "cp", "ccx", "mcx",
        ])
    }
}

/// Properties shared between compilation passes.
///
/// The `PropertySet` allows passes to communicate by storing and retrieving
/// typed values. The standard basis-gates property has a dedicated public
/// field for convenience; passes can store arbitrary data using the
/// type-safe [`insert`](Self::insert) and [`get`](Self::get) methods. Each
/// type can have at most one value stored.
#[derive(Debug, Default)]
pub struct PropertySet {
    /// Target basis gates for gate-set validation.
    ///
    /// Should be set before running validation passes.
    pub basis_gates: Option<BasisGates>,

    /// Custom properties storage (type-erased).
    custom: FxHashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl PropertySet {
    /// Create a new empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target basis gates.
    #[must_use]
    pub fn with_basis(mut self, basis_gates: BasisGates) -> Self {
        self.basis_gates = Some(basis_gates);
        self
    }

    /// Insert a custom property.
    pub fn insert<T: Any + Send + Sync>(&mut self, value: T) {
        self.custom.insert(TypeId::of::<T>(), Box::new(value));
    }

    /// Get a custom property.
    pub fn get<T: Any>(&self) -> Option<&T> {
        self.custom
            .get(&TypeId::of::<T>())
            .and_then(|v| v.downcast_ref())
    }

    /// Get a mutable custom property.
    pub fn get_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.custom
            .get_mut(&TypeId::of::<T>())
            .and_then(|v| v.downcast_mut())
    }

    /// Remove a custom property.
    pub fn remove<T: Any>(&mut self) -> Option<T> {
        self.custom
            .remove(&TypeId::of::<T>())
            .and_then(|v| v.downcast().ok())
            .map(|v| *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_gates_simulator() {
        let basis = BasisGates::simulator();
        assert!(basis.contains("h"));
        assert!(basis.contains("mcx"));
        assert!(!basis.contains("rx"));
    }

    #[test]
    fn test_property_set_with_basis() {
        let props = PropertySet::new().with_basis(BasisGates::new(["h", "cx"]));
        assert!(props.basis_gates.as_ref().unwrap().contains("cx"));
    }

    #[test]
    #[allow(clippy::items_after_statements)]
    fn test_property_set_custom() {
        let mut props = PropertySet::new();

        #[derive(Debug, PartialEq)]
        struct CustomData(i32);

        props.insert(CustomData(42));
        assert_eq!(props.get::<CustomData>(), Some(&CustomData(42)));

        let removed = props.remove::<CustomData>();
        assert_eq!(removed, Some(CustomData(42)));
        assert_eq!(props.get::<CustomData>(), None);
    }
}
