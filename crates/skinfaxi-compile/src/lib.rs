//! Skinfaxi Compilation Framework
//!
//! This crate provides the compilation infrastructure for preparing quantum
//! circuits to run on a target backend. It implements a pass-based
//! architecture, enabling modular and extensible compilation.
//!
//! # Overview
//!
//! The compilation process transforms an input circuit through a series of
//! passes that:
//! 1. **Flatten**: Inline composite gates into their standard-gate bodies
//! 2. **Validate**: Check every gate against the target's basis
//!
//! # Architecture
//!
//! ```text
//! Input Circuit
//!       │
//!       ▼
//! ┌─────────────┐
//! │ PassManager │ ◄── PropertySet (basis gates, pass statistics)
//! └─────────────┘
//!       │
//!       ├── FlattenComposites
//!       └── GateSetValidation
//!       │
//!       ▼
//! Output Circuit (backend-compatible)
//! ```
//!
//! # Example: Basic Compilation
//!
//! ```rust
//! use skinfaxi_compile::{transpile, BasisGates};
//! use skinfaxi_ir::Circuit;
//!
//! let circuit = Circuit::bell().unwrap();
//! let compiled = transpile(&circuit, &BasisGates::simulator()).unwrap();
//!
//! assert_eq!(compiled.num_ops(), circuit.num_ops());
//! ```
//!
//! # Custom Passes
//!
//! Implement the [`Pass`] trait to create custom compilation passes:
//!
//! ```rust
//! use skinfaxi_compile::{CompileResult, Pass, PassKind, PropertySet};
//! use skinfaxi_ir::Circuit;
//!
//! struct MyCustomPass;
//!
//! impl Pass for MyCustomPass {
//!     fn name(&self) -> &str { "my_custom_pass" }
//!     fn kind(&self) -> PassKind { PassKind::Transformation }
//!
//!     fn run(&self, circuit: &mut Circuit, props: &mut PropertySet) -> CompileResult<()> {
//!         // Your pass logic here
//!         Ok(())
//!     }
//! }
//! ```

pub mod error;
pub mod manager;
pub mod pass;
pub mod property;

// Built-in passes
pub mod passes;

pub use error::{CompileError, CompileResult};
pub use manager::{PassManager, PassManagerBuilder};
pub use pass::{Pass, PassKind};
pub use property::{BasisGates, PropertySet};

use skinfaxi_ir::Circuit;

/// Compile a circuit for a target basis.
///
/// Builds the default pass pipeline (flatten composites, then validate the
/// gate set) and runs it on a copy of the input circuit.
pub fn transpile(circuit: &Circuit, basis_gates: &BasisGates) -> CompileResult<Circuit> {
    let (pm, mut properties) = PassManagerBuilder::new()
        .with_basis(basis_gates.clone())
        .build();

    let mut compiled = circuit.clone();
    pm.run(&mut compiled, &mut properties)?;
    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skinfaxi_ir::QubitId;

    #[test]
    fn test_transpile_flattens_composites() {
        let mut inner = Circuit::with_size("body", 2, 0);
        inner.h(QubitId(0)).unwrap();
        inner.cz(QubitId(0), QubitId(1)).unwrap();
        let gate = inner.to_gate().unwrap();

        let mut circuit = Circuit::with_size("outer", 2, 0);
        circuit.gate(gate, [QubitId(0), QubitId(1)]).unwrap();
        circuit.measure_all().unwrap();

        let compiled = transpile(&circuit, &BasisGates::simulator()).unwrap();
        assert_eq!(compiled.num_ops(), 3); // h, cz, measure
        assert!(compiled.instructions().iter().all(|i| {
            i.as_gate()
                .is_none_or(|g| !matches!(g.kind, skinfaxi_ir::GateKind::Composite(_)))
        }));
    }

    #[test]
    fn test_transpile_rejects_unsupported_gate() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit.swap(QubitId(0), QubitId(1)).unwrap();

        let result = transpile(&circuit, &BasisGates::new(["h", "cx"]));
        assert!(matches!(result, Err(CompileError::UnsupportedGate { .. })));
    }

    #[test]
    fn test_transpile_leaves_input_untouched() {
        let circuit = Circuit::bell().unwrap();
        let _ = transpile(&circuit, &BasisGates::simulator()).unwrap();
        assert_eq!(circuit.num_ops(), 4);
    }
}
