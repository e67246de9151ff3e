//! Skinfaxi Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing quantum
//! circuits in Skinfaxi. It forms the foundation of the compilation and
//! execution stack.
//!
//! # Overview
//!
//! A circuit is an ordered instruction sequence built through the fluent
//! [`Circuit`] API. Every append is validated against the circuit's
//! registers, so an invalid circuit cannot be constructed.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`] for addressing
//!   quantum and classical registers
//! - **Gates**: [`StandardGate`] for built-in gates (H, X, CZ, MCX, ...) and
//!   [`CompositeGate`] for subcircuits applied as a single operation
//! - **Instructions**: [`Instruction`] combining gates with their operands
//! - **Circuit**: [`Circuit`] high-level builder API
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use skinfaxi_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell_state", 2, 2);
//!
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.depth(), 3);
//! ```
//!
//! # Example: Embedding a Subcircuit
//!
//! ```rust
//! use skinfaxi_ir::{Circuit, QubitId};
//!
//! // A gate-only circuit converts into a composite gate...
//! let mut block = Circuit::with_size("block", 2, 0);
//! block.h(QubitId(0)).unwrap();
//! block.cx(QubitId(0), QubitId(1)).unwrap();
//! let gate = block.to_gate().unwrap();
//!
//! // ...and is appended to another circuit as ONE operation.
//! let mut circuit = Circuit::with_size("main", 2, 0);
//! circuit.gate(gate, [QubitId(0), QubitId(1)]).unwrap();
//! assert_eq!(circuit.num_ops(), 1);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{CompositeGate, Gate, GateKind, StandardGate};
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, QubitId};
