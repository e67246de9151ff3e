//! Quantum circuit generators for demos.

pub mod grover;

pub use grover::{apply_oracle, diffuser, grover_circuit, grover_iterations, num_search_qubits};
