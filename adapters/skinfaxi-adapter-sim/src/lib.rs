//! Skinfaxi Local Statevector Simulator
//!
//! This crate provides a local quantum simulator for testing, development,
//! and small-scale experiments. It uses statevector simulation, which
//! provides exact results but is limited to ~20-25 qubits.
//!
//! # Features
//!
//! - **Exact Simulation**: Full statevector representation
//! - **All Standard Gates**: Supports all gates from `skinfaxi-ir`,
//!   including multi-controlled X and embedded composite gates
//! - **Measurement Sampling**: Probabilistic measurement with configurable shots
//!
//! # Performance
//!
//! | Qubits | Memory | Simulation Speed |
//! |--------|--------|------------------|
//! | 10 | ~16 KB | Instant |
//! | 15 | ~512 KB | Fast |
//! | 20 | ~16 MB | Moderate |
//! | 25 | ~512 MB | Slow |
//!
//! # Example
//!
//! ```ignore
//! use skinfaxi_adapter_sim::SimulatorBackend;
//! use skinfaxi_hal::Backend;
//! use skinfaxi_ir::Circuit;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SimulatorBackend::new();
//!
//!     let caps = backend.capabilities();
//!     println!("Max qubits: {}", caps.num_qubits);
//!
//!     // Run a Bell state
//!     let circuit = Circuit::bell()?;
//!     let job_id = backend.submit(&circuit, 1000).await?;
//!     let result = backend.wait(&job_id).await?;
//!
//!     // Expect ~50% |00⟩ and ~50% |11⟩
//!     println!("Results: {:?}", result.counts);
//!
//!     Ok(())
//! }
//! ```

mod simulator;
mod statevector;

pub use simulator::SimulatorBackend;
