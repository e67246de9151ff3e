//! End-to-end Grover search runner.

use anyhow::{Result, bail};
use tracing::{info, instrument};

use skinfaxi_compile::{BasisGates, transpile};
use skinfaxi_hal::{Backend, ExecutionResult, ValidationResult};

use crate::circuits::grover::{grover_circuit, grover_iterations, num_search_qubits};

/// Outcome of a single Grover search run.
#[derive(Debug)]
pub struct SearchRun {
    /// Size of the search space.
    pub n_items: u64,
    /// Number of qubits used.
    pub num_qubits: u32,
    /// Number of Grover iterations applied.
    pub iterations: usize,
    /// Number of shots executed.
    pub shots: u32,
    /// Measurement results.
    pub result: ExecutionResult,
}

/// Build, compile, and execute a Grover search on the given backend.
///
/// The circuit is transpiled to the backend's native gate set (inlining
/// the composite diffusers), validated, submitted, and awaited.
#[instrument(skip(backend))]
pub async fn run_search(backend: &dyn Backend, n_items: u64, shots: u32) -> Result<SearchRun> {
    if n_items < 2 {
        bail!("search space must contain at least 2 items, got {n_items}");
    }

    let num_qubits = num_search_qubits(n_items);
    let iterations = grover_iterations(n_items);

    let circuit = grover_circuit(n_items)?;
    info!(
        "Built Grover circuit: {} qubits, {} iterations, {} ops",
        num_qubits,
        iterations,
        circuit.num_ops()
    );

    let basis = BasisGates::new(backend.capabilities().gate_set.gates.iter().cloned());
    let compiled = transpile(&circuit, &basis)?;
    info!("Transpiled to {} ops", compiled.num_ops());

    match backend.validate(&compiled).await? {
        ValidationResult::Valid => {}
        ValidationResult::Invalid { reasons } => {
            bail!(
                "circuit rejected by backend '{}': {}",
                backend.name(),
                reasons.join("; ")
            );
        }
        ValidationResult::RequiresTranspilation { details } => {
            bail!(
                "circuit still needs transpilation for backend '{}': {details}",
                backend.name()
            );
        }
    }

    let job_id = backend.submit(&compiled, shots).await?;
    info!("Submitted job {}", job_id);
    let result = backend.wait(&job_id).await?;

    Ok(SearchRun {
        n_items,
        num_qubits,
        iterations,
        shots,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use skinfaxi_adapter_sim::SimulatorBackend;

    #[tokio::test]
    async fn test_run_search_returns_full_shot_count() {
        let backend = SimulatorBackend::new();
        let run = run_search(&backend, 35, 256).await.unwrap();

        assert_eq!(run.num_qubits, 6);
        assert_eq!(run.iterations, 5);
        assert_eq!(run.result.counts.total(), 256);
    }

    #[tokio::test]
    async fn test_run_search_keys_span_register() {
        let backend = SimulatorBackend::new();
        let run = run_search(&backend, 35, 64).await.unwrap();

        for (bitstring, _) in run.result.counts.iter() {
            assert_eq!(bitstring.len(), 6);
            assert!(bitstring.chars().all(|c| c == '0' || c == '1'));
        }
    }

    #[tokio::test]
    async fn test_run_search_rejects_oversized_circuit() {
        let backend = SimulatorBackend::with_max_qubits(4);
        assert!(run_search(&backend, 155, 64).await.is_err());
    }

    #[tokio::test]
    async fn test_run_search_rejects_empty_search_space() {
        let backend = SimulatorBackend::new();
        let err = run_search(&backend, 0, 64).await.unwrap_err();
        assert!(err.to_string().contains("at least 2 items"));
    }

    #[tokio::test]
    async fn test_run_search_rejects_single_item_search_space() {
        let backend = SimulatorBackend::new();
        assert!(run_search(&backend, 1, 64).await.is_err());
    }
}
