//! Integration tests for the demo suite.
//!
//! These tests verify the end-to-end search workflow: circuit generation,
//! transpilation, execution on the local simulator, and result handling.

use skinfaxi_adapter_sim::SimulatorBackend;
use skinfaxi_compile::{BasisGates, transpile};
use skinfaxi_demos::circuits::grover::{
    diffuser, grover_circuit, grover_iterations, num_search_qubits,
};
use skinfaxi_demos::runners::run_search;
use skinfaxi_hal::Backend;
use skinfaxi_ir::GateKind;

/// Derived circuit sizes for the two showcase search spaces.
#[test]
fn test_showcase_search_space_sizing() {
    assert_eq!(num_search_qubits(35), 6);
    assert_eq!(grover_iterations(35), 5);
    assert_eq!(num_search_qubits(155), 8);
    assert_eq!(grover_iterations(155), 12);
}

/// Grover circuit generation across a range of search-space sizes.
#[test]
fn test_grover_circuit_scaling() {
    for n_items in [4u64, 10, 35, 100, 155] {
        let circuit = grover_circuit(n_items).unwrap();
        let n_qubits = num_search_qubits(n_items) as usize;
        let iterations = grover_iterations(n_items);

        assert_eq!(circuit.num_qubits(), n_qubits);
        assert_eq!(circuit.num_clbits(), n_qubits);
        // H layer, (oracle + diffuser) per iteration, one measure.
        assert_eq!(circuit.num_ops(), n_qubits + 2 * iterations + 1);
    }
}

/// Each iteration embeds the diffuser as exactly one composite gate.
#[test]
fn test_diffuser_embedding() {
    let circuit = grover_circuit(35).unwrap();
    let composites = circuit
        .instructions()
        .iter()
        .filter(|inst| {
            inst.as_gate()
                .is_some_and(|g| matches!(g.kind, GateKind::Composite(_)))
        })
        .count();
    assert_eq!(composites, grover_iterations(35));

    // The standalone diffuser is seven layers deep.
    assert_eq!(diffuser(6).unwrap().depth(), 7);
}

/// Transpilation inlines all composites before the simulator sees them.
#[test]
fn test_transpile_removes_composites() {
    let circuit = grover_circuit(35).unwrap();
    let compiled = transpile(&circuit, &BasisGates::simulator()).unwrap();

    assert!(compiled.instructions().iter().all(|inst| {
        inst.as_gate()
            .is_none_or(|g| matches!(g.kind, GateKind::Standard(_)))
    }));
    assert!(compiled.num_ops() > circuit.num_ops());
}

/// End-to-end search on the simulator: shot accounting and key shape.
#[tokio::test]
async fn test_search_end_to_end() {
    let backend = SimulatorBackend::new();
    let run = run_search(&backend, 35, 1024).await.unwrap();

    assert_eq!(run.shots, 1024);
    assert_eq!(run.result.counts.total(), 1024);
    for (bitstring, _) in run.result.counts.iter() {
        assert_eq!(bitstring.len(), 6);
        assert!(bitstring.chars().all(|c| c == '0' || c == '1'));
    }
}

/// Two invocations produce independent results.
#[tokio::test]
async fn test_separate_runs_keep_separate_results() {
    let backend = SimulatorBackend::new();

    let small = run_search(&backend, 35, 512).await.unwrap();
    let large = run_search(&backend, 155, 512).await.unwrap();

    assert_eq!(small.num_qubits, 6);
    assert_eq!(large.num_qubits, 8);
    assert_eq!(small.result.counts.total(), 512);
    assert_eq!(large.result.counts.total(), 512);

    // Key widths differ between the two runs.
    if let Some((bitstring, _)) = small.result.counts.most_frequent() {
        assert_eq!(bitstring.len(), 6);
    }
    if let Some((bitstring, _)) = large.result.counts.most_frequent() {
        assert_eq!(bitstring.len(), 8);
    }
}
