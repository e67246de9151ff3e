//! Grover's search algorithm circuit generator.
//!
//! Grover's algorithm finds a marked item in an unstructured search space
//! with O(sqrt(N)) queries, compared to O(N) classically. The search space
//! is sized from an item count N: the circuit uses ceil(log2(N)) qubits
//! and floor(sqrt(N)) amplification iterations.

use skinfaxi_ir::{Circuit, IrError, IrResult, QubitId};

/// Number of qubits needed to index a search space of `n_items` items.
///
/// Computes ceil(log2(n_items)). `n_items` must be at least 2.
pub fn num_search_qubits(n_items: u64) -> u32 {
    64 - (n_items - 1).leading_zeros()
}

/// Number of Grover iterations for a search space of `n_items` items.
///
/// Computes floor(sqrt(n_items)).
pub fn grover_iterations(n_items: u64) -> usize {
    n_items.isqrt() as usize
}

/// Append the phase oracle to the circuit.
///
/// The oracle marks states by a controlled-Z between the first and last
/// qubits. On a 1-qubit circuit this degenerates to CZ(q0, q0), which the
/// circuit builder rejects as a duplicate operand.
pub fn apply_oracle(circuit: &mut Circuit, n_qubits: u32) -> IrResult<()> {
    circuit.cz(QubitId(0), QubitId(n_qubits - 1))?;
    Ok(())
}

/// Build the Grover diffuser (2|s⟩⟨s| - I) as a standalone circuit.
///
/// The diffuser is seven layers deep:
/// 1. H on all qubits
/// 2. X on all qubits
/// 3. H on the last qubit
/// 4. Multi-controlled X, all other qubits controlling the last
/// 5. H on the last qubit
/// 6. X on all qubits
/// 7. H on all qubits
///
/// Convert it with [`Circuit::to_gate`] to embed it as a single
/// composite operation per Grover iteration.
pub fn diffuser(n_qubits: u32) -> IrResult<Circuit> {
    let mut circuit = Circuit::with_size("diffuser", n_qubits, 0);
    let last = QubitId(n_qubits - 1);

    for i in 0..n_qubits {
        circuit.h(QubitId(i))?;
    }
    for i in 0..n_qubits {
        circuit.x(QubitId(i))?;
    }

    // MCZ on all qubits, expressed as H · MCX · H on the last qubit.
    circuit.h(last)?;
    let controls: Vec<_> = (0..n_qubits - 1).map(QubitId).collect();
    circuit.mcx(&controls, last)?;
    circuit.h(last)?;

    for i in 0..n_qubits {
        circuit.x(QubitId(i))?;
    }
    for i in 0..n_qubits {
        circuit.h(QubitId(i))?;
    }

    Ok(circuit)
}

/// Generate a Grover search circuit for a search space of `n_items` items.
///
/// The circuit prepares a uniform superposition, then applies
/// floor(sqrt(n_items)) iterations of oracle followed by diffuser, and
/// measures all qubits. The diffuser appears as one composite gate per
/// iteration.
pub fn grover_circuit(n_items: u64) -> IrResult<Circuit> {
    if n_items < 2 {
        return Err(IrError::InvalidCircuit(format!(
            "Grover search requires at least 2 items, got {n_items}"
        )));
    }

    let n_qubits = num_search_qubits(n_items);
    let iterations = grover_iterations(n_items);

    let mut circuit = Circuit::with_size("grover", n_qubits, 0);

    // Uniform superposition over all states
    for i in 0..n_qubits {
        circuit.h(QubitId(i))?;
    }

    let diffuser_gate = diffuser(n_qubits)?.to_gate()?;
    let all_qubits: Vec<_> = (0..n_qubits).map(QubitId).collect();

    for _ in 0..iterations {
        apply_oracle(&mut circuit, n_qubits)?;
        circuit.gate(diffuser_gate.clone(), all_qubits.iter().copied())?;
    }

    circuit.measure_all()?;
    Ok(circuit)
}
