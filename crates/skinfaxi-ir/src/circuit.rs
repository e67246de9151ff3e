//! High-level circuit builder API.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::{CompositeGate, Gate, StandardGate};
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{ClbitId, QubitId};

/// A quantum circuit.
///
/// A circuit is an ordered sequence of instructions over a fixed set of
/// qubits and classical bits, constructed by appending. Every append is
/// validated: gate arity, operand bounds, and duplicate operands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits in the circuit.
    num_qubits: u32,
    /// Number of classical bits in the circuit.
    num_clbits: u32,
    /// The instruction sequence, in application order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            num_qubits: 0,
            num_clbits: 0,
            instructions: vec![],
        }
    }

    /// Create a circuit with a given number of qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            num_clbits,
            instructions: vec![],
        }
    }

    /// Rebuild a circuit from an instruction sequence, validating each entry.
    pub fn from_instructions(
        name: impl Into<String>,
        num_qubits: u32,
        num_clbits: u32,
        instructions: impl IntoIterator<Item = Instruction>,
    ) -> IrResult<Self> {
        let mut circuit = Self::with_size(name, num_qubits, num_clbits);
        for instruction in instructions {
            circuit.push(instruction)?;
        }
        Ok(circuit)
    }

    /// Add a single qubit to the circuit.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId(self.num_qubits);
        self.num_qubits += 1;
        id
    }

    /// Add a single classical bit to the circuit.
    pub fn add_clbit(&mut self) -> ClbitId {
        let id = ClbitId(self.num_clbits);
        self.num_clbits += 1;
        id
    }

    /// Append an instruction, validating operands.
    pub fn push(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        let gate_name = || Some(instruction.name().to_string());

        if let InstructionKind::Gate(gate) = &instruction.kind {
            let expected = gate.num_qubits();
            let got = instruction.qubits.len() as u32;
            if expected != got {
                return Err(IrError::QubitCountMismatch {
                    gate_name: gate.name().to_string(),
                    expected,
                    got,
                });
            }
        }

        for qubit in &instruction.qubits {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitNotFound {
                    qubit: *qubit,
                    gate_name: gate_name(),
                });
            }
        }
        for (i, qubit) in instruction.qubits.iter().enumerate() {
            if instruction.qubits[..i].contains(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit: *qubit,
                    gate_name: gate_name(),
                });
            }
        }
        for clbit in &instruction.clbits {
            if clbit.0 >= self.num_clbits {
                return Err(IrError::ClbitNotFound {
                    clbit: *clbit,
                    gate_name: gate_name(),
                });
            }
        }

        self.instructions.push(instruction);
        Ok(self)
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(StandardGate::H, qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(StandardGate::X, qubit))
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(StandardGate::Y, qubit))
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(StandardGate::Z, qubit))
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(StandardGate::S, qubit))
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(StandardGate::Sdg, qubit))
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(StandardGate::T, qubit))
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(StandardGate::Tdg, qubit))
    }

    /// Apply phase gate.
    pub fn p(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(StandardGate::P(theta), qubit))
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(StandardGate::CX, control, target))
    }

    /// Apply CY gate.
    pub fn cy(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(StandardGate::CY, control, target))
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(StandardGate::CZ, control, target))
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(StandardGate::Swap, q1, q2))
    }

    /// Apply controlled-phase gate.
    pub fn cp(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::two_qubit_gate(
            StandardGate::CP(theta),
            control,
            target,
        ))
    }

    // =========================================================================
    // Multi-qubit gates
    // =========================================================================

    /// Apply Toffoli (CCX) gate.
    pub fn ccx(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::gate(StandardGate::CCX, [c1, c2, target]))
    }

    /// Apply multi-controlled X gate.
    ///
    /// With an empty control list this degenerates to a plain X on the target.
    pub fn mcx(&mut self, controls: &[QubitId], target: QubitId) -> IrResult<&mut Self> {
        let mut qubits = controls.to_vec();
        qubits.push(target);
        self.push(Instruction::gate(
            StandardGate::Mcx(controls.len() as u32),
            qubits,
        ))
    }

    // =========================================================================
    // Other operations
    // =========================================================================

    /// Apply a gate (standard or composite).
    pub fn gate(
        &mut self,
        gate: impl Into<Gate>,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::gate(gate, qubits))
    }

    /// Measure a qubit to a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.push(Instruction::measure(qubit, clbit))
    }

    /// Measure all qubits to corresponding classical bits.
    ///
    /// Extends the classical register if it is smaller than the quantum one.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        while self.num_clbits < self.num_qubits {
            self.add_clbit();
        }

        let qubits = (0..self.num_qubits).map(QubitId);
        let clbits = (0..self.num_qubits).map(ClbitId);
        let instruction = Instruction::measure_all(qubits, clbits)?;
        self.push(instruction)
    }

    /// Reset a qubit to |0⟩.
    pub fn reset(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::reset(qubit))
    }

    /// Apply a barrier to specified qubits.
    pub fn barrier(&mut self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<&mut Self> {
        self.push(Instruction::barrier(qubits))
    }

    /// Apply a barrier to all qubits.
    pub fn barrier_all(&mut self) -> IrResult<&mut Self> {
        let qubits: Vec<_> = (0..self.num_qubits).map(QubitId).collect();
        self.push(Instruction::barrier(qubits))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.num_clbits as usize
    }

    /// Get the number of instructions.
    pub fn num_ops(&self) -> usize {
        self.instructions.len()
    }

    /// Get the instruction sequence.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Get the circuit depth.
    ///
    /// Each instruction occupies one layer on every wire it touches;
    /// a composite gate counts as a single layer.
    pub fn depth(&self) -> usize {
        let mut qubit_depth = vec![0usize; self.num_qubits as usize];
        let mut clbit_depth = vec![0usize; self.num_clbits as usize];
        let mut max_depth = 0;

        for instruction in &self.instructions {
            let layer = instruction
                .qubits
                .iter()
                .map(|q| qubit_depth[q.0 as usize])
                .chain(instruction.clbits.iter().map(|c| clbit_depth[c.0 as usize]))
                .max()
                .unwrap_or(0)
                + 1;

            for qubit in &instruction.qubits {
                qubit_depth[qubit.0 as usize] = layer;
            }
            for clbit in &instruction.clbits {
                clbit_depth[clbit.0 as usize] = layer;
            }
            max_depth = max_depth.max(layer);
        }

        max_depth
    }

    /// Convert this circuit into a composite gate.
    ///
    /// Only gate instructions are allowed in the body; measures, resets,
    /// and barriers cannot be embedded in a gate.
    pub fn to_gate(&self) -> IrResult<CompositeGate> {
        for instruction in &self.instructions {
            if !instruction.is_gate() {
                return Err(IrError::InvalidCircuit(format!(
                    "cannot convert circuit '{}' to a gate: contains {}",
                    self.name,
                    instruction.name(),
                )));
            }
        }
        Ok(CompositeGate::new(
            self.name.clone(),
            self.num_qubits,
            self.instructions.clone(),
        ))
    }

    // =========================================================================
    // Pre-built circuits
    // =========================================================================

    /// Create a Bell state circuit.
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::with_size("bell", 2, 2);
        circuit
            .h(QubitId(0))?
            .cx(QubitId(0), QubitId(1))?
            .measure(QubitId(0), ClbitId(0))?
            .measure(QubitId(1), ClbitId(1))?;
        Ok(circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::GateKind;

    #[test]
    fn test_new_circuit() {
        let circuit = Circuit::new("test");
        assert_eq!(circuit.name(), "test");
        assert_eq!(circuit.num_qubits(), 0);
        assert_eq!(circuit.num_clbits(), 0);
        assert_eq!(circuit.num_ops(), 0);
    }

    #[test]
    fn test_circuit_with_size() {
        let circuit = Circuit::with_size("test", 3, 2);
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 2);
    }

    #[test]
    fn test_bell_state() {
        let circuit = Circuit::bell().unwrap();
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.num_clbits(), 2);
        assert_eq!(circuit.depth(), 3); // H, CX, parallel measures
    }

    #[test]
    fn test_fluent_api() {
        let mut circuit = Circuit::with_size("test", 2, 2);
        circuit
            .h(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .measure(QubitId(0), ClbitId(0))
            .unwrap()
            .measure(QubitId(1), ClbitId(1))
            .unwrap();

        assert_eq!(circuit.depth(), 3); // H, CX, parallel measures
        assert_eq!(circuit.num_ops(), 4);
    }

    #[test]
    fn test_qubit_out_of_range() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        let result = circuit.h(QubitId(2));
        assert!(matches!(result, Err(IrError::QubitNotFound { .. })));
    }

    #[test]
    fn test_duplicate_qubit_rejected() {
        // A two-qubit gate on a single wire is invalid: CZ(q0, q0).
        let mut circuit = Circuit::with_size("test", 1, 0);
        let result = circuit.cz(QubitId(0), QubitId(0));
        assert!(matches!(result, Err(IrError::DuplicateQubit { .. })));
    }

    #[test]
    fn test_arity_mismatch_rejected() {
        let mut circuit = Circuit::with_size("test", 3, 0);
        let result = circuit.push(Instruction::gate(StandardGate::CX, [QubitId(0)]));
        assert!(matches!(
            result,
            Err(IrError::QubitCountMismatch { expected: 2, got: 1, .. })
        ));
    }

    #[test]
    fn test_measure_all_extends_clbits() {
        let mut circuit = Circuit::with_size("test", 3, 0);
        circuit.h(QubitId(0)).unwrap();
        circuit.measure_all().unwrap();

        assert_eq!(circuit.num_clbits(), 3);
        let measure = circuit.instructions().last().unwrap();
        assert!(measure.is_measure());
        assert_eq!(measure.qubits.len(), 3);
        assert_eq!(measure.clbits.len(), 3);
    }

    #[test]
    fn test_mcx_builder() {
        let mut circuit = Circuit::with_size("test", 4, 0);
        circuit
            .mcx(&[QubitId(0), QubitId(1), QubitId(2)], QubitId(3))
            .unwrap();

        let inst = &circuit.instructions()[0];
        assert_eq!(inst.name(), "mcx");
        assert_eq!(inst.qubits.len(), 4);
    }

    #[test]
    fn test_mcx_zero_controls() {
        let mut circuit = Circuit::with_size("test", 1, 0);
        circuit.mcx(&[], QubitId(0)).unwrap();
        assert_eq!(circuit.num_ops(), 1);
    }

    #[test]
    fn test_to_gate() {
        let mut inner = Circuit::with_size("entangler", 2, 0);
        inner.h(QubitId(0)).unwrap();
        inner.cx(QubitId(0), QubitId(1)).unwrap();

        let gate = inner.to_gate().unwrap();
        assert_eq!(gate.name, "entangler");
        assert_eq!(gate.num_qubits, 2);
        assert_eq!(gate.instructions.len(), 2);

        // Embed into a larger circuit on non-contiguous qubits.
        let mut outer = Circuit::with_size("outer", 3, 0);
        outer.gate(gate, [QubitId(0), QubitId(2)]).unwrap();
        assert_eq!(outer.num_ops(), 1);
        assert_eq!(outer.depth(), 1);
    }

    #[test]
    fn test_to_gate_rejects_measure() {
        let circuit = Circuit::bell().unwrap();
        assert!(matches!(
            circuit.to_gate(),
            Err(IrError::InvalidCircuit(_))
        ));
    }

    #[test]
    fn test_composite_counts_as_one_layer() {
        let mut inner = Circuit::with_size("deep", 1, 0);
        for _ in 0..5 {
            inner.h(QubitId(0)).unwrap();
        }
        let gate = inner.to_gate().unwrap();

        let mut outer = Circuit::with_size("outer", 1, 0);
        outer.gate(gate, [QubitId(0)]).unwrap();
        assert_eq!(outer.depth(), 1);
    }

    #[test]
    fn test_from_instructions_validates() {
        let good = Circuit::from_instructions(
            "rebuilt",
            2,
            0,
            vec![Instruction::single_qubit_gate(StandardGate::H, QubitId(0))],
        );
        assert!(good.is_ok());

        let bad = Circuit::from_instructions(
            "rebuilt",
            1,
            0,
            vec![Instruction::single_qubit_gate(StandardGate::H, QubitId(1))],
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let circuit = Circuit::bell().unwrap();
        let json = serde_json::to_string(&circuit).unwrap();
        let restored: Circuit = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.name(), "bell");
        assert_eq!(restored.num_ops(), circuit.num_ops());
        assert_eq!(restored.instructions(), circuit.instructions());
    }

    #[test]
    fn test_composite_gate_matches_kind() {
        let mut inner = Circuit::with_size("body", 1, 0);
        inner.x(QubitId(0)).unwrap();
        let gate = inner.to_gate().unwrap();

        let mut outer = Circuit::with_size("outer", 1, 0);
        outer.gate(gate, [QubitId(0)]).unwrap();

        let embedded = outer.instructions()[0].as_gate().unwrap();
        assert!(matches!(embedded.kind, GateKind::Composite(_)));
    }
}
