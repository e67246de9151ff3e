//! Property tests for composite flattening and transpilation.

use proptest::prelude::*;
use skinfaxi_compile::{BasisGates, transpile};
use skinfaxi_ir::{Circuit, GateKind, QubitId};

/// A gate operation that can be applied to a circuit.
#[derive(Debug, Clone)]
enum GateOp {
    H(u32),
    X(u32),
    Z(u32),
    Cx(u32, u32),
    Cz(u32, u32),
}

impl GateOp {
    fn apply(&self, circuit: &mut Circuit) {
        match *self {
            GateOp::H(q) => circuit.h(QubitId(q)),
            GateOp::X(q) => circuit.x(QubitId(q)),
            GateOp::Z(q) => circuit.z(QubitId(q)),
            GateOp::Cx(c, t) => circuit.cx(QubitId(c), QubitId(t)),
            GateOp::Cz(c, t) => circuit.cz(QubitId(c), QubitId(t)),
        }
        .unwrap();
    }
}

fn arb_gate_op(num_qubits: u32) -> BoxedStrategy<GateOp> {
    let single = prop_oneof![
        (0..num_qubits).prop_map(GateOp::H),
        (0..num_qubits).prop_map(GateOp::X),
        (0..num_qubits).prop_map(GateOp::Z),
    ];

    if num_qubits < 2 {
        return single.boxed();
    }

    let pair = (0..num_qubits, 0..num_qubits)
        .prop_filter("control and target must differ", |(c, t)| c != t);
    prop_oneof![
        single,
        pair.clone().prop_map(|(c, t)| GateOp::Cx(c, t)),
        pair.prop_map(|(c, t)| GateOp::Cz(c, t)),
    ]
    .boxed()
}

/// Generate a gate-only block with 1-4 qubits and 1-8 operations.
fn arb_gate_block() -> impl Strategy<Value = Circuit> {
    (1_u32..=4).prop_flat_map(|num_qubits| {
        prop::collection::vec(arb_gate_op(num_qubits), 1..=8).prop_map(move |ops| {
            let mut block = Circuit::with_size("block", num_qubits, 0);
            for op in &ops {
                op.apply(&mut block);
            }
            block
        })
    })
}

/// Embed a block as a single composite gate over the full register.
fn embed(block: &Circuit) -> Circuit {
    let num_qubits = block.num_qubits() as u32;
    let gate = block.to_gate().unwrap();
    let mut circuit = Circuit::with_size("driver", num_qubits, 0);
    circuit.gate(gate, (0..num_qubits).map(QubitId)).unwrap();
    circuit
}

proptest! {
    #[test]
    fn transpile_leaves_only_standard_gates(block in arb_gate_block()) {
        let circuit = embed(&block);
        let flat = transpile(&circuit, &BasisGates::simulator()).unwrap();

        prop_assert_eq!(flat.num_ops(), block.num_ops());
        for instruction in flat.instructions() {
            let standard = instruction
                .as_gate()
                .is_some_and(|gate| matches!(gate.kind, GateKind::Standard(_)));
            prop_assert!(standard, "unexpected non-standard op: {}", instruction.name());
        }
    }

    #[test]
    fn flatten_on_identity_mapping_recovers_body(block in arb_gate_block()) {
        let circuit = embed(&block);
        let flat = transpile(&circuit, &BasisGates::simulator()).unwrap();

        prop_assert_eq!(flat.instructions(), block.instructions());
    }

    #[test]
    fn nested_composites_flatten_to_same_body(block in arb_gate_block()) {
        let num_qubits = block.num_qubits() as u32;
        let wrapper = embed(&block).to_gate().unwrap();

        let mut circuit = Circuit::with_size("driver", num_qubits, 0);
        circuit.gate(wrapper, (0..num_qubits).map(QubitId)).unwrap();

        let flat = transpile(&circuit, &BasisGates::simulator()).unwrap();
        prop_assert_eq!(flat.instructions(), block.instructions());
    }
}
