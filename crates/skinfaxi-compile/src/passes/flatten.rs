//! Composite gate flattening.

use skinfaxi_ir::{Circuit, GateKind, Instruction, QubitId};

use crate::error::{CompileError, CompileResult};
use crate::pass::{Pass, PassKind};
use crate::property::PropertySet;

/// Statistics written by [`FlattenComposites`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenStats {
    /// Number of composite gates inlined (including nested ones).
    pub composites_inlined: usize,
}

/// Inline composite gates into their bodies.
///
/// Each composite gate is replaced by its body instructions, with the
/// body's local qubit indices remapped onto the operands the composite
/// was applied to. Nested composites are flattened recursively, so the
/// output circuit contains only standard gates, measures, resets, and
/// barriers.
pub struct FlattenComposites;

impl FlattenComposites {
    fn inline(
        instruction: &Instruction,
        out: &mut Vec<Instruction>,
        inlined: &mut usize,
    ) -> CompileResult<()> {
        let composite = match instruction.as_gate() {
            Some(gate) => match &gate.kind {
                GateKind::Composite(composite) => composite,
                GateKind::Standard(_) => {
                    out.push(instruction.clone());
                    return Ok(());
                }
            },
            None => {
                out.push(instruction.clone());
                return Ok(());
            }
        };

        *inlined += 1;
        for inner in &composite.instructions {
            let qubits = inner
                .qubits
                .iter()
                .map(|local| {
                    instruction.qubits.get(local.0 as usize).copied().ok_or_else(|| {
                        CompileError::InvalidComposite {
                            gate: composite.name.clone(),
                            reason: format!(
                                "body references local qubit {} but the gate has {} operands",
                                local,
                                instruction.qubits.len(),
                            ),
                        }
                    })
                })
                .collect::<CompileResult<Vec<QubitId>>>()?;

            let remapped = Instruction {
                kind: inner.kind.clone(),
                qubits,
                clbits: inner.clbits.clone(),
            };
            Self::inline(&remapped, out, inlined)?;
        }

        Ok(())
    }
}

impl Pass for FlattenComposites {
    fn name(&self) -> &str {
        "flatten_composites"
    }

    fn kind(&self) -> PassKind {
        PassKind::Transformation
    }

    fn run(&self, circuit: &mut Circuit, properties: &mut PropertySet) -> CompileResult<()> {
        let mut flattened = Vec::with_capacity(circuit.num_ops());
        let mut inlined = 0;

        for instruction in circuit.instructions() {
            Self::inline(instruction, &mut flattened, &mut inlined)?;
        }

        *circuit = Circuit::from_instructions(
            circuit.name(),
            circuit.num_qubits() as u32,
            circuit.num_clbits() as u32,
            flattened,
        )?;

        properties.insert(FlattenStats {
            composites_inlined: inlined,
        });

        Ok(())
    }

    fn should_run(&self, circuit: &Circuit, _properties: &PropertySet) -> bool {
        circuit.instructions().iter().any(|instruction| {
            instruction
                .as_gate()
                .is_some_and(|gate| matches!(gate.kind, GateKind::Composite(_)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_inlines_composite() {
        let mut inner = Circuit::with_size("entangler", 2, 0);
        inner.h(QubitId(0)).unwrap();
        inner.cx(QubitId(0), QubitId(1)).unwrap();
        let gate = inner.to_gate().unwrap();

        let mut circuit = Circuit::with_size("outer", 3, 0);
        circuit.gate(gate, [QubitId(2), QubitId(0)]).unwrap();

        let mut props = PropertySet::new();
        let pass = FlattenComposites;
        assert!(pass.should_run(&circuit, &props));
        pass.run(&mut circuit, &mut props).unwrap();

        assert_eq!(circuit.num_ops(), 2);
        // Local q0 maps to operand q2, local q1 to operand q0.
        assert_eq!(circuit.instructions()[0].qubits, vec![QubitId(2)]);
        assert_eq!(circuit.instructions()[1].qubits, vec![QubitId(2), QubitId(0)]);
        assert_eq!(
            props.get::<FlattenStats>().unwrap().composites_inlined,
            1
        );
    }

    #[test]
    fn test_flatten_nested_composites() {
        let mut innermost = Circuit::with_size("core", 1, 0);
        innermost.x(QubitId(0)).unwrap();
        let core = innermost.to_gate().unwrap();

        let mut middle = Circuit::with_size("wrapper", 2, 0);
        middle.gate(core, [QubitId(1)]).unwrap();
        middle.cz(QubitId(0), QubitId(1)).unwrap();
        let wrapper = middle.to_gate().unwrap();

        let mut circuit = Circuit::with_size("outer", 2, 0);
        circuit.gate(wrapper, [QubitId(0), QubitId(1)]).unwrap();

        let mut props = PropertySet::new();
        FlattenComposites.run(&mut circuit, &mut props).unwrap();

        assert_eq!(circuit.num_ops(), 2);
        assert_eq!(circuit.instructions()[0].name(), "x");
        assert_eq!(circuit.instructions()[0].qubits, vec![QubitId(1)]);
        assert_eq!(
            props.get::<FlattenStats>().unwrap().composites_inlined,
            2
        );
    }

    #[test]
    fn test_flatten_skips_plain_circuit() {
        let circuit = Circuit::bell().unwrap();
        let props = PropertySet::new();
        assert!(!FlattenComposites.should_run(&circuit, &props));
    }
}
