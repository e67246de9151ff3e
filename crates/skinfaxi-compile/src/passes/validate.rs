//! Gate-set validation against a target basis.

use skinfaxi_ir::Circuit;

use crate::error::{CompileError, CompileResult};
use crate::pass::{Pass, PassKind};
use crate::property::PropertySet;

/// Verify that every gate in the circuit is in the target basis.
///
/// Requires `basis_gates` to be set in the property set. Non-gate
/// instructions (measure, reset, barrier) are always accepted. Composite
/// gates are not expanded here; run [`FlattenComposites`] first.
///
/// [`FlattenComposites`]: crate::passes::FlattenComposites
pub struct GateSetValidation;

impl Pass for GateSetValidation {
    fn name(&self) -> &str {
        "gate_set_validation"
    }

    fn kind(&self) -> PassKind {
        PassKind::Analysis
    }

    fn run(&self, circuit: &mut Circuit, properties: &mut PropertySet) -> CompileResult<()> {
        let basis = properties
            .basis_gates
            .as_ref()
            .ok_or_else(|| CompileError::MissingProperty("basis_gates".to_string()))?;

        for instruction in circuit.instructions() {
            if let Some(gate) = instruction.as_gate() {
                if !basis.contains(gate.name()) {
                    return Err(CompileError::UnsupportedGate {
                        gate: gate.name().to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
