//! Backend capability introspection.
//!
//! These types describe what a backend can do: qubit count, supported
//! gates, and shot limits. Compilers use them to pick a target basis;
//! callers use them to size circuits before submission.

use serde::{Deserialize, Serialize};

/// Capabilities of a quantum backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    /// Name of the backend.
    pub name: String,
    /// Number of qubits available.
    pub num_qubits: u32,
    /// Supported gate set (OpenQASM-style lowercase names).
    pub gate_set: GateSet,
    /// Maximum number of shots per job.
    pub max_shots: u32,
    /// Whether this is a simulator (`true`) vs real hardware (`false`).
    pub is_simulator: bool,
    /// Additional capability flags, e.g. `"statevector"`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl Capabilities {
    /// Create capabilities for a statevector simulator.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            name: "simulator".into(),
            num_qubits,
            gate_set: GateSet::universal(),
            max_shots: 100_000,
            is_simulator: true,
            features: vec!["statevector".into()],
        }
    }
}

/// The set of gate names a backend executes natively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateSet {
    /// Supported gate names.
    pub gates: Vec<String>,
}

impl GateSet {
    /// Create a gate set from a list of names.
    pub fn new(gates: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            gates: gates.into_iter().map(Into::into).collect(),
        }
    }

    /// The full gate vocabulary of the statevector simulator.
    pub fn universal() -> Self {
        Self::new([
            "id", "x", "y", "z", "h", "s", "sdg", "t", "tdg", "p", "cx", "cy", "cz", "swap",
            "cp", "ccx", "mcx",
        ])
    }

    /// Check whether a gate name is supported.
    pub fn contains(&self, name: &str) -> bool {
        self.gates.iter().any(|g| g == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulator_capabilities() {
        let caps = Capabilities::simulator(20);
        assert!(caps.is_simulator);
        assert_eq!(caps.num_qubits, 20);
        assert_eq!(caps.max_shots, 100_000);
        assert!(caps.features.contains(&"statevector".to_string()));
    }

    #[test]
    fn test_universal_gate_set() {
        let gates = GateSet::universal();
        assert!(gates.contains("h"));
        assert!(gates.contains("cz"));
        assert!(gates.contains("mcx"));
        assert!(!gates.contains("rx"));
    }
}
