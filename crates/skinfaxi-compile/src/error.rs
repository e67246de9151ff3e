//! Error types for the compilation crate.

use skinfaxi_ir::IrError;
use thiserror::Error;

/// Errors that can occur during compilation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// Gate is not in the target basis.
    #[error("Gate '{gate}' is not supported by the target basis")]
    UnsupportedGate {
        /// Name of the unsupported gate.
        gate: String,
    },

    /// A composite gate body is inconsistent with its operands.
    #[error("Invalid composite gate '{gate}': {reason}")]
    InvalidComposite {
        /// Name of the composite gate.
        gate: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A required property is missing from the property set.
    #[error("Missing required property: {0}")]
    MissingProperty(String),

    /// An IR operation failed while rewriting the circuit.
    #[error("IR error: {0}")]
    Ir(#[from] IrError),
}

/// Result type for compilation operations.
pub type CompileResult<T> = Result<T, CompileError>;
