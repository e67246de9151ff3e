//! Built-in compilation passes.

pub mod flatten;
pub mod validate;

pub use flatten::{FlattenComposites, FlattenStats};
pub use validate::GateSetValidation;
