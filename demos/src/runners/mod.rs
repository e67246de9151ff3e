//! Demo runners for executing quantum algorithms.

pub mod search;

pub use search::{SearchRun, run_search};
