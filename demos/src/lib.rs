// Allow dead code: demo library exposes helpers that may not all be used in every binary
#![allow(dead_code)]

//! Skinfaxi Demo Suite
//!
//! This crate demonstrates Skinfaxi's quantum search capabilities:
//!
//! - **Grover's Search**: Amplitude amplification over an unstructured
//!   search space, with the diffuser embedded as a composite gate
//! - **Histogram Rendering**: Terminal histograms of measurement counts
//!
//! # Running a Search
//!
//! ```ignore
//! use skinfaxi_adapter_sim::SimulatorBackend;
//! use skinfaxi_demos::runners::run_search;
//!
//! let backend = SimulatorBackend::new();
//! let run = run_search(&backend, 35, 1024).await?;
//! println!("{} qubits, {} iterations", run.num_qubits, run.iterations);
//! ```

pub mod circuits;
pub mod histogram;
pub mod runners;

use console::style;

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}
