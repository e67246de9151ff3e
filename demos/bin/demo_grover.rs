//! Grover's Search Algorithm Demo
//!
//! Builds Grover circuits for one or more search-space sizes, runs them on
//! the local statevector simulator, and renders a histogram of outcomes.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use skinfaxi_adapter_sim::SimulatorBackend;
use skinfaxi_demos::circuits::grover::{grover_iterations, num_search_qubits};
use skinfaxi_demos::runners::run_search;
use skinfaxi_demos::{
    histogram, print_header, print_info, print_result, print_section, print_success,
};
use skinfaxi_hal::{Backend, BackendConfig, BackendFactory};

#[derive(Parser, Debug)]
#[command(name = "demo-grover")]
#[command(about = "Demonstrate Grover's search algorithm")]
struct Args {
    /// Search space sizes to run (number of items, at least 2)
    #[arg(
        short = 'N',
        long = "items",
        default_values_t = [35u64, 155],
        value_parser = clap::value_parser!(u64).range(2..)
    )]
    items: Vec<u64>,

    /// Number of shots per run
    #[arg(short, long, default_value = "1024")]
    shots: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    print_header("Grover's Search Algorithm Demo");

    let backend = SimulatorBackend::from_config(BackendConfig::new("simulator"))?;
    print_result("Backend", backend.name());
    print_result("Max qubits", backend.capabilities().num_qubits);

    for &n_items in &args.items {
        print_section(&format!("Searching {n_items} items"));
        print_result("Qubits", num_search_qubits(n_items));
        print_result("Grover iterations", grover_iterations(n_items));
        print_result("Shots", args.shots);

        let run = run_search(&backend, n_items, args.shots).await?;

        if let Some((bitstring, count)) = run.result.counts.most_frequent() {
            print_result(
                "Most frequent outcome",
                format!("|{bitstring}⟩ ({count} shots)"),
            );
        }
        if let Some(millis) = run.result.execution_time_ms {
            print_result("Simulation time", format!("{millis} ms"));
        }

        println!();
        histogram::print_histogram(&run.result.counts);
    }

    println!();
    print_success("Grover demo complete!");
    print_info("Set RUST_LOG=debug to see per-pass compilation logs");
    Ok(())
}
