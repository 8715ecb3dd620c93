// src/lib.rs

//! `qtraffic` - QAOA-style traffic suggestions on a state-vector simulator
//!
//! Per-intersection traffic data is turned into a cost, the cost
//! parameterizes a layered rotation circuit, the circuit is sampled for a
//! number of shots, and the most frequent bit-string is decoded into signal
//! timings or a vehicle path.

pub mod core;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod validation;
pub mod traffic;
pub mod qaoa;
pub mod scenario;
pub mod logging;

// Re-export the most common types for easier top-level use
pub use crate::core::{QTrafficError, QubitId, Result, StateVector};
pub use operations::Gate;
pub use circuits::{Circuit, CircuitBuilder};
pub use simulation::{Counts, Simulator};
pub use validation::{check_finite, check_normalization, validate_state};
pub use traffic::{
    calculate_travel_time, create_cost_hamiltonian, create_path_cost_hamiltonian, decode_path, decode_signals,
    CostHamiltonian, Coupling, RoadNetwork, RouteRequest, TrafficSnapshot,
};
pub use qaoa::{build_qaoa_circuit, qaoa_path_optimization, qaoa_traffic_optimization, CouplingMode, QaoaConfig};
pub use scenario::{PathOutcome, PathScenario, SignalOutcome, SignalScenario};

// Example 1: Signal timings for the bundled sample
/// ```
/// use qtraffic::{SignalScenario, QTrafficError};
///
/// let mut scenario = SignalScenario::default();
/// scenario.qaoa.seed = Some(42);
///
/// let outcome = scenario.run()?;
/// println!("QAOA Optimization Result: {}", outcome.counts);
/// println!("Optimized Signal Timings: {:?}", outcome.timings);
///
/// assert_eq!(outcome.counts.total(), 1024);
/// assert_eq!(outcome.timings.len(), 3);
/// assert!(outcome.timings.iter().all(|t| *t == 20 || *t == 30));
/// # Ok::<(), QTrafficError>(())
/// ```
#[doc(hidden)]
const _: () = ();

// Example 2: Hand-built circuit
/// ```
/// use qtraffic::{CircuitBuilder, QubitId, Simulator};
///
/// let q0 = QubitId(0);
/// let q1 = QubitId(1);
/// let circuit = CircuitBuilder::new()
///     .hadamard_all(&[q0])
///     .rx(q1, std::f64::consts::PI)
///     .measure_all()
///     .build();
/// println!("{}", circuit);
/// assert!(circuit.to_string().contains("Rx(3.1416) q1"));
///
/// let counts = Simulator::new().with_shots(500).with_seed(Some(7)).run(&circuit).unwrap();
/// // q1 is always 1, q0 is a fair coin
/// assert_eq!(counts.get("01") + counts.get("11"), 500);
/// assert_eq!(counts.get("00") + counts.get("10"), 0);
/// ```
#[doc(hidden)]
const _: () = ();
