// src/qaoa/mod.rs

//! QAOA-style circuit construction over a [`CostHamiltonian`].
//!
//! Each qubit stands for one intersection. The circuit is a Hadamard layer
//! followed by `layers` repetitions of a cost rotation `Rz(diagonal[i])` and
//! a mixing rotation `Rx(mixing_angle)` on every qubit, then a full
//! measurement. Controlled phases, when enabled, sit between the cost and
//! mixing rotations of each layer.
//!
//! With the default [`CouplingMode::DiagonalOnly`] the couplings of the cost
//! are never consulted, so intersections evolve independently.

use crate::circuits::{Circuit, CircuitBuilder};
use crate::core::{QTrafficError, QubitId, Result, DEFAULT_MIXING_ANGLE, DEFAULT_SHOTS};
use crate::simulation::{Counts, Simulator};
use crate::traffic::{
    create_cost_hamiltonian, create_path_cost_hamiltonian, CostHamiltonian, RoadNetwork, RouteRequest,
    TrafficSnapshot,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// How off-diagonal cost terms enter the circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouplingMode {
    /// Couplings are ignored; only the diagonal drives the rotations.
    #[default]
    DiagonalOnly,
    /// Each layer also applies a controlled phase of angle `weight` per coupling.
    /// Changes the output distribution of the path pipeline.
    PhaseCoupling,
}

/// Circuit and simulator parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QaoaConfig {
    /// Number of cost/mixing layers (`p`).
    pub layers: usize,
    /// Angle of the per-qubit `Rx` mixing rotation.
    pub mixing_angle: f64,
    /// Measurement repetitions per run.
    pub shots: usize,
    /// Sampler seed. `None` derives one from the final state.
    pub seed: Option<u64>,
    /// Whether couplings of the cost become controlled phases.
    pub coupling: CouplingMode,
}

impl Default for QaoaConfig {
    fn default() -> Self {
        Self {
            layers: 1,
            mixing_angle: DEFAULT_MIXING_ANGLE,
            shots: DEFAULT_SHOTS,
            seed: None,
            coupling: CouplingMode::DiagonalOnly,
        }
    }
}

impl QaoaConfig {
    fn simulator(&self) -> Simulator {
        Simulator::new().with_shots(self.shots).with_seed(self.seed)
    }
}

/// Builds the layered circuit for `cost`.
///
/// # Errors
/// `InvalidInput` if the cost is empty or a coupling names a missing intersection.
pub fn build_qaoa_circuit(cost: &CostHamiltonian, config: &QaoaConfig) -> Result<Circuit> {
    let n = cost.len();
    if n == 0 {
        return Err(QTrafficError::invalid_input("cost has no intersections"));
    }
    if let Some(c) = cost.couplings().iter().find(|c| c.i >= n || c.j >= n || c.i == c.j) {
        return Err(QTrafficError::invalid_input(format!(
            "coupling ({}, {}) does not join two distinct intersections of {}",
            c.i, c.j, n
        )));
    }

    let qubits: Vec<QubitId> = (0..n).map(QubitId::for_intersection).collect();
    let mut builder = CircuitBuilder::new().hadamard_all(&qubits);

    for _ in 0..config.layers {
        for (q, theta) in qubits.iter().zip(cost.diagonal()) {
            builder = builder.rz(*q, *theta);
        }
        if config.coupling == CouplingMode::PhaseCoupling {
            for c in cost.couplings() {
                builder = builder.controlled_phase(qubits[c.i], qubits[c.j], c.weight);
            }
        }
        for q in &qubits {
            builder = builder.rx(*q, config.mixing_angle);
        }
    }

    let circuit = builder.measure_all().build();
    debug!(qubits = n, layers = config.layers, gates = circuit.len(), coupling = ?config.coupling, "built QAOA circuit");
    debug!("gate listing:\n{}", circuit);
    Ok(circuit)
}

/// Runs a cost through circuit construction and simulation.
pub fn optimize(cost: &CostHamiltonian, config: &QaoaConfig) -> Result<Counts> {
    let circuit = build_qaoa_circuit(cost, config)?;
    let counts = config.simulator().run(&circuit)?;
    info!(outcomes = counts.len(), shots = counts.shots(), "QAOA run complete");
    Ok(counts)
}

/// Signal-timing variant: cost from [`create_cost_hamiltonian`].
pub fn qaoa_traffic_optimization(snapshot: &TrafficSnapshot, config: &QaoaConfig) -> Result<Counts> {
    let cost = create_cost_hamiltonian(snapshot)?;
    optimize(&cost, config)
}

/// Path variant: cost from [`create_path_cost_hamiltonian`].
pub fn qaoa_path_optimization(
    snapshot: &TrafficSnapshot,
    network: &RoadNetwork,
    route: RouteRequest,
    vehicle_speed_kmh: f64,
    config: &QaoaConfig,
) -> Result<Counts> {
    let cost = create_path_cost_hamiltonian(snapshot, network, route, vehicle_speed_kmh)?;
    optimize(&cost, config)
}
