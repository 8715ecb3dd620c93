// src/simulation/mod.rs

//! Runs a [`Circuit`] for a number of shots and collects bit-string counts.
//!
//! A run is three steps: [`transpile`](transpile::transpile) the circuit into
//! position-addressed matrices, evolve a dense state vector through them,
//! then sample the measured qubits from the Born distribution.

mod results;
pub(crate) mod engine;
pub(crate) mod transpile;

pub use results::Counts;

use crate::circuits::Circuit;
use crate::core::{Result, StateVector, DEFAULT_SHOTS};
use crate::validation::validate_state;
use engine::SimulationEngine;
use tracing::{debug, info};

/// Shot-based state-vector simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulator {
    shots: usize,
    /// Fixed PRNG seed. When unset the seed is derived from the final state.
    seed: Option<u64>,
}

impl Default for Simulator {
    fn default() -> Self {
        Self { shots: DEFAULT_SHOTS, seed: None }
    }
}

impl Simulator {
    /// Simulator with 1024 shots and a state-derived seed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shots(mut self, shots: usize) -> Self {
        self.shots = shots;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Evolves the circuit's gates and returns the state just before measurement.
    ///
    /// # Errors
    /// Transpilation errors, or `Incoherence` if the evolved state is not normalized.
    pub fn final_state(&self, circuit: &Circuit) -> Result<StateVector> {
        let compiled = transpile::transpile(circuit)?;
        let engine = evolve(&compiled)?;
        Ok(engine.state().clone())
    }

    /// Runs the circuit and returns the frequency table of measured bit-strings.
    ///
    /// # Errors
    /// * `InvalidCircuit` if the circuit has no terminal measurement.
    /// * `Incoherence` if the evolved state lost normalization.
    /// * `Simulation` if the circuit exceeds [`MAX_QUBITS`](crate::core::MAX_QUBITS) or sampling fails.
    pub fn run(&self, circuit: &Circuit) -> Result<Counts> {
        let compiled = transpile::transpile(circuit)?;
        let engine = evolve(&compiled)?;

        let seed = self.seed.unwrap_or_else(|| engine.state_seed(self.shots));
        info!(qubits = compiled.num_qubits, shots = self.shots, seed, "sampling circuit");

        let mut counts = Counts::new(self.shots);
        if self.shots == 0 {
            return Ok(counts);
        }
        for k in engine.sample(self.shots, seed)? {
            counts.record(engine.bit_string(k, &compiled.measured));
        }
        debug!(distinct_outcomes = counts.len(), "simulation finished");
        Ok(counts)
    }
}

fn evolve(compiled: &transpile::CompiledCircuit) -> Result<SimulationEngine> {
    let mut engine = SimulationEngine::init(compiled.num_qubits)?;
    for op in &compiled.ops {
        engine.apply(op)?;
    }
    validate_state(engine.state())?;
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuits::CircuitBuilder;
    use crate::core::QubitId;
    use std::f64::consts::PI;

    fn qid(id: u64) -> QubitId {
        QubitId(id)
    }

    #[test]
    fn state_seed_is_used_when_no_seed_given() -> Result<()> {
        let circuit = CircuitBuilder::new().hadamard_all(&[qid(0), qid(1)]).measure_all().build();
        let sim = Simulator::new().with_shots(256);
        assert_eq!(sim.run(&circuit)?, sim.run(&circuit)?);
        Ok(())
    }

    #[test]
    fn zero_shots_yield_empty_counts() -> Result<()> {
        let circuit = CircuitBuilder::new().hadamard_all(&[qid(0)]).measure_all().build();
        let counts = Simulator::new().with_shots(0).run(&circuit)?;
        assert!(counts.is_empty());
        assert_eq!(counts.shots(), 0);
        Ok(())
    }

    #[test]
    fn rx_pi_flips_deterministically() -> Result<()> {
        let circuit = CircuitBuilder::new()
            .rx(qid(0), PI)
            .rz(qid(1), 0.7)
            .measure_all()
            .build();
        let counts = Simulator::new().with_shots(100).with_seed(Some(1)).run(&circuit)?;
        assert_eq!(counts.get("10"), 100);
        assert_eq!(counts.len(), 1);
        Ok(())
    }
}
