// src/core/state.rs

use num_complex::Complex;

/// Dense state vector over `n` qubits: `2^n` complex amplitudes.
///
/// Basis index `k` encodes qubit `i` at bit position `n - 1 - i`, so the
/// binary rendering of `k` (width `n`) lists qubit 0 first.
#[derive(Debug, Clone, PartialEq)] // No Eq for floating-point amplitudes
pub struct StateVector {
    amplitudes: Vec<Complex<f64>>,
}

impl StateVector {
    /// Wraps an amplitude vector. Validation happens in the simulator.
    pub(crate) fn new(amplitudes: Vec<Complex<f64>>) -> Self {
        Self { amplitudes }
    }

    /// Provides read-only access to the amplitudes.
    pub fn vector(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Number of basis states represented.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Born-rule probability of every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|c| c.norm_sqr()).collect()
    }
}
