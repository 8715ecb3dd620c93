// src/simulation/engine.rs
use crate::core::{QTrafficError, Result, StateVector, MAX_QUBITS};
use crate::simulation::transpile::CompiledOp;
use num_complex::Complex;
use num_traits::Zero;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Dense state-vector engine over a fixed number of qubits.
///
/// Qubit at position `i` occupies bit `n - 1 - i` of the basis index.
pub(crate) struct SimulationEngine {
    state: StateVector,
    num_qubits: usize,
}

impl SimulationEngine {
    /// Starts in |0...0>.
    pub(crate) fn init(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(QTrafficError::InvalidCircuit {
                message: "cannot initialize simulation engine with zero qubits".to_string(),
            });
        }
        if num_qubits > MAX_QUBITS {
            return Err(QTrafficError::Simulation {
                message: format!(
                    "{} qubits exceed the state vector limit of {} qubits",
                    num_qubits, MAX_QUBITS
                ),
            });
        }
        let dim = 1usize << num_qubits;

        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[0] = Complex::new(1.0, 0.0);
        Ok(Self { state: StateVector::new(amplitudes), num_qubits })
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: StateVector) -> Result<()> {
        if state.dim() != self.state.dim() {
            return Err(QTrafficError::Simulation {
                message: format!(
                    "cannot set state: provided dimension {} does not match engine dimension {}",
                    state.dim(),
                    self.state.dim()
                ),
            });
        }
        self.state = state;
        Ok(())
    }

    pub(crate) fn state(&self) -> &StateVector {
        &self.state
    }

    pub(crate) fn apply(&mut self, op: &CompiledOp) -> Result<()> {
        match op {
            CompiledOp::Single { index, matrix } => self.apply_single_qubit_gate(*index, matrix),
            CompiledOp::Two { first, second, matrix } => self.apply_two_qubit_gate(*first, *second, matrix),
        }
    }

    fn bit_position(&self, index: usize) -> Result<usize> {
        if index >= self.num_qubits {
            return Err(QTrafficError::Simulation {
                message: format!("qubit position {} out of range for {} qubits", index, self.num_qubits),
            });
        }
        Ok(self.num_qubits - 1 - index)
    }

    /// Applies a 2x2 matrix to the qubit at `index`.
    fn apply_single_qubit_gate(&mut self, index: usize, matrix: &[[Complex<f64>; 2]; 2]) -> Result<()> {
        let k = self.bit_position(index)?;
        let k_mask = 1usize << k;
        let dim = self.state.dim();
        let old = self.state.vector();
        let mut new_vec = vec![Complex::zero(); dim];

        // Pairs of basis states differing only at bit k
        for i in 0..dim / 2 {
            let i0 = insert_zero_bit(i, k);
            let i1 = i0 | k_mask;
            let psi_0 = old[i0];
            let psi_1 = old[i1];
            new_vec[i0] = matrix[0][0] * psi_0 + matrix[0][1] * psi_1;
            new_vec[i1] = matrix[1][0] * psi_0 + matrix[1][1] * psi_1;
        }

        self.state = StateVector::new(new_vec);
        Ok(())
    }

    /// Applies a 4x4 matrix in the |first, second> basis (|00>, |01>, |10>, |11>).
    fn apply_two_qubit_gate(
        &mut self,
        first: usize,
        second: usize,
        matrix: &[[Complex<f64>; 4]; 4],
    ) -> Result<()> {
        if first == second {
            return Err(QTrafficError::InvalidCircuit {
                message: "target positions for a two-qubit gate cannot be the same".to_string(),
            });
        }
        let k_first = self.bit_position(first)?;
        let k_second = self.bit_position(second)?;
        let (k_high, k_low) = (k_first.max(k_second), k_first.min(k_second));

        let dim = self.state.dim();
        let old = self.state.vector();
        let mut new_vec = vec![Complex::zero(); dim];

        for i_other in 0..dim / 4 {
            let base = insert_zero_bit(insert_zero_bit(i_other, k_low), k_high);
            let indices = [
                base,
                base | (1 << k_second),
                base | (1 << k_first),
                base | (1 << k_first) | (1 << k_second),
            ];

            let psi = indices.map(|idx| old[idx]);
            for (row, &out_idx) in indices.iter().enumerate() {
                let mut acc = Complex::zero();
                for (col, amp) in psi.iter().enumerate() {
                    acc += matrix[row][col] * *amp;
                }
                new_vec[out_idx] = acc;
            }
        }

        self.state = StateVector::new(new_vec);
        Ok(())
    }

    /// Seed derived from the current amplitudes and the shot count.
    pub(crate) fn state_seed(&self, shots: usize) -> u64 {
        let mut hasher = DefaultHasher::new();
        for c in self.state.vector() {
            c.re.to_ne_bytes().hash(&mut hasher);
            c.im.to_ne_bytes().hash(&mut hasher);
        }
        shots.hash(&mut hasher);
        hasher.finish()
    }

    /// Draws `shots` basis indices from the Born distribution.
    ///
    /// Returns the sampled full-register indices, one per shot.
    pub(crate) fn sample(&self, shots: usize, seed: u64) -> Result<Vec<usize>> {
        let weights = self.state.probabilities();
        let dist = WeightedIndex::new(&weights).map_err(|e| QTrafficError::Simulation {
            message: format!("cannot sample from state: {}", e),
        })?;
        let mut rng = StdRng::seed_from_u64(seed);
        Ok((0..shots).map(|_| dist.sample(&mut rng)).collect())
    }

    /// Bit-string of the measured positions for basis index `k`.
    pub(crate) fn bit_string(&self, k: usize, measured: &[usize]) -> String {
        measured
            .iter()
            .map(|&index| {
                let bit = (k >> (self.num_qubits - 1 - index)) & 1;
                if bit == 1 { '1' } else { '0' }
            })
            .collect()
    }
}

/// Inserts a zero bit at position `k`, shifting higher bits left.
fn insert_zero_bit(x: usize, k: usize) -> usize {
    let lower = x & ((1usize << k) - 1);
    ((x >> k) << (k + 1)) | lower
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    const TEST_TOLERANCE: f64 = 1e-9;

    fn assert_complex_vec_approx_equal(actual: &[Complex<f64>], expected: &[Complex<f64>], context: &str) {
        assert_eq!(actual.len(), expected.len(), "Vector length mismatch - {}", context);
        for i in 0..actual.len() {
            let dist_sq = (actual[i] - expected[i]).norm_sqr();
            assert!(
                dist_sq < TEST_TOLERANCE * TEST_TOLERANCE,
                "Vector mismatch at index {} - Actual: {}, Expected: {}, Context: {}",
                i,
                actual[i],
                expected[i],
                context
            );
        }
    }

    fn flip() -> [[Complex<f64>; 2]; 2] {
        [[Complex::zero(), Complex::new(1.0, 0.0)], [Complex::new(1.0, 0.0), Complex::zero()]]
    }

    #[test]
    fn insert_zero_bit_shifts_upper_bits() {
        assert_eq!(insert_zero_bit(0b11, 1), 0b101);
        assert_eq!(insert_zero_bit(0b1, 0), 0b10);
    }

    #[test]
    fn flip_on_first_qubit_sets_most_significant_bit() -> Result<()> {
        let mut engine = SimulationEngine::init(3)?;
        engine.apply(&CompiledOp::Single { index: 0, matrix: flip() })?;
        let mut expected = vec![Complex::zero(); 8];
        expected[0b100] = Complex::new(1.0, 0.0);
        assert_complex_vec_approx_equal(engine.state().vector(), &expected, "flip q0 of |000>");
        assert_eq!(engine.bit_string(0b100, &[0, 1, 2]), "100");
        Ok(())
    }

    #[test]
    fn controlled_phase_touches_only_eleven() -> Result<()> {
        let mut engine = SimulationEngine::init(3)?;
        let h = Complex::new(0.5, 0.0);
        // |0> ⊗ (|00> + |01> + |10> + |11>)/2 on qubits 1,2
        let mut amps = vec![Complex::zero(); 8];
        for a in amps.iter_mut().take(4) {
            *a = h;
        }
        engine.set_state(StateVector::new(amps))?;
        engine.apply(&CompiledOp::Two {
            first: 1,
            second: 2,
            matrix: crate::operations::controlled_phase_matrix(std::f64::consts::PI),
        })?;
        let mut expected = vec![Complex::zero(); 8];
        expected[0] = h;
        expected[1] = h;
        expected[2] = h;
        expected[3] = -h;
        assert_complex_vec_approx_equal(engine.state().vector(), &expected, "CP(pi) on q1,q2");
        Ok(())
    }

    #[test]
    fn sampling_is_reproducible_and_respects_support() -> Result<()> {
        let mut engine = SimulationEngine::init(1)?;
        engine.set_state(StateVector::new(vec![
            Complex::new(FRAC_1_SQRT_2, 0.0),
            Complex::new(FRAC_1_SQRT_2, 0.0),
        ]))?;
        let a = engine.sample(200, 7)?;
        let b = engine.sample(200, 7)?;
        assert_eq!(a, b);
        assert!(a.iter().all(|&k| k < 2));
        assert!(a.contains(&0) && a.contains(&1));
        Ok(())
    }

    #[test]
    fn zero_qubits_rejected() {
        assert!(SimulationEngine::init(0).is_err());
    }

    #[test]
    fn qubit_count_beyond_limit_rejected() {
        for n in [MAX_QUBITS + 1, 62, 64, 200] {
            assert!(
                matches!(SimulationEngine::init(n), Err(QTrafficError::Simulation { .. })),
                "{} qubits",
                n
            );
        }
    }
}
