// src/operations/mod.rs

//! Gates that make up a QAOA circuit.
//!
//! The set is intentionally small: the cost and mixing layers only need
//! single-qubit rotations, the initial superposition needs a Hadamard, and
//! the optional coupling layer needs a controlled phase.

use crate::core::QubitId;
use num_complex::Complex;
use num_traits::{One, Zero};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// A single step in a circuit.
#[derive(Debug, Clone, PartialEq)] // f64 angles, so no Eq
pub enum Gate {
    /// Hadamard: maps |0> to an equal superposition of |0> and |1>.
    Hadamard {
        /// Qubit being transformed.
        target: QubitId,
    },

    /// Rotation about Z, `diag(e^{-iθ/2}, e^{iθ/2})`.
    ///
    /// Carries the per-intersection cost in the cost layer.
    Rz {
        /// Qubit being rotated.
        target: QubitId,
        /// Rotation angle in radians.
        theta: f64,
    },

    /// Rotation about X. Used as the mixing rotation.
    Rx {
        /// Qubit being rotated.
        target: QubitId,
        /// Rotation angle in radians.
        theta: f64,
    },

    /// Applies `e^{iθ}` to the |11> component of two qubits.
    ControlledPhase {
        /// First qubit of the pair.
        control: QubitId,
        /// Second qubit of the pair. The gate is symmetric in the two.
        target: QubitId,
        /// Phase angle in radians.
        theta: f64,
    },

    /// Measures the listed qubits in the computational basis.
    Measure {
        /// Qubits to read out, in bit-string order.
        targets: Vec<QubitId>,
    },
}

impl Gate {
    /// Returns every qubit id mentioned in the gate's parameters.
    pub fn involved_qubits(&self) -> Vec<QubitId> {
        match self {
            Gate::Hadamard { target } => vec![*target],
            Gate::Rz { target, .. } => vec![*target],
            Gate::Rx { target, .. } => vec![*target],
            Gate::ControlledPhase { control, target, .. } => vec![*control, *target],
            Gate::Measure { targets } => targets.clone(),
        }
    }

    /// Short mnemonic used in gate listings.
    pub(crate) fn symbol(&self) -> &'static str {
        match self {
            Gate::Hadamard { .. } => "H",
            Gate::Rz { .. } => "Rz",
            Gate::Rx { .. } => "Rx",
            Gate::ControlledPhase { .. } => "P",
            Gate::Measure { .. } => "M",
        }
    }

    /// 2x2 unitary for single-qubit gates, `None` otherwise.
    pub fn single_qubit_matrix(&self) -> Option<[[Complex<f64>; 2]; 2]> {
        match self {
            Gate::Hadamard { .. } => Some(hadamard_matrix()),
            Gate::Rz { theta, .. } => Some(rz_matrix(*theta)),
            Gate::Rx { theta, .. } => Some(rx_matrix(*theta)),
            Gate::ControlledPhase { .. } | Gate::Measure { .. } => None,
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Rz { theta, .. } | Gate::Rx { theta, .. } | Gate::ControlledPhase { theta, .. } => {
                write!(f, "{}({:.4})", self.symbol(), theta)?
            }
            Gate::Hadamard { .. } | Gate::Measure { .. } => write!(f, "{}", self.symbol())?,
        }
        let qubits: Vec<String> = self.involved_qubits().iter().map(ToString::to_string).collect();
        write!(f, " {}", qubits.join(","))
    }
}

fn hadamard_matrix() -> [[Complex<f64>; 2]; 2] {
    let h = Complex::new(FRAC_1_SQRT_2, 0.0);
    [[h, h], [h, -h]]
}

/// `Rz(θ) = diag(e^{-iθ/2}, e^{iθ/2})`
fn rz_matrix(theta: f64) -> [[Complex<f64>; 2]; 2] {
    let half = theta / 2.0;
    [
        [Complex::from_polar(1.0, -half), Complex::zero()],
        [Complex::zero(), Complex::from_polar(1.0, half)],
    ]
}

/// `Rx(θ) = [[cos(θ/2), -i sin(θ/2)], [-i sin(θ/2), cos(θ/2)]]`
fn rx_matrix(theta: f64) -> [[Complex<f64>; 2]; 2] {
    let half = theta / 2.0;
    let c = Complex::new(half.cos(), 0.0);
    let s = Complex::new(0.0, -half.sin());
    [[c, s], [s, c]]
}

/// 4x4 controlled-phase in the |control, target> basis: `diag(1, 1, 1, e^{iθ})`.
pub(crate) fn controlled_phase_matrix(theta: f64) -> [[Complex<f64>; 4]; 4] {
    let mut m = [[Complex::zero(); 4]; 4];
    m[0][0] = Complex::one();
    m[1][1] = Complex::one();
    m[2][2] = Complex::one();
    m[3][3] = Complex::from_polar(1.0, theta);
    m
}

/// Product `a * b` of two 2x2 matrices (apply `b` first).
pub(crate) fn mul2(a: &[[Complex<f64>; 2]; 2], b: &[[Complex<f64>; 2]; 2]) -> [[Complex<f64>; 2]; 2] {
    let mut out = [[Complex::zero(); 2]; 2];
    for (r, row) in out.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = a[r][0] * b[0][c] + a[r][1] * b[1][c];
        }
    }
    out
}
