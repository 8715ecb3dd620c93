// src/simulation/transpile.rs

//! Lowers a [`Circuit`] into matrices addressed by state-vector position.
//!
//! Consecutive single-qubit gates on the same qubit are fused into one 2x2
//! matrix. Gates on distinct qubits commute, so pending matrices only need
//! flushing when a two-qubit gate or the measurement touches that qubit.

use crate::circuits::Circuit;
use crate::core::{QTrafficError, QubitId, Result};
use crate::operations::{controlled_phase_matrix, mul2, Gate};
use num_complex::Complex;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

/// A lowered gate.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CompiledOp {
    Single {
        index: usize,
        matrix: [[Complex<f64>; 2]; 2],
    },
    Two {
        first: usize,
        second: usize,
        matrix: [[Complex<f64>; 4]; 4],
    },
}

/// Output of [`transpile`].
#[derive(Debug, Clone)]
pub(crate) struct CompiledCircuit {
    pub(crate) num_qubits: usize,
    pub(crate) ops: Vec<CompiledOp>,
    /// State-vector positions of the measured qubits, in bit-string order.
    pub(crate) measured: Vec<usize>,
}

pub(crate) fn transpile(circuit: &Circuit) -> Result<CompiledCircuit> {
    let sorted = circuit.sorted_qubits();
    let indices: HashMap<QubitId, usize> = sorted.iter().enumerate().map(|(i, q)| (*q, i)).collect();
    let index_of = |q: &QubitId| indices.get(q).copied().ok_or(QTrafficError::UnknownQubit { qubit: *q });

    let gates = circuit.gates();
    let measure_target = match gates.last() {
        Some(Gate::Measure { targets }) => targets,
        _ => {
            return Err(QTrafficError::InvalidCircuit {
                message: "circuit must end with a measurement".to_string(),
            });
        }
    };

    // BTreeMap so flushes happen in ascending qubit order
    let mut pending: BTreeMap<usize, [[Complex<f64>; 2]; 2]> = BTreeMap::new();
    let mut ops = Vec::with_capacity(gates.len());
    let mut input_gates = 0usize;

    for gate in &gates[..gates.len() - 1] {
        input_gates += 1;
        match gate {
            Gate::Measure { .. } => {
                return Err(QTrafficError::InvalidCircuit {
                    message: "gates after a measurement are not supported".to_string(),
                });
            }
            Gate::ControlledPhase { control, target, theta } => {
                let first = index_of(control)?;
                let second = index_of(target)?;
                if first == second {
                    return Err(QTrafficError::InvalidCircuit {
                        message: format!("controlled phase needs two distinct qubits, got {} twice", control),
                    });
                }
                flush(&mut pending, &mut ops, &[first, second]);
                ops.push(CompiledOp::Two { first, second, matrix: controlled_phase_matrix(*theta) });
            }
            Gate::Hadamard { target } | Gate::Rz { target, .. } | Gate::Rx { target, .. } => {
                let index = index_of(target)?;
                let Some(matrix) = gate.single_qubit_matrix() else {
                    continue;
                };
                let fused = match pending.get(&index) {
                    Some(previous) => mul2(&matrix, previous),
                    None => matrix,
                };
                pending.insert(index, fused);
            }
        }
    }

    let all: Vec<usize> = pending.keys().copied().collect();
    flush(&mut pending, &mut ops, &all);

    if measure_target.is_empty() {
        return Err(QTrafficError::InvalidCircuit { message: "measurement has no targets".to_string() });
    }
    let mut seen = HashSet::new();
    let mut measured = Vec::with_capacity(measure_target.len());
    for q in measure_target {
        if !seen.insert(*q) {
            return Err(QTrafficError::InvalidCircuit { message: format!("qubit {} measured twice", q) });
        }
        measured.push(index_of(q)?);
    }

    debug!(input_gates, compiled_ops = ops.len(), qubits = sorted.len(), "transpiled circuit");

    Ok(CompiledCircuit { num_qubits: sorted.len(), ops, measured })
}

fn flush(
    pending: &mut BTreeMap<usize, [[Complex<f64>; 2]; 2]>,
    ops: &mut Vec<CompiledOp>,
    indices: &[usize],
) {
    for index in indices {
        if let Some(matrix) = pending.remove(index) {
            ops.push(CompiledOp::Single { index: *index, matrix });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuits::CircuitBuilder;

    fn qid(id: u64) -> QubitId {
        QubitId(id)
    }

    #[test]
    fn fuses_single_qubit_runs() -> Result<()> {
        let circuit = CircuitBuilder::new()
            .hadamard_all(&[qid(0), qid(1)])
            .rz(qid(0), 1.0)
            .rx(qid(0), 0.5)
            .rz(qid(1), 2.0)
            .measure_all()
            .build();
        let compiled = transpile(&circuit)?;
        assert_eq!(compiled.num_qubits, 2);
        assert_eq!(compiled.ops.len(), 2);
        assert_eq!(compiled.measured, vec![0, 1]);
        Ok(())
    }

    #[test]
    fn two_qubit_gate_splits_fusion() -> Result<()> {
        let circuit = CircuitBuilder::new()
            .hadamard_all(&[qid(0), qid(1)])
            .controlled_phase(qid(0), qid(1), 0.3)
            .rx(qid(0), 0.5)
            .measure_all()
            .build();
        let compiled = transpile(&circuit)?;
        // H(q0), H(q1), CP, Rx(q0)
        assert_eq!(compiled.ops.len(), 4);
        assert!(matches!(compiled.ops[2], CompiledOp::Two { first: 0, second: 1, .. }));
        Ok(())
    }

    #[test]
    fn rejects_missing_measurement() {
        let circuit = CircuitBuilder::new().hadamard_all(&[qid(0)]).build();
        assert!(matches!(transpile(&circuit), Err(QTrafficError::InvalidCircuit { .. })));
    }

    #[test]
    fn rejects_gate_after_measurement() {
        let circuit = CircuitBuilder::new()
            .hadamard_all(&[qid(0)])
            .measure_all()
            .rx(qid(0), 1.0)
            .build();
        assert!(matches!(transpile(&circuit), Err(QTrafficError::InvalidCircuit { .. })));
    }

    #[test]
    fn rejects_double_measurement_of_a_qubit() {
        let circuit = CircuitBuilder::new()
            .hadamard_all(&[qid(0)])
            .add_gate(Gate::Measure { targets: vec![qid(0), qid(0)] })
            .build();
        assert!(matches!(transpile(&circuit), Err(QTrafficError::InvalidCircuit { .. })));
    }
}
