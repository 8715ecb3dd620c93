// src/circuits/mod.rs

//! Ordered sequences of [`Gate`]s and a builder for assembling them.

use crate::core::QubitId;
use crate::operations::Gate;
use std::collections::HashSet;
use std::fmt;

/// An ordered sequence of gates applied to a set of qubits.
///
/// Analogy: `qiskit.QuantumCircuit` before transpilation.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    /// Unique set of qubits touched by any gate.
    qubits: HashSet<QubitId>,

    /// The gates, in application order.
    gates: Vec<Gate>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self {
            qubits: HashSet::new(),
            gates: Vec::new(),
        }
    }

    /// Appends a gate and registers the qubits it touches.
    pub fn add_gate(&mut self, gate: Gate) {
        for qubit in gate.involved_qubits() {
            self.qubits.insert(qubit);
        }
        self.gates.push(gate);
    }

    /// Appends every gate yielded by `gates`.
    pub fn add_gates<I>(&mut self, gates: I)
    where
        I: IntoIterator<Item = Gate>,
    {
        for gate in gates {
            self.add_gate(gate);
        }
    }

    /// Qubit ids in ascending order.
    pub fn sorted_qubits(&self) -> Vec<QubitId> {
        let mut sorted: Vec<QubitId> = self.qubits.iter().cloned().collect();
        sorted.sort();
        sorted
    }

    /// The gates in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Number of gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Returns `true` if the circuit contains no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// Method-chaining builder for [`Circuit`].
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Creates a new, empty CircuitBuilder.
    pub fn new() -> Self {
        Self { circuit: Circuit::new() }
    }

    /// Adds a single gate.
    pub fn add_gate(mut self, gate: Gate) -> Self {
        self.circuit.add_gate(gate);
        self
    }

    /// Adds multiple gates.
    pub fn add_gates<I>(mut self, gates: I) -> Self
    where
        I: IntoIterator<Item = Gate>,
    {
        self.circuit.add_gates(gates);
        self
    }

    /// Hadamard on every qubit in `qubits`.
    pub fn hadamard_all(self, qubits: &[QubitId]) -> Self {
        self.add_gates(qubits.iter().map(|&target| Gate::Hadamard { target }))
    }

    pub fn rz(self, target: QubitId, theta: f64) -> Self {
        self.add_gate(Gate::Rz { target, theta })
    }

    pub fn rx(self, target: QubitId, theta: f64) -> Self {
        self.add_gate(Gate::Rx { target, theta })
    }

    pub fn controlled_phase(self, control: QubitId, target: QubitId, theta: f64) -> Self {
        self.add_gate(Gate::ControlledPhase { control, target, theta })
    }

    /// Measures every qubit registered so far, in ascending id order.
    pub fn measure_all(self) -> Self {
        let targets = self.circuit.sorted_qubits();
        self.add_gate(Gate::Measure { targets })
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// One gate per line, prefixed by its position: `3: Rz(30.0000) q0`.
impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "qtraffic::Circuit[{} gates on {} qubits]", self.gates.len(), self.qubits.len())?;
        for (t, gate) in self.gates.iter().enumerate() {
            writeln!(f, "{:>3}: {}", t, gate)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qid(id: u64) -> QubitId {
        QubitId(id)
    }

    #[test]
    fn builder_registers_qubits_and_order() {
        let circuit = CircuitBuilder::new()
            .hadamard_all(&[qid(1), qid(0)])
            .rz(qid(0), 0.5)
            .rx(qid(1), 0.25)
            .measure_all()
            .build();

        assert_eq!(circuit.len(), 5);
        assert_eq!(circuit.sorted_qubits(), vec![qid(0), qid(1)]);
        assert_eq!(
            circuit.gates().last(),
            Some(&Gate::Measure { targets: vec![qid(0), qid(1)] })
        );
    }

    #[test]
    fn listing_has_one_line_per_gate() {
        let circuit = CircuitBuilder::new()
            .hadamard_all(&[qid(0), qid(1)])
            .controlled_phase(qid(0), qid(1), 1.5)
            .measure_all()
            .build();
        let text = circuit.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1 + 4);
        assert_eq!(lines[0], "qtraffic::Circuit[4 gates on 2 qubits]");
        assert_eq!(lines[1], "  0: H q0");
        assert_eq!(lines[3], "  2: P(1.5000) q0,q1");
        assert_eq!(lines[4], "  3: M q0,q1");
    }

    #[test]
    fn empty_circuit_listing() {
        assert_eq!(Circuit::new().to_string(), "qtraffic::Circuit[0 gates on 0 qubits]\n");
    }
}
