//! Fixed constants of the traffic cost model and the QAOA circuit.

/// Added to an intersection's signal cost when an emergency vehicle is nearby.
pub const EMERGENCY_PENALTY: f64 = 100.0;

/// Mixing rotation applied to every qubit in each layer.
pub const DEFAULT_MIXING_ANGLE: f64 = std::f64::consts::FRAC_PI_2;

/// Shots per simulation run.
pub const DEFAULT_SHOTS: usize = 1024;

/// Vehicle speed assumed by the path sample (km/h).
pub const DEFAULT_VEHICLE_SPEED_KMH: f64 = 40.0;

/// Largest intersection (qubit) count the dense simulator accepts.
///
/// The state vector holds `2^n` amplitudes; 24 qubits is 256 MiB.
pub const MAX_QUBITS: usize = 24;

/// Signal timings (seconds) selected by bit-string symbols `'0'`, `'1'`, `'2'`.
pub const SIGNAL_TIMING_TABLE: [(char, u32); 3] = [('0', 20), ('1', 30), ('2', 60)];
