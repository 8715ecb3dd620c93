// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod qubit;
pub mod state;
pub mod constants;

// Re-export public types for convenient access via `qtraffic::core::TypeName`
pub use error::{QTrafficError, Result};
pub use qubit::QubitId;
pub use state::StateVector;
pub use constants::{
    DEFAULT_MIXING_ANGLE, DEFAULT_SHOTS, DEFAULT_VEHICLE_SPEED_KMH, EMERGENCY_PENALTY, MAX_QUBITS,
    SIGNAL_TIMING_TABLE,
};
