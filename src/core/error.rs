//! Error handling logic

use thiserror::Error;

use super::QubitId;

/// Errors raised while assembling costs, building circuits, simulating or decoding.
#[derive(Debug, Error)]
pub enum QTrafficError {
    /// Scenario data failed validation (length mismatch, negative flow, bad node index...).
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input
        message: String,
    },

    /// A bit-string contained a character with no signal timing mapped to it.
    #[error("Unexpected bit '{symbol}' at position {position} in bit-string")]
    UnexpectedSymbol {
        /// The offending character
        symbol: char,
        /// Character position within the bit-string
        position: usize,
    },

    /// The circuit cannot be transpiled (no measurement, gate after measurement, ...).
    #[error("Invalid circuit: {message}")]
    InvalidCircuit {
        /// InvalidCircuit failure message
        message: String,
    },

    /// A qubit referenced by a gate is not part of the simulation context.
    #[error("Qubit {qubit} not found in simulation context")]
    UnknownQubit {
        /// The missing qubit
        qubit: QubitId,
    },

    /// The state vector lost normalization.
    #[error("Incoherence: {message}")]
    Incoherence {
        /// Incoherence failure message
        message: String,
    },

    /// General error encountered during the simulation process itself.
    #[error("Simulation error: {message}")]
    Simulation {
        /// Simulation failure message
        message: String,
    },

    /// A scenario document could not be parsed.
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// A scenario file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QTrafficError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        QTrafficError::InvalidInput { message: message.into() }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, QTrafficError>;
