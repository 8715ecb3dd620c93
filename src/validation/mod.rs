// src/validation/mod.rs

//! Checks applied to a [`StateVector`] before it is sampled.

use crate::core::{QTrafficError, Result, StateVector};

const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Checks that the squared amplitudes sum to 1 within `tolerance`
/// (default `1e-9`).
///
/// # Errors
/// `QTrafficError::Incoherence` if the norm deviates.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<()> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sq: f64 = state.probabilities().iter().sum();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        return Err(QTrafficError::Incoherence {
            message: format!(
                "state vector norm deviated from 1 by more than {:.1e}: {}",
                effective_tolerance, norm_sq
            ),
        });
    }
    Ok(())
}

/// Checks that every amplitude is finite.
pub fn check_finite(state: &StateVector) -> Result<()> {
    if let Some((k, c)) = state.vector().iter().enumerate().find(|(_, c)| !c.re.is_finite() || !c.im.is_finite()) {
        return Err(QTrafficError::Incoherence {
            message: format!("amplitude {} of basis state {} is not finite", c, k),
        });
    }
    Ok(())
}

/// Runs every state check with default tolerances.
pub fn validate_state(state: &StateVector) -> Result<()> {
    check_finite(state)?;
    check_normalization(state, None)
}
