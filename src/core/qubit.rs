// src/core/qubit.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a simulated qubit.
///
/// In the traffic pipelines qubit `i` carries the binary decision for
/// intersection `i`, so ids are assigned densely from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QubitId(pub u64);

impl QubitId {
    /// Qubit for intersection `index`.
    pub fn for_intersection(index: usize) -> Self {
        QubitId(index as u64)
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}
