// src/traffic/data.rs

//! Per-intersection inputs and the static road network.

use crate::core::{QTrafficError, Result, MAX_QUBITS};
use serde::{Deserialize, Serialize};

/// Observed traffic at every intersection.
///
/// All three vectors are indexed by intersection and must have equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficSnapshot {
    /// Vehicles per minute.
    pub traffic_flows: Vec<f64>,
    /// Current signal timing in seconds.
    pub signal_timings: Vec<f64>,
    /// Whether an emergency vehicle is nearby.
    pub emergency_flags: Vec<bool>,
}

impl TrafficSnapshot {
    pub fn new(traffic_flows: Vec<f64>, signal_timings: Vec<f64>, emergency_flags: Vec<bool>) -> Self {
        Self { traffic_flows, signal_timings, emergency_flags }
    }

    /// Number of intersections.
    pub fn len(&self) -> usize {
        self.traffic_flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traffic_flows.is_empty()
    }

    /// Checks lengths and value ranges.
    pub fn validate(&self) -> Result<()> {
        let n = self.len();
        if n == 0 {
            return Err(QTrafficError::invalid_input("at least one intersection is required"));
        }
        if n > MAX_QUBITS {
            return Err(QTrafficError::invalid_input(format!(
                "{} intersections exceed the simulator limit of {}",
                n, MAX_QUBITS
            )));
        }
        if self.signal_timings.len() != n || self.emergency_flags.len() != n {
            return Err(QTrafficError::invalid_input(format!(
                "length mismatch: {} flows, {} timings, {} flags",
                n,
                self.signal_timings.len(),
                self.emergency_flags.len()
            )));
        }
        if let Some((i, flow)) = self.traffic_flows.iter().enumerate().find(|(_, f)| !f.is_finite() || **f < 0.0) {
            return Err(QTrafficError::invalid_input(format!(
                "traffic flow at intersection {} must be finite and non-negative, got {}",
                i, flow
            )));
        }
        if let Some((i, timing)) = self.signal_timings.iter().enumerate().find(|(_, t)| !t.is_finite() || **t <= 0.0) {
            return Err(QTrafficError::invalid_input(format!(
                "signal timing at intersection {} must be finite and positive, got {}",
                i, timing
            )));
        }
        Ok(())
    }
}

/// Symmetric matrix of distances (km) between intersections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadNetwork {
    /// `distances[i][j]` in km.
    pub distances: Vec<Vec<f64>>,
}

impl RoadNetwork {
    pub fn new(distances: Vec<Vec<f64>>) -> Self {
        Self { distances }
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Checks the matrix is square, symmetric, non-negative and has a zero diagonal.
    pub fn validate(&self) -> Result<()> {
        let n = self.len();
        for (i, row) in self.distances.iter().enumerate() {
            if row.len() != n {
                return Err(QTrafficError::invalid_input(format!(
                    "distance row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
        }
        for i in 0..n {
            if self.distances[i][i] != 0.0 {
                return Err(QTrafficError::invalid_input(format!(
                    "distance from intersection {} to itself must be zero",
                    i
                )));
            }
            for j in 0..n {
                let d = self.distances[i][j];
                if !d.is_finite() || d < 0.0 {
                    return Err(QTrafficError::invalid_input(format!(
                        "distance [{}][{}] must be finite and non-negative, got {}",
                        i, j, d
                    )));
                }
                if d != self.distances[j][i] {
                    return Err(QTrafficError::invalid_input(format!(
                        "distance matrix is not symmetric at [{}][{}]",
                        i, j
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Start and end intersections for a single vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub start: usize,
    pub end: usize,
}

impl RouteRequest {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Both endpoints must name an intersection.
    pub fn validate(&self, intersections: usize) -> Result<()> {
        for (name, node) in [("start", self.start), ("end", self.end)] {
            if node >= intersections {
                return Err(QTrafficError::invalid_input(format!(
                    "{} node {} is out of range for {} intersections",
                    name, node, intersections
                )));
            }
        }
        Ok(())
    }
}
