// src/traffic/cost.rs

//! Builds the per-intersection cost that parameterizes the QAOA circuit.

use super::data::{RoadNetwork, RouteRequest, TrafficSnapshot};
use crate::core::{QTrafficError, Result, EMERGENCY_PENALTY};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Off-diagonal cost term between two intersections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coupling {
    /// First intersection (the route start in the path cost).
    pub i: usize,
    /// Second intersection.
    pub j: usize,
    /// Travel time in minutes, used as a phase angle in radians.
    pub weight: f64,
}

/// Diagonal cost per intersection plus sparse couplings.
///
/// Stored as a length-n vector; nothing of size `2^n` is ever allocated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CostHamiltonian {
    diagonal: Vec<f64>,
    couplings: Vec<Coupling>,
}

impl CostHamiltonian {
    pub fn new(diagonal: Vec<f64>, couplings: Vec<Coupling>) -> Self {
        Self { diagonal, couplings }
    }

    /// Number of intersections (and qubits).
    pub fn len(&self) -> usize {
        self.diagonal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagonal.is_empty()
    }

    pub fn diagonal(&self) -> &[f64] {
        &self.diagonal
    }

    pub fn couplings(&self) -> &[Coupling] {
        &self.couplings
    }

}

/// Travel time in minutes for `distance_km` at `speed_kmh`.
pub fn calculate_travel_time(distance_km: f64, speed_kmh: f64) -> f64 {
    let speed_km_per_min = speed_kmh / 60.0;
    distance_km / speed_km_per_min
}

/// Signal cost: `timing × flow`, plus [`EMERGENCY_PENALTY`] where a flag is set.
pub fn create_cost_hamiltonian(snapshot: &TrafficSnapshot) -> Result<CostHamiltonian> {
    snapshot.validate()?;

    let diagonal: Vec<f64> = snapshot
        .signal_timings
        .iter()
        .zip(&snapshot.traffic_flows)
        .zip(&snapshot.emergency_flags)
        .map(|((timing, flow), emergency)| {
            let waiting_time = timing * flow;
            if *emergency { waiting_time + EMERGENCY_PENALTY } else { waiting_time }
        })
        .collect();

    debug!(?diagonal, "signal cost assembled");
    Ok(CostHamiltonian::new(diagonal, Vec::new()))
}

/// Path cost for one vehicle.
///
/// Only the start intersection carries a waiting cost; every other
/// intersection `j` gets a `(start, j)` coupling weighted by the travel time
/// from the start. Emergency flags and the end node do not enter the cost.
pub fn create_path_cost_hamiltonian(
    snapshot: &TrafficSnapshot,
    network: &RoadNetwork,
    route: RouteRequest,
    vehicle_speed_kmh: f64,
) -> Result<CostHamiltonian> {
    snapshot.validate()?;
    network.validate()?;
    let n = snapshot.len();
    if network.len() != n {
        return Err(QTrafficError::invalid_input(format!(
            "road network has {} intersections, traffic snapshot has {}",
            network.len(),
            n
        )));
    }
    route.validate(n)?;
    if !vehicle_speed_kmh.is_finite() || vehicle_speed_kmh <= 0.0 {
        return Err(QTrafficError::invalid_input(format!(
            "vehicle speed must be positive, got {}",
            vehicle_speed_kmh
        )));
    }

    let start = route.start;
    let mut diagonal = vec![0.0; n];
    diagonal[start] = snapshot.signal_timings[start] * snapshot.traffic_flows[start];

    let couplings: Vec<Coupling> = (0..n)
        .filter(|&j| j != start)
        .map(|j| Coupling {
            i: start,
            j,
            weight: calculate_travel_time(network.distances[start][j], vehicle_speed_kmh),
        })
        .collect();

    debug!(?diagonal, couplings = couplings.len(), start, end = route.end, "path cost assembled");
    Ok(CostHamiltonian::new(diagonal, couplings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn signal_sample() -> TrafficSnapshot {
        TrafficSnapshot::new(vec![50.0, 40.0, 10.0], vec![30.0, 60.0, 20.0], vec![false, true, false])
    }

    #[test]
    fn travel_time_at_forty_kmh() {
        assert!((calculate_travel_time(1.0, 40.0) - 1.5).abs() < 1e-12);
        assert!((calculate_travel_time(2.0, 40.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn signal_diagonal_includes_penalty() -> Result<()> {
        let cost = create_cost_hamiltonian(&signal_sample())?;
        assert_eq!(cost.diagonal(), &[1500.0, 2400.0 + 100.0, 200.0]);
        assert!(cost.couplings().is_empty());
        Ok(())
    }

    #[test]
    fn path_cost_has_start_row_only() -> Result<()> {
        let snapshot = TrafficSnapshot::new(vec![1.0, 0.0, 0.0], vec![30.0, 60.0, 20.0], vec![false, true, false]);
        let network = RoadNetwork::new(vec![vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 1.0], vec![2.0, 1.0, 0.0]]);
        let cost = create_path_cost_hamiltonian(&snapshot, &network, RouteRequest::new(0, 2), 40.0)?;

        assert_eq!(cost.diagonal(), &[30.0, 0.0, 0.0]);
        let pairs: Vec<(usize, usize)> = cost.couplings().iter().map(|c| (c.i, c.j)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2)]);
        assert!((cost.couplings()[0].weight - 1.5).abs() < 1e-12);
        assert!((cost.couplings()[1].weight - 3.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn path_cost_rejects_mismatched_network() {
        let snapshot = TrafficSnapshot::new(vec![1.0, 0.0], vec![30.0, 60.0], vec![false, false]);
        let network = RoadNetwork::new(vec![vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 1.0], vec![2.0, 1.0, 0.0]]);
        let err = create_path_cost_hamiltonian(&snapshot, &network, RouteRequest::new(0, 1), 40.0);
        assert!(matches!(err, Err(QTrafficError::InvalidInput { .. })));
    }

    #[test]
    fn path_cost_rejects_zero_speed() {
        let snapshot = TrafficSnapshot::new(vec![1.0], vec![30.0], vec![false]);
        let network = RoadNetwork::new(vec![vec![0.0]]);
        assert!(create_path_cost_hamiltonian(&snapshot, &network, RouteRequest::new(0, 0), 0.0).is_err());
    }
}
