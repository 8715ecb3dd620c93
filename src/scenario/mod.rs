// src/scenario/mod.rs

//! End-to-end pipelines: inputs → cost → circuit → counts → decoded suggestion.
//!
//! Every parameter lives in a scenario value. The `Default` impls are the
//! bundled three-intersection samples; JSON documents may override any
//! subset of fields.

use crate::core::{QTrafficError, Result, DEFAULT_VEHICLE_SPEED_KMH};
use crate::qaoa::{qaoa_path_optimization, qaoa_traffic_optimization, QaoaConfig};
use crate::simulation::Counts;
use crate::traffic::{decode_path, decode_signals, RoadNetwork, RouteRequest, TrafficSnapshot};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Inputs for signal-timing suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalScenario {
    pub snapshot: TrafficSnapshot,
    pub qaoa: QaoaConfig,
}

impl Default for SignalScenario {
    fn default() -> Self {
        Self {
            snapshot: TrafficSnapshot::new(vec![50.0, 40.0, 10.0], vec![30.0, 60.0, 20.0], vec![false, true, false]),
            qaoa: QaoaConfig::default(),
        }
    }
}

/// Inputs for a single vehicle's path suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathScenario {
    /// Only one vehicle is routed, so the sample flow is a single vehicle at the start.
    pub snapshot: TrafficSnapshot,
    pub network: RoadNetwork,
    pub route: RouteRequest,
    pub vehicle_speed_kmh: f64,
    pub qaoa: QaoaConfig,
}

impl Default for PathScenario {
    fn default() -> Self {
        Self {
            snapshot: TrafficSnapshot::new(vec![1.0, 0.0, 0.0], vec![30.0, 60.0, 20.0], vec![false, true, false]),
            network: RoadNetwork::new(vec![vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 1.0], vec![2.0, 1.0, 0.0]]),
            route: RouteRequest::new(0, 2),
            vehicle_speed_kmh: DEFAULT_VEHICLE_SPEED_KMH,
            qaoa: QaoaConfig::default(),
        }
    }
}

/// Parses a scenario from JSON; missing fields take the sample values.
pub fn from_json_str<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a scenario file.
pub fn from_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let text = std::fs::read_to_string(path.as_ref())?;
    from_json_str(&text)
}

/// Counts plus the decoded signal timings of the most frequent outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalOutcome {
    pub counts: Counts,
    pub best: String,
    /// Seconds, one per intersection.
    pub timings: Vec<u32>,
}

/// Counts plus the decoded path of the most frequent outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct PathOutcome {
    pub counts: Counts,
    pub best: String,
    /// Visited intersection indices.
    pub path: Vec<usize>,
}

fn best_outcome(counts: &Counts) -> Result<String> {
    counts
        .most_frequent()
        .map(|(bits, _)| bits.to_string())
        .ok_or_else(|| QTrafficError::Simulation { message: "simulation produced no outcomes to decode".to_string() })
}

impl SignalScenario {
    pub fn run(&self) -> Result<SignalOutcome> {
        info!(intersections = self.snapshot.len(), "running signal optimization");
        let counts = qaoa_traffic_optimization(&self.snapshot, &self.qaoa)?;
        let best = best_outcome(&counts)?;
        let timings = decode_signals(&best)?;
        info!(%best, ?timings, "decoded signal timings");
        Ok(SignalOutcome { counts, best, timings })
    }
}

impl PathScenario {
    pub fn run(&self) -> Result<PathOutcome> {
        info!(
            intersections = self.snapshot.len(),
            start = self.route.start,
            end = self.route.end,
            "running path optimization"
        );
        let counts = qaoa_path_optimization(
            &self.snapshot,
            &self.network,
            self.route,
            self.vehicle_speed_kmh,
            &self.qaoa,
        )?;
        let best = best_outcome(&counts)?;
        let path = decode_path(&best);
        info!(%best, ?path, "decoded path");
        Ok(PathOutcome { counts, best, path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qaoa::CouplingMode;

    #[test]
    fn partial_json_keeps_sample_values() -> Result<()> {
        let scenario: SignalScenario = from_json_str(r#"{ "qaoa": { "shots": 64, "seed": 9 } }"#)?;
        assert_eq!(scenario.snapshot, SignalScenario::default().snapshot);
        assert_eq!(scenario.qaoa.shots, 64);
        assert_eq!(scenario.qaoa.seed, Some(9));
        assert_eq!(scenario.qaoa.layers, 1);
        Ok(())
    }

    #[test]
    fn coupling_mode_parses_snake_case() -> Result<()> {
        let scenario: PathScenario = from_json_str(r#"{ "qaoa": { "coupling": "phase_coupling" } }"#)?;
        assert_eq!(scenario.qaoa.coupling, CouplingMode::PhaseCoupling);
        assert_eq!(scenario.route, RouteRequest::new(0, 2));
        Ok(())
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let parsed: Result<SignalScenario> = from_json_str("{ not json");
        assert!(matches!(parsed, Err(QTrafficError::Config(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let parsed: Result<PathScenario> = from_json_file("/nonexistent/qtraffic/scenario.json");
        assert!(matches!(parsed, Err(QTrafficError::Io(_))));
    }

    #[test]
    fn zero_shots_cannot_be_decoded() {
        let mut scenario = SignalScenario::default();
        scenario.qaoa.shots = 0;
        assert!(matches!(scenario.run(), Err(QTrafficError::Simulation { .. })));
    }
}
