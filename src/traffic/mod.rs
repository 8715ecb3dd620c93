// src/traffic/mod.rs

//! Traffic inputs, cost assembly and bit-string decoding.

pub mod data;
pub mod cost;
pub mod decode;

pub use data::{RoadNetwork, RouteRequest, TrafficSnapshot};
pub use cost::{
    calculate_travel_time, create_cost_hamiltonian, create_path_cost_hamiltonian, CostHamiltonian, Coupling,
};
pub use decode::{decode_path, decode_signals};
