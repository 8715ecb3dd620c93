//! Suggests a path for one vehicle over the bundled three-intersection network.
//!
//! Usage: `path-solver [scenario.json]`.

use qtraffic::scenario::{from_json_file, PathScenario};
use qtraffic::QTrafficError;

fn main() -> Result<(), QTrafficError> {
    qtraffic::logging::init_from_env();

    let scenario: PathScenario = match std::env::args().nth(1) {
        Some(path) => from_json_file(path)?,
        None => PathScenario::default(),
    };

    let outcome = scenario.run()?;
    println!("QAOA Path Optimization Result: {}", outcome.counts);
    println!("Optimized path for vehicle: {:?}", outcome.path);
    Ok(())
}
