//! Suggests signal timings for the bundled three-intersection sample.
//!
//! Usage: `signal-solver [scenario.json]`. Without an argument the compiled-in
//! sample is used. Diagnostics go to stderr, level from `QTRAFFIC_LOG`.

use qtraffic::scenario::{from_json_file, SignalScenario};
use qtraffic::QTrafficError;

fn main() -> Result<(), QTrafficError> {
    qtraffic::logging::init_from_env();

    let scenario: SignalScenario = match std::env::args().nth(1) {
        Some(path) => from_json_file(path)?,
        None => SignalScenario::default(),
    };

    let outcome = scenario.run()?;
    println!("QAOA Optimization Result: {}", outcome.counts);
    println!("Optimized Signal Timings: {:?}", outcome.timings);
    Ok(())
}
