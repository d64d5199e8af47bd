//! Tick-by-tick run recording.
//!
//! Drives an engine one cycle at a time and keeps each slot's stage after
//! every cycle, so tests can assert invariants over the whole run rather
//! than just the final state.

use pipeline_core::core::pipeline::slot::Stage;
use pipeline_core::{Config, Engine};

use crate::common::program;

/// A completed (or capped) run with its full per-cycle stage history.
pub struct RunRecord {
    /// The engine in its final state.
    pub engine: Engine,
    /// `history[t][i]` is slot `i`'s stage at the end of cycle `t + 1`.
    pub history: Vec<Vec<Stage>>,
}

/// Records a run of `src` under the default configuration.
pub fn record(src: &str) -> RunRecord {
    record_with(src, &Config::default())
}

/// Records a run of `src` under `config`.
pub fn record_with(src: &str, config: &Config) -> RunRecord {
    let mut engine = Engine::new(program::parse(src), config).expect("valid program");
    let mut history = Vec::new();
    while !engine.is_done() {
        engine.tick();
        history.push(engine.slots().iter().map(|s| s.stage).collect());
    }
    RunRecord { engine, history }
}
