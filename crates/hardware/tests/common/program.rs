//! Program construction shortcuts for tests.

use pipeline_core::isa::Instruction;
use pipeline_core::sim::loader;
use pipeline_core::{simulate_source, Config, Engine, SimResult};

/// Parses instruction text into a program.
pub fn parse(src: &str) -> Vec<Instruction> {
    loader::parse_program(src)
}

/// Simulates `src` to completion with the default configuration.
pub fn run(src: &str) -> SimResult {
    simulate_source(src, &Config::default()).expect("program simulates")
}

/// Builds an engine over `src` with the default configuration.
pub fn engine(src: &str) -> Engine {
    Engine::new(parse(src), &Config::default()).expect("valid program")
}
