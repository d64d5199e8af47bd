//! Pipeline simulator CLI.
//!
//! Reads an instruction file (or stdin), simulates it on the five-stage
//! superscalar pipeline model, and reports either a human-readable summary
//! (dependency report, optional per-cycle trace, instruction timeline,
//! statistics) or the canonical JSON result for downstream tooling.

use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use std::{fs, io, process};

use pipeline_core::core::pipeline::trace::CycleSnapshot;
use pipeline_core::core::pipeline::units::ExecutionUnits;
use pipeline_core::sim::{analysis, loader};
use pipeline_core::{Config, Engine, SimResult};

#[derive(Parser, Debug)]
#[command(
    name = "pipesim",
    version,
    about = "Cycle-accurate superscalar pipeline simulator",
    long_about = "Simulate a straight-line instruction sequence on a five-stage \
in-order superscalar pipeline (2 ALU, 1 FPU, 1 MEM, 1 BRANCH) and report \
per-cycle occupancy, hazards, and aggregate statistics.\n\nExamples:\n  \
pipesim program.txt\n  pipesim program.txt --trace\n  pipesim program.txt --json > result.json\n  \
cat program.txt | pipesim -"
)]
struct Cli {
    /// Instruction file to simulate ('-' for stdin).
    file: String,

    /// Emit the full result (stats + per-cycle trace) as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Print each cycle's pipeline occupancy while simulating.
    #[arg(long)]
    trace: bool,

    /// Optional JSON configuration file overriding the hardware defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let mut config = cli.config.as_deref().map_or_else(Config::default, |path| {
        let text = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("[!] Could not read config '{}': {}", path.display(), e);
            process::exit(1);
        });
        serde_json::from_str(&text).unwrap_or_else(|e| {
            eprintln!("[!] Invalid config '{}': {}", path.display(), e);
            process::exit(1);
        })
    });
    if cli.trace {
        config.general.trace_cycles = true;
    }

    let source = read_source(&cli.file);
    let program = loader::parse_program(&source);

    if !cli.json {
        println!("[*] Loaded {} instructions from {}", program.len(), cli.file);
        print_dependencies(&analysis::raw_dependencies(&program));
    }

    let mut engine = Engine::new(program, &config).unwrap_or_else(|e| {
        eprintln!("[!] {}", e);
        process::exit(1);
    });

    let trace_cycles = config.general.trace_cycles && !cli.json;
    while !engine.is_done() {
        engine.tick();
        if trace_cycles {
            let snapshot = engine.trace().last().expect("snapshot after tick");
            render_cycle(snapshot, engine.units());
        }
    }

    if engine.timed_out() {
        eprintln!(
            "[!] Cycle cap reached with {} of {} instructions complete",
            engine.completed(),
            engine.instructions().len()
        );
    }

    if cli.json {
        let result = SimResult {
            stats: engine.stats(),
            cycles: engine.into_trace(),
        };
        println!("{}", serde_json::to_string_pretty(&result).expect("serialize result"));
    } else {
        print_timeline(&engine);
        engine.stats().print();
    }
}

/// Reads the program text from a file, or stdin for `-`.
fn read_source(file: &str) -> String {
    if file == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source).unwrap_or_else(|e| {
            eprintln!("[!] Could not read stdin: {}", e);
            process::exit(1);
        });
        source
    } else {
        fs::read_to_string(file).unwrap_or_else(|e| {
            eprintln!("[!] Could not read file '{}': {}", file, e);
            process::exit(1);
        })
    }
}

/// Prints the static RAW dependency report.
fn print_dependencies(report: &[analysis::Dependency]) {
    if report.is_empty() {
        println!("[*] No data dependencies - all instructions are independent");
        return;
    }
    println!("[*] Data dependencies:");
    for dep in report {
        let writers: Vec<String> = dep.depends_on.iter().map(|id| format!("I{id}")).collect();
        println!("      I{} depends on {}", dep.id, writers.join(", "));
    }
}

/// Renders one cycle's occupancy, unit availability, and stalls.
fn render_cycle(snapshot: &CycleSnapshot, units: &ExecutionUnits) {
    println!("\n--- Cycle {} ---", snapshot.cycle);
    let stages = [
        ("FETCH", &snapshot.stages.fetch),
        ("DECODE", &snapshot.stages.decode),
        ("ISSUE", &snapshot.stages.issue),
        ("EXECUTE", &snapshot.stages.execute),
        ("WRITEBACK", &snapshot.stages.writeback),
    ];
    for (name, occupants) in stages {
        if occupants.is_empty() {
            println!("  {:<10} ---", name);
        } else {
            println!("  {:<10} {}", name, occupants.join(" | "));
        }
    }
    println!("  {}", units.status());
    for stall in &snapshot.stalls {
        println!("  ! STALLED: {} ({})", stall.instruction, stall.reason);
    }
}

/// Prints the per-instruction timing table.
fn print_timeline(engine: &Engine) {
    println!("\nInstruction Timeline:");
    println!("{:<4} | {:>11} | {:>14} | {:>12}", "ID", "Issue Cycle", "Complete Cycle", "Total Cycles");
    for (instr, slot) in engine.instructions().iter().zip(engine.slots()) {
        let issue = slot.issue_cycle.map_or(-1, |c| c as i64);
        let complete = slot.complete_cycle.map_or(-1, |c| c as i64);
        println!(
            "I{:<3} | {:>11} | {:>14} | {:>12}",
            instr.id, issue, complete, slot.total_cycles
        );
    }
}
