//! Pipeline invariants, checked tick-by-tick over a corpus of programs.
//!
//! Verifies that every run preserves:
//!   1. Monotonic stages — a slot's stage never regresses.
//!   2. Unit capacity — EXECUTE/WRITEBACK occupancy never exceeds the pool.
//!   3. Latency floor — completion is never earlier than issue + latency.
//!   4. Per-unit issue order — program order within a unit class.
//!   5. RAW correctness — a reader never issues before its writer's value
//!      is ready.
//!   6. IPC identity.
//!   7. One snapshot per cycle.
//!   8. No stage skipping — every retired instruction visited all five
//!      visible stages.

use pipeline_core::core::pipeline::slot::Stage;
use pipeline_core::isa::opcode::ExecUnit;
use pipeline_core::Config;

use crate::common::harness::{self, RunRecord};

/// Programs exercising independence, RAW chains, structural contention,
/// memory ordering, branches, NOPs, and overwritten destinations.
const CORPUS: [&str; 8] = [
    "ADD R1 R2 R3\nSUB R4 R5 R6",
    "ADD R1 R2 R3\nADD R4 R1 R5\nMUL R6 R4 R1\nDIV R7 R6 R2",
    "FMUL R1 R2 R3\nFADD R4 R5 R6\nFDIV R7 R8 R9",
    "LOAD R1 R2\nSTORE R3 R1\nLOAD R4 R3\nADD R5 R4 R1",
    "BEQ R1 R2 5\nBNE R3 R4 0\nJMP 2\nNOP",
    // Same destination written twice; the later writer wins the scoreboard.
    "ADD R1 R2 R3\nSUB R1 R4 R5\nMUL R6 R1 R7",
    "NOP\nNOP\nNOP",
    "LOAD R1 R0\nFMUL R2 R1 R1\nADD R3 R2 R1\nSTORE R4 R3\nBEQ R3 R4 0\nDIV R5 R3 R2\nFDIV R6 R5 R1\nNOP\nSUB R7 R6 R5\nJMP 1",
];

fn check_invariants(record: &RunRecord) {
    let engine = &record.engine;
    let slots = engine.slots();
    let instructions = engine.instructions();

    // P1: monotonic stages.
    for i in 0..slots.len() {
        for t in 1..record.history.len() {
            assert!(
                record.history[t][i] >= record.history[t - 1][i],
                "slot {i} regressed at cycle {}",
                t + 1
            );
        }
    }

    // P2: unit occupancy bounded by capacity, every cycle.
    for (t, stages) in record.history.iter().enumerate() {
        for unit in ExecUnit::POOLED {
            let in_flight = stages
                .iter()
                .zip(slots)
                .filter(|(stage, slot)| {
                    matches!(stage, Stage::Execute | Stage::Writeback)
                        && slot.assigned_unit == unit
                })
                .count() as u32;
            assert!(
                in_flight <= engine.units().capacity(unit),
                "{unit} over capacity at cycle {}",
                t + 1
            );
        }
    }

    // P3: latency floor.
    for (instr, slot) in instructions.iter().zip(slots) {
        if let (Some(issue), Some(complete)) = (slot.issue_cycle, slot.complete_cycle) {
            assert!(
                complete - issue >= instr.opcode.latency(),
                "I{} retired before its latency elapsed",
                instr.id
            );
        }
    }

    // P4: issue order within each unit class follows program order.
    for unit in ExecUnit::POOLED {
        let issues: Vec<u64> = instructions
            .iter()
            .zip(slots)
            .filter(|(instr, slot)| instr.opcode.unit() == unit && slot.issue_cycle.is_some())
            .map(|(_, slot)| slot.issue_cycle.unwrap())
            .collect();
        assert!(
            issues.windows(2).all(|w| w[0] <= w[1]),
            "{unit} issued out of program order: {issues:?}"
        );
    }

    // P5: a reader issues no earlier than its writer's ready cycle.
    for (j, reader) in instructions.iter().enumerate() {
        let Some(reader_issue) = slots[j].issue_cycle else {
            continue;
        };
        for src in [reader.src1, reader.src2] {
            if src < 0 {
                continue;
            }
            let writer = instructions[..j]
                .iter()
                .enumerate()
                .rev()
                .find(|(_, w)| w.dest >= 0 && w.dest == src);
            if let Some((i, writer)) = writer {
                if let Some(writer_issue) = slots[i].issue_cycle {
                    assert!(
                        reader_issue >= writer_issue + writer.opcode.latency(),
                        "I{} read R{src} before I{} produced it",
                        reader.id,
                        writer.id
                    );
                }
            }
        }
    }

    // P6: IPC identity.
    let stats = engine.stats();
    if stats.total_cycles > 0 {
        let expected = stats.instructions_completed as f64 / stats.total_cycles as f64;
        assert!((stats.ipc - expected).abs() < 1e-9);
    } else {
        assert_eq!(stats.ipc, 0.0);
    }

    // P7: one snapshot per cycle.
    assert_eq!(engine.trace().len() as u64, stats.total_cycles);

    // P8: every retired instruction visited all five visible stages.
    for i in 0..slots.len() {
        if slots[i].complete_cycle.is_none() {
            continue;
        }
        for stage in [
            Stage::Fetch,
            Stage::Decode,
            Stage::Issue,
            Stage::Execute,
            Stage::Writeback,
        ] {
            assert!(
                record.history.iter().any(|row| row[i] == stage),
                "slot {i} skipped {stage}"
            );
        }
    }
}

#[test]
fn test_invariants_hold_across_corpus() {
    for src in CORPUS {
        let record = harness::record(src);
        assert!(
            !record.engine.timed_out(),
            "corpus program unexpectedly hit the cycle cap: {src:?}"
        );
        assert_eq!(record.engine.completed(), record.engine.instructions().len());
        check_invariants(&record);
    }
}

#[test]
fn test_invariants_hold_when_the_cycle_cap_cuts_a_run_short() {
    let mut config = Config::default();
    config.pipeline.max_cycles = 20;
    let record =
        harness::record_with("FDIV R1 R2 R3\nFDIV R4 R1 R5\nFDIV R6 R4 R7", &config);

    assert!(record.engine.timed_out());
    assert_eq!(record.engine.cycle(), 20);
    assert!(record.engine.completed() < 3);
    // Unfinished slots keep an unset completion cycle.
    assert!(record
        .engine
        .slots()
        .iter()
        .any(|slot| slot.complete_cycle.is_none()));
    check_invariants(&record);
}

#[test]
fn test_shrunken_pool_still_preserves_invariants() {
    let mut config = Config::default();
    config.pipeline.alu_units = 1;
    let record = harness::record_with(
        "ADD R1 R2 R3\nSUB R4 R5 R6\nMUL R7 R8 R9\nDIV R10 R11 R12",
        &config,
    );
    assert_eq!(record.engine.completed(), 4);
    check_invariants(&record);

    // With a single ALU, issue cycles are strictly ordered.
    let issues: Vec<u64> = record
        .engine
        .slots()
        .iter()
        .map(|s| s.issue_cycle.unwrap())
        .collect();
    assert!(issues.windows(2).all(|w| w[0] < w[1]));
}
