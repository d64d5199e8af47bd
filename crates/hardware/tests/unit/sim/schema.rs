//! Canonical JSON schema tests.
//!
//! External tooling consumes the serialized `SimResult`; these tests pin
//! the field names and shape: camelCase statistics keys, uppercase stage
//! keys, and `instruction`/`reason` stall records.

use serde_json::Value;

use crate::common::program;

fn result_json(src: &str) -> Value {
    serde_json::to_value(program::run(src)).unwrap()
}

#[test]
fn test_stats_keys_are_camel_case() {
    let json = result_json("ADD R1 R2 R3");
    let stats = &json["stats"];
    for key in [
        "totalCycles",
        "instructionsCompleted",
        "ipc",
        "totalStalls",
        "rawHazards",
        "warHazards",
        "wawHazards",
        "structuralHazards",
        "branchMispredictions",
    ] {
        assert!(stats.get(key).is_some(), "missing stats key {key}");
    }
    assert_eq!(stats["warHazards"], 0);
    assert_eq!(stats["wawHazards"], 0);
    assert_eq!(stats["branchMispredictions"], 0);
}

#[test]
fn test_cycles_carry_uppercase_stage_keys() {
    let json = result_json("ADD R1 R2 R3\nSUB R4 R5 R6");
    let cycles = json["cycles"].as_array().unwrap();
    assert_eq!(cycles.len() as u64, json["stats"]["totalCycles"].as_u64().unwrap());

    let first = &cycles[0];
    assert_eq!(first["cycle"], 1);
    for key in ["FETCH", "DECODE", "ISSUE", "EXECUTE", "WRITEBACK"] {
        assert!(first["stages"].get(key).is_some(), "missing stage key {key}");
    }
    assert_eq!(
        first["stages"]["FETCH"],
        serde_json::json!(["ADD R1 R2 R3", "SUB R4 R5 R6"])
    );
}

#[test]
fn test_stall_records_carry_instruction_and_reason() {
    let json = result_json("ADD R1 R2 R3\nADD R4 R1 R5");
    let cycles = json["cycles"].as_array().unwrap();
    let stall = cycles
        .iter()
        .flat_map(|c| c["stalls"].as_array().unwrap())
        .next()
        .expect("dependent pair must stall at least once");
    assert_eq!(stall["instruction"], "ADD R4 R1 R5");
    assert_eq!(stall["reason"], "RAW on R1 (writer: I1)");
}
