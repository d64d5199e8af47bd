//! File-based program loading tests.

use std::io::Write;

use pipeline_core::sim::loader;
use tempfile::NamedTempFile;

#[test]
fn test_load_program_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# demo program").unwrap();
    writeln!(file, "LOAD R1 R2").unwrap();
    writeln!(file, "ADD R3 R1 R4").unwrap();
    writeln!(file, "STORE R5 R3").unwrap();
    file.flush().unwrap();

    let program = loader::load_program(file.path()).unwrap();
    assert_eq!(program.len(), 3);
    assert_eq!(program[0].origin, "LOAD R1 R2");
    assert_eq!(program[2].id, 3);
}

#[test]
fn test_load_program_missing_file_is_an_io_error() {
    let missing = std::path::Path::new("/nonexistent/program.txt");
    assert!(loader::load_program(missing).is_err());
}
