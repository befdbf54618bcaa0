use std::path::{Path, PathBuf};

use dragon_core::cpu::M6809;
use dragon_cpu_validation::{CpuState, TestCase, TracingBus, is_vector_file, load_vectors};

fn run_test_case(tc: &TestCase) {
    let mut cpu = M6809::new();
    let mut bus = TracingBus::new();
    tc.initial.apply(&mut cpu, &mut bus.memory);

    let total_cycles = cpu
        .step(&mut bus)
        .unwrap_or_else(|e| panic!("{}: {e}", tc.name));

    // Assert registers
    let actual = CpuState {
        ram: Vec::new(),
        ..CpuState::capture(&cpu)
    };
    let expected = CpuState {
        ram: Vec::new(),
        ..tc.final_state.clone()
    };
    assert_eq!(actual, expected, "{}: registers", tc.name);

    // Assert memory
    for &(addr, expected) in &tc.final_state.ram {
        assert_eq!(
            bus.memory[addr as usize], expected,
            "{}: RAM[0x{:04X}]",
            tc.name, addr
        );
    }

    assert_eq!(total_cycles, tc.total_cycles, "{}: cycles", tc.name);

    // Bus accesses, when the vector lists them
    if tc.cycles.is_empty() {
        return;
    }
    assert_eq!(
        bus.cycles.len(),
        tc.cycles.len(),
        "{}: bus cycle count (got {} expected {})",
        tc.name,
        bus.cycles.len(),
        tc.cycles.len()
    );
    for (idx, (actual, (exp_addr, exp_data, exp_op))) in
        bus.cycles.iter().zip(&tc.cycles).enumerate()
    {
        assert_eq!(actual.addr, *exp_addr, "{}: bus {} addr", tc.name, idx);
        assert_eq!(actual.data, *exp_data, "{}: bus {} data", tc.name, idx);
        assert_eq!(actual.op.as_str(), exp_op.as_str(), "{}: bus {} op", tc.name, idx);
    }
}

#[test]
fn test_fixture_vectors() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/m6809_fixture.json");
    let tests = load_vectors(&path).expect("fixture parses");
    assert_eq!(tests.len(), 5);
    for tc in &tests {
        run_test_case(tc);
    }
}

/// Replays generated vectors when present (see the gen_m6809_tests binary).
#[test]
fn test_generated_vectors() {
    let test_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/m6809");
    let Ok(entries) = std::fs::read_dir(&test_dir) else {
        eprintln!(
            "No generated vectors. Run: cargo run -p dragon-cpu-validation --bin gen_m6809_tests -- all"
        );
        return;
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| Some(entry.ok()?.path()))
        .filter(|path| is_vector_file(path))
        .collect();
    files.sort();

    let mut total_tests = 0;
    for path in &files {
        let tests = load_vectors(path).unwrap_or_else(|e| panic!("{path:?}: {e}"));
        for tc in &tests {
            run_test_case(tc);
        }
        total_tests += tests.len();
    }

    eprintln!(
        "Validated {} tests across {} opcode files",
        total_tests,
        files.len()
    );
}
