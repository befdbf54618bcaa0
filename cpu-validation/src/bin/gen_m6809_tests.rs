use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use dragon_core::cpu::m6809::opcodes::{self, Instruction};
use dragon_core::cpu::M6809;
use dragon_cpu_validation::{BusCycle, CpuState, TestCase, TracingBus};
use rand::Rng;

const NUM_TESTS: usize = 1000;
// Longest instruction is prefix + opcode + postbyte + 2 offset bytes.
const MAX_PC: u16 = 0xFFF0;

fn build_ram(memory: &[u8; 0x10000], addresses: &BTreeSet<u16>) -> Vec<(u16, u8)> {
    addresses
        .iter()
        .map(|&addr| (addr, memory[addr as usize]))
        .collect()
}

/// Instruction bytes: the run of sequential reads starting at the opcode.
fn instruction_bytes(pc: u16, cycles: &[BusCycle]) -> Vec<u8> {
    cycles
        .iter()
        .enumerate()
        .take_while(|(i, c)| c.addr == pc.wrapping_add(*i as u16))
        .map(|(_, c)| c.data)
        .collect()
}

/// Generate NUM_TESTS randomized test vectors for a single opcode.
///
/// Random operand bytes can form undefined indexed postbytes; those draws
/// are discarded and retried.
fn generate_opcode(rng: &mut impl Rng, code: u16, instruction: &Instruction) -> Vec<TestCase> {
    let mut tests = Vec::with_capacity(NUM_TESTS);
    let prefix = (code >> 8) as u8;

    while tests.len() < NUM_TESTS {
        let mut cpu = M6809::new();
        let mut bus = TracingBus::new();

        // Fill entire 64KB with random data
        rng.fill(&mut bus.memory[..]);

        cpu.a = rng.r#gen();
        cpu.b = rng.r#gen();
        cpu.dp = rng.r#gen();
        cpu.x = rng.r#gen();
        cpu.y = rng.r#gen();
        cpu.u = rng.r#gen();
        cpu.s = rng.r#gen();
        cpu.cc = rng.r#gen::<u8>().into();
        cpu.pc = rng.gen_range(0..=MAX_PC);

        // Place opcode (and prefix); operand bytes are already random
        let pc = cpu.pc;
        if prefix != 0 {
            bus.memory[pc as usize] = prefix;
            bus.memory[pc as usize + 1] = code as u8;
        } else {
            bus.memory[pc as usize] = code as u8;
        }

        let pre_memory = bus.memory;
        let mut initial = CpuState::capture(&cpu);

        let Ok(total_cycles) = cpu.step(&mut bus) else {
            continue;
        };

        let mut final_state = CpuState::capture(&cpu);

        let addresses: BTreeSet<u16> = bus.cycles.iter().map(|c| c.addr).collect();
        initial.ram = build_ram(&pre_memory, &addresses);
        final_state.ram = build_ram(&bus.memory, &addresses);

        let cycles: Vec<(u16, u8, String)> = bus
            .cycles
            .iter()
            .map(|c| (c.addr, c.data, c.op.as_str().to_string()))
            .collect();

        let name = instruction_bytes(pc, &bus.cycles)
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(" ");

        tests.push(TestCase {
            name: format!("{} {name}", instruction.mnemonic),
            initial,
            final_state,
            total_cycles,
            cycles,
        });
    }

    tests
}

fn file_name(code: u16) -> String {
    if code > 0xFF {
        format!("{code:04x}.json")
    } else {
        format!("{code:02x}.json")
    }
}

fn generate_and_write(rng: &mut impl Rng, code: u16, instruction: &Instruction, out_dir: &Path) {
    let tests = generate_opcode(rng, code, instruction);
    let out_path = out_dir.join(file_name(code));
    let json = serde_json::to_string_pretty(&tests).expect("Failed to serialize test cases");
    fs::write(&out_path, json).expect("Failed to write output file");
    println!(
        "Generated {} tests for 0x{:02X} {} -> {}",
        tests.len(),
        code,
        instruction.mnemonic,
        out_path.display()
    );
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: gen_m6809_tests <opcode_hex | all>");
        eprintln!("Examples:");
        eprintln!("  gen_m6809_tests 0x49");
        eprintln!("  gen_m6809_tests 0x108e");
        eprintln!("  gen_m6809_tests all");
        std::process::exit(1);
    }

    let out_dir = Path::new("test_data/m6809");
    fs::create_dir_all(out_dir).expect("Failed to create output directory");

    let mut rng = rand::thread_rng();

    if args[1] == "all" {
        let mut count = 0;
        for (code, instruction) in opcodes::all() {
            generate_and_write(&mut rng, code, instruction, out_dir);
            count += 1;
        }
        println!("Generated tests for {} opcodes", count);
    } else {
        let opcode_str = args[1].trim_start_matches("0x").trim_start_matches("0X");
        let code = u16::from_str_radix(opcode_str, 16).unwrap_or_else(|_| {
            eprintln!("Invalid hex opcode: {}", args[1]);
            std::process::exit(1);
        });
        let instruction = opcodes::all()
            .find(|&(c, _)| c == code)
            .map(|(_, instruction)| instruction)
            .unwrap_or_else(|| {
                eprintln!("Opcode 0x{:02X} is not in the opcode table", code);
                std::process::exit(1);
            });
        generate_and_write(&mut rng, code, instruction, out_dir);
    }
}
