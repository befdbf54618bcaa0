//! Opcode table: one flat array per opcode page, built at compile time.
//!
//! Each entry is a tagged descriptor (operation, addressing mode, base
//! cycle cost). Bytes with no entry are invalid opcodes.

use super::Register;
use super::addressing::Mode;
use super::branch::Condition;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Op {
    // Read-modify-write on a byte operand (register or memory)
    Neg,
    Com,
    Lsr,
    Ror,
    Asr,
    Asl,
    Rol,
    Dec,
    Inc,
    Tst,
    Clr,

    // Accumulator op memory
    Sub(Register),
    Cmp(Register),
    Sbc(Register),
    And(Register),
    Bit(Register),
    Ld(Register),
    St(Register),
    Eor(Register),
    Adc(Register),
    Or(Register),
    Add(Register),

    // 16-bit
    Subd,
    Addd,
    Cmp16(Register),
    Ld16(Register),
    St16(Register),
    Lea(Register),

    Jmp,
    Branch(Condition),

    Nop,
    Sex,
    Abx,
    Mul,
    Orcc,
    Andcc,
    Exg,
    Tfr,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub op: Op,
    pub mode: Mode,
    /// Register operated on by inherent-mode instructions (NEGA, ROLB, ...).
    pub register: Option<Register>,
    /// Base cycle cost, prefix byte included. Indexed forms add the
    /// postbyte-dependent extra on top.
    pub cycles: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Page {
    One,
    /// 0x10 prefix
    Two,
    /// 0x11 prefix
    Three,
}

impl Page {
    pub fn from_prefix(byte: u8) -> Option<Page> {
        match byte {
            0x10 => Some(Page::Two),
            0x11 => Some(Page::Three),
            _ => None,
        }
    }

    /// Full opcode as reported in errors and test vector names.
    pub fn encode(self, opcode: u8) -> u16 {
        match self {
            Page::One => opcode as u16,
            Page::Two => 0x1000 | opcode as u16,
            Page::Three => 0x1100 | opcode as u16,
        }
    }
}

pub fn lookup(page: Page, opcode: u8) -> Option<&'static Instruction> {
    let table = match page {
        Page::One => &PAGE1,
        Page::Two => &PAGE2,
        Page::Three => &PAGE3,
    };
    table[opcode as usize].as_ref()
}

/// Every defined instruction, keyed by its full opcode.
pub fn all() -> impl Iterator<Item = (u16, &'static Instruction)> {
    [Page::One, Page::Two, Page::Three]
        .into_iter()
        .flat_map(|page| {
            (0..=0xFFu8).filter_map(move |opcode| {
                lookup(page, opcode).map(|instruction| (page.encode(opcode), instruction))
            })
        })
}

type Table = [Option<Instruction>; 256];

static PAGE1: Table = build_page1();
static PAGE2: Table = build_page2();
static PAGE3: Table = build_page3();

const fn entry(mnemonic: &'static str, op: Op, mode: Mode, cycles: u8) -> Option<Instruction> {
    Some(Instruction {
        mnemonic,
        op,
        mode,
        register: None,
        cycles,
    })
}

const fn on_register(
    mnemonic: &'static str,
    op: Op,
    register: Register,
    cycles: u8,
) -> Option<Instruction> {
    Some(Instruction {
        mnemonic,
        op,
        mode: Mode::Inherent,
        register: Some(register),
        cycles,
    })
}

// Read-modify-write rows: low nibble, operation, A form, B form, memory form.
// The same low nibble is used in the 0x0_ (direct), 0x4_ (A), 0x5_ (B),
// 0x6_ (indexed) and 0x7_ (extended) rows.
const RMW: [(usize, Op, &str, &str, &str); 11] = [
    (0x0, Op::Neg, "NEGA", "NEGB", "NEG"),
    (0x3, Op::Com, "COMA", "COMB", "COM"),
    (0x4, Op::Lsr, "LSRA", "LSRB", "LSR"),
    (0x6, Op::Ror, "RORA", "RORB", "ROR"),
    (0x7, Op::Asr, "ASRA", "ASRB", "ASR"),
    (0x8, Op::Asl, "ASLA", "ASLB", "ASL"),
    (0x9, Op::Rol, "ROLA", "ROLB", "ROL"),
    (0xA, Op::Dec, "DECA", "DECB", "DEC"),
    (0xC, Op::Inc, "INCA", "INCB", "INC"),
    (0xD, Op::Tst, "TSTA", "TSTB", "TST"),
    (0xF, Op::Clr, "CLRA", "CLRB", "CLR"),
];

#[derive(Copy, Clone)]
enum Alu8 {
    Sub,
    Cmp,
    Sbc,
    And,
    Bit,
    Ld,
    St,
    Eor,
    Adc,
    Or,
    Add,
}

const fn alu8(kind: Alu8, reg: Register) -> Op {
    match kind {
        Alu8::Sub => Op::Sub(reg),
        Alu8::Cmp => Op::Cmp(reg),
        Alu8::Sbc => Op::Sbc(reg),
        Alu8::And => Op::And(reg),
        Alu8::Bit => Op::Bit(reg),
        Alu8::Ld => Op::Ld(reg),
        Alu8::St => Op::St(reg),
        Alu8::Eor => Op::Eor(reg),
        Alu8::Adc => Op::Adc(reg),
        Alu8::Or => Op::Or(reg),
        Alu8::Add => Op::Add(reg),
    }
}

// 8-bit accumulator rows: low nibble within 0x8_-0xB_ (A) and 0xC_-0xF_ (B).
const ALU8: [(usize, Alu8, &str, &str); 11] = [
    (0x0, Alu8::Sub, "SUBA", "SUBB"),
    (0x1, Alu8::Cmp, "CMPA", "CMPB"),
    (0x2, Alu8::Sbc, "SBCA", "SBCB"),
    (0x4, Alu8::And, "ANDA", "ANDB"),
    (0x5, Alu8::Bit, "BITA", "BITB"),
    (0x6, Alu8::Ld, "LDA", "LDB"),
    (0x7, Alu8::St, "STA", "STB"),
    (0x8, Alu8::Eor, "EORA", "EORB"),
    (0x9, Alu8::Adc, "ADCA", "ADCB"),
    (0xA, Alu8::Or, "ORA", "ORB"),
    (0xB, Alu8::Add, "ADDA", "ADDB"),
];

const BRANCHES: [(&str, Condition); 16] = [
    ("BRA", Condition::Always),
    ("BRN", Condition::Never),
    ("BHI", Condition::Hi),
    ("BLS", Condition::Ls),
    ("BCC", Condition::CarryClear),
    ("BCS", Condition::CarrySet),
    ("BNE", Condition::Ne),
    ("BEQ", Condition::Eq),
    ("BVC", Condition::OverflowClear),
    ("BVS", Condition::OverflowSet),
    ("BPL", Condition::Pl),
    ("BMI", Condition::Mi),
    ("BGE", Condition::Ge),
    ("BLT", Condition::Lt),
    ("BGT", Condition::Gt),
    ("BLE", Condition::Le),
];

/// Fill the immediate/direct/indexed/extended column of a 16-bit operation.
/// `cycles` is [immediate, direct, indexed, extended]; stores have no
/// immediate form.
const fn word_row(
    table: &mut Table,
    base: usize,
    mnemonic: &'static str,
    op: Op,
    cycles: [u8; 4],
    immediate: bool,
) {
    if immediate {
        table[base] = entry(mnemonic, op, Mode::Immediate16, cycles[0]);
    }
    table[base + 0x10] = entry(mnemonic, op, Mode::Direct, cycles[1]);
    table[base + 0x20] = entry(mnemonic, op, Mode::Indexed, cycles[2]);
    table[base + 0x30] = entry(mnemonic, op, Mode::Extended, cycles[3]);
}

const fn build_page1() -> Table {
    let mut t: Table = [None; 256];

    let mut i = 0;
    while i < RMW.len() {
        let (low, op, name_a, name_b, name_mem) = RMW[i];
        t[0x40 | low] = on_register(name_a, op, Register::A, 2);
        t[0x50 | low] = on_register(name_b, op, Register::B, 2);
        t[low] = entry(name_mem, op, Mode::Direct, 6);
        t[0x60 | low] = entry(name_mem, op, Mode::Indexed, 6);
        t[0x70 | low] = entry(name_mem, op, Mode::Extended, 7);
        i += 1;
    }

    let mut i = 0;
    while i < ALU8.len() {
        let (low, kind, name_a, name_b) = ALU8[i];
        let (op_a, op_b) = (alu8(kind, Register::A), alu8(kind, Register::B));
        if !matches!(kind, Alu8::St) {
            t[0x80 | low] = entry(name_a, op_a, Mode::Immediate8, 2);
            t[0xC0 | low] = entry(name_b, op_b, Mode::Immediate8, 2);
        }
        t[0x90 | low] = entry(name_a, op_a, Mode::Direct, 4);
        t[0xA0 | low] = entry(name_a, op_a, Mode::Indexed, 4);
        t[0xB0 | low] = entry(name_a, op_a, Mode::Extended, 5);
        t[0xD0 | low] = entry(name_b, op_b, Mode::Direct, 4);
        t[0xE0 | low] = entry(name_b, op_b, Mode::Indexed, 4);
        t[0xF0 | low] = entry(name_b, op_b, Mode::Extended, 5);
        i += 1;
    }

    word_row(&mut t, 0x83, "SUBD", Op::Subd, [4, 6, 6, 7], true);
    word_row(&mut t, 0xC3, "ADDD", Op::Addd, [4, 6, 6, 7], true);
    word_row(&mut t, 0x8C, "CMPX", Op::Cmp16(Register::X), [4, 6, 6, 7], true);
    word_row(&mut t, 0x8E, "LDX", Op::Ld16(Register::X), [3, 5, 5, 6], true);
    word_row(&mut t, 0x8F, "STX", Op::St16(Register::X), [0, 5, 5, 6], false);
    word_row(&mut t, 0xCC, "LDD", Op::Ld16(Register::D), [3, 5, 5, 6], true);
    word_row(&mut t, 0xCD, "STD", Op::St16(Register::D), [0, 5, 5, 6], false);
    word_row(&mut t, 0xCE, "LDU", Op::Ld16(Register::U), [3, 5, 5, 6], true);
    word_row(&mut t, 0xCF, "STU", Op::St16(Register::U), [0, 5, 5, 6], false);

    t[0x0E] = entry("JMP", Op::Jmp, Mode::Direct, 3);
    t[0x6E] = entry("JMP", Op::Jmp, Mode::Indexed, 3);
    t[0x7E] = entry("JMP", Op::Jmp, Mode::Extended, 4);

    let mut i = 0;
    while i < BRANCHES.len() {
        let (name, condition) = BRANCHES[i];
        t[0x20 + i] = entry(name, Op::Branch(condition), Mode::Relative, 3);
        i += 1;
    }

    t[0x12] = entry("NOP", Op::Nop, Mode::Inherent, 2);
    t[0x1A] = entry("ORCC", Op::Orcc, Mode::Immediate8, 3);
    t[0x1C] = entry("ANDCC", Op::Andcc, Mode::Immediate8, 3);
    t[0x1D] = entry("SEX", Op::Sex, Mode::Inherent, 2);
    t[0x1E] = entry("EXG", Op::Exg, Mode::Immediate8, 8);
    t[0x1F] = entry("TFR", Op::Tfr, Mode::Immediate8, 6);
    t[0x30] = entry("LEAX", Op::Lea(Register::X), Mode::Indexed, 4);
    t[0x31] = entry("LEAY", Op::Lea(Register::Y), Mode::Indexed, 4);
    t[0x32] = entry("LEAS", Op::Lea(Register::S), Mode::Indexed, 4);
    t[0x33] = entry("LEAU", Op::Lea(Register::U), Mode::Indexed, 4);
    t[0x3A] = entry("ABX", Op::Abx, Mode::Inherent, 3);
    t[0x3D] = entry("MUL", Op::Mul, Mode::Inherent, 11);

    t
}

const fn build_page2() -> Table {
    let mut t: Table = [None; 256];
    word_row(&mut t, 0x83, "CMPD", Op::Cmp16(Register::D), [5, 7, 7, 8], true);
    word_row(&mut t, 0x8C, "CMPY", Op::Cmp16(Register::Y), [5, 7, 7, 8], true);
    word_row(&mut t, 0x8E, "LDY", Op::Ld16(Register::Y), [4, 6, 6, 7], true);
    word_row(&mut t, 0x8F, "STY", Op::St16(Register::Y), [0, 6, 6, 7], false);
    word_row(&mut t, 0xCE, "LDS", Op::Ld16(Register::S), [4, 6, 6, 7], true);
    word_row(&mut t, 0xCF, "STS", Op::St16(Register::S), [0, 6, 6, 7], false);
    t
}

const fn build_page3() -> Table {
    let mut t: Table = [None; 256];
    word_row(&mut t, 0x83, "CMPU", Op::Cmp16(Register::U), [5, 7, 7, 8], true);
    word_row(&mut t, 0x8C, "CMPS", Op::Cmp16(Register::S), [5, 7, 7, 8], true);
    t
}
