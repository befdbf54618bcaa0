use dragon_core::cpu::m6809::{CcFlag, ConditionCodes};
use dragon_core::cpu::M6809;
mod common;
use common::{TestBus, run_steps};

#[test]
fn test_negate() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    // LDA #$01, NEGA, LDB #$80, NEGB
    run_steps(&mut cpu, &mut bus, &[0x86, 0x01, 0x40], 2);
    assert_eq!(cpu.a, 0xFF);
    assert!(cpu.cc.n);
    assert!(cpu.cc.c); // borrow
    assert!(!cpu.cc.z);

    run_steps(&mut cpu, &mut bus, &[0xC6, 0x80, 0x50], 2);
    assert_eq!(cpu.b, 0x80);
    assert!(cpu.cc.v);
    assert!(cpu.cc.n);
}

#[test]
fn test_negate_zero() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    cpu.cc = ConditionCodes::from_byte(CcFlag::C as u8);
    run_steps(&mut cpu, &mut bus, &[0x40], 1);
    assert_eq!(cpu.a, 0);
    assert!(cpu.cc.z);
    assert!(!cpu.cc.c);
}

#[test]
fn test_complement() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    // LDA #$AA, COMA
    run_steps(&mut cpu, &mut bus, &[0x86, 0xAA, 0x43], 2);
    assert_eq!(cpu.a, 0x55);
    assert!(cpu.cc.c); // always set
    assert!(!cpu.cc.v); // always clear
    assert!(!cpu.cc.n);
    assert!(!cpu.cc.z);
}

#[test]
fn test_clear() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    cpu.a = 0xFF;
    cpu.cc = ConditionCodes::from_byte(0xFF);
    run_steps(&mut cpu, &mut bus, &[0x4F], 1);
    assert_eq!(cpu.a, 0);
    assert_eq!(cpu.cc.to_byte(), 0xF4); // EFHI kept, Z set, N V C clear
}

#[test]
fn test_increment_decrement_leave_carry() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    cpu.a = 0x7F;
    cpu.b = 0x80;
    cpu.cc = ConditionCodes::from_byte(CcFlag::C as u8);
    // INCA, DECB
    run_steps(&mut cpu, &mut bus, &[0x4C, 0x5A], 2);
    assert_eq!(cpu.a, 0x80);
    assert_eq!(cpu.b, 0x7F);
    assert!(cpu.cc.v); // DECB 0x80 -> 0x7F overflows
    assert!(cpu.cc.c); // untouched
}

#[test]
fn test_test_memory() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    bus.memory[0x2000] = 0x80;
    cpu.cc = ConditionCodes::from_byte(CcFlag::V as u8 | CcFlag::C as u8);
    // TST $2000
    run_steps(&mut cpu, &mut bus, &[0x7D, 0x20, 0x00], 1);
    assert!(cpu.cc.n);
    assert!(!cpu.cc.v);
    assert!(cpu.cc.c);
    assert_eq!(bus.writes, 0);
    assert_eq!(cpu.cycles(), 7);
}

#[test]
fn test_clear_memory_direct() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    cpu.dp = 0x10;
    bus.memory[0x1022] = 0x99;
    // CLR <$22
    run_steps(&mut cpu, &mut bus, &[0x0F, 0x22], 1);
    assert_eq!(bus.memory[0x1022], 0);
    assert!(cpu.cc.z);
}
