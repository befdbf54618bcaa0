use dragon_core::cpu::M6809;
mod common;
use common::{TestBus, run_steps};

#[test]
fn test_tfr_16bit() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    cpu.x = 0x1234;
    // TFR X,Y
    run_steps(&mut cpu, &mut bus, &[0x1F, 0x12], 1);
    assert_eq!(cpu.y, 0x1234);
    assert_eq!(cpu.x, 0x1234);
    assert_eq!(cpu.pc, 2);
    assert_eq!(cpu.cycles(), 6);
}

#[test]
fn test_tfr_into_cc_and_pc() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    cpu.a = 0x0F;
    cpu.set_d(0x0F40);
    // TFR A,CC
    run_steps(&mut cpu, &mut bus, &[0x1F, 0x8A], 1);
    assert_eq!(cpu.cc.to_byte(), 0x0F);

    // TFR D,PC
    run_steps(&mut cpu, &mut bus, &[0x1F, 0x05], 1);
    assert_eq!(cpu.pc, 0x0F40);
}

#[test]
fn test_exg() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    cpu.a = 0x11;
    cpu.b = 0x22;
    cpu.u = 0xAAAA;
    cpu.s = 0xBBBB;
    // EXG A,B ; EXG U,S
    run_steps(&mut cpu, &mut bus, &[0x1E, 0x89, 0x1E, 0x34], 2);
    assert_eq!((cpu.a, cpu.b), (0x22, 0x11));
    assert_eq!((cpu.u, cpu.s), (0xBBBB, 0xAAAA));
    assert_eq!(cpu.cycles(), 16);
}

#[test]
fn test_mismatched_widths_are_ignored() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    cpu.a = 0x12;
    cpu.x = 0x3456;
    // TFR A,X ; EXG X,B
    run_steps(&mut cpu, &mut bus, &[0x1F, 0x81, 0x1E, 0x19], 2);
    assert_eq!(cpu.a, 0x12);
    assert_eq!(cpu.x, 0x3456);
    assert_eq!(cpu.b, 0);
    assert_eq!(cpu.pc, 4);
}

#[test]
fn test_undefined_nibble() {
    let mut cpu = M6809::new();
    let mut bus = TestBus::new();
    cpu.y = 0x0000;
    // TFR 6,Y reads all ones; TFR Y,7 discards
    run_steps(&mut cpu, &mut bus, &[0x1F, 0x62, 0x1F, 0x27], 2);
    assert_eq!(cpu.y, 0xFFFF);
}
