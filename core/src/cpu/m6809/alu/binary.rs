//! Two-operand 8-bit family: accumulator op memory.

use super::{AluResult, FlagUpdate};

/// ADD: A + M. H is the carry out of bit 3.
#[inline]
pub fn add(acc: u8, operand: u8) -> AluResult<u8> {
    adc(acc, operand, false)
}

/// ADC: A + M + C.
/// V set if both operands share a sign the result does not.
#[inline]
pub fn adc(acc: u8, operand: u8, carry_in: bool) -> AluResult<u8> {
    let sum = acc as u16 + operand as u16 + carry_in as u16;
    let result = sum as u8;
    let half_carry = (acc & 0x0F) + (operand & 0x0F) + carry_in as u8 > 0x0F;
    let overflow = (acc ^ operand) & 0x80 == 0 && (acc ^ result) & 0x80 != 0;
    AluResult::new(
        result,
        FlagUpdate::nz8(result)
            .with_h(half_carry)
            .with_v(overflow)
            .with_c(sum > 0xFF),
    )
}

/// SUB: A - M. C is the borrow. H unaffected.
#[inline]
pub fn sub(acc: u8, operand: u8) -> AluResult<u8> {
    sbc(acc, operand, false)
}

/// SBC: A - M - C.
/// V set if the operands differ in sign and the result sign differs from A.
#[inline]
pub fn sbc(acc: u8, operand: u8, borrow_in: bool) -> AluResult<u8> {
    let subtrahend = operand as u16 + borrow_in as u16;
    let result = (acc as u16).wrapping_sub(subtrahend) as u8;
    let borrow = (acc as u16) < subtrahend;
    let overflow = (acc ^ operand) & 0x80 != 0 && (acc ^ result) & 0x80 != 0;
    AluResult::new(
        result,
        FlagUpdate::nz8(result).with_v(overflow).with_c(borrow),
    )
}

/// CMP: flags of A - M, result discarded.
#[inline]
pub fn cmp(acc: u8, operand: u8) -> FlagUpdate {
    sub(acc, operand).flags
}

/// Logical ops clear V and leave C alone.
#[inline]
fn logical(result: u8) -> AluResult<u8> {
    AluResult::new(result, FlagUpdate::nz8(result).with_v(false))
}

#[inline]
pub fn and(acc: u8, operand: u8) -> AluResult<u8> {
    logical(acc & operand)
}

/// BIT: flags of A & M, result discarded.
#[inline]
pub fn bit(acc: u8, operand: u8) -> FlagUpdate {
    and(acc, operand).flags
}

#[inline]
pub fn or(acc: u8, operand: u8) -> AluResult<u8> {
    logical(acc | operand)
}

#[inline]
pub fn eor(acc: u8, operand: u8) -> AluResult<u8> {
    logical(acc ^ operand)
}
