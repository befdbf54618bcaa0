//! Shift and rotate family. None of these touch H.

use super::{AluResult, FlagUpdate};

/// Left shifts overflow when the sign bit changes: bit 6 XOR bit 7 of the
/// operand before the shift.
#[inline]
fn left_shift_overflow(value: u8) -> bool {
    ((value >> 6) ^ (value >> 7)) & 0x01 != 0
}

/// LSR: logical shift right. 0 enters bit 7, bit 0 goes to C.
/// N, Z from the result. V forced clear.
#[inline]
pub fn lsr(value: u8) -> AluResult<u8> {
    let result = value >> 1;
    AluResult::new(
        result,
        FlagUpdate::nz8(result)
            .with_v(false)
            .with_c(value & 0x01 != 0),
    )
}

/// ASR: arithmetic shift right. Bit 7 is replicated, bit 0 goes to C.
/// N, Z from the result. V forced clear.
#[inline]
pub fn asr(value: u8) -> AluResult<u8> {
    let result = ((value as i8) >> 1) as u8;
    AluResult::new(
        result,
        FlagUpdate::nz8(result)
            .with_v(false)
            .with_c(value & 0x01 != 0),
    )
}

/// ASL/LSL: shift left, 0 enters bit 0, bit 7 goes to C.
/// V = bit 6 XOR bit 7 of the operand.
#[inline]
pub fn asl(value: u8) -> AluResult<u8> {
    let result = value << 1;
    AluResult::new(
        result,
        FlagUpdate::nz8(result)
            .with_v(left_shift_overflow(value))
            .with_c(value & 0x80 != 0),
    )
}

/// ROL: rotate left through carry. `carry_in` enters bit 0, bit 7 goes to C.
/// V = bit 6 XOR bit 7 of the operand.
#[inline]
pub fn rol(value: u8, carry_in: bool) -> AluResult<u8> {
    let result = (value << 1) | carry_in as u8;
    AluResult::new(
        result,
        FlagUpdate::nz8(result)
            .with_v(left_shift_overflow(value))
            .with_c(value & 0x80 != 0),
    )
}

/// ROR: rotate right through carry. `carry_in` enters bit 7, bit 0 goes to C.
/// V unaffected.
#[inline]
pub fn ror(value: u8, carry_in: bool) -> AluResult<u8> {
    let result = (value >> 1) | ((carry_in as u8) << 7);
    AluResult::new(result, FlagUpdate::nz8(result).with_c(value & 0x01 != 0))
}
