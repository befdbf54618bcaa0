//! Single-operand family: NEG, COM, INC, DEC, TST, CLR.

use super::{AluResult, FlagUpdate};

/// NEG: two's complement, 0 - M.
/// V set only for 0x80 (-128 has no positive counterpart). C set unless M is 0.
#[inline]
pub fn neg(value: u8) -> AluResult<u8> {
    let result = 0u8.wrapping_sub(value);
    AluResult::new(
        result,
        FlagUpdate::nz8(result)
            .with_v(value == 0x80)
            .with_c(value != 0),
    )
}

/// COM: one's complement. V cleared, C set.
#[inline]
pub fn com(value: u8) -> AluResult<u8> {
    let result = !value;
    AluResult::new(result, FlagUpdate::nz8(result).with_v(false).with_c(true))
}

/// INC: V set on 0x7F -> 0x80. C unaffected.
#[inline]
pub fn inc(value: u8) -> AluResult<u8> {
    let result = value.wrapping_add(1);
    AluResult::new(result, FlagUpdate::nz8(result).with_v(value == 0x7F))
}

/// DEC: V set on 0x80 -> 0x7F. C unaffected.
#[inline]
pub fn dec(value: u8) -> AluResult<u8> {
    let result = value.wrapping_sub(1);
    AluResult::new(result, FlagUpdate::nz8(result).with_v(value == 0x80))
}

/// TST: N, Z from the operand, V cleared, C unaffected.
///
/// 8-bit loads and stores derive their flags the same way.
#[inline]
pub fn tst(value: u8) -> FlagUpdate {
    FlagUpdate::nz8(value).with_v(false)
}

/// CLR: always N=0 Z=1 V=0 C=0.
#[inline]
pub fn clr() -> AluResult<u8> {
    AluResult::new(0, FlagUpdate::nz8(0).with_v(false).with_c(false))
}
