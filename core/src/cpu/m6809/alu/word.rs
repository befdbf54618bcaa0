//! 16-bit family: ADDD, SUBD, CMPr, 16-bit load/store flags, MUL, SEX.

use super::{AluResult, FlagUpdate};

#[inline]
pub fn add16(reg: u16, operand: u16) -> AluResult<u16> {
    let (result, carry) = reg.overflowing_add(operand);
    let overflow = (reg ^ operand) & 0x8000 == 0 && (reg ^ result) & 0x8000 != 0;
    AluResult::new(
        result,
        FlagUpdate::nz16(result).with_v(overflow).with_c(carry),
    )
}

#[inline]
pub fn sub16(reg: u16, operand: u16) -> AluResult<u16> {
    let (result, borrow) = reg.overflowing_sub(operand);
    let overflow = (reg ^ operand) & 0x8000 != 0 && (reg ^ result) & 0x8000 != 0;
    AluResult::new(
        result,
        FlagUpdate::nz16(result).with_v(overflow).with_c(borrow),
    )
}

#[inline]
pub fn cmp16(reg: u16, operand: u16) -> FlagUpdate {
    sub16(reg, operand).flags
}

/// Flags for LDD/LDX/... and STD/STX/...: N, Z from the value, V cleared.
#[inline]
pub fn tst16(value: u16) -> FlagUpdate {
    FlagUpdate::nz16(value).with_v(false)
}

/// MUL: unsigned A * B into D.
/// Z from the 16-bit product, C = bit 7 of the low byte (for rounding).
#[inline]
pub fn mul(a: u8, b: u8) -> AluResult<u16> {
    let product = a as u16 * b as u16;
    AluResult::new(
        product,
        FlagUpdate {
            z: Some(product == 0),
            c: Some(product & 0x0080 != 0),
            ..FlagUpdate::NONE
        },
    )
}

/// SEX: sign-extend B into D. N, Z from D; V and C unaffected.
#[inline]
pub fn sex(b: u8) -> AluResult<u16> {
    let result = b as i8 as i16 as u16;
    AluResult::new(result, FlagUpdate::nz16(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add16_carry_and_overflow() {
        let r = add16(0xFFFF, 0x0001);
        assert_eq!(r.value, 0x0000);
        assert_eq!(r.flags.z, Some(true));
        assert_eq!(r.flags.c, Some(true));
        assert_eq!(r.flags.v, Some(false));

        let r = add16(0x7FFF, 0x0001);
        assert_eq!(r.value, 0x8000);
        assert_eq!(r.flags.v, Some(true));
        assert_eq!(r.flags.n, Some(true));
        assert_eq!(r.flags.h, None);
    }

    #[test]
    fn sub16_borrow_and_overflow() {
        let r = sub16(0x0000, 0x0001);
        assert_eq!(r.value, 0xFFFF);
        assert_eq!(r.flags.c, Some(true));
        assert_eq!(r.flags.v, Some(false));

        let r = sub16(0x8000, 0x0001);
        assert_eq!(r.value, 0x7FFF);
        assert_eq!(r.flags.v, Some(true));
        assert_eq!(r.flags.c, Some(false));

        assert_eq!(cmp16(0x1234, 0x1234).z, Some(true));
    }

    #[test]
    fn mul_carry_is_bit7_of_low_byte() {
        let r = mul(0x0C, 0x10);
        assert_eq!(r.value, 0x00C0);
        assert_eq!(r.flags.c, Some(true));
        assert_eq!(r.flags.z, Some(false));
        assert_eq!(r.flags.n, None);

        let r = mul(0xFF, 0xFF);
        assert_eq!(r.value, 0xFE01);
        assert_eq!(r.flags.c, Some(false));

        assert_eq!(mul(0, 0x80).flags.z, Some(true));
    }

    #[test]
    fn sex_extends_sign() {
        assert_eq!(sex(0x80).value, 0xFF80);
        assert_eq!(sex(0x80).flags.n, Some(true));
        assert_eq!(sex(0x7F).value, 0x007F);
        assert_eq!(sex(0x00).flags.z, Some(true));
        assert_eq!(sex(0x00).flags.v, None);
    }
}
