//! Pure ALU and flag derivation.
//!
//! Every function takes its operand(s) already wrapped to the operation width
//! and returns the result together with a [`FlagUpdate`] naming exactly the
//! flags the instruction affects. Nothing here touches CPU state; the
//! execution engine writes the value back and applies the update.

pub mod binary;
pub mod shift;
pub mod unary;
pub mod word;

/// Condition-code changes produced by one ALU operation.
///
/// `Some(bit)` overwrites the flag, `None` leaves it unchanged. Only the
/// arithmetic flags appear here; no ALU operation writes E, F or I.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FlagUpdate {
    pub h: Option<bool>,
    pub n: Option<bool>,
    pub z: Option<bool>,
    pub v: Option<bool>,
    pub c: Option<bool>,
}

impl FlagUpdate {
    pub const NONE: Self = Self {
        h: None,
        n: None,
        z: None,
        v: None,
        c: None,
    };

    /// N and Z from an 8-bit result.
    #[inline]
    pub const fn nz8(result: u8) -> Self {
        Self {
            n: Some(result & 0x80 != 0),
            z: Some(result == 0),
            ..Self::NONE
        }
    }

    /// N and Z from a 16-bit result.
    #[inline]
    pub const fn nz16(result: u16) -> Self {
        Self {
            n: Some(result & 0x8000 != 0),
            z: Some(result == 0),
            ..Self::NONE
        }
    }

    #[inline]
    pub const fn with_h(self, h: bool) -> Self {
        Self { h: Some(h), ..self }
    }

    #[inline]
    pub const fn with_v(self, v: bool) -> Self {
        Self { v: Some(v), ..self }
    }

    #[inline]
    pub const fn with_c(self, c: bool) -> Self {
        Self { c: Some(c), ..self }
    }
}

/// A result value plus the flags the operation produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AluResult<T> {
    pub value: T,
    pub flags: FlagUpdate,
}

impl<T> AluResult<T> {
    #[inline]
    pub const fn new(value: T, flags: FlagUpdate) -> Self {
        Self { value, flags }
    }
}
