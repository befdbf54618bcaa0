use std::fmt;

use super::alu::FlagUpdate;

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CcFlag {
    C = 0x01, // Carry
    V = 0x02, // Overflow
    Z = 0x04, // Zero
    N = 0x08, // Negative
    I = 0x10, // IRQ mask
    H = 0x20, // Half carry
    F = 0x40, // FIRQ mask
    E = 0x80, // Entire
}

/// Register names, numbered with the TFR/EXG postbyte nibble codes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Register {
    D,
    X,
    Y,
    U,
    S,
    Pc,
    A,
    B,
    Cc,
    Dp,
}

impl Register {
    pub const ALL: [Register; 10] = [
        Register::D,
        Register::X,
        Register::Y,
        Register::U,
        Register::S,
        Register::Pc,
        Register::A,
        Register::B,
        Register::Cc,
        Register::Dp,
    ];

    /// Decodes a TFR/EXG nibble. Nibbles 6, 7 and 12-15 name no register.
    pub fn from_nibble(nibble: u8) -> Option<Self> {
        match nibble {
            0 => Some(Register::D),
            1 => Some(Register::X),
            2 => Some(Register::Y),
            3 => Some(Register::U),
            4 => Some(Register::S),
            5 => Some(Register::Pc),
            8 => Some(Register::A),
            9 => Some(Register::B),
            10 => Some(Register::Cc),
            11 => Some(Register::Dp),
            _ => None,
        }
    }

    pub fn nibble(self) -> u8 {
        match self {
            Register::D => 0,
            Register::X => 1,
            Register::Y => 2,
            Register::U => 3,
            Register::S => 4,
            Register::Pc => 5,
            Register::A => 8,
            Register::B => 9,
            Register::Cc => 10,
            Register::Dp => 11,
        }
    }

    pub fn is_16bit(self) -> bool {
        self.nibble() < 8
    }

    pub fn name(self) -> &'static str {
        match self {
            Register::D => "D",
            Register::X => "X",
            Register::Y => "Y",
            Register::U => "U",
            Register::S => "S",
            Register::Pc => "PC",
            Register::A => "A",
            Register::B => "B",
            Register::Cc => "CC",
            Register::Dp => "DP",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The condition-code register as eight independent flags.
///
/// The packed form uses the hardware bit order (C = bit 0 ... E = bit 7),
/// see [`CcFlag`] for the masks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ConditionCodes {
    pub e: bool,
    pub f: bool,
    pub h: bool,
    pub i: bool,
    pub n: bool,
    pub z: bool,
    pub v: bool,
    pub c: bool,
}

impl ConditionCodes {
    pub const fn from_byte(byte: u8) -> Self {
        Self {
            e: byte & CcFlag::E as u8 != 0,
            f: byte & CcFlag::F as u8 != 0,
            h: byte & CcFlag::H as u8 != 0,
            i: byte & CcFlag::I as u8 != 0,
            n: byte & CcFlag::N as u8 != 0,
            z: byte & CcFlag::Z as u8 != 0,
            v: byte & CcFlag::V as u8 != 0,
            c: byte & CcFlag::C as u8 != 0,
        }
    }

    pub const fn to_byte(self) -> u8 {
        (self.e as u8) << 7
            | (self.f as u8) << 6
            | (self.h as u8) << 5
            | (self.i as u8) << 4
            | (self.n as u8) << 3
            | (self.z as u8) << 2
            | (self.v as u8) << 1
            | self.c as u8
    }

    pub fn get(&self, flag: CcFlag) -> bool {
        match flag {
            CcFlag::C => self.c,
            CcFlag::V => self.v,
            CcFlag::Z => self.z,
            CcFlag::N => self.n,
            CcFlag::I => self.i,
            CcFlag::H => self.h,
            CcFlag::F => self.f,
            CcFlag::E => self.e,
        }
    }

    pub fn set(&mut self, flag: CcFlag, value: bool) {
        let slot = match flag {
            CcFlag::C => &mut self.c,
            CcFlag::V => &mut self.v,
            CcFlag::Z => &mut self.z,
            CcFlag::N => &mut self.n,
            CcFlag::I => &mut self.i,
            CcFlag::H => &mut self.h,
            CcFlag::F => &mut self.f,
            CcFlag::E => &mut self.e,
        };
        *slot = value;
    }

    /// Overwrite every flag the update names; leave the rest alone.
    #[inline]
    pub fn apply(&mut self, update: FlagUpdate) {
        if let Some(h) = update.h {
            self.h = h;
        }
        if let Some(n) = update.n {
            self.n = n;
        }
        if let Some(z) = update.z {
            self.z = z;
        }
        if let Some(v) = update.v {
            self.v = v;
        }
        if let Some(c) = update.c {
            self.c = c;
        }
    }
}

impl From<u8> for ConditionCodes {
    fn from(byte: u8) -> Self {
        Self::from_byte(byte)
    }
}

impl From<ConditionCodes> for u8 {
    fn from(cc: ConditionCodes) -> Self {
        cc.to_byte()
    }
}

/// Renders as `EFHINZVC`, with `.` in place of each clear flag.
impl fmt::Display for ConditionCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = [
            (self.e, 'E'),
            (self.f, 'F'),
            (self.h, 'H'),
            (self.i, 'I'),
            (self.n, 'N'),
            (self.z, 'Z'),
            (self.v, 'V'),
            (self.c, 'C'),
        ];
        for (set, name) in bits {
            write!(f, "{}", if set { name } else { '.' })?;
        }
        Ok(())
    }
}
