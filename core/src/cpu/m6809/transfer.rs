use super::{M6809, Register};

impl M6809 {
    // TFR/EXG postbyte: high nibble = source (R1), low nibble = dest (R2).
    // 0=D, 1=X, 2=Y, 3=U, 4=S, 5=PC, 8=A, 9=B, 10=CC, 11=DP

    /// Undefined nibbles read as all ones and swallow writes.
    fn nibble_value(&self, nibble: u8) -> u16 {
        match Register::from_nibble(nibble) {
            Some(reg) => self.reg(reg),
            None if nibble < 8 => 0xFFFF,
            None => 0xFF,
        }
    }

    fn set_nibble_value(&mut self, nibble: u8, value: u16) {
        if let Some(reg) = Register::from_nibble(nibble) {
            self.set_reg(reg, value);
        }
    }

    fn same_width(postbyte: u8) -> bool {
        (postbyte >> 4 < 8) == (postbyte & 0x0F < 8)
    }

    /// TFR (0x1F): copy R1 into R2. Mismatched widths leave both untouched.
    pub(crate) fn transfer(&mut self, postbyte: u8) {
        if Self::same_width(postbyte) {
            let value = self.nibble_value(postbyte >> 4);
            self.set_nibble_value(postbyte & 0x0F, value);
        }
    }

    /// EXG (0x1E): swap R1 and R2. Mismatched widths leave both untouched.
    pub(crate) fn exchange(&mut self, postbyte: u8) {
        if Self::same_width(postbyte) {
            let (r1, r2) = (postbyte >> 4, postbyte & 0x0F);
            let v1 = self.nibble_value(r1);
            let v2 = self.nibble_value(r2);
            self.set_nibble_value(r1, v2);
            self.set_nibble_value(r2, v1);
        }
    }
}
