use super::{ConditionCodes, M6809};

/// Short-branch conditions, in opcode order (0x20 BRA .. 0x2F BLE).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Condition {
    Always,
    Never,
    /// Unsigned >: C=0 and Z=0
    Hi,
    /// Unsigned <=: C=1 or Z=1
    Ls,
    /// BCC / BHS
    CarryClear,
    /// BCS / BLO
    CarrySet,
    Ne,
    Eq,
    OverflowClear,
    OverflowSet,
    Pl,
    Mi,
    /// Signed >=: N = V
    Ge,
    /// Signed <: N != V
    Lt,
    /// Signed >: Z=0 and N = V
    Gt,
    /// Signed <=: Z=1 or N != V
    Le,
}

impl Condition {
    pub fn holds(self, cc: &ConditionCodes) -> bool {
        match self {
            Condition::Always => true,
            Condition::Never => false,
            Condition::Hi => !cc.c && !cc.z,
            Condition::Ls => cc.c || cc.z,
            Condition::CarryClear => !cc.c,
            Condition::CarrySet => cc.c,
            Condition::Ne => !cc.z,
            Condition::Eq => cc.z,
            Condition::OverflowClear => !cc.v,
            Condition::OverflowSet => cc.v,
            Condition::Pl => !cc.n,
            Condition::Mi => cc.n,
            Condition::Ge => cc.n == cc.v,
            Condition::Lt => cc.n != cc.v,
            Condition::Gt => !cc.z && cc.n == cc.v,
            Condition::Le => cc.z || cc.n != cc.v,
        }
    }
}

impl M6809 {
    /// Take the branch to `target` if `condition` holds; PC already points
    /// past the offset byte otherwise.
    pub(crate) fn branch(&mut self, condition: Condition, target: u16) {
        if condition.holds(&self.cc) {
            self.pc = target;
        }
    }
}
