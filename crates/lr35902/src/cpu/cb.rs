use super::{ArithmeticTarget, BitIndex, Cpu, Quirks};

/// Rotate and shift variants that share the same flag handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Shift {
    /// Rotate left through carry.
    Rl,
    /// Rotate right through carry.
    Rr,
    Rlc,
    Rrc,
    Sla,
    Sra,
    Sll,
    Srl,
    Swap,
}

impl Cpu {
    /// Apply a rotate/shift to `target` and update the flags.
    ///
    /// Z reflects the result. N and H are cleared; C receives the evicted
    /// bit.
    pub(super) fn cb_shift(&mut self, shift: Shift, target: ArithmeticTarget) {
        let carry_flag = self.regs.f.carry;
        let quirks = self.config.quirks;
        let register = self.regs.get_mut(target);
        let value = *register;

        let (result, carry) = match shift {
            Shift::Rl => ((value << 1) | u8::from(carry_flag), value & 0x80 != 0),
            Shift::Rr => (
                (value >> 1) | if carry_flag { 0x80 } else { 0 },
                value & 0x01 != 0,
            ),
            Shift::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            Shift::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            Shift::Sla => match quirks {
                // Bit 0 is refilled from the old bit 0.
                Quirks::Keep => ((value << 1) | (value & 0x01), value & 0x80 != 0),
                Quirks::Hardware => (value << 1, value & 0x80 != 0),
            },
            Shift::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            Shift::Sll => (value << 1, value & 0x80 != 0),
            Shift::Srl => (value >> 1, value & 0x01 != 0),
            Shift::Swap => (value.rotate_left(4), false),
        };

        *register = result;

        let f = &mut self.regs.f;
        f.zero = result == 0;
        f.subtract = false;
        f.half_carry = false;
        f.carry = carry;
    }

    /// RLA/RRA/RLCA/RRCA: the shift applied to A. Hardware quirks clear Z
    /// instead of deriving it from the result.
    pub(super) fn rotate_a(&mut self, shift: Shift) {
        self.cb_shift(shift, ArithmeticTarget::A);
        if self.config.quirks == Quirks::Hardware {
            self.regs.f.zero = false;
        }
    }

    /// BIT n, r: Z is set when the bit is clear. H=1, N=0, C preserved.
    pub(super) fn cb_bit(&mut self, bit: BitIndex, target: ArithmeticTarget) {
        let bit_set = self.regs.get(target) & bit.mask() != 0;
        self.regs.f.zero = !bit_set;
        self.regs.f.subtract = false;
        self.regs.f.half_carry = true;
    }

    /// RES n, r. Flags are untouched.
    pub(super) fn cb_reset(&mut self, bit: BitIndex, target: ArithmeticTarget) {
        *self.regs.get_mut(target) &= !bit.mask();
    }

    /// SET n, r. Flags are untouched.
    pub(super) fn cb_set(&mut self, bit: BitIndex, target: ArithmeticTarget) {
        *self.regs.get_mut(target) |= bit.mask();
    }
}
