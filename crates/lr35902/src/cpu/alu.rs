use super::{ArithmeticTarget, CarryIn, Cpu, HalfCarrySource, Quirks, Registers};

impl Cpu {
    /// Write all four flags after an 8-bit ALU operation.
    #[inline]
    fn update_flags(&mut self, result: u8, subtract: bool, half_carry: bool, carry: bool) {
        let f = &mut self.regs.f;
        f.zero = result == 0;
        f.subtract = subtract;
        f.half_carry = half_carry;
        f.carry = carry;
    }

    /// Half-carry of `dst + src + carry_in`.
    ///
    /// In `Accumulator` mode the nibble is always taken from A, which still
    /// holds its pre-instruction value when this is called.
    #[inline]
    fn half_carry_add(&self, dst: u8, src: u8, carry_in: u8) -> bool {
        match self.config.half_carry {
            HalfCarrySource::Accumulator => (self.regs.a & 0x0F) + (src & 0x0F) > 0x0F,
            HalfCarrySource::Operand => (dst & 0x0F) + (src & 0x0F) + carry_in > 0x0F,
        }
    }

    /// Half-borrow of `dst - src - carry_in`.
    #[inline]
    fn half_carry_sub(&self, dst: u8, src: u8, carry_in: u8) -> bool {
        match self.config.half_carry {
            HalfCarrySource::Accumulator => (self.regs.a & 0x0F) + (src & 0x0F) > 0x0F,
            HalfCarrySource::Operand => (dst & 0x0F) < (src & 0x0F) + carry_in,
        }
    }

    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let (sum, overflow) = Registers::overflowing_add(a, value);

        let (result, carry, carry_in) = match (use_carry, self.config.carry_in) {
            (false, _) => (sum, overflow, 0),
            (true, CarryIn::OnOverflow) => {
                let carry_in = u8::from(overflow);
                (sum.wrapping_add(carry_in), overflow, carry_in)
            }
            (true, CarryIn::Flag) => {
                let carry_in = u8::from(self.regs.f.carry);
                let (result, second) = Registers::overflowing_add(sum, carry_in);
                (result, overflow || second, carry_in)
            }
        };

        let half = self.half_carry_add(a, value, carry_in);
        self.update_flags(result, false, half, carry);
        self.regs.a = result;
    }

    /// Core 8-bit SUB/SBC operation on A.
    ///
    /// `use_carry` selects between SUB (false) and SBC (true).
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let (difference, borrow) = Registers::overflowing_sub(a, value);

        let (result, carry, carry_in) = match (use_carry, self.config.carry_in) {
            (false, _) => (difference, borrow, 0),
            (true, CarryIn::OnOverflow) => {
                let carry_in = u8::from(borrow);
                (difference.wrapping_sub(carry_in), borrow, carry_in)
            }
            (true, CarryIn::Flag) => {
                let carry_in = u8::from(self.regs.f.carry);
                let (result, second) = Registers::overflowing_sub(difference, carry_in);
                (result, borrow || second, carry_in)
            }
        };

        let half = self.half_carry_sub(a, value, carry_in);
        self.update_flags(result, true, half, carry);
        self.regs.a = result;
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.update_flags(result, false, true, false);
        self.regs.a = result;
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        let half = self.half_carry_logic(value);
        self.update_flags(result, false, half, false);
        self.regs.a = result;
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        let half = self.half_carry_logic(value);
        self.update_flags(result, false, half, false);
        self.regs.a = result;
    }

    /// OR/XOR run through the generic accumulator formula; the hardware
    /// tables clear H instead.
    #[inline]
    fn half_carry_logic(&self, value: u8) -> bool {
        match self.config.half_carry {
            HalfCarrySource::Accumulator => (self.regs.a & 0x0F) + (value & 0x0F) > 0x0F,
            HalfCarrySource::Operand => false,
        }
    }

    /// Compare A with `value`, setting flags as if `A - value` was performed.
    /// A itself is not modified.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        let a = self.regs.a;
        let (result, borrow) = Registers::overflowing_sub(a, value);
        let half = self.half_carry_sub(a, value, 0);
        self.update_flags(result, true, half, borrow);
    }

    /// Carry written by INC/DEC.
    #[inline]
    fn incdec_carry(&self, wrapped: bool) -> bool {
        match self.config.quirks {
            Quirks::Keep => wrapped,
            Quirks::Hardware => self.regs.f.carry,
        }
    }

    /// INC r. Carry receives the wrap-around of `r + 1` unless hardware
    /// quirks are selected, in which case it is preserved.
    pub(super) fn alu_inc8(&mut self, target: ArithmeticTarget) {
        let value = self.regs.get(target);
        let (result, overflow) = Registers::overflowing_add(value, 1);
        let half = self.half_carry_add(value, 1, 0);
        let carry = self.incdec_carry(overflow);
        self.update_flags(result, false, half, carry);
        self.regs.set(target, result);
    }

    /// DEC r. Carry follows the same rule as INC.
    pub(super) fn alu_dec8(&mut self, target: ArithmeticTarget) {
        let value = self.regs.get(target);
        let (result, borrow) = Registers::overflowing_sub(value, 1);
        let half = self.half_carry_sub(value, 1, 0);
        let carry = self.incdec_carry(borrow);
        self.update_flags(result, true, half, carry);
        self.regs.set(target, result);
    }

    pub(super) fn alu_cpl(&mut self) {
        self.regs.a = !self.regs.a;
        self.regs.f.half_carry = true;
        self.regs.f.subtract = true;
    }

    pub(super) fn alu_scf(&mut self) {
        self.regs.f.carry = true;
        self.regs.f.half_carry = false;
        self.regs.f.subtract = false;
    }

    pub(super) fn alu_ccf(&mut self) {
        self.regs.f.carry = !self.regs.f.carry;
        self.regs.f.half_carry = false;
        self.regs.f.subtract = false;
    }
}
