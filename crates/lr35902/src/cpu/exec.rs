use super::cb::Shift;
use super::{ArithmeticTarget, BitIndex, Cpu, Instruction};
use crate::error::{CpuError, Result};

impl Cpu {
    /// Dispatch one instruction to its handler.
    ///
    /// Operands are validated before any handler runs, so an error leaves the
    /// register file as it was.
    pub(super) fn exec_instruction(
        &mut self,
        instruction: Instruction,
        target: ArithmeticTarget,
        bit: Option<u8>,
    ) -> Result<()> {
        if bit.is_some() && !instruction.uses_bit_index() {
            log::debug!("{instruction} takes no bit index, ignoring {bit:?}");
        }
        if instruction.is_accumulator_only() && target != ArithmeticTarget::A {
            log::debug!("{instruction} has a fixed operand, ignoring selector {target}");
        }

        match instruction {
            Instruction::AddHl => {
                log::error!("{instruction} rejected: 16-bit memory-indirect addressing needs a bus");
                return Err(CpuError::UnsupportedOperation {
                    instruction,
                    reason: "no memory model is attached to this core",
                });
            }

            Instruction::Add => self.alu_add(self.regs.get(target), false),
            Instruction::Adc => self.alu_add(self.regs.get(target), true),
            Instruction::Sub => self.alu_sub(self.regs.get(target), false),
            Instruction::Sbc => self.alu_sub(self.regs.get(target), true),
            Instruction::And => self.alu_and(self.regs.get(target)),
            Instruction::Or => self.alu_or(self.regs.get(target)),
            Instruction::Xor => self.alu_xor(self.regs.get(target)),
            Instruction::Cp => self.alu_cp(self.regs.get(target)),
            Instruction::Inc => self.alu_inc8(target),
            Instruction::Dec => self.alu_dec8(target),

            Instruction::Ccf => self.alu_ccf(),
            Instruction::Scf => self.alu_scf(),
            Instruction::Cpl => self.alu_cpl(),

            Instruction::Bit => self.cb_bit(bit_operand(instruction, bit)?, target),
            Instruction::Reset => self.cb_reset(bit_operand(instruction, bit)?, target),
            Instruction::Set => self.cb_set(bit_operand(instruction, bit)?, target),

            // Accumulator forms ignore the selector.
            Instruction::Rla => self.rotate_a(Shift::Rl),
            Instruction::Rra => self.rotate_a(Shift::Rr),
            Instruction::Rlca => self.rotate_a(Shift::Rlc),
            Instruction::Rrca => self.rotate_a(Shift::Rrc),

            Instruction::Rl => self.cb_shift(Shift::Rl, target),
            Instruction::Rr => self.cb_shift(Shift::Rr, target),
            Instruction::Rlc => self.cb_shift(Shift::Rlc, target),
            Instruction::Rrc => self.cb_shift(Shift::Rrc, target),
            Instruction::Sla => self.cb_shift(Shift::Sla, target),
            Instruction::Sra => self.cb_shift(Shift::Sra, target),
            Instruction::Sll => self.cb_shift(Shift::Sll, target),
            Instruction::Srl => self.cb_shift(Shift::Srl, target),
            Instruction::Swap => self.cb_shift(Shift::Swap, target),
        }

        Ok(())
    }
}

/// Resolve the bit index for BIT/RESET/SET.
fn bit_operand(instruction: Instruction, bit: Option<u8>) -> Result<BitIndex> {
    let Some(index) = bit else {
        log::warn!("{instruction} called without a bit index, skipped");
        return Err(CpuError::invalid(Some(instruction), "missing bit index"));
    };

    BitIndex::new(index).map_err(|_| {
        log::warn!("{instruction} called with bit index {index}, skipped");
        CpuError::invalid(Some(instruction), format!("bit index {index} is outside 0..=7"))
    })
}
