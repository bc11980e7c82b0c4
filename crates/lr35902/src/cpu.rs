mod alu;
mod cb;
mod config;
mod exec;
mod flags;
mod instruction;
mod regs;


pub use config::{CarryIn, CpuConfig, HalfCarrySource, Quirks};
pub use flags::{FlagBits, FlagsRegister};
pub use instruction::{ArithmeticTarget, BitIndex, Instruction};
pub use regs::Registers;

use crate::error::Result;

/// Execution unit of the Game Boy CPU (LR35902).
///
/// Only the register file and the ALU/bit-manipulation instructions are
/// modelled. Instruction fetch, the program counter, the stack, interrupts
/// and cycle timing belong to the collaborators that drive this core.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cpu {
    pub regs: Registers,
    config: CpuConfig,
}

impl Cpu {
    /// Create a CPU with every register and flag cleared.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CpuConfig) -> Self {
        Self {
            regs: Registers::default(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> CpuConfig {
        self.config
    }

    /// Clear every register and flag. The configuration is kept.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
    }

    #[inline]
    pub fn flags(&self) -> FlagsRegister {
        self.regs.f
    }

    /// Execute one instruction against the register file.
    ///
    /// `bit` is the bit index used by BIT, RESET and SET; it must be present
    /// and in 0..=7 for those and is ignored by everything else. Instructions
    /// hardwired to A (RLA, RRA, RLCA, RRCA, CPL) or to the flags (CCF, SCF)
    /// ignore `target`.
    ///
    /// On error nothing is modified.
    pub fn execute(
        &mut self,
        instruction: Instruction,
        target: ArithmeticTarget,
        bit: Option<u8>,
    ) -> Result<()> {
        self.exec_instruction(instruction, target, bit)?;
        log::trace!("{instruction} {target}: {regs}", regs = self.regs);
        Ok(())
    }
}
