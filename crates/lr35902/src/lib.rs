pub mod cpu;
pub mod error;

pub use cpu::{
    ArithmeticTarget, BitIndex, CarryIn, Cpu, CpuConfig, FlagBits, FlagsRegister,
    HalfCarrySource, Instruction, Quirks, Registers,
};
pub use error::{CpuError, Result};
