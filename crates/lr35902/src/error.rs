use thiserror::Error;

use crate::cpu::Instruction;

pub type Result<T, E = CpuError> = std::result::Result<T, E>;

/// Errors reported by the execution unit.
///
/// Both kinds are recoverable: the CPU state is left untouched when
/// `Cpu::execute` returns one of them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CpuError {
    /// The instruction exists in the opcode set but cannot be executed by
    /// this core (for example `ADDHL` needs a memory bus).
    #[error("{instruction} is not supported: {reason}")]
    UnsupportedOperation {
        instruction: Instruction,
        reason: &'static str,
    },
    /// An operand was missing, malformed or outside its valid range.
    #[error("invalid argument{}: {}", for_instruction(.instruction), .reason)]
    InvalidArgument {
        instruction: Option<Instruction>,
        reason: String,
    },
}

impl CpuError {
    pub(crate) fn invalid(instruction: Option<Instruction>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            instruction,
            reason: reason.into(),
        }
    }
}

fn for_instruction(instruction: &Option<Instruction>) -> String {
    match instruction {
        Some(instruction) => format!(" for {instruction}"),
        None => String::new(),
    }
}
