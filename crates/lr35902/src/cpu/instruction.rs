use std::fmt;
use std::str::FromStr;

use crate::error::{CpuError, Result};

/// Operations understood by the execution unit.
///
/// Each variant maps to one handler; the dispatch in `exec.rs` is an
/// exhaustive match, so a new variant without a handler does not compile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    Add,
    /// ADD HL,rr. Needs the memory bus, always rejected.
    AddHl,
    Adc,
    Sub,
    Sbc,
    And,
    Or,
    Xor,
    Cp,
    Inc,
    Dec,
    Ccf,
    Scf,
    Cpl,
    Bit,
    Reset,
    Set,
    Rl,
    Rla,
    Rlc,
    Rlca,
    Rr,
    Rra,
    Rrc,
    Rrca,
    Sll,
    Sla,
    Sra,
    Srl,
    Swap,
}

impl Instruction {
    pub const ALL: [Instruction; 30] = [
        Instruction::Add,
        Instruction::AddHl,
        Instruction::Adc,
        Instruction::Sub,
        Instruction::Sbc,
        Instruction::And,
        Instruction::Or,
        Instruction::Xor,
        Instruction::Cp,
        Instruction::Inc,
        Instruction::Dec,
        Instruction::Ccf,
        Instruction::Scf,
        Instruction::Cpl,
        Instruction::Bit,
        Instruction::Reset,
        Instruction::Set,
        Instruction::Rl,
        Instruction::Rla,
        Instruction::Rlc,
        Instruction::Rlca,
        Instruction::Rr,
        Instruction::Rra,
        Instruction::Rrc,
        Instruction::Rrca,
        Instruction::Sll,
        Instruction::Sla,
        Instruction::Sra,
        Instruction::Srl,
        Instruction::Swap,
    ];

    pub fn mnemonic(self) -> &'static str {
        match self {
            Instruction::Add => "ADD",
            Instruction::AddHl => "ADDHL",
            Instruction::Adc => "ADC",
            Instruction::Sub => "SUB",
            Instruction::Sbc => "SBC",
            Instruction::And => "AND",
            Instruction::Or => "OR",
            Instruction::Xor => "XOR",
            Instruction::Cp => "CP",
            Instruction::Inc => "INC",
            Instruction::Dec => "DEC",
            Instruction::Ccf => "CCF",
            Instruction::Scf => "SCF",
            Instruction::Cpl => "CPL",
            Instruction::Bit => "BIT",
            Instruction::Reset => "RESET",
            Instruction::Set => "SET",
            Instruction::Rl => "RL",
            Instruction::Rla => "RLA",
            Instruction::Rlc => "RLC",
            Instruction::Rlca => "RLCA",
            Instruction::Rr => "RR",
            Instruction::Rra => "RRA",
            Instruction::Rrc => "RRC",
            Instruction::Rrca => "RRCA",
            Instruction::Sll => "SLL",
            Instruction::Sla => "SLA",
            Instruction::Sra => "SRA",
            Instruction::Srl => "SRL",
            Instruction::Swap => "SWAP",
        }
    }

    /// BIT, RESET and SET take a bit index in addition to the target.
    pub fn uses_bit_index(self) -> bool {
        matches!(self, Instruction::Bit | Instruction::Reset | Instruction::Set)
    }

    /// Instructions hardwired to A (or to the flags only); the target passed
    /// to `Cpu::execute` is ignored for these.
    pub fn is_accumulator_only(self) -> bool {
        matches!(
            self,
            Instruction::Rla
                | Instruction::Rra
                | Instruction::Rlca
                | Instruction::Rrca
                | Instruction::Cpl
                | Instruction::Ccf
                | Instruction::Scf
        )
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for Instruction {
    type Err = CpuError;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_ascii_uppercase();
        if upper == "RES" {
            return Ok(Instruction::Reset);
        }
        Instruction::ALL
            .into_iter()
            .find(|instruction| instruction.mnemonic() == upper)
            .ok_or_else(|| CpuError::invalid(None, format!("unknown mnemonic '{s}'")))
    }
}

/// Single-byte register selected by an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArithmeticTarget {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
}

impl ArithmeticTarget {
    pub const ALL: [ArithmeticTarget; 7] = [
        ArithmeticTarget::A,
        ArithmeticTarget::B,
        ArithmeticTarget::C,
        ArithmeticTarget::D,
        ArithmeticTarget::E,
        ArithmeticTarget::H,
        ArithmeticTarget::L,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ArithmeticTarget::A => "A",
            ArithmeticTarget::B => "B",
            ArithmeticTarget::C => "C",
            ArithmeticTarget::D => "D",
            ArithmeticTarget::E => "E",
            ArithmeticTarget::H => "H",
            ArithmeticTarget::L => "L",
        }
    }
}

impl fmt::Display for ArithmeticTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArithmeticTarget {
    type Err = CpuError;

    fn from_str(s: &str) -> Result<Self> {
        let upper = s.trim().to_ascii_uppercase();
        ArithmeticTarget::ALL
            .into_iter()
            .find(|target| target.name() == upper)
            .ok_or_else(|| CpuError::invalid(None, format!("unknown register '{s}'")))
    }
}

/// A bit position in 0..=7, checked on construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitIndex(u8);

impl BitIndex {
    pub fn new(index: u8) -> Result<Self> {
        if index <= 7 {
            Ok(Self(index))
        } else {
            Err(CpuError::invalid(None, format!("bit index {index} is outside 0..=7")))
        }
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn mask(self) -> u8 {
        1 << self.0
    }
}

impl TryFrom<u8> for BitIndex {
    type Error = CpuError;

    fn try_from(index: u8) -> Result<Self> {
        Self::new(index)
    }
}

impl fmt::Display for BitIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
