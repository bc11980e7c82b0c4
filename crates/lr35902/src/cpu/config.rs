use typed_builder::TypedBuilder;

/// Where the half-carry of a flag-updating ALU operation is computed from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HalfCarrySource {
    /// `(A & 0xF) + (operand & 0xF) > 0xF`, read from the accumulator as it
    /// was before the instruction, even when the destination is another
    /// register (INC C, DEC E, ...).
    ///
    /// AND is the one exception: it always sets the flag instead of running
    /// the formula.
    #[default]
    Accumulator,
    /// Nibble carry/borrow of the operation actually performed, as listed in
    /// the published opcode tables. OR/XOR clear the flag.
    Operand,
}

/// Carry-in used by ADC and SBC.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CarryIn {
    /// Add (or subtract) one only when the primary add/sub itself
    /// overflowed. The carry flag before the instruction is not read.
    #[default]
    OnOverflow,
    /// Use the carry flag held before the instruction.
    Flag,
}

/// Instruction details that differ from the published opcode tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Quirks {
    /// INC/DEC write the wrap-around of the ±1 into C, RLA/RRA/RLCA/RRCA
    /// compute Z from the result and SLA refills bit 0 from the old bit 0.
    #[default]
    Keep,
    /// INC/DEC leave C alone, the accumulator rotates clear Z and SLA shifts
    /// in a zero.
    Hardware,
}

/// Behaviour switches for the execution unit.
///
/// The defaults reproduce the flag policy the core was built around; the
/// alternatives follow the hardware reference tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, TypedBuilder)]
pub struct CpuConfig {
    #[builder(default)]
    pub half_carry: HalfCarrySource,
    #[builder(default)]
    pub carry_in: CarryIn,
    #[builder(default)]
    pub quirks: Quirks,
}

impl CpuConfig {
    /// Configuration matching published LR35902 opcode tables.
    pub fn hardware() -> Self {
        Self::builder()
            .half_carry(HalfCarrySource::Operand)
            .carry_in(CarryIn::Flag)
            .quirks(Quirks::Hardware)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        assert_eq!(CpuConfig::builder().build(), CpuConfig::default());
        assert_eq!(CpuConfig::default().half_carry, HalfCarrySource::Accumulator);
        assert_eq!(CpuConfig::default().carry_in, CarryIn::OnOverflow);
        assert_eq!(CpuConfig::default().quirks, Quirks::Keep);
    }

    #[test]
    fn hardware_profile_switches_every_knob() {
        let config = CpuConfig::hardware();
        assert_eq!(config.half_carry, HalfCarrySource::Operand);
        assert_eq!(config.carry_in, CarryIn::Flag);
        assert_eq!(config.quirks, Quirks::Hardware);
    }
}
