use bitflags::bitflags;

bitflags! {
    /// Bit positions of the flags inside the F register.
    ///
    /// Layout (bit index in the byte, from MSB to LSB):
    /// - bit 7: Z (zero)
    /// - bit 6: N (subtract)
    /// - bit 5: H (half carry)
    /// - bit 4: C (carry)
    /// - bits 0–3 are always zero.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FlagBits: u8 {
        const ZERO = 1 << 7;
        const SUBTRACT = 1 << 6;
        const HALF_CARRY = 1 << 5;
        const CARRY = 1 << 4;
    }
}

/// The F register, kept unpacked as four independent booleans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FlagsRegister {
    pub zero: bool,
    pub subtract: bool,
    pub half_carry: bool,
    pub carry: bool,
}

impl FlagsRegister {
    /// Pack the flags into their byte form. The low nibble is always zero.
    pub fn to_byte(self) -> u8 {
        let mut bits = FlagBits::empty();
        bits.set(FlagBits::ZERO, self.zero);
        bits.set(FlagBits::SUBTRACT, self.subtract);
        bits.set(FlagBits::HALF_CARRY, self.half_carry);
        bits.set(FlagBits::CARRY, self.carry);
        bits.bits()
    }

    /// Unpack a flags byte. Bits 0–3 are ignored.
    pub fn from_byte(byte: u8) -> Self {
        let bits = FlagBits::from_bits_truncate(byte);
        Self {
            zero: bits.contains(FlagBits::ZERO),
            subtract: bits.contains(FlagBits::SUBTRACT),
            half_carry: bits.contains(FlagBits::HALF_CARRY),
            carry: bits.contains(FlagBits::CARRY),
        }
    }
}

impl From<u8> for FlagsRegister {
    fn from(byte: u8) -> Self {
        Self::from_byte(byte)
    }
}

impl From<FlagsRegister> for u8 {
    fn from(flags: FlagsRegister) -> Self {
        flags.to_byte()
    }
}
