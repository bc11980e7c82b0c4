use std::fmt;

use super::{ArithmeticTarget, FlagsRegister};

/// Registers for the Game Boy CPU (LR35902).
///
/// Seven 8-bit general purpose registers plus the unpacked F register.
/// 16-bit pairs have no storage of their own; they are always derived from
/// and written through the two 8-bit halves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub f: FlagsRegister,
    pub h: u8,
    pub l: u8,
}

impl Registers {
    /// Wrapping 8-bit add; the flag is set when the unsigned sum exceeds 255.
    #[inline]
    pub fn overflowing_add(lhs: u8, rhs: u8) -> (u8, bool) {
        lhs.overflowing_add(rhs)
    }

    /// Wrapping 8-bit subtract; the flag is set when `rhs > lhs` (borrow).
    #[inline]
    pub fn overflowing_sub(lhs: u8, rhs: u8) -> (u8, bool) {
        lhs.overflowing_sub(rhs)
    }

    #[inline]
    pub fn get(&self, target: ArithmeticTarget) -> u8 {
        match target {
            ArithmeticTarget::A => self.a,
            ArithmeticTarget::B => self.b,
            ArithmeticTarget::C => self.c,
            ArithmeticTarget::D => self.d,
            ArithmeticTarget::E => self.e,
            ArithmeticTarget::H => self.h,
            ArithmeticTarget::L => self.l,
        }
    }

    /// Exclusive borrow of the register selected by `target`.
    #[inline]
    pub fn get_mut(&mut self, target: ArithmeticTarget) -> &mut u8 {
        match target {
            ArithmeticTarget::A => &mut self.a,
            ArithmeticTarget::B => &mut self.b,
            ArithmeticTarget::C => &mut self.c,
            ArithmeticTarget::D => &mut self.d,
            ArithmeticTarget::E => &mut self.e,
            ArithmeticTarget::H => &mut self.h,
            ArithmeticTarget::L => &mut self.l,
        }
    }

    #[inline]
    pub fn set(&mut self, target: ArithmeticTarget, value: u8) {
        *self.get_mut(target) = value;
    }

    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f.to_byte()])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        // Lower 4 bits of F are dropped by the decode.
        self.f = FlagsRegister::from_byte(f);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X} [{z}{n}{h}{c}]",
            af = self.af(),
            bc = self.bc(),
            de = self.de(),
            hl = self.hl(),
            z = if self.f.zero { 'Z' } else { '-' },
            n = if self.f.subtract { 'N' } else { '-' },
            h = if self.f.half_carry { 'H' } else { '-' },
            c = if self.f.carry { 'C' } else { '-' },
        )
    }
}
