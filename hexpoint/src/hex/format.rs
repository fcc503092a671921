// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write;

use num_bigint::{BigInt, BigUint};

use crate::{InlineString, TinyInlineString};

/// Render an integer as uppercase base-16 digits, with no leading zeros
/// (zero itself renders as `"0"`).
///
/// This is different than going through [`format!`], because it doesn't
/// allocate a new [String], but instead accumulates into an inline buffer on
/// the stack ([`InlineString`]), which only spills to the heap for large
/// renderings (eg: big integers).
///
/// The machine-width impls use the platform's native sign convention: a
/// negative signed integer formats as its two's complement bit pattern, eg:
/// `(-1_i32).to_hex()` is `"FFFFFFFF"`. See the [`BigInt`] impl for how
/// arbitrary-precision values differ.
///
/// # Example
///
/// ```
/// use r3bl_hexpoint::ToHex;
///
/// assert_eq!(255_u32.to_hex(), "FF");
/// assert_eq!(0_u32.to_hex(), "0");
/// assert_eq!('A'.to_hex(), "41");
/// assert_eq!((-1_i32).to_hex(), "FFFFFFFF");
/// ```
pub trait ToHex {
    #[must_use]
    fn to_hex(&self) -> InlineString;
}

macro_rules! impl_to_hex_for_machine_int {
    ($($int_type:ty),* $(,)?) => {
        $(
            impl ToHex for $int_type {
                fn to_hex(&self) -> InlineString {
                    let mut acc = InlineString::new();
                    _ = write!(acc, "{self:X}");
                    acc
                }
            }
        )*
    };
}

impl_to_hex_for_machine_int!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
);

/// Renders the character's scalar value, eg: `'A'.to_hex()` is `"41"`.
impl ToHex for char {
    fn to_hex(&self) -> InlineString { u32::from(*self).to_hex() }
}

impl ToHex for BigUint {
    fn to_hex(&self) -> InlineString {
        let mut acc = InlineString::new();
        _ = write!(acc, "{self:X}");
        acc
    }
}

/// A negative value renders in sign-magnitude form with a leading `-`, eg:
/// `BigInt::from(-31).to_hex()` is `"-1F"`. An arbitrary-precision integer
/// has no fixed width to wrap into, so the two's complement convention of
/// the machine-width impls does not apply here.
impl ToHex for BigInt {
    fn to_hex(&self) -> InlineString {
        let mut acc = InlineString::new();
        _ = write!(acc, "{self:X}");
        acc
    }
}

/// Render a byte as exactly two uppercase hex digits, zero padded on the
/// left, eg: `5` → `"05"`, `255` → `"FF"`.
///
/// Taking [`u8`] makes the out-of-range case unrepresentable; render wider
/// integers with [`ToHex::to_hex`].
#[must_use]
pub fn to_hex_byte(byte: u8) -> TinyInlineString {
    let mut acc = TinyInlineString::new();
    _ = write!(acc, "{byte:02X}");
    acc
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(0_u32, "0"; "zero is a single digit")]
    #[test_case(5_u32, "5")]
    #[test_case(255_u32, "FF")]
    #[test_case(0xABCD_u32, "ABCD"; "letters are uppercase")]
    #[test_case(0xDEAD_BEEF_u32, "DEADBEEF"; "no leading zeros")]
    fn test_to_hex_u32(input: u32, expected: &str) {
        assert_eq!(input.to_hex(), expected);
    }

    #[test]
    fn test_to_hex_signed_is_twos_complement() {
        assert_eq!((-1_i32).to_hex(), "FFFFFFFF");
        assert_eq!((-16_i32).to_hex(), "FFFFFFF0");
        assert_eq!((-1_i64).to_hex(), "FFFFFFFFFFFFFFFF");
        assert_eq!(127_i32.to_hex(), "7F");
    }

    #[test]
    fn test_to_hex_char() {
        assert_eq!('A'.to_hex(), "41");
        assert_eq!('😀'.to_hex(), "1F600");
    }

    #[test]
    fn test_to_hex_big_integers() {
        assert_eq!(BigUint::from(0_u32).to_hex(), "0");
        assert_eq!(BigUint::from(0xDEAD_BEEF_u32).to_hex(), "DEADBEEF");
        // Wider than any machine integer: 2^128 is "1" followed by 32 zeros.
        let wide = BigUint::from(u128::MAX) + 1_u32;
        assert_eq!(wide.to_hex(), "100000000000000000000000000000000");
        assert_eq!(BigInt::from(255).to_hex(), "FF");
        assert_eq!(BigInt::from(-31).to_hex(), "-1F");
    }

    #[test_case(0, "00")]
    #[test_case(5, "05")]
    #[test_case(0x0A, "0A")]
    #[test_case(255, "FF")]
    fn test_to_hex_byte(input: u8, expected: &str) {
        let rendered = to_hex_byte(input);
        assert_eq!(rendered, expected);
        assert_eq!(rendered.len(), 2);
    }
}
