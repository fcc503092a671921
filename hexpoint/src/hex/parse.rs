// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use nom::{IResult, Parser, bytes::complete::take_while1,
          combinator::all_consuming};
use num_bigint::{BigInt, BigUint};

use crate::is_hex_digit;

/// Parse `text` as an unsigned base-16 number.
///
/// Returns [`None`] when the text is empty, contains any character outside
/// `[0-9a-fA-F]` (so no sign, no `0x` prefix, no whitespace), or - for the
/// machine-width targets - when the value overflows the target. Parsing is
/// case-insensitive. Failure is a value the caller must match, never a panic
/// or a propagated error.
///
/// The target type picks the behavior: machine-width unsigned integers fail
/// on overflow, while [`BigUint`] / [`BigInt`] accept digit runs of any
/// length.
///
/// # Example
///
/// ```
/// use num_bigint::BigUint;
/// use r3bl_hexpoint::try_parse_hex;
///
/// assert_eq!(try_parse_hex::<u32>("ff"), Some(255));
/// assert_eq!(try_parse_hex::<u32>("0xff"), None);
/// assert_eq!(try_parse_hex::<u32>("1FFFFFFFF"), None); // Overflows u32.
/// assert_eq!(
///     try_parse_hex::<BigUint>("1FFFFFFFF"),
///     Some(BigUint::from(0x1_FFFF_FFFF_u64))
/// );
/// ```
#[must_use]
pub fn try_parse_hex<T: TryParseHex>(text: &str) -> Option<T> {
    let (_, digits) = parse_hex_digits(text).ok()?;
    T::from_hex_digits(digits)
}

/// Conversion target for [`try_parse_hex`]. Implemented for the unsigned
/// machine-width integers and for [`BigUint`] / [`BigInt`], so callers are
/// agnostic to the representation.
pub trait TryParseHex: Sized {
    /// Convert a non-empty run of chars already validated to be
    /// `[0-9a-fA-F]` into `Self`. Returns [`None`] when the value does not
    /// fit in the target width.
    fn from_hex_digits(digits: &str) -> Option<Self>;
}

/// Matches the entire input as one non-empty run of hex digits, with
/// [`is_hex_digit`] doing the per-char test.
fn parse_hex_digits(input: &str) -> IResult<&str, &str> {
    all_consuming(take_while1(is_hex_digit)).parse(input)
}

macro_rules! impl_try_parse_hex_for_machine_int {
    ($($int_type:ty),* $(,)?) => {
        $(
            impl TryParseHex for $int_type {
                fn from_hex_digits(digits: &str) -> Option<Self> {
                    // Overflow of the target width is a parse failure.
                    Self::from_str_radix(digits, 16).ok()
                }
            }
        )*
    };
}

impl_try_parse_hex_for_machine_int!(u8, u16, u32, u64, u128, usize);

impl TryParseHex for BigUint {
    fn from_hex_digits(digits: &str) -> Option<Self> {
        BigUint::parse_bytes(digits.as_bytes(), 16)
    }
}

/// The digit run carries no sign, so the parsed value is always
/// non-negative.
impl TryParseHex for BigInt {
    fn from_hex_digits(digits: &str) -> Option<Self> {
        BigInt::parse_bytes(digits.as_bytes(), 16)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::ToHex;

    #[test_case("ff", Some(255); "lowercase")]
    #[test_case("FF", Some(255); "uppercase")]
    #[test_case("Ff", Some(255); "mixed case")]
    #[test_case("0", Some(0))]
    #[test_case("00FF", Some(255); "leading zeros are fine")]
    #[test_case("FFFFFFFF", Some(u32::MAX))]
    #[test_case("", None; "empty text")]
    #[test_case("G1", None; "invalid character")]
    #[test_case("12g4", None; "invalid character in the middle")]
    #[test_case("+FF", None; "sign is not accepted")]
    #[test_case("-1", None; "negative sign is not accepted")]
    #[test_case("0xFF", None; "0x prefix is not accepted")]
    #[test_case(" FF", None; "leading whitespace")]
    #[test_case("FF ", None; "trailing whitespace")]
    #[test_case("1FFFFFFFF", None; "overflows u32")]
    fn test_try_parse_hex_u32(input: &str, expected: Option<u32>) {
        assert_eq!(try_parse_hex::<u32>(input), expected);
    }

    #[test]
    fn test_try_parse_hex_respects_target_width() {
        assert_eq!(try_parse_hex::<u8>("FF"), Some(255));
        assert_eq!(try_parse_hex::<u8>("100"), None);
        assert_eq!(try_parse_hex::<u16>("100"), Some(256));
        assert_eq!(try_parse_hex::<u64>("1FFFFFFFF"), Some(0x1_FFFF_FFFF));
    }

    #[test]
    fn test_try_parse_hex_big_integers_never_overflow() {
        // 40 digits, well past u128.
        let digits = "DEADBEEFDEADBEEFDEADBEEFDEADBEEFDEADBEEF";
        let value = try_parse_hex::<BigUint>(digits).unwrap();
        assert_eq!(value.to_hex(), digits);

        let value = try_parse_hex::<BigInt>(digits).unwrap();
        assert_eq!(value.to_hex(), digits);

        assert_eq!(try_parse_hex::<BigUint>("G1"), None);
        assert_eq!(try_parse_hex::<BigUint>(""), None);
    }

    #[test]
    fn test_round_trip_to_hex_then_parse() {
        for value in [0_u32, 1, 5, 0xFF, 0xABCD, 0xDEAD_BEEF, u32::MAX] {
            assert_eq!(try_parse_hex::<u32>(&value.to_hex()), Some(value));
        }
        for value in [0_u64, 0x1_FFFF_FFFF, u64::MAX] {
            assert_eq!(try_parse_hex::<u64>(&value.to_hex()), Some(value));
        }
    }
}
