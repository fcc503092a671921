// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Display,
          ops::{Deref, DerefMut}};

use crate::CommonResult;

/// Represents a single Unicode code point, ie, a value in the range
/// `0..=0x10FFFF`.
///
/// This is deliberately wider than [`char`]: best-effort decoding of
/// malformed UTF-16 (see [`crate::scan_code_points`]) can produce unpaired
/// surrogates (`0xD800..=0xDFFF`), which are valid code points but not valid
/// Unicode scalar values. Use [`Self::try_into_char`] or
/// [`Self::to_char_lossy`] to cross over into [`char`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct CodePoint(pub u32);

impl CodePoint {
    #[must_use]
    pub fn as_u32(&self) -> u32 { self.0 }

    /// True iff the value is in the surrogate range `0xD800..=0xDFFF`. The
    /// scan only produces such values for malformed (unpaired) input.
    #[must_use]
    pub fn is_surrogate(&self) -> bool { matches!(self.0, 0xD800..=0xDFFF) }

    /// True iff the value is above the Basic Multilingual Plane, ie, it was
    /// encoded as a surrogate pair (2 code units) in UTF-16.
    #[must_use]
    pub fn is_supplementary(&self) -> bool { self.0 >= 0x10000 }

    /// Convert into [`char`].
    ///
    /// # Errors
    ///
    /// Returns [`CodePointError::UnpairedSurrogate`] for values in the
    /// surrogate range, and [`CodePointError::OutOfRange`] for values above
    /// `0x10FFFF`. Use [`Self::to_char_lossy`] for an infallible conversion.
    pub fn try_into_char(&self) -> CommonResult<char> {
        match char::from_u32(self.0) {
            Some(character) => Ok(character),
            None if self.is_surrogate() => {
                Err(CodePointError::UnpairedSurrogate { value: self.0 }.into())
            }
            None => Err(CodePointError::OutOfRange { value: self.0 }.into()),
        }
    }

    /// Convert into [`char`], substituting `U+FFFD REPLACEMENT CHARACTER`
    /// for values that have no [`char`] form.
    #[must_use]
    pub fn to_char_lossy(&self) -> char {
        char::from_u32(self.0).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

pub fn code_point(arg_code_point: impl Into<CodePoint>) -> CodePoint {
    arg_code_point.into()
}

impl Deref for CodePoint {
    type Target = u32;
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl DerefMut for CodePoint {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}

impl From<u32> for CodePoint {
    fn from(it: u32) -> Self { Self(it) }
}

impl From<u16> for CodePoint {
    fn from(it: u16) -> Self { Self(u32::from(it)) }
}

impl From<char> for CodePoint {
    fn from(it: char) -> Self { Self(u32::from(it)) }
}

/// Standard scalar value notation, eg: `U+0041`, `U+1F600`. At least 4
/// uppercase hex digits.
impl Display for CodePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

/// Errors from [`CodePoint::try_into_char`].
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum CodePointError {
    /// The value is in the surrogate range and has no [`char`] form.
    #[error("code point U+{value:04X} is an unpaired surrogate")]
    #[diagnostic(
        code(r3bl_hexpoint::unpaired_surrogate),
        help(
            "Unpaired surrogates come from malformed UTF-16 input. \
             Use `CodePoint::to_char_lossy` to substitute U+FFFD instead."
        )
    )]
    UnpairedSurrogate {
        /// The surrogate value, in `0xD800..=0xDFFF`.
        value: u32,
    },

    /// The value is above `0x10FFFF` and is not a Unicode code point at all.
    #[error("value {value:#X} is outside the Unicode code point range")]
    #[diagnostic(code(r3bl_hexpoint::code_point_out_of_range))]
    OutOfRange {
        /// The offending value, above `0x10FFFF`.
        value: u32,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(code_point('A').to_string(), "U+0041");
        assert_eq!(code_point('😀').to_string(), "U+1F600");
        assert_eq!(code_point(0xD800_u32).to_string(), "U+D800");
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(code_point(0x41_u16), CodePoint(0x41));
        assert_eq!(code_point(0x1F600_u32), CodePoint(0x1F600));
        assert_eq!(code_point('é'), CodePoint(0xE9));
    }

    #[test]
    fn test_classification() {
        assert!(!code_point('A').is_surrogate());
        assert!(code_point(0xDC00_u32).is_surrogate());
        assert!(code_point('😀').is_supplementary());
        assert!(!code_point(0xFFFF_u32).is_supplementary());
    }

    #[test]
    fn test_try_into_char() {
        assert_eq!(code_point('A').try_into_char().unwrap(), 'A');
        assert_eq!(code_point('😀').try_into_char().unwrap(), '😀');
        assert!(code_point(0xD800_u32).try_into_char().is_err());
        assert!(code_point(0x110000_u32).try_into_char().is_err());
    }

    #[test]
    fn test_try_into_char_error_variants() {
        let report = code_point(0xDFFF_u32).try_into_char().unwrap_err();
        let error = report.downcast_ref::<CodePointError>().unwrap();
        assert!(matches!(
            error,
            CodePointError::UnpairedSurrogate { value: 0xDFFF }
        ));

        let report = code_point(0x110000_u32).try_into_char().unwrap_err();
        let error = report.downcast_ref::<CodePointError>().unwrap();
        assert!(matches!(error, CodePointError::OutOfRange { value: 0x110000 }));
    }

    #[test]
    fn test_to_char_lossy() {
        assert_eq!(code_point('A').to_char_lossy(), 'A');
        assert_eq!(code_point(0xD800_u32).to_char_lossy(), '\u{FFFD}');
    }
}
