// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{char::DecodeUtf16, iter::Copied, slice::Iter};

use crate::{CodePoint, InlineVec};

/// Scan a UTF-16 code unit sequence into an ordered list of code points.
///
/// Walks `units` left to right with a cursor:
/// - A high surrogate followed by a low surrogate combines into one
///   supplementary code point (`>= 0x10000`) and consumes 2 units.
/// - Every other unit (including an unpaired surrogate) yields its own value
///   and consumes 1 unit.
///
/// So the output length equals the unit count minus the number of surrogate
/// pairs, and source order is preserved. Decoding never fails: malformed
/// input degrades to surrogate-range code points, matching the platform's
/// best-effort scalar value derivation ([`char::decode_utf16`]).
///
/// # Example
///
/// ```
/// use r3bl_hexpoint::{CodePoint, scan_code_points};
///
/// // 'A', then the surrogate pair for 😀.
/// let code_points = scan_code_points(&[0x0041, 0xD83D, 0xDE00]);
/// assert_eq!(&code_points[..], &[CodePoint(0x41), CodePoint(0x1F600)]);
/// ```
#[must_use]
pub fn scan_code_points(units: &[u16]) -> InlineVec<CodePoint> {
    CodePoints::new(units).collect()
}

/// The scan of [`scan_code_points`] as a lazy iterator over the code units.
#[derive(Debug)]
pub struct CodePoints<'a> {
    inner: DecodeUtf16<Copied<Iter<'a, u16>>>,
}

impl<'a> CodePoints<'a> {
    #[must_use]
    pub fn new(units: &'a [u16]) -> Self {
        Self {
            inner: char::decode_utf16(units.iter().copied()),
        }
    }
}

impl Iterator for CodePoints<'_> {
    type Item = CodePoint;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|unit| match unit {
            Ok(character) => CodePoint::from(character),
            // Lone surrogate: emit its own value rather than rejecting it.
            Err(malformed) => CodePoint::from(malformed.unpaired_surrogate()),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

/// Extension trait to scan the code points of a string slice directly.
///
/// A Rust [`str`] is valid UTF-8 and cannot contain unpaired surrogates, so
/// this path is equivalent to [`str::chars`] mapped into [`CodePoint`] - it
/// exists so that callers holding text in either representation go through
/// one vocabulary.
pub trait CodePointsExt {
    fn code_points(&self) -> InlineVec<CodePoint>;
}

impl CodePointsExt for str {
    fn code_points(&self) -> InlineVec<CodePoint> {
        self.chars().map(CodePoint::from).collect()
    }
}
