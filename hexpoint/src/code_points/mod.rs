// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! UTF-16 stores a Unicode scalar value as either one or two 16-bit code
//! units. Values up to `U+FFFF` (outside the surrogate range) occupy a single
//! unit; everything above `U+FFFF` is split into a high surrogate
//! (`0xD800..=0xDBFF`) followed by a low surrogate (`0xDC00..=0xDFFF`). So
//! the number of code units is NOT the number of characters: `"A😀"` is 3
//! units but 2 code points.
//!
//! This module walks a `&[u16]` left to right and yields one [`CodePoint`]
//! per logical character, consuming 2 units for each surrogate pair and 1
//! unit otherwise. Decoding is best-effort and never fails: an unpaired
//! surrogate (malformed UTF-16) is emitted as its own code point in the
//! surrogate range, which is also why the output type is [`CodePoint`] and
//! not [`char`]: a [`char`] cannot hold a surrogate value.
//!
//! For the common case where the text is already a Rust string (which cannot
//! contain unpaired surrogates), use [`CodePointsExt::code_points`].

// Attach sources.
pub mod code_point;
pub mod scan;

// Re-export.
pub use code_point::*;
pub use scan::*;
