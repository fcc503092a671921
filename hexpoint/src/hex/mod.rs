// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bidirectional conversion between hexadecimal text and integers, plus the
//! single-character classification predicates that parsers and formatters
//! lean on.
//!
//! - [`ToHex`] / [`to_hex_byte`] render integers (machine-width and
//!   arbitrary-precision) as uppercase base-16 text.
//! - [`try_parse_hex`] accepts user- or data-supplied hexadecimal literals
//!   without panicking on malformed input: failure is [`None`], never an
//!   error that propagates.
//! - [`is_hex_letter`], [`is_hex_digit`], [`contains_hex_letter`] and
//!   [`is_printable`] classify single characters.

// Attach sources.
pub mod format;
pub mod parse;
pub mod predicates;

// Re-export.
pub use format::*;
pub use parse::*;
pub use predicates::*;
