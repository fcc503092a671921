// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Introduction
//!
//! This crate provides the text primitives that sit underneath any layer that
//! needs to reason about "characters" semantically rather than by raw code
//! unit, or render and accept hexadecimal numbers:
//!
//! 1. [`code_points`] - decompose a UTF-16 code unit sequence into an ordered
//!    sequence of Unicode scalar values, collapsing each surrogate pair into
//!    one [`CodePoint`]. Decoding is best-effort and never fails: a lone
//!    surrogate is emitted as its own code point instead of being rejected.
//! 2. [`hex`] - bidirectional conversion between hexadecimal text and
//!    integers, for both machine-width integers and arbitrary-precision ones
//!    (via [`num_bigint`]), plus the single-character classification
//!    predicates that parsers and formatters lean on ([`is_hex_letter`],
//!    [`is_hex_digit`], [`is_printable`]).
//!
//! The two modules are independent leaf components: no shared state, no I/O,
//! every operation is a pure function over its arguments and is safe to call
//! concurrently without coordination.
//!
//! # Example
//!
//! ```
//! use r3bl_hexpoint::{CodePoint, ToHex, scan_code_points, to_hex_byte,
//!                     try_parse_hex};
//!
//! // "A" followed by the surrogate pair for 😀.
//! let units: Vec<u16> = "A😀".encode_utf16().collect();
//! let code_points = scan_code_points(&units);
//! assert_eq!(units.len(), 3);
//! assert_eq!(code_points.len(), 2);
//! assert_eq!(code_points[1], CodePoint(0x1F600));
//!
//! assert_eq!(255_u32.to_hex(), "FF");
//! assert_eq!(to_hex_byte(5), "05");
//! assert_eq!(try_parse_hex::<u32>("ff"), Some(255));
//! ```
//!
//! All the modules are re-exported, making them available from the top-level
//! crate; more info on this
//! [here](https://doc.rust-lang.org/book/ch07-04-bringing-paths-into-scope-with-the-use-keyword.html?highlight=module%20re-export#re-exporting-names-with-pub-use).

// Attach.
pub mod code_points;
pub mod common;
pub mod hex;
pub mod stack_alloc_types;

// Re-export.
pub use code_points::*;
pub use common::*;
pub use hex::*;
pub use stack_alloc_types::*;
