// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are
///    [`std::error::Error`] wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ any error type that implements
///   [`miette::Diagnostic`], eg: [`crate::CodePointError`].
///
/// Note that the hex parsing surface of this crate does not use this alias:
/// a hex parse failure is an expected outcome, surfaced as [`None`] from
/// [`crate::try_parse_hex`], which callers must match before using the value.
pub type CommonResult<T> = miette::Result<T>;
