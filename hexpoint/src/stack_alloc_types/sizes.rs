// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Be very careful when adjusting these tuning parameters. The rule of thumb
//! is that smaller static allocation sizes are better than larger. There is a
//! tradeoff between pre-allocating large amounts of memory and allocating
//! small amounts (on the heap) as you need it. Huge stack allocations can
//! also cause stack overflow errors.

use smallstr::SmallString;
use smallvec::SmallVec;

/// Stack allocated string storage for small strings. When this gets larger
/// than [`DEFAULT_STRING_STORAGE_SIZE`], it will be
/// [`smallvec::SmallVec::spilled`] on the heap. A machine-width integer
/// rendered as hex is at most 32 digits (`u128`), but the common cases
/// (`u32`/`u64`) fit inline.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Stack allocated tiny string storage for small char sequences, eg: the two
/// digit output of [`crate::to_hex_byte`]. When this gets larger than
/// [`DEFAULT_CHAR_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`]
/// on the heap.
pub type TinyInlineString = SmallString<[u8; DEFAULT_CHAR_STORAGE_SIZE]>;
pub const DEFAULT_CHAR_STORAGE_SIZE: usize = 4;

/// Stack allocated list, that can [`smallvec::SmallVec::spilled`] into the
/// heap if it gets larger than [`INLINE_VEC_SIZE`].
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;
