// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stack allocated storage for the small strings and lists this crate produces.

use smallstr::SmallString;
use smallvec::SmallVec;

/// The longest escape code this crate writes is `"\x1b[38;2;255;255;255m"` which is 19
/// bytes, so every single escape code fits without spilling.
pub const ESC_CODE_STORAGE_SIZE: usize = 24;

/// Stack allocated storage for one escape code. When this gets larger than
/// [`ESC_CODE_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the heap.
pub type InlineEscCode = SmallString<[u8; ESC_CODE_STORAGE_SIZE]>;

/// Stack allocated list, that can [`smallvec::SmallVec::spilled`] into the heap if it
/// gets larger than [`INLINE_VEC_SIZE`].
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;
