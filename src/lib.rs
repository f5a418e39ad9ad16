//!
//! bitrange computes masks over fixed-width unsigned integers and reads, writes, sets, clears
//! and flips ranges of bits with them. It's meant as the bottom layer for things like register
//! fields, flag words and instruction encodings, which can then be written in terms of a few
//! named [`Range`]s instead of a soup of shifts.
//!
//! There are three ways of doing the same thing, and they all agree bit for bit:
//! - free functions taking the position every time: [`set(value, 4, 3)`](set), [`get_at`], ...
//! - a [`Range`] (or an [`Index`] for a single bit) built once, with its mask precomputed;
//! - the [`BitOps`] extension trait, for `value.field(&range)` style calls.
//!
//! Everything is generic over [`Word`], implemented for `u8` through `u128` and `usize`. The
//! result always has the same width as the input.
//!
//! A range that doesn't fit in its integer is a bug in the caller, so the plain constructors
//! and the free functions panic on it. [`Range::try_new`] and [`Index::try_new`] return a
//! [`RangeError`] instead, for bounds read from a file or some other untrusted place.
//!

pub mod error;
pub mod index;
pub mod mask;
pub mod ops;
pub mod range;
pub mod word;

pub use error::RangeError;
pub use index::Index;
pub use mask::{bit_width, mask, mask_bit, mask_up_to};
pub use ops::{
    assign_bit, clear, clear_bit, flip, flip_bit, get_at, is_all_set, is_any_set, is_clear,
    is_none_set, is_set, set, set_at, set_bit, BitOps,
};
pub use range::{Range, Span};
pub use word::Word;
