//! The same operations as [`Range`] and [`Index`], but taking the bit position (and size) on
//! every call. Handy for one-off accesses; if the same field is touched over and over, build a
//! [`Range`] once and keep it around instead.
//!
//! Every function here panics if the range doesn't fit in `W`, see [`RangeError`].
//!
//! [`RangeError`]: crate::RangeError

use crate::index::Index;
use crate::range::Range;
use crate::word::Word;

#[inline]
#[track_caller]
pub fn is_set<W: Word>(value: W, index: u8) -> bool {
    Index::new(index).is_set(value)
}

#[inline]
#[track_caller]
pub fn is_clear<W: Word>(value: W, index: u8) -> bool {
    Index::new(index).is_clear(value)
}

#[inline]
#[track_caller]
pub fn set_bit<W: Word>(value: W, index: u8) -> W {
    Index::new(index).set(value)
}

#[inline]
#[track_caller]
pub fn clear_bit<W: Word>(value: W, index: u8) -> W {
    Index::new(index).clear(value)
}

#[inline]
#[track_caller]
pub fn flip_bit<W: Word>(value: W, index: u8) -> W {
    Index::new(index).flip(value)
}

/// Sets bit `index` if `on`, clears it otherwise
#[inline]
#[track_caller]
pub fn assign_bit<W: Word>(value: W, index: u8, on: bool) -> W {
    Index::new(index).assign(value, on)
}

/// Whether all `size` bits starting at `index` are set. Always true when `size == 0`.
#[inline]
#[track_caller]
pub fn is_all_set<W: Word>(value: W, index: u8, size: u8) -> bool {
    Range::new(index, size).is_all_set(value)
}

/// Whether at least one of the `size` bits starting at `index` is set. Always false when
/// `size == 0`.
#[inline]
#[track_caller]
pub fn is_any_set<W: Word>(value: W, index: u8, size: u8) -> bool {
    Range::new(index, size).is_any_set(value)
}

#[inline]
#[track_caller]
pub fn is_none_set<W: Word>(value: W, index: u8, size: u8) -> bool {
    Range::new(index, size).is_none_set(value)
}

#[inline]
#[track_caller]
pub fn set<W: Word>(value: W, index: u8, size: u8) -> W {
    Range::new(index, size).set(value)
}

#[inline]
#[track_caller]
pub fn clear<W: Word>(value: W, index: u8, size: u8) -> W {
    Range::new(index, size).clear(value)
}

#[inline]
#[track_caller]
pub fn flip<W: Word>(value: W, index: u8, size: u8) -> W {
    Range::new(index, size).flip(value)
}

/// `size` bits of `value` starting at `index`, shifted down to bit 0
#[inline]
#[track_caller]
pub fn get_at<W: Word>(value: W, index: u8, size: u8) -> W {
    Range::new(index, size).get_at(value)
}

/// Writes `field` into the `size` bits of `value` starting at `index`. Extra bits of `field`
/// are dropped.
#[inline]
#[track_caller]
pub fn set_at<W: Word>(value: W, index: u8, size: u8, field: W) -> W {
    Range::new(index, size).set_at(value, field)
}

/// Method-call syntax for ranges and indices, on the integer itself:
///
/// ```
/// use bitrange::{BitOps, Index, Range};
///
/// let rd = Range::<u32>::new(7, 5);
/// let instruction = 0x0000_0033u32.with_field(&rd, 10);
/// assert_eq!(instruction.field(&rd), 10);
/// assert!(instruction.bit(&Index::new(8)));
/// ```
pub trait BitOps: Word {
    /// Keeps only the bits inside `range`, without shifting them
    #[inline]
    fn masked(self, range: &Range<Self>) -> Self {
        self & range.mask()
    }

    #[inline]
    fn field(self, range: &Range<Self>) -> Self {
        range.get_at(self)
    }

    #[inline]
    fn with_field(self, range: &Range<Self>, field: Self) -> Self {
        range.set_at(self, field)
    }

    #[inline]
    fn bit(self, index: &Index<Self>) -> bool {
        index.is_set(self)
    }

    #[inline]
    fn with_bit(self, index: &Index<Self>, on: bool) -> Self {
        index.assign(self, on)
    }
}

impl<W: Word> BitOps for W {}
