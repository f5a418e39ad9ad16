use std::fmt;

use crate::error::RangeError;
use crate::mask;
use crate::word::Word;

/// A contiguous run of bits `[index, index + size)` inside a `W`.
///
/// The mask is computed once, when the range is built, so a `Range` kept around for a
/// register field costs a single `&`/`|` per operation afterwards. Every operation takes the
/// value it works on and returns a new one, nothing is mutated in place.
///
/// ```
/// use bitrange::Range;
///
/// let funct3 = Range::<u32>::new(12, 3);
/// let instruction = funct3.set_at(0x0000_0033, 0b101);
/// assert_eq!(instruction, 0x0000_5033);
/// assert_eq!(funct3.get_at(instruction), 0b101);
/// ```
///
/// A range with `size == 0` is fine: its mask is `0`, so it's "all set" and "none set" for
/// every value, and setting/clearing/flipping it changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Span", into = "Span", bound = "W: Word")
)]
pub struct Range<W> {
    index: u8,
    size: u8,
    mask: W,
}

/// Plain `(index, size)` pair, not validated against any width yet.
///
/// This is what a [`Range`] looks like when (de)serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub index: u8,
    pub size: u8,
}

impl<W: Word> Range<W> {
    /// # Panics
    /// If `index` isn't a bit position of `W`, or if `index + size` goes past the end of it.
    /// Use [`Range::try_new`] if the bounds come from somewhere you don't control.
    #[inline]
    #[track_caller]
    pub fn new(index: u8, size: u8) -> Self {
        match Self::try_new(index, size) {
            Ok(range) => range,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_new(index: u8, size: u8) -> Result<Self, RangeError> {
        RangeError::check(index, size, W::BITS)?;
        Ok(Self {
            index,
            size,
            mask: mask::raw_mask(index, size),
        })
    }

    /// The range `0..=index`
    #[track_caller]
    pub fn up_to(index: u8) -> Self {
        RangeError::ensure(index, 1, W::BITS);
        Self {
            index: 0,
            size: index + 1,
            mask: mask::raw_mask_up_to(index),
        }
    }

    #[inline]
    pub fn index(&self) -> u8 {
        self.index
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// One past the last bit of the range
    #[inline]
    pub fn end(&self) -> u8 {
        self.index + self.size
    }

    #[inline]
    pub fn mask(&self) -> W {
        self.mask
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Whether bit `bit` falls inside the range
    #[inline]
    pub fn contains(&self, bit: u8) -> bool {
        (self.index..self.end()).contains(&bit)
    }

    /// Largest value [`Range::get_at`] can return, i.e. the mask shifted down to bit 0
    #[inline]
    pub fn field_max(&self) -> W {
        self.mask >> self.shift()
    }

    #[inline]
    pub fn is_all_set(&self, value: W) -> bool {
        (value & self.mask) == self.mask
    }

    #[inline]
    pub fn is_any_set(&self, value: W) -> bool {
        (value & self.mask) != W::ZERO
    }

    #[inline]
    pub fn is_none_set(&self, value: W) -> bool {
        (value & self.mask) == W::ZERO
    }

    #[inline]
    pub fn set(&self, value: W) -> W {
        value | self.mask
    }

    #[inline]
    pub fn clear(&self, value: W) -> W {
        value & !self.mask
    }

    #[inline]
    pub fn flip(&self, value: W) -> W {
        value ^ self.mask
    }

    /// Reads the bits in the range, shifted down so the first one ends up at bit 0
    #[inline]
    pub fn get_at(&self, value: W) -> W {
        (value & self.mask) >> self.shift()
    }

    /// Writes `field` into the range. Bits of `field` that don't fit in `size` are dropped,
    /// and bits of `value` outside the range are left untouched.
    #[inline]
    pub fn set_at(&self, value: W, field: W) -> W {
        (value & !self.mask) | ((field << self.shift()) & self.mask)
    }

    #[inline]
    fn shift(&self) -> u32 {
        u32::from(self.index)
    }
}

impl<W: Word> TryFrom<Span> for Range<W> {
    type Error = RangeError;

    fn try_from(span: Span) -> Result<Self, Self::Error> {
        Self::try_new(span.index, span.size)
    }
}

impl<W: Word> From<Range<W>> for Span {
    fn from(range: Range<W>) -> Self {
        Span {
            index: range.index,
            size: range.size,
        }
    }
}

/// `start..end`, in bit positions
impl<W: Word> TryFrom<std::ops::Range<u8>> for Range<W> {
    type Error = RangeError;

    fn try_from(range: std::ops::Range<u8>) -> Result<Self, Self::Error> {
        let size = range.end.checked_sub(range.start).ok_or(RangeError::Reversed {
            start: range.start,
            end: range.end,
        })?;
        Self::try_new(range.start, size)
    }
}

impl<W> fmt::Display for Range<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.index, self.index + self.size)
    }
}
