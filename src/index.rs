use crate::error::RangeError;
use crate::range::Range;
use crate::word::Word;

/// A single bit of a `W`.
///
/// This is just a [`Range`] of size 1 with friendlier names (`is_set` instead of
/// `is_all_set`, and so on). Everything goes through the inner range, so an `Index` can never
/// disagree with the equivalent `Range`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8", bound = "W: Word")
)]
pub struct Index<W>(Range<W>);

impl<W: Word> Index<W> {
    /// # Panics
    /// If `index` isn't a bit position of `W`
    #[inline]
    #[track_caller]
    pub fn new(index: u8) -> Self {
        Self(Range::new(index, 1))
    }

    pub fn try_new(index: u8) -> Result<Self, RangeError> {
        Range::try_new(index, 1).map(Self)
    }

    #[inline]
    pub fn index(&self) -> u8 {
        self.0.index()
    }

    #[inline]
    pub fn mask(&self) -> W {
        self.0.mask()
    }

    /// The size-1 range behind this bit
    #[inline]
    pub fn range(&self) -> Range<W> {
        self.0
    }

    #[inline]
    pub fn is_set(&self, value: W) -> bool {
        self.0.is_all_set(value)
    }

    #[inline]
    pub fn is_clear(&self, value: W) -> bool {
        self.0.is_none_set(value)
    }

    #[inline]
    pub fn set(&self, value: W) -> W {
        self.0.set(value)
    }

    #[inline]
    pub fn clear(&self, value: W) -> W {
        self.0.clear(value)
    }

    #[inline]
    pub fn flip(&self, value: W) -> W {
        self.0.flip(value)
    }

    /// Sets the bit if `on`, clears it otherwise
    #[inline]
    pub fn assign(&self, value: W, on: bool) -> W {
        if on {
            self.set(value)
        } else {
            self.clear(value)
        }
    }
}

impl<W: Word> TryFrom<u8> for Index<W> {
    type Error = RangeError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::try_new(index)
    }
}

impl<W: Word> From<Index<W>> for u8 {
    fn from(index: Index<W>) -> Self {
        index.index()
    }
}

impl<W> From<Index<W>> for Range<W> {
    fn from(index: Index<W>) -> Self {
        index.0
    }
}
