use owo_colors::OwoColorize;
use thiserror::Error;

/// A bit range that doesn't fit inside the integer it was meant for.
///
/// This is the only thing that can go wrong in the whole crate. The checked constructors
/// ([`Range::try_new`](crate::Range::try_new), [`Index::try_new`](crate::Index::try_new) and
/// the `TryFrom` impls) hand it back, everything else panics with its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Bit {} is out of bounds for a {}-bit value", .index.bright_yellow(), .width.bright_blue())]
    IndexOutOfBounds { index: u8, width: u8 },

    #[error(
        "{} bits starting at bit {} don't fit in a {}-bit value",
        .size.bright_yellow(),
        .index.bright_yellow(),
        .width.bright_blue()
    )]
    SizeOutOfBounds { index: u8, size: u8, width: u8 },

    #[error("Bit range {}..{} ends before it starts", .start.bright_yellow(), .end.bright_yellow())]
    Reversed { start: u8, end: u8 },
}

impl RangeError {
    /// Checks that `size` bits starting at `index` fit in a `width`-bit value.
    /// The index has to be a real bit position even when `size == 0`.
    pub(crate) fn check(index: u8, size: u8, width: u8) -> Result<(), Self> {
        if index >= width {
            Err(Self::IndexOutOfBounds { index, width })
        } else if u16::from(index) + u16::from(size) > u16::from(width) {
            Err(Self::SizeOutOfBounds { index, size, width })
        } else {
            Ok(())
        }
    }

    /// Same as [`RangeError::check`], but panics with the error message
    #[track_caller]
    pub(crate) fn ensure(index: u8, size: u8, width: u8) {
        if let Err(err) = Self::check(index, size, width) {
            panic!("{err}");
        }
    }
}
