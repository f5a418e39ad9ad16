//! Mask arithmetic.
//!
//! The obvious way of writing "the lowest `n` bits" is `(1 << n) - 1`, which blows up when
//! `n` is the width of the type: shifting a `u32` by 32 is an overflow in Rust (and UB in C).
//! Instead, everything here starts from `MAX` and shifts it *right*, so the shift amount is
//! always in `0..BITS`.

use crate::error::RangeError;
use crate::word::Word;

/// Number of bits in `W`
#[inline]
pub fn bit_width<W: Word>() -> u8 {
    W::BITS
}

/// Mask with bits `0..=index` set, so `mask_up_to::<u32>(31) == u32::MAX`.
///
/// # Panics
/// If `index` isn't a bit position of `W`
#[inline]
#[track_caller]
pub fn mask_up_to<W: Word>(index: u8) -> W {
    RangeError::ensure(index, 1, W::BITS);
    raw_mask_up_to(index)
}

/// Mask with only bit `index` set. Same as `mask(index, 1)`.
///
/// # Panics
/// If `index` isn't a bit position of `W`
#[inline]
#[track_caller]
pub fn mask_bit<W: Word>(index: u8) -> W {
    mask(index, 1)
}

/// Mask with `size` bits set, starting at bit `index`. `mask(i, 0)` is always `0`.
///
/// ```
/// assert_eq!(bitrange::mask::<u32>(4, 3), 0x70);
/// assert_eq!(bitrange::mask::<u8>(0, 8), 0xff);
/// ```
///
/// # Panics
/// If `index` isn't a bit position of `W`, or if `index + size` goes past the end of it
#[inline]
#[track_caller]
pub fn mask<W: Word>(index: u8, size: u8) -> W {
    RangeError::ensure(index, size, W::BITS);
    raw_mask(index, size)
}

/// `index` must be `< W::BITS`
#[inline]
pub(crate) fn raw_mask_up_to<W: Word>(index: u8) -> W {
    W::MAX >> u32::from(W::BITS - 1 - index)
}

/// `index + size` must be `<= W::BITS`
#[inline]
pub(crate) fn raw_mask<W: Word>(index: u8, size: u8) -> W {
    if size == 0 {
        return W::ZERO;
    }

    let upper = raw_mask_up_to::<W>(index + size - 1);
    if index == 0 {
        upper
    } else {
        upper & !raw_mask_up_to::<W>(index - 1)
    }
}
