use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

mod sealed {
    pub trait Sealed {}
}

/// An unsigned, fixed-width integer that masks and ranges can be computed over.
///
/// Everything in this crate is generic over `Word` instead of being written once per width,
/// so a [`Range<u8>`](crate::Range) and a [`Range<u64>`](crate::Range) go through exactly the
/// same arithmetic. The trait is sealed: signed integers are deliberately left out, since
/// `>>` on them drags the sign bit along and would break [`mask_up_to`](crate::mask_up_to).
pub trait Word:
    sealed::Sealed
    + Copy
    + Eq
    + fmt::Debug
    + fmt::Binary
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Number of bits in the type
    const BITS: u8;
    const ZERO: Self;
    /// All bits set
    const MAX: Self;
}

macro_rules! impl_word {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Word for $t {
                const BITS: u8 = (std::mem::size_of::<$t>() * 8) as u8;
                const ZERO: Self = 0;
                const MAX: Self = <$t>::MAX;
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64, u128, usize);
