use bitrange::*;
use proptest::prelude::*;

/// Generates the same set of properties for every integer width
macro_rules! properties {
    ($name:ident, $t:ty) => {
        mod $name {
            use super::*;

            const BITS: u8 = <$t>::BITS as u8;

            /// Any `(index, size)` that fits
            fn bounds() -> impl Strategy<Value = (u8, u8)> {
                (0..BITS).prop_flat_map(|index| (Just(index), 0..=BITS - index))
            }

            /// Two ranges that don't share any bit, in either order
            fn disjoint() -> impl Strategy<Value = ((u8, u8), (u8, u8))> {
                (prop::collection::vec(0..=BITS, 4), any::<bool>()).prop_map(|(mut cuts, swap)| {
                    cuts.sort_unstable();
                    let first = span(cuts[0], cuts[1]);
                    let second = span(cuts[2], cuts[3]);
                    if swap {
                        (second, first)
                    } else {
                        (first, second)
                    }
                })
            }

            /// `[start, end)` as `(index, size)`, keeping the index a real bit position
            fn span(start: u8, end: u8) -> (u8, u8) {
                (start.min(BITS - 1), end - start)
            }

            /// Builds the mask one bit at a time
            fn reference(index: u8, size: u8) -> $t {
                let mut mask: $t = 0;
                for bit in index..index + size {
                    mask |= (1 as $t) << bit;
                }
                mask
            }

            #[test]
            fn mask_up_to_last_bit_is_max() {
                assert_eq!(mask_up_to::<$t>(BITS - 1), <$t>::MAX);
                assert_eq!(mask::<$t>(0, BITS), <$t>::MAX);
                assert_eq!(bit_width::<$t>(), BITS);
            }

            proptest! {
                #[test]
                fn mask_matches_reference((index, size) in bounds()) {
                    prop_assert_eq!(mask::<$t>(index, size), reference(index, size));
                    prop_assert_eq!(Range::<$t>::new(index, size).mask(), reference(index, size));
                }

                #[test]
                fn mask_up_to_matches_reference(index in 0..BITS) {
                    prop_assert_eq!(mask_up_to::<$t>(index), reference(0, index + 1));
                    prop_assert_eq!(Range::<$t>::up_to(index).mask(), reference(0, index + 1));
                }

                #[test]
                fn single_bit_is_size_one(index in 0..BITS, value in any::<$t>()) {
                    prop_assert_eq!(mask_bit::<$t>(index), mask::<$t>(index, 1));
                    prop_assert_eq!(is_set(value, index), is_all_set(value, index, 1));
                    prop_assert_eq!(is_clear(value, index), is_none_set(value, index, 1));
                    prop_assert_eq!(set_bit(value, index), set(value, index, 1));
                    prop_assert_eq!(clear_bit(value, index), clear(value, index, 1));
                    prop_assert_eq!(flip_bit(value, index), flip(value, index, 1));
                }

                #[test]
                fn set_and_clear_are_idempotent(index in 0..BITS, value in any::<$t>()) {
                    let once = set_bit(value, index);
                    prop_assert_eq!(set_bit(once, index), once);
                    prop_assert!(is_set(once, index));

                    let once = clear_bit(value, index);
                    prop_assert_eq!(clear_bit(once, index), once);
                    prop_assert!(is_clear(once, index));
                }

                #[test]
                fn flip_is_an_involution((index, size) in bounds(), value in any::<$t>()) {
                    prop_assert_eq!(flip(flip(value, index, size), index, size), value);
                }

                #[test]
                fn set_at_get_at_roundtrip((index, size) in bounds(), value in any::<$t>()) {
                    prop_assert_eq!(set_at(value, index, size, get_at(value, index, size)), value);
                }

                #[test]
                fn set_at_clips_the_field(
                    (index, size) in bounds(),
                    value in any::<$t>(),
                    field in any::<$t>()
                ) {
                    let range = Range::<$t>::new(index, size);
                    let written = range.set_at(value, field);
                    prop_assert_eq!(range.get_at(written), field & range.field_max());
                    prop_assert_eq!(written & !range.mask(), value & !range.mask());
                }

                #[test]
                fn disjoint_ranges_dont_interfere(
                    ((i1, s1), (i2, s2)) in disjoint(),
                    value in any::<$t>()
                ) {
                    let cleared = clear(value, i1, s1);
                    let both = set(cleared, i2, s2);
                    let outside = !mask::<$t>(i2, s2);
                    prop_assert_eq!(both & outside, cleared & outside);
                    prop_assert!(is_none_set(both, i1, s1));
                    prop_assert!(is_all_set(both, i2, s2));
                }

                #[test]
                fn empty_range_is_a_noop(index in 0..BITS, value in any::<$t>()) {
                    prop_assert_eq!(mask::<$t>(index, 0), 0);
                    prop_assert!(is_all_set(value, index, 0));
                    prop_assert!(!is_any_set(value, index, 0));
                    prop_assert!(is_none_set(value, index, 0));
                    prop_assert_eq!(set(value, index, 0), value);
                    prop_assert_eq!(clear(value, index, 0), value);
                    prop_assert_eq!(flip(value, index, 0), value);
                    prop_assert_eq!(get_at(value, index, 0), 0);
                }

                #[test]
                fn predicates_agree((index, size) in bounds(), value in any::<$t>()) {
                    prop_assert_eq!(is_any_set(value, index, size), !is_none_set(value, index, size));
                    prop_assert!(is_all_set(set(value, index, size), index, size));
                    prop_assert!(is_none_set(clear(value, index, size), index, size));
                }

                #[test]
                fn views_agree_with_free_functions(
                    (index, size) in bounds(),
                    value in any::<$t>(),
                    field in any::<$t>()
                ) {
                    let range = Range::<$t>::new(index, size);
                    prop_assert_eq!(range.is_all_set(value), is_all_set(value, index, size));
                    prop_assert_eq!(range.is_any_set(value), is_any_set(value, index, size));
                    prop_assert_eq!(range.set(value), set(value, index, size));
                    prop_assert_eq!(range.clear(value), clear(value, index, size));
                    prop_assert_eq!(range.flip(value), flip(value, index, size));
                    prop_assert_eq!(range.get_at(value), get_at(value, index, size));
                    prop_assert_eq!(range.set_at(value, field), set_at(value, index, size, field));
                    prop_assert_eq!(value.field(&range), get_at(value, index, size));
                    prop_assert_eq!(value.with_field(&range, field), set_at(value, index, size, field));

                    let bit = Index::<$t>::new(index);
                    prop_assert_eq!(bit.is_set(value), range_of_one(index).is_all_set(value));
                    prop_assert_eq!(bit.flip(value), flip_bit(value, index));
                }

                #[test]
                fn try_new_rejects_only_out_of_bounds(index in any::<u8>(), size in any::<u8>()) {
                    let fits = index < BITS && u16::from(index) + u16::from(size) <= u16::from(BITS);
                    prop_assert_eq!(Range::<$t>::try_new(index, size).is_ok(), fits);
                }
            }

            fn range_of_one(index: u8) -> Range<$t> {
                Range::new(index, 1)
            }
        }
    };
}

properties!(width_8, u8);
properties!(width_16, u16);
properties!(width_32, u32);
properties!(width_64, u64);
properties!(width_128, u128);
properties!(width_usize, usize);
