//! Property tests for the bit-insertion index functions.

use alsvid_sim::{insert_one, insert_two};
use proptest::prelude::*;

/// Reference model: write out the final bit pattern position by position,
/// drawing spectator bits from `k` in order.
fn reference_insert_two(
    bit_a: usize,
    pos_a: usize,
    bit_b: usize,
    pos_b: usize,
    k: usize,
) -> usize {
    let mut out = 0;
    let mut next = 0;
    for pos in 0..16 {
        let bit = if pos == pos_a {
            bit_a
        } else if pos == pos_b {
            bit_b
        } else {
            let b = (k >> next) & 1;
            next += 1;
            b
        };
        out |= bit << pos;
    }
    out
}

proptest! {
    /// The inserted bit is readable back at its position.
    #[test]
    fn insert_one_places_the_bit(bit in 0usize..2, position in 0usize..10, k in 0usize..1024) {
        let index = insert_one(bit, position, k);
        prop_assert_eq!((index >> position) & 1, bit);
    }

    /// Bits below the insertion point are untouched, bits above shift up.
    #[test]
    fn insert_one_preserves_spectators(bit in 0usize..2, position in 0usize..10, k in 0usize..1024) {
        let index = insert_one(bit, position, k);
        let low_mask = (1 << position) - 1;
        prop_assert_eq!(index & low_mask, k & low_mask);
        prop_assert_eq!(index >> (position + 1), k >> position);
    }

    /// Inserting then deleting the bit round-trips to the original index.
    #[test]
    fn insert_one_roundtrips(bit in 0usize..2, position in 0usize..10, k in 0usize..1024) {
        let index = insert_one(bit, position, k);
        let low = index & ((1 << position) - 1);
        let high = (index >> (position + 1)) << position;
        prop_assert_eq!(high | low, k);
    }

    /// The double insertion matches the position-by-position reference model.
    #[test]
    fn insert_two_matches_reference(
        bit_a in 0usize..2,
        bit_b in 0usize..2,
        (pos_a, pos_b) in (0usize..12, 0usize..12).prop_filter(
            "Insertion positions must differ", |(a, b)| a != b
        ),
        k in 0usize..1024,
    ) {
        prop_assert_eq!(
            insert_two(bit_a, pos_a, bit_b, pos_b, k),
            reference_insert_two(bit_a, pos_a, bit_b, pos_b, k)
        );
    }

    /// Swapping the argument pairs cannot change the result.
    #[test]
    fn insert_two_is_symmetric_in_its_pairs(
        bit_a in 0usize..2,
        bit_b in 0usize..2,
        (pos_a, pos_b) in (0usize..12, 0usize..12).prop_filter(
            "Insertion positions must differ", |(a, b)| a != b
        ),
        k in 0usize..1024,
    ) {
        prop_assert_eq!(
            insert_two(bit_a, pos_a, bit_b, pos_b, k),
            insert_two(bit_b, pos_b, bit_a, pos_a, k)
        );
    }
}
