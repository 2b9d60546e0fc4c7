//! Basis-index bit insertion.
//!
//! Embedding a small gate into the full operator space needs to know where
//! a spectator basis index lands once the gate's own qubits are spliced
//! back in. These two functions compute that directly on the integer
//! index, avoiding explicit identity-interleaved tensor chains.

/// Insert `bit` at `position` of the basis index `k`.
///
/// The low `position` bits of `k` are kept, everything above is shifted up
/// by one, and `bit` fills the gap, turning an N-bit index into an
/// (N+1)-bit index.
#[inline]
pub fn insert_one(bit: usize, position: usize, k: usize) -> usize {
    debug_assert!(bit <= 1, "bit must be 0 or 1");
    let lowbits = k & ((1 << position) - 1);
    let mut index = k >> position;
    index <<= 1;
    index |= bit;
    index <<= position;
    index | lowbits
}

/// Insert `bit_a` at `pos_a` and `bit_b` at `pos_b` of the basis index `k`.
///
/// The higher position is inserted first, adjusted down by one because the
/// second insertion will shift it back up. Positions refer to the final
/// (N+2)-bit index and must be distinct; the caller enforces that as a
/// precondition.
#[inline]
pub fn insert_two(bit_a: usize, pos_a: usize, bit_b: usize, pos_b: usize, k: usize) -> usize {
    debug_assert_ne!(pos_a, pos_b, "insertion positions must differ");

    if pos_a > pos_b {
        let index = insert_one(bit_a, pos_a - 1, k);
        insert_one(bit_b, pos_b, index)
    } else {
        let index = insert_one(bit_b, pos_b - 1, k);
        insert_one(bit_a, pos_a, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_one_at_bottom() {
        // k = 0b101, insert 1 at position 0 → 0b1011.
        assert_eq!(insert_one(1, 0, 0b101), 0b1011);
        assert_eq!(insert_one(0, 0, 0b101), 0b1010);
    }

    #[test]
    fn test_insert_one_in_middle() {
        // k = 0b101, insert 0 at position 1 → 0b1001.
        assert_eq!(insert_one(0, 1, 0b101), 0b1001);
        assert_eq!(insert_one(1, 1, 0b101), 0b1011);
    }

    #[test]
    fn test_insert_one_at_top() {
        assert_eq!(insert_one(1, 3, 0b101), 0b1101);
    }

    #[test]
    fn test_insert_two_orders_agree() {
        // Inserting (a at 0, b at 2) must mean the same thing regardless of
        // which argument slot carries the higher position.
        for k in 0..8 {
            for a in 0..2 {
                for b in 0..2 {
                    assert_eq!(
                        insert_two(a, 0, b, 2, k),
                        insert_two(b, 2, a, 0, k),
                    );
                }
            }
        }
    }

    #[test]
    fn test_insert_two_bits_land_at_their_positions() {
        for k in 0..16 {
            for a in 0..2 {
                for b in 0..2 {
                    let idx = insert_two(a, 1, b, 3, k);
                    assert_eq!((idx >> 1) & 1, a);
                    assert_eq!((idx >> 3) & 1, b);
                }
            }
        }
    }

    #[test]
    fn test_insert_two_n2_is_trivial() {
        // With no spectator bits the index is just b·2 + a for positions (0, 1).
        assert_eq!(insert_two(1, 0, 0, 1, 0), 1);
        assert_eq!(insert_two(0, 0, 1, 1, 0), 2);
        assert_eq!(insert_two(1, 0, 1, 1, 0), 3);
    }
}
