//! Cantor pairing function, a bijection between pairs of naturals and the
//! naturals. Useful for hashing 2D grid coordinates into a single key.
//!
//! https://en.wikipedia.org/wiki/Pairing_function#Cantor_pairing_function

/// Maps `(x, y)` to a unique natural number.
///
/// Exact while `(x + y) * (x + y + 1) / 2 + y` fits in a `u64`. Past that the
/// arithmetic wraps, so the result is still usable as a hash but no longer
/// invertible with [`cantor_unpair`].
#[inline]
pub fn cantor_pair(x: u64, y: u64) -> u64 {
    let sum = x.wrapping_add(y);
    // halve the even factor first so the product only wraps when the
    // triangular number itself exceeds u64
    let triangular = if sum % 2 == 0 {
        (sum / 2).wrapping_mul(sum.wrapping_add(1))
    } else {
        sum.wrapping_mul(sum.wrapping_add(1) / 2)
    };
    triangular.wrapping_add(y)
}

/// Inverse of [`cantor_pair`].
pub fn cantor_unpair(z: u64) -> (u64, u64) {
    // w is the largest integer with w * (w + 1) / 2 <= z
    let mut w = ((8 * z as u128 + 1).isqrt() as u64 - 1) / 2;
    while triangular(w + 1) <= z as u128 {
        w += 1;
    }
    while triangular(w) > z as u128 {
        w -= 1;
    }

    let y = z - triangular(w) as u64;
    let x = w - y;
    (x, y)
}

#[inline]
fn triangular(n: u64) -> u128 {
    let n = n as u128;
    n * (n + 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAIRS: [((u64, u64), u64); 16] = [
        ((0, 0), 0),
        ((0, 1), 2),
        ((0, 2), 5),
        ((0, 3), 9),
        ((1, 0), 1),
        ((1, 1), 4),
        ((1, 2), 8),
        ((1, 3), 13),
        ((2, 0), 3),
        ((2, 1), 7),
        ((2, 2), 12),
        ((2, 3), 18),
        ((3, 0), 6),
        ((3, 1), 11),
        ((3, 2), 17),
        ((3, 3), 24),
    ];

    #[test]
    fn test_cantor_pair() {
        for ((x, y), expected) in PAIRS {
            assert_eq!(cantor_pair(x, y), expected, "cantor_pair({x}, {y})");
        }
    }

    #[test]
    fn test_cantor_unpair() {
        for ((x, y), z) in PAIRS {
            assert_eq!(cantor_unpair(z), (x, y), "cantor_unpair({z})");
        }
    }

    #[test]
    fn test_cantor_unpair_large_values() {
        let (x, y) = (3_000_000_000, 1_234_567_890);
        assert_eq!(cantor_unpair(cantor_pair(x, y)), (x, y));
    }

    #[test]
    fn test_cantor_pair_wraps_past_u64() {
        let max = u32::MAX as u64;
        let first = cantor_pair(max, max);
        assert_eq!(first, cantor_pair(max, max));
        assert_ne!(first, cantor_pair(max, max - 1));

        let _ = cantor_pair(u64::MAX, u64::MAX);
    }

    #[test]
    fn test_cantor_pair_exact_near_u64_limit() {
        // triangular(6_000_000_000) is 1.8e19, just under u64::MAX
        let (x, y) = (5_000_000_000, 1_000_000_000);
        assert_eq!(cantor_unpair(cantor_pair(x, y)), (x, y));
    }

    #[test]
    fn test_cantor_pair_is_injective_on_grid() {
        let mut seen = std::collections::HashSet::new();
        for x in 0..64 {
            for y in 0..64 {
                assert!(seen.insert(cantor_pair(x, y)));
            }
        }
    }
}
