//! The decimation engine: one saturated PCM sample per 512-bit window.

use crate::tables::PDM_FIR_TABLE;
use crate::{RSHIFT, WINDOW_WORDS};

/// Add the contributions of one packed word (four tap groups) to the
/// accumulator. Bits are consumed MSB-first, matching the capture order.
#[inline]
fn accumulate(sum: &mut i32, group: &mut usize, word: u32) {
    for byte in word.to_be_bytes() {
        *sum += PDM_FIR_TABLE[(*group << 8) | byte as usize] as i32;
        *group += 1;
    }
}

/// Arithmetic right shift with round-to-nearest, saturated to `i16`.
///
/// The table entries already carry the coefficient fixed-point scale, so
/// the accumulated sum only needs the gain trim before clamping. Ties
/// round toward positive infinity.
#[inline]
pub fn saturating_rshift(sum: i32, shift: u32) -> i16 {
    let rounded = if shift == 0 {
        sum
    } else {
        sum.saturating_add(1 << (shift - 1)) >> shift
    };
    rounded.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}

/// Filter one contiguous window. Reads exactly [`WINDOW_WORDS`] leading
/// words of `window`; the caller is responsible for supplying them in
/// capture order (a misaligned window yields wrong, but safe, output).
pub fn filter_sample(window: &[u32]) -> i16 {
    debug_assert!(window.len() >= WINDOW_WORDS);
    let mut sum = 0i32;
    let mut group = 0usize;
    for &word in &window[..WINDOW_WORDS] {
        accumulate(&mut sum, &mut group, word);
    }
    saturating_rshift(sum, RSHIFT)
}

/// Filter a window that straddles the half boundary: all of `head`
/// (carry-over words from the previous half) followed by the leading
/// `WINDOW_WORDS - head.len()` words of `tail`. Numerically identical to
/// [`filter_sample`] on the concatenation of the two sources.
pub fn filter_sample_split(head: &[u32], tail: &[u32]) -> i16 {
    debug_assert!(head.len() <= WINDOW_WORDS);
    debug_assert!(tail.len() >= WINDOW_WORDS - head.len());
    let mut sum = 0i32;
    let mut group = 0usize;
    for &word in head {
        accumulate(&mut sum, &mut group, word);
    }
    for &word in &tail[..WINDOW_WORDS - head.len()] {
        accumulate(&mut sum, &mut group, word);
    }
    saturating_rshift(sum, RSHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    // Reference sums over the checked-in table, computed offline:
    // sum of table[g][0x00] and table[g][0xFF] for g in 0..64.
    const ALL_ZERO_SUM: i32 = -373456;
    const ALL_ONE_SUM: i32 = 373456;

    fn window_of(byte: u8) -> [u32; WINDOW_WORDS] {
        [u32::from_be_bytes([byte; 4]); WINDOW_WORDS]
    }

    #[test]
    fn all_zero_window_matches_reference() {
        assert_eq!(
            filter_sample(&window_of(0x00)),
            saturating_rshift(ALL_ZERO_SUM, RSHIFT)
        );
        // Full-scale negative density saturates at this gain trim.
        assert_eq!(filter_sample(&window_of(0x00)), i16::MIN);
    }

    #[test]
    fn all_one_window_matches_reference() {
        assert_eq!(
            filter_sample(&window_of(0xFF)),
            saturating_rshift(ALL_ONE_SUM, RSHIFT)
        );
        assert_eq!(filter_sample(&window_of(0xFF)), i16::MAX);
    }

    #[test]
    fn half_density_window_is_silent() {
        // 0xAA and 0x55 are exactly 50% ones; the per-group signed sums
        // cancel to zero for this filter design.
        assert_eq!(filter_sample(&window_of(0xAA)), 0);
        assert_eq!(filter_sample(&window_of(0x55)), 0);
    }

    #[test]
    fn split_matches_contiguous() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..100 {
            let mut window = [0u32; WINDOW_WORDS];
            for word in window.iter_mut() {
                *word = rng.gen();
            }
            let whole = filter_sample(&window);
            for split in 0..=WINDOW_WORDS {
                let (head, tail) = window.split_at(split);
                assert_eq!(filter_sample_split(head, tail), whole, "split {}", split);
            }
        }
    }

    #[test]
    fn saturation_clamps_instead_of_wrapping() {
        // Per-group extreme bytes drive the accumulator past the
        // representable range in both directions.
        let mut max_window = [0u32; WINDOW_WORDS];
        let mut min_window = [0u32; WINDOW_WORDS];
        let mut max_sum = 0i32;
        let mut min_sum = 0i32;
        for w in 0..WINDOW_WORDS {
            let mut max_bytes = [0u8; 4];
            let mut min_bytes = [0u8; 4];
            for (i, g) in (w * 4..w * 4 + 4).enumerate() {
                let entries = &PDM_FIR_TABLE[(g << 8)..((g + 1) << 8)];
                let hi = (0..256usize).max_by_key(|&b| entries[b]).unwrap();
                let lo = (0..256usize).min_by_key(|&b| entries[b]).unwrap();
                max_bytes[i] = hi as u8;
                min_bytes[i] = lo as u8;
                max_sum += entries[hi] as i32;
                min_sum += entries[lo] as i32;
            }
            max_window[w] = u32::from_be_bytes(max_bytes);
            min_window[w] = u32::from_be_bytes(min_bytes);
        }
        // Sanity: the raw sums really do exceed the saturation thresholds.
        assert!(max_sum > (i16::MAX as i32) << RSHIFT);
        assert!(min_sum < (i16::MIN as i32) << RSHIFT);

        assert_eq!(filter_sample(&max_window), i16::MAX);
        assert_eq!(filter_sample(&min_window), i16::MIN);
    }

    #[test]
    fn rshift_rounds_to_nearest() {
        assert_eq!(saturating_rshift(5, 2), 1);
        assert_eq!(saturating_rshift(6, 2), 2);
        assert_eq!(saturating_rshift(-5, 2), -1);
        assert_eq!(saturating_rshift(-6, 2), -1); // ties toward +inf
        assert_eq!(saturating_rshift(7, 0), 7);
        assert_eq!(saturating_rshift(i32::MAX, 2), i16::MAX);
        assert_eq!(saturating_rshift(i32::MIN, 2), i16::MIN);
    }
}
