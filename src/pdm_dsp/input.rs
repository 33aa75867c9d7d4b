//! Buffer-ready handling: one PCM block per capture-buffer half.

use log::info;

use crate::buffer::{BlockAllocator, CaptureBuffer, Half, PcmBlock};
use crate::filter::{filter_sample, filter_sample_split};
use crate::output::OutputSlot;
use crate::{BLOCK_SAMPLES, CARRY_WORDS, HALF_WORDS};

/// Consumes completed capture halves and produces PCM blocks.
///
/// Owns the carry-over words and the allocator handle; shares only the
/// output slot with the consumer context. Invocations are
/// run-to-completion and never overlap (the capture cadence guarantees
/// single flight), so no state here needs locking.
pub struct PdmInput<'a, A: BlockAllocator> {
    allocator: A,
    slot: &'a OutputSlot<A::Block>,
    carry: [u32; CARRY_WORDS],
}

impl<'a, A: BlockAllocator> PdmInput<'a, A> {
    pub fn new(allocator: A, slot: &'a OutputSlot<A::Block>) -> Self {
        Self {
            allocator,
            slot,
            carry: [0; CARRY_WORDS],
        }
    }

    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    /// Run one decimation period. `completed` names the half the capture
    /// source just finished writing; it is stable until the source wraps
    /// around, which is a full half-period away.
    pub fn handle_half_complete(&mut self, capture: &CaptureBuffer, completed: Half) {
        let stable = capture.half(completed);

        match self.allocator.allocate() {
            Some(mut block) => {
                self.fill_block(block.samples_mut(), stable);
                if let Some(stale) = self.slot.replace(block) {
                    // Consumer overrun: the displaced block is dropped,
                    // never forwarded.
                    self.allocator.release(stale);
                }
            }
            // One period of audio is lost; an audible glitch, not a
            // fault. No retry.
            None => info!("pcm block pool exhausted, dropping one period"),
        }

        // Keep the window chain seamless across the boundary even when
        // the period's output was dropped.
        self.carry.copy_from_slice(&stable[HALF_WORDS - CARRY_WORDS..]);
    }

    fn fill_block(&self, samples: &mut [i16; BLOCK_SAMPLES], stable: &[u32; HALF_WORDS]) {
        let mut n = 0;
        // The first seven windows straddle the half boundary: a shrinking
        // run of carry-over words completed from the front of the new
        // half.
        for skip in (0..CARRY_WORDS).step_by(2) {
            samples[n] = filter_sample_split(&self.carry[skip..], stable);
            n += 1;
        }
        // From the eighth sample on, windows lie entirely in the stable
        // half, two words apart.
        for offset in (0..HALF_WORDS - CARRY_WORDS).step_by(2) {
            samples[n] = filter_sample(&stable[offset..]);
            n += 1;
        }
        debug_assert_eq!(n, BLOCK_SAMPLES);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    pub struct TestBlock(pub [i16; BLOCK_SAMPLES]);

    impl PcmBlock for TestBlock {
        fn samples(&self) -> &[i16; BLOCK_SAMPLES] {
            &self.0
        }
        fn samples_mut(&mut self) -> &mut [i16; BLOCK_SAMPLES] {
            &mut self.0
        }
    }

    /// Allocator stub with an externally adjustable block budget and a
    /// release counter.
    pub struct TestAllocator {
        pub avail: Rc<Cell<usize>>,
        pub released: Rc<Cell<usize>>,
    }

    impl BlockAllocator for TestAllocator {
        type Block = TestBlock;

        fn allocate(&mut self) -> Option<TestBlock> {
            if self.avail.get() == 0 {
                return None;
            }
            self.avail.set(self.avail.get() - 1);
            Some(TestBlock([0; BLOCK_SAMPLES]))
        }

        fn release(&mut self, _block: TestBlock) {
            self.released.set(self.released.get() + 1);
        }
    }

    fn setup(avail: usize) -> (Rc<Cell<usize>>, Rc<Cell<usize>>, TestAllocator) {
        let avail = Rc::new(Cell::new(avail));
        let released = Rc::new(Cell::new(0));
        let allocator = TestAllocator {
            avail: avail.clone(),
            released: released.clone(),
        };
        (avail, released, allocator)
    }

    #[test]
    fn reads_the_completed_half() {
        let mut capture = CaptureBuffer::new();
        capture.half_mut(Half::First).fill(0xFFFF_FFFF);
        capture.half_mut(Half::Second).fill(0xAAAA_AAAA);

        let slot = OutputSlot::new();
        let (_, _, allocator) = setup(2);
        let mut input = PdmInput::new(allocator, &slot);

        input.handle_half_complete(&capture, Half::Second);
        let block = slot.take().expect("block for second half");
        // 50% density everywhere in the stable part of the window.
        assert_eq!(block.samples()[BLOCK_SAMPLES - 1], 0);

        input.handle_half_complete(&capture, Half::First);
        let block = slot.take().expect("block for first half");
        assert_eq!(block.samples()[BLOCK_SAMPLES - 1], i16::MAX);
    }

    #[test]
    fn boundary_samples_match_direct_split_calls() {
        let mut capture = CaptureBuffer::new();
        for (i, word) in capture.half_mut(Half::First).iter_mut().enumerate() {
            *word = (i as u32).wrapping_mul(0x9E37_79B9);
        }
        for (i, word) in capture.half_mut(Half::Second).iter_mut().enumerate() {
            *word = (i as u32).wrapping_mul(0x85EB_CA6B) ^ 0x5555_5555;
        }

        let slot = OutputSlot::new();
        let (_, _, allocator) = setup(4);
        let mut input = PdmInput::new(allocator, &slot);

        input.handle_half_complete(&capture, Half::First);
        slot.take().unwrap();
        input.handle_half_complete(&capture, Half::Second);
        let block = slot.take().unwrap();

        // Recompute period-two boundary samples from the literal last 14
        // words of period one's stable half: no hidden state allowed.
        let tail: [u32; CARRY_WORDS] =
            capture.half(Half::First)[HALF_WORDS - CARRY_WORDS..].try_into().unwrap();
        let fresh = capture.half(Half::Second);
        for (k, skip) in (0..CARRY_WORDS).step_by(2).enumerate() {
            assert_eq!(
                block.samples()[k],
                filter_sample_split(&tail[skip..], fresh),
                "boundary sample {}",
                k
            );
        }
        // And the interior samples straight off the stable half.
        for k in CARRY_WORDS / 2..BLOCK_SAMPLES {
            let offset = k * 2 - CARRY_WORDS;
            assert_eq!(block.samples()[k], filter_sample(&fresh[offset..]));
        }
    }

    #[test]
    fn dropped_period_still_refreshes_carry() {
        let mut capture = CaptureBuffer::new();
        capture.half_mut(Half::First).fill(0xFFFF_FFFF);
        capture.half_mut(Half::Second).fill(0xAAAA_AAAA);

        let slot = OutputSlot::new();
        let (avail, _, allocator) = setup(0);
        let mut input = PdmInput::new(allocator, &slot);

        // Allocation fails: no block, but carry must now hold the tail of
        // the first half.
        input.handle_half_complete(&capture, Half::First);
        assert!(slot.take().is_none());

        avail.set(1);
        input.handle_half_complete(&capture, Half::Second);
        let block = slot.take().unwrap();
        let tail = [0xFFFF_FFFFu32; CARRY_WORDS];
        assert_eq!(
            block.samples()[0],
            filter_sample_split(&tail, capture.half(Half::Second))
        );
    }

    #[test]
    fn overrun_releases_displaced_block() {
        let mut capture = CaptureBuffer::new();
        capture.half_mut(Half::First).fill(0xAAAA_AAAA);
        capture.half_mut(Half::Second).fill(0xAAAA_AAAA);

        let slot = OutputSlot::new();
        let (_, released, allocator) = setup(2);
        let mut input = PdmInput::new(allocator, &slot);

        input.handle_half_complete(&capture, Half::First);
        input.handle_half_complete(&capture, Half::Second);
        assert_eq!(released.get(), 1);
        assert!(slot.take().is_some());
        assert!(slot.take().is_none());
    }
}
