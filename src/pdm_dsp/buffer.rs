//! Capture-buffer layout and the PCM block allocation seam.

use core::marker::PhantomData;
use core::mem::MaybeUninit;
use heapless::pool::singleton::{Box, Pool};

use crate::{BLOCK_SAMPLES, HALF_WORDS};

/// Identifies one half of the ping-pong capture buffer. The half carried
/// by a buffer-ready event is the one that just finished filling, so it
/// is the stable half for the current period.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Half {
    First = 0,
    Second = 1,
}

impl Half {
    pub fn other(self) -> Half {
        match self {
            Half::First => Half::Second,
            Half::Second => Half::First,
        }
    }
}

/// Ping-pong region continuously overwritten by the capture source.
///
/// The capture subsystem write-owns whichever half it is currently
/// filling; the other half is stable and safe to read until the next
/// half-complete event. Each word packs 32 PDM samples, MSB first.
pub struct CaptureBuffer {
    halves: [[u32; HALF_WORDS]; 2],
}

impl CaptureBuffer {
    pub const fn new() -> Self {
        Self {
            halves: [[0; HALF_WORDS]; 2],
        }
    }

    pub fn half(&self, half: Half) -> &[u32; HALF_WORDS] {
        &self.halves[half as usize]
    }

    /// Mutable view for capture sources that fill the buffer from
    /// software (simulation, tests).
    pub fn half_mut(&mut self, half: Half) -> &mut [u32; HALF_WORDS] {
        &mut self.halves[half as usize]
    }

    /// Base address of the whole region, for handing to a DMA engine
    /// configured for circular transfers with a half-complete interrupt.
    pub fn as_mut_ptr(&mut self) -> *mut u32 {
        self.halves[0].as_mut_ptr()
    }
}

impl Default for CaptureBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// One block of decimated output samples. Exclusively owned by whoever
/// holds it: the buffer-ready handler while filling, then the output
/// slot until consumed.
pub trait PcmBlock {
    fn samples(&self) -> &[i16; BLOCK_SAMPLES];
    fn samples_mut(&mut self) -> &mut [i16; BLOCK_SAMPLES];
}

/// The allocator collaborator. One block is requested per decimation
/// period; `None` costs that period's audio and nothing else.
pub trait BlockAllocator {
    type Block: PcmBlock;

    fn allocate(&mut self) -> Option<Self::Block>;

    /// Take back a block that will never be forwarded downstream.
    fn release(&mut self, block: Self::Block) {
        let _ = block;
    }
}

/// PCM block backed by a `heapless` singleton pool. Dropping it returns
/// the storage to the pool.
pub struct PoolBlock<P>(Box<P>)
where
    P: Pool<Data = MaybeUninit<[i16; BLOCK_SAMPLES]>>;

impl<P> PcmBlock for PoolBlock<P>
where
    P: Pool<Data = MaybeUninit<[i16; BLOCK_SAMPLES]>>,
{
    fn samples(&self) -> &[i16; BLOCK_SAMPLES] {
        unsafe { self.0.assume_init_ref() }
    }

    fn samples_mut(&mut self) -> &mut [i16; BLOCK_SAMPLES] {
        unsafe { self.0.assume_init_mut() }
    }
}

/// [`BlockAllocator`] over a `heapless` singleton pool grown from static
/// memory by the application.
pub struct PoolAllocator<P>(PhantomData<P>);

impl<P> PoolAllocator<P> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<P> BlockAllocator for PoolAllocator<P>
where
    P: Pool<Data = MaybeUninit<[i16; BLOCK_SAMPLES]>>,
{
    type Block = PoolBlock<P>;

    fn allocate(&mut self) -> Option<PoolBlock<P>> {
        P::alloc().map(|block| PoolBlock(block.init(MaybeUninit::uninit())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::pool;

    #[test]
    fn halves_are_independent() {
        let mut capture = CaptureBuffer::new();
        capture.half_mut(Half::First).fill(0xDEAD_BEEF);
        assert!(capture.half(Half::First).iter().all(|&w| w == 0xDEAD_BEEF));
        assert!(capture.half(Half::Second).iter().all(|&w| w == 0));
        assert_eq!(Half::First.other(), Half::Second);
    }

    pool!(TESTPOOL: MaybeUninit<[i16; BLOCK_SAMPLES]>);

    #[test]
    fn pool_allocator_exhausts_and_recycles() {
        static mut MEM: [u8; 2048] = [0; 2048];
        let grown = unsafe { TESTPOOL::grow(&mut MEM) };
        assert!(grown >= 2);

        let mut allocator = PoolAllocator::<TESTPOOL>::new();
        let mut held = Vec::new();
        while let Some(mut block) = allocator.allocate() {
            block.samples_mut().fill(7);
            held.push(block);
        }
        assert_eq!(held.len(), grown);
        assert!(held.iter().all(|b| b.samples()[0] == 7));

        // Releasing one makes it allocatable again.
        let block = held.pop().unwrap();
        allocator.release(block);
        assert!(allocator.allocate().is_some());
    }
}
