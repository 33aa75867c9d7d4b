//! Single-slot handoff of completed PCM blocks.

use core::cell::RefCell;
use critical_section::Mutex;

/// Holds at most one completed block between the producer (buffer-ready
/// handler) and an independently scheduled consumer.
///
/// The slot never queues: if the producer completes another block before
/// the consumer runs, the displaced block goes back to the allocator and
/// only the most recent one is ever forwarded. Both sides touch the slot
/// inside one brief critical section, the only synchronization point in
/// the design.
pub struct OutputSlot<B> {
    current: Mutex<RefCell<Option<B>>>,
}

impl<B> OutputSlot<B> {
    /// Const so a slot can live in a `static` shared between the capture
    /// interrupt context and the consumer task.
    pub const fn new() -> Self {
        Self {
            current: Mutex::new(RefCell::new(None)),
        }
    }

    /// Producer side: install a newly completed block, returning the
    /// unconsumed predecessor, if any, for release.
    pub fn replace(&self, block: B) -> Option<B> {
        critical_section::with(|cs| self.current.borrow(cs).replace(Some(block)))
    }

    /// Consumer side: remove the current block, leaving the slot empty.
    pub fn take(&self) -> Option<B> {
        critical_section::with(|cs| self.current.borrow(cs).take())
    }

    /// Consumer side: forward the most recently completed block to the
    /// downstream collaborator. A no-op when no new block has been
    /// completed since the last call.
    pub fn update<F: FnOnce(B)>(&self, forward: F) {
        if let Some(block) = self.take() {
            forward(block);
        }
    }
}

impl<B> Default for OutputSlot<B> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let slot: OutputSlot<u32> = OutputSlot::new();
        assert_eq!(slot.take(), None);
        slot.update(|_| panic!("nothing to forward"));
    }

    #[test]
    fn replace_returns_displaced_block() {
        let slot = OutputSlot::new();
        assert_eq!(slot.replace(1), None);
        assert_eq!(slot.replace(2), Some(1));
        assert_eq!(slot.take(), Some(2));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn update_forwards_latest_once() {
        let slot = OutputSlot::new();
        slot.replace(41);
        slot.replace(42);
        let mut seen = None;
        slot.update(|b| seen = Some(b));
        assert_eq!(seen, Some(42));
        slot.update(|_| panic!("slot should be empty after forwarding"));
    }
}
