#![cfg_attr(not(feature = "std"), no_std)]

//! Table-driven PDM to PCM decimation.
//!
//! Converts a packed single-bit PDM capture stream into blocks of signed
//! 16-bit PCM samples. The 512-tap decimation FIR is evaluated with a
//! precomputed byte-lookup table (64 table reads per output sample)
//! instead of a serial multiply-accumulate loop: a MAC over 512 taps per
//! sample does not fit the real-time budget of a small core, so the
//! filter trades 32 KiB of program memory for cycles.
//!
//! Capture words arrive in a ping-pong buffer filled by an external
//! source (typically DMA). Each half-complete event produces one PCM
//! block; windows that straddle the half boundary are completed from a
//! 14-word carry-over kept from the previous half, so no bulk copying is
//! needed. Finished blocks are handed downstream through a single-slot
//! publisher that drops, rather than queues, on consumer overrun.

pub mod buffer;
pub mod filter;
pub mod input;
pub mod output;
pub mod tables;

/// Number of PCM samples in each published output block.
pub const BLOCK_SAMPLES: usize = 128;
/// Ratio of PDM bit rate to PCM sample rate.
pub const DECIMATION: usize = 64;
/// Length of the decimation FIR in taps (PDM bits).
pub const FILTER_TAPS: usize = 512;
/// Packed 32-bit words covered by one filter window.
pub const WINDOW_WORDS: usize = FILTER_TAPS / 32;
/// Words in one capture-buffer half, i.e. one decimation period.
pub const HALF_WORDS: usize = BLOCK_SAMPLES * DECIMATION / 32;
/// Total words in the ping-pong capture buffer.
pub const CAPTURE_WORDS: usize = 2 * HALF_WORDS;
/// Trailing words of a consumed half retained for the windows that
/// straddle the half boundary.
pub const CARRY_WORDS: usize = (FILTER_TAPS - DECIMATION) / 32;
/// Gain-trim right shift applied after accumulation. Decrease for more
/// mic gain, increase for headroom against loud sources.
pub const RSHIFT: u32 = 2;
