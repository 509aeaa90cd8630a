//! Emergency node: a fixed-capacity concurrent flag set.
//!
//! Tracks up to [`EMERGENCY_CAPACITY`] independently identified alarm
//! conditions in an atomic bitmap, plus a cached population counter so
//! that [`EmergencyNode::is_emergency_state`] is a single O(1) load on
//! the monitoring hot path instead of a bitmap scan.
//!
//! ## Lock-Free Protocol
//!
//! Each bit transition is a single atomic RMW (`fetch_or` / `fetch_and`)
//! on the owning storage word. The counter delta is applied only by the
//! thread whose RMW actually performed the transition (prior bit value
//! observed clear on raise, set on solve). The delta is therefore tied
//! to the bit transition itself, never to a read of the counter — a
//! lost-update race between concurrent raisers or solvers of different
//! ids is impossible, and same-id racers resolve to exactly one winner.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::consts::{BITS_PER_WORD, EMERGENCY_CAPACITY, EMERGENCY_WORDS};
use crate::error::{EmergencyError, EmergencyResult};

/// One entity's set of up to 64 alarm conditions.
///
/// All operations take `&self` — a node can be shared across any number
/// of threads (behind `Arc` or a plain reference) with no external
/// locking. Invariant at every externally observable point: the counter
/// equals the number of set bits, and both stay within `[0, 64]`.
#[derive(Debug)]
pub struct EmergencyNode {
    /// Flag storage: 8 words of 8 bits, indexed by `id / 8`, `id % 8`.
    flags: [AtomicU8; EMERGENCY_WORDS],
    /// Cached population count of set bits in `flags`.
    count: AtomicU8,
}

impl EmergencyNode {
    /// Create a node with all flags clear.
    pub const fn new() -> Self {
        Self {
            flags: [const { AtomicU8::new(0) }; EMERGENCY_WORDS],
            count: AtomicU8::new(0),
        }
    }

    /// Resolve an id to its storage word index and bit mask.
    #[inline]
    fn locate(id: u8) -> EmergencyResult<(usize, u8)> {
        let idx = usize::from(id);
        if idx >= EMERGENCY_CAPACITY {
            tracing::warn!(id, "rejected out-of-range emergency id");
            return Err(EmergencyError::InvalidId { id });
        }
        Ok((idx / BITS_PER_WORD, 1 << (idx % BITS_PER_WORD)))
    }

    /// Clear all flags and reset the counter to zero.
    ///
    /// Unconditional — always succeeds regardless of prior contents.
    /// Not intended to run concurrently with `raise`/`solve`; lifecycle
    /// transitions are the caller's to sequence.
    pub fn reset(&self) {
        for word in &self.flags {
            word.store(0, Ordering::Release);
        }
        self.count.store(0, Ordering::Release);
    }

    /// Tear the node down: clears every flag, active or not.
    ///
    /// Idempotent — destroying an already-empty node succeeds as a no-op.
    pub fn destroy(&self) {
        self.reset();
    }

    /// Raise emergency `id`.
    ///
    /// Idempotent: raising an already-raised id is a success that leaves
    /// the counter unchanged. Under concurrent same-id raises exactly one
    /// caller performs the clear→set transition and its increment.
    pub fn raise(&self, id: u8) -> EmergencyResult<()> {
        let (word, mask) = Self::locate(id)?;
        let prev = self.flags[word].fetch_or(mask, Ordering::AcqRel);
        if prev & mask == 0 {
            // This call won the clear→set transition; the increment
            // belongs to it alone.
            self.count.fetch_add(1, Ordering::AcqRel);
            tracing::trace!(id, "emergency raised");
        }
        Ok(())
    }

    /// Solve (clear) emergency `id`.
    ///
    /// Solving a clear or never-raised id is a defined no-op success.
    /// Only the caller whose RMW observed the bit set applies the
    /// decrement, so the counter can never undercount or go negative.
    pub fn solve(&self, id: u8) -> EmergencyResult<()> {
        let (word, mask) = Self::locate(id)?;
        let prev = self.flags[word].fetch_and(!mask, Ordering::AcqRel);
        if prev & mask != 0 {
            self.count.fetch_sub(1, Ordering::AcqRel);
            tracing::trace!(id, "emergency solved");
        }
        Ok(())
    }

    /// Whether any emergency is currently active.
    ///
    /// Single O(1) load of the cached counter — safe to call from a hot
    /// monitoring loop.
    #[inline]
    pub fn is_emergency_state(&self) -> bool {
        self.count.load(Ordering::Acquire) > 0
    }

    /// Number of currently active emergencies.
    #[inline]
    pub fn active_count(&self) -> u8 {
        self.count.load(Ordering::Acquire)
    }

    /// Whether emergency `id` is currently raised.
    pub fn is_raised(&self, id: u8) -> EmergencyResult<bool> {
        let (word, mask) = Self::locate(id)?;
        Ok(self.flags[word].load(Ordering::Acquire) & mask != 0)
    }
}

impl Default for EmergencyNode {
    fn default() -> Self {
        Self::new()
    }
}
