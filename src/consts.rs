//! Capacity constants for emergency flag storage.
//!
//! Single source of truth for the flag capacity and storage geometry.
//! All limits are compile-time fixed — no runtime configuration.

use static_assertions::const_assert_eq;

/// Maximum number of independently tracked emergency flags per node.
pub const EMERGENCY_CAPACITY: usize = 64;

/// Bits per storage word (`u8` backing).
pub const BITS_PER_WORD: usize = 8;

/// Number of storage words backing one node's flag set.
pub const EMERGENCY_WORDS: usize = EMERGENCY_CAPACITY / BITS_PER_WORD;

// Storage geometry must cover the capacity exactly.
const_assert_eq!(EMERGENCY_WORDS * BITS_PER_WORD, EMERGENCY_CAPACITY);
