//! Process-wide one-shot module initialization guard.
//!
//! The original module contract allows exactly one successful
//! initialization per process. The guard is an explicit atomic
//! check-and-set: under concurrent callers exactly one wins, all
//! others observe [`EmergencyError::AlreadyInitialized`].

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{EmergencyError, EmergencyResult};

/// One-shot initialization gate.
///
/// A standalone instance is testable; the process-wide gate is reached
/// through [`class_init`].
#[derive(Debug)]
pub struct ModuleState {
    initialized: AtomicBool,
}

impl ModuleState {
    /// Create an uninitialized gate.
    pub const fn new() -> Self {
        Self {
            initialized: AtomicBool::new(false),
        }
    }

    /// Pass the gate.
    ///
    /// Exactly one caller succeeds, even under concurrent invocation —
    /// the check-and-set is a single `compare_exchange`, never a
    /// racy load-then-store. Every later call fails with
    /// [`EmergencyError::AlreadyInitialized`] and changes no state.
    pub fn init(&self) -> EmergencyResult<()> {
        self.initialized
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(|_| EmergencyError::AlreadyInitialized)
    }

    /// Whether the gate has been passed.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }
}

impl Default for ModuleState {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide gate backing [`class_init`].
static MODULE_STATE: ModuleState = ModuleState::new();

/// Initialize the emergency module for this process.
///
/// Succeeds exactly once per process lifetime; there is no teardown.
pub fn class_init() -> EmergencyResult<()> {
    MODULE_STATE.init()
}
