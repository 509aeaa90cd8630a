//! # EVO Emergency Flag Tracking
//!
//! A fixed-capacity, lock-free emergency flag set for EVO nodes. Each
//! node tracks up to 64 independently identified fault/alarm conditions
//! in an atomic bitmap and keeps a live population counter so state
//! queries from hot monitoring paths cost a single atomic load.
//!
//! ## Features
//!
//! - **Lock-Free Operation**: raise/solve are single atomic RMWs, the
//!   state query is one load — no caller-visible locking
//! - **Synchronized Counter**: the cached count always matches the
//!   bitmap's set-bit count at every externally observable point
//! - **Idempotent API**: re-raising, solving a clear flag, and
//!   destroying an empty node are defined no-op successes
//! - **Bounded Everything**: 64 flags, constant-time operations, no
//!   heap allocation, no blocking
//!
//! ## Usage
//!
//! ```rust
//! use evo_emergency::{EmergencyNode, EmergencyResult};
//!
//! # fn main() -> EmergencyResult<()> {
//! let node = EmergencyNode::new();
//!
//! node.raise(5)?;
//! assert!(node.is_emergency_state());
//! assert_eq!(node.active_count(), 1);
//!
//! node.solve(5)?;
//! assert!(!node.is_emergency_state());
//! # Ok(())
//! # }
//! ```
//!
//! ### Shared Across Threads
//!
//! ```rust
//! use evo_emergency::EmergencyNode;
//! use std::sync::Arc;
//!
//! let node = Arc::new(EmergencyNode::new());
//!
//! let handles: Vec<_> = (0..4u8)
//!     .map(|id| {
//!         let node = Arc::clone(&node);
//!         std::thread::spawn(move || node.raise(id).unwrap())
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert_eq!(node.active_count(), 4);
//! ```
//!
//! ## Thread Safety
//!
//! - **EmergencyNode**: thread-safe — any number of threads may call
//!   `raise`, `solve`, and the queries concurrently on a shared node
//! - **ModuleState / class_init**: thread-safe — exactly one concurrent
//!   caller passes the one-shot gate
//! - Lifecycle transitions (`reset`, `destroy`) are for the owning
//!   caller to sequence against in-flight operations

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod consts;
pub mod error;
pub mod module;
pub mod node;

pub use consts::{BITS_PER_WORD, EMERGENCY_CAPACITY, EMERGENCY_WORDS};
pub use error::{EmergencyError, EmergencyResult};
pub use module::{ModuleState, class_init};
pub use node::EmergencyNode;

/// Initialize tracing for RT-safe logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_thread_ids(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
