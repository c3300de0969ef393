//! Incremental heap generation for the heapcast protocol send side.
//!
//! This crate decides, per outgoing heap, which item values and which item
//! descriptors must be included so a receiver can reconstruct full current
//! state without retransmission of unchanged data:
//!
//! - Per-item sent-state tracking keyed by identifier
//! - Descriptor and data staleness policies (`stale`, `all`, `none`)
//! - Monotonic heap numbering shared across generator instances
//! - End-of-stream signalling
//!
//! Wire encoding of heaps into packets and transport of those packets are
//! external collaborators; they consume the [`Heap`] values produced here.
//!
//! # Design Principles
//!
//! - **Pure in-memory computation** - No I/O, no blocking, no retries.
//! - **Fully produced or untouched** - Once a heap production starts it
//!   completes, and the counter advances exactly once per call.
//! - **Single-threaded** - No internal locking; counter handles do not
//!   cross threads.

mod counter;
mod error;
mod flavour;
mod generator;
mod heap;
mod mode;
mod tracker;

pub use counter::HeapCounter;
pub use error::{SendError, SendResult};
pub use flavour::{Flavour, FlavourError, FlavourResult};
pub use generator::{GeneratorConfig, HeapGenerator, SendGroup};
pub use heap::{DescriptorBlock, Heap, HeapSequence, ValueBlock};
pub use mode::Mode;
pub use tracker::{ItemTracker, TrackedItem};
