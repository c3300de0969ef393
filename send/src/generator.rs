//! Heap generator: decide what each heap must carry.

use std::num::NonZeroU64;

use items::ItemGroup;

use crate::heap::{Heap, HeapSequence};
use crate::tracker::ItemTracker;
use crate::{Flavour, HeapCounter, Mode};

/// Construction-time configuration for a [`HeapGenerator`].
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    flavour: Flavour,
    descriptor_interval: Option<NonZeroU64>,
    counter: Option<HeapCounter>,
}

impl GeneratorConfig {
    /// Creates a default configuration: default flavour, no descriptor
    /// resend interval, a fresh private counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the protocol flavour stamped onto produced heaps.
    #[must_use]
    pub fn flavour(mut self, flavour: Flavour) -> Self {
        self.flavour = flavour;
        self
    }

    /// Re-sends descriptors once every `interval` heaps, so late-joining or
    /// lossy receivers recover the schema without a full re-sync.
    #[must_use]
    pub fn descriptor_interval(mut self, interval: NonZeroU64) -> Self {
        self.descriptor_interval = Some(interval);
        self
    }

    /// Shares an existing counter instead of creating a fresh one.
    ///
    /// Generators sharing a counter interleave their heaps into one strictly
    /// increasing sequence space; they must operate on disjoint identifier
    /// sets.
    #[must_use]
    pub fn shared_counter(mut self, counter: HeapCounter) -> Self {
        self.counter = Some(counter);
        self
    }
}

/// Tracks what has been sent and produces delta heaps with sequential
/// numbering.
///
/// The generator walks an [`ItemGroup`] per call and consults its per-item
/// sent-state to decide which descriptors and values the next heap must
/// carry. The same generator may be pointed at different groups across
/// calls, provided their identifier spaces are disjoint; otherwise the
/// staleness decisions conflate unrelated items. That obligation is
/// documented, not enforced.
#[derive(Debug)]
pub struct HeapGenerator {
    tracker: ItemTracker,
    counter: HeapCounter,
    flavour: Flavour,
    descriptor_interval: Option<NonZeroU64>,
}

impl HeapGenerator {
    /// Creates a generator from configuration.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            tracker: ItemTracker::new(),
            counter: config.counter.unwrap_or_default(),
            flavour: config.flavour,
            descriptor_interval: config.descriptor_interval,
        }
    }

    /// Produces the next heap for `group`.
    ///
    /// The heap is stamped with the current counter value. Each item in the
    /// group, in its iteration order, contributes its descriptor when the
    /// descriptor mode asks for it and its value when the data mode asks for
    /// it; an item without a value never contributes one. The shared counter
    /// advances by exactly 1 afterwards, whether or not anything was
    /// attached.
    pub fn get_heap(&mut self, group: &ItemGroup, descriptors: Mode, data: Mode) -> Heap {
        let current = self.counter.value();
        let mut heap = Heap::new(HeapSequence::new(current), self.flavour);

        for item in group.iter() {
            let state = self.tracker.resolve(item);

            let send_descriptor = match descriptors {
                Mode::All => true,
                Mode::Stale => state.descriptor_stale(current, self.descriptor_interval),
                Mode::None => false,
            };
            if send_descriptor {
                heap.add_descriptor(item);
                state.record_descriptor(current);
            }

            if item.has_value() {
                let send_value = match data {
                    Mode::All => true,
                    Mode::Stale => state.value_stale(item.version()),
                    Mode::None => false,
                };
                if send_value {
                    heap.add_value(item);
                    state.record_value(item.version());
                }
            }
        }

        self.counter.advance();
        heap
    }

    /// Produces a heap carrying only an end-of-stream marker.
    ///
    /// Consumes one counter value and touches no tracking state.
    pub fn get_end(&mut self) -> Heap {
        let mut heap = Heap::new(HeapSequence::new(self.counter.value()), self.flavour);
        heap.mark_end();
        self.counter.advance();
        heap
    }

    /// Returns a handle to the sequence counter.
    #[must_use]
    pub fn counter(&self) -> HeapCounter {
        self.counter.clone()
    }

    /// Returns the configured flavour.
    #[must_use]
    pub const fn flavour(&self) -> Flavour {
        self.flavour
    }

    /// Returns the number of identifiers this generator has ever tracked.
    #[must_use]
    pub fn tracked_items(&self) -> usize {
        self.tracker.len()
    }

    /// Returns the sent-state tracker for inspection.
    #[must_use]
    pub const fn tracker(&self) -> &ItemTracker {
        &self.tracker
    }
}

/// An item group bundled with its own heap generator.
///
/// Most senders maintain one group and one generator with the same
/// lifetime; this couples them so heap production needs no explicit group
/// argument.
#[derive(Debug)]
pub struct SendGroup {
    group: ItemGroup,
    generator: HeapGenerator,
}

impl SendGroup {
    /// Creates an empty group with a generator built from `config`.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            group: ItemGroup::new(),
            generator: HeapGenerator::new(config),
        }
    }

    /// Returns the owned item group.
    #[must_use]
    pub const fn group(&self) -> &ItemGroup {
        &self.group
    }

    /// Returns the owned item group for mutation.
    pub fn group_mut(&mut self) -> &mut ItemGroup {
        &mut self.group
    }

    /// Returns the bundled generator.
    #[must_use]
    pub const fn generator(&self) -> &HeapGenerator {
        &self.generator
    }

    /// Produces the next heap from the owned group.
    pub fn get_heap(&mut self, descriptors: Mode, data: Mode) -> Heap {
        self.generator.get_heap(&self.group, descriptors, data)
    }

    /// Produces an end-of-stream heap.
    pub fn get_end(&mut self) -> Heap {
        self.generator.get_end()
    }
}
