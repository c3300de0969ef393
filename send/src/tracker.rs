//! Per-item sent-state tracking.

use std::collections::HashMap;
use std::num::NonZeroU64;

use items::{InstanceId, Item, ItemId, Version};

/// What has been sent for one identifier.
///
/// `descriptor_heap` and `value_version` start as "never" and record the
/// heap number and version of the most recent send. The instance tag pins
/// the state to one item instance; see [`ItemTracker::resolve`].
#[derive(Debug, Clone)]
pub struct TrackedItem {
    descriptor_heap: Option<u64>,
    value_version: Option<Version>,
    instance: InstanceId,
}

impl TrackedItem {
    fn new(instance: InstanceId) -> Self {
        Self {
            descriptor_heap: None,
            value_version: None,
            instance,
        }
    }

    /// Returns the heap number at which the descriptor was last sent.
    #[must_use]
    pub const fn descriptor_heap(&self) -> Option<u64> {
        self.descriptor_heap
    }

    /// Returns the version last sent for this item's value.
    #[must_use]
    pub const fn value_version(&self) -> Option<Version> {
        self.value_version
    }

    /// Judges whether the descriptor must be (re)sent.
    ///
    /// Stale when never sent, or when a resend interval is configured and
    /// at least that many heaps have been produced since the last send.
    /// Instance replacement is handled before this check, in
    /// [`ItemTracker::resolve`].
    #[must_use]
    pub fn descriptor_stale(&self, current_heap: u64, interval: Option<NonZeroU64>) -> bool {
        match self.descriptor_heap {
            None => true,
            Some(sent) => {
                interval.is_some_and(|n| current_heap.saturating_sub(sent) >= n.get())
            }
        }
    }

    /// Judges whether a value at `version` must be sent.
    #[must_use]
    pub fn value_stale(&self, version: Version) -> bool {
        self.value_version != Some(version)
    }

    pub(crate) fn record_descriptor(&mut self, heap: u64) {
        self.descriptor_heap = Some(heap);
    }

    pub(crate) fn record_value(&mut self, version: Version) {
        self.value_version = Some(version);
    }
}

/// Lazily grown map from identifier to sent-state.
///
/// Entries are created the first time an identifier is seen and persist for
/// the tracker's lifetime; nothing prunes them. Growth is bounded by the
/// number of distinct identifiers ever walked, which is what the protocol's
/// staleness semantics require.
#[derive(Debug, Clone, Default)]
pub struct ItemTracker {
    entries: HashMap<ItemId, TrackedItem>,
}

impl ItemTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sent-state for an item, creating or invalidating as needed.
    ///
    /// An unseen identifier gets a fresh all-"never" entry. If the entry's
    /// instance tag no longer matches the item's, the identifier has been
    /// rebound to a logically different item: the descriptor send record is
    /// cleared and the state rebinds to the new instance. Value staleness
    /// needs no reset because a new instance always carries a version never
    /// seen before.
    pub fn resolve(&mut self, item: &Item) -> &mut TrackedItem {
        let entry = self
            .entries
            .entry(item.id())
            .or_insert_with(|| TrackedItem::new(item.instance()));
        if entry.instance != item.instance() {
            entry.descriptor_heap = None;
            entry.instance = item.instance();
        }
        entry
    }

    /// Returns the sent-state for an identifier, if it has been seen.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&TrackedItem> {
        self.entries.get(&id)
    }

    /// Returns `true` if the identifier has been seen.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Returns the number of identifiers ever seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no identifier has been seen yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
