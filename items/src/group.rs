//! Item group: the iterable collection senders walk when producing heaps.

use std::collections::BTreeMap;

use crate::error::{GroupError, GroupResult};
use crate::{Descriptor, InstanceId, Item, ItemId, Version};

/// An ordered collection of items keyed by identifier.
///
/// Iteration order is ascending identifier, and senders treat that order as
/// given. The group owns the per-group counters behind instance tags and
/// version stamps: every [`ItemGroup::add_item`] produces a fresh instance,
/// and every value replacement produces a fresh version, so neither tag is
/// ever observed twice within one group.
#[derive(Debug, Clone, Default)]
pub struct ItemGroup {
    items: BTreeMap<ItemId, Item>,
    next_instance: u64,
    next_version: u64,
}

impl ItemGroup {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item, replacing any item already bound to the identifier.
    ///
    /// Rebinding an identifier yields a new instance tag; downstream senders
    /// treat the new instance as never sent, descriptor included. The new
    /// item starts with no value.
    pub fn add_item(&mut self, id: ItemId, descriptor: Descriptor) -> GroupResult<&Item> {
        descriptor.validate()?;
        let instance = self.fresh_instance();
        let version = self.fresh_version();
        let item = Item::new(id, instance, descriptor, version);
        self.items.insert(id, item);
        Ok(&self.items[&id])
    }

    /// Replaces the value of an existing item, stamping a new version.
    pub fn set_value(&mut self, id: ItemId, value: Vec<u8>) -> GroupResult<Version> {
        let version = Version::new(self.next_version + 1);
        let item = self
            .items
            .get_mut(&id)
            .ok_or(GroupError::UnknownItem { id })?;
        item.set_value(Some(value), version);
        self.next_version += 1;
        Ok(version)
    }

    /// Clears the value of an existing item, back to "no data yet".
    ///
    /// The descriptor is untouched; the version still advances so the next
    /// value set is always distinguishable from the cleared state.
    pub fn clear_value(&mut self, id: ItemId) -> GroupResult<Version> {
        let version = Version::new(self.next_version + 1);
        let item = self
            .items
            .get_mut(&id)
            .ok_or(GroupError::UnknownItem { id })?;
        item.set_value(None, version);
        self.next_version += 1;
        Ok(version)
    }

    /// Returns the item bound to an identifier, if any.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Returns the number of items in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the group holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates items in ascending identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Iterates identifiers in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.keys().copied()
    }

    fn fresh_instance(&mut self) -> InstanceId {
        self.next_instance += 1;
        InstanceId::new(self.next_instance)
    }

    fn fresh_version(&mut self) -> Version {
        self.next_version += 1;
        Version::new(self.next_version)
    }
}

impl<'a> IntoIterator for &'a ItemGroup {
    type Item = &'a Item;
    type IntoIter = std::collections::btree_map::Values<'a, ItemId, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}
