//! A single named, versioned item.

use crate::{Descriptor, InstanceId, ItemId, Version};

/// A named, versioned datum within a group.
///
/// Items are created and mutated only through an [`crate::ItemGroup`], which
/// stamps the instance tag and allocates version numbers. A value of `None`
/// means "no data yet": such an item still has a descriptor worth sending,
/// but nothing a receiver could store.
#[derive(Debug, Clone)]
pub struct Item {
    id: ItemId,
    instance: InstanceId,
    descriptor: Descriptor,
    value: Option<Vec<u8>>,
    version: Version,
}

impl Item {
    pub(crate) fn new(
        id: ItemId,
        instance: InstanceId,
        descriptor: Descriptor,
        version: Version,
    ) -> Self {
        Self {
            id,
            instance,
            descriptor,
            value: None,
            version,
        }
    }

    /// Returns the item's identifier.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the tag of this item instance.
    ///
    /// Two items with the same identifier but different instance tags are
    /// logically different items, and a sender must treat the newer one as
    /// never having been sent.
    #[must_use]
    pub const fn instance(&self) -> InstanceId {
        self.instance
    }

    /// Returns the item's descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Returns the current value, or `None` if no data has been set.
    #[must_use]
    pub fn value(&self) -> Option<&[u8]> {
        self.value.as_deref()
    }

    /// Returns `true` if the item currently has a value.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the version stamped on the last value replacement.
    #[must_use]
    pub const fn version(&self) -> Version {
        self.version
    }

    pub(crate) fn set_value(&mut self, value: Option<Vec<u8>>, version: Version) {
        self.value = value;
        self.version = version;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> Item {
        Item::new(
            ItemId::new(0x1600),
            InstanceId::new(1),
            Descriptor::new("timestamp").format("u48"),
            Version::new(1),
        )
    }

    #[test]
    fn new_item_has_no_value() {
        let item = item();
        assert!(!item.has_value());
        assert_eq!(item.value(), None);
        assert_eq!(item.version().raw(), 1);
    }

    #[test]
    fn set_value_replaces_value_and_version() {
        let mut item = item();
        item.set_value(Some(vec![1, 2, 3]), Version::new(5));
        assert_eq!(item.value(), Some(&[1u8, 2, 3][..]));
        assert_eq!(item.version(), Version::new(5));
    }

    #[test]
    fn set_value_can_clear() {
        let mut item = item();
        item.set_value(Some(vec![9]), Version::new(2));
        item.set_value(None, Version::new(3));
        assert!(!item.has_value());
        assert_eq!(item.version(), Version::new(3));
    }

    #[test]
    fn accessors() {
        let item = item();
        assert_eq!(item.id(), ItemId::new(0x1600));
        assert_eq!(item.instance(), InstanceId::new(1));
        assert_eq!(item.descriptor().name, "timestamp");
    }
}
