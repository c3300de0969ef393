//! Identifier and version newtypes for items.

/// A stable item identifier within a group.
///
/// Item IDs are assigned by the application and must remain stable for the
/// lifetime of the logical item they name. Groups that share a heap
/// generator must use disjoint ID spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(u32);

impl ItemId {
    /// Creates a new item ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw item ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<ItemId> for u32 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

/// A value-version stamp.
///
/// A fresh version is allocated from the owning group's monotonic counter
/// every time an item's value is replaced, so a version observed once is
/// never observed again for a different value within that group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Version(u64);

impl Version {
    /// Creates a new version stamp.
    #[must_use]
    pub const fn new(version: u64) -> Self {
        Self(version)
    }

    /// Returns the raw version value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for Version {
    fn from(version: u64) -> Self {
        Self(version)
    }
}

impl From<Version> for u64 {
    fn from(version: Version) -> Self {
        version.0
    }
}

/// A generation tag identifying one item *instance*.
///
/// Rebinding an identifier to a new item object yields a new instance tag,
/// which is how senders distinguish replacement of an item from mutation of
/// its value. Instance tags are never reused within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceId(u64);

impl InstanceId {
    pub(crate) const fn new(instance: u64) -> Self {
        Self(instance)
    }

    /// Returns the raw instance tag value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_new() {
        let id = ItemId::new(0x1600);
        assert_eq!(id.raw(), 0x1600);
    }

    #[test]
    fn item_id_from_u32() {
        let id: ItemId = 42u32.into();
        assert_eq!(id.raw(), 42);
        let raw: u32 = id.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn item_id_ordering() {
        assert!(ItemId::new(1) < ItemId::new(2));
        assert_eq!(ItemId::new(7), ItemId::new(7));
    }

    #[test]
    fn item_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(ItemId::new(1));
        set.insert(ItemId::new(2));
        set.insert(ItemId::new(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn item_id_const() {
        const ID: ItemId = ItemId::new(0x1234);
        assert_eq!(ID.raw(), 0x1234);
    }

    #[test]
    fn version_new() {
        let version = Version::new(9);
        assert_eq!(version.raw(), 9);
    }

    #[test]
    fn version_from_u64() {
        let version: Version = 3u64.into();
        assert_eq!(version.raw(), 3);
        let raw: u64 = version.into();
        assert_eq!(raw, 3);
    }

    #[test]
    fn version_ordering() {
        assert!(Version::new(1) < Version::new(2));
        assert_ne!(Version::new(1), Version::new(2));
    }

    #[test]
    fn version_default_is_zero() {
        assert_eq!(Version::default().raw(), 0);
    }

    #[test]
    fn instance_id_equality() {
        let a = InstanceId::new(1);
        let b = InstanceId::new(1);
        let c = InstanceId::new(2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn instance_id_debug() {
        let tag = InstanceId::new(123);
        assert!(format!("{tag:?}").contains("123"));
    }
}
