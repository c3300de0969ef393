//! Item, descriptor, and item group model for the heapcast protocol.
//!
//! This crate defines the data side of the sending pipeline:
//! - Items: named, versioned values identified by a stable integer key
//! - Descriptors: the schema/metadata a receiver needs to interpret a value
//! - Item groups: ordered collections with instance and version stamping
//! - Deterministic descriptor hashing
//!
//! # Design Principles
//!
//! - **Replacement is not mutation** - Rebinding an identifier yields a new
//!   instance tag so senders re-send the descriptor.
//! - **Versions are never reused** - Stamps come from a per-group monotonic
//!   counter, so version equality means "the very value already observed".
//! - **Deterministic iteration** - Groups iterate in ascending identifier
//!   order.

mod descriptor;
mod error;
mod group;
mod item;
mod types;

pub use descriptor::{descriptor_hash, Descriptor};
pub use error::{DescriptorError, DescriptorResult, GroupError, GroupResult};
pub use group::ItemGroup;
pub use item::Item;
pub use types::{InstanceId, ItemId, Version};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = ItemId::new(0);
        let _ = Version::new(0);
        let _ = ItemGroup::new();
        let _ = Descriptor::new("x");
        let _: GroupResult<()> = Ok(());
        let _: DescriptorResult<()> = Ok(());
    }

    #[test]
    fn group_round_trip_through_public_api() {
        let mut group = ItemGroup::new();
        group
            .add_item(ItemId::new(1), Descriptor::new("adc").format("i8"))
            .unwrap();
        group.set_value(ItemId::new(1), vec![0x7f]).unwrap();
        let item = group.get(ItemId::new(1)).unwrap();
        assert_eq!(descriptor_hash(item.descriptor()), {
            let again = group.get(ItemId::new(1)).unwrap();
            descriptor_hash(again.descriptor())
        });
    }
}
