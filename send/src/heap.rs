//! The logical heap handed to encoding and transport.

use items::{Descriptor, Item, ItemId, Version};

use crate::Flavour;

/// A heap's position in the stream's strictly increasing sequence space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeapSequence(u64);

impl HeapSequence {
    /// Creates a new heap sequence number.
    #[must_use]
    pub const fn new(sequence: u64) -> Self {
        Self(sequence)
    }

    /// Returns the raw sequence value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for HeapSequence {
    fn from(sequence: u64) -> Self {
        Self(sequence)
    }
}

impl From<HeapSequence> for u64 {
    fn from(sequence: HeapSequence) -> Self {
        sequence.0
    }
}

/// A descriptor attachment: the schema for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DescriptorBlock {
    pub id: ItemId,
    pub descriptor: Descriptor,
}

/// A value attachment: one item's current bytes at a given version.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueBlock {
    pub id: ItemId,
    pub version: Version,
    pub data: Vec<u8>,
}

/// One discrete transmittable unit of the protocol.
///
/// A heap carries zero or more descriptor attachments, zero or more value
/// attachments, and/or an end-of-stream marker, stamped with a sequence
/// number and the stream flavour. It is a pure value: the external encoder
/// serializes it into packets and the transport ships them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heap {
    sequence: HeapSequence,
    flavour: Flavour,
    descriptors: Vec<DescriptorBlock>,
    values: Vec<ValueBlock>,
    end_of_stream: bool,
}

impl Heap {
    /// Creates an empty heap with the given sequence number and flavour.
    #[must_use]
    pub const fn new(sequence: HeapSequence, flavour: Flavour) -> Self {
        Self {
            sequence,
            flavour,
            descriptors: Vec::new(),
            values: Vec::new(),
            end_of_stream: false,
        }
    }

    /// Attaches an item's descriptor.
    pub fn add_descriptor(&mut self, item: &Item) {
        self.descriptors.push(DescriptorBlock {
            id: item.id(),
            descriptor: item.descriptor().clone(),
        });
    }

    /// Attaches an item's current value.
    ///
    /// Returns `false` without attaching anything if the item has no value.
    pub fn add_value(&mut self, item: &Item) -> bool {
        let Some(data) = item.value() else {
            return false;
        };
        self.values.push(ValueBlock {
            id: item.id(),
            version: item.version(),
            data: data.to_vec(),
        });
        true
    }

    /// Marks this heap as an end-of-stream signal.
    pub fn mark_end(&mut self) {
        self.end_of_stream = true;
    }

    /// Returns the heap's sequence number.
    #[must_use]
    pub const fn sequence(&self) -> HeapSequence {
        self.sequence
    }

    /// Returns the stream flavour stamped on this heap.
    #[must_use]
    pub const fn flavour(&self) -> Flavour {
        self.flavour
    }

    /// Returns the descriptor attachments in attachment order.
    #[must_use]
    pub fn descriptors(&self) -> &[DescriptorBlock] {
        &self.descriptors
    }

    /// Returns the value attachments in attachment order.
    #[must_use]
    pub fn values(&self) -> &[ValueBlock] {
        &self.values
    }

    /// Returns `true` if this heap signals end of stream.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.end_of_stream
    }

    /// Returns `true` if the heap carries nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty() && self.values.is_empty() && !self.end_of_stream
    }
}
