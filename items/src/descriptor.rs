//! Item descriptors and deterministic descriptor hashing.

use blake3::Hasher;

use crate::error::{DescriptorError, DescriptorResult};

/// Schema/metadata describing an item's shape, distinct from its value.
///
/// A descriptor is what a receiver needs in order to interpret the raw bytes
/// of an item value: a name, a human-readable description, the dimensions of
/// the payload, and a format string naming the element encoding. The sender
/// treats the contents as opaque beyond validation; interpretation belongs
/// to the wire encoder and the receive side.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Descriptor {
    pub name: String,
    pub description: String,
    pub shape: Vec<u64>,
    pub format: String,
}

impl Descriptor {
    /// Creates a descriptor with the given name and no other metadata.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            shape: Vec::new(),
            format: String::new(),
        }
    }

    /// Sets the human-readable description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the payload dimensions.
    #[must_use]
    pub fn shape(mut self, shape: Vec<u64>) -> Self {
        self.shape = shape;
        self
    }

    /// Sets the element format string.
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Validates descriptor invariants.
    pub fn validate(&self) -> DescriptorResult<()> {
        if self.name.is_empty() {
            return Err(DescriptorError::EmptyName);
        }
        Ok(())
    }
}

/// Computes a deterministic hash of a descriptor's canonical form.
///
/// Two descriptors hash equal exactly when all their fields are equal. The
/// hash is stable across runs and platforms, so it can be exchanged with a
/// receiver to detect schema drift without shipping the full descriptor.
#[must_use]
pub fn descriptor_hash(descriptor: &Descriptor) -> u64 {
    let mut hasher = Hasher::new();
    write_str(&mut hasher, &descriptor.name);
    write_str(&mut hasher, &descriptor.description);
    write_u32(&mut hasher, descriptor.shape.len() as u32);
    for dim in &descriptor.shape {
        write_u64(&mut hasher, *dim);
    }
    write_str(&mut hasher, &descriptor.format);

    let hash = hasher.finalize();
    let bytes = hash.as_bytes();
    u64::from_le_bytes(bytes[0..8].try_into().unwrap())
}

fn write_str(hasher: &mut Hasher, value: &str) {
    write_u32(hasher, value.len() as u32);
    hasher.update(value.as_bytes());
}

fn write_u32(hasher: &mut Hasher, value: u32) {
    hasher.update(&value.to_le_bytes());
}

fn write_u64(hasher: &mut Hasher, value: u64) {
    hasher.update(&value.to_le_bytes());
}
