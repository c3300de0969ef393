//! Protocol flavour: wire-format variant configuration.

use std::fmt;

/// Result type for flavour construction.
pub type FlavourResult<T> = Result<T, FlavourError>;

/// Wire-format variant tag stamped onto every heap.
///
/// The generator threads the flavour through to heap construction without
/// interpreting it; the encoder uses it to pick pointer and address widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flavour {
    item_pointer_bits: u8,
    heap_address_bits: u8,
}

impl Flavour {
    /// Creates a flavour after validating the width constraints.
    ///
    /// Item pointers must be 64 bits wide; address bits must be a positive
    /// multiple of 8 strictly below the pointer width.
    pub fn new(item_pointer_bits: u8, heap_address_bits: u8) -> FlavourResult<Self> {
        if item_pointer_bits != 64 {
            return Err(FlavourError::UnsupportedPointerBits {
                bits: item_pointer_bits,
            });
        }
        if heap_address_bits == 0
            || heap_address_bits % 8 != 0
            || heap_address_bits >= item_pointer_bits
        {
            return Err(FlavourError::InvalidAddressBits {
                bits: heap_address_bits,
            });
        }
        Ok(Self {
            item_pointer_bits,
            heap_address_bits,
        })
    }

    /// Returns the item pointer width in bits.
    #[must_use]
    pub const fn item_pointer_bits(self) -> u8 {
        self.item_pointer_bits
    }

    /// Returns the heap address width in bits.
    #[must_use]
    pub const fn heap_address_bits(self) -> u8 {
        self.heap_address_bits
    }
}

impl Default for Flavour {
    /// 64-bit item pointers with 40 address bits.
    fn default() -> Self {
        Self {
            item_pointer_bits: 64,
            heap_address_bits: 40,
        }
    }
}

/// Errors from flavour validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlavourError {
    /// Only 64-bit item pointers are supported.
    UnsupportedPointerBits { bits: u8 },

    /// Address bits must be a positive multiple of 8 below the pointer width.
    InvalidAddressBits { bits: u8 },
}

impl fmt::Display for FlavourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedPointerBits { bits } => {
                write!(f, "unsupported item pointer width: {bits} bits")
            }
            Self::InvalidAddressBits { bits } => {
                write!(f, "invalid heap address width: {bits} bits")
            }
        }
    }
}

impl std::error::Error for FlavourError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flavour() {
        let flavour = Flavour::default();
        assert_eq!(flavour.item_pointer_bits(), 64);
        assert_eq!(flavour.heap_address_bits(), 40);
    }

    #[test]
    fn new_accepts_valid_widths() {
        let flavour = Flavour::new(64, 48).unwrap();
        assert_eq!(flavour.heap_address_bits(), 48);
    }

    #[test]
    fn new_rejects_non_64_bit_pointers() {
        let err = Flavour::new(32, 24).unwrap_err();
        assert!(matches!(
            err,
            FlavourError::UnsupportedPointerBits { bits: 32 }
        ));
    }

    #[test]
    fn new_rejects_bad_address_bits() {
        assert!(Flavour::new(64, 0).is_err());
        assert!(Flavour::new(64, 37).is_err());
        assert!(Flavour::new(64, 64).is_err());
    }

    #[test]
    fn error_display() {
        let err = FlavourError::InvalidAddressBits { bits: 37 };
        assert!(err.to_string().contains("37"));
    }
}
