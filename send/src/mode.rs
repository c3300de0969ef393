//! Inclusion modes for descriptors and data.

use std::fmt;
use std::str::FromStr;

use crate::error::SendError;

/// How much of a category (descriptors or data) to include in a heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Include only what the tracking state judges stale.
    Stale,
    /// Include everything, stale or not. Useful when a new receiver joins
    /// and its view is known to be out of date.
    All,
    /// Include nothing from this category.
    None,
}

impl Mode {
    /// Returns the canonical name for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stale => "stale",
            Self::All => "all",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = SendError;

    /// Parses `"stale"`, `"all"`, or `"none"`.
    ///
    /// Anything else fails with [`SendError::InvalidMode`] before it can
    /// reach a generator, so a bad mode string never perturbs tracking
    /// state or the shared counter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stale" => Ok(Self::Stale),
            "all" => Ok(Self::All),
            "none" => Ok(Self::None),
            _ => Err(SendError::InvalidMode {
                given: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_modes() {
        assert_eq!("stale".parse::<Mode>().unwrap(), Mode::Stale);
        assert_eq!("all".parse::<Mode>().unwrap(), Mode::All);
        assert_eq!("none".parse::<Mode>().unwrap(), Mode::None);
    }

    #[test]
    fn parse_rejects_unknown_mode() {
        let err = "bogus".parse::<Mode>().unwrap_err();
        assert!(matches!(err, SendError::InvalidMode { ref given } if given == "bogus"));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("Stale".parse::<Mode>().is_err());
        assert!("ALL".parse::<Mode>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for mode in [Mode::Stale, Mode::All, Mode::None] {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }
}
