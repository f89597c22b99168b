//! This module defines [`Height`].

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Height
#[derive(
    Serialize, Deserialize, JsonSchema, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Default,
)]
pub struct Height {
    /// The revision number
    /// This is always 0 in the current implementation
    #[serde(default)]
    pub revision_number: u64,
    /// The rollup block height
    pub revision_height: u64,
}

impl Height {
    /// Creates a height in revision 0.
    #[must_use]
    pub const fn new(revision_height: u64) -> Self {
        Self {
            revision_number: 0,
            revision_height,
        }
    }

    /// The revision number and height as two big-endian integers, ordered like the height.
    #[must_use]
    pub fn to_be_bytes(&self) -> [u8; 16] {
        let mut bytes = [0; 16];
        bytes[..8].copy_from_slice(&self.revision_number.to_be_bytes());
        bytes[8..].copy_from_slice(&self.revision_height.to_be_bytes());
        bytes
    }

    /// Decodes a height written by [`Self::to_be_bytes`].
    #[must_use]
    pub fn from_be_bytes(bytes: &[u8]) -> Option<Self> {
        let (revision_number, revision_height) = bytes.split_at_checked(8)?;
        Some(Self {
            revision_number: u64::from_be_bytes(revision_number.try_into().ok()?),
            revision_height: u64::from_be_bytes(revision_height.try_into().ok()?),
        })
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.revision_number, self.revision_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_be_bytes() {
        let height = Height {
            revision_number: 1,
            revision_height: 258,
        };
        let bytes = height.to_be_bytes();
        assert_eq!(bytes, [0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 2]);
        assert_eq!(Height::from_be_bytes(&bytes), Some(height));

        assert_eq!(Height::from_be_bytes(&bytes[..15]), None);
        assert_eq!(Height::from_be_bytes(&[bytes.as_slice(), &[0]].concat()), None);
    }
}
