//! This module defines [`Header`] and [`ClientMessage`].

use alloy_primitives::B256;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};

use crate::{error::Groth16IBCError, height::Height};

/// A state transition of the rollup from a trusted height to a new height
#[serde_as]
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone, Debug, Default)]
pub struct Header {
    /// The height the proof chains from, a consensus state must exist there
    pub trusted_height: u64,
    /// Hash of the Celestia header the rollup treated as trusted
    #[schemars(with = "String")]
    pub trusted_celestia_header_hash: B256,
    /// The height this header establishes
    pub new_height: u64,
    /// The rollup state root at `new_height`
    #[schemars(with = "String")]
    pub new_state_root: B256,
    /// Hash of the Celestia header the new state derives from
    #[schemars(with = "String")]
    pub new_celestia_header_hash: B256,
    /// Celestia data roots between the trusted and the new header
    #[schemars(with = "Vec<String>")]
    pub data_roots: Vec<B256>,
    /// Timestamp of the rollup block at `new_height` in unix nanoseconds
    pub timestamp: u64,
    /// The Groth16 proof of the state transition
    #[serde_as(as = "Base64")]
    #[schemars(with = "String")]
    pub state_transition_proof: Vec<u8>,
}

impl Header {
    /// The trusted height as a revision 0 height.
    #[must_use]
    pub const fn trusted_height(&self) -> Height {
        Height::new(self.trusted_height)
    }

    /// The new height as a revision 0 height.
    #[must_use]
    pub const fn new_height(&self) -> Height {
        Height::new(self.new_height)
    }

    /// Performs the checks that need no stored state.
    /// # Errors
    /// Returns an error if the new height does not exceed the trusted height.
    pub const fn validate_basic(&self) -> Result<(), Groth16IBCError> {
        if self.new_height <= self.trusted_height {
            return Err(Groth16IBCError::InvalidHeader {
                trusted_height: self.trusted_height,
                new_height: self.new_height,
            });
        }

        Ok(())
    }
}

/// The messages accepted by [`crate::client::LightClient`]
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone, Debug)]
#[serde(rename_all = "snake_case")]
pub enum ClientMessage {
    /// A state transition header
    Header(Header),
}

impl From<Header> for ClientMessage {
    fn from(header: Header) -> Self {
        Self::Header(header)
    }
}
