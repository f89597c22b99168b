//! This module defines [`ClientState`].

use alloy_primitives::B256;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};

use crate::{error::Groth16IBCError, height::Height};

/// The Groth16 client state
#[serde_as]
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone, Debug, Default)]
pub struct ClientState {
    /// The highest height with an accepted consensus state
    pub latest_height: u64,
    /// The canonical encoding of the state transition circuit's verifying key
    #[serde_as(as = "Base64")]
    #[schemars(with = "String")]
    pub state_transition_verifier_key: Vec<u8>,
    /// Verifying key of a dedicated membership circuit, reserved and not used for verification
    #[serde_as(as = "Base64")]
    #[schemars(with = "String")]
    pub state_membership_verifier_key: Vec<u8>,
    /// Commitment to the rollup program, a public input of every state transition
    #[serde_as(as = "Base64")]
    #[schemars(with = "String")]
    pub code_commitment: Vec<u8>,
    /// The rollup state root at genesis, a public input of every state transition
    #[schemars(with = "String")]
    pub genesis_state_root: B256,
}

impl ClientState {
    /// Returns the latest height as a revision 0 height.
    #[must_use]
    pub const fn latest_height(&self) -> Height {
        Height::new(self.latest_height)
    }

    /// Checks the invariants of the client state.
    /// # Errors
    /// Currently never fails.
    #[allow(clippy::unnecessary_wraps)]
    pub const fn validate(&self) -> Result<(), Groth16IBCError> {
        Ok(())
    }

    /// Returns a copy with every chain specific field cleared, keeping the
    /// latest height and the state transition verifying key.
    #[must_use]
    pub fn zero_custom_fields(&self) -> Self {
        Self {
            latest_height: self.latest_height,
            state_transition_verifier_key: self.state_transition_verifier_key.clone(),
            ..Default::default()
        }
    }
}
