//! This module defines [`ConsensusState`].

use alloy_primitives::B256;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The consensus state of the rollup at an accepted height
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone, Debug, Default)]
pub struct ConsensusState {
    /// Timestamp of the rollup block in unix nanoseconds
    pub timestamp: u64,
    /// The rollup state root after the block, used as MPT root for membership proofs
    #[schemars(with = "String")]
    pub state_root: B256,
}
