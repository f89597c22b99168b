//! Helpers for setting up the contract in tests

use cosmwasm_std::{
    testing::{mock_dependencies, MockApi, MockQuerier, MockStorage},
    OwnedDeps,
};
use groth16_light_client::{client_state::ClientState, consensus_state::ConsensusState};

use crate::msg::InstantiateMsg;

/// Creates the mock dependencies the contract is tested against
#[must_use]
pub fn mk_deps() -> OwnedDeps<MockStorage, MockApi, MockQuerier> {
    mock_dependencies()
}

/// Builds an instantiate message from the JSON encoded states
#[must_use]
pub fn instantiate_msg(
    client_state: &ClientState,
    consensus_state: &ConsensusState,
) -> InstantiateMsg {
    InstantiateMsg {
        client_state: serde_json::to_vec(client_state).unwrap().into(),
        consensus_state: serde_json::to_vec(consensus_state).unwrap().into(),
        checksum: b"checksum".into(),
    }
}
