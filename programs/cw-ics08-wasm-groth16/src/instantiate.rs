//! This module contains the instantiate helper functions

use cosmwasm_std::{Env, Storage};
use groth16_light_client::{
    client::LightClient, client_state::ClientState, consensus_state::ConsensusState,
};

use crate::{
    msg::InstantiateMsg,
    state::{client_config, host_info, MutableClient, WasmCodec, WasmStoreMut},
    ContractError,
};

/// Initializes the client state and initial consensus state
/// # Errors
/// Will return an error if the client state or consensus state cannot be deserialized,
/// or if the light client rejects them, including when it is already initialized.
#[allow(clippy::needless_pass_by_value)]
pub fn client(
    storage: &mut dyn Storage,
    env: &Env,
    msg: InstantiateMsg,
) -> Result<(), ContractError> {
    let (client_state, consensus_state) = decode_states(&msg)?;
    light_client(storage, env, &msg)
        .initialize(&client_state, &consensus_state, &host_info(env))
        .map_err(ContractError::InitializeFailed)
}

/// Replaces the stored client state and the consensus state at its latest height
/// # Errors
/// Will return an error if the client state or consensus state cannot be deserialized,
/// or if the light client rejects them.
#[allow(clippy::needless_pass_by_value)]
pub fn reinstantiate_client(
    storage: &mut dyn Storage,
    env: &Env,
    msg: InstantiateMsg,
) -> Result<(), ContractError> {
    let (client_state, consensus_state) = decode_states(&msg)?;
    light_client(storage, env, &msg)
        .reinitialize(&client_state, &consensus_state, &host_info(env))
        .map_err(ContractError::InitializeFailed)
}

fn decode_states(msg: &InstantiateMsg) -> Result<(ClientState, ConsensusState), ContractError> {
    let client_state = serde_json::from_slice(&msg.client_state)
        .map_err(ContractError::DeserializeClientStateFailed)?;
    let consensus_state = serde_json::from_slice(&msg.consensus_state)
        .map_err(ContractError::DeserializeConsensusStateFailed)?;
    Ok((client_state, consensus_state))
}

fn light_client<'a>(
    storage: &'a mut dyn Storage,
    env: &'a Env,
    msg: &InstantiateMsg,
) -> MutableClient<'a> {
    LightClient::new(
        env.contract.address.as_str(),
        WasmStoreMut(storage),
        WasmCodec::new(msg.checksum.to_vec()),
        client_config(),
    )
}
