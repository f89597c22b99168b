//! This module contains the query message handlers

use cosmwasm_std::{to_json_binary, Binary, Deps, Env};
use groth16_light_client::codec::RecordCodec;

use crate::{
    msg::{
        CheckForMisbehaviourMsg, CheckForMisbehaviourResult, StatusResult, TimestampAtHeightMsg,
        TimestampAtHeightResult, VerifyClientMessageMsg,
    },
    state::{read_only_client, WasmCodec},
    ContractError,
};

/// Verifies the client message (header) that will be used for updating the state of the light client
/// The state transition proof is verified when the state is updated
/// # Errors
/// Returns an error if the client message is invalid
/// # Returns
/// An empty response
#[allow(clippy::needless_pass_by_value)]
pub fn verify_client_message(
    deps: Deps,
    env: &Env,
    verify_client_message_msg: VerifyClientMessageMsg,
) -> Result<Binary, ContractError> {
    let client_message = WasmCodec::default()
        .decode_client_message(&verify_client_message_msg.client_message)
        .map_err(ContractError::VerifyClientMessageFailed)?;

    read_only_client(deps.storage, env)
        .verify_client_message(&client_message)
        .map_err(ContractError::VerifyClientMessageFailed)?;

    Ok(Binary::default())
}

/// Checks for misbehaviour, which this client never finds
/// # Errors
/// Returns an error if the client message cannot be decoded
#[allow(clippy::needless_pass_by_value)]
pub fn check_for_misbehaviour(
    deps: Deps,
    env: &Env,
    check_for_misbehaviour_msg: CheckForMisbehaviourMsg,
) -> Result<Binary, ContractError> {
    let client_message = WasmCodec::default()
        .decode_client_message(&check_for_misbehaviour_msg.client_message)
        .map_err(ContractError::VerifyClientMessageFailed)?;

    let found_misbehaviour =
        read_only_client(deps.storage, env).check_for_misbehaviour(&client_message);

    Ok(to_json_binary(&CheckForMisbehaviourResult {
        found_misbehaviour,
    })?)
}

/// Gets the timestamp of the consensus state at the given height
/// # Errors
/// Returns an error if no consensus state is stored at the height
#[allow(clippy::needless_pass_by_value)]
pub fn timestamp_at_height(
    deps: Deps,
    env: &Env,
    timestamp_at_height_msg: TimestampAtHeightMsg,
) -> Result<Binary, ContractError> {
    let timestamp = read_only_client(deps.storage, env)
        .timestamp_at_height(timestamp_at_height_msg.height.into())
        .map_err(ContractError::ReadClientFailed)?;

    Ok(to_json_binary(&TimestampAtHeightResult { timestamp })?)
}

/// Gets the status of the light client
/// # Errors
/// Returns an error if the client state cannot be read
pub fn status(deps: Deps, env: &Env) -> Result<Binary, ContractError> {
    let client = read_only_client(deps.storage, env);
    client
        .client_state()
        .map_err(ContractError::ReadClientFailed)?;

    Ok(to_json_binary(&StatusResult {
        status: client.status().to_string(),
    })?)
}
