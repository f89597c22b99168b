//! This module contains the sudo message handlers

use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env};
use groth16_light_client::codec::RecordCodec;

use crate::{
    msg::{
        MigrateClientStoreMsg, UpdateStateMsg, UpdateStateOnMisbehaviourMsg, UpdateStateResult,
        VerifyMembershipMsg, VerifyNonMembershipMsg, VerifyUpgradeAndUpdateStateMsg,
    },
    state::{host_info, mutable_client, read_only_client, WasmCodec},
    ContractError,
};

/// Verify the membership of a value at a given height
/// # Errors
/// Returns an error if the membership proof verification fails
/// # Returns
/// An empty response
#[allow(clippy::needless_pass_by_value)]
pub fn verify_membership(
    deps: Deps,
    env: &Env,
    verify_membership_msg: VerifyMembershipMsg,
) -> Result<Binary, ContractError> {
    let delay = verify_membership_msg.delay();
    read_only_client(deps.storage, env)
        .verify_membership(
            verify_membership_msg.height.into(),
            &delay,
            &host_info(env),
            &verify_membership_msg.proof,
            &verify_membership_msg.merkle_path.into(),
            &verify_membership_msg.value,
        )
        .map_err(ContractError::VerifyMembershipFailed)?;

    Ok(Binary::default())
}

/// Verify the non-membership of a value at a given height
/// # Errors
/// Returns an error if the non-membership proof verification fails
/// # Returns
/// An empty response
#[allow(clippy::needless_pass_by_value)]
pub fn verify_non_membership(
    deps: Deps,
    env: &Env,
    verify_non_membership_msg: VerifyNonMembershipMsg,
) -> Result<Binary, ContractError> {
    let delay = verify_non_membership_msg.delay();
    read_only_client(deps.storage, env)
        .verify_non_membership(
            verify_non_membership_msg.height.into(),
            &delay,
            &host_info(env),
            &verify_non_membership_msg.proof,
            &verify_non_membership_msg.merkle_path.into(),
        )
        .map_err(ContractError::VerifyNonMembershipFailed)?;

    Ok(Binary::default())
}

/// Update the state of the light client
/// The state transition proof of the header is verified here, even if the
/// client message was verified before
/// # Errors
/// Returns an error if deserialization fails or if the light client update logic fails
/// # Returns
/// The updated heights
#[allow(clippy::needless_pass_by_value)]
pub fn update_state(
    deps: DepsMut,
    env: &Env,
    update_state_msg: UpdateStateMsg,
) -> Result<Binary, ContractError> {
    let client_message = WasmCodec::default()
        .decode_client_message(&update_state_msg.client_message)
        .map_err(ContractError::UpdateStateFailed)?;

    let heights = mutable_client(deps.storage, env)
        .and_then(|mut client| client.update_state(&client_message, &host_info(env)))
        .map_err(ContractError::UpdateStateFailed)?;

    Ok(to_json_binary(&UpdateStateResult {
        heights: heights.into_iter().map(Into::into).collect(),
    })?)
}

/// Update the state of the light client on misbehaviour, which is never found
/// # Errors
/// Returns an error if the client message cannot be decoded
#[allow(clippy::needless_pass_by_value)]
pub fn misbehaviour(
    deps: DepsMut,
    env: &Env,
    msg: UpdateStateOnMisbehaviourMsg,
) -> Result<Binary, ContractError> {
    let client_message = WasmCodec::default()
        .decode_client_message(&msg.client_message)
        .map_err(ContractError::UpdateStateFailed)?;

    mutable_client(deps.storage, env)
        .map_err(ContractError::UpdateStateFailed)?
        .update_state_on_misbehaviour(&client_message);

    Ok(Binary::default())
}

/// Upgrades are not supported
/// # Errors
/// Always returns [`ContractError::Unsupported`]
#[allow(clippy::needless_pass_by_value)]
pub fn verify_upgrade_and_update_state(
    deps: DepsMut,
    env: &Env,
    msg: VerifyUpgradeAndUpdateStateMsg,
) -> Result<Binary, ContractError> {
    mutable_client(deps.storage, env)
        .and_then(|mut client| {
            client.verify_upgrade_and_update_state(
                &msg.upgrade_client_state,
                &msg.upgrade_consensus_state,
                &msg.proof_upgrade_client,
                &msg.proof_upgrade_consensus_state,
            )
        })
        .map_err(ContractError::Unsupported)?;

    Ok(Binary::default())
}

/// Substitute clients are not supported
/// # Errors
/// Always returns [`ContractError::Unsupported`]
#[allow(clippy::needless_pass_by_value)]
pub fn migrate_client_store(
    deps: DepsMut,
    env: &Env,
    _msg: MigrateClientStoreMsg,
) -> Result<Binary, ContractError> {
    mutable_client(deps.storage, env)
        .and_then(|mut client| client.check_substitute_and_update_state())
        .map_err(ContractError::Unsupported)?;

    Ok(Binary::default())
}
