//! This module contains the `CosmWasm` entrypoints for the 08-wasm smart contract

use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response};

use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, Migration, QueryMsg, SudoMsg};
use crate::{instantiate, query};
use crate::{sudo, ContractError};

/// The version of the contracts state.
/// It is used to determine if the state needs to be migrated in the migrate entry point.
const STATE_VERSION: &str = env!("CARGO_PKG_VERSION");
const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");

/// The instantiate entry point for the CosmWasm contract.
/// # Errors
/// Will return an error if the client state or consensus state cannot be deserialized.
#[entry_point]
#[allow(clippy::needless_pass_by_value)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, STATE_VERSION)?;

    instantiate::client(deps.storage, &env, msg)?;

    Ok(Response::default())
}

/// The sudo entry point for the CosmWasm contract.
/// It routes the message to the appropriate handler.
/// # Errors
/// Will return an error if the handler returns an error.
#[entry_point]
#[allow(clippy::needless_pass_by_value)]
pub fn sudo(deps: DepsMut, env: Env, msg: SudoMsg) -> Result<Response, ContractError> {
    let result = match msg {
        SudoMsg::UpdateState(update_state_msg) => {
            sudo::update_state(deps, &env, update_state_msg)?
        }
        SudoMsg::UpdateStateOnMisbehaviour(misbehaviour_msg) => {
            sudo::misbehaviour(deps, &env, misbehaviour_msg)?
        }
        SudoMsg::VerifyMembership(verify_membership_msg) => {
            sudo::verify_membership(deps.as_ref(), &env, verify_membership_msg)?
        }
        SudoMsg::VerifyNonMembership(verify_non_membership_msg) => {
            sudo::verify_non_membership(deps.as_ref(), &env, verify_non_membership_msg)?
        }
        SudoMsg::VerifyUpgradeAndUpdateState(upgrade_msg) => {
            sudo::verify_upgrade_and_update_state(deps, &env, upgrade_msg)?
        }
        SudoMsg::MigrateClientStore(migrate_client_store_msg) => {
            sudo::migrate_client_store(deps, &env, migrate_client_store_msg)?
        }
    };

    Ok(Response::default().set_data(result))
}

/// Execute entry point is not used in this contract.
#[entry_point]
#[allow(clippy::needless_pass_by_value, clippy::missing_errors_doc)]
pub fn execute(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {}
}

/// The query entry point for the CosmWasm contract.
/// It routes the message to the appropriate handler.
/// # Errors
/// Will return an error if the handler returns an error.
#[entry_point]
#[allow(clippy::needless_pass_by_value)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::VerifyClientMessage(verify_client_message_msg) => {
            query::verify_client_message(deps, &env, verify_client_message_msg)
        }
        QueryMsg::CheckForMisbehaviour(check_for_misbehaviour_msg) => {
            query::check_for_misbehaviour(deps, &env, check_for_misbehaviour_msg)
        }
        QueryMsg::TimestampAtHeight(timestamp_at_height_msg) => {
            query::timestamp_at_height(deps, &env, timestamp_at_height_msg)
        }
        QueryMsg::Status(_) => query::status(deps, &env),
    }
}

/// The migrate entry point for the CosmWasm contract.
/// # Errors
/// Will return an error if the stored contract version is newer, or if reinstantiating fails.
#[entry_point]
#[allow(clippy::needless_pass_by_value)]
pub fn migrate(deps: DepsMut, env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    cw2::ensure_from_older_version(deps.storage, CONTRACT_NAME, STATE_VERSION)?;

    match msg.migration {
        Migration::CodeOnly => {}
        Migration::Reinstantiate(instantiate_msg) => {
            instantiate::reinstantiate_client(deps.storage, &env, instantiate_msg)?;
        }
    }

    Ok(Response::default())
}

#[cfg(test)]
mod tests {
    mod instantiate {
        use cosmwasm_std::{
            coins,
            testing::{message_info, mock_env},
            Storage,
        };
        use groth16_light_client::{
            client_state::ClientState, consensus_state::ConsensusState, error::Groth16IBCError,
            test_utils::fixtures,
        };
        use ibc_proto::{
            google::protobuf::Any,
            ibc::lightclients::wasm::v1::{
                ClientState as WasmClientState, ConsensusState as WasmConsensusState,
            },
        };
        use prost::{Message, Name};

        use crate::{
            contract::{instantiate, CONTRACT_NAME, STATE_VERSION},
            msg::InstantiateMsg,
            test::helpers::{instantiate_msg, mk_deps},
        };

        #[test]
        fn assigns_correct_values() {
            let mut deps = mk_deps();
            let creator = deps.api.addr_make("creator");
            let info = message_info(&creator, &coins(1, "uatom"));

            let client_state = fixtures::client_state(42, vec![1, 2, 3]);
            let consensus_state = fixtures::initial_consensus_state();
            let msg = instantiate_msg(&client_state, &consensus_state);

            let res = instantiate(deps.as_mut(), mock_env(), info, msg.clone()).unwrap();
            assert_eq!(0, res.messages.len());

            // Verify client state storage
            let actual_wasm_client_state_any_bz = deps.storage.get(b"clientState").unwrap();
            let actual_wasm_client_state_any =
                Any::decode(actual_wasm_client_state_any_bz.as_slice()).unwrap();
            assert_eq!(
                WasmClientState::type_url(),
                actual_wasm_client_state_any.type_url
            );
            let actual_client_state =
                WasmClientState::decode(actual_wasm_client_state_any.value.as_slice()).unwrap();
            assert_eq!(msg.checksum.to_vec(), actual_client_state.checksum);
            assert_eq!(
                client_state,
                serde_json::from_slice::<ClientState>(&actual_client_state.data).unwrap()
            );
            let latest_height = actual_client_state.latest_height.unwrap();
            assert_eq!(0, latest_height.revision_number);
            assert_eq!(client_state.latest_height, latest_height.revision_height);

            // Verify consensus state storage
            let actual_wasm_consensus_state_any_bz =
                deps.storage.get(b"consensusStates/0-42").unwrap();
            let actual_wasm_consensus_state_any =
                Any::decode(actual_wasm_consensus_state_any_bz.as_slice()).unwrap();
            assert_eq!(
                WasmConsensusState::type_url(),
                actual_wasm_consensus_state_any.type_url
            );
            let actual_consensus_state =
                WasmConsensusState::decode(actual_wasm_consensus_state_any.value.as_slice())
                    .unwrap();
            assert_eq!(
                consensus_state,
                serde_json::from_slice::<ConsensusState>(&actual_consensus_state.data).unwrap()
            );

            // Verify processed metadata
            let env = mock_env();
            assert_eq!(
                deps.storage
                    .get(b"consensusStates/0-42/processedTime")
                    .unwrap(),
                env.block.time.nanos().to_be_bytes()
            );
            assert_eq!(
                deps.storage
                    .get(b"consensusStates/0-42/processedHeight")
                    .unwrap(),
                [0u64.to_be_bytes(), env.block.height.to_be_bytes()].concat()
            );

            let version = cw2::get_contract_version(&deps.storage).unwrap();
            assert_eq!(CONTRACT_NAME, version.contract);
            assert_eq!(STATE_VERSION, version.version);
        }

        #[test]
        fn rejects_invalid_client_state() {
            let mut deps = mk_deps();
            let creator = deps.api.addr_make("creator");
            let info = message_info(&creator, &coins(1, "uatom"));

            let msg = InstantiateMsg {
                client_state: b"not json".into(),
                consensus_state: b"{}".into(),
                checksum: b"checksum".into(),
            };

            let res = instantiate(deps.as_mut(), mock_env(), info, msg);
            assert!(matches!(
                res,
                Err(crate::ContractError::DeserializeClientStateFailed(_))
            ));
            assert!(deps.storage.get(b"clientState").is_none());
        }

        #[test]
        fn rejects_invalid_consensus_state() {
            let mut deps = mk_deps();
            let creator = deps.api.addr_make("creator");
            let info = message_info(&creator, &coins(1, "uatom"));

            let client_state = fixtures::client_state(42, vec![1, 2, 3]);
            let msg = InstantiateMsg {
                client_state: serde_json::to_vec(&client_state).unwrap().into(),
                consensus_state: b"not json".into(),
                checksum: b"checksum".into(),
            };

            let res = instantiate(deps.as_mut(), mock_env(), info, msg);
            assert!(matches!(
                res,
                Err(crate::ContractError::DeserializeConsensusStateFailed(_))
            ));
            assert!(deps.storage.get(b"clientState").is_none());
            assert!(deps.storage.get(b"consensusStates/0-42").is_none());
        }

        #[test]
        fn rejects_second_instantiate() {
            let mut deps = mk_deps();
            let creator = deps.api.addr_make("creator");
            let info = message_info(&creator, &coins(1, "uatom"));

            let msg = instantiate_msg(
                &fixtures::client_state(42, vec![1, 2, 3]),
                &fixtures::initial_consensus_state(),
            );
            instantiate(deps.as_mut(), mock_env(), info.clone(), msg).unwrap();
            let client_state_bz = deps.storage.get(b"clientState").unwrap();
            let consensus_state_bz = deps.storage.get(b"consensusStates/0-42").unwrap();

            let consensus_state = ConsensusState {
                timestamp: fixtures::INITIAL_TIMESTAMP,
                state_root: fixtures::NEW_STATE_ROOT,
            };
            let msg = instantiate_msg(&fixtures::client_state(42, vec![4, 5, 6]), &consensus_state);
            let res = instantiate(deps.as_mut(), mock_env(), info, msg);
            assert!(matches!(
                res,
                Err(crate::ContractError::InitializeFailed(
                    Groth16IBCError::ClientAlreadyInitialized
                ))
            ));
            assert_eq!(Some(client_state_bz), deps.storage.get(b"clientState"));
            assert_eq!(
                Some(consensus_state_bz),
                deps.storage.get(b"consensusStates/0-42")
            );
        }
    }

    mod integration_tests {
        use cosmwasm_std::{
            coins,
            testing::{message_info, mock_env, MockApi, MockQuerier, MockStorage},
            Binary, OwnedDeps, Timestamp,
        };
        use groth16_light_client::{
            error::Groth16IBCError,
            header::Header,
            test_utils::{fixtures, prover::TestProver},
            witness::PublicWitness,
        };

        use crate::{
            contract::{instantiate, migrate, query, sudo},
            msg::{
                CheckForMisbehaviourMsg, CheckForMisbehaviourResult, Height, InstantiateMsg,
                MigrateClientStoreMsg, MigrateMsg, Migration, QueryMsg, StatusMsg, StatusResult,
                SudoMsg, TimestampAtHeightMsg, TimestampAtHeightResult, UpdateStateMsg,
                UpdateStateResult, VerifyClientMessageMsg, VerifyUpgradeAndUpdateStateMsg,
            },
            test::helpers::{instantiate_msg, mk_deps},
            ContractError,
        };

        fn proven_header(prover: &mut TestProver, trusted_height: u64, new_height: u64) -> Header {
            let client_state = fixtures::client_state(100, prover.verifier_key_bytes());
            let mut header = fixtures::header(trusted_height, new_height, vec![]);
            let inputs = PublicWitness::new(
                &client_state,
                &fixtures::initial_consensus_state(),
                &header,
            )
            .to_public_inputs();
            header.state_transition_proof = prover.prove(&inputs);
            header
        }

        fn setup(prover: &TestProver) -> OwnedDeps<MockStorage, MockApi, MockQuerier> {
            let mut deps = mk_deps();
            let creator = deps.api.addr_make("creator");
            let info = message_info(&creator, &coins(1, "uatom"));
            let msg: InstantiateMsg = instantiate_msg(
                &fixtures::client_state(100, prover.verifier_key_bytes()),
                &fixtures::initial_consensus_state(),
            );
            instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();
            deps
        }

        #[test]
        fn basic_client_update_flow() {
            let mut prover = TestProver::new(21);
            let mut deps = setup(&prover);
            let header = proven_header(&mut prover, 100, 101);
            let header_bz = serde_json::to_vec(&header).unwrap();

            let mut env = mock_env();
            env.block.time = Timestamp::from_nanos(header.timestamp).plus_seconds(100);
            env.block.height += 1;

            // Verify client message
            let query_verify_client_msg = QueryMsg::VerifyClientMessage(VerifyClientMessageMsg {
                client_message: Binary::from(header_bz.clone()),
            });
            query(deps.as_ref(), env.clone(), query_verify_client_msg).unwrap();

            // Update state
            let sudo_update_state_msg = SudoMsg::UpdateState(UpdateStateMsg {
                client_message: Binary::from(header_bz.clone()),
            });
            let update_res = sudo(deps.as_mut(), env.clone(), sudo_update_state_msg).unwrap();
            let update_state_result: UpdateStateResult =
                serde_json::from_slice(&update_res.data.unwrap())
                    .expect("update state result should be deserializable");
            assert_eq!(
                vec![Height {
                    revision_number: 0,
                    revision_height: 101
                }],
                update_state_result.heights
            );

            // Replaying the header changes nothing
            let sudo_update_state_msg = SudoMsg::UpdateState(UpdateStateMsg {
                client_message: Binary::from(header_bz),
            });
            let update_res = sudo(deps.as_mut(), env.clone(), sudo_update_state_msg).unwrap();
            let update_state_result: UpdateStateResult =
                serde_json::from_slice(&update_res.data.unwrap()).unwrap();
            assert_eq!(101, update_state_result.heights[0].revision_height);

            let timestamp_msg = QueryMsg::TimestampAtHeight(TimestampAtHeightMsg {
                height: Height {
                    revision_number: 0,
                    revision_height: 101,
                },
            });
            let res = query(deps.as_ref(), env.clone(), timestamp_msg).unwrap();
            let timestamp_result: TimestampAtHeightResult = serde_json::from_slice(&res).unwrap();
            assert_eq!(header.timestamp, timestamp_result.timestamp);

            let res = query(deps.as_ref(), env, QueryMsg::Status(StatusMsg {})).unwrap();
            let status_result: StatusResult = serde_json::from_slice(&res).unwrap();
            assert_eq!("Active", status_result.status);
        }

        #[test]
        fn update_fails_on_invalid_proof() {
            let mut prover = TestProver::new(22);
            let mut deps = setup(&prover);
            let mut header = proven_header(&mut prover, 100, 101);
            header.new_height = 102;
            let header_bz = serde_json::to_vec(&header).unwrap();

            let sudo_update_state_msg = SudoMsg::UpdateState(UpdateStateMsg {
                client_message: Binary::from(header_bz),
            });
            let res = sudo(deps.as_mut(), mock_env(), sudo_update_state_msg);
            assert!(matches!(
                res,
                Err(ContractError::UpdateStateFailed(
                    Groth16IBCError::ProofRejected
                ))
            ));

            let timestamp_msg = QueryMsg::TimestampAtHeight(TimestampAtHeightMsg {
                height: Height {
                    revision_number: 0,
                    revision_height: 102,
                },
            });
            let res = query(deps.as_ref(), mock_env(), timestamp_msg);
            assert!(matches!(
                res,
                Err(ContractError::ReadClientFailed(
                    Groth16IBCError::MissingConsensusState(_)
                ))
            ));
        }

        #[test]
        fn update_fails_on_stale_timestamp() {
            let mut prover = TestProver::new(28);
            let mut deps = setup(&prover);
            let mut header = proven_header(&mut prover, 100, 101);
            header.timestamp = 0;
            let header_bz = serde_json::to_vec(&header).unwrap();

            let query_verify_client_msg = QueryMsg::VerifyClientMessage(VerifyClientMessageMsg {
                client_message: Binary::from(header_bz.clone()),
            });
            let res = query(deps.as_ref(), mock_env(), query_verify_client_msg);
            assert!(matches!(
                res,
                Err(ContractError::VerifyClientMessageFailed(
                    Groth16IBCError::NonMonotonicTimestamp { .. }
                ))
            ));

            let sudo_update_state_msg = SudoMsg::UpdateState(UpdateStateMsg {
                client_message: Binary::from(header_bz),
            });
            let res = sudo(deps.as_mut(), mock_env(), sudo_update_state_msg);
            assert!(matches!(
                res,
                Err(ContractError::UpdateStateFailed(
                    Groth16IBCError::NonMonotonicTimestamp { .. }
                ))
            ));

            let timestamp_msg = QueryMsg::TimestampAtHeight(TimestampAtHeightMsg {
                height: Height {
                    revision_number: 0,
                    revision_height: 101,
                },
            });
            let res = query(deps.as_ref(), mock_env(), timestamp_msg);
            assert!(matches!(
                res,
                Err(ContractError::ReadClientFailed(
                    Groth16IBCError::MissingConsensusState(_)
                ))
            ));
        }

        #[cfg(not(feature = "mock-proofs"))]
        #[test]
        fn mock_proofs_are_rejected() {
            let prover = TestProver::new(23);
            let mut deps = setup(&prover);
            let header = fixtures::header(100, 101, vec![0; 256]);

            let sudo_update_state_msg = SudoMsg::UpdateState(UpdateStateMsg {
                client_message: Binary::from(serde_json::to_vec(&header).unwrap()),
            });
            let res = sudo(deps.as_mut(), mock_env(), sudo_update_state_msg);
            assert!(matches!(
                res,
                Err(ContractError::UpdateStateFailed(Groth16IBCError::Codec(_)))
            ));
        }

        #[test]
        fn verify_client_message_fails_on_non_monotonic_header() {
            let prover = TestProver::new(24);
            let deps = setup(&prover);
            let header = fixtures::header(101, 100, vec![]);

            let query_verify_client_msg = QueryMsg::VerifyClientMessage(VerifyClientMessageMsg {
                client_message: Binary::from(serde_json::to_vec(&header).unwrap()),
            });
            let res = query(deps.as_ref(), mock_env(), query_verify_client_msg);
            assert!(matches!(
                res,
                Err(ContractError::VerifyClientMessageFailed(
                    Groth16IBCError::InvalidHeader { .. }
                ))
            ));

            let query_verify_client_msg = QueryMsg::VerifyClientMessage(VerifyClientMessageMsg {
                client_message: Binary::from(b"not a header".to_vec()),
            });
            let res = query(deps.as_ref(), mock_env(), query_verify_client_msg);
            assert!(matches!(
                res,
                Err(ContractError::VerifyClientMessageFailed(
                    Groth16IBCError::InvalidMessage(_)
                ))
            ));
        }

        #[test]
        fn misbehaviour_is_never_found() {
            let prover = TestProver::new(25);
            let mut deps = setup(&prover);
            let header_bz = serde_json::to_vec(&fixtures::header(100, 101, vec![])).unwrap();

            let res = query(
                deps.as_ref(),
                mock_env(),
                QueryMsg::CheckForMisbehaviour(CheckForMisbehaviourMsg {
                    client_message: Binary::from(header_bz.clone()),
                }),
            )
            .unwrap();
            let result: CheckForMisbehaviourResult = serde_json::from_slice(&res).unwrap();
            assert!(!result.found_misbehaviour);

            sudo(
                deps.as_mut(),
                mock_env(),
                SudoMsg::UpdateStateOnMisbehaviour(crate::msg::UpdateStateOnMisbehaviourMsg {
                    client_message: Binary::from(header_bz),
                }),
            )
            .unwrap();
        }

        #[test]
        fn unsupported_operations() {
            let prover = TestProver::new(26);
            let mut deps = setup(&prover);

            let res = sudo(
                deps.as_mut(),
                mock_env(),
                SudoMsg::VerifyUpgradeAndUpdateState(VerifyUpgradeAndUpdateStateMsg {
                    upgrade_client_state: Binary::default(),
                    upgrade_consensus_state: Binary::default(),
                    proof_upgrade_client: Binary::default(),
                    proof_upgrade_consensus_state: Binary::default(),
                }),
            );
            assert!(matches!(
                res,
                Err(ContractError::Unsupported(Groth16IBCError::Unsupported(_)))
            ));

            let res = sudo(
                deps.as_mut(),
                mock_env(),
                SudoMsg::MigrateClientStore(MigrateClientStoreMsg {}),
            );
            assert!(matches!(
                res,
                Err(ContractError::Unsupported(Groth16IBCError::Unsupported(_)))
            ));
        }

        #[test]
        fn migrate_reinstantiates_client() {
            let prover = TestProver::new(27);
            let mut deps = setup(&prover);

            migrate(
                deps.as_mut(),
                mock_env(),
                MigrateMsg {
                    migration: Migration::CodeOnly,
                },
            )
            .unwrap();

            let msg = instantiate_msg(
                &fixtures::client_state(200, prover.verifier_key_bytes()),
                &fixtures::initial_consensus_state(),
            );
            migrate(
                deps.as_mut(),
                mock_env(),
                MigrateMsg {
                    migration: Migration::Reinstantiate(msg),
                },
            )
            .unwrap();

            let timestamp_msg = QueryMsg::TimestampAtHeight(TimestampAtHeightMsg {
                height: Height {
                    revision_number: 0,
                    revision_height: 200,
                },
            });
            let res = query(deps.as_ref(), mock_env(), timestamp_msg).unwrap();
            let timestamp_result: TimestampAtHeightResult = serde_json::from_slice(&res).unwrap();
            assert_eq!(fixtures::INITIAL_TIMESTAMP, timestamp_result.timestamp);

            // the consensus state of the replaced client is kept
            let timestamp_msg = QueryMsg::TimestampAtHeight(TimestampAtHeightMsg {
                height: Height {
                    revision_number: 0,
                    revision_height: 100,
                },
            });
            query(deps.as_ref(), mock_env(), timestamp_msg).unwrap();
        }
    }

    mod membership_tests {
        use cosmwasm_std::{
            coins,
            testing::{message_info, mock_env},
            Binary,
        };
        use groth16_light_client::{
            consensus_state::ConsensusState, error::Groth16IBCError, test_utils::fixtures,
        };

        use crate::{
            contract::{instantiate, sudo},
            msg::{Height, MerklePath, SudoMsg, VerifyMembershipMsg, VerifyNonMembershipMsg},
            test::helpers::{instantiate_msg, mk_deps},
            ContractError,
        };

        const HEIGHT: Height = Height {
            revision_number: 0,
            revision_height: 100,
        };

        fn merkle_path(path: groth16_light_client::membership::MerklePath) -> MerklePath {
            MerklePath {
                key_path: path.key_path.into_iter().map(Binary::from).collect(),
            }
        }

        #[test]
        fn verify_membership() {
            let mut deps = mk_deps();
            let creator = deps.api.addr_make("creator");
            let info = message_info(&creator, &coins(1, "uatom"));
            let consensus_state = ConsensusState {
                timestamp: fixtures::INITIAL_TIMESTAMP,
                state_root: fixtures::MEMBERSHIP_ROOT,
            };
            let msg = instantiate_msg(&fixtures::client_state(100, vec![]), &consensus_state);
            instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();

            let verify_membership_msg = VerifyMembershipMsg {
                height: HEIGHT,
                delay_time_period: 0,
                delay_block_period: 0,
                proof: fixtures::membership_proof().into(),
                merkle_path: merkle_path(fixtures::membership_path()),
                value: fixtures::membership_value().into(),
            };
            sudo(
                deps.as_mut(),
                mock_env(),
                SudoMsg::VerifyMembership(verify_membership_msg.clone()),
            )
            .unwrap();

            let res = sudo(
                deps.as_mut(),
                mock_env(),
                SudoMsg::VerifyMembership(VerifyMembershipMsg {
                    value: vec![0x01].into(),
                    ..verify_membership_msg
                }),
            );
            assert!(matches!(
                res,
                Err(ContractError::VerifyMembershipFailed(
                    Groth16IBCError::ValueMismatch { .. }
                ))
            ));
        }

        #[test]
        fn verify_non_membership_with_delay() {
            let mut deps = mk_deps();
            let creator = deps.api.addr_make("creator");
            let info = message_info(&creator, &coins(1, "uatom"));
            let consensus_state = ConsensusState {
                timestamp: fixtures::INITIAL_TIMESTAMP,
                state_root: fixtures::NON_MEMBERSHIP_ROOT,
            };
            let msg = instantiate_msg(&fixtures::client_state(100, vec![]), &consensus_state);
            instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();

            let verify_non_membership_msg = VerifyNonMembershipMsg {
                height: HEIGHT,
                delay_time_period: 60_000_000_000,
                delay_block_period: 10,
                proof: fixtures::non_membership_proof().into(),
                merkle_path: merkle_path(fixtures::non_membership_path()),
            };

            let res = sudo(
                deps.as_mut(),
                mock_env(),
                SudoMsg::VerifyNonMembership(verify_non_membership_msg.clone()),
            );
            assert!(matches!(
                res,
                Err(ContractError::VerifyNonMembershipFailed(
                    Groth16IBCError::DelayPeriodNotPassed { .. }
                ))
            ));

            let mut env = mock_env();
            env.block.time = env.block.time.plus_seconds(60);
            env.block.height += 10;
            sudo(
                deps.as_mut(),
                env.clone(),
                SudoMsg::VerifyNonMembership(verify_non_membership_msg.clone()),
            )
            .unwrap();

            let res = sudo(
                deps.as_mut(),
                env,
                SudoMsg::VerifyNonMembership(VerifyNonMembershipMsg {
                    merkle_path: merkle_path(fixtures::slot_zero_path()),
                    ..verify_non_membership_msg
                }),
            );
            assert!(matches!(
                res,
                Err(ContractError::VerifyNonMembershipFailed(
                    Groth16IBCError::UnexpectedPresence { .. }
                ))
            ));
        }
    }
}
