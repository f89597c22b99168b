//! Fixtures shared by the light client tests

use alloy_primitives::{b256, hex, B256};
use ethereum_trie_db::types::keccak_256;

use crate::{
    client_state::ClientState, consensus_state::ConsensusState, header::Header,
    membership::{MembershipProof, MerklePath},
};

/// The rollup state root at genesis
pub const GENESIS_STATE_ROOT: B256 = B256::repeat_byte(0xaa);
/// The state root of the initial consensus state
pub const INITIAL_STATE_ROOT: B256 = B256::repeat_byte(0xbb);
/// The state root claimed by [`header`]
pub const NEW_STATE_ROOT: B256 = B256::repeat_byte(0xcc);
/// The timestamp of the initial consensus state in unix nanoseconds
pub const INITIAL_TIMESTAMP: u64 = 1_700_000_000 * 1_000_000_000;
/// Rollup block time in nanoseconds
pub const BLOCK_TIME: u64 = 2_000_000_000;

/// Storage root of a trie holding [`membership_value`] at [`membership_path`]
pub const MEMBERSHIP_ROOT: B256 =
    b256!("e488caae2c0464e311e4a2df82bc74885fa81778d04131db6af3a451110a5eb5");
/// Storage root of a trie holding only slot zero
pub const NON_MEMBERSHIP_ROOT: B256 =
    b256!("8fce1302ff9ebea6343badec86e9814151872067d2dd47de08ec83e9bc7d22b3");

/// A client state at `latest_height` with the given state transition verifying key.
#[must_use]
pub fn client_state(latest_height: u64, state_transition_verifier_key: Vec<u8>) -> ClientState {
    ClientState {
        latest_height,
        state_transition_verifier_key,
        state_membership_verifier_key: vec![],
        code_commitment: vec![0x42; 32],
        genesis_state_root: GENESIS_STATE_ROOT,
    }
}

/// The consensus state stored at initialization.
#[must_use]
pub const fn initial_consensus_state() -> ConsensusState {
    ConsensusState {
        timestamp: INITIAL_TIMESTAMP,
        state_root: INITIAL_STATE_ROOT,
    }
}

/// A header moving from `trusted_height` to `new_height` with state root [`NEW_STATE_ROOT`].
#[must_use]
pub fn header(trusted_height: u64, new_height: u64, state_transition_proof: Vec<u8>) -> Header {
    Header {
        trusted_height,
        trusted_celestia_header_hash: B256::repeat_byte(0x11),
        new_height,
        new_state_root: NEW_STATE_ROOT,
        new_celestia_header_hash: B256::repeat_byte(0x22),
        data_roots: vec![B256::repeat_byte(0x33)],
        timestamp: INITIAL_TIMESTAMP + new_height.saturating_sub(trusted_height) * BLOCK_TIME,
        state_transition_proof,
    }
}

/// The hashed slot key proven by [`membership_proof`].
#[must_use]
pub fn membership_path() -> MerklePath {
    MerklePath {
        key_path: vec![keccak_256(&hex!(
            "75d7411cb01daad167713b5a9b7219670f0e500653cbbcd45cfe1bfe04222459"
        ))
        .to_vec()],
    }
}

/// The value stored at [`membership_path`].
#[must_use]
pub fn membership_value() -> Vec<u8> {
    hex!("a0b2ae8ab0be3bda2f81dc166497902a1832fea11b886bc7a0980dec7a219582db").to_vec()
}

/// A JSON encoded [`MembershipProof`] under [`MEMBERSHIP_ROOT`].
#[must_use]
pub fn membership_proof() -> Vec<u8> {
    encode_proof(vec![
        hex!("f8718080a0911797c4b8cdbd1d8fa643b31ff0a469fae0f9b2ecbb0fa45a5ebe497f5e7130a065ea7eb6ae4e9747a131961beda4e9fd3040521e58845f4a286fb472eb0415168080a057b16d9a3bbb2d106b4d1b12dca3504f61899c7c660b036848511426ed342dd680808080808080808080").to_vec(),
        hex!("f843a03d3c3bcf030006afea2a677a6ff5bf3f7f111e87461c8848cf062a5756d1a888a1a0b2ae8ab0be3bda2f81dc166497902a1832fea11b886bc7a0980dec7a219582db").to_vec(),
    ])
}

/// A hashed slot key absent under [`NON_MEMBERSHIP_ROOT`].
#[must_use]
pub fn non_membership_path() -> MerklePath {
    MerklePath {
        key_path: vec![keccak_256(&hex!(
            "7a0c5ed5d5cb00ab03f4363e63deb3b05017026890db9f2110e931630567bf93"
        ))
        .to_vec()],
    }
}

/// The hashed key of slot zero, the only slot under [`NON_MEMBERSHIP_ROOT`].
#[must_use]
pub fn slot_zero_path() -> MerklePath {
    MerklePath {
        key_path: vec![keccak_256(&[0; 32]).to_vec()],
    }
}

/// A JSON encoded [`MembershipProof`] under [`NON_MEMBERSHIP_ROOT`].
#[must_use]
pub fn non_membership_proof() -> Vec<u8> {
    encode_proof(vec![hex!(
        "f838a120290decd9548b62a8d60345a988386fc84ba6bc95484008f6362f93160ef3e5639594eb9407e2a087056b69d43d21df69b82e31533c8a"
    )
    .to_vec()])
}

fn encode_proof(proof: Vec<Vec<u8>>) -> Vec<u8> {
    serde_json::to_vec(&MembershipProof { proof }).expect("membership proof should serialize")
}
