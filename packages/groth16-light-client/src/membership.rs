//! Membership and non-membership proofs against a stored rollup state root.
//!
//! The trie key is the concatenation of every segment of the merkle path, used
//! verbatim as the trie path. Callers proving a slot of a secure trie supply the
//! hashed slot key.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};

use crate::{consensus_state::ConsensusState, error::Groth16IBCError};

/// The merkle path of a commitment
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone, Debug, Default)]
pub struct MerklePath {
    /// The key path segments
    pub key_path: Vec<Vec<u8>>,
}

impl MerklePath {
    /// Derives the trie key by concatenating all path segments.
    /// # Errors
    /// Returns an error if the path has no segments or the key is empty.
    pub fn trie_key(&self) -> Result<Vec<u8>, Groth16IBCError> {
        let key = self.key_path.concat();
        if key.is_empty() {
            return Err(Groth16IBCError::InvalidPath(
                "merkle path must not be empty".to_string(),
            ));
        }
        Ok(key)
    }
}

/// The membership proof: the RLP-encoded trie nodes from the state root to the key
#[serde_as]
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone, Debug, Default)]
pub struct MembershipProof {
    /// The RLP-encoded trie nodes
    #[serde_as(as = "Vec<Base64>")]
    #[schemars(with = "Vec<String>")]
    pub proof: Vec<Vec<u8>>,
}

impl MembershipProof {
    /// Decodes a JSON encoded membership proof.
    /// # Errors
    /// Returns an error if the bytes are not a valid membership proof.
    pub fn decode(bz: &[u8]) -> Result<Self, Groth16IBCError> {
        serde_json::from_slice(bz).map_err(|e| Groth16IBCError::MembershipProofDecode(e.to_string()))
    }
}

/// Verifies that `value` is stored under `path` in the state of `consensus_state`.
/// # Errors
/// Returns an error if the proof is invalid, or the value is missing or different.
pub fn verify_membership(
    consensus_state: &ConsensusState,
    proof: &[u8],
    path: &MerklePath,
    value: &[u8],
) -> Result<(), Groth16IBCError> {
    match prove_value(consensus_state, proof, path)? {
        Some(actual) if actual == value => Ok(()),
        Some(actual) => Err(Groth16IBCError::ValueMismatch {
            expected: value.to_vec(),
            actual,
        }),
        None => Err(Groth16IBCError::ValueMissing {
            value: value.to_vec(),
        }),
    }
}

/// Verifies that nothing is stored under `path` in the state of `consensus_state`.
/// # Errors
/// Returns an error if the proof is invalid or a value is present.
pub fn verify_non_membership(
    consensus_state: &ConsensusState,
    proof: &[u8],
    path: &MerklePath,
) -> Result<(), Groth16IBCError> {
    match prove_value(consensus_state, proof, path)? {
        Some(value) => Err(Groth16IBCError::UnexpectedPresence { value }),
        None => Ok(()),
    }
}

fn prove_value(
    consensus_state: &ConsensusState,
    proof: &[u8],
    path: &MerklePath,
) -> Result<Option<Vec<u8>>, Groth16IBCError> {
    let key = path.trie_key()?;
    let proof = MembershipProof::decode(proof)?;

    Ok(ethereum_trie_db::trie_db::verify_proof(
        consensus_state.state_root,
        &key,
        &proof.proof,
    )?)
}
