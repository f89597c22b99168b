//! This module defines [`Groth16IBCError`].

use alloy_primitives::hex;
use ethereum_trie_db::TrieDBError;

use crate::height::Height;

/// The error type for the Groth16 light client.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum Groth16IBCError {
    /// The client message is not a recognised variant or cannot be decoded
    #[error("invalid client message: {0}")]
    InvalidMessage(String),

    /// The header fails its structural checks
    #[error("invalid header: new height {new_height} must be greater than trusted height {trusted_height}")]
    InvalidHeader {
        /// The height the header proves from
        trusted_height: u64,
        /// The height the header claims to establish
        new_height: u64,
    },

    /// The header timestamp does not increase with height against a stored consensus state
    #[error(
        "non-monotonic timestamp: header at height {height} has timestamp {timestamp}, \
         consensus state at height {stored_height} has timestamp {stored_timestamp}"
    )]
    NonMonotonicTimestamp {
        /// The height the header claims to establish
        height: Height,
        /// The timestamp of the header
        timestamp: u64,
        /// The height of the stored consensus state
        stored_height: Height,
        /// The timestamp of the stored consensus state
        stored_timestamp: u64,
    },

    /// The client state has not been initialized
    #[error("client state not found")]
    MissingClientState,

    /// The store already holds a client state
    #[error("client state already initialized")]
    ClientAlreadyInitialized,

    /// No consensus state is stored at the referenced height
    #[error("consensus state not found at height {0}")]
    MissingConsensusState(Height),

    /// No processed time or height is stored for the referenced height
    #[error("processed metadata not found at height {0}")]
    MissingProcessedMetadata(Height),

    /// A verifying key, proof or stored record failed to encode or decode
    #[error("codec error: {0}")]
    Codec(String),

    /// The Groth16 verifier rejected the state transition proof
    #[error("state transition proof rejected")]
    ProofRejected,

    /// The public inputs do not match what the verifying key expects
    #[error("invalid public witness: verifying key expects {expected} public inputs, found {found}")]
    InvalidWitness {
        /// Number of public inputs declared by the verifying key
        expected: usize,
        /// Number of public inputs assembled from the header
        found: usize,
    },

    /// The Merkle-Patricia trie proof is malformed or does not reach the root
    #[error("mpt proof verification failed: {0}")]
    MptProof(#[from] TrieDBError),

    /// The membership proof bytes could not be decoded
    #[error("failed to decode membership proof: {0}")]
    MembershipProofDecode(String),

    /// The merkle path cannot be turned into a trie key
    #[error("invalid merkle path: {0}")]
    InvalidPath(String),

    /// The proven value differs from the expected one
    #[error(
        "value mismatch, expected: {expected}, actual: {actual}",
        expected = hex::encode(expected),
        actual = hex::encode(actual)
    )]
    ValueMismatch {
        /// The value the caller expects
        expected: Vec<u8>,
        /// The value found in the trie
        actual: Vec<u8>,
    },

    /// The proof shows that the expected value is absent
    #[error("value missing: {v}", v = hex::encode(value))]
    ValueMissing {
        /// The value the caller expects
        value: Vec<u8>,
    },

    /// A non-membership proof found a value
    #[error("value unexpectedly present: {v}", v = hex::encode(value))]
    UnexpectedPresence {
        /// The value found in the trie
        value: Vec<u8>,
    },

    /// The packet delay period has not yet passed for the consensus state
    #[error(
        "delay period not passed: current time {current_time} and height {current_height}, \
         earliest time {earliest_time} and height {earliest_height}"
    )]
    DelayPeriodNotPassed {
        /// Current host time in nanoseconds
        current_time: u64,
        /// Current host height
        current_height: u64,
        /// Earliest host time at which the proof is accepted
        earliest_time: u64,
        /// Earliest host height at which the proof is accepted
        earliest_height: u64,
    },

    /// The operation is not supported by this client
    #[error("{0} is not supported")]
    Unsupported(&'static str),
}
