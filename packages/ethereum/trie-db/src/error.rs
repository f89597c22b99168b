//! This module defines [`TrieDBError`].

/// Error types for trie database operations
#[derive(Debug, PartialEq, Eq, thiserror::Error, Clone)]
#[allow(clippy::module_name_repetitions)]
pub enum TrieDBError {
    /// A node referenced during the walk was not part of the proof
    #[error("trie node {hash} is missing from the proof", hash = hex::encode(hash))]
    MissingNode {
        /// The hash (or inline encoding) of the missing node
        hash: Vec<u8>,
    },

    /// RLP decoding failed
    #[error("rlp decoding failed: {0:?}")]
    RlpDecode(#[from] rlp::DecoderError),

    /// A node decoded to something other than a branch, extension or leaf
    #[error("invalid trie node: {0}")]
    InvalidNode(String),

    /// The hex-prefix encoded path of a leaf or extension is malformed
    #[error("invalid hex-prefix path: {path}", path = hex::encode(path))]
    InvalidHexPrefix {
        /// The encoded path
        path: Vec<u8>,
    },

    /// A proof node was never reached while walking from the root
    #[error("proof node {hash} is not reachable from the root", hash = hex::encode(hash))]
    UnusedProofNode {
        /// The database key of the unused node
        hash: Vec<u8>,
    },

    /// Value mismatch in proof verification
    #[error(
        "proof is invalid due to value mismatch, expected: {expected}, actual: {actual}",
        expected = hex::encode(expected),
        actual = hex::encode(actual)
    )]
    ValueMismatch {
        /// The expected value
        expected: Vec<u8>,
        /// The actual value found
        actual: Vec<u8>,
    },

    /// Expected value is missing from the trie
    #[error("proof is invalid due to missing value: {v}", v = hex::encode(value))]
    ValueMissing {
        /// The value that was expected to be present
        value: Vec<u8>,
    },

    /// Value should not exist in the trie but was found
    #[error("proof is invalid due to unexpected value: {v}", v = hex::encode(value))]
    ValueShouldBeMissing {
        /// The value that should not have been present
        value: Vec<u8>,
    },
}
