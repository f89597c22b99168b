//! Verification of Merkle-Patricia trie proofs against a trusted root.

use std::collections::BTreeSet;

use alloy_primitives::B256;
use hash_db::HashDB;
use memory_db::{HashKey, MemoryDB};
use primitive_types::H256;
use trie_db::{RecordedForKey, Trie, TrieAccess, TrieDBBuilder, TrieError, TrieRecorder};

use crate::{
    error::TrieDBError,
    types::{keccak_256, EthLayout, KeccakHasher, EMPTY_ROOT_HASH, INLINE_NODE_LIMIT},
};

/// Verifies that `expected_value` is stored under `keccak256(key)` in the trie with root `root`.
///
/// * `root`: The trusted storage root.
/// * `key`: The unhashed storage key.
/// * `expected_value`: The RLP-encoded value expected in the leaf.
/// * `proof`: The RLP-encoded trie nodes.
///
/// NOTE: You must not trust the `root` unless you've verified it.
/// # Errors
/// Returns an error if the proof is invalid, or the value is missing or different.
pub fn verify_storage_inclusion_proof(
    root: B256,
    key: impl AsRef<[u8]>,
    expected_value: &[u8],
    proof: impl IntoIterator<Item = impl AsRef<[u8]>>,
) -> Result<(), TrieDBError> {
    match verify_proof(root, &keccak_256(key.as_ref()), proof)? {
        Some(value) if value == expected_value => Ok(()),
        Some(value) => Err(TrieDBError::ValueMismatch {
            expected: expected_value.to_vec(),
            actual: value,
        }),
        None => Err(TrieDBError::ValueMissing {
            value: expected_value.to_vec(),
        }),
    }
}

/// Verifies that nothing is stored under `keccak256(key)` in the trie with root `root`.
///
/// NOTE: You must not trust the `root` unless you've verified it.
/// # Errors
/// Returns an error if the proof is invalid or a value is present.
pub fn verify_storage_exclusion_proof(
    root: B256,
    key: impl AsRef<[u8]>,
    proof: impl IntoIterator<Item = impl AsRef<[u8]>>,
) -> Result<(), TrieDBError> {
    match verify_proof(root, &keccak_256(key.as_ref()), proof)? {
        Some(value) => Err(TrieDBError::ValueShouldBeMissing { value }),
        None => Ok(()),
    }
}

/// Walks the trie with root `root` along `key` using only the nodes in `proof`.
///
/// The key is used as the trie path as given. Returns `Some(value)` if the key is
/// present and `None` if the proof shows that it is absent.
/// # Errors
/// Returns an error if a node is missing or malformed, or if a node in the proof
/// is not reached while walking along `key`.
pub fn verify_proof(
    root: B256,
    key: &[u8],
    proof: impl IntoIterator<Item = impl AsRef<[u8]>>,
) -> Result<Option<Vec<u8>>, TrieDBError> {
    let proof: Vec<_> = proof.into_iter().collect();

    if root == EMPTY_ROOT_HASH {
        return match proof.first() {
            Some(node) => Err(TrieDBError::UnusedProofNode {
                hash: keccak_256(node.as_ref()).to_vec(),
            }),
            None => Ok(None),
        };
    }

    let mut db = MemoryDB::<KeccakHasher, HashKey<_>, Vec<u8>>::default();
    for node in &proof {
        db.insert(hash_db::EMPTY_PREFIX, node.as_ref());
    }

    let root = H256(root.0);
    let mut visited = VisitedNodes::default();
    let value = TrieDBBuilder::<EthLayout>::new(&db, &root)
        .with_recorder(&mut visited)
        .build()
        .get(key)
        .map_err(|e| trie_error(*e))?;

    if let Some(unused) = proof
        .iter()
        .map(AsRef::as_ref)
        .find(|node| !visited.contains(node))
    {
        return Err(TrieDBError::UnusedProofNode {
            hash: keccak_256(unused).to_vec(),
        });
    }

    Ok(value)
}

fn trie_error(err: TrieError<H256, TrieDBError>) -> TrieDBError {
    match err {
        TrieError::InvalidStateRoot(hash) | TrieError::IncompleteDatabase(hash) => {
            TrieDBError::MissingNode {
                hash: hash.as_bytes().to_vec(),
            }
        }
        TrieError::DecoderError(_, err) => err,
        err => TrieDBError::InvalidNode(err.to_string()),
    }
}

/// Records the nodes read from the database during a lookup.
#[derive(Default)]
struct VisitedNodes {
    hashes: BTreeSet<H256>,
    encoded: Vec<Vec<u8>>,
}

impl VisitedNodes {
    /// Whether `node` was read, or is a short node embedded in one that was.
    fn contains(&self, node: &[u8]) -> bool {
        if self.hashes.contains(&H256(keccak_256(node))) {
            return true;
        }

        !node.is_empty()
            && node.len() < INLINE_NODE_LIMIT
            && self
                .encoded
                .iter()
                .any(|parent| parent.windows(node.len()).any(|w| w == node))
    }
}

impl TrieRecorder<H256> for VisitedNodes {
    fn record(&mut self, access: TrieAccess<'_, H256>) {
        if let TrieAccess::EncodedNode { hash, encoded_node } = access {
            self.hashes.insert(hash);
            self.encoded.push(encoded_node.into_owned());
        }
    }

    fn trie_nodes_recorded_for_key(&self, _key: &[u8]) -> RecordedForKey {
        RecordedForKey::None
    }
}
