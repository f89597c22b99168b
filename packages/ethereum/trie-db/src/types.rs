//! The Ethereum trie layout for `trie-db`: keccak-256 hashing and the RLP node codec.

use std::borrow::Borrow;

use alloy_primitives::{b256, B256};
use hash256_std_hasher::Hash256StdHasher;
use primitive_types::H256;
use rlp::{Rlp, RlpStream};
use sha3::{Digest, Keccak256};
use trie_db::{
    node::{NibbleSlicePlan, NodeHandlePlan, NodePlan, Value, ValuePlan},
    ChildReference, NodeCodec, TrieLayout,
};

use crate::TrieDBError;

/// Root hash of an empty trie, the keccak-256 of the RLP empty string.
pub const EMPTY_ROOT_HASH: B256 =
    b256!("56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421");

/// Nodes whose RLP encoding is shorter than this are embedded in their parent
/// instead of being referenced by hash.
pub const INLINE_NODE_LIMIT: usize = 32;

const EMPTY_NODE: [u8; 1] = [0x80];

/// Computes the keccak-256 hash of `data`.
#[must_use]
pub fn keccak_256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

/// Keccak-256 hasher for the node database.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct KeccakHasher;

impl hash_db::Hasher for KeccakHasher {
    type Out = H256;
    type StdHasher = Hash256StdHasher;
    const LENGTH: usize = 32;

    fn hash(x: &[u8]) -> Self::Out {
        H256(keccak_256(x))
    }
}

/// Ethereum's trie layout: extension nodes, values inlined in their leaves.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct EthLayout;

impl TrieLayout for EthLayout {
    const USE_EXTENSION: bool = true;
    const MAX_INLINE_VALUE: Option<u32> = None;

    type Hash = KeccakHasher;
    type Codec = RlpNodeCodec;
}

/// Decodes and encodes trie nodes in Ethereum's RLP format.
///
/// A node is a two item list (hex-prefix path and value or child) for leaves and
/// extensions, or a seventeen item list for branches. Every node must be a single
/// fully consumed RLP item.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RlpNodeCodec;

impl NodeCodec for RlpNodeCodec {
    type Error = TrieDBError;
    type HashOut = H256;

    fn hashed_null_node() -> H256 {
        H256(EMPTY_ROOT_HASH.0)
    }

    fn decode_plan(data: &[u8]) -> Result<NodePlan, Self::Error> {
        let rlp = Rlp::new(data);
        if rlp.payload_info()?.total() != data.len() {
            return Err(TrieDBError::InvalidNode(
                "trailing bytes after node".to_string(),
            ));
        }

        if rlp.is_data() {
            return if rlp.is_empty() {
                Ok(NodePlan::Empty)
            } else {
                Err(TrieDBError::InvalidNode("node is not a list".to_string()))
            };
        }

        match rlp.item_count()? {
            2 => decode_short_node(&rlp),
            17 => decode_branch(&rlp),
            n => Err(TrieDBError::InvalidNode(format!("list of {n} items"))),
        }
    }

    fn is_empty_node(data: &[u8]) -> bool {
        data == EMPTY_NODE
    }

    fn empty_node() -> &'static [u8] {
        &EMPTY_NODE
    }

    fn leaf_node(partial: impl Iterator<Item = u8>, number_nibble: usize, value: Value<'_>) -> Vec<u8> {
        let mut stream = RlpStream::new_list(2);
        stream.append(&encode_partial(partial, number_nibble, true));
        append_value(&mut stream, &value);
        stream.out().to_vec()
    }

    fn extension_node(
        partial: impl Iterator<Item = u8>,
        number_nibble: usize,
        child_ref: ChildReference<H256>,
    ) -> Vec<u8> {
        let mut stream = RlpStream::new_list(2);
        stream.append(&encode_partial(partial, number_nibble, false));
        append_child(&mut stream, &child_ref);
        stream.out().to_vec()
    }

    fn branch_node(
        children: impl Iterator<Item = impl Borrow<Option<ChildReference<H256>>>>,
        value: Option<Value<'_>>,
    ) -> Vec<u8> {
        let mut stream = RlpStream::new_list(17);
        for child in children {
            match child.borrow() {
                Some(child) => append_child(&mut stream, child),
                None => {
                    stream.append_empty_data();
                }
            }
        }
        match value {
            Some(value) => append_value(&mut stream, &value),
            None => {
                stream.append_empty_data();
            }
        }
        stream.out().to_vec()
    }

    fn branch_node_nibbled(
        _partial: impl Iterator<Item = u8>,
        _number_nibble: usize,
        _children: impl Iterator<Item = impl Borrow<Option<ChildReference<H256>>>>,
        _value: Option<Value<'_>>,
    ) -> Vec<u8> {
        unreachable!("the ethereum layout uses extension nodes")
    }
}

fn decode_short_node(rlp: &Rlp<'_>) -> Result<NodePlan, TrieDBError> {
    let (path, path_offset) = rlp.at_with_offset(0)?;
    let partial = decode_hex_prefix(path.data()?, path_offset + path.payload_info()?.header_len)?;

    let (item, item_offset) = rlp.at_with_offset(1)?;
    if partial.is_leaf {
        if !item.is_data() {
            return Err(TrieDBError::InvalidNode("leaf value is a list".to_string()));
        }
        let info = item.payload_info()?;
        let start = item_offset + info.header_len;
        return Ok(NodePlan::Leaf {
            partial: partial.plan,
            value: ValuePlan::Inline(start..start + info.value_len),
        });
    }

    let child = decode_child(&item, item_offset)?
        .ok_or_else(|| TrieDBError::InvalidNode("extension without child".to_string()))?;
    Ok(NodePlan::Extension {
        partial: partial.plan,
        child,
    })
}

fn decode_branch(rlp: &Rlp<'_>) -> Result<NodePlan, TrieDBError> {
    let mut children: [Option<NodeHandlePlan>; 16] = Default::default();
    for (index, slot) in children.iter_mut().enumerate() {
        let (child, offset) = rlp.at_with_offset(index)?;
        *slot = decode_child(&child, offset)?;
    }

    let (value, offset) = rlp.at_with_offset(16)?;
    if !value.is_data() {
        return Err(TrieDBError::InvalidNode("branch value is a list".to_string()));
    }
    let info = value.payload_info()?;
    let start = offset + info.header_len;

    Ok(NodePlan::Branch {
        value: (info.value_len > 0).then(|| ValuePlan::Inline(start..start + info.value_len)),
        children,
    })
}

/// A child is an embedded node, the empty string, or a 32 byte hash.
fn decode_child(child: &Rlp<'_>, offset: usize) -> Result<Option<NodeHandlePlan>, TrieDBError> {
    if child.is_list() {
        let len = child.as_raw().len();
        if len >= INLINE_NODE_LIMIT {
            return Err(TrieDBError::InvalidNode(format!(
                "embedded node of {len} bytes"
            )));
        }
        return Ok(Some(NodeHandlePlan::Inline(offset..offset + len)));
    }

    let info = child.payload_info()?;
    let start = offset + info.header_len;
    match info.value_len {
        0 => Ok(None),
        32 => Ok(Some(NodeHandlePlan::Hash(start..start + 32))),
        len => Err(TrieDBError::InvalidNode(format!(
            "child reference of {len} bytes"
        ))),
    }
}

struct Partial {
    is_leaf: bool,
    plan: NibbleSlicePlan,
}

/// Decodes the hex-prefix `path` that starts at byte `start` of the node.
fn decode_hex_prefix(path: &[u8], start: usize) -> Result<Partial, TrieDBError> {
    let invalid = || TrieDBError::InvalidHexPrefix {
        path: path.to_vec(),
    };

    let first = *path.first().ok_or_else(invalid)?;
    let is_leaf = match first >> 4 {
        0 | 1 => false,
        2 | 3 => true,
        _ => return Err(invalid()),
    };

    let plan = if first & 0x10 == 0 {
        // even paths pad the flag byte with a zero nibble
        if first & 0x0f != 0 {
            return Err(invalid());
        }
        NibbleSlicePlan::new(start + 1..start + path.len(), 0)
    } else {
        NibbleSlicePlan::new(start..start + path.len(), 1)
    };

    Ok(Partial { is_leaf, plan })
}

fn encode_partial(mut partial: impl Iterator<Item = u8>, number_nibble: usize, is_leaf: bool) -> Vec<u8> {
    let flag = if is_leaf { 0x20 } else { 0x00 };
    let mut encoded = Vec::with_capacity(number_nibble / 2 + 1);
    if number_nibble % 2 == 1 {
        encoded.push(flag | 0x10 | (partial.next().unwrap_or_default() & 0x0f));
    } else {
        encoded.push(flag);
    }
    encoded.extend(partial);
    encoded
}

fn append_child(stream: &mut RlpStream, child: &ChildReference<H256>) {
    match child {
        ChildReference::Hash(hash) => {
            stream.append(&hash.as_bytes().to_vec());
        }
        ChildReference::Inline(data, len) => {
            stream.append_raw(&data.as_bytes()[..*len], 1);
        }
    }
}

fn append_value(stream: &mut RlpStream, value: &Value<'_>) {
    match value {
        Value::Inline(bytes) | Value::Node(bytes) => {
            stream.append(&bytes.to_vec());
        }
    }
}
