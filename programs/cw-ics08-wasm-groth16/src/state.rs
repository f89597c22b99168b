//! State management for the Groth16 light client
//!
//! The light client reads and writes through [`WasmStore`] and [`WasmStoreMut`], and
//! encodes its records with [`WasmCodec`] into the layout `ibc-go` expects from an
//! `08-wasm` client.

use cosmwasm_std::{Env, Order, Storage};
use groth16_light_client::{
    client::LightClient,
    client_state::ClientState,
    codec::RecordCodec,
    config::ClientConfig,
    consensus_state::ConsensusState,
    error::Groth16IBCError,
    header::{ClientMessage, Header},
    height::Height,
    host::HostInfo,
    store::{ClientStore, ReadStore, HOST_CLIENT_STATE_KEY},
};
use ibc_proto::{
    google::protobuf::Any,
    ibc::{
        core::client::v1::Height as IbcProtoHeight,
        lightclients::wasm::v1::{
            ClientState as WasmClientState, ConsensusState as WasmConsensusState,
        },
    },
};
use prost::Message;

/// A light client reading from the contract storage
pub type ReadOnlyClient<'a> = LightClient<'a, WasmStore<'a>, WasmCodec>;
/// A light client writing to the contract storage
pub type MutableClient<'a> = LightClient<'a, WasmStoreMut<'a>, WasmCodec>;

/// Read access to the contract storage
pub struct WasmStore<'a>(pub &'a dyn Storage);

/// Write access to the contract storage
pub struct WasmStoreMut<'a>(pub &'a mut dyn Storage);

impl ReadStore for WasmStore<'_> {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.0.get(key)
    }

    fn first_in(&self, start: &[u8], end: &[u8]) -> Option<Vec<u8>> {
        first_value(self.0, start, end, Order::Ascending)
    }

    fn last_in(&self, start: &[u8], end: &[u8]) -> Option<Vec<u8>> {
        first_value(self.0, start, end, Order::Descending)
    }
}

impl ReadStore for WasmStoreMut<'_> {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.0.get(key)
    }

    fn first_in(&self, start: &[u8], end: &[u8]) -> Option<Vec<u8>> {
        first_value(&*self.0, start, end, Order::Ascending)
    }

    fn last_in(&self, start: &[u8], end: &[u8]) -> Option<Vec<u8>> {
        first_value(&*self.0, start, end, Order::Descending)
    }
}

fn first_value(storage: &dyn Storage, start: &[u8], end: &[u8], order: Order) -> Option<Vec<u8>> {
    if start >= end {
        return None;
    }
    storage
        .range(Some(start), Some(end), order)
        .next()
        .map(|(_, value)| value)
}

impl ClientStore for WasmStoreMut<'_> {
    fn set(&mut self, key: &[u8], value: &[u8]) {
        self.0.set(key, value);
    }
}

/// Wraps the JSON encoded records in the `08-wasm` protobuf messages
#[derive(Debug, Clone, Default)]
pub struct WasmCodec {
    /// The checksum of the contract code, part of every encoded client state
    pub checksum: Vec<u8>,
}

impl WasmCodec {
    /// Creates a codec for the code with `checksum`.
    #[must_use]
    pub const fn new(checksum: Vec<u8>) -> Self {
        Self { checksum }
    }

    /// Creates a codec that keeps the checksum of the stored client state, or an
    /// empty one if the client is not initialized.
    /// # Errors
    /// Returns an error if the stored client state cannot be decoded.
    pub fn from_storage(storage: &dyn Storage) -> Result<Self, Groth16IBCError> {
        let checksum = WasmStore(storage)
            .get(HOST_CLIENT_STATE_KEY.as_bytes())
            .map(|bz| decode_wasm_client_state(&bz))
            .transpose()?
            .map(|wasm_client_state| wasm_client_state.checksum)
            .unwrap_or_default();

        Ok(Self::new(checksum))
    }
}

impl RecordCodec for WasmCodec {
    fn encode_client_state(&self, client_state: &ClientState) -> Result<Vec<u8>, Groth16IBCError> {
        let wasm_client_state = WasmClientState {
            checksum: self.checksum.clone(),
            data: serde_json::to_vec(client_state).map_err(codec_error)?,
            latest_height: Some(IbcProtoHeight {
                revision_number: 0,
                revision_height: client_state.latest_height,
            }),
        };
        let any = Any::from_msg(&wasm_client_state).map_err(codec_error)?;
        Ok(any.encode_to_vec())
    }

    fn decode_client_state(&self, bz: &[u8]) -> Result<ClientState, Groth16IBCError> {
        let wasm_client_state = decode_wasm_client_state(bz)?;
        serde_json::from_slice(&wasm_client_state.data).map_err(codec_error)
    }

    fn encode_consensus_state(
        &self,
        consensus_state: &ConsensusState,
    ) -> Result<Vec<u8>, Groth16IBCError> {
        let wasm_consensus_state = WasmConsensusState {
            data: serde_json::to_vec(consensus_state).map_err(codec_error)?,
        };
        let any = Any::from_msg(&wasm_consensus_state).map_err(codec_error)?;
        Ok(any.encode_to_vec())
    }

    fn decode_consensus_state(&self, bz: &[u8]) -> Result<ConsensusState, Groth16IBCError> {
        let any = Any::decode(bz).map_err(codec_error)?;
        let wasm_consensus_state =
            WasmConsensusState::decode(any.value.as_slice()).map_err(codec_error)?;
        serde_json::from_slice(&wasm_consensus_state.data).map_err(codec_error)
    }

    fn decode_client_message(&self, bz: &[u8]) -> Result<ClientMessage, Groth16IBCError> {
        serde_json::from_slice::<Header>(bz)
            .map(ClientMessage::Header)
            .map_err(|e| Groth16IBCError::InvalidMessage(e.to_string()))
    }
}

fn decode_wasm_client_state(bz: &[u8]) -> Result<WasmClientState, Groth16IBCError> {
    let any = Any::decode(bz).map_err(codec_error)?;
    WasmClientState::decode(any.value.as_slice()).map_err(codec_error)
}

#[allow(clippy::needless_pass_by_value)]
fn codec_error(e: impl ToString) -> Groth16IBCError {
    Groth16IBCError::Codec(e.to_string())
}

/// The light client configuration of this build
#[must_use]
pub const fn client_config() -> ClientConfig {
    ClientConfig {
        allow_mock_proofs: cfg!(feature = "mock-proofs"),
    }
}

/// The host block the contract is called in
#[must_use]
pub fn host_info(env: &Env) -> HostInfo {
    HostInfo {
        time: env.block.time.nanos(),
        height: Height::new(env.block.height),
    }
}

/// A light client reading from `storage`
#[must_use]
pub fn read_only_client<'a>(storage: &'a dyn Storage, env: &'a Env) -> ReadOnlyClient<'a> {
    LightClient::new(
        env.contract.address.as_str(),
        WasmStore(storage),
        WasmCodec::default(),
        client_config(),
    )
}

/// A light client writing to `storage`, encoding client states with the stored checksum
/// # Errors
/// Returns an error if the stored client state cannot be decoded.
pub fn mutable_client<'a>(
    storage: &'a mut dyn Storage,
    env: &'a Env,
) -> Result<MutableClient<'a>, Groth16IBCError> {
    let codec = WasmCodec::from_storage(storage)?;
    Ok(LightClient::new(
        env.contract.address.as_str(),
        WasmStoreMut(storage),
        codec,
        client_config(),
    ))
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::{testing::MockStorage, Storage};
    use groth16_light_client::{
        codec::RecordCodec, error::Groth16IBCError, header::ClientMessage, test_utils::fixtures,
    };

    use super::{WasmCodec, WasmStore};

    #[test]
    fn test_client_state_keeps_checksum() {
        let codec = WasmCodec::new(b"checksum".to_vec());
        let client_state = fixtures::client_state(42, vec![1, 2, 3]);

        let bz = codec.encode_client_state(&client_state).unwrap();
        assert_eq!(client_state, codec.decode_client_state(&bz).unwrap());

        let mut storage = MockStorage::new();
        storage.set(b"clientState", &bz);
        let stored = WasmCodec::from_storage(&storage).unwrap();
        assert_eq!(b"checksum".to_vec(), stored.checksum);
    }

    #[test]
    fn test_uninitialized_storage_has_empty_checksum() {
        let storage = MockStorage::new();
        assert!(WasmCodec::from_storage(&storage).unwrap().checksum.is_empty());
        assert!(groth16_light_client::store::ReadStore::get(
            &WasmStore(&storage),
            b"clientState"
        )
        .is_none());
    }

    #[test]
    fn test_range_lookups() {
        use groth16_light_client::store::ReadStore;

        let mut storage = MockStorage::new();
        storage.set(b"iterateConsensusStates/a", b"1");
        storage.set(b"iterateConsensusStates/b", b"2");
        storage.set(b"iterateConsensusStates/c", b"3");
        let store = WasmStore(&storage);

        let start = b"iterateConsensusStates/a".as_slice();
        let end = b"iterateConsensusStates/c".as_slice();
        assert_eq!(store.first_in(start, end), Some(b"1".to_vec()));
        assert_eq!(store.last_in(start, end), Some(b"2".to_vec()));
        assert_eq!(store.last_in(end, start), None);
        assert_eq!(store.first_in(b"iterateConsensusStates/d", b"z"), None);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let codec = WasmCodec::default();
        assert!(matches!(
            codec.decode_consensus_state(b"garbage"),
            Err(Groth16IBCError::Codec(_))
        ));
        assert!(matches!(
            codec.decode_client_message(b"garbage"),
            Err(Groth16IBCError::InvalidMessage(_))
        ));
    }

    #[test]
    fn test_decode_client_message() {
        let header = fixtures::header(100, 101, vec![7; 128]);
        let bz = serde_json::to_vec(&header).unwrap();

        let ClientMessage::Header(decoded) = WasmCodec::default().decode_client_message(&bz).unwrap();
        assert_eq!(header, decoded);
    }
}
