//! The key-value store the host provides to the client.
//!
//! The key helpers default to the layout `ibc-go` uses for light client stores.
//! Hosts with a different layout override them.

use crate::height::Height;

/// The store key used by `ibc-go` to store the client state
pub const HOST_CLIENT_STATE_KEY: &str = "clientState";
/// The store key used by `ibc-go` to store the consensus states
pub const HOST_CONSENSUS_STATES_KEY: &str = "consensusStates";
/// The suffix of the processed time key of a consensus state
pub const PROCESSED_TIME_KEY: &str = "processedTime";
/// The suffix of the processed height key of a consensus state
pub const PROCESSED_HEIGHT_KEY: &str = "processedHeight";
/// The store key used by `ibc-go` to store sorted keys of consensus states
pub const HOST_ITERATE_CONSENSUS_STATES_KEY: &str = "iterateConsensusStates";

/// Read access to the client's store.
pub trait ReadStore {
    /// Returns the value stored under `key`.
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;

    /// Returns the value under the smallest key in `start..end`.
    fn first_in(&self, start: &[u8], end: &[u8]) -> Option<Vec<u8>>;

    /// Returns the value under the greatest key in `start..end`.
    fn last_in(&self, start: &[u8], end: &[u8]) -> Option<Vec<u8>>;

    /// The key of the client state.
    fn client_state_key(&self) -> Vec<u8> {
        HOST_CLIENT_STATE_KEY.as_bytes().to_vec()
    }

    /// The key of the consensus state at `height`.
    fn consensus_state_key(&self, height: Height) -> Vec<u8> {
        format!("{HOST_CONSENSUS_STATES_KEY}/{height}").into_bytes()
    }

    /// The key of the processed time of the consensus state at `height`.
    fn processed_time_key(&self, height: Height) -> Vec<u8> {
        format!("{HOST_CONSENSUS_STATES_KEY}/{height}/{PROCESSED_TIME_KEY}").into_bytes()
    }

    /// The key of the processed height of the consensus state at `height`.
    fn processed_height_key(&self, height: Height) -> Vec<u8> {
        format!("{HOST_CONSENSUS_STATES_KEY}/{height}/{PROCESSED_HEIGHT_KEY}").into_bytes()
    }

    /// The key of the height index entry of the consensus state at `height`.
    /// Keys sort in height order.
    fn iteration_key(&self, height: Height) -> Vec<u8> {
        let mut key = format!("{HOST_ITERATE_CONSENSUS_STATES_KEY}/").into_bytes();
        key.extend_from_slice(&height.to_be_bytes());
        key
    }
}

/// Write access to the client's store.
pub trait ClientStore: ReadStore {
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &[u8], value: &[u8]);
}

macro_rules! forward_read_store {
    ($ty:ty) => {
        impl<T: ReadStore + ?Sized> ReadStore for $ty {
            fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
                (**self).get(key)
            }

            fn first_in(&self, start: &[u8], end: &[u8]) -> Option<Vec<u8>> {
                (**self).first_in(start, end)
            }

            fn last_in(&self, start: &[u8], end: &[u8]) -> Option<Vec<u8>> {
                (**self).last_in(start, end)
            }

            fn client_state_key(&self) -> Vec<u8> {
                (**self).client_state_key()
            }

            fn consensus_state_key(&self, height: Height) -> Vec<u8> {
                (**self).consensus_state_key(height)
            }

            fn processed_time_key(&self, height: Height) -> Vec<u8> {
                (**self).processed_time_key(height)
            }

            fn processed_height_key(&self, height: Height) -> Vec<u8> {
                (**self).processed_height_key(height)
            }

            fn iteration_key(&self, height: Height) -> Vec<u8> {
                (**self).iteration_key(height)
            }
        }
    };
}

forward_read_store!(&T);
forward_read_store!(&mut T);

impl<T: ClientStore + ?Sized> ClientStore for &mut T {
    fn set(&mut self, key: &[u8], value: &[u8]) {
        (**self).set(key, value);
    }
}
