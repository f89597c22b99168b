//! Encoding of the records the client keeps in the host store.

use crate::{
    client_state::ClientState, consensus_state::ConsensusState, error::Groth16IBCError,
    header::ClientMessage,
};

/// Encodes and decodes the client's records. The client never assumes a concrete
/// wire format, hosts pick the codec that matches their store.
pub trait RecordCodec {
    /// Encodes a client state.
    /// # Errors
    /// Returns a [`Groth16IBCError::Codec`] error if encoding fails.
    fn encode_client_state(&self, client_state: &ClientState) -> Result<Vec<u8>, Groth16IBCError>;

    /// Decodes a client state.
    /// # Errors
    /// Returns a [`Groth16IBCError::Codec`] error if decoding fails.
    fn decode_client_state(&self, bz: &[u8]) -> Result<ClientState, Groth16IBCError>;

    /// Encodes a consensus state.
    /// # Errors
    /// Returns a [`Groth16IBCError::Codec`] error if encoding fails.
    fn encode_consensus_state(
        &self,
        consensus_state: &ConsensusState,
    ) -> Result<Vec<u8>, Groth16IBCError>;

    /// Decodes a consensus state.
    /// # Errors
    /// Returns a [`Groth16IBCError::Codec`] error if decoding fails.
    fn decode_consensus_state(&self, bz: &[u8]) -> Result<ConsensusState, Groth16IBCError>;

    /// Decodes a client message.
    /// # Errors
    /// Returns a [`Groth16IBCError::InvalidMessage`] error if the bytes are not a known message.
    fn decode_client_message(&self, bz: &[u8]) -> Result<ClientMessage, Groth16IBCError>;
}

impl<T: RecordCodec + ?Sized> RecordCodec for &T {
    fn encode_client_state(&self, client_state: &ClientState) -> Result<Vec<u8>, Groth16IBCError> {
        (**self).encode_client_state(client_state)
    }

    fn decode_client_state(&self, bz: &[u8]) -> Result<ClientState, Groth16IBCError> {
        (**self).decode_client_state(bz)
    }

    fn encode_consensus_state(
        &self,
        consensus_state: &ConsensusState,
    ) -> Result<Vec<u8>, Groth16IBCError> {
        (**self).encode_consensus_state(consensus_state)
    }

    fn decode_consensus_state(&self, bz: &[u8]) -> Result<ConsensusState, Groth16IBCError> {
        (**self).decode_consensus_state(bz)
    }

    fn decode_client_message(&self, bz: &[u8]) -> Result<ClientMessage, Groth16IBCError> {
        (**self).decode_client_message(bz)
    }
}

/// Stores records as plain JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl RecordCodec for JsonCodec {
    fn encode_client_state(&self, client_state: &ClientState) -> Result<Vec<u8>, Groth16IBCError> {
        serde_json::to_vec(client_state).map_err(|e| Groth16IBCError::Codec(e.to_string()))
    }

    fn decode_client_state(&self, bz: &[u8]) -> Result<ClientState, Groth16IBCError> {
        serde_json::from_slice(bz).map_err(|e| Groth16IBCError::Codec(e.to_string()))
    }

    fn encode_consensus_state(
        &self,
        consensus_state: &ConsensusState,
    ) -> Result<Vec<u8>, Groth16IBCError> {
        serde_json::to_vec(consensus_state).map_err(|e| Groth16IBCError::Codec(e.to_string()))
    }

    fn decode_consensus_state(&self, bz: &[u8]) -> Result<ConsensusState, Groth16IBCError> {
        serde_json::from_slice(bz).map_err(|e| Groth16IBCError::Codec(e.to_string()))
    }

    fn decode_client_message(&self, bz: &[u8]) -> Result<ClientMessage, Groth16IBCError> {
        serde_json::from_slice(bz).map_err(|e| Groth16IBCError::InvalidMessage(e.to_string()))
    }
}
