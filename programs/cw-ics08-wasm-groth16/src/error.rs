//! Defines the [`ContractError`] type.

use cosmwasm_std::StdError;
use groth16_light_client::error::Groth16IBCError;
use thiserror::Error;

/// Error types that can be returned by contract operations
#[derive(Error, Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum ContractError {
    /// Standard `CosmWasm` error
    #[error("{0}")]
    Std(#[from] StdError),

    /// Deserializing client state failed
    #[error("deserializing client state failed: {0}")]
    DeserializeClientStateFailed(#[source] serde_json::Error),

    /// Deserializing consensus state failed
    #[error("deserializing consensus state failed: {0}")]
    DeserializeConsensusStateFailed(#[source] serde_json::Error),

    /// Reading the stored client failed
    #[error("reading client failed: {0}")]
    ReadClientFailed(#[source] Groth16IBCError),

    /// Initializing the client failed
    #[error("initializing client failed: {0}")]
    InitializeFailed(#[source] Groth16IBCError),

    /// Verify client message failed
    #[error("verify client message failed: {0}")]
    VerifyClientMessageFailed(#[source] Groth16IBCError),

    /// Update client state failed
    #[error("update client state failed: {0}")]
    UpdateStateFailed(#[source] Groth16IBCError),

    /// Verify membership failed
    #[error("verify membership failed: {0}")]
    VerifyMembershipFailed(#[source] Groth16IBCError),

    /// Verify non-membership failed
    #[error("verify non-membership failed: {0}")]
    VerifyNonMembershipFailed(#[source] Groth16IBCError),

    /// The operation is not supported by the light client
    #[error("{0}")]
    Unsupported(#[source] Groth16IBCError),
}
