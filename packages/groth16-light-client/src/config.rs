//! Runtime configuration of the light client.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Behaviour toggles chosen by the host when it constructs the client.
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct ClientConfig {
    /// Accept an all-zero state transition proof without verifying it.
    /// Only meant for development networks.
    #[serde(default)]
    pub allow_mock_proofs: bool,
}

impl ClientConfig {
    /// A configuration that accepts mock proofs.
    #[must_use]
    pub const fn with_mock_proofs() -> Self {
        Self {
            allow_mock_proofs: true,
        }
    }
}
