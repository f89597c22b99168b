//! Information the host passes along with a call.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{error::Groth16IBCError, height::Height};

/// The host chain's current block
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct HostInfo {
    /// Block time in unix nanoseconds
    pub time: u64,
    /// Block height
    pub height: Height,
}

/// The packet delay a proof has to respect, zero means no delay
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct DelayPeriod {
    /// Delay in nanoseconds
    pub time: u64,
    /// Delay in host blocks
    pub blocks: u64,
}

impl DelayPeriod {
    /// Whether no delay is required.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.time == 0 && self.blocks == 0
    }
}

/// The host time and height at which a consensus state was accepted
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct ProcessedMetadata {
    /// Host time in unix nanoseconds
    pub time: u64,
    /// Host height
    pub height: Height,
}

impl ProcessedMetadata {
    /// Checks that `host` is at least `delay` past this metadata.
    /// # Errors
    /// Returns an error if either the time or the block delay has not passed.
    pub const fn verify_delay_passed(
        &self,
        host: &HostInfo,
        delay: &DelayPeriod,
    ) -> Result<(), Groth16IBCError> {
        let earliest_time = self.time.saturating_add(delay.time);
        let earliest_height = self.height.revision_height.saturating_add(delay.blocks);
        if host.time < earliest_time || host.height.revision_height < earliest_height {
            return Err(Groth16IBCError::DelayPeriodNotPassed {
                current_time: host.time,
                current_height: host.height.revision_height,
                earliest_time,
                earliest_height,
            });
        }
        Ok(())
    }

    /// The processed time as stored by the host, 8 bytes big-endian.
    #[must_use]
    pub fn encode_time(&self) -> Vec<u8> {
        self.time.to_be_bytes().to_vec()
    }

    /// The processed height as stored by the host, revision and height as 8 bytes big-endian each.
    #[must_use]
    pub fn encode_height(&self) -> Vec<u8> {
        let mut bz = Vec::with_capacity(16);
        bz.extend_from_slice(&self.height.revision_number.to_be_bytes());
        bz.extend_from_slice(&self.height.revision_height.to_be_bytes());
        bz
    }

    /// Decodes the metadata from the stored time and height.
    /// # Errors
    /// Returns an error if either value has the wrong length.
    pub fn decode(time: &[u8], height: &[u8]) -> Result<Self, Groth16IBCError> {
        let time = <[u8; 8]>::try_from(time)
            .map_err(|_| Groth16IBCError::Codec("invalid processed time".to_string()))?;
        let height = <[u8; 16]>::try_from(height)
            .map_err(|_| Groth16IBCError::Codec("invalid processed height".to_string()))?;
        let mut revision_number = [0; 8];
        let mut revision_height = [0; 8];
        revision_number.copy_from_slice(&height[..8]);
        revision_height.copy_from_slice(&height[8..]);

        Ok(Self {
            time: u64::from_be_bytes(time),
            height: Height {
                revision_number: u64::from_be_bytes(revision_number),
                revision_height: u64::from_be_bytes(revision_height),
            },
        })
    }
}

impl From<&HostInfo> for ProcessedMetadata {
    fn from(host: &HostInfo) -> Self {
        Self {
            time: host.time,
            height: host.height,
        }
    }
}
