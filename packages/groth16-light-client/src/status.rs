//! This module defines [`Status`].

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The client status types
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Eq, Clone, Copy, Debug)]
pub enum Status {
    /// The client is frozen
    Frozen,
    /// The client is expired
    Expired,
    /// The client is active
    Active,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frozen => write!(f, "Frozen"),
            Self::Expired => write!(f, "Expired"),
            Self::Active => write!(f, "Active"),
        }
    }
}
