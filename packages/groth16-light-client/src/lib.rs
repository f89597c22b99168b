#![doc = include_str!("../README.md")]
#![deny(
    clippy::nursery,
    clippy::pedantic,
    warnings,
    missing_docs,
    unused_crate_dependencies
)]

pub mod client;
pub mod client_state;
pub mod codec;
pub mod config;
pub mod consensus_state;
pub mod error;
pub mod header;
pub mod height;
pub mod host;
pub mod membership;
pub mod status;
pub mod store;
pub mod update;
pub mod verifier_key;
pub mod verify;
pub mod witness;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
