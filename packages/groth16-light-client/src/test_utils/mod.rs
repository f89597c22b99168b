//! Test utilities for the Groth16 light client

pub mod fixtures;
pub mod prover;
pub mod store;
