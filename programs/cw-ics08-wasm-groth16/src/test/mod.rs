//! Test utilities for the contract

pub mod helpers;
