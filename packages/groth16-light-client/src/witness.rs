//! Assembly of the public inputs of the state transition circuit.

use alloy_primitives::B256;
use ark_bn254::Fr;
use ark_ff::PrimeField;

use crate::{client_state::ClientState, consensus_state::ConsensusState, header::Header};

/// Number of public inputs of the state transition circuit.
pub const STATE_TRANSITION_PUBLIC_INPUTS: usize = 8;

/// The public half of a state transition proof, in circuit order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicWitness {
    /// Height the transition starts from
    pub trusted_height: u64,
    /// Celestia header hash the trusted state was derived from
    pub trusted_celestia_header_hash: B256,
    /// Rollup state root at the trusted height
    pub trusted_state_root: B256,
    /// Height the transition ends at
    pub new_height: u64,
    /// Rollup state root at the new height
    pub new_state_root: B256,
    /// Celestia header hash the new state was derived from
    pub new_celestia_header_hash: B256,
    /// Commitment to the rollup program
    pub code_commitment: Vec<u8>,
    /// Rollup state root at genesis
    pub genesis_state_root: B256,
}

impl PublicWitness {
    /// Collects the witness from the client state, the trusted consensus state and the header.
    #[must_use]
    pub fn new(
        client_state: &ClientState,
        trusted_consensus_state: &ConsensusState,
        header: &Header,
    ) -> Self {
        Self {
            trusted_height: header.trusted_height,
            trusted_celestia_header_hash: header.trusted_celestia_header_hash,
            trusted_state_root: trusted_consensus_state.state_root,
            new_height: header.new_height,
            new_state_root: header.new_state_root,
            new_celestia_header_hash: header.new_celestia_header_hash,
            code_commitment: client_state.code_commitment.clone(),
            genesis_state_root: client_state.genesis_state_root,
        }
    }

    /// Encodes the witness as BN254 scalars. Heights are embedded as integers and
    /// byte strings are read big-endian and reduced modulo the field order.
    #[must_use]
    pub fn to_public_inputs(&self) -> Vec<Fr> {
        vec![
            Fr::from(self.trusted_height),
            Fr::from_be_bytes_mod_order(self.trusted_celestia_header_hash.as_slice()),
            Fr::from_be_bytes_mod_order(self.trusted_state_root.as_slice()),
            Fr::from(self.new_height),
            Fr::from_be_bytes_mod_order(self.new_state_root.as_slice()),
            Fr::from_be_bytes_mod_order(self.new_celestia_header_hash.as_slice()),
            Fr::from_be_bytes_mod_order(&self.code_commitment),
            Fr::from_be_bytes_mod_order(self.genesis_state_root.as_slice()),
        ]
    }
}
