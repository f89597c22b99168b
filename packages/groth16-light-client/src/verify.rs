//! Verification of state transition headers.

use ark_bn254::Bn254;
use ark_groth16::Groth16;
use ark_snark::SNARK;

use crate::{
    client_state::ClientState,
    config::ClientConfig,
    consensus_state::ConsensusState,
    error::Groth16IBCError,
    header::Header,
    verifier_key::{deserialize_proof, deserialize_verifying_key, is_mock_proof},
    witness::PublicWitness,
};

/// Checks the header against its trusted consensus state without touching the proof.
/// # Errors
/// Returns an error if the header height or timestamp does not advance past the
/// trusted consensus state, or the trusted consensus state is missing.
pub fn verify_header(
    trusted_consensus_state: Option<&ConsensusState>,
    header: &Header,
) -> Result<(), Groth16IBCError> {
    header.validate_basic()?;
    let trusted = trusted_consensus_state.ok_or(Groth16IBCError::MissingConsensusState(
        header.trusted_height(),
    ))?;

    if header.timestamp <= trusted.timestamp {
        return Err(Groth16IBCError::NonMonotonicTimestamp {
            height: header.new_height(),
            timestamp: header.timestamp,
            stored_height: header.trusted_height(),
            stored_timestamp: trusted.timestamp,
        });
    }

    Ok(())
}

/// Verifies the Groth16 proof that the rollup moved from the trusted state to the
/// state claimed by `header`.
///
/// When `config.allow_mock_proofs` is set, an all-zero proof is accepted without
/// verification.
/// # Errors
/// Returns an error if the verifying key or proof cannot be decoded, if the public
/// inputs do not fit the verifying key, or if the proof is rejected.
pub fn verify_state_transition(
    client_state: &ClientState,
    trusted_consensus_state: &ConsensusState,
    header: &Header,
    config: &ClientConfig,
) -> Result<(), Groth16IBCError> {
    if config.allow_mock_proofs && is_mock_proof(&header.state_transition_proof) {
        tracing::warn!(
            trusted_height = header.trusted_height,
            new_height = header.new_height,
            "accepting mock state transition proof"
        );
        return Ok(());
    }

    let public_inputs =
        PublicWitness::new(client_state, trusted_consensus_state, header).to_public_inputs();
    let vk = deserialize_verifying_key(&client_state.state_transition_verifier_key)?;
    let proof = deserialize_proof(&header.state_transition_proof)?;

    let expected = vk.gamma_abc_g1.len().saturating_sub(1);
    if public_inputs.len() != expected {
        return Err(Groth16IBCError::InvalidWitness {
            expected,
            found: public_inputs.len(),
        });
    }

    let pvk = ark_groth16::prepare_verifying_key(&vk);
    let valid = Groth16::<Bn254>::verify_with_processed_vk(&pvk, &public_inputs, &proof)
        .map_err(|_| Groth16IBCError::ProofRejected)?;
    if !valid {
        return Err(Groth16IBCError::ProofRejected);
    }

    Ok(())
}
