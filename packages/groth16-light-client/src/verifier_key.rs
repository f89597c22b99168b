//! Canonical encodings of Groth16 verifying keys and proofs over BN254.
//!
//! Both use the arkworks compressed encoding with full point validation on decode.

use ark_bn254::Bn254;
use ark_groth16::{Proof, VerifyingKey};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

use crate::error::Groth16IBCError;

/// Serializes a verifying key into its canonical bytes.
/// # Errors
/// Returns an error if the key cannot be serialized.
pub fn serialize_verifying_key(vk: &VerifyingKey<Bn254>) -> Result<Vec<u8>, Groth16IBCError> {
    encode(vk, "verifying key")
}

/// Deserializes a verifying key from its canonical bytes.
/// # Errors
/// Returns an error if the bytes are not exactly one valid verifying key.
pub fn deserialize_verifying_key(bz: &[u8]) -> Result<VerifyingKey<Bn254>, Groth16IBCError> {
    decode_exact(bz, "verifying key")
}

/// Serializes a proof into its canonical bytes.
/// # Errors
/// Returns an error if the proof cannot be serialized.
pub fn serialize_proof(proof: &Proof<Bn254>) -> Result<Vec<u8>, Groth16IBCError> {
    encode(proof, "proof")
}

/// Deserializes a proof from its canonical bytes.
/// # Errors
/// Returns an error if the bytes are not exactly one valid proof.
pub fn deserialize_proof(bz: &[u8]) -> Result<Proof<Bn254>, Groth16IBCError> {
    decode_exact(bz, "proof")
}

/// Whether `proof` is the mock sentinel: non-empty and all zero bytes.
#[must_use]
pub fn is_mock_proof(proof: &[u8]) -> bool {
    !proof.is_empty() && proof.iter().all(|b| *b == 0)
}

fn encode<T: CanonicalSerialize>(value: &T, what: &str) -> Result<Vec<u8>, Groth16IBCError> {
    let mut bz = Vec::with_capacity(value.compressed_size());
    value
        .serialize_compressed(&mut bz)
        .map_err(|e| Groth16IBCError::Codec(format!("failed to serialize {what}: {e}")))?;
    Ok(bz)
}

fn decode_exact<T: CanonicalDeserialize>(mut bz: &[u8], what: &str) -> Result<T, Groth16IBCError> {
    let value = T::deserialize_compressed(&mut bz)
        .map_err(|e| Groth16IBCError::Codec(format!("failed to deserialize {what}: {e}")))?;
    if !bz.is_empty() {
        return Err(Groth16IBCError::Codec(format!(
            "{} trailing bytes after {what}",
            bz.len()
        )));
    }
    Ok(value)
}
