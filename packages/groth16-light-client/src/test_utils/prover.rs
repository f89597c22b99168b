//! A Groth16 prover for a stand-in of the rollup's state transition circuit.
//!
//! The circuit binds each public input to a private copy of itself, so a proof
//! verifies only against the exact inputs, in the exact order, it was made for.

use ark_bn254::{Bn254, Fr};
use ark_groth16::{Groth16, ProvingKey, VerifyingKey};
use ark_r1cs_std::{alloc::AllocVar, eq::EqGadget, fields::fp::FpVar};
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};
use ark_snark::SNARK;
use ark_std::rand::{rngs::StdRng, SeedableRng};

use crate::{
    verifier_key::{serialize_proof, serialize_verifying_key},
    witness::STATE_TRANSITION_PUBLIC_INPUTS,
};

/// A circuit with `public_inputs.len()` public inputs and no other statement
#[derive(Clone, Debug)]
pub struct StateTransitionCircuit {
    /// The public inputs, `None` during setup
    pub public_inputs: Vec<Option<Fr>>,
}

impl ConstraintSynthesizer<Fr> for StateTransitionCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        for input in self.public_inputs {
            let public = FpVar::new_input(cs.clone(), || {
                input.ok_or(SynthesisError::AssignmentMissing)
            })?;
            let private = FpVar::new_witness(cs.clone(), || {
                input.ok_or(SynthesisError::AssignmentMissing)
            })?;
            public.enforce_equal(&private)?;
        }

        Ok(())
    }
}

/// Keys from a deterministic setup of [`StateTransitionCircuit`]
pub struct TestProver {
    /// The proving key
    pub proving_key: ProvingKey<Bn254>,
    /// The verifying key
    pub verifying_key: VerifyingKey<Bn254>,
    num_inputs: usize,
    rng: StdRng,
}

impl TestProver {
    /// Runs the setup for a circuit with the state transition arity.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_public_inputs(seed, STATE_TRANSITION_PUBLIC_INPUTS)
    }

    /// Runs the setup for a circuit with `num_inputs` public inputs.
    /// # Panics
    /// Panics if the setup fails.
    #[must_use]
    pub fn with_public_inputs(seed: u64, num_inputs: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let circuit = StateTransitionCircuit {
            public_inputs: vec![None; num_inputs],
        };
        let (proving_key, verifying_key) =
            Groth16::<Bn254>::circuit_specific_setup(circuit, &mut rng)
                .expect("circuit setup should succeed");

        Self {
            proving_key,
            verifying_key,
            num_inputs,
            rng,
        }
    }

    /// The canonical bytes of the verifying key, as stored in a client state.
    /// # Panics
    /// Panics if the key cannot be serialized.
    #[must_use]
    pub fn verifier_key_bytes(&self) -> Vec<u8> {
        serialize_verifying_key(&self.verifying_key).expect("verifying key should serialize")
    }

    /// Proves the circuit for `public_inputs` and returns the canonical proof bytes.
    /// # Panics
    /// Panics if the number of inputs does not match the setup.
    pub fn prove(&mut self, public_inputs: &[Fr]) -> Vec<u8> {
        assert_eq!(public_inputs.len(), self.num_inputs, "wrong number of inputs");

        let circuit = StateTransitionCircuit {
            public_inputs: public_inputs.iter().copied().map(Some).collect(),
        };
        let proof = Groth16::<Bn254>::prove(&self.proving_key, circuit, &mut self.rng)
            .expect("proving should succeed");
        serialize_proof(&proof).expect("proof should serialize")
    }

    /// Distinct inputs matching the arity of the setup.
    #[must_use]
    pub fn sample_inputs(&self) -> Vec<Fr> {
        (1..=self.num_inputs as u64).map(Fr::from).collect()
    }
}
