#![allow(unused_crate_dependencies)]

use groth16_light_client::{
    client_state::ClientState, config::ClientConfig, consensus_state::ConsensusState,
    header::ClientMessage, membership::MembershipProof,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, JsonSchema)]
struct Groth16Types {
    client_state: ClientState,
    consensus_state: ConsensusState,
    client_message: ClientMessage,
    membership_proof: MembershipProof,
    config: ClientConfig,
}

fn main() {
    let schema = schemars::schema_for!(Groth16Types);
    std::fs::write(
        "groth16_types_schema.json",
        serde_json::to_string_pretty(&schema).expect("Failed to serialize schema"),
    )
    .expect("Failed to write schema to file");
}
