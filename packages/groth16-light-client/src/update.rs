//! Groth16 light client update logic

use crate::{
    client_state::ClientState, consensus_state::ConsensusState, header::Header, height::Height,
};

/// Builds the consensus state for a verified header.
/// Returns (`new_height`, `new_consensus_state`, `optional_new_client_state`), where the
/// client state is only returned if the latest height advanced.
#[must_use]
pub fn update_consensus_state(
    current_client_state: &ClientState,
    header: &Header,
) -> (Height, ConsensusState, Option<ClientState>) {
    let new_consensus_state = ConsensusState {
        timestamp: header.timestamp,
        state_root: header.new_state_root,
    };

    let height_has_progressed = header.new_height > current_client_state.latest_height;
    let new_client_state = height_has_progressed.then(|| ClientState {
        latest_height: header.new_height,
        ..current_client_state.clone()
    });

    (header.new_height(), new_consensus_state, new_client_state)
}
