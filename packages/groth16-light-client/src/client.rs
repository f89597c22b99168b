//! The light client state machine, driven by the host over its store and codec.

use crate::{
    client_state::ClientState,
    codec::RecordCodec,
    config::ClientConfig,
    consensus_state::ConsensusState,
    error::Groth16IBCError,
    header::{ClientMessage, Header},
    height::Height,
    host::{DelayPeriod, HostInfo, ProcessedMetadata},
    membership::{self, MerklePath},
    status::Status,
    store::{ClientStore, ReadStore},
    update::update_consensus_state,
    verify::{verify_header, verify_state_transition},
};

/// A Groth16 light client instance bound to the store of `client_id`.
///
/// The client only mutates the store on the success path of [`Self::initialize`]
/// and [`Self::update_state`]; all records are encoded before the first write.
#[derive(Debug)]
pub struct LightClient<'a, S, C> {
    client_id: &'a str,
    store: S,
    codec: C,
    config: ClientConfig,
}

impl<'a, S, C> LightClient<'a, S, C> {
    /// Creates a client over the given store and codec.
    #[must_use]
    pub const fn new(client_id: &'a str, store: S, codec: C, config: ClientConfig) -> Self {
        Self {
            client_id,
            store,
            codec,
            config,
        }
    }

    /// The identifier of the client
    #[must_use]
    pub const fn client_id(&self) -> &str {
        self.client_id
    }

    /// Releases the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Always [`Status::Active`]: the client has no frozen or expired state.
    #[must_use]
    pub const fn status(&self) -> Status {
        Status::Active
    }

    /// Misbehaviour is not detected by this client.
    #[must_use]
    pub const fn check_for_misbehaviour(&self, _client_message: &ClientMessage) -> bool {
        false
    }
}

impl<S: ReadStore, C: RecordCodec> LightClient<'_, S, C> {
    /// Reads the client state.
    /// # Errors
    /// Returns an error if the client is not initialized or the record cannot be decoded.
    pub fn client_state(&self) -> Result<ClientState, Groth16IBCError> {
        let bz = self
            .store
            .get(&self.store.client_state_key())
            .ok_or(Groth16IBCError::MissingClientState)?;
        self.codec.decode_client_state(&bz)
    }

    /// Reads the consensus state at `height`, if any.
    /// # Errors
    /// Returns an error if the stored record cannot be decoded.
    pub fn try_consensus_state(
        &self,
        height: Height,
    ) -> Result<Option<ConsensusState>, Groth16IBCError> {
        self.store
            .get(&self.store.consensus_state_key(height))
            .map(|bz| self.codec.decode_consensus_state(&bz))
            .transpose()
    }

    /// Reads the consensus state at `height`.
    /// # Errors
    /// Returns an error if no consensus state is stored at `height` or it cannot be decoded.
    pub fn consensus_state(&self, height: Height) -> Result<ConsensusState, Groth16IBCError> {
        self.try_consensus_state(height)?
            .ok_or(Groth16IBCError::MissingConsensusState(height))
    }

    /// Reads the host time and height at which the consensus state at `height` was accepted.
    /// # Errors
    /// Returns an error if the metadata is missing or malformed.
    pub fn processed_metadata(&self, height: Height) -> Result<ProcessedMetadata, Groth16IBCError> {
        let time = self.store.get(&self.store.processed_time_key(height));
        let processed_height = self.store.get(&self.store.processed_height_key(height));
        match (time, processed_height) {
            (Some(time), Some(processed_height)) => {
                ProcessedMetadata::decode(&time, &processed_height)
            }
            _ => Err(Groth16IBCError::MissingProcessedMetadata(height)),
        }
    }

    /// The latest height with an accepted consensus state.
    /// # Errors
    /// Returns an error if the client state cannot be read.
    pub fn latest_height(&self) -> Result<Height, Groth16IBCError> {
        Ok(self.client_state()?.latest_height())
    }

    /// The timestamp, in unix nanoseconds, of the consensus state at `height`.
    /// # Errors
    /// Returns an error if no consensus state is stored at `height`.
    pub fn timestamp_at_height(&self, height: Height) -> Result<u64, Groth16IBCError> {
        Ok(self.consensus_state(height)?.timestamp)
    }

    /// Checks a client message against the stored state. The state transition proof
    /// is verified in [`LightClient::update_state`].
    /// # Errors
    /// Returns an error if the header height or timestamp is not monotonic, or its
    /// trusted consensus state is missing.
    pub fn verify_client_message(&self, client_message: &ClientMessage) -> Result<(), Groth16IBCError> {
        match client_message {
            ClientMessage::Header(header) => {
                let trusted = self.try_consensus_state(header.trusted_height())?;
                verify_header(trusted.as_ref(), header)?;
                self.verify_timestamp_order(header)
            }
        }
    }

    /// The closest consensus state stored below `height`, with its height.
    /// # Errors
    /// Returns an error if the height index or the consensus state cannot be decoded.
    pub fn previous_consensus_state(
        &self,
        height: Height,
    ) -> Result<Option<(Height, ConsensusState)>, Groth16IBCError> {
        let start = self.store.iteration_key(Height::default());
        let end = self.store.iteration_key(height);
        self.indexed_consensus_state(self.store.last_in(&start, &end))
    }

    /// The closest consensus state stored above `height`, with its height.
    /// # Errors
    /// Returns an error if the height index or the consensus state cannot be decoded.
    pub fn next_consensus_state(
        &self,
        height: Height,
    ) -> Result<Option<(Height, ConsensusState)>, Groth16IBCError> {
        let mut start = self.store.iteration_key(height);
        start.push(0);
        let mut end = self.store.iteration_key(Height {
            revision_number: u64::MAX,
            revision_height: u64::MAX,
        });
        end.push(0);
        self.indexed_consensus_state(self.store.first_in(&start, &end))
    }

    fn indexed_consensus_state(
        &self,
        entry: Option<Vec<u8>>,
    ) -> Result<Option<(Height, ConsensusState)>, Groth16IBCError> {
        entry
            .map(|bz| {
                let height = Height::from_be_bytes(&bz).ok_or_else(|| {
                    Groth16IBCError::Codec("invalid consensus state height index".to_string())
                })?;
                Ok((height, self.consensus_state(height)?))
            })
            .transpose()
    }

    /// The header timestamp must lie strictly between the timestamps of the closest
    /// consensus states stored below and above its new height.
    fn verify_timestamp_order(&self, header: &Header) -> Result<(), Groth16IBCError> {
        let height = header.new_height();
        let non_monotonic = |stored_height, stored: &ConsensusState| {
            Groth16IBCError::NonMonotonicTimestamp {
                height,
                timestamp: header.timestamp,
                stored_height,
                stored_timestamp: stored.timestamp,
            }
        };

        if let Some((previous_height, previous)) = self.previous_consensus_state(height)? {
            if header.timestamp <= previous.timestamp {
                return Err(non_monotonic(previous_height, &previous));
            }
        }
        if let Some((next_height, next)) = self.next_consensus_state(height)? {
            if header.timestamp >= next.timestamp {
                return Err(non_monotonic(next_height, &next));
            }
        }

        Ok(())
    }

    /// Verifies that `value` is stored at `path` in the rollup state at `height`.
    /// # Errors
    /// Returns an error if the delay period has not passed, the consensus state is
    /// missing, or the proof does not show `value` at `path`.
    pub fn verify_membership(
        &self,
        height: Height,
        delay: &DelayPeriod,
        host: &HostInfo,
        proof: &[u8],
        path: &MerklePath,
        value: &[u8],
    ) -> Result<(), Groth16IBCError> {
        let consensus_state = self.proof_consensus_state(height, delay, host)?;
        membership::verify_membership(&consensus_state, proof, path, value)
    }

    /// Verifies that nothing is stored at `path` in the rollup state at `height`.
    /// # Errors
    /// Returns an error if the delay period has not passed, the consensus state is
    /// missing, or the proof does not show absence at `path`.
    pub fn verify_non_membership(
        &self,
        height: Height,
        delay: &DelayPeriod,
        host: &HostInfo,
        proof: &[u8],
        path: &MerklePath,
    ) -> Result<(), Groth16IBCError> {
        let consensus_state = self.proof_consensus_state(height, delay, host)?;
        membership::verify_non_membership(&consensus_state, proof, path)
    }

    fn proof_consensus_state(
        &self,
        height: Height,
        delay: &DelayPeriod,
        host: &HostInfo,
    ) -> Result<ConsensusState, Groth16IBCError> {
        let consensus_state = self.consensus_state(height)?;
        if !delay.is_zero() {
            self.processed_metadata(height)?
                .verify_delay_passed(host, delay)?;
        }
        Ok(consensus_state)
    }

    fn consensus_state_writes(
        &self,
        height: Height,
        consensus_state: &ConsensusState,
        host: &HostInfo,
    ) -> Result<Vec<(Vec<u8>, Vec<u8>)>, Groth16IBCError> {
        let metadata = ProcessedMetadata::from(host);
        Ok(vec![
            (
                self.store.consensus_state_key(height),
                self.codec.encode_consensus_state(consensus_state)?,
            ),
            (self.store.processed_time_key(height), metadata.encode_time()),
            (
                self.store.processed_height_key(height),
                metadata.encode_height(),
            ),
            (self.store.iteration_key(height), height.to_be_bytes().to_vec()),
        ])
    }
}

impl<S: ClientStore, C: RecordCodec> LightClient<'_, S, C> {
    /// Stores the client state and the initial consensus state at its latest height.
    /// # Errors
    /// Returns an error if the store already holds a client state, the client state
    /// is invalid, or a record cannot be encoded.
    pub fn initialize(
        &mut self,
        client_state: &ClientState,
        consensus_state: &ConsensusState,
        host: &HostInfo,
    ) -> Result<(), Groth16IBCError> {
        if self.store.get(&self.store.client_state_key()).is_some() {
            return Err(Groth16IBCError::ClientAlreadyInitialized);
        }
        self.store_initial_states(client_state, consensus_state, host)?;

        tracing::info!(
            client_id = self.client_id,
            height = %client_state.latest_height(),
            state_root = %consensus_state.state_root,
            "initialized groth16 light client"
        );

        Ok(())
    }

    /// Like [`Self::initialize`], but replaces a stored client state and the consensus
    /// state at its latest height. Consensus states at other heights are kept.
    /// # Errors
    /// Returns an error if the client state is invalid or a record cannot be encoded.
    pub fn reinitialize(
        &mut self,
        client_state: &ClientState,
        consensus_state: &ConsensusState,
        host: &HostInfo,
    ) -> Result<(), Groth16IBCError> {
        self.store_initial_states(client_state, consensus_state, host)?;

        tracing::info!(
            client_id = self.client_id,
            height = %client_state.latest_height(),
            state_root = %consensus_state.state_root,
            "reinitialized groth16 light client"
        );

        Ok(())
    }

    fn store_initial_states(
        &mut self,
        client_state: &ClientState,
        consensus_state: &ConsensusState,
        host: &HostInfo,
    ) -> Result<(), Groth16IBCError> {
        client_state.validate()?;

        let height = client_state.latest_height();
        let mut writes = vec![(
            self.store.client_state_key(),
            self.codec.encode_client_state(client_state)?,
        )];
        writes.extend(self.consensus_state_writes(height, consensus_state, host)?);
        self.apply(writes);
        Ok(())
    }

    /// Verifies the state transition of `client_message` and stores the resulting
    /// consensus state. Returns the heights of the consensus states it produced.
    ///
    /// A header whose new height already has a consensus state is accepted without
    /// changes, consensus states are never overwritten.
    /// # Errors
    /// Returns an error if the header is invalid, its timestamp is out of order with
    /// the stored consensus states, the trusted consensus state is missing, or the
    /// state transition proof does not verify.
    pub fn update_state(
        &mut self,
        client_message: &ClientMessage,
        host: &HostInfo,
    ) -> Result<Vec<Height>, Groth16IBCError> {
        let ClientMessage::Header(header) = client_message;
        header.validate_basic()?;

        let new_height = header.new_height();
        if self.try_consensus_state(new_height)?.is_some() {
            tracing::debug!(
                client_id = self.client_id,
                height = %new_height,
                "consensus state already stored, skipping update"
            );
            return Ok(vec![new_height]);
        }

        let client_state = self.client_state()?;
        let trusted_consensus_state = self.consensus_state(header.trusted_height())?;
        verify_header(Some(&trusted_consensus_state), header)?;
        self.verify_timestamp_order(header)?;
        verify_state_transition(&client_state, &trusted_consensus_state, header, &self.config)?;

        let (height, consensus_state, new_client_state) =
            update_consensus_state(&client_state, header);

        let mut writes = self.consensus_state_writes(height, &consensus_state, host)?;
        if let Some(new_client_state) = &new_client_state {
            writes.push((
                self.store.client_state_key(),
                self.codec.encode_client_state(new_client_state)?,
            ));
        }
        self.apply(writes);

        tracing::debug!(
            client_id = self.client_id,
            %height,
            state_root = %consensus_state.state_root,
            latest_height_advanced = new_client_state.is_some(),
            "updated groth16 light client"
        );

        Ok(vec![height])
    }

    /// Does nothing, misbehaviour is never found.
    pub fn update_state_on_misbehaviour(&mut self, _client_message: &ClientMessage) {
        tracing::debug!(
            client_id = self.client_id,
            "ignoring misbehaviour, not supported"
        );
    }

    /// Replacing the client with a substitute is not supported.
    /// # Errors
    /// Always returns [`Groth16IBCError::Unsupported`].
    #[allow(clippy::unused_self)]
    pub fn check_substitute_and_update_state(&mut self) -> Result<(), Groth16IBCError> {
        Err(Groth16IBCError::Unsupported("substitute client update"))
    }

    /// Upgrades are not supported.
    /// # Errors
    /// Always returns [`Groth16IBCError::Unsupported`].
    #[allow(clippy::unused_self)]
    pub fn verify_upgrade_and_update_state(
        &mut self,
        _upgraded_client_state: &[u8],
        _upgraded_consensus_state: &[u8],
        _proof_upgrade_client: &[u8],
        _proof_upgrade_consensus_state: &[u8],
    ) -> Result<(), Groth16IBCError> {
        Err(Groth16IBCError::Unsupported("client upgrade"))
    }

    fn apply(&mut self, writes: Vec<(Vec<u8>, Vec<u8>)>) {
        for (key, value) in writes {
            self.store.set(&key, &value);
        }
    }
}
