//! Match ownership: one authoritative state per session, gated submission,
//! staleness-checked bot turns, binary snapshots.

pub mod controller;
pub mod snapshot;

pub use controller::{BotTicket, Session};

use crate::bot::BotConfig;
use crate::error::SnapshotError;

impl Session {
    /// Encode the current state.
    pub fn snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        snapshot::encode(self.state())
    }

    /// Resume a session from snapshot bytes.
    pub fn restore(bytes: &[u8], seed: u64, config: BotConfig) -> Result<Self, SnapshotError> {
        let state = snapshot::decode(bytes)?;
        Ok(Self::from_state(state, seed, config)?)
    }
}
