//! Binary snapshots of a game state.
//!
//! Encoding is plain `bincode`; framing and transport are the caller's
//! business. Decoding runs [`GameState::validate`] so a corrupted or
//! hand-edited snapshot cannot enter a session.

use crate::core::GameState;
use crate::error::SnapshotError;

/// Encode a state to bytes.
pub fn encode(state: &GameState) -> Result<Vec<u8>, SnapshotError> {
    Ok(bincode::serialize(state)?)
}

/// Decode bytes produced by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<GameState, SnapshotError> {
    let state: GameState = bincode::deserialize(bytes)?;
    state.validate()?;
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, PlayerInfo};
    use crate::error::SetupError;
    use crate::rules::apply_action;

    #[test]
    fn test_snapshot_preserves_history() {
        let state = GameState::new(vec![
            PlayerInfo::human("RED", "Red", "red"),
            PlayerInfo::human("BLUE", "Blue", "blue"),
        ])
        .unwrap();
        let state = apply_action(&state, &Action::Place);
        let state = apply_action(&state, &Action::Place);

        let bytes = encode(&state).unwrap();
        let restored = decode(&bytes).unwrap();

        assert_eq!(restored, state);
        assert_eq!(restored.history().len(), 2);
    }

    /// Re-encode `state` after editing its JSON form.
    fn tampered(state: &GameState, edit: impl FnOnce(&mut serde_json::Value)) -> Vec<u8> {
        let mut json = serde_json::to_value(state).unwrap();
        edit(&mut json);
        let edited: GameState = serde_json::from_value(json).unwrap();
        encode(&edited).unwrap()
    }

    #[test]
    fn test_out_of_range_current_rejected() {
        let state = GameState::new(vec![
            PlayerInfo::human("RED", "Red", "red"),
            PlayerInfo::human("BLUE", "Blue", "blue"),
        ])
        .unwrap();

        let bytes = tampered(&state, |json| json["current"] = 5.into());
        assert!(matches!(
            decode(&bytes),
            Err(SnapshotError::Invalid(SetupError::InvalidSeat(5)))
        ));
    }

    #[test]
    fn test_overfull_stack_rejected() {
        let state = GameState::new(vec![
            PlayerInfo::human("RED", "Red", "red"),
            PlayerInfo::human("BLUE", "Blue", "blue"),
        ])
        .unwrap();

        let bytes = tampered(&state, |json| {
            json["board"]["spaces"][0]["tokens"] = serde_json::json!([0, 0, 0, 0, 0, 0, 0]);
            json["unplaced"]["data"][0] = 0.into();
        });
        assert!(matches!(
            decode(&bytes),
            Err(SnapshotError::Invalid(SetupError::StackOverflow { space: 1, len: 7 }))
        ));
    }

    #[test]
    fn test_short_seat_map_rejected() {
        let state = GameState::new(vec![
            PlayerInfo::human("RED", "Red", "red"),
            PlayerInfo::human("BLUE", "Blue", "blue"),
        ])
        .unwrap();

        let bytes = tampered(&state, |json| json["exited"]["data"] = serde_json::json!([0]));
        assert!(matches!(
            decode(&bytes),
            Err(SnapshotError::Invalid(SetupError::SeatCountMismatch { .. }))
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(decode(&[1, 2, 3]), Err(SnapshotError::Codec(_))));
    }
}
