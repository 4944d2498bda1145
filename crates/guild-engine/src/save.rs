//! Save-format encode/decode (spec.md section 4.2). Distinct from
//! `canonical`: this module exists to round-trip a `GameState` through
//! `serde_json`'s derive machinery for persistence; `canonical` exists to
//! produce one fixed byte sequence for hashing. The two happen to agree
//! on field values but are not required to agree on byte-for-byte layout.

use crate::state::GameState;

/// Failures deserializing a saved state (spec.md section 4.2,
/// "save-version compatibility").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerdeError {
    IncompatibleVersion { found: i64, expected: i64 },
    Malformed(String),
}

impl std::fmt::Display for SerdeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerdeError::IncompatibleVersion { found, expected } => write!(
                f,
                "incompatible save_version: found {found}, expected {expected}"
            ),
            SerdeError::Malformed(detail) => write!(f, "malformed save data: {detail}"),
        }
    }
}
impl std::error::Error for SerdeError {}

/// Serializes a state to its save representation.
pub fn save_state(state: &GameState) -> Result<String, SerdeError> {
    serde_json::to_string(state).map_err(|e| SerdeError::Malformed(e.to_string()))
}

/// Loads a state, rejecting a `save_version` mismatch before anything
/// else and resetting `arrivals_today` to empty as spec.md section 4.2
/// requires on load.
pub fn load_state(json: &str) -> Result<GameState, SerdeError> {
    let mut state: GameState =
        serde_json::from_str(json).map_err(|e| SerdeError::Malformed(e.to_string()))?;
    if state.meta.save_version != crate::state::meta::SAVE_VERSION {
        return Err(SerdeError::IncompatibleVersion {
            found: state.meta.save_version,
            expected: crate::state::meta::SAVE_VERSION,
        });
    }
    state.heroes.arrivals_today.clear();
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_modulo_arrivals_today() {
        let state = GameState::new(7);
        let json = save_state(&state).unwrap();
        let loaded = load_state(&json).unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn rejects_incompatible_save_version() {
        let state = GameState::new(7);
        let json = save_state(&state).unwrap();
        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value["meta"]["save_version"] = serde_json::json!(999);
        let tampered = serde_json::to_string(&value).unwrap();
        assert!(matches!(
            load_state(&tampered),
            Err(SerdeError::IncompatibleVersion { found: 999, .. })
        ));
    }
}
