//! Replay fingerprints (spec.md section 4.2, GLOSSARY "Golden replay").

use crate::canonical::canonical_events;
use crate::canonical::canonical_state;
use crate::event::Event;
use crate::state::GameState;
use sha2::Digest;
use sha2::Sha256;

fn hex_lower(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        use std::fmt::Write as _;
        let _ = write!(out, "{:02x}", b);
    }
    out
}

/// SHA-256 over the canonical encoding of a state, as 64 lowercase hex
/// characters (spec.md section 4.2).
pub fn hash_state(state: &GameState) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_state(state).as_bytes());
    hex_lower(&hasher.finalize())
}

/// SHA-256 over the canonical encoding of an event list, in emission
/// order (spec.md section 4.2).
pub fn hash_events(events: &[Event]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_events(events).as_bytes());
    hex_lower(&hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_hash_is_64_lowercase_hex_chars() {
        let state = GameState::new(42);
        let h = hash_state(&state);
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn identical_states_hash_identically() {
        let a = GameState::new(99);
        let b = GameState::new(99);
        assert_eq!(hash_state(&a), hash_state(&b));
    }

    #[test]
    fn empty_event_list_hashes_consistently() {
        assert_eq!(hash_events(&[]), hash_events(&[]));
    }
}
