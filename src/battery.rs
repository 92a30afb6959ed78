//! Battery level state
//!
//! Levels arrive asynchronously from the host's battery notifications and
//! are read, never mutated, by the frame composer. "No reading yet" is an
//! explicit state, distinct from an empty battery, and every consumer
//! branches on it instead of drawing a zero-level ring.

/// Battery charge snapshot.
///
/// Single-writer: only the engine's battery notification handler updates
/// it, readers take a copy. Staleness by one notification interval is
/// acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatteryState {
    level: Option<u8>,
}

impl BatteryState {
    /// State before the first notification has arrived.
    pub const fn unknown() -> Self {
        Self { level: None }
    }

    /// Record a new level, clamped to 0–100.
    pub fn update(&mut self, level: u8) {
        self.level = Some(level.min(100));
    }

    /// Battery capacity in percent, `None` until a reading has arrived.
    pub fn percent(&self) -> Option<u8> {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unknown() {
        assert_eq!(BatteryState::unknown().percent(), None);
        assert_eq!(BatteryState::default().percent(), None);
    }

    #[test]
    fn update_clamps_to_full() {
        let mut state = BatteryState::unknown();
        state.update(45);
        assert_eq!(state.percent(), Some(45));
        state.update(250);
        assert_eq!(state.percent(), Some(100));
    }
}
