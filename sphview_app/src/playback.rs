use sphview_window::{Input, KeyCode};

/// The timestep transition requested by input for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    None,
    Forward,
    Backward,
}

impl StepDirection {
    /// Samples the tri-state step query for this frame. Backward wins if
    /// both arrow keys were pressed on the same frame.
    pub fn from_input(input: &Input) -> Self {
        if input.key_pressed(KeyCode::ArrowLeft) {
            Self::Backward
        } else if input.key_pressed(KeyCode::ArrowRight) {
            Self::Forward
        } else {
            Self::None
        }
    }
}

/// The currently displayed timestep index, clamped to the loaded range.
///
/// Applies at most one transition per frame. Stepping past either end of the
/// range is a no-op, not an error.
#[derive(Debug, Clone)]
pub struct PlaybackCursor {
    index: usize,
    timestep_count: usize,
    changed: bool,
}

impl PlaybackCursor {
    /// Creates a cursor at index 0 over `timestep_count` timesteps.
    pub fn new(timestep_count: usize) -> Self {
        assert!(timestep_count > 0);
        Self {
            index: 0,
            timestep_count,
            changed: false,
        }
    }

    /// Applies this frame's transition.
    pub fn apply(&mut self, direction: StepDirection) {
        let prev = self.index;
        match direction {
            StepDirection::Forward if self.index < self.timestep_count - 1 => self.index += 1,
            StepDirection::Backward if self.index > 0 => self.index -= 1,
            _ => {}
        }
        self.changed = self.index != prev;
    }

    /// The current timestep index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// True only on a frame where the index actually moved; false on frames
    /// where a step was requested but clamped.
    pub fn changed(&self) -> bool {
        self.changed
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starts_at_zero_unchanged() {
        let cursor = PlaybackCursor::new(3);
        assert_eq!(cursor.index(), 0);
        assert!(!cursor.changed());
    }

    #[test]
    fn forward_then_backward_returns_to_start() {
        let mut cursor = PlaybackCursor::new(3);

        cursor.apply(StepDirection::Forward);
        assert_eq!(cursor.index(), 1);
        assert!(cursor.changed());

        cursor.apply(StepDirection::Backward);
        assert_eq!(cursor.index(), 0);
        assert!(cursor.changed());
    }

    #[test]
    fn backward_at_start_is_a_noop() {
        let mut cursor = PlaybackCursor::new(3);
        cursor.apply(StepDirection::Backward);
        assert_eq!(cursor.index(), 0);
        assert!(!cursor.changed());
    }

    #[test]
    fn forward_at_end_is_a_noop() {
        let mut cursor = PlaybackCursor::new(2);
        cursor.apply(StepDirection::Forward);
        assert_eq!(cursor.index(), 1);
        assert!(cursor.changed());

        cursor.apply(StepDirection::Forward);
        assert_eq!(cursor.index(), 1);
        assert!(!cursor.changed());
    }

    #[test]
    fn no_update_clears_changed() {
        let mut cursor = PlaybackCursor::new(3);
        cursor.apply(StepDirection::Forward);
        assert!(cursor.changed());

        cursor.apply(StepDirection::None);
        assert_eq!(cursor.index(), 1);
        assert!(!cursor.changed());
    }

    #[test]
    fn three_forward_one_backward_sequence() {
        let mut cursor = PlaybackCursor::new(3);
        let transitions = [
            StepDirection::Forward,
            StepDirection::Forward,
            StepDirection::Forward,
            StepDirection::Backward,
        ];

        let mut indices = Vec::new();
        let mut changes = Vec::new();
        for direction in transitions {
            cursor.apply(direction);
            indices.push(cursor.index());
            changes.push(cursor.changed());
        }

        assert_eq!(indices, vec![1, 2, 2, 1]);
        assert_eq!(changes, vec![true, true, false, true]);
    }

    #[test]
    fn single_timestep_never_changes() {
        let mut cursor = PlaybackCursor::new(1);
        cursor.apply(StepDirection::Forward);
        assert!(!cursor.changed());
        cursor.apply(StepDirection::Backward);
        assert!(!cursor.changed());
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    #[should_panic]
    fn zero_timesteps_is_invalid() {
        PlaybackCursor::new(0);
    }
}
