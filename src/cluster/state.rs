/// Where a point stands during one clustering run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PointState {
    /// Not examined yet.
    Unvisited,
    /// Examined and not (yet) in a cluster. Border points leave this state when a
    /// later expansion reaches them, so it is only final once the run completes.
    Noise,
    /// Assigned to a cluster. Terminal.
    Clustered,
}

/// Per-run store of point states, addressed by input index.
///
/// Holds no transition logic; the driver and expander decide what moves where.
#[derive(Debug, Clone)]
pub(crate) struct StateTracker {
    states: Vec<PointState>,
}

impl StateTracker {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            states: vec![PointState::Unvisited; n],
        }
    }

    #[inline]
    pub(crate) fn get(&self, idx: usize) -> PointState {
        self.states[idx]
    }

    #[inline]
    pub(crate) fn set(&mut self, idx: usize, state: PointState) {
        debug_assert!(
            !(self.states[idx] == PointState::Clustered && state != PointState::Clustered),
            "point {idx} left the clustered state"
        );
        self.states[idx] = state;
    }

    /// Indices still marked noise, ascending.
    pub(crate) fn noise(&self) -> Vec<usize> {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == PointState::Noise)
            .map(|(idx, _)| idx)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unvisited() {
        let states = StateTracker::new(3);
        for idx in 0..3 {
            assert_eq!(states.get(idx), PointState::Unvisited);
        }
        assert!(states.noise().is_empty());
    }

    #[test]
    fn test_noise_is_provisional() {
        let mut states = StateTracker::new(3);
        states.set(0, PointState::Noise);
        states.set(2, PointState::Noise);
        assert_eq!(states.noise(), vec![0, 2]);

        states.set(2, PointState::Clustered);
        assert_eq!(states.get(2), PointState::Clustered);
        assert_eq!(states.noise(), vec![0]);
    }

    #[test]
    #[should_panic(expected = "left the clustered state")]
    #[cfg(debug_assertions)]
    fn test_clustered_is_terminal() {
        let mut states = StateTracker::new(1);
        states.set(0, PointState::Clustered);
        states.set(0, PointState::Noise);
    }
}
