use crate::options::{HEADER_LEN, MARKER_LEN};

/// Structural region a stream position belongs to.
///
/// Regions are visited in declaration order, each exactly once per stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Preamble,
    Marker,
    Header,
    Payload,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Preamble,
    Marker { seen: usize },
    Header { seen: usize },
    Payload,
}

/// Forward-only region state machine.
///
/// Transitions are triggered by position thresholds and region-length
/// counters only, never by byte content. There are no backward transitions
/// and no re-entry, so a `start_from` past the end of the stream simply
/// means the marker run never completes and validation never happens.
#[derive(Debug)]
pub struct RegionTracker {
    start_from: u64,
    state: State,
}

impl RegionTracker {
    pub fn new(start_from: u64) -> Self {
        Self {
            start_from,
            state: State::Preamble,
        }
    }

    /// Classifies the byte at `position` and advances the machine.
    ///
    /// Positions must be fed strictly in order, one call per byte.
    pub fn classify(&mut self, position: u64) -> Region {
        if let State::Preamble = self.state {
            if position < self.start_from {
                return Region::Preamble;
            }
            self.state = State::Marker { seen: 0 };
        }

        match self.state {
            State::Marker { seen } => {
                let seen = seen + 1;
                self.state = if seen == MARKER_LEN {
                    State::Header { seen: 0 }
                } else {
                    State::Marker { seen }
                };
                Region::Marker
            }
            State::Header { seen } => {
                let seen = seen + 1;
                self.state = if seen == HEADER_LEN {
                    State::Payload
                } else {
                    State::Header { seen }
                };
                Region::Header
            }
            State::Payload => Region::Payload,
            State::Preamble => Region::Preamble,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_stream(start_from: u64, len: u64) -> Vec<Region> {
        let mut tracker = RegionTracker::new(start_from);
        (0..len).map(|pos| tracker.classify(pos)).collect()
    }

    #[test]
    fn should_put_boundaries_at_s_plus_27_and_s_plus_91() {
        let regions = classify_stream(100, 200);

        assert!(regions[..100].iter().all(|r| *r == Region::Preamble));
        assert!(regions[100..127].iter().all(|r| *r == Region::Marker));
        assert!(regions[127..191].iter().all(|r| *r == Region::Header));
        assert!(regions[191..].iter().all(|r| *r == Region::Payload));
    }

    #[test]
    fn should_start_with_marker_region_when_offset_is_zero() {
        let regions = classify_stream(0, 100);

        assert_eq!(regions[0], Region::Marker);
        assert_eq!(regions[26], Region::Marker);
        assert_eq!(regions[27], Region::Header);
        assert_eq!(regions[90], Region::Header);
        assert_eq!(regions[91], Region::Payload);
    }

    #[test]
    fn should_never_leave_the_marker_region_on_a_short_stream() {
        let regions = classify_stream(10, 20);

        assert!(regions[..10].iter().all(|r| *r == Region::Preamble));
        assert!(regions[10..].iter().all(|r| *r == Region::Marker));
    }

    #[test]
    fn should_stay_in_preamble_when_offset_is_past_the_stream_end() {
        let regions = classify_stream(1_000, 50);

        assert!(regions.iter().all(|r| *r == Region::Preamble));
    }
}
