use crate::options::HEADER_SENTINEL;

/// What a header checksum mismatch does to the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MismatchPolicy {
    /// Abort the pass on the first bad group, leaving the output truncated.
    #[default]
    Fatal,
    /// Emit a diagnostic, count the mismatch and keep going.
    Report,
}

/// Outcome of one completed 8-byte header group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupCheck {
    /// Zero-based index of the group within the header region.
    pub group: usize,
    /// The accumulated XOR value for the group.
    pub found: u8,
}

impl GroupCheck {
    pub fn is_valid(&self) -> bool {
        self.found == HEADER_SENTINEL
    }
}

/// XOR accumulator over the least-significant bits of header bytes.
///
/// Each header byte contributes its bit 0, shifted to its offset within the
/// current 8-byte group. A complete group must accumulate to
/// [`HEADER_SENTINEL`]. A partial group at the end of a stream is never
/// checked; callers can see that via [`HeaderValidator::has_partial_group`].
#[derive(Debug, Default)]
pub struct HeaderValidator {
    acc: u8,
    bit: u32,
    group: usize,
}

impl HeaderValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one header byte. Returns the group outcome on every 8th byte,
    /// `None` otherwise.
    pub fn absorb(&mut self, byte: u8) -> Option<GroupCheck> {
        self.acc ^= (byte & 0x1) << self.bit;
        self.bit += 1;

        if self.bit < 8 {
            return None;
        }

        let check = GroupCheck {
            group: self.group,
            found: self.acc,
        };
        self.acc = 0;
        self.bit = 0;
        self.group += 1;

        Some(check)
    }

    /// True when the stream ended mid-group and bits were absorbed that
    /// will never be validated.
    pub fn has_partial_group(&self) -> bool {
        self.bit != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 8 carrier bytes whose least-significant bits spell out the sentinel,
    /// least-significant group position first.
    fn valid_group(base: u8) -> [u8; 8] {
        let mut bytes = [0u8; 8];
        for (offset, byte) in bytes.iter_mut().enumerate() {
            *byte = (base & !1) | ((HEADER_SENTINEL >> offset) & 0x1);
        }
        bytes
    }

    #[test]
    fn should_accept_a_group_accumulating_to_the_sentinel() {
        let mut validator = HeaderValidator::new();
        let mut checks = Vec::new();

        for byte in valid_group(0x40) {
            if let Some(check) = validator.absorb(byte) {
                checks.push(check);
            }
        }

        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0].group, 0);
        assert_eq!(checks[0].found, HEADER_SENTINEL);
        assert!(checks[0].is_valid());
    }

    #[test]
    fn should_detect_a_single_flipped_bit() {
        let mut group = valid_group(0x40);
        group[3] ^= 0x1;

        let mut validator = HeaderValidator::new();
        let check = group
            .iter()
            .find_map(|byte| validator.absorb(*byte))
            .expect("8 bytes must complete a group");

        assert!(!check.is_valid());
        assert_eq!(check.found, HEADER_SENTINEL ^ (1 << 3));
    }

    #[test]
    fn should_ignore_everything_but_the_least_significant_bit() {
        let mut a = HeaderValidator::new();
        let mut b = HeaderValidator::new();

        let outcome_a: Vec<_> = valid_group(0x00).iter().map(|x| a.absorb(*x)).collect();
        let outcome_b: Vec<_> = valid_group(0xFE).iter().map(|x| b.absorb(*x)).collect();

        assert_eq!(outcome_a, outcome_b);
    }

    #[test]
    fn should_reset_between_groups() {
        let mut validator = HeaderValidator::new();
        let mut checks = Vec::new();

        for byte in valid_group(0x10).iter().chain(valid_group(0x80).iter()) {
            if let Some(check) = validator.absorb(*byte) {
                checks.push(check);
            }
        }

        assert_eq!(checks.len(), 2);
        assert!(checks.iter().all(GroupCheck::is_valid));
        assert_eq!(checks[1].group, 1);
    }

    #[test]
    fn should_expose_a_partial_trailing_group() {
        let mut validator = HeaderValidator::new();
        for byte in &valid_group(0)[..5] {
            assert_eq!(validator.absorb(*byte), None);
        }

        assert!(validator.has_partial_group());
    }
}
