#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::control::gate::EdgePolicy;
use crate::control::mix::AccentPolicy;

/// Behavior switches that distinguish the two voice revisions.
///
/// Both revisions share the mixer, range table and meter. They part ways at
/// the gate input and at the accent-to-velocity mapping, so one profile
/// struct keeps those choices together instead of duplicating the voice.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceProfile {
    pub edge_policy: EdgePolicy,
    /// Emit a zero-velocity note-on when the gate falls. When false the
    /// voice decays under its own envelope and release is implicit.
    pub release_emits_note_off: bool,
    pub accent_policy: AccentPolicy,
}

impl VoiceProfile {
    /// Gate-follower revision: instant edges both ways, explicit release,
    /// accent CV gates the 80/127 velocity pair.
    pub fn gated() -> Self {
        Self {
            edge_policy: EdgePolicy::Instant,
            release_emits_note_off: true,
            accent_policy: AccentPolicy::GatedBinary,
        }
    }

    /// Trigger-driven revision: hysteretic rising edges for noisy trigger
    /// lines, no note-off (the envelope owns the release), normalized
    /// accent above 0.5 gates the 100/127 velocity pair.
    pub fn triggered() -> Self {
        Self {
            edge_policy: EdgePolicy::Hysteretic,
            release_emits_note_off: false,
            accent_policy: AccentPolicy::ThresholdBinary,
        }
    }
}

impl Default for VoiceProfile {
    fn default() -> Self {
        Self::gated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_their_revisions() {
        let gated = VoiceProfile::gated();
        assert_eq!(gated.edge_policy, EdgePolicy::Instant);
        assert!(gated.release_emits_note_off);
        assert_eq!(gated.accent_policy, AccentPolicy::GatedBinary);

        let triggered = VoiceProfile::triggered();
        assert_eq!(triggered.edge_policy, EdgePolicy::Hysteretic);
        assert!(!triggered.release_emits_note_off);
        assert_eq!(triggered.accent_policy, AccentPolicy::ThresholdBinary);
    }
}
