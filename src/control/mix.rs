#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::GATE_HIGH_VOLTS;

/// A 0-10V control voltage spans the whole normalized control range.
pub const CV_PER_VOLT: f32 = 0.1;

/// Normalized accent above this value counts as an accented note under the
/// threshold-binary policy.
pub const ACCENT_HIGH_NORM: f32 = 0.5;

/// Merge a knob position with its control-voltage input.
///
/// The result is always inside [0, 1], whatever the CV does.
#[inline]
pub fn mix_control(knob: f32, cv_volts: f32) -> f32 {
    (knob + cv_volts * CV_PER_VOLT).clamp(0.0, 1.0)
}

/// How the accent control turns into note emphasis.
///
/// Two bassline hardware revisions read accent differently, and both are
/// musically useful, so the choice stays selectable per voice profile.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentPolicy {
    /// The knob alone sets accent depth; the CV input is a pure gate
    /// (high above 2.5 V) that decides whether the next note is accented.
    GatedBinary,
    /// Accent is mixed and clamped like every other control, and the
    /// normalized value above 0.5 marks the next note as accented.
    ThresholdBinary,
}

impl AccentPolicy {
    /// Velocity for the next note. The engine reads velocity >= 100 as an
    /// accented note, anything below as plain.
    pub fn velocity(self, accent_high: bool) -> u8 {
        match (self, accent_high) {
            (AccentPolicy::GatedBinary, false) => 80,
            (AccentPolicy::ThresholdBinary, false) => 100,
            (_, true) => 127,
        }
    }
}

/// Merge the accent knob and CV under the given policy.
///
/// Returns the normalized accent depth and whether the accent is currently
/// asserting.
pub fn mix_accent(policy: AccentPolicy, knob: f32, cv_volts: f32) -> (f32, bool) {
    match policy {
        AccentPolicy::GatedBinary => (knob, cv_volts > GATE_HIGH_VOLTS),
        AccentPolicy::ThresholdBinary => {
            let accent = mix_control(knob, cv_volts);
            (accent, accent > ACCENT_HIGH_NORM)
        }
    }
}

/// Normalized control values after knob/CV merging, ready for range scaling.
#[derive(Debug, Clone, Copy)]
pub struct MixedControls {
    pub cutoff: f32,
    pub resonance: f32,
    pub decay: f32,
    pub env_mod: f32,
    pub slide: f32,
    /// Accent depth. Knob-only or mixed, depending on the policy.
    pub accent: f32,
    /// Whether the next triggered note should be accented.
    pub accent_high: bool,
}
