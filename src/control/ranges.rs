#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::control::mix::MixedControls;
use crate::engine::EngineParams;

/*
| mode       | cutoff (Hz) | res max | decay (ms) | envmod max | accent max |
| ---------- | ----------- | ------- | ---------- | ---------- | ---------- |
| Restricted | 200-2000    | 50      | 200-1000   | 50         | 25         |
| Standard   | 100-4000    | 80      | 200-2000   | 80         | 50         |
| Extended   | 20-8000     | 100     | 30-3000    | 100        | 100        |
*/

/// The accent envelope decays five times faster than the main envelope.
pub const ACCENT_DECAY_RATIO: f32 = 0.2;

/// Parameter range preset, selected by the panel's three-way mode switch.
///
/// `Standard` matches the stock hardware. `Restricted` narrows every range
/// for tame bass duty, while `Extended` opens everything up the way the
/// famous "Devil Fish" modification does.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Restricted,
    #[default]
    Standard,
    Extended,
}

impl Mode {
    /// Physical parameter bounds for this mode.
    pub fn ranges(self) -> ModeRanges {
        match self {
            Mode::Restricted => ModeRanges {
                cutoff_min_hz: 200.0,
                cutoff_max_hz: 2000.0,
                resonance_max: 50.0,
                decay_min_ms: 200.0,
                decay_max_ms: 1000.0,
                env_mod_max: 50.0,
                accent_max: 25.0,
            },
            Mode::Standard => ModeRanges {
                cutoff_min_hz: 100.0,
                cutoff_max_hz: 4000.0,
                resonance_max: 80.0,
                decay_min_ms: 200.0,
                decay_max_ms: 2000.0,
                env_mod_max: 80.0,
                accent_max: 50.0,
            },
            Mode::Extended => ModeRanges {
                cutoff_min_hz: 20.0,
                cutoff_max_hz: 8000.0,
                resonance_max: 100.0,
                decay_min_ms: 30.0,
                decay_max_ms: 3000.0,
                env_mod_max: 100.0,
                accent_max: 100.0,
            },
        }
    }
}

/// Physical bounds the normalized controls are rescaled into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeRanges {
    pub cutoff_min_hz: f32,
    pub cutoff_max_hz: f32,
    pub resonance_max: f32,
    pub decay_min_ms: f32,
    pub decay_max_ms: f32,
    pub env_mod_max: f32,
    pub accent_max: f32,
}

impl ModeRanges {
    /// Rescale normalized controls into the engine's physical units.
    ///
    /// Cutoff and decay span a min..max range; resonance, envelope mod and
    /// accent scale from zero. Waveform and tuning are mode-independent.
    pub fn scale(
        &self,
        controls: &MixedControls,
        wave: WaveShape,
        tuning_semitones: f32,
    ) -> EngineParams {
        let decay_ms = self.decay_min_ms + controls.decay * (self.decay_max_ms - self.decay_min_ms);

        EngineParams {
            waveform: wave.blend(),
            tuning_hz: tuning_hz(tuning_semitones),
            cutoff_hz: self.cutoff_min_hz + controls.cutoff * (self.cutoff_max_hz - self.cutoff_min_hz),
            resonance: controls.resonance * self.resonance_max,
            decay_ms,
            accent_decay_ms: decay_ms * ACCENT_DECAY_RATIO,
            env_mod: controls.env_mod * self.env_mod_max,
            accent: controls.accent * self.accent_max,
        }
    }
}

/// Three-position oscillator waveform selector.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaveShape {
    #[default]
    Saw,
    Blend,
    Square,
}

impl WaveShape {
    /// Continuous saw-to-square blend value the engine consumes.
    pub fn blend(self) -> f32 {
        match self {
            WaveShape::Saw => 0.0,
            WaveShape::Blend => 0.5,
            WaveShape::Square => 1.0,
        }
    }
}

/// Master tuning: semitone offset from the A440 reference.
#[inline]
pub fn tuning_hz(semitones: f32) -> f32 {
    440.0 * 2.0_f32.powf(semitones / 12.0)
}
