// Purpose - host-facing data carriers and panel adapters

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::control::ranges::{Mode, WaveShape};

/// Everything the host hands the voice for one sample tick: knob positions,
/// decoded selectors, the trigger button, and the raw CV voltages.
///
/// Knobs are normalized to [0, 1] except tuning (±12 semitones). CVs are
/// nominally 0-10 V but may exceed that; the mixer clamps.
#[derive(Debug, Clone, Copy)]
pub struct ControlFrame {
    pub sample_rate: f32,

    // Knobs
    pub tuning_semitones: f32,
    pub cutoff_knob: f32,
    pub resonance_knob: f32,
    pub decay_knob: f32,
    pub env_mod_knob: f32,
    pub slide_knob: f32,
    pub accent_knob: f32,

    // Selectors and button
    pub waveform: WaveShape,
    pub mode: Mode,
    pub trig_button: bool,

    // CV inputs, in volts
    pub pitch_cv: f32,
    pub cutoff_cv: f32,
    pub resonance_cv: f32,
    pub decay_cv: f32,
    pub env_mod_cv: f32,
    pub slide_cv: f32,
    pub accent_cv: f32,
    pub gate_cv: f32,
}

impl Default for ControlFrame {
    /// Panel defaults: timbral knobs centered, slide and accent off,
    /// saw wave, standard mode, nothing patched.
    fn default() -> Self {
        Self {
            sample_rate: 44_100.0,
            tuning_semitones: 0.0,
            cutoff_knob: 0.5,
            resonance_knob: 0.5,
            decay_knob: 0.5,
            env_mod_knob: 0.5,
            slide_knob: 0.0,
            accent_knob: 0.0,
            waveform: WaveShape::Saw,
            mode: Mode::Standard,
            trig_button: false,
            pitch_cv: 0.0,
            cutoff_cv: 0.0,
            resonance_cv: 0.0,
            decay_cv: 0.0,
            env_mod_cv: 0.0,
            slide_cv: 0.0,
            accent_cv: 0.0,
            gate_cv: 0.0,
        }
    }
}

/// What the voice hands back each sample: mono-summed audio on both
/// channels (host volts) and the three VU segment brightness values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VoiceOutput {
    pub left: f32,
    pub right: f32,
    pub lights: [f32; 3],
}

/// How a physical three-position switch maps to selector steps.
///
/// Some panel switches read 2 at the top position and 0 at the bottom,
/// opposite to their printed labels; `Inverted` compensates. This is purely
/// a labeling concern, so it lives here at the boundary and never reaches
/// the voice core.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorOrientation {
    #[default]
    Direct,
    Inverted,
}

impl SelectorOrientation {
    /// Decode a raw switch value into a selector step 0, 1, or 2.
    /// Intermediate values truncate toward the lower step.
    fn decode(self, raw: f32) -> i32 {
        let step = (raw as i32).clamp(0, 2);
        match self {
            SelectorOrientation::Direct => step,
            SelectorOrientation::Inverted => 2 - step,
        }
    }
}

/// Decode the mode switch: step 0 is restricted, 2 is extended.
pub fn mode_from_selector(raw: f32, orientation: SelectorOrientation) -> Mode {
    match orientation.decode(raw) {
        0 => Mode::Restricted,
        2 => Mode::Extended,
        _ => Mode::Standard,
    }
}

/// Decode the waveform switch: step 0 is saw, 2 is square.
pub fn wave_from_selector(raw: f32, orientation: SelectorOrientation) -> WaveShape {
    match orientation.decode(raw) {
        0 => WaveShape::Saw,
        2 => WaveShape::Square,
        _ => WaveShape::Blend,
    }
}
