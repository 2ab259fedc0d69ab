// Purpose - the boundary to the external synthesis engine

/// Command vocabulary and sinks for transporting engine calls.
pub mod command;
/// Engine implementation that forwards calls into a command sink.
pub mod relay;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use command::{CommandSink, EngineCommand};
pub use relay::RelayEngine;

/// Physical-unit parameter bundle the voice pushes to the engine every
/// sample. Units follow the engine contract: Hz for frequencies,
/// milliseconds for times, 0-100 engine units for depths.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineParams {
    /// Oscillator blend, 0.0 saw to 1.0 square.
    pub waveform: f32,
    /// Master tuning reference in Hz.
    pub tuning_hz: f32,
    pub cutoff_hz: f32,
    pub resonance: f32,
    pub decay_ms: f32,
    pub accent_decay_ms: f32,
    pub env_mod: f32,
    pub accent: f32,
}

/// The monophonic synthesis engine as the control core sees it.
///
/// Parameter setters arrive every sample with current values; note commands
/// arrive only on gate transitions. Implementations must be realtime-safe:
/// no allocation, no blocking, no I/O.
pub trait ToneEngine: Send {
    fn set_sample_rate(&mut self, hz: f32);

    fn apply_params(&mut self, params: &EngineParams);

    /// Portamento/glide time for the next slid note, in milliseconds.
    fn set_slide_time(&mut self, ms: f32);

    /// Immediate (retriggered) note start. Velocity 0 releases the note.
    fn note_on(&mut self, note: i32, velocity: u8);

    /// Note start that glides from the currently sounding pitch.
    fn note_on_portamento(&mut self, note: i32, velocity: u8);

    /// Clear every queued and sounding note.
    fn all_notes_off(&mut self);

    /// Drop stale queued notes, keeping the sounding one.
    fn trim_note_list(&mut self);

    /// Pull the next rendered sample, nominal ±1.0 full scale.
    fn next_sample(&mut self) -> f32;
}

/// Allow boxed engines to be used as engines (for dynamic dispatch).
impl ToneEngine for Box<dyn ToneEngine> {
    fn set_sample_rate(&mut self, hz: f32) {
        (**self).set_sample_rate(hz)
    }

    fn apply_params(&mut self, params: &EngineParams) {
        (**self).apply_params(params)
    }

    fn set_slide_time(&mut self, ms: f32) {
        (**self).set_slide_time(ms)
    }

    fn note_on(&mut self, note: i32, velocity: u8) {
        (**self).note_on(note, velocity)
    }

    fn note_on_portamento(&mut self, note: i32, velocity: u8) {
        (**self).note_on_portamento(note, velocity)
    }

    fn all_notes_off(&mut self) {
        (**self).all_notes_off()
    }

    fn trim_note_list(&mut self) {
        (**self).trim_note_list()
    }

    fn next_sample(&mut self) -> f32 {
        (**self).next_sample()
    }
}
