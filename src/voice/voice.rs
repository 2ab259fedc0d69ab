use crate::control::gate::{GateDetector, GateEdge};
use crate::control::meter::PeakMeter;
use crate::control::mix::{self, MixedControls};
use crate::engine::ToneEngine;
use crate::io::{ControlFrame, VoiceOutput};
use crate::voice::profile::VoiceProfile;
use crate::voice::trigger::{self, PITCH_REF_NOTE};
use crate::FULL_SCALE_VOLTS;

/// The panel trigger button adds a full gate voltage on top of the CV
/// input, so either source can open the gate.
pub const BUTTON_GATE_VOLTS: f32 = 10.0;

/// The control core of a monophonic acid-bass voice.
///
/// Owns the synthesis engine and drives it once per sample. Mixed controls
/// are rescaled into physical units on every tick; note commands fire only
/// on gate edges. Everything here is allocation-free and runs on the audio
/// thread.
pub struct BassVoice<E: ToneEngine> {
    engine: E,
    profile: VoiceProfile,
    gate: GateDetector,
    meter: PeakMeter,
    sample_rate: f32,
    active_note: i32,
}

impl<E: ToneEngine> BassVoice<E> {
    pub fn new(mut engine: E, profile: VoiceProfile, sample_rate: f32) -> Self {
        engine.set_sample_rate(sample_rate);

        Self {
            engine,
            profile,
            gate: GateDetector::new(profile.edge_policy),
            meter: PeakMeter::new(),
            sample_rate,
            active_note: PITCH_REF_NOTE,
        }
    }

    /// Run one sample tick: controls in, audio and lights out.
    pub fn process(&mut self, frame: &ControlFrame) -> VoiceOutput {
        // Sample-rate changes reach the engine before any audio is pulled.
        if frame.sample_rate != self.sample_rate {
            self.sample_rate = frame.sample_rate;
            self.engine.set_sample_rate(self.sample_rate);
        }

        let controls = self.mix(frame);
        let params = frame
            .mode
            .ranges()
            .scale(&controls, frame.waveform, frame.tuning_semitones);
        self.engine.apply_params(&params);

        let gate_volts = frame.gate_cv
            + if frame.trig_button {
                BUTTON_GATE_VOLTS
            } else {
                0.0
            };

        match self.gate.process(gate_volts) {
            GateEdge::Rising => {
                // Pitch CV is sampled here, once per note.
                let decision = trigger::decide(
                    frame.pitch_cv,
                    controls.slide,
                    controls.accent_high,
                    self.profile.accent_policy,
                );

                self.engine.set_slide_time(decision.slide_time_ms);
                self.active_note = decision.note;

                if decision.glide {
                    self.engine.trim_note_list();
                    self.engine
                        .note_on_portamento(decision.note, decision.velocity);
                } else {
                    // Flush the engine's note queue first so exactly one
                    // note sounds after a hard retrigger.
                    self.engine.all_notes_off();
                    self.engine.note_on(decision.note, decision.velocity);
                }
            }
            GateEdge::Falling => {
                if self.profile.release_emits_note_off {
                    // Zero velocity signals release.
                    self.engine.note_on(self.active_note, 0);
                }
            }
            GateEdge::None => {}
        }

        let out = self.engine.next_sample() * FULL_SCALE_VOLTS;
        self.meter.process(out);

        VoiceOutput {
            left: out,
            right: out,
            lights: self.meter.segments(),
        }
    }

    fn mix(&self, frame: &ControlFrame) -> MixedControls {
        let (accent, accent_high) = mix::mix_accent(
            self.profile.accent_policy,
            frame.accent_knob,
            frame.accent_cv,
        );

        MixedControls {
            cutoff: mix::mix_control(frame.cutoff_knob, frame.cutoff_cv),
            resonance: mix::mix_control(frame.resonance_knob, frame.resonance_cv),
            decay: mix::mix_control(frame.decay_knob, frame.decay_cv),
            env_mod: mix::mix_control(frame.env_mod_knob, frame.env_mod_cv),
            slide: mix::mix_control(frame.slide_knob, frame.slide_cv),
            accent,
            accent_high,
        }
    }

    /// Return the control state to construction values and silence the
    /// engine. The cached sample rate survives; it still matches the host.
    pub fn reset(&mut self) {
        self.gate.reset();
        self.meter.reset();
        self.active_note = PITCH_REF_NOTE;
        self.engine.all_notes_off();
    }

    pub fn profile(&self) -> VoiceProfile {
        self.profile
    }

    pub fn active_note(&self) -> i32 {
        self.active_note
    }

    pub fn meter_level(&self) -> f32 {
        self.meter.level()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }
}
