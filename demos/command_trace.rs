//! Drive a short acid bassline through the voice and print every note
//! command it sends to the engine.
//!
//! Run with: cargo run --example command_trace

use acid_voice::engine::RelayEngine;
use acid_voice::io::ControlFrame;
use acid_voice::voice::{BassVoice, VoiceProfile};

const SAMPLE_RATE: f32 = 44_100.0;
const STEP_SAMPLES: usize = 5_512; // sixteenth notes at 120 BPM
const GATE_SAMPLES: usize = 2_756;

fn main() {
    let mut voice = BassVoice::new(RelayEngine::recording(), VoiceProfile::gated(), SAMPLE_RATE);

    // (pitch volts, slide, accent) per step; a classic up-and-slide figure.
    let steps: &[(f32, f32, bool)] = &[
        (0.0, 0.0, true),
        (0.0, 0.0, false),
        (3.0 / 12.0, 0.0, false),
        (7.0 / 12.0, 0.4, false),
        (1.0, 0.0, true),
        (7.0 / 12.0, 0.3, false),
        (3.0 / 12.0, 0.0, false),
        (-2.0 / 12.0, 0.0, false),
    ];

    let mut frame = ControlFrame::default();
    let mut rendered = 0usize;

    for &(pitch, slide, accent) in steps {
        frame.pitch_cv = pitch;
        frame.slide_knob = slide;
        frame.accent_cv = if accent { 10.0 } else { 0.0 };

        for i in 0..STEP_SAMPLES {
            frame.gate_cv = if i < GATE_SAMPLES { 8.0 } else { 0.0 };
            voice.process(&frame);
            rendered += 1;
        }
    }

    println!("Rendered {rendered} samples over {} steps", steps.len());
    for command in voice.engine().sink().iter().filter(|c| c.is_note_event()) {
        println!("{command:?}");
    }
}
