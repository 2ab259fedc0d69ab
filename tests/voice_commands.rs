//! End-to-end command-sequence tests: a `BassVoice` over a recording engine,
//! driven with synthetic gate and CV signals.

use acid_voice::engine::{EngineCommand, RelayEngine};
use acid_voice::io::ControlFrame;
use acid_voice::voice::{BassVoice, VoiceProfile};

const SR: f32 = 44_100.0;

type RecordingVoice = BassVoice<RelayEngine<Vec<EngineCommand>>>;

fn voice(profile: VoiceProfile) -> RecordingVoice {
    BassVoice::new(RelayEngine::recording(), profile, SR)
}

fn note_events(voice: &RecordingVoice) -> Vec<EngineCommand> {
    voice
        .engine()
        .sink()
        .iter()
        .filter(|c| c.is_note_event())
        .copied()
        .collect()
}

fn drain_note_events(voice: &mut RecordingVoice) -> Vec<EngineCommand> {
    let events = note_events(voice);
    voice.engine_mut().sink_mut().clear();
    events
}

#[test]
fn held_gate_triggers_exactly_one_note() {
    let mut v = voice(VoiceProfile::gated());
    let mut frame = ControlFrame::default();
    frame.gate_cv = 8.0;

    for _ in 0..500 {
        v.process(&frame);
    }

    assert_eq!(
        note_events(&v),
        vec![
            EngineCommand::AllNotesOff,
            EngineCommand::NoteOn {
                note: 60,
                velocity: 80
            }
        ]
    );
}

#[test]
fn hard_retrigger_flushes_before_the_new_note() {
    let mut v = voice(VoiceProfile::gated());
    let mut frame = ControlFrame::default();

    frame.gate_cv = 8.0;
    frame.pitch_cv = 0.0;
    v.process(&frame);
    frame.gate_cv = 0.0;
    v.process(&frame);
    drain_note_events(&mut v);

    frame.gate_cv = 8.0;
    frame.pitch_cv = 7.0 / 12.0; // up a fifth
    v.process(&frame);

    assert_eq!(
        drain_note_events(&mut v),
        vec![
            EngineCommand::AllNotesOff,
            EngineCommand::NoteOn {
                note: 67,
                velocity: 80
            }
        ]
    );
}

#[test]
fn slide_path_trims_instead_of_flushing() {
    let mut v = voice(VoiceProfile::gated());
    let mut frame = ControlFrame::default();
    frame.slide_knob = 0.2;
    frame.pitch_cv = -1.0;
    frame.gate_cv = 8.0;

    v.process(&frame);

    // Slide time lands on the engine before the note command.
    let commands = v.engine().sink();
    let slide_at = commands
        .iter()
        .position(|c| matches!(c, EngineCommand::SetSlideTime(_)))
        .unwrap();
    let note_at = commands
        .iter()
        .position(|c| matches!(c, EngineCommand::NoteOnPortamento { .. }))
        .unwrap();
    assert!(slide_at < note_at);
    assert_eq!(commands[slide_at], EngineCommand::SetSlideTime(80.0));

    assert_eq!(
        note_events(&v),
        vec![
            EngineCommand::TrimNoteList,
            EngineCommand::NoteOnPortamento {
                note: 48,
                velocity: 80
            }
        ]
    );
}

#[test]
fn non_slid_notes_get_the_fixed_retrigger_glide() {
    let mut v = voice(VoiceProfile::gated());
    let mut frame = ControlFrame::default();
    frame.gate_cv = 8.0;

    v.process(&frame);

    assert!(v
        .engine()
        .sink()
        .contains(&EngineCommand::SetSlideTime(60.0)));
}

#[test]
fn gated_profile_releases_with_zero_velocity() {
    let mut v = voice(VoiceProfile::gated());
    let mut frame = ControlFrame::default();
    frame.gate_cv = 8.0;
    frame.pitch_cv = 1.0;

    v.process(&frame);
    drain_note_events(&mut v);

    frame.gate_cv = 0.0;
    v.process(&frame);

    assert_eq!(
        drain_note_events(&mut v),
        vec![EngineCommand::NoteOn {
            note: 72,
            velocity: 0
        }]
    );
}

#[test]
fn triggered_profile_ignores_the_falling_edge() {
    let mut v = voice(VoiceProfile::triggered());
    let mut frame = ControlFrame::default();
    frame.gate_cv = 8.0;

    v.process(&frame);
    drain_note_events(&mut v);

    frame.gate_cv = 0.0;
    v.process(&frame);

    assert!(drain_note_events(&mut v).is_empty());
}

#[test]
fn triggered_profile_survives_a_noisy_trigger_line() {
    let mut v = voice(VoiceProfile::triggered());
    let mut frame = ControlFrame::default();

    // Rise, then chatter between 1 V and 3 V without a real release.
    for &volts in &[8.0, 1.0, 3.0, 1.0, 3.0] {
        frame.gate_cv = volts;
        v.process(&frame);
    }

    let ons = note_events(&v)
        .iter()
        .filter(|c| matches!(c, EngineCommand::NoteOn { .. } | EngineCommand::NoteOnPortamento { .. }))
        .count();
    assert_eq!(ons, 1);
}

#[test]
fn accent_velocities_differ_between_profiles() {
    // Gated: CV gate above 2.5 V accents the note at full velocity.
    let mut v = voice(VoiceProfile::gated());
    let mut frame = ControlFrame::default();
    frame.accent_cv = 5.0;
    frame.gate_cv = 8.0;
    v.process(&frame);
    assert!(note_events(&v).contains(&EngineCommand::NoteOn {
        note: 60,
        velocity: 127
    }));

    // Triggered: the mixed accent value crosses the 0.5 threshold instead.
    let mut v = voice(VoiceProfile::triggered());
    let mut frame = ControlFrame::default();
    frame.accent_knob = 0.7;
    frame.gate_cv = 8.0;
    v.process(&frame);
    assert!(note_events(&v).contains(&EngineCommand::NoteOn {
        note: 60,
        velocity: 127
    }));

    // And a plain triggered note sits at 100.
    let mut v = voice(VoiceProfile::triggered());
    let mut frame = ControlFrame::default();
    frame.gate_cv = 8.0;
    v.process(&frame);
    assert!(note_events(&v).contains(&EngineCommand::NoteOn {
        note: 60,
        velocity: 100
    }));
}

#[test]
fn pitch_cv_is_sampled_at_the_edge_only() {
    let mut v = voice(VoiceProfile::gated());
    let mut frame = ControlFrame::default();
    frame.gate_cv = 8.0;
    frame.pitch_cv = 1.0;

    v.process(&frame);
    assert_eq!(v.active_note(), 72);

    // Wiggling the pitch CV while the gate holds changes nothing.
    frame.pitch_cv = -2.0;
    v.process(&frame);
    assert_eq!(v.active_note(), 72);
}

#[test]
fn params_follow_the_mode_switch_without_leftover_state() {
    use acid_voice::control::Mode;

    let mut v = voice(VoiceProfile::gated());
    let mut frame = ControlFrame::default();
    frame.cutoff_knob = 1.0;

    for (mode, expected_hz) in [
        (Mode::Restricted, 2000.0),
        (Mode::Extended, 8000.0),
        (Mode::Standard, 4000.0),
    ] {
        frame.mode = mode;
        v.process(&frame);

        let last_params = v
            .engine()
            .sink()
            .iter()
            .rev()
            .find_map(|c| match c {
                EngineCommand::SetParams(p) => Some(*p),
                _ => None,
            })
            .unwrap();
        assert_eq!(last_params.cutoff_hz, expected_hz);
    }
}

#[test]
fn output_is_mono_summed_and_lights_start_dark() {
    let mut v = voice(VoiceProfile::gated());
    let out = v.process(&ControlFrame::default());

    assert_eq!(out.left, out.right);
    assert_eq!(out.lights, [0.0, 0.0, 0.0]);
}
