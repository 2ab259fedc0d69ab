//! Benchmarks for the per-sample voice step.
//!
//! Run with: cargo bench
//!
//! The voice runs once per audio sample on a realtime thread, so the step
//! must stay far inside the sample period (~22.7 µs at 44.1 kHz). Blocks of
//! steps are measured to keep timer overhead out of the numbers.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use acid_voice::engine::RelayEngine;
use acid_voice::io::ControlFrame;
use acid_voice::voice::{BassVoice, VoiceProfile};

/// Common audio block sizes.
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

fn bench_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("voice/process");

    for (name, profile) in [
        ("gated", VoiceProfile::gated()),
        ("triggered", VoiceProfile::triggered()),
    ] {
        for &size in BLOCK_SIZES {
            let mut voice = BassVoice::new(RelayEngine::recording(), profile, 44_100.0);
            let mut frame = ControlFrame::default();
            frame.gate_cv = 8.0;

            group.bench_with_input(
                BenchmarkId::new(name, size),
                &size,
                |b, &size| {
                    b.iter(|| {
                        // Alternate the gate so edges and held samples both
                        // appear in the measured path.
                        for i in 0..size {
                            frame.gate_cv = if (i / 32) % 2 == 0 { 8.0 } else { 0.0 };
                            black_box(voice.process(black_box(&frame)));
                        }
                        voice.engine_mut().sink_mut().clear();
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_command_log_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("voice/command_log");

    for &size in BLOCK_SIZES {
        group.bench_with_input(BenchmarkId::new("drain", size), &size, |b, &size| {
            let mut voice =
                BassVoice::new(RelayEngine::recording(), VoiceProfile::gated(), 44_100.0);
            let frame = ControlFrame::default();

            b.iter(|| {
                for _ in 0..size {
                    voice.process(black_box(&frame));
                }
                let notes = voice
                    .engine()
                    .sink()
                    .iter()
                    .filter(|c| c.is_note_event())
                    .count();
                voice.engine_mut().sink_mut().clear();
                black_box(notes)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_process, bench_command_log_drain);
criterion_main!(benches);
