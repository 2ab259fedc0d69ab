//! Feed the peak meter a decaying burst and print the three VU segments
//! as text bars.
//!
//! Run with: cargo run --example meter_trace

use acid_voice::control::meter::PeakMeter;

fn main() {
    let mut meter = PeakMeter::new();

    // One loud burst, then silence; sample the meter every 50 ms of decay.
    meter.process(4.5);
    for tick in 0..20 {
        let [s1, s2, s3] = meter.segments();
        println!(
            "{:>4} ms  level {:.3}  [{}] [{}] [{}]",
            tick * 50,
            meter.level(),
            bar(s1),
            bar(s2),
            bar(s3)
        );

        for _ in 0..2_205 {
            meter.process(0.0);
        }
    }
}

fn bar(brightness: f32) -> String {
    let lit = (brightness * 8.0).round() as usize;
    format!("{:#<lit$}{:.<rest$}", "", "", lit = lit, rest = 8 - lit)
}
