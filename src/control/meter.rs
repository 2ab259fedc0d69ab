use crate::FULL_SCALE_VOLTS;

/// Linear peak falloff per sample. At 44.1 kHz a full-scale peak takes
/// roughly 4.4 seconds to reach zero; the rate is fixed in amplitude per
/// sample, so it scales with the host sample rate.
pub const PEAK_DECAY_PER_SAMPLE: f32 = 0.0001;

/// Peak follower behind the three-segment VU display.
///
/// Attack is instantaneous (a single sample takes the meter to its level),
/// decay is a constant linear fall that never goes below zero.
#[derive(Debug, Clone, Copy)]
pub struct PeakMeter {
    level: f32,
}

impl PeakMeter {
    pub fn new() -> Self {
        Self { level: 0.0 }
    }

    /// Track one output sample (host volts, ±5 V full scale).
    /// Returns the updated peak level in [0, 1].
    pub fn process(&mut self, volts: f32) -> f32 {
        let abs = volts.abs() / FULL_SCALE_VOLTS;
        if abs > self.level {
            self.level = abs;
        } else {
            self.level = (self.level - PEAK_DECAY_PER_SAMPLE).max(0.0);
        }
        self.level
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    /// Brightness for the three panel segments, each in [0, 1].
    ///
    /// Segment 1 ramps over 0..0.1, segment 2 over 0.1..0.4, segment 3 over
    /// 0.4..0.7; each saturates at the top of its band.
    pub fn segments(&self) -> [f32; 3] {
        let level = self.level;
        [
            if level > 0.1 { 1.0 } else { level * 10.0 },
            if level > 0.4 {
                1.0
            } else if level > 0.1 {
                (level - 0.1) * 3.33
            } else {
                0.0
            },
            if level > 0.7 {
                1.0
            } else if level > 0.4 {
                (level - 0.4) * 3.33
            } else {
                0.0
            },
        ]
    }

    pub fn reset(&mut self) {
        self.level = 0.0;
    }
}

impl Default for PeakMeter {
    fn default() -> Self {
        Self::new()
    }
}
