#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::GATE_HIGH_VOLTS;

/*
Gate edge detection
===================

The voice listens to one combined gate voltage and reacts only to edges:
a rising edge starts a note, a falling edge may release it.

Two detection policies cover the two hardware revisions:

  Instant      A plain threshold compare against 2.5 V, remembered across
               one sample. Every sign change is an edge. Cheap and exact,
               but a noisy gate line can chatter around the threshold.

  Hysteretic   A Schmitt trigger. The detector only rises after the signal
               clears the high threshold, and only falls after it drops
               below the low threshold, so noise inside the band is ignored.

        volts
          2.5 ───────────╱───────────────  high threshold (rise here)
                        ╱        ╲
          0.5 ─────────╱──────────╲──────  low threshold (fall here)
                      ╱            ╲

Both start "low": a signal already high at the first sample produces a
rising edge, matching a voice whose gate state is created unset.
*/

/// Hysteretic detection falls only below this voltage.
pub const GATE_LOW_VOLTS: f32 = 0.5;

/// Edge-detection policy for the combined gate signal.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePolicy {
    Instant,
    Hysteretic,
}

/// What the gate did this sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEdge {
    None,
    Rising,
    Falling,
}

/// Per-sample gate edge detector. One sample of memory, no debouncing
/// beyond what the policy itself provides.
#[derive(Debug, Clone, Copy)]
pub struct GateDetector {
    policy: EdgePolicy,
    high: bool,
}

impl GateDetector {
    pub fn new(policy: EdgePolicy) -> Self {
        Self {
            policy,
            high: false,
        }
    }

    /// Feed one sample of the combined gate voltage, get the edge (if any).
    pub fn process(&mut self, volts: f32) -> GateEdge {
        let next = match self.policy {
            EdgePolicy::Instant => volts > GATE_HIGH_VOLTS,
            EdgePolicy::Hysteretic => {
                if self.high {
                    // Stay high until the signal drops out of the band.
                    volts >= GATE_LOW_VOLTS
                } else {
                    volts > GATE_HIGH_VOLTS
                }
            }
        };

        let edge = match (self.high, next) {
            (false, true) => GateEdge::Rising,
            (true, false) => GateEdge::Falling,
            _ => GateEdge::None,
        };

        self.high = next;
        edge
    }

    pub fn is_high(&self) -> bool {
        self.high
    }

    pub fn reset(&mut self) {
        self.high = false;
    }
}
