//! Control-rate primitives used by the voice core.
//!
//! These components are allocation-free and realtime-safe, so the voice can
//! run them once per sample on the audio thread. They stay focused on the
//! control math (mixing, range scaling, edge detection, metering) and leave
//! orchestration to the voice layer.

/// Gate/trigger edge detection with selectable policies.
pub mod gate;
/// Decaying peak meter behind the panel VU lights.
pub mod meter;
/// Knob and control-voltage merging.
pub mod mix;
/// Mode-dependent parameter range tables and physical scaling.
pub mod ranges;

pub use gate::GateEdge;
pub use ranges::Mode;
