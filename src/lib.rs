pub mod control; // Allocation-free control-rate primitives
pub mod engine; // Synthesis-engine boundary
pub mod io;
pub mod voice; // Per-sample voice core

/// Nominal audio full scale at the host boundary, in volts.
pub const FULL_SCALE_VOLTS: f32 = 5.0;
/// A gate or trigger signal counts as "high" above this voltage.
pub const GATE_HIGH_VOLTS: f32 = 2.5;
