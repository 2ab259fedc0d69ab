#[cfg(feature = "rtrb")]
use rtrb::Producer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::engine::EngineParams;

/// Every engine call, as data. Lets the control core's output be logged,
/// asserted on, or shipped across a thread boundary.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineCommand {
    SetSampleRate(f32),
    SetParams(EngineParams),
    SetSlideTime(f32),
    NoteOn { note: i32, velocity: u8 },
    NoteOnPortamento { note: i32, velocity: u8 },
    AllNotesOff,
    TrimNoteList,
}

impl EngineCommand {
    /// True for the note-event commands, false for parameter traffic.
    pub fn is_note_event(&self) -> bool {
        matches!(
            self,
            EngineCommand::NoteOn { .. }
                | EngineCommand::NoteOnPortamento { .. }
                | EngineCommand::AllNotesOff
                | EngineCommand::TrimNoteList
        )
    }
}

/// Receives the command stream from a `RelayEngine`.
pub trait CommandSink: Send {
    fn push(&mut self, command: EngineCommand);
}

impl CommandSink for Vec<EngineCommand> {
    fn push(&mut self, command: EngineCommand) {
        Vec::push(self, command);
    }
}

#[cfg(feature = "rtrb")]
impl CommandSink for Producer<EngineCommand> {
    fn push(&mut self, command: EngineCommand) {
        // A full ring drops the command; the audio thread must not block.
        let _ = Producer::push(self, command);
    }
}
