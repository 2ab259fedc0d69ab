use crate::engine::{CommandSink, EngineCommand, EngineParams, ToneEngine};

/// A `ToneEngine` that forwards every call into a command sink and renders
/// silence locally.
///
/// Over a `Vec` sink this is the recording engine the tests assert command
/// sequences against; over an `rtrb` producer it bridges the control core to
/// an engine running on another thread.
pub struct RelayEngine<S: CommandSink> {
    sink: S,
}

impl<S: CommandSink> RelayEngine<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl RelayEngine<Vec<EngineCommand>> {
    /// Recording engine over a plain command log.
    pub fn recording() -> Self {
        Self::new(Vec::new())
    }
}

impl<S: CommandSink> ToneEngine for RelayEngine<S> {
    fn set_sample_rate(&mut self, hz: f32) {
        self.sink.push(EngineCommand::SetSampleRate(hz));
    }

    fn apply_params(&mut self, params: &EngineParams) {
        self.sink.push(EngineCommand::SetParams(*params));
    }

    fn set_slide_time(&mut self, ms: f32) {
        self.sink.push(EngineCommand::SetSlideTime(ms));
    }

    fn note_on(&mut self, note: i32, velocity: u8) {
        self.sink.push(EngineCommand::NoteOn { note, velocity });
    }

    fn note_on_portamento(&mut self, note: i32, velocity: u8) {
        self.sink
            .push(EngineCommand::NoteOnPortamento { note, velocity });
    }

    fn all_notes_off(&mut self) {
        self.sink.push(EngineCommand::AllNotesOff);
    }

    fn trim_note_list(&mut self) {
        self.sink.push(EngineCommand::TrimNoteList);
    }

    fn next_sample(&mut self) -> f32 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let mut engine = RelayEngine::recording();
        engine.set_slide_time(80.0);
        engine.trim_note_list();
        engine.note_on_portamento(48, 127);

        assert_eq!(
            engine.sink(),
            &vec![
                EngineCommand::SetSlideTime(80.0),
                EngineCommand::TrimNoteList,
                EngineCommand::NoteOnPortamento {
                    note: 48,
                    velocity: 127
                },
            ]
        );
    }

    #[cfg(feature = "rtrb")]
    #[test]
    fn forwards_over_a_ring_buffer() {
        let (producer, mut consumer) = rtrb::RingBuffer::new(8);
        let mut engine = RelayEngine::new(producer);

        engine.all_notes_off();
        engine.note_on(60, 80);

        assert_eq!(consumer.pop(), Ok(EngineCommand::AllNotesOff));
        assert_eq!(
            consumer.pop(),
            Ok(EngineCommand::NoteOn {
                note: 60,
                velocity: 80
            })
        );
        assert!(consumer.pop().is_err());
    }
}
