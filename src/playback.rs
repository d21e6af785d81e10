//! Local playback sink.
//!
//! [AudioSink] is the boundary the demo runner hands audio to, either as one
//! complete buffer or as an incremental chunk sequence. [RodioSink] plays
//! through the default output device; tests substitute recording fakes.

use crate::error::Result;
use std::io::Cursor;

/// Playback boundary. No return value beyond success/failure is consumed.
pub trait AudioSink {
    /// Play one complete audio buffer, blocking until playback ends.
    fn play(&mut self, audio: &[u8]) -> Result<()>;

    /// Accept the next chunk of a streaming synthesis, in arrival order.
    fn play_chunk(&mut self, chunk: &[u8]) -> Result<()>;

    /// The chunk sequence is complete; flush whatever is pending.
    fn finish(&mut self) -> Result<()>;
}

/// [rodio]-backed sink playing through the default output device.
///
/// The device is acquired per call, so construction never fails and machines
/// without audio only fail inside the (non-fatal) demo operation.
#[derive(Default)]
pub struct RodioSink {
    buffered: Vec<u8>,
}

impl RodioSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioSink for RodioSink {
    fn play(&mut self, audio: &[u8]) -> Result<()> {
        let (_stream, handle) = rodio::OutputStream::try_default()?;
        let sink = rodio::Sink::try_new(&handle)?;
        let source = rodio::Decoder::new(Cursor::new(audio.to_vec()))?;
        sink.append(source);
        sink.sleep_until_end();
        Ok(())
    }

    fn play_chunk(&mut self, chunk: &[u8]) -> Result<()> {
        // rodio's Decoder wants complete frames; chunks accumulate until the
        // stream ends and are flushed in finish().
        self.buffered.extend_from_slice(chunk);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.buffered.is_empty() {
            return Ok(());
        }
        let audio = std::mem::take(&mut self.buffered);
        self.play(&audio)
    }
}
