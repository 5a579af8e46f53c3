// crates/siraj-core/src/voice.rs

//! Speech boundary.
//!
//! Recognition and synthesis live outside this crate; they plug in through
//! these two traits. The text adapters treat the "audio" as UTF-8 so the
//! whole loop can run from a terminal or a test.

use crate::error::{Result, SirajError};

/// Speech-to-text.
pub trait Transcriber {
    fn transcribe(&mut self, audio: &[u8]) -> Result<String>;
}

/// Text-to-speech.
pub trait Synthesizer {
    fn synthesize(&mut self, text: &str) -> Result<Vec<u8>>;
}

/// Reads the input bytes as an already-transcribed UTF-8 line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextTranscriber;

impl Transcriber for TextTranscriber {
    fn transcribe(&mut self, audio: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(audio)
            .map_err(|e| SirajError::Voice(format!("transcript is not UTF-8: {e}")))?;
        Ok(text.trim().to_owned())
    }
}

/// Emits the reply text as UTF-8 bytes, newline terminated.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextSynthesizer;

impl Synthesizer for TextSynthesizer {
    fn synthesize(&mut self, text: &str) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(text.len() + 1);
        out.extend_from_slice(text.as_bytes());
        out.push(b'\n');
        Ok(out)
    }
}
