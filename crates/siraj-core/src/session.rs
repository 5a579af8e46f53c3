// crates/siraj-core/src/session.rs

//! Wake-word driven conversation loop.
//!
//! A [`Session`] is fed one transcript at a time. It ignores everything
//! until the wake word is heard, prompts for a question, answers it and
//! goes back to waiting.

use crate::assistant::{Assistant, QueryError, ResolutionResult};
use crate::error::Result;
use crate::text::fold_key;
use crate::voice::{Synthesizer, Transcriber};

/// Where the session is in the current exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the wake word
    AwaitingWake,
    /// Wake word heard, waiting for the question
    AwaitingQuery,
    Extracting,
    Resolving,
    LookingUp,
    /// Reply ready to be spoken
    Responding,
}

pub struct Session<'a> {
    assistant: Assistant<'a>,
    wake_word: String,
    state: SessionState,
    // States entered since the last question started.
    trace: Vec<SessionState>,
}

impl<'a> Session<'a> {
    pub fn new(assistant: Assistant<'a>, wake_word: &str) -> Self {
        let wake_word = fold_key(wake_word);
        tracing::debug!(wake_word = %wake_word, "session initialized");
        Self {
            assistant,
            wake_word,
            state: SessionState::AwaitingWake,
            trace: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// States walked through by the most recent question, ending back at
    /// [`SessionState::AwaitingWake`].
    pub fn last_trace(&self) -> &[SessionState] {
        &self.trace
    }

    pub fn assistant(&self) -> &Assistant<'a> {
        &self.assistant
    }

    /// Line spoken once at start-up.
    pub fn greeting(&self) -> &str {
        &self.assistant.messages().greeting
    }

    pub fn farewell(&self) -> &str {
        &self.assistant.messages().farewell
    }

    /// True when the folded transcript contains the folded wake word.
    pub fn hears_wake_word(&self, transcript: &str) -> bool {
        !self.wake_word.is_empty() && fold_key(transcript).contains(&self.wake_word)
    }

    /// Advances the state machine with one transcript.
    ///
    /// Returns the text to speak, or `None` when the transcript is ignored
    /// (no wake word yet).
    pub fn handle_transcript(&mut self, transcript: &str) -> Option<String> {
        match self.state {
            SessionState::AwaitingWake => {
                if !self.hears_wake_word(transcript) {
                    return None;
                }
                self.transition(SessionState::AwaitingQuery);
                Some(self.assistant.messages().prompt.clone())
            }
            _ => {
                let reply = self.answer_query(transcript);
                self.transition(SessionState::AwaitingWake);
                Some(reply)
            }
        }
    }

    /// Transcribes `audio`, advances the session and synthesizes the reply.
    pub fn run_turn<T, S>(
        &mut self,
        audio: &[u8],
        transcriber: &mut T,
        synthesizer: &mut S,
    ) -> Result<Option<Vec<u8>>>
    where
        T: Transcriber + ?Sized,
        S: Synthesizer + ?Sized,
    {
        let transcript = transcriber.transcribe(audio)?;
        match self.handle_transcript(&transcript) {
            Some(reply) => {
                tracing::info!(reply = %reply, "speaking");
                synthesizer.synthesize(&reply).map(Some)
            }
            None => Ok(None),
        }
    }

    fn answer_query(&mut self, utterance: &str) -> String {
        self.trace.clear();
        let outcome = self.run_query(utterance);
        self.transition(SessionState::Responding);

        let messages = self.assistant.messages();
        match outcome {
            Ok(result) => {
                let name = result.matched_name.as_deref().unwrap_or_default();
                messages.render_found(name, &result.route)
            }
            Err(err) => messages.render_error(&err),
        }
    }

    // Enters each state right before the step it names runs.
    fn run_query(&mut self, utterance: &str) -> std::result::Result<ResolutionResult, QueryError> {
        self.transition(SessionState::Extracting);
        let query = self.assistant.extract_query(utterance)?;

        self.transition(SessionState::Resolving);
        let resolution = self.assistant.resolve_query(query)?;

        self.transition(SessionState::LookingUp);
        self.assistant.lookup_route(resolution)
    }

    fn transition(&mut self, next: SessionState) {
        tracing::trace!(from = ?self.state, to = ?next, "session transition");
        self.state = next;
        self.trace.push(next);
    }
}
