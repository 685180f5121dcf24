//! Multi-clip playback of a podcast script.
//!
//! The sequencer is an explicit state machine (`idle / playing / paused`)
//! with the queue cursor as explicit state, so pause and resume behave the
//! same whether they land mid-clip or between clips:
//!
//! - pause during a clip suspends the session; resume resumes it in place;
//! - pause during the synthesis fetch (no session yet) makes the loop exit
//!   after the fetch returns, cursor intact; resume re-enters the loop at
//!   the cursor;
//! - stop halts any session, resets the cursor, and returns to idle.

use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::provider::{SpeechSynthesizer, Voice};
use crate::types::PodcastLine;

use super::decode::SAMPLE_RATE;
use super::playback::{ClipOutcome, Player};

/// Sequencer transport state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequencerState {
    #[default]
    Idle,
    Playing,
    Paused,
}

#[derive(Default)]
struct Transport {
    state: SequencerState,
    /// Index of the line being played (or fetched). `None` when idle.
    cursor: Option<usize>,
    /// Bumped whenever a new queue loop starts or playback stops, so a
    /// loop that was parked on a synthesis fetch across a pause/resume
    /// cycle can detect it has been superseded and exit.
    epoch: u64,
}

/// Plays a podcast script line by line, strictly in order.
pub struct PodcastSequencer {
    synth: Arc<dyn SpeechSynthesizer>,
    player: Arc<Player>,
    lines: Vec<PodcastLine>,
    transport: Mutex<Transport>,
}

impl PodcastSequencer {
    pub fn new(
        synth: Arc<dyn SpeechSynthesizer>,
        player: Arc<Player>,
        lines: Vec<PodcastLine>,
    ) -> Self {
        Self {
            synth,
            player,
            lines,
            transport: Mutex::new(Transport::default()),
        }
    }

    pub fn state(&self) -> SequencerState {
        self.transport.lock().unwrap().state
    }

    /// Index of the line currently playing, for UI highlighting.
    pub fn current_line(&self) -> Option<usize> {
        self.transport.lock().unwrap().cursor
    }

    /// Start playback, or resume it after a pause.
    ///
    /// When paused mid-clip the suspended session resumes in place and this
    /// call returns immediately (the original `play` call is still driving
    /// the queue). Otherwise the queue loop runs here until exhaustion,
    /// pause, or stop.
    pub async fn play(&self) {
        let epoch;
        {
            let mut transport = self.transport.lock().unwrap();
            match transport.state {
                SequencerState::Playing => return,
                SequencerState::Paused if self.player.has_session() => {
                    transport.state = SequencerState::Playing;
                    drop(transport);
                    self.player.resume();
                    return;
                }
                _ => {
                    transport.state = SequencerState::Playing;
                    transport.epoch += 1;
                    epoch = transport.epoch;
                }
            }
        }
        self.run_queue(epoch).await;
    }

    /// Pause playback, keeping the cursor where it is.
    pub fn pause(&self) {
        let mut transport = self.transport.lock().unwrap();
        if transport.state == SequencerState::Playing {
            transport.state = SequencerState::Paused;
        }
        drop(transport);
        self.player.pause();
    }

    /// Stop playback, reset the cursor, and return to idle.
    pub fn stop(&self) {
        let mut transport = self.transport.lock().unwrap();
        transport.state = SequencerState::Idle;
        transport.cursor = None;
        transport.epoch += 1;
        drop(transport);
        self.player.stop();
    }

    /// True while `epoch` still owns the queue and playback is running.
    fn is_live(&self, epoch: u64) -> bool {
        let transport = self.transport.lock().unwrap();
        transport.epoch == epoch && transport.state == SequencerState::Playing
    }

    async fn run_queue(&self, epoch: u64) {
        let start = self.current_line().unwrap_or(0);

        for index in start..self.lines.len() {
            self.set_cursor(index);

            let line = &self.lines[index];
            let voice = Voice::for_speaker(line.speaker);

            // The one suspension point outside playback itself.
            let payload = match self.synth.synthesize(&line.text, voice).await {
                Ok(payload) => payload,
                Err(e) => {
                    warn!(line = index, error = %e, "Speech synthesis failed; skipping line");
                    None
                }
            };

            // A pause or stop may have landed during the fetch, before any
            // session exists. Exit without playing; the cursor stays put so
            // resume re-enters here.
            if !self.is_live(epoch) {
                return;
            }

            if let Some(payload) = payload {
                match self.player.start_clip(&payload, SAMPLE_RATE) {
                    Ok(handle) => {
                        let outcome = handle.outcome().await;
                        self.player.clear();
                        if outcome == ClipOutcome::Stopped {
                            return;
                        }
                    }
                    Err(e) => {
                        warn!(line = index, error = %e, "Clip playback failed; skipping line");
                    }
                }
            }

            // Pause landed exactly on a clip boundary.
            if !self.is_live(epoch) {
                return;
            }
        }

        // Queue exhausted.
        let mut transport = self.transport.lock().unwrap();
        if transport.epoch == epoch {
            transport.state = SequencerState::Idle;
            transport.cursor = None;
        }
    }

    fn set_cursor(&self, index: usize) {
        self.transport.lock().unwrap().cursor = Some(index);
    }
}
