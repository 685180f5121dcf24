use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use lectern::audio::{
    AudioOutput, ClipOutcome, PlaybackHandle, Player, PodcastSequencer, SequencerState,
    SessionControl,
};
use lectern::error::{LecternError, Result};
use lectern::provider::{SpeechSynthesizer, Voice};
use lectern::types::{PodcastLine, Speaker};
use tokio::sync::{mpsc, oneshot, Notify};

fn pcm_payload() -> String {
    // Two 16-bit LE samples.
    STANDARD.encode([0x00, 0x40, 0x00, 0xC0])
}

fn script(lines: &[&str]) -> Vec<PodcastLine> {
    lines
        .iter()
        .enumerate()
        .map(|(i, text)| PodcastLine {
            speaker: if i % 2 == 0 {
                Speaker::Host
            } else {
                Speaker::Guest
            },
            text: (*text).to_string(),
        })
        .collect()
}

// A synthesizer stub scripted per line text.
struct StubSynth {
    /// Line texts that synthesize to nothing (`Ok(None)`).
    silent: Vec<&'static str>,
    /// Line texts whose synthesis fails outright.
    failing: Vec<&'static str>,
}

impl StubSynth {
    fn ok() -> Self {
        Self {
            silent: Vec::new(),
            failing: Vec::new(),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for StubSynth {
    async fn synthesize(&self, text: &str, _voice: Voice) -> Result<Option<String>> {
        if self.failing.contains(&text) {
            return Err(LecternError::api(500, "synthesis down"));
        }
        if self.silent.contains(&text) {
            return Ok(None);
        }
        Ok(Some(pcm_payload()))
    }
}

// An output session the test can observe and complete by hand.
struct StubSession {
    paused: AtomicBool,
    resumed: AtomicBool,
    done: Mutex<Option<oneshot::Sender<()>>>,
}

impl StubSession {
    fn complete(&self) {
        if let Some(done) = self.done.lock().unwrap().take() {
            let _ = done.send(());
        }
    }
}

impl SessionControl for StubSession {
    fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
    }

    fn resume(&self) {
        self.resumed.store(true, Ordering::SeqCst);
    }

    fn stop(&self) {
        // Dropping the sender unsent marks the session stopped.
        self.done.lock().unwrap().take();
    }
}

/// Records every started session; completes them immediately when
/// `auto_complete` is set, otherwise leaves completion to the test.
struct StubOutput {
    auto_complete: bool,
    sessions: Mutex<Vec<Arc<StubSession>>>,
}

impl StubOutput {
    fn auto() -> Self {
        Self {
            auto_complete: true,
            sessions: Mutex::new(Vec::new()),
        }
    }

    fn manual() -> Self {
        Self {
            auto_complete: false,
            sessions: Mutex::new(Vec::new()),
        }
    }

    fn started(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    fn session(&self, index: usize) -> Arc<StubSession> {
        Arc::clone(&self.sessions.lock().unwrap()[index])
    }

    async fn wait_for_session(&self, index: usize) -> Arc<StubSession> {
        loop {
            if self.started() > index {
                return self.session(index);
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    }
}

impl AudioOutput for StubOutput {
    fn start(&self, _samples: Vec<f32>, _sample_rate: u32) -> Result<PlaybackHandle> {
        let (done_tx, done_rx) = oneshot::channel();
        let session = Arc::new(StubSession {
            paused: AtomicBool::new(false),
            resumed: AtomicBool::new(false),
            done: Mutex::new(Some(done_tx)),
        });
        if self.auto_complete {
            session.complete();
        }
        self.sessions.lock().unwrap().push(Arc::clone(&session));
        Ok(PlaybackHandle::new(session, done_rx))
    }
}

fn sequencer(
    synth: StubSynth,
    output: Arc<StubOutput>,
    lines: Vec<PodcastLine>,
) -> PodcastSequencer {
    PodcastSequencer::new(Arc::new(synth), Arc::new(Player::new(output)), lines)
}

#[tokio::test]
async fn plays_every_line_in_order_then_returns_to_idle() {
    let output = Arc::new(StubOutput::auto());
    let seq = sequencer(StubSynth::ok(), output.clone(), script(&["a", "b", "c"]));

    seq.play().await;

    assert_eq!(output.started(), 3);
    assert_eq!(seq.state(), SequencerState::Idle);
    assert_eq!(seq.current_line(), None);
}

#[tokio::test]
async fn skips_lines_that_synthesize_to_nothing() {
    let output = Arc::new(StubOutput::auto());
    let synth = StubSynth {
        silent: vec!["b"],
        failing: Vec::new(),
    };
    let seq = sequencer(synth, output.clone(), script(&["a", "b", "c"]));

    seq.play().await;

    assert_eq!(output.started(), 2);
    assert_eq!(seq.state(), SequencerState::Idle);
}

#[tokio::test]
async fn synthesis_failure_skips_the_line_and_continues() {
    let output = Arc::new(StubOutput::auto());
    let synth = StubSynth {
        silent: Vec::new(),
        failing: vec!["a"],
    };
    let seq = sequencer(synth, output.clone(), script(&["a", "b"]));

    seq.play().await;

    assert_eq!(output.started(), 1);
    assert_eq!(seq.state(), SequencerState::Idle);
}

#[tokio::test]
async fn stop_mid_clip_resets_cursor_and_returns_to_idle() {
    let output = Arc::new(StubOutput::manual());
    let seq = Arc::new(sequencer(
        StubSynth::ok(),
        output.clone(),
        script(&["a", "b", "c"]),
    ));

    let run = tokio::spawn({
        let seq = Arc::clone(&seq);
        async move { seq.play().await }
    });

    output.wait_for_session(0).await;
    seq.stop();
    run.await.unwrap();

    assert_eq!(output.started(), 1);
    assert_eq!(seq.state(), SequencerState::Idle);
    assert_eq!(seq.current_line(), None);
}

#[tokio::test]
async fn completion_signal_never_fires_for_a_stopped_clip() {
    let output = StubOutput::manual();
    let handle = output.start(vec![0.0, 0.5], 24_000).unwrap();

    handle.stop();

    let waited =
        tokio::time::timeout(Duration::from_millis(20), handle.finished()).await;
    assert!(waited.is_err(), "finished() resolved after stop");
}

#[tokio::test]
async fn outcome_distinguishes_stop_from_natural_end() {
    let output = StubOutput::manual();

    let stopped = output.start(vec![0.0], 24_000).unwrap();
    stopped.stop();
    assert_eq!(stopped.outcome().await, ClipOutcome::Stopped);

    let completed = output.start(vec![0.0], 24_000).unwrap();
    output.session(1).complete();
    assert_eq!(completed.outcome().await, ClipOutcome::Completed);
}

#[tokio::test]
async fn pause_mid_clip_resumes_in_place_without_restarting() {
    let output = Arc::new(StubOutput::manual());
    let seq = Arc::new(sequencer(
        StubSynth::ok(),
        output.clone(),
        script(&["a", "b"]),
    ));

    let run = tokio::spawn({
        let seq = Arc::clone(&seq);
        async move { seq.play().await }
    });

    let first = output.wait_for_session(0).await;

    seq.pause();
    assert_eq!(seq.state(), SequencerState::Paused);
    assert!(first.paused.load(Ordering::SeqCst));

    // Resume goes to the suspended session; no new clip starts.
    seq.play().await;
    assert_eq!(seq.state(), SequencerState::Playing);
    assert!(first.resumed.load(Ordering::SeqCst));
    assert_eq!(output.started(), 1);

    first.complete();
    output.wait_for_session(1).await.complete();
    run.await.unwrap();

    assert_eq!(output.started(), 2);
    assert_eq!(seq.state(), SequencerState::Idle);
}

// Synthesizer that parks the first fetch of one line until released.
struct GatedSynth {
    gate_text: &'static str,
    gated_once: AtomicBool,
    fetch_started: mpsc::UnboundedSender<String>,
    release: Arc<Notify>,
}

#[async_trait]
impl SpeechSynthesizer for GatedSynth {
    async fn synthesize(&self, text: &str, _voice: Voice) -> Result<Option<String>> {
        let _ = self.fetch_started.send(text.to_string());
        if text == self.gate_text && !self.gated_once.swap(true, Ordering::SeqCst) {
            self.release.notified().await;
        }
        Ok(Some(pcm_payload()))
    }
}

#[tokio::test]
async fn pause_during_fetch_exits_and_resume_reenters_at_the_same_line() {
    let output = Arc::new(StubOutput::auto());
    let (fetch_tx, mut fetch_rx) = mpsc::unbounded_channel();
    let release = Arc::new(Notify::new());
    let synth = GatedSynth {
        gate_text: "b",
        gated_once: AtomicBool::new(false),
        fetch_started: fetch_tx,
        release: Arc::clone(&release),
    };

    let seq = Arc::new(PodcastSequencer::new(
        Arc::new(synth),
        Arc::new(Player::new(output.clone())),
        script(&["a", "b", "c"]),
    ));

    let run = tokio::spawn({
        let seq = Arc::clone(&seq);
        async move { seq.play().await }
    });

    assert_eq!(fetch_rx.recv().await.unwrap(), "a");
    assert_eq!(fetch_rx.recv().await.unwrap(), "b");

    // Pause lands while line "b" is still being synthesized: no session
    // exists yet, so the queue loop must exit once the fetch returns.
    seq.pause();
    release.notify_one();
    run.await.unwrap();

    assert_eq!(seq.state(), SequencerState::Paused);
    assert_eq!(seq.current_line(), Some(1));
    assert_eq!(output.started(), 1, "paused line must not play");

    // Resume re-enters the queue at the paused line.
    seq.play().await;

    assert_eq!(fetch_rx.recv().await.unwrap(), "b");
    assert_eq!(fetch_rx.recv().await.unwrap(), "c");
    assert_eq!(output.started(), 3);
    assert_eq!(seq.state(), SequencerState::Idle);
    assert_eq!(seq.current_line(), None);
}
