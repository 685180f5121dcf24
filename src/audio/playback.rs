//! Single-clip playback sessions and the one-active-session player.

use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

use crate::error::Result;

use super::decode::decode_pcm16;

/// How a clip's playback session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipOutcome {
    /// The clip played to its natural end.
    Completed,
    /// The session was stopped (or superseded) before the end.
    Stopped,
}

/// Transport controls for one playback session.
///
/// All three calls are safe in any state and any order: pausing a paused
/// or stopped session, resuming a running one, and stopping twice are
/// no-ops.
pub trait SessionControl: Send + Sync {
    /// Suspend output, preserving the playback position.
    fn pause(&self);
    /// Resume suspended output from the preserved position.
    fn resume(&self);
    /// Halt output immediately and release the output device. After this
    /// the completion signal never fires.
    fn stop(&self);
}

/// Handle for one started clip: transport controls plus a completion
/// signal that fires exactly once, only on natural end of clip.
pub struct PlaybackHandle {
    control: Arc<dyn SessionControl>,
    done: oneshot::Receiver<()>,
}

impl PlaybackHandle {
    /// Pair transport controls with a completion receiver. The sender side
    /// must send exactly once on natural end and be dropped unsent on stop.
    pub fn new(control: Arc<dyn SessionControl>, done: oneshot::Receiver<()>) -> Self {
        Self { control, done }
    }

    /// Shareable transport controls for this session.
    pub fn control(&self) -> Arc<dyn SessionControl> {
        Arc::clone(&self.control)
    }

    pub fn pause(&self) {
        self.control.pause();
    }

    pub fn resume(&self) {
        self.control.resume();
    }

    pub fn stop(&self) {
        self.control.stop();
    }

    /// Wait for the session to end, either naturally or by `stop()`.
    pub async fn outcome(self) -> ClipOutcome {
        match self.done.await {
            Ok(()) => ClipOutcome::Completed,
            Err(_) => ClipOutcome::Stopped,
        }
    }

    /// Resolve only when the clip finishes naturally. After `stop()` this
    /// future never resolves; callers that may stop a session should use
    /// [`PlaybackHandle::outcome`] instead.
    pub async fn finished(self) {
        if self.outcome().await == ClipOutcome::Stopped {
            std::future::pending::<()>().await;
        }
    }
}

/// Device seam: starts playback of decoded samples.
pub trait AudioOutput: Send + Sync {
    /// Begin playing mono samples immediately at the given rate.
    fn start(&self, samples: Vec<f32>, sample_rate: u32) -> Result<PlaybackHandle>;
}

/// Plays one clip at a time.
///
/// At most one playback session is active per player; starting a new clip
/// supersedes (stops) any session still active, so overlapping audio
/// output cannot occur.
pub struct Player {
    output: Arc<dyn AudioOutput>,
    current: Mutex<Option<Arc<dyn SessionControl>>>,
}

impl Player {
    pub fn new(output: Arc<dyn AudioOutput>) -> Self {
        Self {
            output,
            current: Mutex::new(None),
        }
    }

    /// Decode a base64 PCM payload and start playing it, superseding any
    /// active session.
    pub fn start_clip(&self, base64_payload: &str, sample_rate: u32) -> Result<PlaybackHandle> {
        let samples = decode_pcm16(base64_payload)?;

        let mut current = self.current.lock().unwrap();
        if let Some(prev) = current.take() {
            prev.stop();
        }
        let handle = self.output.start(samples, sample_rate)?;
        *current = Some(handle.control());
        Ok(handle)
    }

    /// Whether a session reference is still held (it may be paused).
    pub fn has_session(&self) -> bool {
        self.current.lock().unwrap().is_some()
    }

    pub fn pause(&self) {
        if let Some(control) = self.current.lock().unwrap().as_ref() {
            control.pause();
        }
    }

    pub fn resume(&self) {
        if let Some(control) = self.current.lock().unwrap().as_ref() {
            control.resume();
        }
    }

    /// Stop and release the active session, if any. Idempotent.
    pub fn stop(&self) {
        if let Some(control) = self.current.lock().unwrap().take() {
            control.stop();
        }
    }

    /// Drop the session reference without stopping; used after a clip has
    /// ended naturally.
    pub fn clear(&self) {
        self.current.lock().unwrap().take();
    }
}
