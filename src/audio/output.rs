//! cpal-backed audio output.
//!
//! `cpal::Stream` is not `Send`, so each session runs on its own thread:
//! the thread owns the stream and services transport commands from a
//! channel; dropping the command sender (or an explicit `Stop`) tears the
//! stream down. Natural end of clip is detected when the data callback has
//! consumed every sample, after which the completion signal fires.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use tokio::sync::oneshot;
use tracing::warn;

use crate::error::{LecternError, Result};

use super::playback::{AudioOutput, PlaybackHandle, SessionControl};

/// Poll interval for the session thread's command loop.
const TICK: Duration = Duration::from_millis(10);
/// Grace period for the device buffer to drain after the last sample.
const DRAIN: Duration = Duration::from_millis(100);

/// Plays clips on the default output device.
#[derive(Debug, Default, Clone, Copy)]
pub struct CpalOutput;

impl CpalOutput {
    pub fn new() -> Self {
        Self
    }
}

enum Command {
    Pause,
    Resume,
    Stop,
}

struct CpalControl {
    commands: Sender<Command>,
}

impl SessionControl for CpalControl {
    fn pause(&self) {
        let _ = self.commands.send(Command::Pause);
    }

    fn resume(&self) {
        let _ = self.commands.send(Command::Resume);
    }

    fn stop(&self) {
        let _ = self.commands.send(Command::Stop);
    }
}

impl AudioOutput for CpalOutput {
    fn start(&self, samples: Vec<f32>, sample_rate: u32) -> Result<PlaybackHandle> {
        let (command_tx, command_rx) = std::sync::mpsc::channel();
        let (done_tx, done_rx) = oneshot::channel();
        let (ready_tx, ready_rx) = std::sync::mpsc::channel();

        std::thread::Builder::new()
            .name("lectern-playback".to_string())
            .spawn(move || run_session(samples, sample_rate, command_rx, done_tx, ready_tx))?;

        // Wait for the stream to come up so device errors surface here.
        match ready_rx.recv() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(e),
            Err(_) => {
                return Err(LecternError::Playback(
                    "playback thread exited before starting".to_string(),
                ))
            }
        }

        Ok(PlaybackHandle::new(
            Arc::new(CpalControl {
                commands: command_tx,
            }),
            done_rx,
        ))
    }
}

fn run_session(
    samples: Vec<f32>,
    sample_rate: u32,
    commands: Receiver<Command>,
    done: oneshot::Sender<()>,
    ready: Sender<std::result::Result<(), LecternError>>,
) {
    let service = match build_stream(samples, sample_rate) {
        Ok((stream, position, total)) => {
            if let Err(e) = stream.play() {
                let _ = ready.send(Err(LecternError::Playback(e.to_string())));
                return;
            }
            let _ = ready.send(Ok(()));
            ServiceLoop {
                stream,
                position,
                total,
            }
        }
        Err(e) => {
            let _ = ready.send(Err(e));
            return;
        }
    };

    service.service(commands, done);
}

struct ServiceLoop {
    stream: cpal::Stream,
    position: Arc<AtomicUsize>,
    total: usize,
}

impl ServiceLoop {
    /// Service transport commands until the clip ends or is stopped.
    /// Dropping `done` unsent is the "stopped" signal; sending fires the
    /// natural-completion signal exactly once.
    fn service(self, commands: Receiver<Command>, done: oneshot::Sender<()>) {
        loop {
            match commands.recv_timeout(TICK) {
                Ok(Command::Pause) => {
                    if let Err(e) = self.stream.pause() {
                        warn!(error = %e, "Failed to pause output stream");
                    }
                }
                Ok(Command::Resume) => {
                    if let Err(e) = self.stream.play() {
                        warn!(error = %e, "Failed to resume output stream");
                    }
                }
                Ok(Command::Stop) | Err(RecvTimeoutError::Disconnected) => {
                    // Stream (and device handle) released on drop; `done`
                    // is dropped unsent.
                    return;
                }
                Err(RecvTimeoutError::Timeout) => {
                    if self.position.load(Ordering::Acquire) >= self.total {
                        std::thread::sleep(DRAIN);
                        let _ = done.send(());
                        return;
                    }
                }
            }
        }
    }
}

fn build_stream(
    samples: Vec<f32>,
    sample_rate: u32,
) -> Result<(cpal::Stream, Arc<AtomicUsize>, usize)> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| LecternError::Playback("no default output device".to_string()))?;

    let config = cpal::StreamConfig {
        channels: 1,
        sample_rate: cpal::SampleRate(sample_rate),
        buffer_size: cpal::BufferSize::Default,
    };

    let total = samples.len();
    let position = Arc::new(AtomicUsize::new(0));
    let callback_position = Arc::clone(&position);

    let stream = device
        .build_output_stream(
            &config,
            move |out: &mut [f32], _| {
                let start = callback_position.load(Ordering::Acquire);
                for (i, slot) in out.iter_mut().enumerate() {
                    *slot = samples.get(start + i).copied().unwrap_or(0.0);
                }
                let consumed = (start + out.len()).min(total);
                callback_position.store(consumed, Ordering::Release);
            },
            |e| warn!(error = %e, "Output stream error"),
            None,
        )
        .map_err(|e| LecternError::Playback(e.to_string()))?;

    Ok((stream, position, total))
}
