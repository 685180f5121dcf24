//! Audio: PCM decode, single-clip playback, and the podcast sequencer.

pub mod decode;
#[cfg(feature = "playback")]
pub mod output;
pub mod playback;
pub mod sequencer;

pub use decode::{decode_pcm16, SAMPLE_RATE};
#[cfg(feature = "playback")]
pub use output::CpalOutput;
pub use playback::{AudioOutput, ClipOutcome, PlaybackHandle, Player, SessionControl};
pub use sequencer::{PodcastSequencer, SequencerState};
