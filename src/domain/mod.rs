pub mod formatting;
mod pattern;
mod transcript;

pub use pattern::Pattern;
pub use transcript::{CaptionTrack, FetchedTranscript, TranscriptEntry};
