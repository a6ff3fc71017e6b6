use serde::Serialize;

/// One timed caption unit from a video's caption track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptEntry {
    /// Offset from the start of the video, in seconds.
    pub start: f64,
    /// Duration the caption stays on screen, in seconds.
    pub duration: f64,
    pub text: String,
}

impl TranscriptEntry {
    pub fn new(start: f64, duration: f64, text: String) -> Self {
        Self {
            start,
            duration,
            text,
        }
    }

    /// End offset in seconds.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// A fetched transcript: the selected track's metadata plus its entries,
/// in chronological order. Immutable once fetched.
#[derive(Debug, Clone, Serialize)]
pub struct FetchedTranscript {
    pub video_id: String,
    pub language: String,
    pub language_code: String,
    pub is_generated: bool,
    pub entries: Vec<TranscriptEntry>,
}

impl FetchedTranscript {
    /// Joins all entry text into one string, separated by single spaces.
    /// This is the payload handed to the completion path.
    pub fn joined_text(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Metadata for one selectable caption track, from the provider's listing.
#[derive(Debug, Clone, Serialize)]
pub struct CaptionTrack {
    pub language: String,
    pub language_code: String,
    pub is_generated: bool,
    pub is_translatable: bool,
}
