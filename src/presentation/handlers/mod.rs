mod error;
mod health;
mod summarize;
mod tracks;
mod transcript;

pub use health::health_handler;
pub use summarize::summarize_handler;
pub use tracks::list_tracks_handler;
pub use transcript::{transcript_handler, OutputFormat};
