mod youtube_provider;

pub use youtube_provider::YouTubeTranscriptProvider;
