pub mod llm;
pub mod observability;
pub mod transcripts;
