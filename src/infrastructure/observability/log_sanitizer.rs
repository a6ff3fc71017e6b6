const MAX_VISIBLE_LENGTH: usize = 100;

/// Shortens transcript or prompt text for logging. Transcripts run to tens
/// of thousands of characters; log lines carry a bounded excerpt plus the
/// total length.
pub fn excerpt(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    if total <= MAX_VISIBLE_LENGTH {
        return trimmed.to_string();
    }

    let head: String = trimmed.chars().take(MAX_VISIBLE_LENGTH).collect();
    format!("{}... ({} chars total)", head, total)
}
