use undertekst::domain::formatting::{to_plain_text, to_srt, to_vtt};
use undertekst::domain::TranscriptEntry;

fn sample_entries() -> Vec<TranscriptEntry> {
    vec![
        TranscriptEntry::new(5.5, 2.25, "hi".to_string()),
        TranscriptEntry::new(65.0, 1.0, "bye".to_string()),
    ]
}

#[test]
fn given_entries_when_rendering_plain_text_then_timestamps_floor_to_seconds() {
    assert_eq!(to_plain_text(&sample_entries()), "[00:05] hi\n[01:05] bye");
}

#[test]
fn given_entry_past_one_hour_when_rendering_plain_text_then_uses_hours() {
    let entries = vec![TranscriptEntry::new(3661.9, 1.0, "late".to_string())];
    assert_eq!(to_plain_text(&entries), "[01:01:01] late");
}

#[test]
fn given_entries_when_rendering_srt_then_blocks_are_indexed_with_comma_millis() {
    let srt = to_srt(&sample_entries());
    assert_eq!(
        srt,
        "1\n00:00:05,500 --> 00:00:07,750\nhi\n\n2\n00:01:05,000 --> 00:01:06,000\nbye\n\n"
    );
}

#[test]
fn given_entries_when_rendering_vtt_then_header_precedes_dot_millis_cues() {
    let vtt = to_vtt(&sample_entries());
    assert_eq!(
        vtt,
        "WEBVTT\n\n00:00:05.500 --> 00:00:07.750\nhi\n\n00:01:05.000 --> 00:01:06.000\nbye\n\n"
    );
}

#[test]
fn given_no_entries_when_rendering_then_text_and_srt_are_empty() {
    assert_eq!(to_plain_text(&[]), "");
    assert_eq!(to_srt(&[]), "");
}

#[test]
fn given_no_entries_when_rendering_vtt_then_only_header_remains() {
    assert_eq!(to_vtt(&[]), "WEBVTT\n\n");
}

#[test]
fn given_fractional_start_when_rendering_then_millis_are_floored() {
    // 0.9999 seconds floors to 999 milliseconds, never rounds up.
    let entries = vec![TranscriptEntry::new(0.9999, 0.0, "x".to_string())];
    let srt = to_srt(&entries);
    assert!(srt.contains("00:00:00,999 --> 00:00:00,999"), "{}", srt);
}
