//! Pure transcript formatters. Every function is stateless and idempotent.

use super::TranscriptEntry;

/// One line per entry: `[MM:SS] text`, or `[HH:MM:SS] text` past one hour.
/// Timestamps truncate to whole seconds.
pub fn to_plain_text(entries: &[TranscriptEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("[{}] {}", clock_timestamp(e.start), e.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// SubRip: 1-indexed blocks with `HH:MM:SS,mmm` cue timings.
pub fn to_srt(entries: &[TranscriptEntry]) -> String {
    let mut out = String::new();
    for (i, e) in entries.iter().enumerate() {
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            i + 1,
            cue_timestamp(e.start, ','),
            cue_timestamp(e.end(), ','),
            e.text
        ));
    }
    out
}

/// WebVTT: `WEBVTT` header, then cues with `HH:MM:SS.mmm` timings.
pub fn to_vtt(entries: &[TranscriptEntry]) -> String {
    let mut out = String::from("WEBVTT\n\n");
    for e in entries {
        out.push_str(&format!(
            "{} --> {}\n{}\n\n",
            cue_timestamp(e.start, '.'),
            cue_timestamp(e.end(), '.'),
            e.text
        ));
    }
    out
}

/// `MM:SS`, widening to `HH:MM:SS` at one hour. Floor-to-second, no rounding.
fn clock_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    if h > 0 {
        format!("{:02}:{:02}:{:02}", h, m, s)
    } else {
        format!("{:02}:{:02}", m, s)
    }
}

/// `HH:MM:SS<sep>mmm` cue timing; millisecond component is floored.
fn cue_timestamp(seconds: f64, millis_sep: char) -> String {
    let clamped = seconds.max(0.0);
    let total = clamped.floor() as u64;
    let millis = (clamped.fract() * 1000.0).floor() as u64;
    format!(
        "{:02}:{:02}:{:02}{}{:03}",
        total / 3600,
        (total % 3600) / 60,
        total % 60,
        millis_sep,
        millis
    )
}
