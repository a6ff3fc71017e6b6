use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// A prompt-driven transformation applied to a transcript.
///
/// Each pattern carries its own system prompt and completion timeout:
/// summarization-class patterns use a 60 second bound, the heavier
/// wisdom extraction gets 90 seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Summary,
    KeyPoints,
    Wisdom,
}

impl Pattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Summary => "summary",
            Pattern::KeyPoints => "key_points",
            Pattern::Wisdom => "wisdom",
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            Pattern::Summary => {
                "You are an expert content summarizer. You will receive a video \
                 transcript. Produce a concise summary in Markdown: a one-paragraph \
                 overview followed by the main points as a bulleted list. Use only \
                 information present in the transcript."
            }
            Pattern::KeyPoints => {
                "You will receive a video transcript. Extract the key points as a \
                 flat Markdown bulleted list, in the order they appear. One point \
                 per bullet, no commentary, no information from outside the \
                 transcript."
            }
            Pattern::Wisdom => {
                "You are an expert at surfacing insight from spoken content. You \
                 will receive a video transcript. Produce a Markdown report with \
                 these sections: IDEAS (the most interesting ideas, one bullet \
                 each), QUOTES (notable verbatim quotes), HABITS (practices or \
                 routines mentioned), and RECOMMENDATIONS (actionable takeaways). \
                 Use only information present in the transcript."
            }
        }
    }

    pub fn timeout(&self) -> Duration {
        match self {
            Pattern::Summary | Pattern::KeyPoints => Duration::from_secs(60),
            Pattern::Wisdom => Duration::from_secs(90),
        }
    }
}

impl FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(Pattern::Summary),
            "key_points" => Ok(Pattern::KeyPoints),
            "wisdom" => Ok(Pattern::Wisdom),
            other => Err(format!(
                "Invalid pattern: {}. Expected: summary, key_points, or wisdom",
                other
            )),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
