use std::str::FromStr;

/// Process configuration, read once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub transcripts: TranscriptSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct TranscriptSettings {
    /// Language preference applied when a request omits `languages`.
    pub default_languages: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    /// Preferred model when the caller does not override it.
    pub default_model: String,
    /// Ordered fallback chain tried after the preferred model.
    pub fallback_models: Vec<String>,
    pub max_tokens: usize,
    pub temperature: f32,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub enable_json: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parsed("SERVER_PORT", 3000),
            },
            transcripts: TranscriptSettings {
                default_languages: split_csv(&env_or("TRANSCRIPT_DEFAULT_LANGUAGES", "en")),
            },
            llm: LlmSettings {
                api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
                base_url: env_or("OPENAI_BASE_URL", "https://api.openai.com/v1"),
                default_model: env_or("LLM_DEFAULT_MODEL", "gpt-4o-mini"),
                fallback_models: split_csv(&env_or(
                    "LLM_FALLBACK_MODELS",
                    "gpt-4o-mini,gpt-4.1-mini,gpt-3.5-turbo",
                )),
                max_tokens: env_parsed("LLM_MAX_TOKENS", 2048),
                temperature: env_parsed("LLM_TEMPERATURE", 0.3),
            },
            logging: LoggingSettings {
                enable_json: env_or("LOG_FORMAT", "text").to_lowercase() == "json",
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
