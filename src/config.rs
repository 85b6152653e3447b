use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `None` when `GEMINI_API_KEY` is unset or blank.
    pub gemini_api_key: Option<String>,
    pub port: u16,
    /// Built frontend to serve on every non-API path.
    pub static_dir: Option<PathBuf>,
    /// Cross-origin caller allowed to hit the API, e.g. the frontend dev server.
    pub allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            gemini_api_key: non_blank("GEMINI_API_KEY"),
            port: non_blank("PORT").and_then(|p| p.parse().ok()).unwrap_or(DEFAULT_PORT),
            static_dir: non_blank("STATIC_DIR").map(PathBuf::from),
            allowed_origin: non_blank("ALLOWED_ORIGIN"),
        }
    }
}
