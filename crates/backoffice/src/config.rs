//! Application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional: the system degrades gracefully rather than
//! refusing to start. A missing variable disables the corresponding client
//! and is logged as a warning.
//!
//! - `SUPABASE_URL` - Project base URL (row store and identity service)
//! - `SUPABASE_ANON_KEY` - Anonymous API key shared by both services
//! - `GEMINI_API_KEY` - Generative-text credential for AI insights
//! - `MW_SESSION_FILE` - Path of the local session record
//!   (default: `.mw-session.json` in the working directory)

use std::path::PathBuf;

use secrecy::SecretString;

/// Default location of the client-held session record.
const DEFAULT_SESSION_FILE: &str = ".mw-session.json";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend store configuration; `None` when credentials are absent.
    pub store: Option<StoreConfig>,
    /// Generative-text credential; `None` disables AI insights.
    pub gemini_api_key: Option<SecretString>,
    /// Path of the local session record.
    pub session_file: PathBuf,
}

/// Supabase backend configuration.
///
/// The row store (PostgREST) and the identity service (GoTrue) share the
/// project URL and the anonymous key.
///
/// Implements `Debug` manually to redact the key.
#[derive(Clone)]
pub struct StoreConfig {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`.
    pub url: String,
    /// Anonymous API key.
    pub anon_key: SecretString,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url)
            .field("anon_key", &"[REDACTED]")
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    /// Never fails: missing credentials leave the corresponding client
    /// unconfigured and log a warning.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let store = match (
            get_optional_env("SUPABASE_URL"),
            get_optional_env("SUPABASE_ANON_KEY"),
        ) {
            (Some(url), Some(key)) => Some(StoreConfig {
                url: url.trim_end_matches('/').to_owned(),
                anon_key: SecretString::from(key),
            }),
            _ => {
                tracing::warn!(
                    "Supabase credentials missing; check SUPABASE_URL and SUPABASE_ANON_KEY. \
                     Store operations will fail until configured."
                );
                None
            }
        };

        let gemini_api_key = get_optional_env("GEMINI_API_KEY").map(SecretString::from);
        if gemini_api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY missing; AI insight features are disabled.");
        }

        let session_file = get_optional_env("MW_SESSION_FILE")
            .map_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE), PathBuf::from);

        Self {
            store,
            gemini_api_key,
            session_file,
        }
    }
}

/// Get an optional environment variable, treating empty values as absent.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
