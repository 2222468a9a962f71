//! Application configuration
//!
//! Configuration is layered: built-in defaults, then an optional
//! `config.toml`, then `VOICEGATEWAY_*` environment variables, then the
//! plain environment variables the deployment scripts already set
//! (`OPENAI_API_KEY`, `USE_GROQ`, `GROQ_API_KEY`, `FRONTEND_ORIGIN`,
//! `PORT`). Later layers win.

mod server;

pub use server::ServerConfig;

use serde::{Deserialize, Serialize};

/// The reply backend resolved at startup
///
/// Provider selection happens exactly once, when configuration is loaded.
/// Request handling never branches on provider flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseBackend {
    /// OpenAI chat completions
    OpenAi,
    /// Groq chat completions
    Groq,
    /// No credential; rule-based fallback only
    Fallback,
}

impl ResponseBackend {
    /// Provider label used in health reporting
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Groq => "groq",
            Self::Fallback => "fallback",
        }
    }
}

/// Credentials and flags for the external providers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// OpenAI API key, used for transcription, synthesis, and replies
    #[serde(default)]
    pub openai_api_key: Option<String>,

    /// Prefer Groq for replies when its key is present
    #[serde(default)]
    pub use_groq: bool,

    /// Groq API key
    #[serde(default)]
    pub groq_api_key: Option<String>,
}

impl ProviderConfig {
    /// Resolve which backend replies come from
    ///
    /// Groq wins when requested and its key is present; otherwise OpenAI
    /// when its key is present; otherwise the fallback rules.
    #[must_use]
    pub fn response_backend(&self) -> ResponseBackend {
        if self.use_groq && self.groq_api_key.as_deref().is_some_and(|k| !k.is_empty()) {
            ResponseBackend::Groq
        } else if self.openai_api_key.as_deref().is_some_and(|k| !k.is_empty()) {
            ResponseBackend::OpenAi
        } else {
            ResponseBackend::Fallback
        }
    }

    /// Whether transcription has a credential (always OpenAI)
    #[must_use]
    pub fn transcription_configured(&self) -> bool {
        self.openai_api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Provider credentials and flags
    #[serde(default)]
    pub providers: ProviderConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed, or if
    /// an environment value has the wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("VOICEGATEWAY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app: Self = settings.try_deserialize()?;
        app.apply_plain_env();
        Ok(app)
    }

    /// Overlay the unprefixed environment variables
    fn apply_plain_env(&mut self) {
        if let Ok(key) = std::env::var("OPENAI_API_KEY")
            && !key.is_empty()
        {
            self.providers.openai_api_key = Some(key);
        }
        if let Ok(key) = std::env::var("GROQ_API_KEY")
            && !key.is_empty()
        {
            self.providers.groq_api_key = Some(key);
        }
        if let Ok(flag) = std::env::var("USE_GROQ") {
            self.providers.use_groq = matches!(flag.to_lowercase().as_str(), "true" | "1" | "yes");
        }
        if let Ok(origin) = std::env::var("FRONTEND_ORIGIN")
            && !origin.is_empty()
        {
            self.server.frontend_origin = Some(origin);
        }
        if let Ok(port) = std::env::var("PORT")
            && let Ok(port) = port.parse::<u16>()
        {
            self.server.port = port;
        }
        if let Ok(host) = std::env::var("HOST")
            && !host.is_empty()
        {
            self.server.host = host;
        }
    }
}
