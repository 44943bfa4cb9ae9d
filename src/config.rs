use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub gemini: GeminiSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    /// Absence is a per-request misconfiguration error, never a startup
    /// failure: the rest of the portal keeps working without the AI path.
    pub api_key: Option<String>,
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    #[serde(default = "default_gemini_model")]
    pub model: String,
    #[serde(default = "default_gemini_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_gemini_base_url(),
            model: default_gemini_model(),
            timeout_secs: default_gemini_timeout_secs(),
        }
    }
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}
fn default_gemini_model() -> String {
    "gemini-2.5-flash-lite".to_string()
}
fn default_gemini_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration files (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with USLUGI__)
    /// 4. GEMINI_API_KEY, as the credential is usually supplied bare
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // e.g., USLUGI__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("USLUGI")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }
}

/// Apply the bare credential override.
///
/// GEMINI_API_KEY takes precedence over USLUGI__GEMINI__API_KEY so the same
/// .env works for this service and the original portal deployment.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let api_key = env::var("GEMINI_API_KEY")
        .or_else(|_| env::var("USLUGI__GEMINI__API_KEY"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(api_key) = api_key {
        builder = builder.set_override("gemini.api_key", api_key)?;
    }

    builder.build()
}
