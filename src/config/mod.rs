//! Configuration management for LancePay notifications

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use validator::Validate;

/// Credential value used by deployments that never set a real key
pub const PLACEHOLDER_API_KEY: &str = "re_placeholder";

pub const DEFAULT_API_URL: &str = "https://api.resend.com";
pub const DEFAULT_FROM_EMAIL: &str = "notifications@lancepay.app";
pub const DEFAULT_FROM_NAME: &str = "LancePay";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Email provider configuration
    pub email: EmailConfig,
    /// Logging and metrics configuration
    pub telemetry: TelemetryConfig,
}

/// Resend provider configuration
#[derive(Clone, PartialEq, Validate)]
pub struct EmailConfig {
    /// API key; `None` means the provider is unconfigured
    pub api_key: Option<String>,

    /// Base URL of the Resend API
    pub api_url: String,

    /// Sender address
    #[validate(email)]
    pub from_email: String,

    /// Sender display name
    pub from_name: Option<String>,

    /// HTTP request timeout
    pub timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            from_email: DEFAULT_FROM_EMAIL.to_string(),
            from_name: Some(DEFAULT_FROM_NAME.to_string()),
            timeout_secs: 30,
        }
    }
}

impl fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("api_url", &self.api_url)
            .field("from_email", &self.from_email)
            .field("from_name", &self.from_name)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl EmailConfig {
    /// Check if a usable API key is present
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// The "From" header value, e.g. `LancePay <notifications@lancepay.app>`
    pub fn sender(&self) -> String {
        match &self.from_name {
            Some(name) => format!("{} <{}>", name, self.from_email),
            None => self.from_email.clone(),
        }
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = var("RESEND_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty() && key != PLACEHOLDER_API_KEY);

        Ok(Self {
            api_key,
            api_url: var("RESEND_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            from_email: var("EMAIL_FROM_ADDRESS").unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_string()),
            from_name: match var("EMAIL_FROM_NAME") {
                Some(name) if name.trim().is_empty() => None,
                Some(name) => Some(name),
                None => Some(DEFAULT_FROM_NAME.to_string()),
            },
            timeout_secs: var("EMAIL_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .context("Invalid EMAIL_TIMEOUT_SECS")?,
        })
    }
}

/// Logging and metrics configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryConfig {
    /// "json" or "pretty"
    pub log_format: String,
    /// Whether to register metric descriptions at startup
    pub metrics_enabled: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_format: "pretty".to_string(),
            metrics_enabled: false,
        }
    }
}

impl TelemetryConfig {
    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_format: var("LOG_FORMAT").unwrap_or_else(|| "pretty".to_string()),
            metrics_enabled: var("METRICS_ENABLED")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load `.env` (if present) and then read the environment
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            email: EmailConfig::from_vars(&var)?,
            telemetry: TelemetryConfig::from_vars(&var),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = config_from(&[]).unwrap();

        assert!(!config.email.is_configured());
        assert_eq!(config.email.api_url, "https://api.resend.com");
        assert_eq!(config.email.sender(), "LancePay <notifications@lancepay.app>");
        assert_eq!(config.email.timeout_secs, 30);
        assert_eq!(config.telemetry, TelemetryConfig::default());
    }

    #[test]
    fn test_api_key_is_read() {
        let config = config_from(&[("RESEND_API_KEY", "re_live_123")]).unwrap();
        assert!(config.email.is_configured());
        assert_eq!(config.email.api_key.as_deref(), Some("re_live_123"));
    }

    #[test]
    fn test_placeholder_api_key_is_unconfigured() {
        let config = config_from(&[("RESEND_API_KEY", "re_placeholder")]).unwrap();
        assert!(!config.email.is_configured());
    }

    #[test]
    fn test_blank_api_key_is_unconfigured() {
        let config = config_from(&[("RESEND_API_KEY", "   ")]).unwrap();
        assert!(!config.email.is_configured());
    }

    #[test]
    fn test_sender_overrides() {
        let config = config_from(&[
            ("EMAIL_FROM_ADDRESS", "billing@example.com"),
            ("EMAIL_FROM_NAME", "Example Billing"),
        ])
        .unwrap();
        assert_eq!(config.email.sender(), "Example Billing <billing@example.com>");

        let config = config_from(&[("EMAIL_FROM_NAME", "")]).unwrap();
        assert_eq!(config.email.sender(), "notifications@lancepay.app");
    }

    #[test]
    fn test_invalid_timeout() {
        let result = config_from(&[("EMAIL_TIMEOUT_SECS", "soon")]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("EMAIL_TIMEOUT_SECS"));
    }

    #[test]
    fn test_telemetry_settings() {
        let config = config_from(&[("LOG_FORMAT", "json"), ("METRICS_ENABLED", "TRUE")]).unwrap();
        assert_eq!(config.telemetry.log_format, "json");
        assert!(config.telemetry.metrics_enabled);
    }

    #[test]
    fn test_email_config_validation() {
        assert!(EmailConfig::default().validate().is_ok());

        let config = EmailConfig {
            from_email: "not-an-email".to_string(),
            ..EmailConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_masks_api_key() {
        let config = EmailConfig {
            api_key: Some("re_secret".to_string()),
            ..EmailConfig::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("re_secret"));
        assert!(debug.contains("***"));
    }
}
