use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Recipient of contact form submissions.
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: default_from_address(),
            contact_address: default_contact_address(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    "no-reply@rishyendra.dev".to_string()
}

fn default_contact_address() -> String {
    "ramakuririshyendra@gmail.com".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PORTFOLIO__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional - ignore if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

        // Legacy environment variables the deployment already uses
        if let Ok(receiver) = env::var("CONTACT_RECEIVER") {
            builder = builder.set_override("email.contact_address", receiver)?;
        }
        if let Ok(password) = env::var("SMTP_PASSWORD") {
            builder = builder.set_override("email.smtp_password", password)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.contact_address.is_empty() || !self.email.contact_address.contains('@') {
            return Err("email.contact_address must be a valid mailbox".to_string());
        }
        if self.email.from_address.is_empty() || !self.email.from_address.contains('@') {
            return Err("email.from_address must be a valid mailbox".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config {
            server: ServerConfig::default(),
            email: EmailConfig::default(),
            observability: ObservabilityConfig::default(),
        };

        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.email.smtp_port, 587);
    }

    #[test]
    fn test_validation_zero_port() {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            email: EmailConfig::default(),
            observability: ObservabilityConfig::default(),
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bad_contact_address() {
        let config = Config {
            server: ServerConfig::default(),
            email: EmailConfig {
                contact_address: "not-a-mailbox".to_string(),
                ..EmailConfig::default()
            },
            observability: ObservabilityConfig::default(),
        };

        assert!(config.validate().is_err());
    }
}
