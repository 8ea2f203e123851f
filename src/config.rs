//! Configuration management for the sign-in server
//!
//! Values are layered: built-in defaults, then an optional `config.toml`,
//! then `SIGNIN_*` environment overrides. The result is immutable and is
//! handed to the server at construction time.

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::auth::Credential;

/// Default location of the configuration file (extension resolved by `config`)
const DEFAULT_CONFIG_PATH: &str = "config";

/// Environment variable that points at an alternative configuration file
const CONFIG_PATH_ENV: &str = "SIGNIN_CONFIG";

/// Complete server configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// IP address the HTTP listener binds to
    /// Environment: SIGNIN_BIND_ADDRESS
    pub bind_address: String,

    /// HTTP port
    /// Environment: SIGNIN_PORT
    pub port: u16,

    /// Length bounds enforced while binding the request body
    pub limits: FieldLimits,

    /// Allow-list of credential records
    pub known_users: Vec<Credential>,
}

/// Inclusive length bounds for each credential field, counted in characters
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FieldLimits {
    pub name_min: usize,
    pub name_max: usize,
    pub password_min: usize,
    pub password_max: usize,
    pub phone_min: usize,
    pub phone_max: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            limits: FieldLimits::default(),
            known_users: crate::auth::credentials::default_records(),
        }
    }
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            name_min: 2,
            name_max: 100,
            password_min: 6,
            password_max: 100,
            phone_min: 10,
            phone_max: 13,
        }
    }
}

impl ServerConfig {
    /// Load configuration from `config.toml` (or `$SIGNIN_CONFIG`) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
        Self::load_from(&path)
    }

    /// Load configuration from the given file path with environment overrides.
    ///
    /// A missing file is not an error; the built-in defaults apply.
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("SIGNIN")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.port == 0 {
            return Err(config::ConfigError::Message("port cannot be 0".into()));
        }

        if self.bind_address.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "bind_address cannot be empty".into(),
            ));
        }

        self.limits.validate()?;

        if self.known_users.is_empty() {
            return Err(config::ConfigError::Message(
                "known_users must contain at least one record".into(),
            ));
        }

        Ok(())
    }

    /// Get bind address and port as a socket address string
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl FieldLimits {
    fn validate(&self) -> Result<(), config::ConfigError> {
        let bounds = [
            ("name", self.name_min, self.name_max),
            ("password", self.password_min, self.password_max),
            ("phone", self.phone_min, self.phone_max),
        ];

        for (field, min, max) in bounds {
            if min == 0 {
                return Err(config::ConfigError::Message(format!(
                    "{field}_min must be at least 1"
                )));
            }
            if min > max {
                return Err(config::ConfigError::Message(format!(
                    "{field}_min must not exceed {field}_max"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Tests that read or write SIGNIN_* variables hold this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_KEYS: [&str; 3] = ["SIGNIN_PORT", "SIGNIN_LIMITS__PHONE_MAX", CONFIG_PATH_ENV];

    fn write_config(file_name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}", std::process::id(), file_name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn clear_env() {
        for key in ENV_KEYS {
            // SAFETY: every test touching these variables holds ENV_LOCK
            unsafe { std::env::remove_var(key) };
        }
    }

    const SAMPLE_TOML: &str = r#"
bind_address = "127.0.0.1"
port = 9000

[limits]
name_min = 3
name_max = 20
password_min = 8
password_max = 64
phone_min = 10
phone_max = 12

[[known_users]]
name = "Meera"
password = "Meera@9x"
phone = "5550001111"
"#;

    #[test]
    fn defaults_are_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
        assert_eq!(config.known_users.len(), 3);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let config = ServerConfig::load_from("does/not/exist/signin").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.limits, FieldLimits::default());
    }

    #[test]
    fn file_values_replace_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let path = write_config("signin-file.toml", SAMPLE_TOML);
        let config = ServerConfig::load_from(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.listen_addr(), "127.0.0.1:9000");
        assert_eq!(
            config.limits,
            FieldLimits {
                name_min: 3,
                name_max: 20,
                password_min: 8,
                password_max: 64,
                phone_min: 10,
                phone_max: 12,
            }
        );
        assert_eq!(
            config.known_users,
            vec![Credential::new("Meera", "Meera@9x", "5550001111")]
        );
    }

    #[test]
    fn environment_overrides_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let path = write_config("signin-env.toml", SAMPLE_TOML);
        // SAFETY: every test touching these variables holds ENV_LOCK
        unsafe {
            std::env::set_var(CONFIG_PATH_ENV, &path);
            std::env::set_var("SIGNIN_PORT", "9090");
            std::env::set_var("SIGNIN_LIMITS__PHONE_MAX", "15");
        }

        let loaded = ServerConfig::load();
        clear_env();
        std::fs::remove_file(&path).ok();
        let config = loaded.unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.limits.phone_max, 15);
        // untouched keys still come from the file named by SIGNIN_CONFIG
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.limits.name_min, 3);
        assert_eq!(config.known_users.len(), 1);
    }

    #[test]
    fn rejects_zero_port() {
        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_inverted_bounds() {
        let config = ServerConfig {
            limits: FieldLimits {
                phone_min: 14,
                ..FieldLimits::default()
            },
            ..ServerConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("phone_min"));
    }

    #[test]
    fn rejects_zero_minimum() {
        let config = ServerConfig {
            limits: FieldLimits {
                name_min: 0,
                ..FieldLimits::default()
            },
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_table() {
        let config = ServerConfig {
            known_users: Vec::new(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
