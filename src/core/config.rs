

use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use super::error::{PurgeError, Result};
use crate::{
    DEFAULT_METABASE_HOST, DEFAULT_PASSWORD, DEFAULT_ROOT_COLLECTION_ID, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER,
};


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurgeConfig {
    pub host: String,
    pub user: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub timeout_secs: u64,
    pub accept_invalid_certs: bool,

    pub root_collection_id: i64,
    pub dry_run: bool,
}

impl PurgeConfig {

    pub fn new(host: &str, user: &str, password: &str) -> Self {
        Self {
            host: host.to_string(),
            user: user.to_string(),
            password: password.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            accept_invalid_certs: true,

            root_collection_id: DEFAULT_ROOT_COLLECTION_ID,
            dry_run: false,
        }
    }


    pub fn base_url(&self) -> &str {
        self.host.trim_end_matches('/')
    }


    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, falling back to the
    /// defaults for missing or unparseable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("host") {
            config.host = host;
        }
        if let Some(user) = lookup("user") {
            config.user = user;
        }
        if let Some(password) = lookup("password") {
            config.password = password;
        }
        if let Some(raw) = lookup("root_collection_id") {
            match raw.trim().parse() {
                Ok(id) => config.root_collection_id = id,
                Err(_) => warn!(
                    "Ignoring invalid root_collection_id {:?}, using {}",
                    raw, config.root_collection_id
                ),
            }
        }
        if let Some(raw) = lookup("timeout") {
            match raw.trim().parse() {
                Ok(secs) => config.timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring invalid timeout {:?}, using {}s",
                    raw, config.timeout_secs
                ),
            }
        }
        if let Some(raw) = lookup("verify_tls") {
            match parse_flag(&raw) {
                Some(verify) => config.accept_invalid_certs = !verify,
                None => warn!("Ignoring invalid verify_tls {:?}", raw),
            }
        }
        if let Some(raw) = lookup("dry_run") {
            match parse_flag(&raw) {
                Some(dry_run) => config.dry_run = dry_run,
                None => warn!("Ignoring invalid dry_run {:?}", raw),
            }
        }

        config
    }


    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.host)
            .map_err(|e| PurgeError::config(format!("invalid host {:?}: {}", self.host, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(PurgeError::config(format!(
                "unsupported scheme {:?} in host {:?}",
                url.scheme(),
                self.host
            )));
        }
        if self.user.trim().is_empty() {
            return Err(PurgeError::config("user must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(PurgeError::config("timeout must be greater than zero"));
        }
        Ok(())
    }
}

impl Default for PurgeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_METABASE_HOST, DEFAULT_USER, DEFAULT_PASSWORD)
    }
}


fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PurgeConfig::from_lookup(|_| None);
        assert_eq!(config.host, "https://localhost:8443");
        assert_eq!(config.user, "a@b.com");
        assert_eq!(config.password, "metabot1");
        assert_eq!(config.root_collection_id, 1);
        assert!(config.accept_invalid_certs);
        assert!(!config.dry_run);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = PurgeConfig::from_lookup(lookup_from(&[
            ("host", "https://metabase.example.com/"),
            ("user", "admin@example.com"),
            ("password", "secret"),
            ("root_collection_id", "42"),
            ("timeout", "5"),
            ("verify_tls", "true"),
            ("dry_run", "yes"),
        ]));
        assert_eq!(config.base_url(), "https://metabase.example.com");
        assert_eq!(config.user, "admin@example.com");
        assert_eq!(config.password, "secret");
        assert_eq!(config.root_collection_id, 42);
        assert_eq!(config.timeout_secs, 5);
        assert!(!config.accept_invalid_certs);
        assert!(config.dry_run);
    }

    #[test]
    fn test_invalid_numbers_keep_defaults() {
        let config = PurgeConfig::from_lookup(lookup_from(&[
            ("root_collection_id", "trash"),
            ("timeout", "-3"),
            ("dry_run", "maybe"),
        ]));
        assert_eq!(config.root_collection_id, 1);
        assert_eq!(config.timeout_secs, 30);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_validate_rejects_bad_host() {
        let config = PurgeConfig::new("localhost:8443", "a@b.com", "x");
        assert!(matches!(config.validate(), Err(PurgeError::Config(_))));

        let config = PurgeConfig::new("ftp://localhost", "a@b.com", "x");
        assert!(matches!(config.validate(), Err(PurgeError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = PurgeConfig::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_password_not_serialized() {
        let json = serde_json::to_string(&PurgeConfig::default()).unwrap();
        assert!(!json.contains("metabot1"));
    }
}
