use log::Level;

use crate::error::ConfigError;

pub const DEFAULT_RELAY_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Email relay identifiers, baked in at build time.
#[derive(Clone, Debug, PartialEq)]
pub struct RelayConfig {
    pub api_url: String,
    pub service_id: String,
    pub template_id: String,
    pub autoreply_template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        Ok(Self {
            api_url: lookup("EMAILJS_API_URL").unwrap_or_else(|| DEFAULT_RELAY_URL.to_string()),
            service_id: required("EMAILJS_SERVICE_ID")?,
            template_id: required("EMAILJS_TEMPLATE_ID")?,
            autoreply_template_id: required("EMAILJS_AUTOREPLY_TEMPLATE_ID")?,
            public_key: required("EMAILJS_PUBLIC_KEY")?,
        })
    }

    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                "EMAILJS_API_URL" => option_env!("EMAILJS_API_URL"),
                "EMAILJS_SERVICE_ID" => option_env!("EMAILJS_SERVICE_ID"),
                "EMAILJS_TEMPLATE_ID" => option_env!("EMAILJS_TEMPLATE_ID"),
                "EMAILJS_AUTOREPLY_TEMPLATE_ID" => option_env!("EMAILJS_AUTOREPLY_TEMPLATE_ID"),
                "EMAILJS_PUBLIC_KEY" => option_env!("EMAILJS_PUBLIC_KEY"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, String> {
        HashMap::from([
            ("EMAILJS_SERVICE_ID", "service_x".to_string()),
            ("EMAILJS_TEMPLATE_ID", "template_owner".to_string()),
            ("EMAILJS_AUTOREPLY_TEMPLATE_ID", "template_reply".to_string()),
            ("EMAILJS_PUBLIC_KEY", "pk_123".to_string()),
        ])
    }

    #[test]
    fn test_config_from_complete_lookup() {
        let env = full_env();
        let config = RelayConfig::from_lookup(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.api_url, DEFAULT_RELAY_URL);
        assert_eq!(config.template_id, "template_owner");
        assert_eq!(config.autoreply_template_id, "template_reply");
    }

    #[test]
    fn test_config_missing_key() {
        let mut env = full_env();
        env.remove("EMAILJS_PUBLIC_KEY");
        let err = RelayConfig::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert_eq!(err, ConfigError::Missing("EMAILJS_PUBLIC_KEY"));
    }

    #[test]
    fn test_config_blank_value_counts_as_missing() {
        let mut env = full_env();
        env.insert("EMAILJS_SERVICE_ID", "  ".to_string());
        let err = RelayConfig::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert_eq!(err, ConfigError::Missing("EMAILJS_SERVICE_ID"));
    }

    #[test]
    fn test_config_api_url_override() {
        let mut env = full_env();
        env.insert("EMAILJS_API_URL", "http://localhost:8080/send".to_string());
        let config = RelayConfig::from_lookup(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.api_url, "http://localhost:8080/send");
    }
}
