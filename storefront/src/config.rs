//! Store configuration
//!
//! Fixed egress endpoints plus the local data directory for the persisted
//! request list. Values come from the environment with built-in defaults.

use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the persisted request list
    pub data_dir: PathBuf,
    /// Recipient of the email egress channel
    pub contact_email: String,
    /// Profile opened by the Instagram egress channel
    pub instagram_url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            contact_email: "hello@hqdecor.com".to_string(),
            instagram_url: "https://instagram.com/hqdecor".to_string(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables, falling back to
    /// [`Default`] for anything unset
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_dir: std::env::var("HQ_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            contact_email: std::env::var("HQ_CONTACT_EMAIL").unwrap_or(defaults.contact_email),
            instagram_url: std::env::var("HQ_INSTAGRAM_URL").unwrap_or(defaults.instagram_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.contact_email, "hello@hqdecor.com");
        assert_eq!(config.instagram_url, "https://instagram.com/hqdecor");
    }
}
