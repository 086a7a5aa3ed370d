//! Process configuration loaded via OrthoConfig.
//!
//! Values come from `CONSOLE_*` environment variables, an optional
//! configuration file and command-line flags, in increasing precedence.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use zeroize::Zeroizing;

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;

/// Inconsistent configuration detected after loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("CONSOLE_STORE_KEY is required when CONSOLE_STORE_URL is set")]
    MissingStoreKey,
}

/// Configuration values for the console server.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CONSOLE")]
pub struct ConsoleSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<SocketAddr>,
    /// Base URL of the hosted record store. When absent the server keeps
    /// records in memory.
    pub store_url: Option<String>,
    /// Anonymous API key sent with every record store request.
    pub store_key: Option<String>,
    /// Per-request timeout for record store calls, in seconds.
    pub store_timeout_secs: Option<u64>,
    /// Browser origin allowed to open console sessions besides localhost.
    pub allowed_origin: Option<String>,
}

impl ConsoleSettings {
    /// Return the configured bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr.unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Return the record store timeout, falling back to ten seconds.
    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_secs.unwrap_or(DEFAULT_STORE_TIMEOUT_SECS))
    }

    /// Take the record store URL and key out of the settings, or `None` when
    /// no store URL is set.
    ///
    /// The key leaves `self` and is only held in [`Zeroizing`] storage from
    /// then on, so dropping the settings leaves no plain copy behind.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingStoreKey`] when a URL is configured
    /// without a key.
    pub fn take_store_credentials(
        &mut self,
    ) -> Result<Option<(String, Zeroizing<String>)>, SettingsError> {
        let key = self.store_key.take().map(Zeroizing::new);
        let Some(url) = self
            .store_url
            .take()
            .filter(|url| !url.trim().is_empty())
        else {
            return Ok(None);
        };
        let key = key
            .filter(|key| !key.trim().is_empty())
            .ok_or(SettingsError::MissingStoreKey)?;
        Ok(Some((url, key)))
    }
}

impl std::fmt::Debug for ConsoleSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSettings")
            .field("bind_addr", &self.bind_addr)
            .field("store_url", &self.store_url)
            .field("store_key", &self.store_key.as_ref().map(|_| "<redacted>"))
            .field("store_timeout_secs", &self.store_timeout_secs)
            .field("allowed_origin", &self.allowed_origin)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for console configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "CONSOLE_BIND_ADDR",
        "CONSOLE_STORE_URL",
        "CONSOLE_STORE_KEY",
        "CONSOLE_STORE_TIMEOUT_SECS",
        "CONSOLE_ALLOWED_ORIGIN",
    ];

    fn load_from_empty_args() -> ConsoleSettings {
        ConsoleSettings::load_from_iter([OsString::from("interview-console")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let mut settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), DEFAULT_BIND_ADDR);
        assert_eq!(settings.store_timeout(), Duration::from_secs(10));
        assert_eq!(settings.take_store_credentials(), Ok(None));
        assert!(settings.allowed_origin.is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("CONSOLE_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "CONSOLE_STORE_URL",
                Some("https://records.example.com".to_owned()),
            ),
            ("CONSOLE_STORE_KEY", Some("anon-key".to_owned())),
            ("CONSOLE_STORE_TIMEOUT_SECS", Some("3".to_owned())),
            (
                "CONSOLE_ALLOWED_ORIGIN",
                Some("https://console.example.com".to_owned()),
            ),
        ]);

        let mut settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr(),
            "127.0.0.1:9000".parse::<SocketAddr>().expect("valid addr")
        );
        assert_eq!(settings.store_timeout(), Duration::from_secs(3));
        let (url, key) = settings
            .take_store_credentials()
            .expect("credentials valid")
            .expect("store configured");
        assert_eq!(url, "https://records.example.com");
        assert_eq!(key.as_str(), "anon-key");
        assert_eq!(
            settings.allowed_origin.as_deref(),
            Some("https://console.example.com")
        );
    }

    #[rstest]
    fn store_url_without_key_is_rejected() {
        let _guard = lock_env([
            ("CONSOLE_BIND_ADDR", None::<String>),
            (
                "CONSOLE_STORE_URL",
                Some("https://records.example.com".to_owned()),
            ),
            ("CONSOLE_STORE_KEY", None),
            ("CONSOLE_STORE_TIMEOUT_SECS", None),
            ("CONSOLE_ALLOWED_ORIGIN", None),
        ]);

        let mut settings = load_from_empty_args();
        assert_eq!(
            settings.take_store_credentials().map(|found| found.is_some()),
            Err(SettingsError::MissingStoreKey)
        );
    }

    #[rstest]
    fn taking_credentials_leaves_no_key_in_settings() {
        let _guard = lock_env([
            ("CONSOLE_BIND_ADDR", None::<String>),
            (
                "CONSOLE_STORE_URL",
                Some("https://records.example.com".to_owned()),
            ),
            ("CONSOLE_STORE_KEY", Some("anon-key".to_owned())),
            ("CONSOLE_STORE_TIMEOUT_SECS", None),
            ("CONSOLE_ALLOWED_ORIGIN", None),
        ]);

        let mut settings = load_from_empty_args();
        let (_url, key) = settings
            .take_store_credentials()
            .expect("credentials valid")
            .expect("store configured");

        assert_eq!(key.as_str(), "anon-key");
        assert!(settings.store_key.is_none());
        assert!(settings.store_url.is_none());
        assert_eq!(settings.take_store_credentials(), Ok(None));
    }

    #[rstest]
    fn debug_output_hides_the_store_key() {
        let _guard = lock_env([
            ("CONSOLE_BIND_ADDR", None::<String>),
            ("CONSOLE_STORE_URL", None),
            ("CONSOLE_STORE_KEY", Some("super-secret".to_owned())),
            ("CONSOLE_STORE_TIMEOUT_SECS", None),
            ("CONSOLE_ALLOWED_ORIGIN", None),
        ]);

        let rendered = format!("{:?}", load_from_empty_args());
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
