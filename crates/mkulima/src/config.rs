//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use mkulima_core::Locale;
use tracing::warn;

/// Default directory for the stored session.
pub const DEFAULT_DATA_DIR: &str = ".mkulima";

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the session record.
    pub data_dir: PathBuf,
    /// Locale at startup.
    pub locale: Locale,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `MKULIMA_DATA_DIR` | Session directory | `.mkulima` |
    /// | `MKULIMA_LANG` | Initial locale (`sw` or `en`) | `sw` |
    pub fn from_env() -> Self {
        let data_dir = env::var("MKULIMA_DATA_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let locale = match env::var("MKULIMA_LANG") {
            Ok(value) => Locale::parse(&value).unwrap_or_else(|| {
                warn!(value = %value, "Unsupported MKULIMA_LANG, using sw");
                Locale::Sw
            }),
            Err(_) => Locale::Sw,
        };

        Self { data_dir, locale }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        // Scenario 1: defaults
        std::env::remove_var("MKULIMA_DATA_DIR");
        std::env::remove_var("MKULIMA_LANG");
        let config = Config::from_env();
        assert_eq!(config.data_dir, PathBuf::from(".mkulima"));
        assert_eq!(config.locale, Locale::Sw);

        // Scenario 2: both set
        std::env::set_var("MKULIMA_DATA_DIR", "/var/lib/mkulima");
        std::env::set_var("MKULIMA_LANG", "en-KE");
        let config = Config::from_env();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/mkulima"));
        assert_eq!(config.locale, Locale::En);

        // Scenario 3: unsupported language falls back
        std::env::set_var("MKULIMA_LANG", "fr");
        assert_eq!(Config::from_env().locale, Locale::Sw);

        std::env::remove_var("MKULIMA_DATA_DIR");
        std::env::remove_var("MKULIMA_LANG");
    }
}
