//! Active display and prompt language.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Supported locales.
///
/// Exactly one is active at a time. Swahili is the default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Kiswahili (default).
    #[default]
    Sw,
    /// English.
    En,
}

/// Ordered list of supported locales.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::Sw, Locale::En];

impl Locale {
    /// Returns the canonical locale code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sw => "sw",
            Self::En => "en",
        }
    }

    /// The other supported locale.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Sw => Self::En,
            Self::En => Self::Sw,
        }
    }

    /// Name of the locale written in that locale, used on the toggle button.
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::Sw => "Kiswahili",
            Self::En => "English",
        }
    }

    /// Parse a locale code, tolerant of case and region tags (`sw-TZ`, `en_KE`).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.split(['-', '_']).next().unwrap_or("") {
            "sw" => Some(Self::Sw),
            "en" => Some(Self::En),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unsupported locale: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_swahili() {
        assert_eq!(Locale::default(), Locale::Sw);
    }

    #[test]
    fn test_toggle_cycles() {
        assert_eq!(Locale::Sw.toggled(), Locale::En);
        assert_eq!(Locale::En.toggled().toggled(), Locale::En);
    }

    #[test]
    fn test_parse_region_tags() {
        assert_eq!(Locale::parse("sw-TZ"), Some(Locale::Sw));
        assert_eq!(Locale::parse(" EN_ke "), Some(Locale::En));
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Locale::En).unwrap(), "\"en\"");
        let parsed: Locale = serde_json::from_str("\"sw\"").unwrap();
        assert_eq!(parsed, Locale::Sw);
    }
}
