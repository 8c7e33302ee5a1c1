use crate::i18n::Language;
use crate::preferences::{Preferences, Theme};
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Defaults for visitors with no stored preferences
    pub default_language: Language,
    pub default_theme: Theme,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_language = match std::env::var("DEFAULT_LANGUAGE") {
            Ok(code) => Language::from_code(&code).context("DEFAULT_LANGUAGE is not supported")?,
            Err(_) => Language::canonical(),
        };

        let default_theme = match std::env::var("DEFAULT_THEME") {
            Ok(theme) => theme.parse().context("DEFAULT_THEME is not valid")?,
            Err(_) => Theme::default(),
        };

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            default_language,
            default_theme,
        })
    }

    /// Preferences for a visitor that sent no usable signal.
    pub fn default_preferences(&self) -> Preferences {
        Preferences::new(self.default_language, self.default_theme)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &["HOST", "PORT", "DEFAULT_LANGUAGE", "DEFAULT_THEME"];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.default_language, Language::ENGLISH);
        assert_eq!(config.default_theme, Theme::Dark);
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "3000");
        std::env::set_var("DEFAULT_LANGUAGE", "zh-HK");
        std::env::set_var("DEFAULT_THEME", "light");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(
            config.default_preferences(),
            Preferences::new(Language::TRADITIONAL_CHINESE, Theme::Light)
        );
    }

    #[test]
    #[serial]
    fn test_invalid_port_uses_default() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.port, 8080);
    }

    #[test]
    #[serial]
    fn test_unsupported_language_is_an_error() {
        clear_env();
        std::env::set_var("DEFAULT_LANGUAGE", "de");

        let result = Config::from_env();
        clear_env();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("DEFAULT_LANGUAGE"));
    }

    #[test]
    #[serial]
    fn test_invalid_theme_is_an_error() {
        clear_env();
        std::env::set_var("DEFAULT_THEME", "sepia");

        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }
}
