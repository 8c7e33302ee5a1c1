//! Visitor preferences: display language and color theme.
//!
//! Preferences are plain values. They are resolved once per request from what
//! the browser stored (a `Cookie` header here, `localStorage` on the client)
//! and then passed explicitly to whatever renders content.

use crate::i18n::Language;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Storage key for the language preference.
pub const LANGUAGE_KEY: &str = "language";

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "theme";

/// Color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}' (expected 'light' or 'dark')")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

/// Resolved preferences for one visitor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
}

impl Preferences {
    pub fn new(language: Language, theme: Theme) -> Self {
        Self { language, theme }
    }

    /// Resolve preferences from stored values and the browser language.
    ///
    /// Language: a valid stored value wins, then the `Accept-Language`
    /// header, then `fallback`. Theme: a valid stored value wins, then
    /// `fallback`. Invalid stored values are ignored.
    pub fn resolve(
        stored: &HashMap<String, String>,
        accept_language: Option<&str>,
        fallback: Preferences,
    ) -> Preferences {
        let stored_language = stored.get(LANGUAGE_KEY).and_then(|code| {
            Language::from_code(code)
                .map_err(|e| debug!("Ignoring stored language: {}", e))
                .ok()
        });

        let language = match (stored_language, accept_language) {
            (Some(language), _) => language,
            (None, Some(header)) => Language::from_accept_language(header),
            (None, None) => fallback.language,
        };

        let theme = stored
            .get(THEME_KEY)
            .and_then(|value| {
                value
                    .parse::<Theme>()
                    .map_err(|e| debug!("Ignoring stored theme: {}", e))
                    .ok()
            })
            .unwrap_or(fallback.theme);

        Preferences { language, theme }
    }

    /// Key/value pairs to store so the next visit resolves to these preferences.
    pub fn to_stored(&self) -> HashMap<String, String> {
        HashMap::from([
            (LANGUAGE_KEY.to_string(), self.language.code().to_string()),
            (THEME_KEY.to_string(), self.theme.as_str().to_string()),
        ])
    }
}

/// Parse a `Cookie` header (`a=1; b=2`) into key/value pairs.
///
/// Pairs without `=` are skipped. Later duplicates win.
pub fn parse_cookie_header(header: &str) -> HashMap<String, String> {
    header
        .split(';')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), value.trim().trim_matches('"').to_string()))
        })
        .collect()
}
