//! Language type: validated language representation.
//!
//! A `Language` can only be constructed for a code that exists in the
//! registry. Browser language tags are negotiated with
//! [`Language::detect`], which always produces a supported language.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated language.
///
/// This type represents a language that has been validated against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// BCP 47 language tag as stored in the registry (e.g., "en", "zh-HK")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const TRADITIONAL_CHINESE: Language = Language { code: "zh-HK" };
    pub const FRENCH: Language = Language { code: "fr" };

    /// Create a Language from its exact registry code.
    ///
    /// # Arguments
    /// * `code` - The BCP 47 tag as registered (e.g., "en", "zh-HK", "fr")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered
    /// * `Err` if the code is not found
    ///
    /// # Example
    /// ```ignore
    /// let chinese = Language::from_code("zh-HK")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the canonical language.
    ///
    /// # Returns
    /// The canonical Language (English), which every catalog falls back to.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Pick a supported language for a browser language tag.
    ///
    /// An exact registry match wins (`zh-HK`, `fr`). Otherwise only the
    /// primary subtag is considered: any Chinese variant maps to `zh-HK`,
    /// French to `fr`, everything else to the canonical language.
    ///
    /// # Arguments
    /// * `tag` - A browser language tag such as `navigator.language` (e.g., "zh-TW")
    ///
    /// # Returns
    /// A supported Language; never fails.
    pub fn detect(tag: &str) -> Language {
        let tag = tag.trim();

        if let Ok(language) = Language::from_code(tag) {
            return language;
        }

        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "zh" => Language::TRADITIONAL_CHINESE,
            "fr" => Language::FRENCH,
            _ => Language::canonical(),
        }
    }

    /// Pick a supported language from an `Accept-Language` header value.
    ///
    /// Only the first listed tag is used; quality weights are ignored.
    ///
    /// # Arguments
    /// * `header` - The raw header value (e.g., "fr-CH, fr;q=0.9, en;q=0.8")
    ///
    /// # Returns
    /// The language [`Language::detect`] picks for the first tag.
    pub fn from_accept_language(header: &str) -> Language {
        let first = header
            .split(',')
            .next()
            .and_then(|tag| tag.split(';').next())
            .unwrap_or_default();

        Language::detect(first)
    }

    /// Get the language code.
    ///
    /// # Returns
    /// The registered tag as a static string (e.g., "en", "zh-HK").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Returns
    /// A reference to the `LanguageConfig` for this language.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a Language built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    ///
    /// # Returns
    /// The language name in English (e.g., "English", "French").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    ///
    /// # Returns
    /// The language name in its native form (e.g., "繁體中文", "Français").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the canonical language.
    ///
    /// # Returns
    /// `true` for the fallback language, `false` for translations.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}
