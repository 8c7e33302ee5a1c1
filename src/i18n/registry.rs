//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is a lazily initialized `OnceLock` singleton. It is immutable
//! after initialization, so it can be read from any thread without locking.

use std::sync::OnceLock;

/// Configuration for a supported language.
///
/// Contains the metadata the site needs to label and negotiate a language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// BCP 47 language tag (e.g., "en", "zh-HK", "fr")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "French")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "繁體中文", "Français")
    pub native_name: &'static str,

    /// Whether this is the canonical language (only one should be true)
    pub is_canonical: bool,
}

/// Global language registry singleton.
///
/// This registry contains all supported languages and provides methods to query
/// them. It's initialized once on first access and remains immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    ///
    /// This method initializes the registry on first call and returns a reference
    /// to the singleton instance on subsequent calls.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its exact code.
    ///
    /// # Arguments
    /// * `code` - The BCP 47 tag as registered (e.g., "en", "zh-HK")
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the code is not registered (matching is case-sensitive)
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all supported languages.
    ///
    /// # Returns
    /// A vector of references to every language configuration, in registry order.
    pub fn list(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the canonical language configuration.
    ///
    /// Every catalog key is authored in the canonical language first; other
    /// catalogs fall back to it.
    ///
    /// # Returns
    /// A reference to the canonical language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one canonical language.
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }
}

/// Default language configurations.
///
/// English (canonical), Traditional Chinese (Hong Kong) and French.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: true,
        },
        LanguageConfig {
            code: "zh-HK",
            name: "Traditional Chinese (Hong Kong)",
            native_name: "繁體中文",
            is_canonical: false,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            is_canonical: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LanguageRegistry::get().get_by_code("en").unwrap();

        assert_eq!(config.name, "English");
        assert!(config.is_canonical);
    }

    #[test]
    fn test_get_by_code_traditional_chinese() {
        let config = LanguageRegistry::get().get_by_code("zh-HK").unwrap();

        assert_eq!(config.native_name, "繁體中文");
        assert!(!config.is_canonical);
    }

    #[test]
    fn test_get_by_code_is_exact() {
        let registry = LanguageRegistry::get();

        assert!(registry.get_by_code("zh").is_none());
        assert!(registry.get_by_code("FR").is_none());
        assert!(registry.get_by_code("de").is_none());
    }

    #[test]
    fn test_list_in_order() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list()
            .iter()
            .map(|lang| lang.code)
            .collect();

        assert_eq!(codes, vec!["en", "zh-HK", "fr"]);
    }

    #[test]
    fn test_canonical_returns_english() {
        let canonical = LanguageRegistry::get().canonical();

        assert_eq!(canonical.code, "en");
    }
}
