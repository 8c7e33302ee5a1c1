//! Catalog consistency validation.
//!
//! A translated catalog must define the same keys as the canonical one and
//! keep the same placeholders in every template, otherwise interpolation
//! leaves raw `{tokens}` on the page or drops a substituted value.

use crate::i18n::{placeholders, Catalog};

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Keys the page cannot render in this language without fallback
    pub errors: Vec<String>,

    /// Suspicious entries that still render
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translated catalogs.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Compare a translated catalog against the canonical one.
    ///
    /// - a key missing from the translation is an error
    /// - a key only the translation defines is a warning
    /// - a key whose placeholders differ (as a multiset) is a warning
    pub fn validate(canonical: &Catalog, translated: &Catalog) -> ValidationReport {
        let mut report = ValidationReport::new();

        for (key, template) in canonical.entries() {
            let Some(translation) = translated.get(key) else {
                report.errors.push(format!(
                    "Missing key '{}' in {} catalog",
                    key,
                    translated.language()
                ));
                continue;
            };

            let expected = Self::placeholder_set(template);
            let actual = Self::placeholder_set(translation);
            if expected != actual {
                report.warnings.push(format!(
                    "Placeholder mismatch for '{}': canonical has {:?}, {} has {:?}",
                    key,
                    expected,
                    translated.language(),
                    actual
                ));
            }
        }

        for key in translated.keys() {
            if canonical.get(key).is_none() {
                report.warnings.push(format!(
                    "Unknown key '{}' in {} catalog",
                    key,
                    translated.language()
                ));
            }
        }

        report
    }

    fn placeholder_set(template: &str) -> Vec<&str> {
        let mut names = placeholders(template);
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_canonical_against_itself_is_clean() {
        let canonical = Catalog::canonical();
        assert!(CatalogValidator::validate(&canonical, &canonical).is_clean());
    }

    #[test]
    fn test_traditional_chinese_catalog_is_clean() {
        let report = CatalogValidator::validate(
            &Catalog::canonical(),
            &Catalog::for_language(Language::TRADITIONAL_CHINESE),
        );
        assert!(report.is_clean(), "{report:?}");
    }

    #[test]
    fn test_french_catalog_is_clean() {
        let report = CatalogValidator::validate(
            &Catalog::canonical(),
            &Catalog::for_language(Language::FRENCH),
        );
        assert!(report.is_clean(), "{report:?}");
    }

    // ==================== Fixture Catalog Tests ====================

    const CANONICAL: &[(&str, &str)] = &[
        ("greeting", "Hello {name}!"),
        ("pair", "{a} and {a}"),
        ("title", "Welcome"),
    ];

    fn canonical_fixture() -> Catalog {
        Catalog::from_entries(Language::ENGLISH, CANONICAL)
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let translated = Catalog::from_entries(
            Language::FRENCH,
            &[("greeting", "Bonjour {name} !"), ("pair", "{a} et {a}")],
        );

        let report = CatalogValidator::validate(&canonical_fixture(), &translated);

        assert!(!report.has_warnings(), "{report:?}");
        assert_eq!(
            report.errors,
            vec!["Missing key 'title' in fr catalog".to_string()]
        );
    }

    #[test]
    fn test_unknown_key_is_a_warning() {
        let translated = Catalog::from_entries(
            Language::FRENCH,
            &[
                ("greeting", "Bonjour {name} !"),
                ("pair", "{a} et {a}"),
                ("title", "Bienvenue"),
                ("extra", "En trop"),
            ],
        );

        let report = CatalogValidator::validate(&canonical_fixture(), &translated);

        assert!(!report.has_errors(), "{report:?}");
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("Unknown key 'extra'"));
    }

    #[test]
    fn test_renamed_placeholder_is_a_warning() {
        let translated = Catalog::from_entries(
            Language::TRADITIONAL_CHINESE,
            &[
                ("greeting", "你好{nom}！"),
                ("pair", "{a}和{a}"),
                ("title", "歡迎"),
            ],
        );

        let report = CatalogValidator::validate(&canonical_fixture(), &translated);

        assert!(!report.has_errors(), "{report:?}");
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("Placeholder mismatch for 'greeting'"));
        assert!(report.warnings[0].contains("zh-HK"));
    }

    #[test]
    fn test_dropped_duplicate_placeholder_is_a_warning() {
        let translated = Catalog::from_entries(
            Language::FRENCH,
            &[
                ("greeting", "Bonjour {name} !"),
                ("pair", "{a} seulement"),
                ("title", "Bienvenue"),
            ],
        );

        let report = CatalogValidator::validate(&canonical_fixture(), &translated);

        assert!(!report.has_errors(), "{report:?}");
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("Placeholder mismatch for 'pair'"));
    }

    #[test]
    fn test_reordered_placeholders_are_clean() {
        let canonical = Catalog::from_entries(Language::ENGLISH, &[("route", "{from} to {to}")]);
        let translated =
            Catalog::from_entries(Language::FRENCH, &[("route", "vers {to} depuis {from}")]);

        assert!(CatalogValidator::validate(&canonical, &translated).is_clean());
    }

    #[test]
    fn test_placeholder_set_ignores_order() {
        assert_eq!(
            CatalogValidator::placeholder_set("{b} then {a}"),
            CatalogValidator::placeholder_set("{a} puis {b}")
        );
        assert_ne!(
            CatalogValidator::placeholder_set("{a} {a}"),
            CatalogValidator::placeholder_set("{a}")
        );
    }

    #[test]
    fn test_validation_report_states() {
        let mut report = ValidationReport::new();
        assert!(report.is_clean());

        report.warnings.push("Test warning".to_string());
        assert!(!report.is_clean());
        assert!(report.has_warnings());
        assert!(!report.has_errors());

        report.errors.push("Test error".to_string());
        assert!(report.has_errors());
    }
}
