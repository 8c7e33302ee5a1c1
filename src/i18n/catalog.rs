//! Built-in localized strings, keyed by dotted message id.
//!
//! Templates may contain `{placeholder}` tokens which are filled in with
//! [`crate::i18n::interpolate`]. Every key must exist in the English catalog;
//! other languages fall back to English for keys they do not define.

use crate::i18n::Language;

type Entries = &'static [(&'static str, &'static str)];

/// A language's message catalog.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    language: Language,
    entries: Entries,
}

impl Catalog {
    /// Get the built-in catalog for a language.
    pub fn for_language(language: Language) -> Catalog {
        let entries = match language.code() {
            "zh-HK" => TRADITIONAL_CHINESE_STRINGS,
            "fr" => FRENCH_STRINGS,
            _ => ENGLISH_STRINGS,
        };

        Catalog { language, entries }
    }

    /// Build a catalog from explicit entries.
    #[cfg(test)]
    pub(crate) fn from_entries(language: Language, entries: Entries) -> Catalog {
        Catalog { language, entries }
    }

    /// Get the canonical catalog.
    pub fn canonical() -> Catalog {
        Catalog::for_language(Language::canonical())
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Look up a key in this catalog only.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, text)| *text)
    }

    /// Look up a key, falling back to the canonical catalog.
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.get(key).or_else(|| {
            if self.language.is_canonical() {
                None
            } else {
                Catalog::canonical().get(key)
            }
        })
    }

    /// Localized text for a key.
    ///
    /// Unknown keys render as the key itself so missing content shows up on
    /// the page instead of failing the request.
    pub fn message<'a>(&self, key: &'a str) -> &'a str {
        match self.lookup(key) {
            Some(text) => text,
            None => {
                tracing::warn!(language = %self.language, key, "Missing catalog key");
                key
            }
        }
    }

    /// All keys defined by this catalog, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn entries(&self) -> Entries {
        self.entries
    }
}

// ==================== English Strings ====================

/// English strings (canonical)
const ENGLISH_STRINGS: Entries = &[
    // Navigation
    ("nav.home", "Home"),
    ("nav.skills", "Skills"),
    ("nav.projects", "Projects"),
    ("nav.architecture", "Architecture"),
    ("nav.hongkong", "Origin"),
    ("nav.hobbies", "Hobbies"),
    ("nav.contact", "Contact"),
    // Hobbies
    ("hobbies.title", "Beyond the Code"),
    ("hobbies.intp", "INTP"),
    (
        "hobbies.introParagraph1",
        "As an {intp}, I am driven by curiosity and a need to understand how things work, from trading systems to football tactics.",
    ),
    // Hong Kong
    ("hongkong.title", "Where It All Started"),
    ("hongkong.hongKong", "Hong Kong"),
    (
        "hongkong.paragraph1",
        "Born and raised in {hongKong}, I grew up in a city that never stops moving.",
    ),
    // Contact
    ("contact.title", "Get In Touch"),
    ("contact.emailPrompt", "Drop me a line at {email}."),
    // Theme
    ("theme.switchTo", "Switch to {theme} mode"),
    ("theme.light", "light"),
    ("theme.dark", "dark"),
    // Command palette
    (
        "palette.placeholder",
        "Type a command or search... (e.g., 'goto projects', 'cat server-logs')",
    ),
    ("palette.unknown", "No results found for '{command}'. Try 'help' for available commands."),
    ("common.pressEscToResume", "Press ESC to resume"),
];

// ==================== Traditional Chinese Strings ====================

/// Traditional Chinese (Hong Kong) strings
const TRADITIONAL_CHINESE_STRINGS: Entries = &[
    ("nav.home", "首頁"),
    ("nav.skills", "技能"),
    ("nav.projects", "項目"),
    ("nav.architecture", "架構"),
    ("nav.hongkong", "起源"),
    ("nav.hobbies", "興趣"),
    ("nav.contact", "聯絡"),
    ("hobbies.title", "程式以外"),
    ("hobbies.intp", "INTP"),
    (
        "hobbies.introParagraph1",
        "作為一個{intp}，我總是充滿好奇，想了解事物如何運作，由交易系統到足球戰術都是。",
    ),
    ("hongkong.title", "一切由此開始"),
    ("hongkong.hongKong", "香港"),
    ("hongkong.paragraph1", "我在{hongKong}出生和長大，這是一個從不停步的城市。"),
    ("contact.title", "聯絡我"),
    ("contact.emailPrompt", "歡迎電郵至{email}。"),
    ("theme.switchTo", "切換至{theme}模式"),
    ("theme.light", "淺色"),
    ("theme.dark", "深色"),
    ("palette.placeholder", "輸入指令或搜尋……（例如：'goto projects'、'cat server-logs'）"),
    ("palette.unknown", "找不到「{command}」。輸入 'help' 查看可用指令。"),
    ("common.pressEscToResume", "按 ESC 繼續"),
];

// ==================== French Strings ====================

/// French strings
const FRENCH_STRINGS: Entries = &[
    ("nav.home", "Accueil"),
    ("nav.skills", "Compétences"),
    ("nav.projects", "Projets"),
    ("nav.architecture", "Architecture"),
    ("nav.hongkong", "Origines"),
    ("nav.hobbies", "Loisirs"),
    ("nav.contact", "Contact"),
    ("hobbies.title", "Au-delà du code"),
    ("hobbies.intp", "INTP"),
    (
        "hobbies.introParagraph1",
        "En tant qu'{intp}, je suis guidé par la curiosité et le besoin de comprendre comment les choses fonctionnent, des systèmes de trading aux tactiques de football.",
    ),
    ("hongkong.title", "Là où tout a commencé"),
    ("hongkong.hongKong", "Hong Kong"),
    (
        "hongkong.paragraph1",
        "Né et élevé à {hongKong}, j'ai grandi dans une ville qui ne s'arrête jamais.",
    ),
    ("contact.title", "Me contacter"),
    ("contact.emailPrompt", "Écrivez-moi à {email}."),
    ("theme.switchTo", "Passer en mode {theme}"),
    ("theme.light", "clair"),
    ("theme.dark", "sombre"),
    (
        "palette.placeholder",
        "Tapez une commande ou recherchez... (ex. : 'goto projects', 'cat server-logs')",
    ),
    ("palette.unknown", "Aucun résultat pour '{command}'. Essayez 'help' pour voir les commandes."),
    ("common.pressEscToResume", "Appuyez sur Échap pour reprendre"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::placeholders;

    #[test]
    fn test_for_language_selects_catalog() {
        assert_eq!(
            Catalog::for_language(Language::FRENCH).get("nav.home"),
            Some("Accueil")
        );
        assert_eq!(
            Catalog::for_language(Language::TRADITIONAL_CHINESE).get("nav.home"),
            Some("首頁")
        );
        assert_eq!(Catalog::canonical().get("nav.home"), Some("Home"));
    }

    #[test]
    fn test_lookup_falls_back_to_canonical() {
        let partial = Catalog::from_entries(Language::FRENCH, &[("nav.home", "Accueil")]);

        assert_eq!(partial.get("common.pressEscToResume"), None);
        assert_eq!(
            partial.lookup("common.pressEscToResume"),
            Some("Press ESC to resume")
        );
        assert_eq!(partial.lookup("nav.home"), Some("Accueil"));
        assert_eq!(partial.message("hongkong.hongKong"), "Hong Kong");
    }

    #[test]
    fn test_canonical_catalog_does_not_fall_back() {
        let partial = Catalog::from_entries(Language::ENGLISH, &[("nav.home", "Start")]);

        assert_eq!(partial.lookup("nav.home"), Some("Start"));
        assert_eq!(partial.lookup("nav.skills"), None);
        assert_eq!(partial.message("nav.skills"), "nav.skills");
    }

    #[test]
    fn test_french_escape_hint_is_translated() {
        assert_eq!(
            Catalog::for_language(Language::FRENCH).get("common.pressEscToResume"),
            Some("Appuyez sur Échap pour reprendre")
        );
    }

    #[test]
    fn test_lookup_unknown_key() {
        assert_eq!(Catalog::canonical().lookup("nope.missing"), None);
        assert_eq!(
            Catalog::for_language(Language::FRENCH).lookup("nope.missing"),
            None
        );
    }

    #[test]
    fn test_message_returns_key_when_missing() {
        let catalog = Catalog::for_language(Language::TRADITIONAL_CHINESE);

        assert_eq!(catalog.message("nope.missing"), "nope.missing");
        assert_eq!(catalog.message("hongkong.hongKong"), "香港");
    }

    #[test]
    fn test_interpolated_sentences_have_placeholders() {
        for language in [Language::ENGLISH, Language::TRADITIONAL_CHINESE, Language::FRENCH] {
            let catalog = Catalog::for_language(language);

            assert_eq!(
                placeholders(catalog.message("hobbies.introParagraph1")),
                vec!["intp"]
            );
            assert_eq!(
                placeholders(catalog.message("hongkong.paragraph1")),
                vec!["hongKong"]
            );
        }
    }

    #[test]
    fn test_keys_are_unique() {
        for language in [Language::ENGLISH, Language::TRADITIONAL_CHINESE, Language::FRENCH] {
            let mut keys: Vec<_> = Catalog::for_language(language).keys().collect();
            let total = keys.len();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), total, "duplicate key in {language}");
        }
    }
}
