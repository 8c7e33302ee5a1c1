//! Command palette: maps typed commands to site actions.
//!
//! The palette opens with Cmd+K / Ctrl+K. Commands are looked up in a fixed
//! table after normalization; anything not in the table is ignored.

use serde::Serialize;

/// A page section that can be navigated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    Skills,
    Projects,
    Architecture,
    HongKong,
    Hobbies,
    Contact,
}

impl Section {
    /// Catalog key for the section's navigation label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Section::Home => "nav.home",
            Section::Skills => "nav.skills",
            Section::Projects => "nav.projects",
            Section::Architecture => "nav.architecture",
            Section::HongKong => "nav.hongkong",
            Section::Hobbies => "nav.hobbies",
            Section::Contact => "nav.contact",
        }
    }
}

/// What a command does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Navigate { section: Section },
    OpenExternal { url: &'static str },
    ShowLogs,
    ShowStatus,
}

const GITHUB_URL: &str = "https://github.com/iamtlcs";
const LINKEDIN_URL: &str = "https://linkedin.com/in/iamtlcs";

/// Prefixes accepted in front of a command, e.g. `goto projects`.
const COMMAND_PREFIXES: &[&str] = &["goto ", "cd "];

const COMMANDS: &[(&str, Action)] = &[
    ("home", Action::Navigate { section: Section::Home }),
    ("skills", Action::Navigate { section: Section::Skills }),
    ("skills-track", Action::Navigate { section: Section::Skills }),
    ("racetrack", Action::Navigate { section: Section::Skills }),
    ("f1", Action::Navigate { section: Section::Skills }),
    ("projects", Action::Navigate { section: Section::Projects }),
    ("architecture", Action::Navigate { section: Section::Architecture }),
    ("hongkong", Action::Navigate { section: Section::HongKong }),
    ("origin", Action::Navigate { section: Section::HongKong }),
    ("hobbies", Action::Navigate { section: Section::Hobbies }),
    ("contact", Action::Navigate { section: Section::Contact }),
    ("github", Action::OpenExternal { url: GITHUB_URL }),
    ("linkedin", Action::OpenExternal { url: LINKEDIN_URL }),
    ("logs", Action::ShowLogs),
    ("status", Action::ShowStatus),
];

pub struct CommandPalette;

impl CommandPalette {
    /// Resolve typed input to an action.
    ///
    /// Input is trimmed and lowercased, and a leading `goto ` or `cd ` is
    /// dropped. Returns `None` for unknown commands.
    pub fn dispatch(input: &str) -> Option<Action> {
        let command = Self::normalize(input);

        COMMANDS
            .iter()
            .find(|(name, _)| *name == command)
            .map(|(_, action)| *action)
    }

    /// Command names in table order.
    pub fn commands() -> impl Iterator<Item = &'static str> {
        COMMANDS.iter().map(|(name, _)| *name)
    }

    fn normalize(input: &str) -> String {
        let command = input.trim().to_lowercase();

        for prefix in COMMAND_PREFIXES {
            if let Some(rest) = command.strip_prefix(prefix) {
                return rest.trim().to_string();
            }
        }

        command
    }
}

/// Whether a key press toggles the palette (Cmd+K or Ctrl+K).
///
/// `key` is the DOM `KeyboardEvent.key` value, so Shift+K arrives as `"K"`
/// and does not toggle.
pub fn is_toggle_shortcut(key: &str, meta: bool, ctrl: bool) -> bool {
    key == "k" && (meta || ctrl)
}
