//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::types::WordPosition;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub matching: MatchingSettings,
    pub grouping: GroupingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    pub ignore_case: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupingSettings {
    pub placeholder: String,
    pub linked_separator: String,
    pub light_tone_separator: String,
}

impl GroupingSettings {
    /// Separator shown before a syllable in `tag` position.
    pub fn separator(&self, tag: WordPosition) -> Option<&str> {
        match tag {
            WordPosition::Head => None,
            WordPosition::Linked => Some(self.linked_separator.as_str()),
            WordPosition::LightTone => Some(self.light_tone_separator.as_str()),
        }
    }
}

impl Default for GroupingSettings {
    fn default() -> Self {
        Self {
            placeholder: "\u{00A0}".to_string(),
            linked_separator: "-".to_string(),
            light_tone_separator: "--".to_string(),
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_non_empty!(grouping.placeholder);
    check_non_empty!(grouping.linked_separator);
    check_non_empty!(grouping.light_tone_separator);

    if s.grouping.linked_separator == s.grouping.light_tone_separator {
        return Err(SettingsError::InvalidValue {
            field: "grouping.light_tone_separator".to_string(),
            reason: "must differ from grouping.linked_separator".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert!(s.matching.ignore_case);
        assert_eq!(s.grouping, GroupingSettings::default());
        assert_eq!(s.grouping.separator(WordPosition::Head), None);
        assert_eq!(s.grouping.separator(WordPosition::Linked), Some("-"));
        assert_eq!(s.grouping.separator(WordPosition::LightTone), Some("--"));
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[matching]
ignore_case = false

[grouping]
placeholder = "_"
linked_separator = "‑"
light_tone_separator = "‑‑"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert!(!s.matching.ignore_case);
        assert_eq!(s.grouping.placeholder, "_");
    }

    #[test]
    fn error_empty_placeholder() {
        let toml = DEFAULT_SETTINGS_TOML.replace("\"\\u00A0\"", "\"\"");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "grouping.placeholder"),
            "{err}"
        );
    }

    #[test]
    fn error_identical_separators() {
        let toml = DEFAULT_SETTINGS_TOML.replace("\"--\"", "\"-\"");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("[matching]\nignore_case = true\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn default_toml_is_embedded() {
        assert!(default_toml().contains("[grouping]"));
    }
}
