//! Theme and font settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Collapse `System` using the user agent's color-scheme preference.
    pub fn resolve(self, prefers_dark: bool) -> ThemeMode {
        match self {
            ThemeMode::System if prefers_dark => ThemeMode::Dark,
            ThemeMode::System => ThemeMode::Light,
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}

/// How the theme is applied to the document root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    /// `"class"` puts the theme in the root class list; any other value
    /// writes it to `data-theme`.
    pub attribute: String,
    pub default_theme: ThemeMode,
    pub enable_system: bool,
    pub disable_transition_on_change: bool,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            attribute: "class".to_string(),
            default_theme: ThemeMode::System,
            enable_system: true,
            disable_transition_on_change: true,
        }
    }
}

impl ThemeSettings {
    /// Theme written into static markup. With system detection disabled a
    /// `System` default falls back to light.
    pub fn initial_theme(&self) -> ThemeMode {
        match self.default_theme {
            ThemeMode::System if !self.enable_system => ThemeMode::Light,
            t => t,
        }
    }
}

/// Web font loaded for the body text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    pub subsets: Vec<String>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "Inter".to_string(),
            subsets: vec!["latin".to_string()],
        }
    }
}

impl FontConfig {
    pub fn stylesheet_href(&self) -> String {
        let family = self.family.replace(' ', "+");
        format!(
            "https://fonts.googleapis.com/css2?family={}:wght@400;500;600;700&subset={}&display=swap",
            family,
            self.subsets.join(",")
        )
    }

    /// Class applied to `<body>`.
    pub fn class_name(&self) -> String {
        format!("font-{}", self.family.to_ascii_lowercase().replace(' ', "-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_resolves_by_preference() {
        assert_eq!(ThemeMode::System.resolve(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::System.resolve(false), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.resolve(false), ThemeMode::Dark);
    }

    #[test]
    fn parse_theme_names() {
        assert_eq!("DARK".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn system_disabled_falls_back_to_light() {
        let t = ThemeSettings { enable_system: false, ..Default::default() };
        assert_eq!(t.initial_theme(), ThemeMode::Light);
    }

    #[test]
    fn font_href_and_class() {
        let f = FontConfig::default();
        assert!(f.stylesheet_href().contains("family=Inter"));
        assert_eq!(f.class_name(), "font-inter");
    }
}
