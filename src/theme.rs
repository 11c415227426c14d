use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "DARK",
            Theme::Light => "LIGHT",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Color::Black,
                foreground: Color::Gray,
                muted: Color::DarkGray,
                accent: Color::Rgb(255, 153, 51),
                folder: Color::Cyan,
                link: Color::LightBlue,
                item: Color::Gray,
                edge: Color::DarkGray,
                selected_fg: Color::Black,
                selected_bg: Color::Rgb(255, 153, 51),
                message_fg: Color::Black,
                message_bg: Color::Magenta,
            },
            Theme::Light => Palette {
                background: Color::White,
                foreground: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                folder: Color::Blue,
                link: Color::Magenta,
                item: Color::DarkGray,
                edge: Color::Gray,
                selected_fg: Color::White,
                selected_bg: Color::Blue,
                message_fg: Color::White,
                message_bg: Color::Magenta,
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme '{}', expected 'dark' or 'light'", other)),
        }
    }
}

/// Colours used by the renderer for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub folder: Color,
    pub link: Color,
    pub item: Color,
    pub edge: Color,
    pub selected_fg: Color,
    pub selected_bg: Color,
    pub message_fg: Color,
    pub message_bg: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" light ".parse::<Theme>(), Ok(Theme::Light));
        assert!("blue".parse::<Theme>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Theme::Dark.label(), "DARK");
        assert_eq!(Theme::Light.to_string(), "light");
    }
}
