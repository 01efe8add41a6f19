//! Background style resolution.
//!
//! An explicit color always wins and suppresses the class defaults, so a
//! marker never carries two competing background layers.

use crate::types::{Rgb, NON_PLAYER_BG, NON_PLAYER_CLASS, PLAYER_BG, PLAYER_CLASS};

/// The single style descriptor of a marker backing layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MarkerStyle {
    /// Caller-supplied background, passed through untouched.
    Custom(String),
    /// Player default appearance.
    Player,
    /// Neutral default for every other entity.
    NonPlayer,
}

impl MarkerStyle {
    /// Style class applied by default, `None` when a custom color is set.
    pub fn default_class(&self) -> Option<&'static str> {
        match self {
            MarkerStyle::Custom(_) => None,
            MarkerStyle::Player => Some(PLAYER_CLASS),
            MarkerStyle::NonPlayer => Some(NON_PLAYER_CLASS),
        }
    }

    /// Explicit color string, if any.
    pub fn custom_color(&self) -> Option<&str> {
        match self {
            MarkerStyle::Custom(c) => Some(c),
            _ => None,
        }
    }

    /// Background of the class defaults, `None` for custom colors.
    pub fn default_background(&self) -> Option<Rgb> {
        match self {
            MarkerStyle::Custom(_) => None,
            MarkerStyle::Player => Some(PLAYER_BG),
            MarkerStyle::NonPlayer => Some(NON_PLAYER_BG),
        }
    }
}

/// Pick the marker style from an optional color and the identity flag.
pub fn resolve_style(color: Option<&str>, is_player: bool) -> MarkerStyle {
    match color {
        Some(c) => MarkerStyle::Custom(c.to_string()),
        None if is_player => MarkerStyle::Player,
        None => MarkerStyle::NonPlayer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_color_wins_regardless_of_identity() {
        for is_player in [true, false] {
            let style = resolve_style(Some("#ff0000"), is_player);
            assert_eq!(style, MarkerStyle::Custom("#ff0000".to_string()));
            assert_eq!(style.default_class(), None);
            assert_eq!(style.default_background(), None);
            assert_eq!(style.custom_color(), Some("#ff0000"));
        }
    }

    #[test]
    fn identity_defaults() {
        let player = resolve_style(None, true);
        assert_eq!(player, MarkerStyle::Player);
        assert_eq!(player.default_class(), Some(PLAYER_CLASS));
        assert_eq!(player.default_background(), Some(PLAYER_BG));

        let npc = resolve_style(None, false);
        assert_eq!(npc, MarkerStyle::NonPlayer);
        assert_eq!(npc.default_class(), Some(NON_PLAYER_CLASS));
        assert_eq!(npc.default_background(), Some(NON_PLAYER_BG));
    }

    #[test]
    fn invalid_color_strings_pass_through() {
        let style = resolve_style(Some("not-a-color"), true);
        assert_eq!(style.custom_color(), Some("not-a-color"));
    }
}
