//! Viewer configuration.
//!
//! # Environment Variables
//!
//! - `ENTITY_DOT_CELL_W`: cell width in terminal columns (default: 2)
//! - `ENTITY_DOT_CELL_H`: cell height in terminal rows (default: 1)
//! - `ENTITY_DOT_OVERLAY_SCALE`: marker footprint scale (default: 2)
//! - `ENTITY_DOT_OVERLAY_BORDER`: extra footprint units (default: 1)
//! - `ENTITY_DOT_OVERLAY_ANCHOR`: "top-left" or "center" (default: "top-left")
//! - `ENTITY_DOT_LOG_PATH`: write logs to this file (default: no logging)
//!
//! Missing or unparseable values fall back to their defaults.

use crate::core::{Anchor, OverlayConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    pub cell_w: u16,
    pub cell_h: u16,
    pub overlay: OverlayConfig,
    pub log_path: Option<String>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            overlay: OverlayConfig::default(),
            log_path: None,
        }
    }
}

impl ViewConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let num = |key: &str, default: u16| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u16>().ok())
                .unwrap_or(default)
        };

        let cell_w = num("ENTITY_DOT_CELL_W", defaults.cell_w).max(1);
        let cell_h = num("ENTITY_DOT_CELL_H", defaults.cell_h).max(1);

        let overlay = OverlayConfig {
            scale: num("ENTITY_DOT_OVERLAY_SCALE", defaults.overlay.scale),
            border: num("ENTITY_DOT_OVERLAY_BORDER", defaults.overlay.border),
            anchor: lookup("ENTITY_DOT_OVERLAY_ANCHOR")
                .and_then(|s| Anchor::from_str(&s))
                .unwrap_or(defaults.overlay.anchor),
        };

        let log_path = lookup("ENTITY_DOT_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            cell_w,
            cell_h,
            overlay,
            log_path,
        }
    }
}
