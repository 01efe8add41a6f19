//! Overlay footprint geometry.
//!
//! A marker is anchored on one grid cell but may cover a larger area so a
//! sprite-sized dot can span neighboring cells without the grid reserving
//! space for it. Units are whatever the rendering layer uses for cells
//! (terminal columns/rows for the term crate).

use crate::types::{DEFAULT_OVERLAY_BORDER, DEFAULT_OVERLAY_SCALE};

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Center point, rounded toward the top-left.
    pub fn center(&self) -> (u16, u16) {
        (
            self.x.saturating_add(self.w / 2),
            self.y.saturating_add(self.h / 2),
        )
    }
}

/// Where the footprint sits relative to the anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// Footprint starts at the cell's top-left corner and grows right/down.
    #[default]
    TopLeft,
    /// Footprint is centered on the cell.
    Center,
}

impl Anchor {
    /// Parse from "top-left" | "topleft" | "center" | "centre" (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "top-left" | "topleft" | "top_left" => Some(Anchor::TopLeft),
            "center" | "centre" => Some(Anchor::Center),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::TopLeft => "top-left",
            Anchor::Center => "center",
        }
    }
}

/// Overlay sizing: `scale * cell + border` on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayConfig {
    pub scale: u16,
    pub border: u16,
    pub anchor: Anchor,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_OVERLAY_SCALE,
            border: DEFAULT_OVERLAY_BORDER,
            anchor: Anchor::TopLeft,
        }
    }
}

impl OverlayConfig {
    pub fn new(scale: u16, border: u16, anchor: Anchor) -> Self {
        Self {
            scale,
            border,
            anchor,
        }
    }

    /// Footprint of a marker anchored on `cell`.
    ///
    /// A scale of 0 is treated as 1 so the marker never collapses below its
    /// own cell.
    pub fn footprint(&self, cell: Rect) -> Rect {
        let scale = self.scale.max(1);
        let w = cell.w.saturating_mul(scale).saturating_add(self.border);
        let h = cell.h.saturating_mul(scale).saturating_add(self.border);
        match self.anchor {
            Anchor::TopLeft => Rect::new(cell.x, cell.y, w, h),
            Anchor::Center => {
                let dx = (w - cell.w.min(w)) / 2;
                let dy = (h - cell.h.min(h)) / 2;
                Rect::new(cell.x.saturating_sub(dx), cell.y.saturating_sub(dy), w, h)
            }
        }
    }
}
