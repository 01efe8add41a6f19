//! EntityDot: maps marker props into a static visual description.
//!
//! This module is pure (no I/O). A [`MarkerSpec`] is rebuilt from scratch on
//! every call; nothing is cached between renders.

use crate::facing::resolve_direction;
use crate::overlay::{OverlayConfig, Rect};
use crate::style::{resolve_style, MarkerStyle};
use crate::types::{Direction, MarkerProps, Rgb, LABEL_FG, MARKER_Z_INDEX};

/// Shape of the backing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle,
}

/// Whether the marker takes part in hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvents {
    /// Decorative only; input passes through to the cell underneath.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSize {
    Small,
}

/// Glyph drawn centered on top of the backing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub glyph: char,
    pub direction: Direction,
    pub fg: Rgb,
    pub bold: bool,
    pub size: LabelSize,
}

/// Complete visual description of one marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSpec {
    /// Anchor cell the marker belongs to.
    pub cell: Rect,
    /// Area covered by the backing layer, possibly larger than `cell`.
    pub footprint: Rect,
    pub shape: Shape,
    pub style: MarkerStyle,
    pub z_index: u16,
    pub pointer_events: PointerEvents,
    pub label: Label,
}

impl MarkerSpec {
    /// Position of the label inside the footprint.
    pub fn label_pos(&self) -> (u16, u16) {
        self.footprint.center()
    }

    pub fn is_interactive(&self) -> bool {
        !matches!(self.pointer_events, PointerEvents::None)
    }
}

/// The entity dot component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntityDot {
    overlay: OverlayConfig,
}

impl EntityDot {
    pub fn new(overlay: OverlayConfig) -> Self {
        Self { overlay }
    }

    /// Describe the marker for `props` anchored on `cell`.
    pub fn describe(&self, props: &MarkerProps, cell: Rect) -> MarkerSpec {
        let direction = resolve_direction(props.facing);
        MarkerSpec {
            cell,
            footprint: self.overlay.footprint(cell),
            shape: Shape::Circle,
            style: resolve_style(props.color.as_deref(), props.is_player),
            z_index: MARKER_Z_INDEX,
            pointer_events: PointerEvents::None,
            label: Label {
                glyph: direction.glyph(),
                direction,
                fg: LABEL_FG,
                bold: true,
                size: LabelSize::Small,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::Anchor;
    use crate::types::BASE_CELL_Z_INDEX;

    const CELL: Rect = Rect::new(3, 5, 2, 1);

    #[test]
    fn marker_is_decorative_and_above_cells() {
        let spec = EntityDot::default().describe(&MarkerProps::default(), CELL);
        assert_eq!(spec.pointer_events, PointerEvents::None);
        assert!(!spec.is_interactive());
        assert!(spec.z_index > BASE_CELL_Z_INDEX);
        assert_eq!(spec.shape, Shape::Circle);
    }

    #[test]
    fn label_is_small_bold_and_light() {
        let spec = EntityDot::default().describe(&MarkerProps::default(), CELL);
        assert!(spec.label.bold);
        assert_eq!(spec.label.size, LabelSize::Small);
        assert_eq!(spec.label.fg, LABEL_FG);
    }

    #[test]
    fn label_sits_at_footprint_center() {
        let spec = EntityDot::default().describe(&MarkerProps::default(), CELL);
        assert_eq!(spec.footprint, Rect::new(3, 5, 5, 3));
        assert_eq!(spec.label_pos(), (5, 6));
    }

    #[test]
    fn overlay_config_is_respected() {
        let dot = EntityDot::new(OverlayConfig::new(1, 0, Anchor::TopLeft));
        let spec = dot.describe(&MarkerProps::default(), CELL);
        assert_eq!(spec.footprint, CELL);
        assert_eq!(spec.cell, CELL);
    }

    #[test]
    fn describe_is_idempotent() {
        let dot = EntityDot::default();
        let props = MarkerProps::player().with_color("#00ff00").with_facing(-1, 0);
        assert_eq!(dot.describe(&props, CELL), dot.describe(&props, CELL));
    }
}
