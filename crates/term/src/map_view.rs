//! MapView: maps a [`Scene`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). Base cells are drawn first, markers after
//! them, so every marker stacks above the grid. Hit testing only looks at the
//! grid: markers never capture a point.

use crate::config::ViewConfig;
use crate::core::{EntityDot, Rect, Scene};
use crate::dot::paint_marker;
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::{Direction, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const GRID_BG: Rgb = Rgb::new(30, 30, 40);

/// Where the map frame landed in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapLayout {
    /// Outer frame including the 1-cell border.
    pub frame: Rect,
    pub cell_w: u16,
    pub cell_h: u16,
}

impl MapLayout {
    /// Screen rectangle of grid cell `(x, y)`.
    pub fn cell_rect(&self, x: u16, y: u16) -> Rect {
        Rect::new(
            self.frame
                .x
                .saturating_add(1)
                .saturating_add(x.saturating_mul(self.cell_w)),
            self.frame
                .y
                .saturating_add(1)
                .saturating_add(y.saturating_mul(self.cell_h)),
            self.cell_w,
            self.cell_h,
        )
    }

    /// Area inside the border.
    pub fn inner(&self) -> Rect {
        Rect::new(
            self.frame.x.saturating_add(1),
            self.frame.y.saturating_add(1),
            self.frame.w.saturating_sub(2),
            self.frame.h.saturating_sub(2),
        )
    }
}

/// A lightweight terminal renderer for entity maps.
pub struct MapView {
    cell_w: u16,
    cell_h: u16,
    anchor_y: AnchorY,
    dot: EntityDot,
}

impl Default for MapView {
    fn default() -> Self {
        Self::from_config(&ViewConfig::default())
    }
}

impl MapView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
            dot: EntityDot::default(),
        }
    }

    pub fn from_config(cfg: &ViewConfig) -> Self {
        Self::new(cfg.cell_w, cfg.cell_h).with_dot(EntityDot::new(cfg.overlay))
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_dot(mut self, dot: EntityDot) -> Self {
        self.dot = dot;
        self
    }

    pub fn layout(&self, scene: &Scene, viewport: Viewport) -> MapLayout {
        let frame_w = scene.width.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = scene.height.saturating_mul(self.cell_h).saturating_add(2);
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        MapLayout {
            frame: Rect::new(x, y, frame_w, frame_h),
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        }
    }

    /// Grid cell under screen point `(col, row)`.
    ///
    /// Markers are decorative, so a point covered by a marker's overlay still
    /// resolves to the base cell beneath it.
    pub fn cell_at(&self, scene: &Scene, viewport: Viewport, col: u16, row: u16) -> Option<(u16, u16)> {
        let inner = self.layout(scene, viewport).inner();
        if !inner.contains(col, row) {
            return None;
        }
        let x = (col - inner.x) / self.cell_w;
        let y = (row - inner.y) / self.cell_h;
        (x < scene.width && y < scene.height).then_some((x, y))
    }

    /// Render the scene into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, scene: &Scene, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let layout = self.layout(scene, viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(layout.inner(), ' ', CellStyle::new(GRID_BG, GRID_BG));
        draw_border(fb, layout.frame, border);

        // Only cells that can land inside the framebuffer.
        let inner = layout.inner();
        let cols = visible_cells(inner.x, fb.width(), self.cell_w).min(scene.width);
        let rows = visible_cells(inner.y, fb.height(), self.cell_h).min(scene.height);
        for y in 0..rows {
            for x in 0..cols {
                self.draw_base_cell(fb, layout.cell_rect(x, y));
            }
        }

        // Markers go last so they stack above every base cell.
        for entity in &scene.entities {
            if !scene.in_bounds(entity) {
                log::warn!(
                    "entity at ({}, {}) outside {}x{} map, skipped",
                    entity.x,
                    entity.y,
                    scene.width,
                    scene.height
                );
                continue;
            }
            let spec = self.dot.describe(&entity.props, layout.cell_rect(entity.x, entity.y));
            paint_marker(fb, &spec);
        }

        self.draw_legend(fb, scene, viewport, layout.frame);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &Scene, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }

    fn draw_base_cell(&self, fb: &mut FrameBuffer, rect: Rect) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), GRID_BG).dim();
        fb.fill_rect(rect, '·', style);
    }

    fn draw_legend(&self, fb: &mut FrameBuffer, scene: &Scene, viewport: Viewport, frame: Rect) {
        let panel_x = frame.right().saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = frame.y;
        fb.put_str(panel_x, y, "ENTITIES", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &scene.entities.len().to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "FACING", label);
        y = y.saturating_add(1);
        for d in Direction::ALL {
            fb.put_char(panel_x, y, d.glyph(), value);
            fb.put_str(panel_x + 2, y, d.as_str(), value);
            y = y.saturating_add(1);
        }
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "q quit", value.dim());
    }
}

fn draw_border(fb: &mut FrameBuffer, r: Rect, style: CellStyle) {
    if r.w < 2 || r.h < 2 {
        return;
    }
    let (right, bottom) = (r.right() - 1, r.bottom() - 1);

    fb.put_char(r.x, r.y, '┌', style);
    fb.put_char(right, r.y, '┐', style);
    fb.put_char(r.x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);

    for x in r.x + 1..right.min(fb.width()) {
        fb.put_char(x, r.y, '─', style);
        fb.put_char(x, bottom, '─', style);
    }
    for y in r.y + 1..bottom.min(fb.height()) {
        fb.put_char(r.x, y, '│', style);
        fb.put_char(right, y, '│', style);
    }
}

/// Number of `cell`-sized columns (or rows) starting at `origin` that reach
/// into a buffer `extent` wide.
fn visible_cells(origin: u16, extent: u16, cell: u16) -> u16 {
    extent.saturating_sub(origin).div_ceil(cell.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Entity;
    use crate::types::MarkerProps;

    #[test]
    fn layout_centers_frame() {
        let scene = Scene::new(4, 3);
        let layout = MapView::default().layout(&scene, Viewport::new(20, 11));
        // 4*2+2 = 10 wide, 3*1+2 = 5 tall.
        assert_eq!(layout.frame, Rect::new(5, 3, 10, 5));
        assert_eq!(layout.cell_rect(0, 0), Rect::new(6, 4, 2, 1));
        assert_eq!(layout.cell_rect(3, 2), Rect::new(12, 6, 2, 1));
    }

    #[test]
    fn top_anchor_pins_frame() {
        let scene = Scene::new(4, 3);
        let view = MapView::default().with_anchor_y(AnchorY::Top);
        assert_eq!(view.layout(&scene, Viewport::new(10, 30)).frame.y, 0);
    }

    #[test]
    fn visible_cells_rounds_partial_cells_up() {
        assert_eq!(visible_cells(1, 80, 2), 40);
        assert_eq!(visible_cells(1, 10, 2), 5);
        assert_eq!(visible_cells(0, 7, 2), 4);
        assert_eq!(visible_cells(12, 10, 2), 0);
    }

    #[test]
    fn out_of_bounds_entities_are_skipped() {
        let scene = Scene::new(2, 2).with_entity(Entity::new(5, 5, MarkerProps::player()));
        let view = MapView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&scene, Viewport::new(6, 4));
        assert!(fb.cells().iter().all(|c| c.ch != '↓'));
    }
}
