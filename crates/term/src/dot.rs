//! Paints a [`MarkerSpec`] into a framebuffer.
//!
//! The backing layer covers the whole footprint (corners trimmed so it reads
//! as a circle) and replaces whatever base cell content sits underneath. The
//! label glyph is then drawn at the footprint center.

use crate::core::{parse_color, MarkerSpec, MarkerStyle, Rect};
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::Rgb;

/// Background color of the backing layer.
///
/// `None` means transparent: a custom color the terminal cannot display.
pub fn backing_color(style: &MarkerStyle) -> Option<Rgb> {
    match style {
        MarkerStyle::Custom(raw) => match parse_color(raw) {
            Ok(rgb) => Some(rgb),
            Err(e) => {
                log::debug!("marker backing left transparent: {e}");
                None
            }
        },
        other => other.default_background(),
    }
}

/// Whether `(x, y)` lies on the circular backing of `fp`.
///
/// Footprints smaller than 3x3 are too coarse to round and stay rectangular.
pub fn on_backing(fp: Rect, x: u16, y: u16) -> bool {
    if !fp.contains(x, y) {
        return false;
    }
    if fp.w < 3 || fp.h < 3 {
        return true;
    }
    let edge_x = x == fp.x || x == fp.right() - 1;
    let edge_y = y == fp.y || y == fp.bottom() - 1;
    !(edge_x && edge_y)
}

/// Paint one marker. Clipped to the framebuffer.
pub fn paint_marker(fb: &mut FrameBuffer, spec: &MarkerSpec) {
    let fp = spec.footprint;
    let backing = backing_color(&spec.style);

    if let Some(bg) = backing {
        let fill = Cell::new(' ', CellStyle::new(bg, bg));
        for y in fp.y..fp.bottom().min(fb.height()) {
            for x in fp.x..fp.right().min(fb.width()) {
                if on_backing(fp, x, y) {
                    fb.set(x, y, fill);
                }
            }
        }
    }

    let (lx, ly) = spec.label_pos();
    let Some(under) = fb.get(lx, ly) else {
        return;
    };
    let mut style = CellStyle::new(spec.label.fg, backing.unwrap_or(under.style.bg));
    if spec.label.bold {
        style = style.bold();
    }
    fb.put_char(lx, ly, spec.label.glyph, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntityDot;
    use crate::types::{MarkerProps, LABEL_FG, NON_PLAYER_BG, PLAYER_BG};

    fn painted(props: &MarkerProps) -> FrameBuffer {
        let mut fb = FrameBuffer::new(10, 6);
        let spec = EntityDot::default().describe(props, Rect::new(1, 1, 2, 1));
        paint_marker(&mut fb, &spec);
        fb
    }

    #[test]
    fn backing_colors() {
        assert_eq!(backing_color(&MarkerStyle::Player), Some(PLAYER_BG));
        assert_eq!(backing_color(&MarkerStyle::NonPlayer), Some(NON_PLAYER_BG));
        assert_eq!(
            backing_color(&MarkerStyle::Custom("#ff0000".into())),
            Some(Rgb::new(255, 0, 0))
        );
        assert_eq!(backing_color(&MarkerStyle::Custom("bogus".into())), None);
    }

    #[test]
    fn circle_trims_corners() {
        let fp = Rect::new(0, 0, 5, 3);
        assert!(!on_backing(fp, 0, 0));
        assert!(!on_backing(fp, 4, 0));
        assert!(!on_backing(fp, 0, 2));
        assert!(!on_backing(fp, 4, 2));
        assert!(on_backing(fp, 1, 0));
        assert!(on_backing(fp, 0, 1));
        assert!(on_backing(fp, 2, 1));
        assert!(!on_backing(fp, 5, 1));
    }

    #[test]
    fn small_footprints_stay_rectangular() {
        let fp = Rect::new(2, 2, 2, 1);
        assert!(on_backing(fp, 2, 2));
        assert!(on_backing(fp, 3, 2));
    }

    #[test]
    fn glyph_is_centered_bold_and_light() {
        let fb = painted(&MarkerProps::default().with_facing(0, -1));
        // Footprint (1,1) 5x3 -> center (3,2).
        let cell = fb.get(3, 2).unwrap();
        assert_eq!(cell.ch, '↑');
        assert!(cell.style.bold);
        assert_eq!(cell.style.fg, LABEL_FG);
        assert_eq!(cell.style.bg, NON_PLAYER_BG);
    }

    #[test]
    fn backing_fills_footprint_except_corners() {
        let fb = painted(&MarkerProps::player());
        assert_eq!(fb.get(2, 1).unwrap().style.bg, PLAYER_BG);
        assert_eq!(fb.get(5, 2).unwrap().style.bg, PLAYER_BG);
        assert_ne!(fb.get(1, 1).unwrap().style.bg, PLAYER_BG);
        assert_ne!(fb.get(5, 3).unwrap().style.bg, PLAYER_BG);
        assert_ne!(fb.get(6, 2).unwrap().style.bg, PLAYER_BG);
    }

    #[test]
    fn unparseable_color_keeps_underlying_background() {
        let mut fb = FrameBuffer::new(10, 6);
        let base = Rgb::new(30, 30, 40);
        fb.clear(Cell::new('·', CellStyle::default().with_bg(base)));
        let spec = EntityDot::default().describe(
            &MarkerProps::player().with_color("definitely-not-a-color"),
            Rect::new(1, 1, 2, 1),
        );
        paint_marker(&mut fb, &spec);

        assert_eq!(fb.get(2, 1).unwrap().ch, '·');
        assert_eq!(fb.get(2, 1).unwrap().style.bg, base);
        let label = fb.get(3, 2).unwrap();
        assert_eq!(label.ch, '↓');
        assert_eq!(label.style.bg, base);
    }

    #[test]
    fn marker_near_edge_is_clipped() {
        let mut fb = FrameBuffer::new(3, 2);
        let spec = EntityDot::default().describe(&MarkerProps::player(), Rect::new(1, 1, 2, 1));
        paint_marker(&mut fb, &spec);
        // Label center (3,2) is off-buffer; visible backing still painted.
        assert_eq!(fb.get(2, 1).unwrap().style.bg, PLAYER_BG);
        assert!(fb.cells().iter().all(|c| c.ch == ' '));
    }
}
