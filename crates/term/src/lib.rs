//! Terminal rendering layer for entity dot maps.
//!
//! Renders into a simple framebuffer of styled character cells that can be
//! flushed to a terminal backend, rather than going through a widget/layout
//! library.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Paint markers as overlays above the grid they are anchored on
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod config;
pub mod dot;
pub mod fb;
pub mod map_view;
pub mod renderer;

pub use tui_entity_dot_core as core;
pub use tui_entity_dot_types as types;

pub use config::ViewConfig;
pub use dot::{backing_color, on_backing, paint_marker};
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use map_view::{AnchorY, MapLayout, MapView, Viewport};
pub use renderer::{dirty_spans, encode_frame, Span, TerminalRenderer};
pub use types::Rgb;
