//! Core marker logic module - pure, deterministic, and testable
//!
//! This crate turns per-render [`MarkerProps`](types::MarkerProps) into a
//! static [`MarkerSpec`] describing how an entity dot should look. It has
//! **no dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: identical props always produce an identical `MarkerSpec`
//! - **Total**: malformed facing or color data degrades to defaults, never errors
//! - **Portable**: a `MarkerSpec` can be painted by any rendering layer
//!
//! # Module Structure
//!
//! - [`facing`]: facing vector to compass glyph resolution
//! - [`style`]: explicit color vs. player/non-player default background
//! - [`color`]: color string parsing for rendering layers
//! - [`overlay`]: overlay footprint geometry around the anchor cell
//! - [`marker`]: the [`EntityDot`] component producing a [`MarkerSpec`]
//! - [`scene`]: a map of positioned entities, loaded from JSON
//!
//! # Example
//!
//! ```
//! use tui_entity_dot_core::{EntityDot, MarkerStyle, Rect};
//! use tui_entity_dot_types::MarkerProps;
//!
//! let dot = EntityDot::default();
//! let props = MarkerProps::player().with_facing(1, 0);
//! let spec = dot.describe(&props, Rect::new(4, 2, 2, 1));
//!
//! assert_eq!(spec.label.glyph, '→');
//! assert_eq!(spec.style, MarkerStyle::Player);
//! // Footprint is twice the cell plus one unit, anchored top-left.
//! assert_eq!(spec.footprint, Rect::new(4, 2, 5, 3));
//! ```

pub mod color;
pub mod facing;
pub mod marker;
pub mod overlay;
pub mod scene;
pub mod style;

pub use tui_entity_dot_types as types;

// Re-export commonly used types for convenience
pub use color::{parse_color, ColorError};
pub use facing::{resolve_direction, resolve_glyph};
pub use marker::{EntityDot, Label, LabelSize, MarkerSpec, PointerEvents, Shape};
pub use overlay::{Anchor, OverlayConfig, Rect};
pub use scene::{Entity, Scene, SceneError};
pub use style::{resolve_style, MarkerStyle};
