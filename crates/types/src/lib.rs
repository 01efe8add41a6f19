//! Core types module - shared data structures and constants
//!
//! This module defines the plain data passed into an entity dot marker and the
//! fixed values it resolves against. Everything here is pure data (serde is the
//! only dependency), so the types are usable from resolver logic, terminal
//! rendering, and scene files alike.
//!
//! # Facing
//!
//! A [`FacingVector`] is an integer pair. Only the four axis-aligned unit
//! vectors carry meaning:
//!
//! | x | y | Direction | Glyph |
//! |---|---|-----------|-------|
//! | 0 | -1 | `Up` | `↑` |
//! | 1 | 0 | `Right` | `→` |
//! | 0 | 1 | `Down` | `↓` |
//! | -1 | 0 | `Left` | `←` |
//!
//! Every other vector (diagonals, zero, out of range) resolves to `Down`.
//!
//! # Default Appearance
//!
//! | Constant | Value | Used for |
//! |----------|-------|----------|
//! | `PLAYER_BG` | `#3b82f6` | player marker without a custom color |
//! | `NON_PLAYER_BG` | `#1f2937` | any other marker without a custom color |
//! | `LABEL_FG` | `#ffffff` | direction glyph |
//!
//! # Examples
//!
//! ```
//! use tui_entity_dot_types::{Direction, FacingVector, MarkerProps};
//!
//! // Canonical vectors round-trip through Direction
//! let right = FacingVector::new(1, 0);
//! assert_eq!(Direction::from_vector(right), Some(Direction::Right));
//! assert_eq!(Direction::Right.vector(), right);
//!
//! // Diagonals are not directions
//! assert_eq!(Direction::from_vector(FacingVector::new(1, 1)), None);
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
//!
//! // Props default to a non-player with no color and no facing
//! let props = MarkerProps::default();
//! assert!(!props.is_player);
//! assert!(props.color.is_none());
//! assert!(props.facing.is_none());
//! ```

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Player default background (`#3b82f6`).
pub const PLAYER_BG: Rgb = Rgb::new(59, 130, 246);

/// Non-player default background (`#1f2937`), neutral and dark.
pub const NON_PLAYER_BG: Rgb = Rgb::new(31, 41, 55);

/// Label (glyph) foreground color.
pub const LABEL_FG: Rgb = Rgb::new(255, 255, 255);

/// Style class applied to player markers without a custom color.
pub const PLAYER_CLASS: &str = "entity-dot--player";

/// Style class applied to non-player markers without a custom color.
pub const NON_PLAYER_CLASS: &str = "entity-dot--npc";

/// Overlay footprint scale relative to the anchor cell.
pub const DEFAULT_OVERLAY_SCALE: u16 = 2;

/// Extra units added to the scaled footprint on each axis.
pub const DEFAULT_OVERLAY_BORDER: u16 = 1;

/// Stacking order of base grid cells.
pub const BASE_CELL_Z_INDEX: u16 = 0;

/// Stacking order of markers (always above base cells).
pub const MARKER_Z_INDEX: u16 = 10;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Integer facing vector supplied with each render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FacingVector {
    pub x: i32,
    pub y: i32,
}

impl FacingVector {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The four compass directions a marker can show.
///
/// `Down` is the default and the fallback for anything non-canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    Right,
    #[default]
    Down,
    Left,
}

impl Direction {
    /// All directions in clockwise order starting at `Up`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Canonical unit vector (screen coordinates, y grows downward).
    pub const fn vector(&self) -> FacingVector {
        match self {
            Direction::Up => FacingVector::new(0, -1),
            Direction::Right => FacingVector::new(1, 0),
            Direction::Down => FacingVector::new(0, 1),
            Direction::Left => FacingVector::new(-1, 0),
        }
    }

    /// Exact match against the canonical vectors.
    pub fn from_vector(v: FacingVector) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.vector() == v)
    }

    /// Directional glyph drawn on the marker.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_entity_dot_types::Direction;
    ///
    /// assert_eq!(Direction::Up.glyph(), '↑');
    /// assert_eq!(Direction::Left.glyph(), '←');
    /// ```
    pub const fn glyph(&self) -> char {
        match self {
            Direction::Up => '↑',
            Direction::Right => '→',
            Direction::Down => '↓',
            Direction::Left => '←',
        }
    }

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "right" | "r", "down" | "d", "left" | "l"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "right" | "r" => Some(Direction::Right),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

/// Per-render input of an entity dot.
///
/// JSON form: `{"isPlayer": true, "color": "#ff0000", "facing": {"x": 0, "y": -1}}`.
/// All fields are optional and malformed values never fail the document:
/// `isPlayer` is only true for a literal `true`, a non-string `color` decodes
/// to `None`, and a malformed `facing` decodes to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerProps {
    #[serde(default, deserialize_with = "lenient_flag")]
    pub is_player: bool,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_color"
    )]
    pub color: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_facing"
    )]
    pub facing: Option<FacingVector>,
}

impl MarkerProps {
    pub fn player() -> Self {
        Self {
            is_player: true,
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_facing(mut self, x: i32, y: i32) -> Self {
        self.facing = Some(FacingVector::new(x, y));
        self
    }
}

/// Flag that is only set by a literal `true`.
struct LenientFlag(bool);

impl<'de> Deserialize<'de> for LenientFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = LenientFlag;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "any value")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(LenientFlag(v))
            }

            fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
                Ok(LenientFlag(false))
            }

            fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
                Ok(LenientFlag(false))
            }

            fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
                Ok(LenientFlag(false))
            }

            fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
                Ok(LenientFlag(false))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(LenientFlag(false))
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(LenientFlag(false))
            }

            fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<Self::Value, D2::Error> {
                LenientFlag::deserialize(d)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(LenientFlag(false))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(LenientFlag(false))
            }
        }

        deserializer.deserialize_any(V)
    }
}

/// Color string; any non-string value decodes to `None`.
struct LenientColor(Option<String>);

impl<'de> Deserialize<'de> for LenientColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = LenientColor;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "any value")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(LenientColor(Some(v.to_string())))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(LenientColor(Some(v)))
            }

            fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
                Ok(LenientColor(None))
            }

            fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
                Ok(LenientColor(None))
            }

            fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
                Ok(LenientColor(None))
            }

            fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
                Ok(LenientColor(None))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(LenientColor(None))
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(LenientColor(None))
            }

            fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<Self::Value, D2::Error> {
                LenientColor::deserialize(d)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(LenientColor(None))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(LenientColor(None))
            }
        }

        deserializer.deserialize_any(V)
    }
}

/// Integer component that tolerates any JSON value.
struct LenientInt(Option<i32>);

impl<'de> Deserialize<'de> for LenientInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = LenientInt;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "any value")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(LenientInt(i32::try_from(v).ok()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(LenientInt(i32::try_from(v).ok()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                let integral = v.fract() == 0.0 && v >= i32::MIN as f64 && v <= i32::MAX as f64;
                Ok(LenientInt(integral.then_some(v as i32)))
            }

            fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
                Ok(LenientInt(None))
            }

            fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
                Ok(LenientInt(None))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(LenientInt(None))
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(LenientInt(None))
            }

            fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<Self::Value, D2::Error> {
                LenientInt::deserialize(d)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(LenientInt(None))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(LenientInt(None))
            }
        }

        deserializer.deserialize_any(V)
    }
}

/// Facing that decodes to `None` instead of erroring on malformed input.
struct LenientFacing(Option<FacingVector>);

impl<'de> Deserialize<'de> for LenientFacing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = LenientFacing;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a facing object {{x, y}}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut x = None;
                let mut y = None;
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "x" => x = map.next_value::<LenientInt>()?.0,
                        "y" => y = map.next_value::<LenientInt>()?.0,
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(LenientFacing(x.zip(y).map(|(x, y)| FacingVector::new(x, y))))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(LenientFacing(None))
            }

            fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
                Ok(LenientFacing(None))
            }

            fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
                Ok(LenientFacing(None))
            }

            fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
                Ok(LenientFacing(None))
            }

            fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
                Ok(LenientFacing(None))
            }

            fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
                Ok(LenientFacing(None))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(LenientFacing(None))
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(LenientFacing(None))
            }

            fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<Self::Value, D2::Error> {
                LenientFacing::deserialize(d)
            }
        }

        deserializer.deserialize_any(V)
    }
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    LenientFlag::deserialize(deserializer).map(|f| f.0)
}

fn lenient_color<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    LenientColor::deserialize(deserializer).map(|c| c.0)
}

fn lenient_facing<'de, D>(deserializer: D) -> Result<Option<FacingVector>, D::Error>
where
    D: Deserializer<'de>,
{
    LenientFacing::deserialize(deserializer).map(|f| f.0)
}
