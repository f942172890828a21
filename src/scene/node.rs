//! Visual primitives handed to the render host.

use crate::types::{Point, Size};
use serde::{Deserialize, Serialize};

/// A straight-alpha RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Opaque color from RGB components in `0.0..=1.0`.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Neutral key-cap grey.
    pub const fn key_cap() -> Self {
        Self::rgb(0.82, 0.82, 0.85)
    }

    /// Darker grey for drag bars.
    pub const fn drag_bar() -> Self {
        Self::rgb(0.55, 0.55, 0.6)
    }
}

/// Fill styling for a rectangle primitive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectStyle {
    pub fill: Color,
    pub corner_radius: f32,
}

impl Default for RectStyle {
    fn default() -> Self {
        Self {
            fill: Color::key_cap(),
            corner_radius: 0.0,
        }
    }
}

/// One node of a visual tree.
///
/// The tree is a plain description: rectangles grouped under 2D
/// translations. The host owns everything else (rasterization, z-order
/// within a group is child order).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum VisualNode {
    /// A styled rectangle, positioned by its parent group.
    Rect {
        /// Offset from the enclosing group's origin
        offset: Point,
        size: Size,
        style: RectStyle,
    },
    /// Children translated as one unit.
    Group {
        translation: Point,
        children: Vec<VisualNode>,
    },
}

impl VisualNode {
    /// A styled rectangle at `offset` within its parent group.
    pub fn rect(offset: Point, size: Size, style: RectStyle) -> Self {
        Self::Rect {
            offset,
            size,
            style,
        }
    }

    /// A group of children sharing one translation.
    pub fn group(translation: Point, children: Vec<VisualNode>) -> Self {
        Self::Group {
            translation,
            children,
        }
    }
}
