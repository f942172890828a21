//! Core types for the dragdeck widget system.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: surface-space geometry and widget identity.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

// ============================================================================
// Geometry
// ============================================================================

/// A 2D coordinate in surface space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Shorthand constructor for [`Point`].
#[inline]
pub fn point(x: f32, y: f32) -> Point {
    Point { x, y }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        point(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        point(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A rectangular extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Shorthand constructor for [`Size`].
#[inline]
pub fn size(width: f32, height: f32) -> Size {
    Size { width, height }
}

/// An axis-aligned rectangle positioned in surface space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a rectangle from its top-left corner and extent.
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Inclusive containment test against all four edges.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.origin.x
            && p.x <= self.origin.x + self.size.width
            && p.y >= self.origin.y
            && p.y <= self.origin.y + self.size.height
    }
}

// ============================================================================
// Widget Identity
// ============================================================================

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity for an interactive component.
///
/// Events re-emitted by a container carry the container's `WidgetId` so that
/// consumers at the root can tell sibling instances apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Allocate a fresh, never-before-used identity.
    pub fn alloc() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
