//! Crate-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Drag Handle
// ============================================================================

/// Height of a widget's drag bar in pixels
pub const DRAG_BAR_HEIGHT: f32 = 15.0;

// ============================================================================
// Virtual Keyboard Defaults
// ============================================================================

/// Edge length of a one-unit key in pixels
pub const DEFAULT_KEY_SIZE: f32 = 36.0;

/// Gap between adjacent keys in pixels
pub const DEFAULT_KEY_GAP: f32 = 4.0;

/// Margin between the key grid and the widget border in pixels
pub const DEFAULT_KEYBOARD_MARGIN: f32 = 6.0;

/// Corner radius for key caps in pixels
pub const KEY_CORNER_RADIUS: f32 = 4.0;

// ============================================================================
// Profiling
// ============================================================================

/// Default threshold above which a profiled scope logs a warning, in ms
pub const SLOW_SCOPE_WARN_MS: f64 = 4.0;
