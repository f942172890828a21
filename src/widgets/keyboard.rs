//! Virtual keyboard widget - a draggable on-surface keyboard.
//!
//! The keyboard is the composition showcase for the two core widgets: a
//! [`DragHandle`] bar across the top feeds a [`DragGroup`] wrapping the key
//! grid, so the whole widget can be repositioned with the pointer and
//! snapped back with a cancel directive.
//!
//! Layouts are immutable value structs passed at construction - there is no
//! process-wide mutable default to configure.

use crate::bubble::{BubbledEvent, GestureEvent, RouteContext, bubble};
use crate::constants::{
    DEFAULT_KEY_GAP, DEFAULT_KEY_SIZE, DEFAULT_KEYBOARD_MARGIN, DRAG_BAR_HEIGHT, KEY_CORNER_RADIUS,
};
use crate::error::{WidgetError, WidgetResult};
use crate::input::{InputEvent, PointerRouter};
use crate::scene::{Color, RectStyle, RenderHost, VisualNode};
use crate::types::{Point, Size, WidgetId, point, size};
use crate::widgets::{DragGroup, DragHandle};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// ============================================================================
// Layout Definition
// ============================================================================

/// One key cap: a legend plus a width in key units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyDef {
    pub legend: String,
    /// Width in key units; 1.0 is a square key.
    #[serde(default = "default_key_width")]
    pub width: f32,
}

fn default_key_width() -> f32 {
    1.0
}

impl KeyDef {
    pub fn new(legend: impl Into<String>) -> Self {
        Self {
            legend: legend.into(),
            width: 1.0,
        }
    }

    pub fn wide(legend: impl Into<String>, width: f32) -> Self {
        Self {
            legend: legend.into(),
            width,
        }
    }
}

/// One row of keys, laid out left to right.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyRow {
    pub keys: Vec<KeyDef>,
}

/// An immutable keyboard layout definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyboardLayout {
    pub rows: Vec<KeyRow>,
}

static QWERTY: Lazy<KeyboardLayout> = Lazy::new(|| {
    let row = |legends: &[&str]| KeyRow {
        keys: legends.iter().map(|l| KeyDef::new(*l)).collect(),
    };
    KeyboardLayout {
        rows: vec![
            row(&["q", "w", "e", "r", "t", "y", "u", "i", "o", "p"]),
            row(&["a", "s", "d", "f", "g", "h", "j", "k", "l"]),
            row(&["z", "x", "c", "v", "b", "n", "m"]),
            KeyRow {
                keys: vec![
                    KeyDef::wide("shift", 1.5),
                    KeyDef::wide("space", 5.0),
                    KeyDef::wide("enter", 2.0),
                ],
            },
        ],
    }
});

impl KeyboardLayout {
    /// The built-in US QWERTY layout.
    pub fn qwerty() -> Self {
        QWERTY.clone()
    }

    /// Parse a layout from its JSON representation.
    pub fn from_json(json: &str) -> WidgetResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| WidgetError::InvalidConfiguration(format!("layout JSON: {e}")))
    }

    fn validate(&self) -> WidgetResult<()> {
        if self.rows.is_empty() {
            return Err(WidgetError::InvalidConfiguration(
                "keyboard layout has no rows".into(),
            ));
        }
        for (i, row) in self.rows.iter().enumerate() {
            if row.keys.is_empty() {
                return Err(WidgetError::InvalidConfiguration(format!(
                    "keyboard row {i} has no keys"
                )));
            }
            if let Some(key) = row.keys.iter().find(|k| !(k.width > 0.0)) {
                return Err(WidgetError::InvalidConfiguration(format!(
                    "key '{}' has non-positive width {}",
                    key.legend, key.width
                )));
            }
        }
        Ok(())
    }
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        Self::qwerty()
    }
}

/// Sizing parameters for the key grid and drag bar.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyboardMetrics {
    /// Edge length of a one-unit key
    pub key_size: f32,
    /// Gap between adjacent keys and rows
    pub key_gap: f32,
    /// Height of the drag bar across the top
    pub drag_bar_height: f32,
    /// Margin between the key grid and the widget border
    pub margin: f32,
}

impl Default for KeyboardMetrics {
    fn default() -> Self {
        Self {
            key_size: DEFAULT_KEY_SIZE,
            key_gap: DEFAULT_KEY_GAP,
            drag_bar_height: DRAG_BAR_HEIGHT,
            margin: DEFAULT_KEYBOARD_MARGIN,
        }
    }
}

impl KeyboardMetrics {
    fn validate(&self) -> WidgetResult<()> {
        let in_range = self.key_size > 0.0
            && self.key_gap >= 0.0
            && self.drag_bar_height > 0.0
            && self.margin >= 0.0;
        if !in_range {
            return Err(WidgetError::InvalidConfiguration(format!(
                "keyboard metrics out of range: {self:?}"
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Key Grid Sizing
// ============================================================================

fn row_width(row: &KeyRow, metrics: &KeyboardMetrics) -> f32 {
    let keys: f32 = row.keys.iter().map(|k| k.width * metrics.key_size).sum();
    keys + metrics.key_gap * row.keys.len().saturating_sub(1) as f32
}

/// Compute the widget extent and build its visual subtree: the drag bar
/// across the top, then one rect per key cap.
fn build_content(layout: &KeyboardLayout, metrics: &KeyboardMetrics) -> (Size, Vec<VisualNode>) {
    let grid_width = layout
        .rows
        .iter()
        .map(|r| row_width(r, metrics))
        .fold(0.0, f32::max);
    let width = grid_width + metrics.margin * 2.0;
    let rows = layout.rows.len() as f32;
    let height = metrics.drag_bar_height
        + metrics.margin * 2.0
        + rows * metrics.key_size
        + metrics.key_gap * (rows - 1.0);

    let mut nodes = Vec::new();
    nodes.push(VisualNode::rect(
        Point::default(),
        size(width, metrics.drag_bar_height),
        RectStyle {
            fill: Color::drag_bar(),
            corner_radius: 0.0,
        },
    ));

    let key_style = RectStyle {
        fill: Color::key_cap(),
        corner_radius: KEY_CORNER_RADIUS,
    };
    let mut y = metrics.drag_bar_height + metrics.margin;
    for row in &layout.rows {
        let mut x = metrics.margin;
        for key in &row.keys {
            let key_width = key.width * metrics.key_size;
            nodes.push(VisualNode::rect(
                point(x, y),
                size(key_width, metrics.key_size),
                key_style,
            ));
            x += key_width + metrics.key_gap;
        }
        y += metrics.key_size + metrics.key_gap;
    }

    (size(width, height), nodes)
}

// ============================================================================
// Widget
// ============================================================================

/// A draggable virtual keyboard.
#[derive(Debug)]
pub struct VirtualKeyboard {
    handle: DragHandle,
    group: DragGroup,
    size: Size,
}

impl VirtualKeyboard {
    /// Build a keyboard from an immutable layout and metrics, and install
    /// its first frame on the host.
    pub fn new(
        layout: &KeyboardLayout,
        metrics: KeyboardMetrics,
        host: &mut dyn RenderHost,
    ) -> WidgetResult<Self> {
        layout.validate()?;
        metrics.validate()?;

        let (widget_size, content) = build_content(layout, &metrics);
        let handle = DragHandle::new(widget_size.width, metrics.drag_bar_height)?;
        let group = DragGroup::new(content, host);
        host.commit(group.render_node())?;

        tracing::debug!(
            width = widget_size.width,
            height = widget_size.height,
            rows = layout.rows.len(),
            "keyboard built"
        );
        let mut keyboard = Self {
            handle,
            group,
            size: widget_size,
        };
        keyboard.glue_handle();
        Ok(keyboard)
    }

    /// Keep the drag bar's hit region on top of the (possibly moved) group.
    fn glue_handle(&mut self) {
        self.handle.set_origin(self.group.translation());
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn translation(&self) -> Point {
        self.group.translation()
    }

    pub fn is_dragging(&self) -> bool {
        self.group.is_dragging()
    }

    /// The identity bubbled-to-root events from this keyboard carry.
    pub fn id(&self) -> WidgetId {
        self.group.id()
    }

    pub fn handle(&self) -> &DragHandle {
        &self.handle
    }

    /// Feed one delivered input sample through the widget.
    ///
    /// The router gates delivery per the capture protocol; any semantic
    /// event the bar emits bubbles through the group to `sink`.
    pub fn dispatch_input(
        &mut self,
        event: &InputEvent,
        router: &mut PointerRouter,
        host: &mut dyn RenderHost,
        sink: &mut dyn FnMut(BubbledEvent),
    ) -> WidgetResult<()> {
        if !router.admits(self.handle.id(), event) {
            return Ok(());
        }
        let Some(gesture) = self.handle.handle_input(event, router) else {
            return Ok(());
        };
        self.forward(gesture, host, sink)
    }

    /// Abandon the current drag and snap back to where it started.
    ///
    /// Routed through the same chain as pointer-driven events; note the bar
    /// itself stays pressed until a genuine release arrives.
    pub fn cancel_drag(
        &mut self,
        host: &mut dyn RenderHost,
        sink: &mut dyn FnMut(BubbledEvent),
    ) -> WidgetResult<()> {
        let gesture = self.handle.cancel();
        self.forward(gesture, host, sink)
    }

    /// Teardown path: release any held capture.
    pub fn detach(&mut self, router: &mut PointerRouter) {
        self.handle.detach(router);
    }

    fn forward(
        &mut self,
        gesture: GestureEvent,
        host: &mut dyn RenderHost,
        sink: &mut dyn FnMut(BubbledEvent),
    ) -> WidgetResult<()> {
        let mut ctx = RouteContext { host };
        bubble(gesture, &mut [&mut self.group], &mut ctx, sink)?;
        self.glue_handle();
        Ok(())
    }
}
