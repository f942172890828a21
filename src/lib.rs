//! dragdeck - drag-interaction building blocks for scene-graph surfaces.
//!
//! The crate provides three reusable widgets and the plumbing between them:
//!
//! - [`DragHandle`] - a rectangular hit region converting pointer samples
//!   into semantic move events, with exclusive pointer capture while active
//! - [`DragGroup`] - a positioned container whose translation is driven by
//!   bubbled move events, with viewport bounds-checking and origin-restoring
//!   cancellation
//! - [`VirtualKeyboard`] - a draggable on-surface keyboard composed from
//!   the two
//!
//! Rendering and input delivery stay on the host side: widgets describe
//! visual trees through [`scene::VisualNode`] and commit them via the
//! [`scene::RenderHost`] trait, and the embedder feeds discrete
//! [`input::InputEvent`] samples gated by the [`input::PointerRouter`]
//! capture broker. Semantic events travel upward through the
//! [`bubble`] interception chain to the owning scene.

pub mod bubble;
pub mod constants;
pub mod error;
pub mod input;
pub mod perf;
pub mod scene;
pub mod types;
pub mod widgets;

pub use bubble::{BubbledEvent, Flow, GestureEvent, Intercept, RouteContext, bubble};
pub use error::{WidgetError, WidgetResult};
pub use input::{ButtonPhase, CapturePort, ChannelSet, InputEvent, Modifiers, PointerButton, PointerRouter};
pub use scene::{Color, RectStyle, RenderHost, VisualNode};
pub use types::{Point, Rect, Size, WidgetId, point, size};
pub use widgets::{DragGroup, DragHandle, KeyDef, KeyRow, KeyboardLayout, KeyboardMetrics, VirtualKeyboard};
