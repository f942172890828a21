//! Drag handle - a rectangular hit region that turns pointer samples into
//! semantic move events.
//!
//! The handle owns the pointer-capture protocol: the press that opens a drag
//! claims the button and position channels exclusively, so no sibling
//! component observes samples until the matching release gives them back.
//! Every exit path out of `Pressed` releases the claim; the one deliberate
//! exception is [`DragHandle::cancel`], which by contract leaves both the
//! state and the capture untouched.

use crate::bubble::GestureEvent;
use crate::error::{WidgetError, WidgetResult};
use crate::input::{ButtonPhase, CapturePort, ChannelSet, InputEvent, PointerButton};
use crate::profile_scope;
use crate::types::{Point, Rect, Size, WidgetId, size};

/// Interaction state of a drag handle.
///
/// ```text
/// Idle -> Pressed   (primary press inside the hit region, capture granted)
/// Pressed -> Idle   (primary release)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum HandleState {
    #[default]
    Idle,
    Pressed,
}

/// A rectangular drag hit region.
#[derive(Debug)]
pub struct DragHandle {
    id: WidgetId,
    size: Size,
    origin: Point,
    state: HandleState,
}

impl DragHandle {
    /// Create a handle with the given hit-region extent.
    ///
    /// Both dimensions must be positive; anything else is an
    /// `InvalidConfiguration` error.
    pub fn new(width: f32, height: f32) -> WidgetResult<Self> {
        if !(width > 0.0 && height > 0.0) {
            return Err(WidgetError::InvalidConfiguration(format!(
                "drag handle needs positive dimensions, got {width}x{height}"
            )));
        }
        Ok(Self {
            id: WidgetId::alloc(),
            size: size(width, height),
            origin: Point::default(),
            state: HandleState::Idle,
        })
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Move the hit region's top-left corner in surface space.
    ///
    /// Embedders keep the region glued to whatever visual the handle sits
    /// on; the keyboard widget re-glues its bar after every accepted move.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// The handle's current hit region in surface coordinates.
    pub fn hit_region(&self) -> Rect {
        Rect::new(self.origin, self.size)
    }

    /// Whether a press is currently held.
    pub fn is_pressed(&self) -> bool {
        matches!(self.state, HandleState::Pressed)
    }

    /// Feed one delivered input sample through the handle's state machine.
    ///
    /// Returns the semantic event to bubble, if the sample produced one.
    /// Samples that match nothing in the current state pass through with no
    /// state change and no emission.
    pub fn handle_input(
        &mut self,
        event: &InputEvent,
        capture: &mut dyn CapturePort,
    ) -> Option<GestureEvent> {
        profile_scope!("drag_handle_input");

        match (*event, self.state) {
            (
                InputEvent::CursorButton {
                    button: PointerButton::Primary,
                    phase: ButtonPhase::Pressed,
                    position,
                    ..
                },
                HandleState::Idle,
            ) if self.hit_region().contains(position) => {
                if !capture.capture(self.id, ChannelSet::DRAG) {
                    // Another component already owns the pointer; the press
                    // never opens a session.
                    return None;
                }
                self.state = HandleState::Pressed;
                tracing::trace!(handle = %self.id, x = position.x, y = position.y, "drag begin");
                Some(GestureEvent::BeginMove {
                    x: position.x,
                    y: position.y,
                })
            }
            (InputEvent::CursorPosition { position }, HandleState::Pressed) => {
                // Every sample is forwarded as received - no thresholding,
                // no debouncing, no region check.
                Some(GestureEvent::Move {
                    x: position.x,
                    y: position.y,
                })
            }
            (
                InputEvent::CursorButton {
                    button: PointerButton::Primary,
                    phase: ButtonPhase::Released,
                    position,
                    ..
                },
                HandleState::Pressed,
            ) => {
                capture.release(self.id, ChannelSet::DRAG);
                self.state = HandleState::Idle;
                tracing::trace!(handle = %self.id, x = position.x, y = position.y, "drag end");
                Some(GestureEvent::EndMove {
                    x: position.x,
                    y: position.y,
                })
            }
            _ => None,
        }
    }

    /// Out-of-band cancel directive, addressed by reference rather than by
    /// pointer input.
    ///
    /// Emits immediately, independent of current state. Does not move a
    /// pressed handle back to `Idle` and does not release capture; a handle
    /// cancelled mid-press stays captured until a genuine release arrives.
    pub fn cancel(&self) -> GestureEvent {
        tracing::debug!(handle = %self.id, pressed = self.is_pressed(), "cancel directive");
        GestureEvent::Cancel
    }

    /// Teardown path: give up any held capture and return to `Idle`.
    pub fn detach(&mut self, capture: &mut dyn CapturePort) {
        if self.is_pressed() {
            capture.release(self.id, ChannelSet::DRAG);
            self.state = HandleState::Idle;
        }
    }
}
