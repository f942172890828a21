//! Upward event bubbling between nested components.
//!
//! A descendant emits a semantic [`GestureEvent`]; every enclosing container
//! gets one chance to intercept it on the way up. Each interception step
//! either forwards the event (same or rewritten) or absorbs it. The chain
//! terminates at the root surface, which hands whatever survives to the
//! consumer sink as a fire-and-forget notification.
//!
//! Interceptors dispatch on event shape with ordered `match` arms evaluated
//! top to bottom - first match wins, and an event matching no arm falls
//! through to a trailing identity arm (forwarded unchanged, no state
//! mutation).

use crate::error::WidgetResult;
use crate::scene::RenderHost;
use crate::types::WidgetId;
use serde::{Deserialize, Serialize};

/// A semantic drag event, bubbled upward from a handle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    /// A drag session opened at the given surface position.
    BeginMove { x: f32, y: f32 },
    /// A position sample inside an open session.
    Move { x: f32, y: f32 },
    /// The session closed at the given surface position.
    EndMove { x: f32, y: f32 },
    /// Out-of-band directive to abandon the current session.
    Cancel,
}

/// A gesture event in flight through the bubbling chain.
///
/// `source` is `None` while the event is the raw handle emission; a group
/// that re-emits the event stamps its own identity on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbledEvent {
    pub source: Option<WidgetId>,
    pub event: GestureEvent,
}

impl BubbledEvent {
    /// Wrap a raw handle emission that has not passed any container yet.
    pub fn from_handle(event: GestureEvent) -> Self {
        Self {
            source: None,
            event,
        }
    }
}

/// Outcome of one interception step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Flow {
    /// Forward the (possibly rewritten) event to the next ancestor.
    Continue(BubbledEvent),
    /// Absorb the event; no ancestor or consumer ever sees it.
    Stop,
}

/// Ambient routing context handed to each interception step.
pub struct RouteContext<'a> {
    pub host: &'a mut dyn RenderHost,
}

/// A container that can intercept events bubbled by its descendants.
///
/// State commits happen on `&mut self`; returning an error aborts this
/// bubble walk and surfaces to the caller - the chain never catches or
/// converts failures.
pub trait Intercept {
    fn intercept(
        &mut self,
        event: BubbledEvent,
        ctx: &mut RouteContext<'_>,
    ) -> WidgetResult<Flow>;
}

/// Bubble one handle emission up through `chain` (ordered leaf to root).
///
/// Whatever survives every interceptor is delivered to `sink`, the root
/// surface's consumer notification. No response value is awaited.
pub fn bubble(
    event: GestureEvent,
    chain: &mut [&mut dyn Intercept],
    ctx: &mut RouteContext<'_>,
    sink: &mut dyn FnMut(BubbledEvent),
) -> WidgetResult<()> {
    let mut current = BubbledEvent::from_handle(event);
    for interceptor in chain.iter_mut() {
        match interceptor.intercept(current, ctx)? {
            Flow::Continue(next) => current = next,
            Flow::Stop => {
                tracing::trace!(event = ?current.event, "bubble absorbed");
                return Ok(());
            }
        }
    }
    sink(current);
    Ok(())
}
