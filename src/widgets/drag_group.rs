//! Draggable group - a positioned container repositioned by bubbled move
//! events from a descendant drag handle.
//!
//! The group is the only writer of its own translation. A session opens on
//! `begin_move`, which fixes the pointer-to-origin offset and remembers the
//! translation it can roll back to; in-bounds moves write through and
//! re-render synchronously; `cancel` restores the remembered origin and is
//! absorbed rather than forwarded.

use crate::bubble::{BubbledEvent, Flow, GestureEvent, Intercept, RouteContext};
use crate::error::WidgetResult;
use crate::profile_scope;
use crate::scene::{RenderHost, VisualNode};
use crate::types::{Point, Size, WidgetId, point};

/// Interaction state of a draggable group.
///
/// ```text
/// Idle -> Dragging   (bubbled begin_move fixes the session offset)
/// Dragging -> Idle   (end_move or cancel)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum GroupState {
    #[default]
    Idle,
    Dragging {
        /// Pointer-to-group-origin delta fixed at press time
        offset: Point,
    },
}

/// A translated container for arbitrary child content.
#[derive(Debug)]
pub struct DragGroup {
    id: WidgetId,
    translation: Point,
    /// Translation at the most recently opened session's begin_move;
    /// `cancel` rolls back to this.
    origin: Point,
    /// Hosting surface bounds recorded at construction
    viewport: Size,
    content: Vec<VisualNode>,
    state: GroupState,
}

impl DragGroup {
    /// Wrap `content` in a positioned group on the given host surface.
    ///
    /// The initial translation is `(0,0)`; the surface bounds are recorded
    /// now and used for all later move bounds-checking.
    pub fn new(content: Vec<VisualNode>, host: &dyn RenderHost) -> Self {
        Self {
            id: WidgetId::alloc(),
            translation: Point::default(),
            origin: Point::default(),
            viewport: host.surface_size(),
            content,
            state: GroupState::Idle,
        }
    }

    /// Override the initial translation.
    pub fn with_translation(mut self, translation: Point) -> Self {
        self.translation = translation;
        self.origin = translation;
        self
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// The group's current translation.
    pub fn translation(&self) -> Point {
        self.translation
    }

    /// Whether a drag session is open.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GroupState::Dragging { .. })
    }

    /// The visual tree for the group's current state.
    pub fn render_node(&self) -> VisualNode {
        VisualNode::group(self.translation, self.content.clone())
    }

    /// Synchronously install the current visual tree on the host.
    ///
    /// A rejected commit is fatal to this component and propagates
    /// unretried.
    fn push_frame(&self, host: &mut dyn RenderHost) -> WidgetResult<()> {
        host.commit(self.render_node())
    }

    /// Strict viewport test: boundary values count as out-of-bounds.
    fn in_bounds(&self, x: f32, y: f32) -> bool {
        x > 0.0 && x < self.viewport.width && y > 0.0 && y < self.viewport.height
    }
}

impl Intercept for DragGroup {
    fn intercept(
        &mut self,
        event: BubbledEvent,
        ctx: &mut RouteContext<'_>,
    ) -> WidgetResult<Flow> {
        profile_scope!("drag_group_intercept");

        match event.event {
            GestureEvent::BeginMove { x, y } if !self.is_dragging() => {
                let offset = point(x, y) - self.translation;
                self.origin = self.translation;
                self.state = GroupState::Dragging { offset };
                tracing::trace!(
                    group = %self.id,
                    offset_x = offset.x,
                    offset_y = offset.y,
                    "session opened"
                );
                // Report the group's own position upward, not the raw
                // pointer coordinate.
                Ok(Flow::Continue(BubbledEvent {
                    source: Some(self.id),
                    event: GestureEvent::BeginMove {
                        x: self.translation.x,
                        y: self.translation.y,
                    },
                }))
            }
            GestureEvent::Move { x, y } if self.is_dragging() => {
                let GroupState::Dragging { offset } = self.state else {
                    return Ok(Flow::Continue(event));
                };
                if !self.in_bounds(x, y) {
                    // Absorbed: no movement, no forwarding, session stays
                    // open.
                    return Ok(Flow::Stop);
                }
                self.translation = point(x, y) - offset;
                self.push_frame(ctx.host)?;
                Ok(Flow::Continue(BubbledEvent {
                    source: Some(self.id),
                    event: GestureEvent::Move {
                        x: self.translation.x,
                        y: self.translation.y,
                    },
                }))
            }
            GestureEvent::EndMove { x, y } if self.is_dragging() => {
                let GroupState::Dragging { offset } = self.state else {
                    return Ok(Flow::Continue(event));
                };
                // The outgoing coordinate is derived from the sample; the
                // translation keeps whatever the last accepted move set.
                let out = point(x, y) - offset;
                self.state = GroupState::Idle;
                tracing::trace!(group = %self.id, "session closed");
                Ok(Flow::Continue(BubbledEvent {
                    source: Some(self.id),
                    event: GestureEvent::EndMove { x: out.x, y: out.y },
                }))
            }
            GestureEvent::Cancel => {
                self.translation = self.origin;
                self.state = GroupState::Idle;
                self.push_frame(ctx.host)?;
                tracing::debug!(
                    group = %self.id,
                    x = self.origin.x,
                    y = self.origin.y,
                    "session cancelled, origin restored"
                );
                // Cancellation is local, never forwarded.
                Ok(Flow::Stop)
            }
            _ => Ok(Flow::Continue(event)),
        }
    }
}
