//! Pointer capture - exclusive claim on named input channels.
//!
//! Capture is the only global exclusivity resource in this crate. The broker
//! guarantees at most one holder at any instant; whoever acquires it must
//! release on every path that ends interest in further samples (release,
//! teardown). A holder that never releases starves every other component of
//! pointer input - the broker cannot detect or repair that.

use crate::input::event::InputEvent;
use crate::types::WidgetId;
use bitflags::bitflags;

bitflags! {
    /// Named input channels a component can capture.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChannelSet: u8 {
        /// Button press/release samples
        const CURSOR_BUTTON = 1 << 0;
        /// Pointer position samples
        const CURSOR_POSITION = 1 << 1;
    }
}

impl ChannelSet {
    /// The channels a drag interaction needs exclusively.
    pub const DRAG: ChannelSet = ChannelSet::CURSOR_BUTTON.union(ChannelSet::CURSOR_POSITION);
}

/// Capture requests a component issues against the input dispatcher.
pub trait CapturePort {
    /// Claim `channels` exclusively for `owner`. Returns whether the claim
    /// was granted; a claim against a different current holder is refused.
    fn capture(&mut self, owner: WidgetId, channels: ChannelSet) -> bool;

    /// Give up `channels` held by `owner`. A release by a non-holder is a
    /// no-op.
    fn release(&mut self, owner: WidgetId, channels: ChannelSet);
}

/// Single-surface input router and capture broker.
///
/// The embedder asks [`PointerRouter::admits`] before delivering each sample
/// to each listening component: while a capture is held, samples on captured
/// channels reach the holder exclusively; everything else reaches everyone.
#[derive(Debug, Default)]
pub struct PointerRouter {
    holder: Option<(WidgetId, ChannelSet)>,
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The component currently holding a capture, if any.
    pub fn holder(&self) -> Option<WidgetId> {
        self.holder.map(|(owner, _)| owner)
    }

    /// Whether `listener` may observe `event` under the current capture.
    pub fn admits(&self, listener: WidgetId, event: &InputEvent) -> bool {
        match self.holder {
            Some((owner, channels)) if channels.intersects(event.channel()) => owner == listener,
            _ => true,
        }
    }
}

impl CapturePort for PointerRouter {
    fn capture(&mut self, owner: WidgetId, channels: ChannelSet) -> bool {
        match self.holder {
            None => {
                self.holder = Some((owner, channels));
                tracing::trace!(%owner, ?channels, "capture granted");
                true
            }
            Some((held_by, held)) if held_by == owner => {
                self.holder = Some((owner, held | channels));
                true
            }
            Some((held_by, _)) => {
                tracing::warn!(%owner, holder = %held_by, "capture refused: channels already held");
                false
            }
        }
    }

    fn release(&mut self, owner: WidgetId, channels: ChannelSet) {
        match self.holder {
            Some((held_by, held)) if held_by == owner => {
                let remaining = held.difference(channels);
                if remaining.is_empty() {
                    self.holder = None;
                    tracing::trace!(%owner, "capture released");
                } else {
                    self.holder = Some((owner, remaining));
                }
            }
            _ => {
                tracing::trace!(%owner, "release ignored: not the holder");
            }
        }
    }
}
