//! Pointer input delivery for surface widgets.
//!
//! Input arrives as discrete samples ([`InputEvent`]) delivered by the
//! embedder. Delivery is gated by a capture broker: while a component holds
//! a set of input channels, matching samples reach that component
//! exclusively; otherwise every listening component observes them.
//!
//! ## Modules
//!
//! - `event` - Discrete pointer sample shapes (button, position)
//! - `capture` - Capture channels, the broker contract, and `PointerRouter`

mod capture;
mod event;

pub use capture::{CapturePort, ChannelSet, PointerRouter};
pub use event::{ButtonPhase, InputEvent, Modifiers, PointerButton};
