//! Discrete pointer sample shapes.

use crate::input::capture::ChannelSet;
use crate::types::Point;
use serde::{Deserialize, Serialize};

/// Physical pointer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Press or release edge of a button sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonPhase {
    Pressed,
    Released,
}

/// Keyboard modifiers active while the sample was taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub platform: bool,
}

/// One discrete input sample in surface coordinates.
///
/// Samples carry no identity beyond delivery order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// A button changed state at `position`.
    CursorButton {
        button: PointerButton,
        phase: ButtonPhase,
        modifiers: Modifiers,
        position: Point,
    },
    /// The pointer moved to `position`.
    CursorPosition { position: Point },
}

impl InputEvent {
    /// The capture channel this sample is delivered on.
    pub fn channel(&self) -> ChannelSet {
        match self {
            InputEvent::CursorButton { .. } => ChannelSet::CURSOR_BUTTON,
            InputEvent::CursorPosition { .. } => ChannelSet::CURSOR_POSITION,
        }
    }

    /// The sample's surface-space position.
    pub fn position(&self) -> Point {
        match self {
            InputEvent::CursorButton { position, .. } => *position,
            InputEvent::CursorPosition { position } => *position,
        }
    }
}
