// Copyright 2025 the ZoomBox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use ui_events::{
    ScrollDelta,
    keyboard::Modifiers,
    pointer::{PointerButton, PointerEvent, PointerScrollEvent},
};

/// A wheel (or touchpad scroll) step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Scroll delta in logical pixels.
    ///
    /// Positive `y` means the wheel was rotated away from the user, positive
    /// `x` means scrolling towards the left edge of the content.
    pub delta: Vec2,
    /// Pointer position in viewport space.
    pub position: Point,
    /// Modifier keys held during the step.
    pub modifiers: Modifiers,
}

impl WheelInput {
    /// Creates a wheel input.
    #[must_use]
    pub fn new(delta: Vec2, position: Point, modifiers: Modifiers) -> Self {
        Self {
            delta,
            position,
            modifiers,
        }
    }

    /// Returns whichever delta component has the larger magnitude.
    ///
    /// Ties go to the vertical axis, which is what a plain wheel produces.
    #[must_use]
    pub fn dominant(&self) -> f64 {
        if self.delta.x.abs() > self.delta.y.abs() {
            self.delta.x
        } else {
            self.delta.y
        }
    }
}

/// A pointer button press or release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonInput {
    /// The button that changed state.
    pub button: PointerButton,
    /// Pointer position in viewport space.
    pub position: Point,
    /// Modifier keys held at the time.
    pub modifiers: Modifiers,
}

impl ButtonInput {
    /// Creates a button input.
    #[must_use]
    pub fn new(button: PointerButton, position: Point, modifiers: Modifiers) -> Self {
        Self {
            button,
            position,
            modifiers,
        }
    }
}

/// The subset of pointer input a zoom container reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    /// Wheel or touchpad scroll.
    Wheel(WheelInput),
    /// Button pressed.
    Down(ButtonInput),
    /// Button released.
    Up(ButtonInput),
}

impl PointerInput {
    /// Extracts zoom-relevant input from a `ui-events` pointer event.
    ///
    /// Line and page scroll deltas are converted to logical pixels using
    /// `line_size` and `page_size`. Events without a button, zero-length
    /// scrolls, and all other event kinds yield `None`.
    #[must_use]
    pub fn from_pointer_event(
        event: &PointerEvent,
        line_size: Vec2,
        page_size: Vec2,
    ) -> Option<Self> {
        match event {
            PointerEvent::Scroll(scroll) => {
                let delta = scroll_delta_pixels(scroll, line_size, page_size);
                if delta.x == 0.0 && delta.y == 0.0 {
                    return None;
                }
                Some(Self::Wheel(WheelInput::new(
                    delta,
                    scroll.state.logical_point(),
                    scroll.state.modifiers,
                )))
            }
            PointerEvent::Down(e) => Some(Self::Down(ButtonInput::new(
                e.button?,
                e.state.logical_point(),
                e.state.modifiers,
            ))),
            PointerEvent::Up(e) => Some(Self::Up(ButtonInput::new(
                e.button?,
                e.state.logical_point(),
                e.state.modifiers,
            ))),
            _ => None,
        }
    }
}

fn scroll_delta_pixels(event: &PointerScrollEvent, line_size: Vec2, page_size: Vec2) -> Vec2 {
    match &event.delta {
        ScrollDelta::PixelDelta(pos) => {
            let logical = pos.to_logical(event.state.scale_factor);
            Vec2::new(logical.x, logical.y)
        }
        ScrollDelta::LineDelta(x, y) => {
            Vec2::new(f64::from(*x) * line_size.x, f64::from(*y) * line_size.y)
        }
        ScrollDelta::PageDelta(x, y) => {
            Vec2::new(f64::from(*x) * page_size.x, f64::from(*y) * page_size.y)
        }
    }
}
