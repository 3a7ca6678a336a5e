// Copyright 2025 the ZoomBox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use ui_events::{keyboard::Modifiers, pointer::PointerButton};

use crate::input::{ButtonInput, WheelInput};

/// What a zoom container should do in response to one input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    /// Step the scale up about the pointer.
    ZoomIn,
    /// Step the scale down about the pointer.
    ZoomOut,
    /// Scroll the content along the horizontal axis.
    ScrollHorizontal,
    /// Scroll the content along the vertical axis.
    ScrollVertical,
    /// Fit the whole content into the viewport.
    FitToView,
    /// Restore a scale of `1.0` and scroll to the origin.
    Reset,
}

/// Maps modifier state and buttons to [`Gesture`]s.
///
/// The defaults are:
/// - wheel: zoom with Ctrl, horizontal scroll with Shift, vertical otherwise;
/// - middle button: fit to view, or reset with Ctrl held;
/// - Alt: no gesture at all, so nested content receives the input.
///
/// A modifier binding set to [`Modifiers::empty`] never matches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureBindings {
    /// Modifiers that turn the wheel into zoom.
    pub zoom: Modifiers,
    /// Modifiers that turn the wheel into horizontal scrolling.
    pub horizontal: Modifiers,
    /// Modifiers that suppress all handling.
    pub passthrough: Modifiers,
    /// Button that triggers fit-to-view.
    pub fit_button: PointerButton,
    /// Modifiers that turn the fit button into reset.
    pub reset: Modifiers,
}

impl Default for GestureBindings {
    fn default() -> Self {
        Self {
            zoom: Modifiers::CONTROL,
            horizontal: Modifiers::SHIFT,
            passthrough: Modifiers::ALT,
            fit_button: PointerButton::Auxiliary,
            reset: Modifiers::CONTROL,
        }
    }
}

impl GestureBindings {
    /// Creates the default bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the modifiers that turn the wheel into zoom.
    #[must_use]
    pub fn with_zoom(mut self, modifiers: Modifiers) -> Self {
        self.zoom = modifiers;
        self
    }

    /// Sets the modifiers that turn the wheel into horizontal scrolling.
    #[must_use]
    pub fn with_horizontal(mut self, modifiers: Modifiers) -> Self {
        self.horizontal = modifiers;
        self
    }

    /// Sets the modifiers that suppress all handling.
    #[must_use]
    pub fn with_passthrough(mut self, modifiers: Modifiers) -> Self {
        self.passthrough = modifiers;
        self
    }

    /// Sets the fit-to-view button and the modifiers turning it into reset.
    #[must_use]
    pub fn with_fit_button(mut self, button: PointerButton, reset: Modifiers) -> Self {
        self.fit_button = button;
        self.reset = reset;
        self
    }

    /// Returns `true` if `modifiers` hold the passthrough binding.
    #[must_use]
    pub fn is_passthrough(&self, modifiers: Modifiers) -> bool {
        held(modifiers, self.passthrough)
    }

    /// Resolves a wheel step; `None` leaves the input to nested content.
    #[must_use]
    pub fn resolve_wheel(&self, input: &WheelInput) -> Option<Gesture> {
        if self.is_passthrough(input.modifiers) {
            return None;
        }
        let dominant = input.dominant();
        if held(input.modifiers, self.zoom) {
            return if dominant > 0.0 {
                Some(Gesture::ZoomIn)
            } else if dominant < 0.0 {
                Some(Gesture::ZoomOut)
            } else {
                None
            };
        }
        if held(input.modifiers, self.horizontal) {
            return (dominant != 0.0).then_some(Gesture::ScrollHorizontal);
        }
        if input.delta.x.abs() > input.delta.y.abs() {
            Some(Gesture::ScrollHorizontal)
        } else if input.delta.y != 0.0 {
            Some(Gesture::ScrollVertical)
        } else {
            None
        }
    }

    /// Resolves a button press; `None` leaves the input to nested content.
    #[must_use]
    pub fn resolve_button(&self, input: &ButtonInput) -> Option<Gesture> {
        if self.is_passthrough(input.modifiers) || input.button != self.fit_button {
            return None;
        }
        if held(input.modifiers, self.reset) {
            Some(Gesture::Reset)
        } else {
            Some(Gesture::FitToView)
        }
    }
}

fn held(modifiers: Modifiers, binding: Modifiers) -> bool {
    !binding.is_empty() && modifiers.contains(binding)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};
    use ui_events::{keyboard::Modifiers, pointer::PointerButton};

    use super::{Gesture, GestureBindings};
    use crate::input::{ButtonInput, WheelInput};

    fn wheel(dy: f64, modifiers: Modifiers) -> WheelInput {
        WheelInput::new(Vec2::new(0.0, dy), Point::new(10.0, 10.0), modifiers)
    }

    fn button(button: PointerButton, modifiers: Modifiers) -> ButtonInput {
        ButtonInput::new(button, Point::new(10.0, 10.0), modifiers)
    }

    #[test]
    fn plain_wheel_scrolls_vertically() {
        let bindings = GestureBindings::default();
        assert_eq!(
            bindings.resolve_wheel(&wheel(-48.0, Modifiers::empty())),
            Some(Gesture::ScrollVertical)
        );
    }

    #[test]
    fn ctrl_wheel_zooms_by_direction() {
        let bindings = GestureBindings::default();
        assert_eq!(
            bindings.resolve_wheel(&wheel(48.0, Modifiers::CONTROL)),
            Some(Gesture::ZoomIn)
        );
        assert_eq!(
            bindings.resolve_wheel(&wheel(-48.0, Modifiers::CONTROL)),
            Some(Gesture::ZoomOut)
        );
        assert_eq!(bindings.resolve_wheel(&wheel(0.0, Modifiers::CONTROL)), None);
    }

    #[test]
    fn shift_wheel_scrolls_horizontally() {
        let bindings = GestureBindings::default();
        assert_eq!(
            bindings.resolve_wheel(&wheel(48.0, Modifiers::SHIFT)),
            Some(Gesture::ScrollHorizontal)
        );
    }

    #[test]
    fn horizontal_wheel_scrolls_horizontally() {
        let bindings = GestureBindings::default();
        let input = WheelInput::new(Vec2::new(20.0, 2.0), Point::ZERO, Modifiers::empty());
        assert_eq!(
            bindings.resolve_wheel(&input),
            Some(Gesture::ScrollHorizontal)
        );
    }

    #[test]
    fn zoom_wins_over_horizontal() {
        let bindings = GestureBindings::default();
        let modifiers = Modifiers::CONTROL | Modifiers::SHIFT;
        assert_eq!(
            bindings.resolve_wheel(&wheel(48.0, modifiers)),
            Some(Gesture::ZoomIn)
        );
    }

    #[test]
    fn alt_suppresses_everything() {
        let bindings = GestureBindings::default();
        for modifiers in [
            Modifiers::ALT,
            Modifiers::ALT | Modifiers::CONTROL,
            Modifiers::ALT | Modifiers::SHIFT,
        ] {
            assert_eq!(bindings.resolve_wheel(&wheel(48.0, modifiers)), None);
            assert_eq!(
                bindings.resolve_button(&button(PointerButton::Auxiliary, modifiers)),
                None
            );
        }
        assert!(bindings.is_passthrough(Modifiers::ALT));
        assert!(!bindings.is_passthrough(Modifiers::CONTROL));
    }

    #[test]
    fn middle_button_fits_or_resets() {
        let bindings = GestureBindings::default();
        assert_eq!(
            bindings.resolve_button(&button(PointerButton::Auxiliary, Modifiers::empty())),
            Some(Gesture::FitToView)
        );
        assert_eq!(
            bindings.resolve_button(&button(PointerButton::Auxiliary, Modifiers::CONTROL)),
            Some(Gesture::Reset)
        );
        assert_eq!(
            bindings.resolve_button(&button(PointerButton::Primary, Modifiers::empty())),
            None
        );
    }

    #[test]
    fn empty_binding_never_matches() {
        let bindings = GestureBindings::default()
            .with_zoom(Modifiers::empty())
            .with_passthrough(Modifiers::empty());
        assert_eq!(
            bindings.resolve_wheel(&wheel(48.0, Modifiers::empty())),
            Some(Gesture::ScrollVertical)
        );
        assert_eq!(
            bindings.resolve_wheel(&wheel(48.0, Modifiers::ALT)),
            Some(Gesture::ScrollVertical)
        );
    }

    #[test]
    fn rebinding_fit_button() {
        let bindings = GestureBindings::default()
            .with_fit_button(PointerButton::Secondary, Modifiers::SHIFT);
        assert_eq!(
            bindings.resolve_button(&button(PointerButton::Secondary, Modifiers::SHIFT)),
            Some(Gesture::Reset)
        );
        assert_eq!(
            bindings.resolve_button(&button(PointerButton::Auxiliary, Modifiers::empty())),
            None
        );
    }
}
