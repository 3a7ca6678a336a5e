// Copyright 2025 the ZoomBox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use tracing::trace;
use ui_events::pointer::{PointerButton, PointerEvent};
use zoombox_gesture::{ButtonInput, Gesture, PointerInput, WheelInput};
use zoombox_timing::Fire;
use zoombox_view::{
    ExtentChange, Recenter, ScaleController, ScaleControllerDebugInfo, ScrollHost, ZoomDirection,
};

use crate::options::ZoomBoxOptions;
use crate::window::{WindowDrag, WindowHost};

/// State of a zoomable, scrollable content container.
///
/// `ZoomBox` owns the scale controller, the gesture configuration and the
/// deferred window drag, but never the host. The host (a toolkit scroll
/// viewer, or [`zoombox_view::ScrollViewport`]) is passed to every call that
/// needs it, and reports back through:
/// - [`ZoomBox::on_layout_updated`] after each completed layout pass,
/// - [`ZoomBox::on_extent_changed`] whenever the scrollable extent changed.
///
/// Until the first layout pass everything that touches the host is a no-op
/// and scale requests are deferred.
#[derive(Clone, Debug)]
pub struct ZoomBox {
    options: ZoomBoxOptions,
    scale: ScaleController,
    window_drag: WindowDrag,
}

impl Default for ZoomBox {
    fn default() -> Self {
        Self::new(ZoomBoxOptions::default())
    }
}

impl ZoomBox {
    /// Creates a zoom box with the given options.
    #[must_use]
    pub fn new(options: ZoomBoxOptions) -> Self {
        Self {
            options,
            scale: ScaleController::new(options.min_scale).with_zoom_step(options.zoom_step),
            window_drag: WindowDrag::default(),
        }
    }

    /// Returns the current options.
    #[must_use]
    pub fn options(&self) -> &ZoomBoxOptions {
        &self.options
    }

    /// Returns the underlying scale controller.
    #[must_use]
    pub fn controller(&self) -> &ScaleController {
        &self.scale
    }

    /// Returns `true` once the host completed its first layout pass.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.scale.is_ready()
    }

    /// Changes the minimum scale; a smaller stored scale is raised on the
    /// next layout pass.
    pub fn set_min_scale(&mut self, min_scale: f64) {
        self.options.min_scale = min_scale;
        self.scale.set_min_scale(min_scale);
    }

    /// Handles a completed layout pass of the host.
    ///
    /// Returns `true` if a pending scale was applied.
    pub fn on_layout_updated<H: ScrollHost + ?Sized>(&mut self, host: &mut H) -> bool {
        self.scale.on_layout_updated(host)
    }

    /// Handles an extent change of the host.
    pub fn on_extent_changed<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        change: ExtentChange,
    ) -> Recenter {
        self.scale.on_extent_changed(host, change)
    }

    /// Returns the current scale.
    #[must_use]
    pub fn scale(&self) -> Vec2 {
        self.scale.scale()
    }

    /// Sets the scale, keeping the viewport center stationary.
    pub fn set_scale<H: ScrollHost + ?Sized>(&mut self, host: &mut H, scale: Vec2) {
        self.scale.set_scale(host, scale);
    }

    /// Defers `scale` to the next layout pass.
    pub fn preset_scale(&mut self, scale: Vec2) {
        self.scale.preset_scale(scale);
    }

    /// Zooms in one step about the viewport center.
    pub fn zoom_in<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        self.scale.zoom_centered(host, ZoomDirection::In);
    }

    /// Zooms out one step about the viewport center.
    pub fn zoom_out<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        self.scale.zoom_centered(host, ZoomDirection::Out);
    }

    /// Fits the whole content into the viewport and scrolls to the origin.
    pub fn fit_to_view<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        if !self.is_ready() {
            return;
        }
        let viewport = host.viewport_size();
        let extent = host.extent_size();
        self.scale.fit_to_view(host, viewport, extent);
    }

    /// Restores a scale of `1.0` and scrolls to the origin.
    pub fn reset<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        self.scale.reset(host);
    }

    /// Returns `true` if the horizontal scroll bar should be shown.
    #[must_use]
    pub fn horizontal_scroll_bar_visible<H: ScrollHost + ?Sized>(&self, host: &H) -> bool {
        self.options
            .scroll_bars_visible(host.extent_size(), host.viewport_size())
            .0
    }

    /// Returns `true` if the vertical scroll bar should be shown.
    #[must_use]
    pub fn vertical_scroll_bar_visible<H: ScrollHost + ?Sized>(&self, host: &H) -> bool {
        self.options
            .scroll_bars_visible(host.extent_size(), host.viewport_size())
            .1
    }

    /// Handles a wheel step; returns `true` if it was consumed.
    pub fn handle_wheel<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        input: &WheelInput,
    ) -> bool {
        if !self.is_ready() {
            return false;
        }
        let Some(gesture) = self.options.bindings.resolve_wheel(input) else {
            return false;
        };
        let amount = match gesture {
            Gesture::ScrollVertical => input.delta.y,
            _ => input.dominant(),
        };
        self.dispatch(host, gesture, input.position, amount)
    }

    /// Handles a button press at time `now` (milliseconds).
    ///
    /// The fit button is consumed. A primary press arms the deferred window
    /// drag but is not consumed, so children still see it.
    pub fn handle_button_down<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        input: &ButtonInput,
        now: u64,
    ) -> bool {
        if !self.is_ready() || self.options.bindings.is_passthrough(input.modifiers) {
            return false;
        }
        if let Some(gesture) = self.options.bindings.resolve_button(input) {
            return self.dispatch(host, gesture, input.position, 0.0);
        }
        if self.options.window_drag && input.button == PointerButton::Primary {
            self.window_drag.arm(now, self.options.window_drag_delay_ms);
        }
        false
    }

    /// Handles a button release. Releasing the primary button cancels a
    /// pending window drag.
    pub fn handle_button_up(&mut self, input: &ButtonInput) {
        if input.button == PointerButton::Primary {
            self.window_drag.cancel();
        }
    }

    /// Returns `true` while a window drag waits for its delay.
    #[must_use]
    pub fn window_drag_pending(&self) -> bool {
        self.window_drag.is_armed()
    }

    /// Drives the deferred window drag at time `now` (milliseconds).
    ///
    /// Once the delay has elapsed the drag starts only if
    /// [`WindowHost::primary_button_pressed`] still holds at this call.
    pub fn poll_window_drag<W: WindowHost + ?Sized>(
        &mut self,
        now: u64,
        window: &mut W,
    ) -> Fire {
        self.window_drag.poll(now, window)
    }

    /// Handles a `ui-events` pointer event; returns `true` if it was consumed.
    ///
    /// Page scroll deltas are measured in viewport sizes.
    pub fn handle_pointer_event<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &PointerEvent,
        now: u64,
    ) -> bool {
        let page_size = host.viewport_size().to_vec2();
        match PointerInput::from_pointer_event(event, self.options.line_size, page_size) {
            Some(PointerInput::Wheel(wheel)) => self.handle_wheel(host, &wheel),
            Some(PointerInput::Down(button)) => self.handle_button_down(host, &button, now),
            Some(PointerInput::Up(button)) => {
                self.handle_button_up(&button);
                false
            }
            None => false,
        }
    }

    /// Runs a resolved gesture.
    ///
    /// `position` anchors zoom gestures; `amount` is the scroll distance in
    /// pixels for scroll gestures, positive towards the start of the content.
    /// Returns `false` if the host is not ready or the axis cannot scroll.
    pub fn dispatch<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        gesture: Gesture,
        position: Point,
        amount: f64,
    ) -> bool {
        if !self.is_ready() {
            return false;
        }
        trace!(?gesture, "dispatching gesture");
        match gesture {
            Gesture::ZoomIn => self.scale.zoom_about(host, position, ZoomDirection::In),
            Gesture::ZoomOut => self.scale.zoom_about(host, position, ZoomDirection::Out),
            Gesture::ScrollHorizontal => {
                if !self.options.horizontal_scroll_bar.allows_scrolling() {
                    return false;
                }
                self.scale.clear_anchor();
                host.set_offset(host.offset() - Vec2::new(amount, 0.0));
            }
            Gesture::ScrollVertical => {
                if !self.options.vertical_scroll_bar.allows_scrolling() {
                    return false;
                }
                self.scale.clear_anchor();
                host.set_offset(host.offset() - Vec2::new(0.0, amount));
            }
            Gesture::FitToView => self.fit_to_view(host),
            Gesture::Reset => self.reset(host),
        }
        true
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomBoxDebugInfo {
        ZoomBoxDebugInfo {
            scale: self.scale.debug_info(),
            window_drag_pending: self.window_drag.is_armed(),
        }
    }
}

/// Debug snapshot of a [`ZoomBox`] state.
#[derive(Clone, Copy, Debug)]
pub struct ZoomBoxDebugInfo {
    /// Scale controller state.
    pub scale: ScaleControllerDebugInfo,
    /// Whether a window drag waits for its delay.
    pub window_drag_pending: bool,
}
