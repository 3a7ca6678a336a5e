// Copyright 2025 the ZoomBox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};
use zoombox_gesture::GestureBindings;
use zoombox_view::{DEFAULT_MIN_SCALE, DEFAULT_ZOOM_STEP};

/// Default pixel distance of one wheel line.
pub const DEFAULT_LINE_SIZE: f64 = 48.0;

/// Default delay before a press on the content starts a window drag.
pub const DEFAULT_WINDOW_DRAG_DELAY_MS: u64 = 100;

/// Visibility policy for one scroll bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScrollBarPolicy {
    /// Shown only while the extent exceeds the viewport on that axis.
    #[default]
    Auto,
    /// Always shown.
    Visible,
    /// Never shown; the axis still scrolls.
    Hidden,
    /// Never shown and the axis does not scroll.
    Disabled,
}

impl ScrollBarPolicy {
    /// Resolves the visibility of the bar for an axis.
    #[must_use]
    pub fn is_visible(self, extent: f64, viewport: f64) -> bool {
        match self {
            Self::Auto => extent > viewport,
            Self::Visible => true,
            Self::Hidden | Self::Disabled => false,
        }
    }

    /// Returns `true` if the axis may be scrolled.
    #[must_use]
    pub fn allows_scrolling(self) -> bool {
        self != Self::Disabled
    }
}

/// Configuration of a [`ZoomBox`](crate::ZoomBox).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomBoxOptions {
    /// Lower bound for both scale axes.
    pub min_scale: f64,
    /// Multiplicative step per zoom gesture.
    pub zoom_step: f64,
    /// Modifier and button bindings.
    pub bindings: GestureBindings,
    /// Pixel size of one wheel line along each axis.
    pub line_size: Vec2,
    /// Whether a primary press on the content drags the window.
    pub window_drag: bool,
    /// Delay in milliseconds before a window drag starts.
    pub window_drag_delay_ms: u64,
    /// Horizontal scroll bar policy.
    pub horizontal_scroll_bar: ScrollBarPolicy,
    /// Vertical scroll bar policy.
    pub vertical_scroll_bar: ScrollBarPolicy,
}

impl Default for ZoomBoxOptions {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            zoom_step: DEFAULT_ZOOM_STEP,
            bindings: GestureBindings::default(),
            line_size: Vec2::new(DEFAULT_LINE_SIZE, DEFAULT_LINE_SIZE),
            window_drag: true,
            window_drag_delay_ms: DEFAULT_WINDOW_DRAG_DELAY_MS,
            horizontal_scroll_bar: ScrollBarPolicy::Auto,
            vertical_scroll_bar: ScrollBarPolicy::Auto,
        }
    }
}

impl ZoomBoxOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lower bound for both scale axes.
    #[must_use]
    pub fn with_min_scale(mut self, min_scale: f64) -> Self {
        self.min_scale = min_scale;
        self
    }

    /// Sets the multiplicative zoom step.
    #[must_use]
    pub fn with_zoom_step(mut self, zoom_step: f64) -> Self {
        self.zoom_step = zoom_step;
        self
    }

    /// Sets the gesture bindings.
    #[must_use]
    pub fn with_bindings(mut self, bindings: GestureBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Sets the pixel size of one wheel line.
    #[must_use]
    pub fn with_line_size(mut self, line_size: Vec2) -> Self {
        self.line_size = line_size;
        self
    }

    /// Enables or disables dragging the window by its content.
    #[must_use]
    pub fn with_window_drag(mut self, enabled: bool) -> Self {
        self.window_drag = enabled;
        self
    }

    /// Sets the delay before a window drag starts.
    #[must_use]
    pub fn with_window_drag_delay_ms(mut self, delay_ms: u64) -> Self {
        self.window_drag_delay_ms = delay_ms;
        self
    }

    /// Sets both scroll bar policies.
    #[must_use]
    pub fn with_scroll_bars(
        mut self,
        horizontal: ScrollBarPolicy,
        vertical: ScrollBarPolicy,
    ) -> Self {
        self.horizontal_scroll_bar = horizontal;
        self.vertical_scroll_bar = vertical;
        self
    }

    pub(crate) fn scroll_bars_visible(&self, extent: Size, viewport: Size) -> (bool, bool) {
        (
            self.horizontal_scroll_bar
                .is_visible(extent.width, viewport.width),
            self.vertical_scroll_bar
                .is_visible(extent.height, viewport.height),
        )
    }
}
