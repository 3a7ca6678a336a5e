// Copyright 2025 the ZoomBox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ZoomBox: headless state for a zoomable, scrollable content container.
//!
//! [`ZoomBox`] ties together the pieces a zoom container widget needs:
//! - scale control with a stationary focal point (`zoombox_view`),
//! - modifier-gated wheel and button gestures (`zoombox_gesture`),
//! - a deferred, cancelable window drag started from the content
//!   (`zoombox_timing`),
//! - scroll bar visibility policies.
//!
//! It owns no scroll container and no window. The toolkit integration
//! implements [`ScrollHost`] (or uses [`ScrollViewport`]) and [`WindowHost`],
//! forwards input, and reports layout passes and extent changes:
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use zoombox::{Modifiers, ScrollHost, ScrollViewport, WheelInput, ZoomBox, ZoomBoxOptions};
//!
//! let mut host = ScrollViewport::new(Size::new(200.0, 200.0), Size::new(800.0, 600.0));
//! let mut zoom = ZoomBox::new(ZoomBoxOptions::default());
//!
//! // Nothing happens until the host finished its first layout pass.
//! zoom.on_layout_updated(&mut host);
//!
//! let cursor = Point::new(120.0, 80.0);
//! let before = host.viewport_to_content(cursor);
//!
//! // Ctrl + wheel away from the user zooms in about the cursor.
//! let wheel = WheelInput::new(Vec2::new(0.0, 48.0), cursor, Modifiers::CONTROL);
//! assert!(zoom.handle_wheel(&mut host, &wheel));
//!
//! // The host re-measures and reports the new extent.
//! if let Some(change) = host.take_extent_change() {
//!     zoom.on_extent_changed(&mut host, change);
//! }
//!
//! let after = host.viewport_to_content(cursor);
//! assert!((after.x - before.x).abs() < 1e-9);
//! assert!((after.y - before.y).abs() < 1e-9);
//! ```
//!
//! Window dragging is time based. The integration passes a millisecond
//! timestamp with each press and polls [`ZoomBox::poll_window_drag`] from its
//! timer or frame callback.
//!
//! This crate is `no_std`.

#![no_std]

mod options;
mod window;
mod zoom_box;

pub use options::{
    DEFAULT_LINE_SIZE, DEFAULT_WINDOW_DRAG_DELAY_MS, ScrollBarPolicy, ZoomBoxOptions,
};
pub use window::WindowHost;
pub use zoom_box::{ZoomBox, ZoomBoxDebugInfo};

pub use zoombox_gesture::{
    ButtonInput, Gesture, GestureBindings, Modifiers, PointerButton, PointerInput, WheelInput,
};
pub use zoombox_timing::Fire;
pub use zoombox_view::{
    Anchor, DEFAULT_MIN_SCALE, DEFAULT_ZOOM_STEP, ExtentChange, Recenter, ScaleController,
    ScaleControllerDebugInfo, ScrollHost, ScrollViewport, ZoomDirection,
};
