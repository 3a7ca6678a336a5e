// Copyright 2025 the ZoomBox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ZoomBox View: focal-point-preserving scale control for scroll containers.
//!
//! This crate provides the headless core of a zoomable content container:
//! - A [`ScaleController`] owning the (per-axis) scale factor, a deferred
//!   preset scale and the anchor of the current zoom gesture.
//! - The [`ScrollHost`] trait describing what the controller needs from the
//!   toolkit's scrollable container (sizes, offsets, coordinate translation).
//! - Pure helpers, [`recenter_offset`] and [`fit_scale`], implementing the
//!   arithmetic.
//! - [`ScrollViewport`], a reference [`ScrollHost`] for hosts that have no
//!   scroll container of their own, and for tests.
//!
//! It does **not** render, lay out, or route input. Callers are expected to:
//! - Apply the content scale in their layout system when asked to.
//! - Report completed layout passes and extent changes back to the controller.
//! - Interpret input (see `zoombox_gesture`) and call the zoom operations.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use zoombox_view::{Recenter, ScaleController, ScrollHost, ScrollViewport, ZoomDirection};
//!
//! // 800x600 window over a 2000x1500 document.
//! let mut host = ScrollViewport::new(Size::new(800.0, 600.0), Size::new(2000.0, 1500.0));
//! let mut zoom = ScaleController::default();
//!
//! // Restore a saved zoom level before the first layout pass.
//! zoom.preset_scale(Vec2::new(0.5, 0.5));
//! zoom.on_layout_updated(&mut host);
//! assert_eq!(host.content_scale(), Vec2::new(0.5, 0.5));
//! # host.take_extent_change();
//!
//! // Wheel zoom about the cursor, then let the host report the new extent.
//! zoom.zoom_about(&mut host, Point::new(200.0, 150.0), ZoomDirection::In);
//! let change = host.take_extent_change().unwrap();
//! assert!(matches!(zoom.on_extent_changed(&mut host, change), Recenter::Applied(_)));
//! ```
//!
//! ## Design notes
//!
//! - Scale is per axis and clamped to a minimum on every write; there is no
//!   upper bound.
//! - Zoom steps are multiplicative so each step feels the same at any zoom.
//! - An anchor lives for exactly one extent change. Extent changes without an
//!   anchor (content reflow) are not corrected.
//! - Non-finite corrections are dropped instead of being written to the host.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod focal;
mod host;
mod scroll_viewport;

pub use controller::{
    Anchor, DEFAULT_MIN_SCALE, DEFAULT_ZOOM_STEP, Recenter, ScaleController,
    ScaleControllerDebugInfo, ZoomDirection,
};
pub use focal::{fit_scale, recenter_offset};
pub use host::{ExtentChange, ScrollHost};
pub use scroll_viewport::ScrollViewport;
