// Copyright 2025 the ZoomBox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ZoomBox Gesture: resolve pointer input into zoom container gestures.
//!
//! A zoomable content container reacts to a handful of inputs, mostly gated
//! by modifier keys. This crate resolves each input **once** into a
//! [`Gesture`] so the container can dispatch it with a single `match`:
//!
//! | Input | Default gesture |
//! |-------|-----------------|
//! | Wheel | [`Gesture::ScrollVertical`] (or horizontal for sideways deltas) |
//! | Shift + wheel | [`Gesture::ScrollHorizontal`] |
//! | Ctrl + wheel | [`Gesture::ZoomIn`] / [`Gesture::ZoomOut`] |
//! | Middle button | [`Gesture::FitToView`] |
//! | Ctrl + middle button | [`Gesture::Reset`] |
//! | Anything with Alt | nothing: passthrough to nested content |
//!
//! Bindings are configurable through [`GestureBindings`].
//!
//! Input comes either from plain values ([`WheelInput`], [`ButtonInput`]) or
//! from `ui-events` pointer events through [`PointerInput::from_pointer_event`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use zoombox_gesture::{Gesture, GestureBindings, Modifiers, WheelInput};
//!
//! let bindings = GestureBindings::default();
//!
//! let wheel = WheelInput::new(Vec2::new(0.0, 48.0), Point::new(20.0, 30.0), Modifiers::CONTROL);
//! assert_eq!(bindings.resolve_wheel(&wheel), Some(Gesture::ZoomIn));
//!
//! let nested = WheelInput::new(Vec2::new(0.0, 48.0), Point::new(20.0, 30.0), Modifiers::ALT);
//! assert_eq!(bindings.resolve_wheel(&nested), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod bindings;
mod input;

pub use bindings::{Gesture, GestureBindings};
pub use input::{ButtonInput, PointerInput, WheelInput};
pub use ui_events::{keyboard::Modifiers, pointer::PointerButton};
