// Copyright 2025 the ZoomBox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

/// Primitives a scrollable container provides to the scale controller.
///
/// The host owns the actual layout: it applies the content scale transform,
/// measures the resulting extent, and clamps offsets into
/// `[0, extent - viewport]` per axis. The controller only reads these values
/// and requests changes.
///
/// Extent changes caused by [`ScrollHost::set_content_scale`] (or by unrelated
/// content reflow) are reported back to the controller by the host as an
/// [`ExtentChange`], typically once the next layout pass has completed.
pub trait ScrollHost {
    /// Size of the visible viewport in device-independent pixels.
    fn viewport_size(&self) -> Size;

    /// Total scrollable extent of the (scaled) content.
    fn extent_size(&self) -> Size;

    /// Current horizontal and vertical scroll offsets.
    fn offset(&self) -> Vec2;

    /// Requests new scroll offsets.
    ///
    /// Implementations clamp each axis independently into
    /// `[0, extent - viewport]`.
    fn set_offset(&mut self, offset: Vec2);

    /// Translates a point from viewport space into content-local space.
    fn viewport_to_content(&self, point: Point) -> Point;

    /// Applies a new layout scale to the hosted content.
    fn set_content_scale(&mut self, scale: Vec2);
}

/// Notification that the scrollable extent of the content changed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtentChange {
    /// The new extent.
    pub extent: Size,
    /// Change of the extent along each axis, `new - old`.
    pub delta: Vec2,
}

impl ExtentChange {
    /// Builds a change notification from the previous and the new extent.
    #[must_use]
    pub fn between(old: Size, new: Size) -> Self {
        Self {
            extent: new,
            delta: Vec2::new(new.width - old.width, new.height - old.height),
        }
    }

    /// Returns `true` if the width changed.
    #[must_use]
    pub fn width_changed(&self) -> bool {
        self.delta.x != 0.0
    }

    /// Returns `true` if the height changed.
    #[must_use]
    pub fn height_changed(&self) -> bool {
        self.delta.y != 0.0
    }

    /// Returns `true` if neither axis changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.width_changed() && !self.height_changed()
    }
}
