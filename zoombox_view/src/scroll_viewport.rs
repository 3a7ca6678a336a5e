// Copyright 2025 the ZoomBox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::host::{ExtentChange, ScrollHost};

/// Headless scroll container implementing [`ScrollHost`].
///
/// `ScrollViewport` models the part of a toolkit scroll viewer the scale
/// controller relies on:
/// - a viewport of fixed size looking at scaled content,
/// - an extent equal to the unscaled content size times the content scale,
/// - scroll offsets clamped per axis into `[0, extent - viewport]`.
///
/// Extent changes are not pushed anywhere. The host loop pulls them with
/// [`ScrollViewport::take_extent_change`] after each layout step and forwards
/// them to the controller, mirroring a toolkit's scroll-changed notification.
#[derive(Clone, Debug)]
pub struct ScrollViewport {
    viewport: Size,
    content: Size,
    scale: Vec2,
    offset: Vec2,
    reported_extent: Size,
}

impl ScrollViewport {
    /// Creates a viewport of `viewport` size over unscaled `content`.
    ///
    /// The content scale starts at `1.0` and the offset at the origin.
    #[must_use]
    pub fn new(viewport: Size, content: Size) -> Self {
        Self {
            viewport,
            content,
            scale: Vec2::new(1.0, 1.0),
            offset: Vec2::ZERO,
            reported_extent: content,
        }
    }

    /// Returns the unscaled content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Replaces the unscaled content size, as a content reflow would.
    pub fn set_content_size(&mut self, content: Size) {
        self.content = content;
        self.clamp_offset();
    }

    /// Resizes the viewport.
    pub fn set_viewport_size(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.clamp_offset();
    }

    /// Returns the scale currently applied to the content.
    #[must_use]
    pub fn content_scale(&self) -> Vec2 {
        self.scale
    }

    /// Returns the extent change accumulated since the last call, if any.
    pub fn take_extent_change(&mut self) -> Option<ExtentChange> {
        let extent = self.extent_size();
        if extent == self.reported_extent {
            return None;
        }
        let change = ExtentChange::between(self.reported_extent, extent);
        self.reported_extent = extent;
        Some(change)
    }

    fn max_offset(&self) -> Vec2 {
        let extent = self.extent_size();
        // `f64::max` discards NaN, so a degenerate extent pins the offset to 0.
        Vec2::new(
            (extent.width - self.viewport.width).max(0.0),
            (extent.height - self.viewport.height).max(0.0),
        )
    }

    fn clamp_offset(&mut self) {
        let max = self.max_offset();
        self.offset = Vec2::new(
            self.offset.x.min(max.x).max(0.0),
            self.offset.y.min(max.y).max(0.0),
        );
    }
}

impl ScrollHost for ScrollViewport {
    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn extent_size(&self) -> Size {
        Size::new(
            self.content.width * self.scale.x,
            self.content.height * self.scale.y,
        )
    }

    fn offset(&self) -> Vec2 {
        self.offset
    }

    fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
        self.clamp_offset();
    }

    fn viewport_to_content(&self, point: Point) -> Point {
        // Map through the extent-to-content ratio rather than dividing by the
        // scale: collapsed content yields 0/0 here, which callers reject.
        let extent = self.extent_size();
        Point::new(
            (point.x + self.offset.x) * self.content.width / extent.width,
            (point.y + self.offset.y) * self.content.height / extent.height,
        )
    }

    fn set_content_scale(&mut self, scale: Vec2) {
        self.scale = scale;
        self.clamp_offset();
    }
}
