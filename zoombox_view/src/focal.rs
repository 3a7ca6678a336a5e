// Copyright 2025 the ZoomBox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure helpers behind focal-point-preserving zoom.

use kurbo::{Point, Size, Vec2};

/// Computes the scroll offset that keeps an anchor visually stationary.
///
/// `before` is the anchor in content-local space captured before the extent
/// changed, `now` is the content-local point found under the same viewport
/// position afterwards. The compensating offset is
/// `offset - (now - before) * scale`, evaluated per axis.
///
/// Returns `None` if either resulting component is NaN or infinite.
///
/// ```rust
/// use kurbo::{Point, Vec2};
/// use zoombox_view::recenter_offset;
///
/// // Zoomed from 1.0 to 2.0 about the viewport point (50, 50) with no scroll:
/// // the content point (50, 50) now sits under content-local (25, 25).
/// let offset = recenter_offset(
///     Vec2::ZERO,
///     Point::new(50.0, 50.0),
///     Point::new(25.0, 25.0),
///     Vec2::new(2.0, 2.0),
/// );
/// assert_eq!(offset, Some(Vec2::new(50.0, 50.0)));
/// ```
#[must_use]
pub fn recenter_offset(offset: Vec2, before: Point, now: Point, scale: Vec2) -> Option<Vec2> {
    let delta = now - before;
    let next = Vec2::new(offset.x - delta.x * scale.x, offset.y - delta.y * scale.y);
    next.is_finite().then_some(next)
}

/// Computes the uniform scale that fits the whole extent into the viewport.
///
/// Each axis proposes `scale * viewport / extent`; the smaller candidate wins
/// so both dimensions fit and the aspect ratio is preserved. Returns `None`
/// when the viewport or the extent is empty along either axis.
#[must_use]
pub fn fit_scale(scale: Vec2, viewport: Size, extent: Size) -> Option<f64> {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return None;
    }
    if extent.width <= 0.0 || extent.height <= 0.0 {
        return None;
    }
    let sx = scale.x * viewport.width / extent.width;
    let sy = scale.y * viewport.height / extent.height;
    let fit = sx.min(sy);
    fit.is_finite().then_some(fit)
}
