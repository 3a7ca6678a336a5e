// Copyright 2025 the ZoomBox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};
use tracing::{debug, trace};

use crate::focal::{fit_scale, recenter_offset};
use crate::host::{ExtentChange, ScrollHost};

/// Default lower bound for both scale axes.
pub const DEFAULT_MIN_SCALE: f64 = 0.3;

/// Default multiplicative step applied per zoom gesture.
pub const DEFAULT_ZOOM_STEP: f64 = 1.2;

/// Direction of a stepped zoom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Multiply the scale by the zoom step.
    In,
    /// Divide the scale by the zoom step.
    Out,
}

impl ZoomDirection {
    /// Maps a wheel delta to a direction; positive zooms in.
    ///
    /// Returns `None` for a zero (or NaN) delta.
    #[must_use]
    pub fn from_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::In)
        } else if delta < 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }

    /// Applies one multiplicative step to `scale`.
    #[must_use]
    pub fn step(self, scale: Vec2, factor: f64) -> Vec2 {
        match self {
            Self::In => scale * factor,
            Self::Out => scale / factor,
        }
    }
}

/// A point that must stay visually fixed across the next extent change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    /// Where the anchor sits in viewport space.
    pub view: Point,
    /// The content-local point under [`Anchor::view`] at capture time.
    pub content: Point,
}

impl Anchor {
    /// Captures the content-local point currently under `view`.
    #[must_use]
    pub fn capture<H: ScrollHost + ?Sized>(host: &H, view: Point) -> Self {
        Self {
            view,
            content: host.viewport_to_content(view),
        }
    }
}

/// Outcome of [`ScaleController::on_extent_changed`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Recenter {
    /// Offsets were corrected; holds the offset requested from the host.
    Applied(Vec2),
    /// No anchor was pending, so the change was left alone.
    NoAnchor,
    /// The notification carried no change along either axis.
    Unchanged,
    /// The correction was NaN or infinite and was dropped.
    NonFinite,
}

/// Keeps a chosen point stationary while the content scale changes.
///
/// The controller owns the scale factor, a pending (preset) scale, and at
/// most one anchor. It never holds on to the host: every operation that needs
/// the scroll container takes it as `&mut H`.
///
/// The controller starts uninitialized. Until the host reports its first
/// completed layout pass through [`ScaleController::on_layout_updated`],
/// scale requests are deferred and everything else is a no-op.
///
/// A zoom flows through the controller in two steps:
/// 1. A scale request (for example [`ScaleController::zoom_about`]) captures
///    an [`Anchor`] and pushes the clamped scale to the host.
/// 2. Once the host has re-measured, it reports the new extent through
///    [`ScaleController::on_extent_changed`], which consumes the anchor and
///    scrolls so the anchor is back under the same viewport point.
///
/// ```rust
/// use kurbo::{Point, Size};
/// use zoombox_view::{ScaleController, ScrollHost, ScrollViewport, ZoomDirection};
///
/// let mut host = ScrollViewport::new(Size::new(100.0, 100.0), Size::new(400.0, 300.0));
/// let mut zoom = ScaleController::default();
/// zoom.on_layout_updated(&mut host);
///
/// let cursor = Point::new(50.0, 50.0);
/// let before = host.viewport_to_content(cursor);
/// zoom.zoom_about(&mut host, cursor, ZoomDirection::In);
/// if let Some(change) = host.take_extent_change() {
///     zoom.on_extent_changed(&mut host, change);
/// }
///
/// let after = host.viewport_to_content(cursor);
/// assert!((after.x - before.x).abs() < 1e-9);
/// assert!((after.y - before.y).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct ScaleController {
    min_scale: f64,
    zoom_step: f64,
    ready: bool,
    scale: Option<Vec2>,
    pending: Option<Vec2>,
    anchor: Option<Anchor>,
    // Scale reflected by the extent the host last reported.
    settled: Vec2,
}

impl Default for ScaleController {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SCALE)
    }
}

impl ScaleController {
    /// Creates an uninitialized controller with the given minimum scale.
    #[must_use]
    pub fn new(min_scale: f64) -> Self {
        Self {
            min_scale,
            zoom_step: DEFAULT_ZOOM_STEP,
            ready: false,
            scale: None,
            pending: None,
            anchor: None,
            settled: Vec2::new(1.0, 1.0),
        }
    }

    /// Replaces the multiplicative zoom step.
    ///
    /// Steps that are not finite or not greater than `1.0` are ignored.
    #[must_use]
    pub fn with_zoom_step(mut self, step: f64) -> Self {
        if step.is_finite() && step > 1.0 {
            self.zoom_step = step;
        }
        self
    }

    /// Returns the minimum scale factor.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Sets the minimum scale factor.
    ///
    /// A stored scale that falls below the new minimum is clamped and queued
    /// as pending, so the host picks it up on the next layout pass.
    pub fn set_min_scale(&mut self, min_scale: f64) {
        self.min_scale = min_scale;
        if let Some(scale) = self.scale {
            let clamped = self.clamp(scale);
            if clamped != scale {
                self.scale = Some(clamped);
                self.pending = Some(clamped);
            }
        }
    }

    /// Returns the multiplicative zoom step.
    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    /// Returns `true` once the host has completed a layout pass.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Returns the current scale, or identity if none was requested yet.
    #[must_use]
    pub fn scale(&self) -> Vec2 {
        self.scale.unwrap_or(Vec2::new(1.0, 1.0))
    }

    /// Returns `true` once a scale has been requested.
    #[must_use]
    pub fn has_scale(&self) -> bool {
        self.scale.is_some()
    }

    /// Returns the scale waiting for the next layout pass, if any.
    #[must_use]
    pub fn pending_scale(&self) -> Option<Vec2> {
        self.pending
    }

    /// Returns the anchor waiting for the next extent change, if any.
    #[must_use]
    pub fn anchor(&self) -> Option<Anchor> {
        self.anchor
    }

    /// Drops the pending anchor.
    ///
    /// Call this when the user scrolls: a point captured before the scroll no
    /// longer marks what is under the pointer.
    pub fn clear_anchor(&mut self) {
        self.anchor = None;
    }

    /// Handles a completed layout pass of the host.
    ///
    /// The first call ends the initialization phase. Any call applies and
    /// clears the pending scale; returns `true` if one was applied.
    pub fn on_layout_updated<H: ScrollHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if !self.ready {
            self.ready = true;
            debug!("scroll host ready");
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };
        self.scale = Some(pending);
        host.set_content_scale(pending);
        debug!(x = pending.x, y = pending.y, "applied pending scale");
        true
    }

    /// Defers `scale` to the next layout pass.
    ///
    /// Used to set an initial or restored zoom before the host exists.
    pub fn preset_scale(&mut self, scale: Vec2) {
        let clamped = self.clamp(scale);
        self.scale = Some(clamped);
        self.pending = Some(clamped);
    }

    /// Sets the scale, anchored on the viewport center.
    ///
    /// Each axis is clamped to at least [`ScaleController::min_scale`].
    /// Before the host is ready the request is stored as pending so the next
    /// layout pass applies it. The very first request after that is pushed
    /// to the host directly, without an anchor.
    pub fn set_scale<H: ScrollHost + ?Sized>(&mut self, host: &mut H, scale: Vec2) {
        let clamped = self.clamp(scale);
        let Some(current) = self.scale else {
            self.scale = Some(clamped);
            if self.ready {
                self.pending = None;
                host.set_content_scale(clamped);
            } else {
                self.pending = Some(clamped);
            }
            return;
        };
        if !self.ready {
            self.scale = Some(clamped);
            self.pending = Some(clamped);
            return;
        }
        let center = host.viewport_size().to_rect().center();
        let anchor = Anchor::capture(host, center);
        self.apply(host, current, clamped, anchor);
    }

    /// Steps the scale about a viewport point, typically the cursor.
    pub fn zoom_about<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        view_point: Point,
        direction: ZoomDirection,
    ) {
        if !self.ready {
            return;
        }
        let current = self.scale();
        let next = self.clamp(direction.step(current, self.zoom_step));
        let anchor = Anchor::capture(host, view_point);
        self.apply(host, current, next, anchor);
    }

    /// Steps the scale about the viewport center.
    pub fn zoom_centered<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        direction: ZoomDirection,
    ) {
        let center = host.viewport_size().to_rect().center();
        self.zoom_about(host, center, direction);
    }

    /// Handles an extent change reported by the host.
    ///
    /// Only changes preceded by a scale request carry an anchor. Reflows that
    /// were not caused by zooming are left uncorrected.
    pub fn on_extent_changed<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        change: ExtentChange,
    ) -> Recenter {
        if change.is_empty() {
            return Recenter::Unchanged;
        }
        self.settled = self.scale();
        let Some(anchor) = self.anchor.take() else {
            return Recenter::NoAnchor;
        };
        let now = host.viewport_to_content(anchor.view);
        match recenter_offset(host.offset(), anchor.content, now, self.scale()) {
            Some(offset) => {
                trace!(x = offset.x, y = offset.y, "recentered on anchor");
                host.set_offset(offset);
                Recenter::Applied(offset)
            }
            None => {
                debug!("dropped non-finite recenter offset");
                Recenter::NonFinite
            }
        }
    }

    /// Scales uniformly so the whole extent fits the viewport, then scrolls
    /// to the origin.
    ///
    /// No-op before the host is ready or when either size is empty.
    pub fn fit_to_view<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        viewport: Size,
        extent: Size,
    ) {
        if !self.ready {
            return;
        }
        let Some(fit) = fit_scale(self.scale(), viewport, extent) else {
            return;
        };
        self.set_scale(host, Vec2::new(fit, fit));
        host.set_offset(Vec2::ZERO);
        self.anchor = None;
    }

    /// Restores a scale of `1.0` and scrolls to the origin.
    pub fn reset<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        self.set_scale(host, Vec2::new(1.0, 1.0));
        if self.ready {
            host.set_offset(Vec2::ZERO);
        }
        self.anchor = None;
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ScaleControllerDebugInfo {
        ScaleControllerDebugInfo {
            scale: self.scale(),
            min_scale: self.min_scale,
            zoom_step: self.zoom_step,
            ready: self.ready,
            pending: self.pending,
            anchor: self.anchor,
        }
    }

    fn clamp(&self, scale: Vec2) -> Vec2 {
        // `f64::max` maps NaN requests onto the minimum.
        Vec2::new(scale.x.max(self.min_scale), scale.y.max(self.min_scale))
    }

    fn apply<H: ScrollHost + ?Sized>(
        &mut self,
        host: &mut H,
        current: Vec2,
        next: Vec2,
        anchor: Anchor,
    ) {
        self.scale = Some(next);
        self.pending = None;
        if next == current {
            // No extent change follows, so an anchor would go stale.
            self.anchor = None;
            return;
        }
        host.set_content_scale(next);
        // Back at the laid-out scale: the host reports nothing to recenter on.
        self.anchor = (next != self.settled).then_some(anchor);
    }
}

/// Debug snapshot of a [`ScaleController`] state.
#[derive(Clone, Copy, Debug)]
pub struct ScaleControllerDebugInfo {
    /// Current scale (identity before the first request).
    pub scale: Vec2,
    /// Minimum scale factor.
    pub min_scale: f64,
    /// Multiplicative zoom step.
    pub zoom_step: f64,
    /// Whether the host completed a layout pass.
    pub ready: bool,
    /// Scale waiting for the next layout pass.
    pub pending: Option<Vec2>,
    /// Anchor waiting for the next extent change.
    pub anchor: Option<Anchor>,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{Recenter, ScaleController, ZoomDirection};
    use crate::host::{ExtentChange, ScrollHost};
    use crate::scroll_viewport::ScrollViewport;

    fn host() -> ScrollViewport {
        ScrollViewport::new(Size::new(100.0, 100.0), Size::new(400.0, 300.0))
    }

    fn ready(host: &mut ScrollViewport) -> ScaleController {
        let mut zoom = ScaleController::default();
        zoom.on_layout_updated(host);
        zoom
    }

    fn settle(zoom: &mut ScaleController, host: &mut ScrollViewport) -> Option<Recenter> {
        let change = host.take_extent_change()?;
        Some(zoom.on_extent_changed(host, change))
    }

    #[test]
    fn requests_are_clamped_to_minimum() {
        let mut host = host();
        let mut zoom = ready(&mut host);

        for requested in [
            Vec2::new(0.0, 0.0),
            Vec2::new(-3.0, 2.0),
            Vec2::new(0.1, 0.29),
            Vec2::new(f64::NAN, 5.0),
        ] {
            zoom.set_scale(&mut host, requested);
            let scale = zoom.scale();
            assert!(scale.x >= 0.3, "x below minimum for {requested:?}");
            assert!(scale.y >= 0.3, "y below minimum for {requested:?}");
        }
    }

    #[test]
    fn first_request_is_stored_as_pending() {
        let mut host = host();
        let mut zoom = ScaleController::default();

        zoom.set_scale(&mut host, Vec2::new(2.0, 2.0));
        assert_eq!(zoom.scale(), Vec2::new(2.0, 2.0));
        assert_eq!(zoom.pending_scale(), Some(Vec2::new(2.0, 2.0)));
        assert_eq!(host.content_scale(), Vec2::new(1.0, 1.0));
        assert!(zoom.anchor().is_none());

        assert!(zoom.on_layout_updated(&mut host));
        assert_eq!(host.content_scale(), Vec2::new(2.0, 2.0));
        assert_eq!(zoom.pending_scale(), None);
    }

    #[test]
    fn first_request_after_layout_is_pushed_once() {
        let mut host = host();
        let mut zoom = ready(&mut host);

        zoom.set_scale(&mut host, Vec2::new(2.0, 2.0));
        assert_eq!(host.content_scale(), Vec2::new(2.0, 2.0));
        assert_eq!(zoom.pending_scale(), None);

        // A later layout pass must not push the same scale again.
        host.set_content_scale(Vec2::new(3.0, 3.0));
        assert!(!zoom.on_layout_updated(&mut host));
        assert_eq!(host.content_scale(), Vec2::new(3.0, 3.0));
    }

    #[test]
    fn zoom_round_trip_before_layout_leaves_no_anchor() {
        let mut host = host();
        let mut zoom = ready(&mut host);
        host.set_offset(Vec2::new(40.0, 40.0));
        let cursor = Point::new(50.0, 50.0);

        zoom.zoom_about(&mut host, cursor, ZoomDirection::In);
        assert!(zoom.anchor().is_some());
        zoom.zoom_about(&mut host, cursor, ZoomDirection::Out);
        assert_eq!(zoom.scale(), Vec2::new(1.0, 1.0));
        assert!(zoom.anchor().is_none());
        assert!(host.take_extent_change().is_none());

        // An unrelated reflow must not be recentered on the old cursor.
        host.set_content_size(Size::new(600.0, 500.0));
        let change = host.take_extent_change().unwrap();
        assert_eq!(zoom.on_extent_changed(&mut host, change), Recenter::NoAnchor);
        assert_eq!(host.offset(), Vec2::new(40.0, 40.0));
    }

    #[test]
    fn stacked_zooms_keep_anchor_until_settled() {
        let mut host = host();
        let mut zoom = ready(&mut host);
        let cursor = Point::new(30.0, 30.0);

        zoom.zoom_about(&mut host, cursor, ZoomDirection::In);
        zoom.zoom_about(&mut host, cursor, ZoomDirection::In);
        assert!(zoom.anchor().is_some());
        assert!(matches!(
            settle(&mut zoom, &mut host),
            Some(Recenter::Applied(_))
        ));

        // Back to 1.2 after the host settled at 1.44: a real change.
        zoom.zoom_about(&mut host, cursor, ZoomDirection::Out);
        assert!(zoom.anchor().is_some());
    }

    #[test]
    fn clear_anchor_drops_pending_recenter() {
        let mut host = host();
        let mut zoom = ready(&mut host);
        zoom.zoom_about(&mut host, Point::new(50.0, 50.0), ZoomDirection::In);

        zoom.clear_anchor();
        assert_eq!(settle(&mut zoom, &mut host), Some(Recenter::NoAnchor));
    }

    #[test]
    fn pending_scale_is_applied_once() {
        let mut host = host();
        let mut zoom = ScaleController::default();
        zoom.preset_scale(Vec2::new(1.5, 1.5));

        assert!(zoom.on_layout_updated(&mut host));
        host.set_content_scale(Vec2::new(3.0, 3.0));
        assert!(!zoom.on_layout_updated(&mut host));
        assert_eq!(host.content_scale(), Vec2::new(3.0, 3.0));
    }

    #[test]
    fn set_scale_is_idempotent() {
        let mut host = host();
        let mut zoom = ready(&mut host);

        zoom.set_scale(&mut host, Vec2::new(1.7, 0.8));
        settle(&mut zoom, &mut host);
        let first = zoom.scale();

        zoom.set_scale(&mut host, Vec2::new(1.7, 0.8));
        assert_eq!(zoom.scale(), first);
        assert!(zoom.anchor().is_none());
        assert!(host.take_extent_change().is_none());
    }

    #[test]
    fn set_scale_anchors_on_viewport_center() {
        let mut host = host();
        let mut zoom = ready(&mut host);
        zoom.set_scale(&mut host, Vec2::new(1.0, 1.0));
        host.set_offset(Vec2::new(40.0, 20.0));

        let center = Point::new(50.0, 50.0);
        let before = host.viewport_to_content(center);
        zoom.set_scale(&mut host, Vec2::new(2.0, 2.0));
        assert_eq!(zoom.anchor().map(|a| a.view), Some(center));

        assert!(matches!(
            settle(&mut zoom, &mut host),
            Some(Recenter::Applied(_))
        ));
        let after = host.viewport_to_content(center);
        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);
        assert!(zoom.anchor().is_none());
    }

    #[test]
    fn wheel_zoom_keeps_cursor_point_fixed() {
        let mut host = host();
        let mut zoom = ready(&mut host);
        let cursor = Point::new(30.0, 70.0);

        for direction in [ZoomDirection::In, ZoomDirection::In, ZoomDirection::Out] {
            let before = host.viewport_to_content(cursor);
            zoom.zoom_about(&mut host, cursor, direction);
            settle(&mut zoom, &mut host);
            let after = host.viewport_to_content(cursor);
            assert!((after.x - before.x).abs() < 1e-9, "{direction:?}");
            assert!((after.y - before.y).abs() < 1e-9, "{direction:?}");
        }
    }

    #[test]
    fn recenter_matches_offset_law() {
        let mut host = host();
        let mut zoom = ready(&mut host);
        host.set_offset(Vec2::new(10.0, 5.0));

        let cursor = Point::new(50.0, 50.0);
        zoom.zoom_about(&mut host, cursor, ZoomDirection::In);
        let anchor = zoom.anchor().unwrap();
        let old_offset = host.offset();
        let now = host.viewport_to_content(cursor);
        let scale = zoom.scale();

        let change = host.take_extent_change().unwrap();
        let Recenter::Applied(offset) = zoom.on_extent_changed(&mut host, change) else {
            panic!("expected a recenter");
        };
        assert!((offset.x - (old_offset.x - (now.x - anchor.content.x) * scale.x)).abs() < 1e-9);
        assert!((offset.y - (old_offset.y - (now.y - anchor.content.y) * scale.y)).abs() < 1e-9);
        // 60 * 1.2 - 50 = 22 and 55 * 1.2 - 50 = 16.
        assert!((host.offset().x - 22.0).abs() < 1e-9);
        assert!((host.offset().y - 16.0).abs() < 1e-9);
    }

    #[test]
    fn non_finite_recenter_leaves_offset_unchanged() {
        let mut host = host();
        let mut zoom = ready(&mut host);
        host.set_offset(Vec2::new(20.0, 30.0));

        zoom.zoom_about(&mut host, Point::new(50.0, 50.0), ZoomDirection::In);
        let old = host.extent_size();
        host.set_content_size(Size::ZERO);
        let offset_before = host.offset();

        let change = ExtentChange::between(old, host.extent_size());
        assert_eq!(zoom.on_extent_changed(&mut host, change), Recenter::NonFinite);
        assert_eq!(host.offset(), offset_before);
        assert!(zoom.anchor().is_none());
    }

    #[test]
    fn reflow_without_anchor_is_not_corrected() {
        let mut host = host();
        let mut zoom = ready(&mut host);
        host.set_offset(Vec2::new(50.0, 50.0));

        host.set_content_size(Size::new(600.0, 500.0));
        let change = host.take_extent_change().unwrap();
        assert_eq!(zoom.on_extent_changed(&mut host, change), Recenter::NoAnchor);
        assert_eq!(host.offset(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn empty_change_keeps_anchor() {
        let mut host = host();
        let mut zoom = ready(&mut host);
        zoom.zoom_about(&mut host, Point::new(10.0, 10.0), ZoomDirection::In);

        let change = ExtentChange::between(host.extent_size(), host.extent_size());
        assert_eq!(zoom.on_extent_changed(&mut host, change), Recenter::Unchanged);
        assert!(zoom.anchor().is_some());
    }

    #[test]
    fn zoom_out_floors_at_minimum() {
        let mut host = host();
        let mut zoom = ready(&mut host);
        let cursor = Point::new(50.0, 50.0);

        for _ in 0..8 {
            zoom.zoom_about(&mut host, cursor, ZoomDirection::Out);
            settle(&mut zoom, &mut host);
            assert!(zoom.scale().x >= 0.3);
        }
        assert_eq!(zoom.scale(), Vec2::new(0.3, 0.3));

        zoom.zoom_about(&mut host, cursor, ZoomDirection::Out);
        assert_eq!(zoom.scale(), Vec2::new(0.3, 0.3));
        // Nothing changed, so no anchor may linger.
        assert!(zoom.anchor().is_none());
    }

    #[test]
    fn fit_to_view_uses_smaller_ratio() {
        let mut host = ScrollViewport::new(Size::new(100.0, 100.0), Size::new(400.0, 200.0));
        let mut zoom = ready(&mut host);
        zoom.set_scale(&mut host, Vec2::new(1.0, 1.0));
        host.set_offset(Vec2::new(100.0, 50.0));

        let (viewport, extent) = (host.viewport_size(), host.extent_size());
        zoom.fit_to_view(&mut host, viewport, extent);
        assert_eq!(zoom.scale(), Vec2::new(0.25, 0.25));
        assert_eq!(host.offset(), Vec2::ZERO);
        assert_eq!(settle(&mut zoom, &mut host), Some(Recenter::NoAnchor));
    }

    #[test]
    fn fit_to_view_clamps_to_minimum() {
        let mut host = ScrollViewport::new(Size::new(100.0, 100.0), Size::new(1_000.0, 800.0));
        let mut zoom = ready(&mut host);

        let (viewport, extent) = (host.viewport_size(), host.extent_size());
        zoom.fit_to_view(&mut host, viewport, extent);
        assert_eq!(zoom.scale(), Vec2::new(0.3, 0.3));
    }

    #[test]
    fn reset_restores_identity_and_origin() {
        let mut host = host();
        let mut zoom = ready(&mut host);
        zoom.zoom_about(&mut host, Point::new(80.0, 80.0), ZoomDirection::In);
        zoom.zoom_about(&mut host, Point::new(80.0, 80.0), ZoomDirection::In);
        settle(&mut zoom, &mut host);
        assert!(host.offset() != Vec2::ZERO);

        zoom.reset(&mut host);
        assert_eq!(zoom.scale(), Vec2::new(1.0, 1.0));
        assert_eq!(host.offset(), Vec2::ZERO);
        assert!(zoom.anchor().is_none());
        assert_eq!(settle(&mut zoom, &mut host), Some(Recenter::NoAnchor));
        assert_eq!(host.offset(), Vec2::ZERO);
    }

    #[test]
    fn operations_before_layout_are_deferred_or_ignored() {
        let mut host = host();
        let mut zoom = ScaleController::default();
        host.set_offset(Vec2::new(30.0, 30.0));

        zoom.zoom_about(&mut host, Point::new(10.0, 10.0), ZoomDirection::In);
        let (viewport, extent) = (host.viewport_size(), host.extent_size());
        zoom.fit_to_view(&mut host, viewport, extent);
        assert!(!zoom.has_scale());
        assert_eq!(host.content_scale(), Vec2::new(1.0, 1.0));

        zoom.reset(&mut host);
        assert_eq!(zoom.pending_scale(), Some(Vec2::new(1.0, 1.0)));
        assert_eq!(host.offset(), Vec2::new(30.0, 30.0));
    }

    #[test]
    fn raising_minimum_reclamps_and_queues() {
        let mut host = host();
        let mut zoom = ready(&mut host);
        zoom.set_scale(&mut host, Vec2::new(0.5, 2.0));

        zoom.set_min_scale(1.0);
        assert_eq!(zoom.scale(), Vec2::new(1.0, 2.0));
        assert!(zoom.on_layout_updated(&mut host));
        assert_eq!(host.content_scale(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn zoom_direction_from_delta() {
        assert_eq!(ZoomDirection::from_delta(120.0), Some(ZoomDirection::In));
        assert_eq!(ZoomDirection::from_delta(-1.0), Some(ZoomDirection::Out));
        assert_eq!(ZoomDirection::from_delta(0.0), None);
        assert_eq!(ZoomDirection::from_delta(f64::NAN), None);
    }
}
