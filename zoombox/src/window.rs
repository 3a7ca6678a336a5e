// Copyright 2025 the ZoomBox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tracing::debug;
use zoombox_timing::{Fire, OneShot};

/// Window primitives used to drag the window by its content.
pub trait WindowHost {
    /// Returns `true` while the primary pointer button is held down.
    fn primary_button_pressed(&self) -> bool;

    /// Hands the current press over to the window manager's move loop.
    fn begin_drag_move(&mut self);
}

/// Deferred window drag started by a press on the content.
///
/// The drag is delayed so that interactive children (buttons and the like)
/// get to handle the press first. When the delay has elapsed the primary
/// button must still be down, otherwise the drag is dropped silently.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct WindowDrag {
    timer: OneShot,
}

impl WindowDrag {
    pub(crate) fn arm(&mut self, now: u64, delay_ms: u64) {
        self.timer.arm(now, delay_ms);
    }

    pub(crate) fn cancel(&mut self) {
        self.timer.cancel();
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.timer.is_armed()
    }

    pub(crate) fn poll<W: WindowHost + ?Sized>(&mut self, now: u64, window: &mut W) -> Fire {
        let fire = self.timer.poll(now, || window.primary_button_pressed());
        match fire {
            Fire::Fired => {
                debug!("starting window drag");
                window.begin_drag_move();
            }
            Fire::Skipped => debug!("window drag skipped, button released"),
            Fire::Idle | Fire::Pending => {}
        }
        fire
    }
}
