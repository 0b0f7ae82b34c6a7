//! Hero session lifecycle and animation gating
//!
//! The session tracks everything about the interactive logo that is not the
//! GPU: lifecycle phase, pointer state, visibility-driven pause/resume, the
//! resize debounce, and teardown. It owns no window or device, so the whole
//! state machine is exercised by plain unit tests.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::orientation::{Orientation, PointerOffset};
use crate::settings::HeroSettings;

/// Lifecycle phase of the hero logo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, geometry build not started
    Uninitialized,
    /// Geometry build in flight, static logo still showing
    Loading,
    /// 3D logo live
    Ready,
    /// 3D was not possible; the static logo stays permanently
    FallbackOnly,
}

/// State for one interactive logo instance.
///
/// Animation runs only while the phase is [`Phase::Ready`], the page is
/// visible, and enough of the surface is in view. Teardown is idempotent and
/// terminal: every mutation after it is a no-op.
#[derive(Debug)]
pub struct HeroSession {
    settings: HeroSettings,
    phase: Phase,
    pointer: PointerOffset,
    orientation: Orientation,
    page_visible: bool,
    view_fraction: f32,
    resize_deadline: Option<Instant>,
    torn_down: bool,
}

impl HeroSession {
    pub fn new(settings: HeroSettings) -> Self {
        Self {
            settings,
            phase: Phase::Uninitialized,
            pointer: PointerOffset::default(),
            orientation: Orientation::default(),
            page_visible: true,
            view_fraction: 1.0,
            resize_deadline: None,
            torn_down: false,
        }
    }

    pub fn settings(&self) -> &HeroSettings {
        &self.settings
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Geometry build started; the static logo remains until it lands
    pub fn begin_loading(&mut self) {
        if self.torn_down || self.phase != Phase::Uninitialized {
            return;
        }
        self.phase = Phase::Loading;
        debug!("hero session loading");
    }

    /// Geometry landed and the renderer is live
    pub fn mark_ready(&mut self) {
        if self.torn_down || self.phase != Phase::Loading {
            return;
        }
        self.phase = Phase::Ready;
        info!("hero session ready");
    }

    /// 3D is off the table, permanently show the static logo.
    ///
    /// Valid from any phase: capability probing fails before loading starts,
    /// geometry builds fail during it.
    pub fn mark_fallback(&mut self) {
        if self.torn_down || self.phase == Phase::FallbackOnly {
            return;
        }
        self.phase = Phase::FallbackOnly;
        info!("hero session falling back to static logo");
    }

    pub fn set_page_visible(&mut self, visible: bool) {
        if self.torn_down {
            return;
        }
        self.page_visible = visible;
    }

    /// Fraction of the surface currently in view, in [0, 1]
    pub fn set_view_fraction(&mut self, fraction: f32) {
        if self.torn_down {
            return;
        }
        self.view_fraction = fraction.clamp(0.0, 1.0);
    }

    /// Whether frames should advance right now
    pub fn is_animating(&self) -> bool {
        if self.torn_down || self.phase != Phase::Ready || !self.page_visible {
            return false;
        }
        if self.settings.pause_out_of_view && self.view_fraction <= self.settings.pause_threshold {
            return false;
        }
        true
    }

    /// Pointer moved over the surface (pixel position against surface size)
    pub fn pointer_moved(&mut self, position: (f32, f32), surface_size: (f32, f32)) {
        if self.torn_down || !self.settings.pointer_tracking {
            return;
        }
        self.pointer = PointerOffset::from_surface(position, surface_size);
    }

    /// Pointer left the surface; the logo eases back toward rest
    pub fn pointer_left(&mut self) {
        self.pointer.reset();
    }

    /// Record a resize; the actual surface reconfigure happens once the
    /// debounce window passes without further resizes.
    pub fn schedule_resize(&mut self, now: Instant) {
        if self.torn_down {
            return;
        }
        self.resize_deadline = Some(now + Duration::from_millis(self.settings.resize_debounce_ms));
    }

    /// Consume the pending resize if its debounce window has elapsed
    pub fn take_due_resize(&mut self, now: Instant) -> bool {
        match self.resize_deadline {
            Some(deadline) if now >= deadline => {
                self.resize_deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Advance one animation frame; no-op unless animating
    pub fn tick(&mut self, dt: f32) {
        if !self.is_animating() {
            return;
        }
        self.orientation.advance(dt, self.pointer, &self.settings);
    }

    /// Tear the session down. Idempotent and terminal.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.pointer.reset();
        self.resize_deadline = None;
        debug!("hero session torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
