//! Pointer state and eased logo orientation
//!
//! The logo spins slowly on its own and leans toward the pointer. Every
//! frame computes target angles from the idle clock and the pointer offset,
//! then eases the current angles toward them, so abrupt pointer jumps never
//! translate into abrupt rotation.

use crate::settings::HeroSettings;

/// Frame deltas are clamped so a backgrounded-then-resumed loop cannot jump
const MAX_FRAME_DT: f32 = 0.05;

const YAW_POINTER_GAIN: f32 = 0.28;
const YAW_IDLE_GAIN: f32 = 0.18;
const YAW_RANGE: f32 = 0.36;
const PITCH_BASE: f32 = -0.04;
const PITCH_POINTER_GAIN: f32 = 0.34;
const PITCH_MIN: f32 = -0.22;
const PITCH_MAX: f32 = 0.2;
const ROLL_BASE: f32 = -0.01;
const ROLL_POINTER_GAIN: f32 = 0.025;
const ROLL_RANGE: f32 = 0.08;
const ROLL_SMOOTHING_SCALE: f32 = 0.88;

/// Pointer position normalized to [-1, 1] on both axes, centered on the
/// surface. Zero when the pointer is away or tracking is disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f32,
    pub y: f32,
}

impl PointerOffset {
    /// Normalize a pixel position against the surface size
    pub fn from_surface(position: (f32, f32), size: (f32, f32)) -> Self {
        if size.0 <= 0.0 || size.1 <= 0.0 {
            return Self::default();
        }
        Self {
            x: ((position.0 / size.0) * 2.0 - 1.0).clamp(-1.0, 1.0),
            y: ((position.1 / size.1) * 2.0 - 1.0).clamp(-1.0, 1.0),
        }
    }

    /// Pointer left the surface or tracking is off
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Current logo rotation, advanced once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Orientation {
    idle_rotation: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl Orientation {
    /// Advance the idle clock and ease toward the pointer-derived targets.
    ///
    /// `dt` is in seconds and clamped to [0, 0.05].
    pub fn advance(&mut self, dt: f32, pointer: PointerOffset, settings: &HeroSettings) {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.idle_rotation += settings.idle_speed * dt;

        let pointer_yaw = pointer.x * settings.max_yaw * YAW_POINTER_GAIN;
        let target_yaw =
            (self.idle_rotation * YAW_IDLE_GAIN + pointer_yaw).clamp(-YAW_RANGE, YAW_RANGE);
        let target_pitch = (PITCH_BASE - pointer.y * settings.max_tilt * PITCH_POINTER_GAIN)
            .clamp(PITCH_MIN, PITCH_MAX);
        let target_roll =
            (ROLL_BASE - pointer.x * ROLL_POINTER_GAIN).clamp(-ROLL_RANGE, ROLL_RANGE);

        self.yaw += (target_yaw - self.yaw) * settings.smoothing;
        self.pitch += (target_pitch - self.pitch) * settings.smoothing;
        self.roll += (target_roll - self.roll) * settings.smoothing * ROLL_SMOOTHING_SCALE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{resolve_settings, SettingsInput};
    use approx::assert_relative_eq;

    fn settings() -> HeroSettings {
        resolve_settings(&SettingsInput::default())
    }

    #[test]
    fn pointer_normalizes_to_unit_range() {
        let center = PointerOffset::from_surface((400.0, 300.0), (800.0, 600.0));
        assert_relative_eq!(center.x, 0.0);
        assert_relative_eq!(center.y, 0.0);

        let corner = PointerOffset::from_surface((800.0, 0.0), (800.0, 600.0));
        assert_relative_eq!(corner.x, 1.0);
        assert_relative_eq!(corner.y, -1.0);

        let outside = PointerOffset::from_surface((1600.0, -50.0), (800.0, 600.0));
        assert_relative_eq!(outside.x, 1.0);
        assert_relative_eq!(outside.y, -1.0);
    }

    #[test]
    fn zero_sized_surface_yields_zero_offset() {
        let offset = PointerOffset::from_surface((10.0, 10.0), (0.0, 600.0));
        assert_eq!(offset, PointerOffset::default());
    }

    #[test]
    fn idle_rotation_drives_yaw_without_pointer() {
        let settings = settings();
        let mut orientation = Orientation::default();
        for _ in 0..120 {
            orientation.advance(1.0 / 60.0, PointerOffset::default(), &settings);
        }
        assert!(orientation.yaw > 0.0);
    }

    #[test]
    fn yaw_saturates_at_its_range() {
        let settings = settings();
        let mut orientation = Orientation::default();
        // Idle clock alone eventually pins the yaw target to its limit.
        for _ in 0..100_000 {
            orientation.advance(0.05, PointerOffset::default(), &settings);
        }
        assert!(orientation.yaw <= 0.36 + 1e-4);
    }

    #[test]
    fn pitch_stays_within_asymmetric_bounds() {
        let settings = settings();
        let mut up = Orientation::default();
        let mut down = Orientation::default();
        for _ in 0..2_000 {
            up.advance(1.0 / 60.0, PointerOffset { x: 0.0, y: -1.0 }, &settings);
            down.advance(1.0 / 60.0, PointerOffset { x: 0.0, y: 1.0 }, &settings);
        }
        assert!(up.pitch <= 0.2 + 1e-4);
        assert!(down.pitch >= -0.22 - 1e-4);
        assert!(up.pitch > down.pitch);
    }

    #[test]
    fn oversized_dt_is_clamped() {
        let settings = settings();
        let mut stepped = Orientation::default();
        let mut clamped = Orientation::default();
        stepped.advance(0.05, PointerOffset::default(), &settings);
        clamped.advance(10.0, PointerOffset::default(), &settings);
        assert_relative_eq!(stepped.yaw, clamped.yaw);
    }

    #[test]
    fn reduced_motion_settings_keep_orientation_near_rest() {
        let settings = resolve_settings(&SettingsInput {
            reduced_motion: true,
            ..Default::default()
        });
        let mut orientation = Orientation::default();
        for _ in 0..600 {
            orientation.advance(1.0 / 60.0, PointerOffset { x: 1.0, y: 1.0 }, &settings);
        }
        // No idle spin; only the tiny static base angles remain.
        assert_relative_eq!(orientation.yaw, 0.0, epsilon = 1e-5);
        assert!(orientation.pitch.abs() < 0.05);
        assert!(orientation.roll.abs() < 0.04);
    }
}
