//! Quality presets and environment-derived render settings
//!
//! A preset picks the baseline numbers; the environment (reduced-motion
//! preference, coarse pointers, very dense displays) then tones them down.
//! Resolution is a pure function so every combination is testable.

use serde::{Deserialize, Serialize};

/// Baseline quality preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Balanced,
    Max,
    Light,
}

impl QualityTier {
    /// Parse a preset name, `None` for unknown names
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "balanced" => Some(Self::Balanced),
            "max" => Some(Self::Max),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

/// Environment facts the settings resolution reacts to
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SettingsInput {
    pub tier: QualityTier,
    /// User prefers reduced motion
    pub reduced_motion: bool,
    /// Primary pointer is coarse (touch)
    pub touch: bool,
    /// Device pixel ratio reported by the display
    pub device_pixel_ratio: f32,
}

impl Default for SettingsInput {
    fn default() -> Self {
        Self {
            tier: QualityTier::Balanced,
            reduced_motion: false,
            touch: false,
            device_pixel_ratio: 1.0,
        }
    }
}

/// Fully resolved render and animation settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeroSettings {
    /// Cap applied to the device pixel ratio when sizing the surface
    pub dpr_cap: f32,
    /// Exponential smoothing factor for orientation easing
    pub smoothing: f32,
    /// Idle rotation speed in radians per second
    pub idle_speed: f32,
    /// Maximum pointer-driven pitch in radians
    pub max_tilt: f32,
    /// Maximum pointer-driven yaw in radians
    pub max_yaw: f32,
    /// Pause the animation when the canvas is mostly out of view
    pub pause_out_of_view: bool,
    /// Visible-fraction threshold below which the canvas counts as out of view
    pub pause_threshold: f32,
    /// Debounce window for resize handling, in milliseconds
    pub resize_debounce_ms: u64,
    pub antialias: bool,
    /// Whether pointer movement steers the logo at all
    pub pointer_tracking: bool,
}

impl HeroSettings {
    fn preset(tier: QualityTier) -> Self {
        match tier {
            QualityTier::Balanced => Self {
                dpr_cap: 1.75,
                smoothing: 0.085,
                idle_speed: 0.5,
                max_tilt: 0.22,
                max_yaw: 0.52,
                pause_out_of_view: true,
                pause_threshold: 0.06,
                resize_debounce_ms: 120,
                antialias: true,
                pointer_tracking: true,
            },
            QualityTier::Max => Self {
                dpr_cap: 2.25,
                smoothing: 0.1,
                idle_speed: 0.5,
                max_tilt: 0.3,
                max_yaw: 0.65,
                pause_out_of_view: true,
                pause_threshold: 0.05,
                resize_debounce_ms: 100,
                antialias: true,
                pointer_tracking: true,
            },
            QualityTier::Light => Self {
                dpr_cap: 1.25,
                smoothing: 0.075,
                idle_speed: 0.32,
                max_tilt: 0.18,
                max_yaw: 0.4,
                pause_out_of_view: true,
                pause_threshold: 0.08,
                resize_debounce_ms: 140,
                antialias: false,
                pointer_tracking: true,
            },
        }
    }

    /// Effective pixel ratio for a display
    pub fn effective_dpr(&self, device_pixel_ratio: f32) -> f32 {
        device_pixel_ratio.min(self.dpr_cap).max(1.0)
    }
}

/// Resolve a preset against the environment.
///
/// Reduced motion wins over everything: no idle spin, no pointer steering,
/// slower easing. Touch devices get a lower pixel budget and a calmer idle
/// spin since there is no hover pointer to react to.
pub fn resolve_settings(input: &SettingsInput) -> HeroSettings {
    let mut settings = HeroSettings::preset(input.tier);

    if input.reduced_motion {
        settings.smoothing = 0.07;
        settings.idle_speed = 0.0;
        settings.max_tilt = 0.0;
        settings.max_yaw = 0.0;
    }

    if input.touch {
        settings.dpr_cap = settings.dpr_cap.min(1.35);
        settings.idle_speed *= 0.72;
    }

    if input.device_pixel_ratio > 2.4 {
        settings.dpr_cap = settings.dpr_cap.min(1.5);
    }

    settings.pointer_tracking = !input.touch && !input.reduced_motion;

    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_known_tiers() {
        assert_eq!(QualityTier::parse("balanced"), Some(QualityTier::Balanced));
        assert_eq!(QualityTier::parse("max"), Some(QualityTier::Max));
        assert_eq!(QualityTier::parse("light"), Some(QualityTier::Light));
        assert_eq!(QualityTier::parse("ultra"), None);
    }

    #[test]
    fn balanced_preset_defaults() {
        let settings = resolve_settings(&SettingsInput::default());
        assert_relative_eq!(settings.dpr_cap, 1.75);
        assert_relative_eq!(settings.smoothing, 0.085);
        assert!(settings.antialias);
        assert!(settings.pointer_tracking);
    }

    #[test]
    fn reduced_motion_freezes_all_motion() {
        let settings = resolve_settings(&SettingsInput {
            reduced_motion: true,
            ..Default::default()
        });
        assert_relative_eq!(settings.idle_speed, 0.0);
        assert_relative_eq!(settings.max_tilt, 0.0);
        assert_relative_eq!(settings.max_yaw, 0.0);
        assert_relative_eq!(settings.smoothing, 0.07);
        assert!(!settings.pointer_tracking);
    }

    #[test]
    fn touch_lowers_pixel_budget_and_idle_speed() {
        let settings = resolve_settings(&SettingsInput {
            tier: QualityTier::Max,
            touch: true,
            ..Default::default()
        });
        assert_relative_eq!(settings.dpr_cap, 1.35);
        assert_relative_eq!(settings.idle_speed, 0.5 * 0.72);
        assert!(!settings.pointer_tracking);
    }

    #[test]
    fn dense_displays_are_capped() {
        let settings = resolve_settings(&SettingsInput {
            tier: QualityTier::Max,
            device_pixel_ratio: 3.0,
            ..Default::default()
        });
        assert_relative_eq!(settings.dpr_cap, 1.5);
        assert_relative_eq!(settings.effective_dpr(3.0), 1.5);
    }

    #[test]
    fn light_preset_skips_antialiasing() {
        let settings = resolve_settings(&SettingsInput {
            tier: QualityTier::Light,
            ..Default::default()
        });
        assert!(!settings.antialias);
        assert_relative_eq!(settings.dpr_cap, 1.25);
    }

    #[test]
    fn effective_dpr_never_drops_below_one() {
        let settings = resolve_settings(&SettingsInput::default());
        assert_relative_eq!(settings.effective_dpr(0.5), 1.0);
    }
}
