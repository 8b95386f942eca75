//! Controls Configuration
//!
//! Centralizes the options a host passes at initialization: the requested
//! mode, the fail-safe fallback policy, the sensor-probe grace period, and
//! the VR drag damping factor. Serde derives let hosts load the options
//! from JSON alongside the rest of their configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::mode::RequestedMode;

/// Default grace period for the motion-sensor probe, milliseconds.
///
/// After camera acquisition succeeds, the probe waits this long for at
/// least one orientation event before declaring the sensor unavailable.
pub const DEFAULT_GRACE_PERIOD_MS: u64 = 1000;

/// Default damping factor applied to drag deltas in VR mode.
pub const DEFAULT_DRAG_DAMPING: f32 = 0.5;

/// Options recognized by `OrientationControls::initialize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Mode to resolve at initialization (`ar` or `vr`).
    pub mode: RequestedMode,
    /// Fall back to VR instead of failing when an AR capability is
    /// missing or denied.
    pub fail_safe: bool,
    /// How long the motion-sensor probe may wait for its first event,
    /// milliseconds.
    pub grace_period_ms: u64,
    /// Damping factor applied to pointer deltas in VR drag rotation.
    pub drag_damping: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            mode: RequestedMode::Ar,
            fail_safe: true,
            grace_period_ms: DEFAULT_GRACE_PERIOD_MS,
            drag_damping: DEFAULT_DRAG_DAMPING,
        }
    }
}

impl ControlsConfig {
    /// Config requesting AR mode with the default fail-safe fallback.
    pub fn ar() -> Self {
        Self {
            mode: RequestedMode::Ar,
            ..Default::default()
        }
    }

    /// Config requesting VR mode directly (no capability probing).
    pub fn vr() -> Self {
        Self {
            mode: RequestedMode::Vr,
            ..Default::default()
        }
    }

    /// Set the fail-safe fallback policy.
    pub fn with_fail_safe(mut self, fail_safe: bool) -> Self {
        self.fail_safe = fail_safe;
        self
    }

    /// Set the sensor-probe grace period.
    pub fn with_grace_period(mut self, period: Duration) -> Self {
        self.grace_period_ms = period.as_millis() as u64;
        self
    }

    /// Set the VR drag damping factor.
    pub fn with_drag_damping(mut self, damping: f32) -> Self {
        self.drag_damping = damping;
        self
    }

    /// The sensor-probe grace period as a `Duration`.
    #[inline]
    pub fn grace_period(&self) -> Duration {
        Duration::from_millis(self.grace_period_ms)
    }

    /// Load a config from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ControlsConfig::default();
        assert_eq!(config.mode, RequestedMode::Ar);
        assert!(config.fail_safe);
        assert_eq!(config.grace_period_ms, 1000);
        assert!((config.drag_damping - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_builders() {
        let config = ControlsConfig::vr()
            .with_fail_safe(false)
            .with_grace_period(Duration::from_millis(250))
            .with_drag_damping(1.0);
        assert_eq!(config.mode, RequestedMode::Vr);
        assert!(!config.fail_safe);
        assert_eq!(config.grace_period(), Duration::from_millis(250));
        assert_eq!(config.drag_damping, 1.0);
    }

    #[test]
    fn test_json_round_trip() {
        let config = ControlsConfig::ar().with_fail_safe(false);
        let json = serde_json::to_string(&config).unwrap();
        let back = ControlsConfig::from_json(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_json_partial_fills_defaults() {
        let config = ControlsConfig::from_json(r#"{"mode": "vr"}"#).unwrap();
        assert_eq!(config.mode, RequestedMode::Vr);
        assert_eq!(config.grace_period_ms, DEFAULT_GRACE_PERIOD_MS);
    }

    #[test]
    fn test_json_rejects_unknown_mode() {
        assert!(ControlsConfig::from_json(r#"{"mode": "xr"}"#).is_err());
    }
}
