//! Error Types
//!
//! The taxonomy of failures surfaced during capability probing and mode
//! resolution. Initialization is the only fallible boundary: once the
//! controls exist, disallowed mode changes are silent no-ops rather than
//! errors, and resource teardown is infallible.

use thiserror::Error;

/// A host capability the AR mode depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Device motion sensor (orientation events).
    MotionSensor,
    /// Environment-facing camera capture.
    Camera,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MotionSensor => write!(f, "motion sensor"),
            Self::Camera => write!(f, "camera"),
        }
    }
}

/// Errors returned by `OrientationControls::initialize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InitError {
    /// A capability AR needs was probed and found missing, and the caller
    /// did not request fail-safe fallback.
    #[error("required capability unavailable: {0}")]
    CapabilityUnavailable(Capability),
    /// The requested mode was neither `ar` nor `vr`.
    #[error("invalid mode requested")]
    InvalidMode,
    /// The host refused the camera capture request outright.
    #[error("camera acquisition denied")]
    AcquisitionDenied,
}

/// Errors a [`CameraSource`](crate::host::CameraSource) reports when a
/// stream request cannot be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CaptureError {
    /// No usable camera exists on this host.
    #[error("no camera available")]
    Unavailable,
    /// The user or platform denied the capture request.
    #[error("camera permission denied")]
    Denied,
}
