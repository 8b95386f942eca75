//! Gyrocam Library
//!
//! Orientation-tracking camera controls for a 3D scene. At initialization
//! the controls resolve either an "augmented reality" mode (device sensor
//! orientation drives the camera, the live camera feed becomes the scene
//! background) or a "virtual reality" fallback (pointer/touch drag
//! rotation), honoring the caller's fail-safe policy. Each animation
//! frame the host calls `update` to map the latest sensor reading into
//! the scene object's rotation.
//!
//! The crate is host-agnostic: platform capabilities (motion sensor,
//! camera capture, viewport, scene object) are consumed through the
//! traits in [`host`], and the host pushes input events in rather than
//! the library owning an event loop.
//!
//! # Modules
//!
//! - [`mode`] - mode-selection state machine and capability probing
//! - [`orientation`] - sensor-angles-to-quaternion transform
//! - [`drag`] - VR drag-to-rotate input
//! - [`background`] - AR camera-feed background compositing
//! - [`controls`] - the [`OrientationControls`] entry point
//! - [`host`] - host platform contracts
//! - [`config`] - controls configuration
//! - [`error`] - error taxonomy
//!
//! # Example
//!
//! ```rust,ignore
//! use gyrocam::{ControlsConfig, OrientationControls};
//!
//! let config = ControlsConfig::ar().with_fail_safe(true);
//! let mut controls = OrientationControls::initialize(camera, probe, config).await?;
//!
//! // Host event handlers:
//! controls.on_screen_orientation(window_orientation_degrees);
//! controls.on_device_orientation(sample);
//!
//! // Each animation frame:
//! controls.update(&mut scene_object, &mut scene, viewport);
//! ```

pub mod background;
pub mod config;
pub mod controls;
pub mod drag;
pub mod error;
pub mod host;
pub mod mode;
pub mod orientation;

// Re-export the public surface at crate level for convenience.
pub use background::{BACKGROUND_SIZE, BackgroundFrame, aspect_fit};
pub use config::{ControlsConfig, DEFAULT_DRAG_DAMPING, DEFAULT_GRACE_PERIOD_MS};
pub use controls::OrientationControls;
pub use drag::{DragRotate, DragState};
pub use error::{Capability, CaptureError, InitError};
pub use host::{
    BackgroundTarget, CameraSource, CameraStream, MotionProbe, RotationTarget, TrackSettings,
    ViewportSize,
};
pub use mode::{Capabilities, Mode, RequestedMode, resolve_mode};
pub use orientation::{DeviceOrientationSample, compute_rotation};
