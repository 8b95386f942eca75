//! Host Platform Contracts
//!
//! The controls are host-agnostic: motion sensing, camera capture, the
//! viewport, and the scene object are all consumed through the traits in
//! this module. A browser host backs them with device orientation events
//! and `getUserMedia`; a test host backs them with fakes. Input events are
//! pushed into the controls by the host rather than the library owning an
//! event loop.

use std::future::Future;

use glam::{Quat, Vec3};
use image::RgbaImage;

use crate::error::CaptureError;

/// Pixel dimensions of the rendering viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    /// Create a viewport size from pixel dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height.
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// True when the viewport is wider than it is tall.
    #[inline]
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

/// Reported capture resolution of a camera stream's video track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackSettings {
    pub width: u32,
    pub height: u32,
}

/// The scene object whose rotation the controls drive.
///
/// Euler rotations use the Y-X-Z application order; hosts whose scene
/// graph defaults to another order must reorder the rotation on this seam
/// (the classic `rotation.reorder('YXZ')`).
pub trait RotationTarget {
    /// Current (x, y, z) Euler rotation in radians, YXZ order.
    fn rotation(&self) -> Vec3;

    /// Replace the Euler rotation (radians, YXZ order).
    fn set_rotation(&mut self, rotation: Vec3);

    /// Replace the orientation quaternion outright.
    fn set_orientation(&mut self, orientation: Quat);
}

/// The scene's background-texture slot.
///
/// The frame is taken by value: when the host overwrites its slot, the
/// previous frame is dropped, which is the dispose-on-replace contract.
pub trait BackgroundTarget {
    fn set_background(&mut self, frame: crate::background::BackgroundFrame);
}

/// Motion-sensor availability probe.
///
/// Sensor availability can only be inferred empirically: the future
/// resolves once at least one orientation event has been observed. A
/// sensor that never fires simply never resolves; the mode selector
/// bounds the wait with a grace-period timeout.
pub trait MotionProbe {
    fn first_event(&mut self) -> impl Future<Output = ()>;
}

/// A live camera capture stream. Owned exclusively by the controls while
/// AR mode is connected.
pub trait CameraStream {
    /// Resolution of the underlying video track.
    fn settings(&self) -> TrackSettings;

    /// Copy the current video frame into a `width` x `height` RGBA buffer.
    ///
    /// Returns `None` while the stream has not buffered enough data to
    /// produce a frame.
    fn capture_frame(&mut self, width: u32, height: u32) -> Option<RgbaImage>;

    /// Stop every track of the stream, releasing the capture device.
    fn stop(&mut self);
}

/// Source of camera capture streams (the environment-facing camera
/// request). Acquisition is asynchronous and may be denied.
pub trait CameraSource {
    type Stream: CameraStream;

    /// Request a new capture stream from the host.
    fn acquire(&mut self) -> impl Future<Output = Result<Self::Stream, CaptureError>>;
}
