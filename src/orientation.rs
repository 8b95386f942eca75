//! Device Orientation Transform
//!
//! Converts raw device sensor angles into a camera-facing rotation
//! quaternion, compensating for screen rotation and for the device
//! mounting convention. Device sensors report Euler angles in a Z-X-Y
//! convention; the camera consumes a Y-X-Z ordering, and the axis remap in
//! [`compute_rotation`] is what aligns the two.

use glam::{EulerRot, Quat, Vec3};

/// Correction for the camera looking out the back of the device, not the
/// top: a -90 degree rotation about the X axis.
pub const DEVICE_FACING_CORRECTION: Quat = Quat::from_xyzw(
    -std::f32::consts::FRAC_1_SQRT_2,
    0.0,
    0.0,
    std::f32::consts::FRAC_1_SQRT_2,
);

/// One motion-sensor reading, in degrees.
///
/// Hosts may report partial data; an absent axis is treated as zero.
/// Readings carry latest-value semantics: each new sample overwrites the
/// previous one and is consumed at update time, with no queueing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DeviceOrientationSample {
    /// Rotation about the device Z axis (compass heading), degrees.
    pub alpha: Option<f32>,
    /// Rotation about the device X axis (front-back tilt), degrees.
    pub beta: Option<f32>,
    /// Rotation about the device Y axis (left-right tilt), degrees.
    pub gamma: Option<f32>,
}

impl DeviceOrientationSample {
    /// Create a sample with all three axes present.
    pub fn new(alpha: f32, beta: f32, gamma: f32) -> Self {
        Self {
            alpha: Some(alpha),
            beta: Some(beta),
            gamma: Some(gamma),
        }
    }
}

/// Compute the camera-facing rotation for one sensor reading.
///
/// `screen_angle_deg` is the screen rotation relative to the device's
/// natural orientation; `alpha_offset_rad` is the caller's calibration
/// offset, added to the alpha axis only.
///
/// Every composed factor is unit-norm, so the result is unit-norm with no
/// renormalization step.
///
/// # Arguments
/// * `sample` - Latest sensor reading in degrees (absent axes read as 0)
/// * `screen_angle_deg` - Screen orientation angle in degrees
/// * `alpha_offset_rad` - Calibration offset in radians, alpha axis only
pub fn compute_rotation(
    sample: DeviceOrientationSample,
    screen_angle_deg: f32,
    alpha_offset_rad: f32,
) -> Quat {
    let alpha = sample.alpha.unwrap_or(0.0).to_radians() + alpha_offset_rad;
    let beta = sample.beta.unwrap_or(0.0).to_radians();
    let gamma = sample.gamma.unwrap_or(0.0).to_radians();
    let screen = screen_angle_deg.to_radians();

    // ZXY for the device, but YXZ for us.
    let device = Quat::from_euler(EulerRot::YXZ, alpha, beta, -gamma);

    // Camera looks out the back of the device, then compensate for
    // portrait/landscape screen rotation.
    device * DEVICE_FACING_CORRECTION * Quat::from_axis_angle(Vec3::Z, -screen)
}
