//! Mode Selection
//!
//! The state machine that fixes the active mode at initialization. An AR
//! request probes two host capabilities - camera acquisition, then a
//! grace period for the motion sensor to deliver its first event - and
//! resolves AR, VR fallback, or failure according to the caller's
//! fail-safe policy. A VR request resolves immediately with no probing.
//!
//! The decision itself is the pure [`resolve_mode`] table; the async
//! probing around it lives in this module so the timeout is an explicit
//! combinator rather than an ad hoc timer.

use std::str::FromStr;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;

use crate::config::ControlsConfig;
use crate::error::{Capability, CaptureError, InitError};
use crate::host::{CameraSource, CameraStream, MotionProbe};

/// The mode a caller requests at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestedMode {
    Ar,
    Vr,
}

impl FromStr for RequestedMode {
    type Err = InitError;

    fn from_str(s: &str) -> Result<Self, InitError> {
        match s {
            "ar" => Ok(Self::Ar),
            "vr" => Ok(Self::Vr),
            _ => Err(InitError::InvalidMode),
        }
    }
}

/// The mode actually active after a successful initialization.
///
/// There is no unset variant: controls can only be obtained from a
/// successful `initialize`, so exactly one of AR/VR is always active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Camera passthrough driven by live device sensor orientation.
    Ar,
    /// Fallback driven by pointer/touch drag rotation.
    Vr,
}

/// Which capabilities the initialization probe confirmed.
///
/// Fixed at initialization time; gates later `change_mode(Mode::Ar)`
/// calls. A capability granted after fallback has already happened does
/// not re-enter AR on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// At least one device orientation event was observed.
    pub motion_sensor: bool,
    /// A camera stream was successfully acquired.
    pub camera: bool,
}

impl Capabilities {
    /// True when everything AR needs was confirmed.
    #[inline]
    pub fn ar_available(&self) -> bool {
        self.motion_sensor && self.camera
    }
}

/// The pure mode-resolution table.
///
/// | requested | capabilities      | fail_safe | result                     |
/// |-----------|-------------------|-----------|----------------------------|
/// | vr        | any               | any       | VR                         |
/// | ar        | sensor and camera | any       | AR                         |
/// | ar        | either missing    | true      | VR                         |
/// | ar        | either missing    | false     | CapabilityUnavailable(...) |
pub fn resolve_mode(
    requested: RequestedMode,
    caps: Capabilities,
    fail_safe: bool,
) -> Result<Mode, InitError> {
    match requested {
        RequestedMode::Vr => Ok(Mode::Vr),
        RequestedMode::Ar if caps.ar_available() => Ok(Mode::Ar),
        RequestedMode::Ar if fail_safe => Ok(Mode::Vr),
        RequestedMode::Ar if !caps.camera => {
            Err(InitError::CapabilityUnavailable(Capability::Camera))
        }
        RequestedMode::Ar => Err(InitError::CapabilityUnavailable(Capability::MotionSensor)),
    }
}

/// Everything the capability probe learned, plus any stream it acquired.
///
/// Invariant: `stream` is `Some` exactly when `mode` is [`Mode::Ar`].
pub(crate) struct Resolution<S> {
    pub mode: Mode,
    pub capabilities: Capabilities,
    pub stream: Option<S>,
}

/// Probe host capabilities and resolve the active mode.
///
/// AR requests acquire the camera first, then give the motion sensor the
/// configured grace period to deliver its first event. A stream acquired
/// on a path that ends in VR or failure is stopped before returning.
pub(crate) async fn probe_and_resolve<C, M>(
    camera: &mut C,
    probe: &mut M,
    config: &ControlsConfig,
) -> Result<Resolution<C::Stream>, InitError>
where
    C: CameraSource,
    M: MotionProbe,
{
    if config.mode == RequestedMode::Vr {
        info!("mode resolved: vr (requested, no probing)");
        return Ok(Resolution {
            mode: Mode::Vr,
            capabilities: Capabilities::default(),
            stream: None,
        });
    }

    let mut caps = Capabilities::default();
    let mut stream = None;

    match camera.acquire().await {
        Ok(acquired) => {
            caps.camera = true;
            stream = Some(acquired);
        }
        Err(CaptureError::Denied) if !config.fail_safe => {
            return Err(InitError::AcquisitionDenied);
        }
        Err(err) => warn!("camera capability missing: {err}"),
    }

    // Sensor availability is only observable empirically; give it one
    // grace period after camera acquisition to fire once.
    if caps.camera {
        match timeout(config.grace_period(), probe.first_event()).await {
            Ok(()) => caps.motion_sensor = true,
            Err(_) => warn!(
                "no device orientation event within {:?}",
                config.grace_period()
            ),
        }
    }

    let mode = match resolve_mode(config.mode, caps, config.fail_safe) {
        Ok(mode) => mode,
        Err(err) => {
            if let Some(mut acquired) = stream.take() {
                acquired.stop();
            }
            return Err(err);
        }
    };

    if mode == Mode::Vr {
        // Release a partially-acquired stream before falling back.
        if let Some(mut acquired) = stream.take() {
            acquired.stop();
        }
        info!("mode resolved: vr (fallback, {caps:?})");
    } else {
        info!("mode resolved: ar");
    }

    Ok(Resolution {
        mode,
        capabilities: caps,
        stream,
    })
}
