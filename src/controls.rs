//! Orientation Controls
//!
//! The public entry point. `OrientationControls` owns the camera source
//! and the per-mode connection resources; the host pushes sensor and
//! pointer events in and calls [`OrientationControls::update`] once per
//! animation frame. In AR mode each tick re-derives the camera quaternion
//! from the latest sensor reading and refreshes the scene background from
//! the capture stream; in VR mode the drag handlers mutate the rotation
//! directly and the tick does nothing extra.

use glam::Vec2;
use log::{debug, info, warn};

use crate::background;
use crate::config::ControlsConfig;
use crate::drag::DragRotate;
use crate::error::{Capability, InitError};
use crate::host::{
    BackgroundTarget, CameraSource, CameraStream, MotionProbe, RotationTarget, ViewportSize,
};
use crate::mode::{self, Capabilities, Mode};
use crate::orientation::{DeviceOrientationSample, compute_rotation};

/// Per-mode wiring and resources.
///
/// The AR variant owns the capture stream, so stopping it in
/// [`OrientationControls::disconnect`] is the single release point on
/// every exit path.
enum Connection<S> {
    Ar { stream: S },
    Vr { drag: DragRotate },
}

impl<S> Connection<S> {
    fn mode(&self) -> Mode {
        match self {
            Self::Ar { .. } => Mode::Ar,
            Self::Vr { .. } => Mode::Vr,
        }
    }
}

/// Orientation-tracking camera controls with an AR mode (device sensor +
/// camera passthrough) and a VR fallback (drag to rotate).
///
/// Obtained only through [`OrientationControls::initialize`], which probes
/// capabilities, resolves the active mode, and connects.
pub struct OrientationControls<C: CameraSource> {
    /// Calibration offset in radians, added to the alpha axis only.
    pub alpha_offset: f32,

    camera: C,
    config: ControlsConfig,
    mode: Mode,
    capabilities: Capabilities,
    connection: Option<Connection<C::Stream>>,
    device_orientation: Option<DeviceOrientationSample>,
    screen_orientation: i32,
}

impl<C: CameraSource> OrientationControls<C> {
    /// Probe capabilities, resolve the active mode per the table on
    /// [`mode::resolve_mode`], and connect.
    ///
    /// The motion probe is consumed by initialization; per-frame sensor
    /// readings are pushed afterwards via
    /// [`Self::on_device_orientation`].
    pub async fn initialize(
        mut camera: C,
        mut probe: impl MotionProbe,
        config: ControlsConfig,
    ) -> Result<Self, InitError> {
        let resolution = mode::probe_and_resolve(&mut camera, &mut probe, &config).await?;

        let connection = match resolution.mode {
            Mode::Ar => Connection::Ar {
                stream: resolution
                    .stream
                    .ok_or(InitError::CapabilityUnavailable(Capability::Camera))?,
            },
            Mode::Vr => Connection::Vr {
                drag: DragRotate::new(config.drag_damping),
            },
        };
        debug!("connected: {:?}", resolution.mode);

        Ok(Self {
            alpha_offset: 0.0,
            camera,
            config,
            mode: resolution.mode,
            capabilities: resolution.capabilities,
            connection: Some(connection),
            device_orientation: None,
            screen_orientation: 0,
        })
    }

    /// The currently active mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether event wiring and mode resources are currently active.
    #[inline]
    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Capabilities confirmed by the initialization probe.
    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Whether a VR drag is currently active.
    pub fn is_dragging(&self) -> bool {
        matches!(
            &self.connection,
            Some(Connection::Vr { drag }) if drag.is_dragging()
        )
    }

    /// Wire the current mode's resources. Idempotent: connecting while
    /// connected does nothing.
    ///
    /// Entering AR re-acquires the capture stream; a failed acquisition
    /// leaves the controls disconnected.
    pub async fn connect(&mut self) {
        if self.connection.is_some() {
            return;
        }
        match self.mode {
            Mode::Vr => {
                self.connection = Some(Connection::Vr {
                    drag: DragRotate::new(self.config.drag_damping),
                });
                debug!("connected: Vr");
            }
            Mode::Ar => match self.camera.acquire().await {
                Ok(stream) => {
                    self.connection = Some(Connection::Ar { stream });
                    debug!("connected: Ar");
                }
                Err(err) => warn!("connect: camera re-acquisition failed: {err}"),
            },
        }
    }

    /// Tear down the current mode's resources. Idempotent; stops every
    /// track of an AR stream exactly once and drops the pending sensor
    /// reading.
    pub fn disconnect(&mut self) {
        match self.connection.take() {
            Some(Connection::Ar { mut stream }) => {
                stream.stop();
                debug!("disconnected: Ar");
            }
            Some(Connection::Vr { .. }) => debug!("disconnected: Vr"),
            None => {}
        }
        self.device_orientation = None;
    }

    /// Switch modes at runtime.
    ///
    /// No-op when `target` is already active, or when `target` is AR but
    /// the AR capabilities were never confirmed at initialization.
    /// Otherwise the current connection is torn down and the new mode is
    /// wired, re-acquiring the camera stream when entering AR. Safe to
    /// call repeatedly.
    ///
    /// A failed AR re-acquisition restores the previous mode's connection
    /// instead of leaving the controls half-connected.
    pub async fn change_mode(&mut self, target: Mode) {
        if target == self.mode {
            debug!("change_mode: already {target:?}");
            return;
        }
        if target == Mode::Ar && !self.capabilities.ar_available() {
            warn!("change_mode: ar capabilities never confirmed, ignoring");
            return;
        }

        let previous = self.mode;
        let was_connected = self.connection.is_some();
        self.disconnect();
        self.mode = target;

        if was_connected {
            self.connect().await;
            if self.connection.is_none() {
                self.mode = previous;
                self.connect().await;
            }
        }
        info!("mode changed: {previous:?} -> {:?}", self.mode);
    }

    /// Push a device sensor reading. Latest-value semantics: each reading
    /// overwrites the previous one and is consumed by the next `update`.
    /// Ignored unless connected in AR mode.
    pub fn on_device_orientation(&mut self, sample: DeviceOrientationSample) {
        if matches!(&self.connection, Some(Connection::Ar { .. })) {
            self.device_orientation = Some(sample);
        }
    }

    /// Push the current screen rotation relative to the device's natural
    /// orientation, in degrees. Retained across disconnects.
    pub fn on_screen_orientation(&mut self, angle_deg: i32) {
        self.screen_orientation = angle_deg;
    }

    /// Pointer/touch press. Records the drag baseline; VR mode only.
    pub fn pointer_pressed(&mut self, position: Vec2, object: &impl RotationTarget) {
        if let Some(Connection::Vr { drag }) = &mut self.connection {
            drag.press(position, object);
        }
    }

    /// Pointer/touch move. Rotates the camera while a press is active;
    /// VR mode only.
    pub fn pointer_moved(
        &mut self,
        position: Vec2,
        viewport: ViewportSize,
        object: &mut impl RotationTarget,
    ) {
        if let Some(Connection::Vr { drag }) = &mut self.connection {
            drag.move_to(position, viewport, object);
        }
    }

    /// Pointer/touch release; clears the drag baseline.
    pub fn pointer_released(&mut self) {
        if let Some(Connection::Vr { drag }) = &mut self.connection {
            drag.release();
        }
    }

    /// Per-frame tick. No-op when disconnected.
    ///
    /// AR: consume the latest sensor reading into the object's
    /// orientation quaternion, then refresh the scene background from the
    /// capture stream (skipped while the stream has no frame ready).
    /// VR: nothing; the drag handlers already mutated the rotation.
    pub fn update(
        &mut self,
        object: &mut impl RotationTarget,
        scene: &mut impl BackgroundTarget,
        viewport: ViewportSize,
    ) {
        let Some(connection) = &mut self.connection else {
            return;
        };
        match connection {
            Connection::Ar { stream } => {
                if let Some(sample) = self.device_orientation.take() {
                    object.set_orientation(compute_rotation(
                        sample,
                        self.screen_orientation as f32,
                        self.alpha_offset,
                    ));
                }
                if let Some(frame) = background::composite(stream, viewport) {
                    scene.set_background(frame);
                }
            }
            Connection::Vr { .. } => {}
        }
    }

    /// The mode the current connection is wired for, if connected.
    pub fn connected_mode(&self) -> Option<Mode> {
        self.connection.as_ref().map(Connection::mode)
    }
}
