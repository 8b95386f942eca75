//! AR Background Compositing
//!
//! Each tick in AR mode the live camera frame is copied into a fixed-size
//! off-screen buffer and handed to the scene's background slot, together
//! with the letterbox/pillarbox offset+repeat pair that fits the frame to
//! the viewport without distortion.

use glam::Vec2;
use image::RgbaImage;

use crate::host::{CameraStream, TrackSettings, ViewportSize};

/// Side length of the square off-screen background buffer, pixels.
pub const BACKGROUND_SIZE: u32 = 256;

/// One composited background frame, ready for the scene's background
/// slot. Moving it into the slot replaces (and drops) the previous frame.
#[derive(Debug, Clone)]
pub struct BackgroundFrame {
    /// Captured pixels, `BACKGROUND_SIZE` squared, RGBA.
    pub image: RgbaImage,
    /// Texture-space crop offset.
    pub offset: Vec2,
    /// Texture-space crop extent.
    pub repeat: Vec2,
}

/// Aspect-fit crop for a source aspect shown in a viewport aspect.
///
/// Returns `(offset, repeat)` in texture space. With
/// `aspect = image_aspect / canvas_aspect`, an aspect above 1 crops
/// horizontally (`offset_x = (1 - 1/aspect)/2`, `repeat_x = 1/aspect`)
/// and an aspect at or below 1 crops vertically
/// (`offset_y = (1 - aspect)/2`, `repeat_y = aspect`).
pub fn aspect_fit(image_aspect: f32, canvas_aspect: f32) -> (Vec2, Vec2) {
    let aspect = image_aspect / canvas_aspect;
    if aspect > 1.0 {
        (
            Vec2::new((1.0 - 1.0 / aspect) / 2.0, 0.0),
            Vec2::new(1.0 / aspect, 1.0),
        )
    } else {
        (
            Vec2::new(0.0, (1.0 - aspect) / 2.0),
            Vec2::new(1.0, aspect),
        )
    }
}

/// The aspect ratio the source frame presents in the current viewport
/// orientation: width/height in landscape viewports, height/width in
/// portrait.
pub fn frame_aspect(settings: TrackSettings, viewport: ViewportSize) -> f32 {
    if viewport.is_landscape() {
        settings.width as f32 / settings.height as f32
    } else {
        settings.height as f32 / settings.width as f32
    }
}

/// Capture and aspect-fit the current camera frame.
///
/// Returns `None` while the stream has not buffered enough data to
/// produce a frame.
pub fn composite(
    stream: &mut impl CameraStream,
    viewport: ViewportSize,
) -> Option<BackgroundFrame> {
    let image = stream.capture_frame(BACKGROUND_SIZE, BACKGROUND_SIZE)?;
    let (offset, repeat) = aspect_fit(frame_aspect(stream.settings(), viewport), viewport.aspect());
    Some(BackgroundFrame {
        image,
        offset,
        repeat,
    })
}
