//! Follow-camera math, kept free of macroquad types so the clamping rules
//! are testable headlessly. The render pass applies the resulting origin
//! and zoom as a plain scale-and-translate.

use core::Vec2;

pub const CAMERA_ZOOM: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraView {
    /// World-space coordinate that maps to the screen's top-left corner.
    pub origin: Vec2,
    pub zoom: f32,
}

impl CameraView {
    /// Centers on `focus` and clamps to the level so the view never shows
    /// past an edge. Levels smaller than the view pin to the top-left.
    pub fn follow(focus: Vec2, screen: Vec2, world: Vec2, zoom: f32) -> Self {
        let view_w = screen.x / zoom;
        let view_h = screen.y / zoom;
        let origin = Vec2::new(
            (focus.x - view_w / 2.0).clamp(0.0, (world.x - view_w).max(0.0)),
            (focus.y - view_h / 2.0).clamp(0.0, (world.y - view_h).max(0.0)),
        );
        Self { origin, zoom }
    }

    pub fn world_to_screen(&self, point: Vec2) -> Vec2 {
        Vec2::new((point.x - self.origin.x) * self.zoom, (point.y - self.origin.y) * self.zoom)
    }
}
