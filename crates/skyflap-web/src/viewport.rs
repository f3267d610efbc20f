/// The canvas rectangle on the page, in CSS pixels, plus the world it shows.
/// Used to forward page-level touches into world-space pointer presses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub world_width: f32,
    pub world_height: f32,
}

impl Viewport {
    pub fn new(left: f32, top: f32, width: f32, height: f32, world_width: f32, world_height: f32) -> Self {
        Self { left, top, width, height, world_width, world_height }
    }

    /// Map a page-space point into world space.
    /// Returns None for points outside the canvas or a degenerate rect.
    pub fn to_world(&self, client_x: f32, client_y: f32) -> Option<(f32, f32)> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return None;
        }
        let u = (client_x - self.left) / self.width;
        let v = (client_y - self.top) / self.height;
        if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
            return None;
        }
        Some((u * self.world_width, v * self.world_height))
    }
}
