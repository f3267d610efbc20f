/// Identifies a sprite in the host's sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpriteId(pub u32);

/// Neutral tint: the host draws the sprite unmodified.
pub const TINT_NONE: u32 = 0xFF_FF_FF;

/// How an entity is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteComponent {
    pub sprite: SpriteId,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// Multiplicative tint as 0xRRGGBB.
    pub tint: u32,
}

impl SpriteComponent {
    pub fn new(sprite: SpriteId) -> Self {
        Self {
            sprite,
            ..Self::default()
        }
    }

    pub fn with_tint(mut self, tint: u32) -> Self {
        self.tint = tint & 0xFF_FF_FF;
        self
    }
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self {
            sprite: SpriteId(0),
            alpha: 1.0,
            tint: TINT_NONE,
        }
    }
}
