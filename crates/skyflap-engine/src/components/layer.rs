/// Draw order bucket. Lower layers are drawn first.
///
/// Layers are drawn back-to-front: Background first, Ui last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    Background = 0,
    #[default]
    Obstacles = 1,
    Player = 2,
    Ui = 3,
}

impl RenderLayer {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_back_to_front() {
        assert!(RenderLayer::Background < RenderLayer::Obstacles);
        assert!(RenderLayer::Obstacles < RenderLayer::Player);
        assert!(RenderLayer::Player < RenderLayer::Ui);
    }

    #[test]
    fn wire_values_match_draw_order() {
        assert_eq!(RenderLayer::Background.as_u8(), 0);
        assert_eq!(RenderLayer::Ui.as_u8(), 3);
    }
}
