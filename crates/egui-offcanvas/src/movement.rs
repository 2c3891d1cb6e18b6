use crate::options::Position;
use egui::Vec2;

/// Translations applied to the panel when it opens (`on`) and closes (`off`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movement {
    pub on: Vec2,
    pub off: Vec2,
}

impl Movement {
    pub fn new(position: Position, size: f32, offset: f32) -> Self {
        let distance = size + offset;
        let on = match position {
            Position::Top => Vec2::new(0.0, distance),
            Position::Bottom => Vec2::new(0.0, -distance),
            Position::Left => Vec2::new(distance, 0.0),
            Position::Right => Vec2::new(-distance, 0.0),
        };

        Self { on, off: Vec2::ZERO }
    }
}
