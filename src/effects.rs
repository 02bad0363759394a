use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
    pub const SNAKE: Rgb = Rgb(0, 255, 0);
    pub const OBSTACLE: Rgb = Rgb(150, 150, 150);
}

/// Transient feedback drawn for a few frames, it has no effect on the game
#[derive(Debug, Clone, PartialEq)]
pub struct EffectEvent {
    pub label: &'static str,
    pub position: Point,
    pub color: Rgb,
}

impl EffectEvent {
    pub fn new(label: &'static str, position: Point, color: Rgb) -> Self {
        Self {
            label,
            position,
            color,
        }
    }

    pub fn crash(position: Point) -> Self {
        Self::new("Ouch!", position, Rgb::YELLOW)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Eat,
    Crash,
}
