use rand::Rng;

use crate::config::GameConfig;
use crate::effects::{EffectEvent, Rgb};
use crate::geometry::{random_in_bounds, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodKind {
    /// Plain food, only scores
    Apple,
    /// Makes the snake fatter
    Burger,
    /// Speed boost
    Chili,
}

impl FoodKind {
    pub const ALL: [FoodKind; 3] = [FoodKind::Apple, FoodKind::Burger, FoodKind::Chili];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> FoodKind {
        FoodKind::ALL[rng.random_range(0..FoodKind::ALL.len())]
    }

    pub fn color(&self) -> Rgb {
        match self {
            FoodKind::Apple => Rgb(255, 0, 0),
            FoodKind::Burger => Rgb(200, 100, 50),
            FoodKind::Chili => Rgb(255, 50, 0),
        }
    }

    /// Feedback shown where this kind of food was eaten
    pub fn effect(&self, position: Point) -> EffectEvent {
        match self {
            FoodKind::Apple => EffectEvent::new("Yum!", position, Rgb::WHITE),
            FoodKind::Burger => EffectEvent::new("Bigger!", position, Rgb::WHITE),
            FoodKind::Chili => EffectEvent::new("Speed Up!", position, Rgb(255, 50, 50)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodItem {
    pub position: Point,
    pub kind: FoodKind,
}

impl FoodItem {
    pub fn new(position: Point, kind: FoodKind) -> Self {
        Self { position, kind }
    }

    /// Food of a random kind at a random position inside the food margin
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Self {
        let kind = FoodKind::random(rng);
        let position = random_in_bounds(rng, config.width, config.height, config.food_margin);
        Self::new(position, kind)
    }

    /// The snake eats the food when the head is closer than twice its radius
    pub fn is_eaten_by(&self, head: Point, snake_radius: f64) -> bool {
        head.distance_to(self.position) < snake_radius * 2.0
    }
}
