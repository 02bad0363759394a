use rand::Rng;

use crate::config::GameConfig;
use crate::geometry::{circles_overlap, random_in_bounds, Point};

/// A static rock, placed once when the session starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub center: Point,
    pub radius: f64,
}

impl Obstacle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn generate<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Vec<Obstacle> {
        (0..config.obstacle_count)
            .map(|_| {
                let center =
                    random_in_bounds(rng, config.width, config.height, config.obstacle_margin);
                Obstacle::new(center, config.obstacle_radius)
            })
            .collect()
    }

    pub fn is_hit_by(&self, head: Point, snake_radius: f64) -> bool {
        circles_overlap(head, snake_radius, self.center, self.radius)
    }
}
