// the snake never stops: every tick the head moves forward by `speed` along `heading`
// and the previous heads are kept in a bounded trail that is drawn as the body.
// eating changes the thickness (radius) and the speed, never the trail length
use circular_buffer::CircularBuffer;

use crate::config::{GameConfig, MIN_RADIUS, TRAIL_CAPACITY};
use crate::geometry::Point;
use crate::input::Intents;

/// Head positions, most recent first
pub type Trail = CircularBuffer<TRAIL_CAPACITY, Point>;

#[derive(Debug, Clone)]
pub struct Snake {
    trail: Trail,
    radius: f64,
    // degrees, 0 points towards +x
    heading: f64,
    speed: f64,
    score: u32,
}

impl Snake {
    pub fn new(head: Point, radius: f64, speed: f64) -> Snake {
        let mut trail = Trail::new();
        trail.push_front(head);
        Snake {
            trail,
            radius: radius.max(MIN_RADIUS),
            heading: 0.0,
            speed: speed.max(0.0),
            score: 0,
        }
    }

    /// Snake in its starting state: centered, heading right
    pub fn spawn(config: &GameConfig) -> Snake {
        Snake::new(
            config.center(),
            config.clamp_radius(config.initial_radius),
            config.clamp_speed(config.base_speed),
        )
    }

    pub fn head(&self) -> Point {
        // the trail is created with one point and never popped below that
        self.trail.front().copied().unwrap_or_default()
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn set_heading(&mut self, heading: f64) {
        self.heading = heading;
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Apply the turn intents of this tick, both turns may apply and cancel out
    pub fn turn(&mut self, intents: &Intents, turn_rate: f64) {
        if intents.turn_left {
            self.heading -= turn_rate;
        }
        if intents.turn_right {
            self.heading += turn_rate;
        }
    }

    /// Per-tick displacement for the current heading and speed
    pub fn velocity(&self) -> (f64, f64) {
        let radians = self.heading.to_radians();
        (radians.cos() * self.speed, radians.sin() * self.speed)
    }

    /// Next head position, wrapped onto the field
    pub fn next_head(&self, width: f64, height: f64) -> Point {
        let (dx, dy) = self.velocity();
        self.head().translated(dx, dy).wrapped(width, height)
    }

    /// Add `head` to the front of the trail, returning the dropped tail if the trail was full
    pub fn push_head(&mut self, head: Point) -> Option<Point> {
        self.trail.push_front(head)
    }

    /// Move the head one tick forward and record it in the trail
    pub fn advance(&mut self, width: f64, height: f64) -> Point {
        let new_head = self.next_head(width, height);
        self.push_head(new_head);
        new_head
    }

    pub fn grow(&mut self, amount: f64) {
        self.radius = (self.radius + amount).max(MIN_RADIUS);
    }

    pub fn boost(&mut self, amount: f64, max_speed: Option<f64>) {
        let boosted = self.speed + amount;
        self.speed = match max_speed {
            Some(max) => boosted.min(max),
            None => boosted,
        }
        .max(0.0);
    }

    pub fn add_points(&mut self, points: u32) {
        self.score += points;
    }
}
