use std::time::Duration;
use thiserror::Error;

use crate::geometry::Point;

/// Maximum number of head positions kept in the snake trail.
pub const TRAIL_CAPACITY: usize = 50;

/// Smallest radius the snake may have.
pub const MIN_RADIUS: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("play field {width}x{height} is too small for a spawn margin of {margin}")]
    FieldTooSmall { width: u32, height: u32, margin: u32 },
    #[error("tick rate must be at least 1 tick per second")]
    ZeroTickRate,
    #[error("terminal grid {cols}x{rows} must have at least one column and one row")]
    EmptyScreen { cols: u16, rows: u16 },
}

/// Every tunable of a game session
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Width of the play field in field units
    pub width: u32,
    /// Height of the play field in field units
    pub height: u32,
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Degrees the heading changes per tick while a turn is held
    pub turn_rate: f64,
    pub base_speed: f64,
    /// Speed cap applied after a chili, `None` leaves the speed unbounded
    pub max_speed: Option<f64>,
    pub speed_boost: f64,
    pub growth: f64,
    pub initial_radius: f64,
    pub obstacle_radius: f64,
    pub food_count: usize,
    pub obstacle_count: usize,
    /// Distance kept between spawned food and the field edges
    pub food_margin: u32,
    /// Distance kept between obstacle centers and the field edges
    pub obstacle_margin: u32,
    pub points_per_food: u32,
    pub food_draw_radius: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            tick_rate: 30,
            turn_rate: 5.0,
            base_speed: 2.0,
            max_speed: Some(6.0),
            speed_boost: 2.0,
            growth: 2.0,
            initial_radius: 10.0,
            obstacle_radius: 30.0,
            food_count: 3,
            obstacle_count: 5,
            food_margin: 50,
            obstacle_margin: 100,
            points_per_food: 10,
            food_draw_radius: 8.0,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom field size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        let margin = self.food_margin.max(self.obstacle_margin);
        // spawn ranges are [margin, dimension - margin] and must not be empty
        if self.width <= margin.saturating_mul(2) || self.height <= margin.saturating_mul(2) {
            return Err(ConfigError::FieldTooSmall {
                width: self.width,
                height: self.height,
                margin,
            });
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }

    pub fn center(&self) -> Point {
        Point::new(f64::from(self.width / 2), f64::from(self.height / 2))
    }

    pub fn field_width(&self) -> f64 {
        f64::from(self.width)
    }

    pub fn field_height(&self) -> f64 {
        f64::from(self.height)
    }

    pub fn clamp_radius(&self, radius: f64) -> f64 {
        num::clamp(radius, MIN_RADIUS, f64::MAX)
    }

    pub fn clamp_speed(&self, speed: f64) -> f64 {
        num::clamp(speed, 0.0, self.max_speed.unwrap_or(f64::MAX).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.max_speed, Some(6.0));
        assert_eq!(config.food_count, 3);
        assert_eq!(config.obstacle_count, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_center() {
        assert_eq!(GameConfig::default().center(), Point::new(400.0, 300.0));
    }

    #[test]
    fn test_tick_interval() {
        let config = GameConfig::default();
        assert_eq!(config.tick_interval(), Duration::from_secs(1) / 30);
    }

    #[test]
    fn test_field_too_small() {
        let config = GameConfig::new(200, 600);
        assert_eq!(
            config.validate(),
            Err(ConfigError::FieldTooSmall {
                width: 200,
                height: 600,
                margin: 100
            })
        );
    }

    #[test]
    fn test_zero_tick_rate() {
        let config = GameConfig {
            tick_rate: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickRate));
    }

    #[test]
    fn test_clamps() {
        let config = GameConfig::default();
        assert_eq!(config.clamp_radius(-4.0), MIN_RADIUS);
        assert_eq!(config.clamp_radius(12.0), 12.0);
        assert_eq!(config.clamp_speed(-1.0), 0.0);
        assert_eq!(config.clamp_speed(9.0), 6.0);

        let uncapped = GameConfig {
            max_speed: None,
            ..Default::default()
        };
        assert_eq!(uncapped.clamp_speed(9.0), 9.0);
    }
}
