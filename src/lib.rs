//! Wrapsnake - a snake that never stops moving on a wrapped field
//!
//! The snake is steered left and right, eats food that makes it fatter or
//! faster and dies on the rocks. The simulation (`session`, `snake`, `food`,
//! `obstacle`) has no I/O; the terminal front-end lives in `terminal` and
//! `render`, and `game` ties them together in a fixed rate loop.

pub mod config;
pub mod effects;
pub mod food;
pub mod game;
pub mod geometry;
pub mod input;
pub mod obstacle;
pub mod presenter;
pub mod render;
pub mod session;
pub mod snake;
pub mod terminal;

pub use config::{ConfigError, GameConfig, TRAIL_CAPACITY};
pub use effects::{EffectEvent, Rgb, SoundCue};
pub use food::{FoodItem, FoodKind};
pub use game::GameLoop;
pub use geometry::{random_in_bounds, Point};
pub use input::{InputSource, Intents};
pub use obstacle::Obstacle;
pub use presenter::{Frame, Presenter};
pub use session::{GameSession, SessionState, TickReport};
pub use snake::Snake;
