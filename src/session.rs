use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::effects::{EffectEvent, SoundCue};
use crate::food::{FoodItem, FoodKind};
use crate::input::Intents;
use crate::obstacle::Obstacle;
use crate::presenter::Frame;
use crate::snake::Snake;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    GameOver,
}

/// Everything that happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub eaten: Vec<FoodKind>,
    pub effects: Vec<EffectEvent>,
    pub sounds: Vec<SoundCue>,
    /// The session went from playing to game over during this tick
    pub crashed: bool,
    pub restarted: bool,
}

/// One player's game: the snake, the food pool and the obstacles
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    rng: StdRng,
    snake: Snake,
    food: Vec<FoodItem>,
    obstacles: Vec<Obstacle>,
    state: SessionState,
}

impl GameSession {
    pub fn new(config: GameConfig, mut rng: StdRng) -> Self {
        let food = (0..config.food_count)
            .map(|_| FoodItem::spawn(&mut rng, &config))
            .collect();
        let obstacles = Obstacle::generate(&mut rng, &config);
        let snake = Snake::spawn(&config);
        Self::from_parts(config, rng, snake, food, obstacles)
    }

    /// Build a session with an explicit layout
    pub fn from_parts(
        config: GameConfig,
        rng: StdRng,
        snake: Snake,
        food: Vec<FoodItem>,
        obstacles: Vec<Obstacle>,
    ) -> Self {
        info!(
            food = food.len(),
            obstacles = obstacles.len(),
            "new session on a {}x{} field",
            config.width,
            config.height
        );
        Self {
            config,
            rng,
            snake,
            food,
            obstacles,
            state: SessionState::Playing,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &[FoodItem] {
        &self.food
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    pub fn score(&self) -> u32 {
        self.snake.score()
    }

    /// Run one tick with the intents sampled for it.
    ///
    /// While playing the snake turns, moves and collides. While over only a
    /// restart is honoured, and the restart tick itself does not move the snake.
    pub fn step(&mut self, intents: Intents) -> TickReport {
        match self.state {
            SessionState::Playing => self.advance(&intents),
            SessionState::GameOver => {
                if intents.restart {
                    self.restart();
                    TickReport {
                        restarted: true,
                        ..Default::default()
                    }
                } else {
                    TickReport::default()
                }
            }
        }
    }

    /// Back to a fresh snake and food pool, obstacles stay where they are
    pub fn restart(&mut self) {
        self.snake = Snake::spawn(&self.config);
        self.food.clear();
        for _ in 0..self.config.food_count {
            self.food.push(FoodItem::spawn(&mut self.rng, &self.config));
        }
        self.state = SessionState::Playing;
        info!("session restarted");
    }

    fn advance(&mut self, intents: &Intents) -> TickReport {
        let mut report = TickReport::default();

        self.snake.turn(intents, self.config.turn_rate);
        let head = self
            .snake
            .advance(self.config.field_width(), self.config.field_height());

        self.eat_food(&mut report);
        self.check_obstacles(&mut report);

        debug!(x = head.x, y = head.y, heading = self.snake.heading(), "snake moved");
        report
    }

    fn eat_food(&mut self, report: &mut TickReport) {
        let head = self.snake.head();
        let pool = std::mem::take(&mut self.food);
        let mut eaten_count = 0;
        for item in pool {
            // the radius is read per item, a burger earlier in the pool widens the reach
            if !item.is_eaten_by(head, self.snake.radius()) {
                self.food.push(item);
                continue;
            }
            eaten_count += 1;
            self.apply(item.kind);
            debug!(
                kind = ?item.kind,
                x = item.position.x,
                y = item.position.y,
                score = self.snake.score(),
                "food eaten"
            );
            report.eaten.push(item.kind);
            report.effects.push(item.kind.effect(item.position));
            report.sounds.push(SoundCue::Eat);
        }
        // replacements are only tested from the next tick on
        for _ in 0..eaten_count {
            let replacement = FoodItem::spawn(&mut self.rng, &self.config);
            debug!(
                kind = ?replacement.kind,
                x = replacement.position.x,
                y = replacement.position.y,
                "food spawned"
            );
            self.food.push(replacement);
        }
    }

    fn apply(&mut self, kind: FoodKind) {
        match kind {
            FoodKind::Apple => {}
            FoodKind::Burger => self.snake.grow(self.config.growth),
            FoodKind::Chili => self
                .snake
                .boost(self.config.speed_boost, self.config.max_speed),
        }
        self.snake.add_points(self.config.points_per_food);
    }

    fn check_obstacles(&mut self, report: &mut TickReport) {
        let head = self.snake.head();
        let radius = self.snake.radius();
        let Some(obstacle) = self.obstacles.iter().find(|o| o.is_hit_by(head, radius)) else {
            return;
        };
        self.state = SessionState::GameOver;
        report.crashed = true;
        report.effects.push(EffectEvent::crash(obstacle.center));
        report.sounds.push(SoundCue::Crash);
        info!(score = self.snake.score(), "game over");
    }

    pub fn hud_text(&self) -> String {
        match self.state {
            SessionState::Playing => format!("Score: {}", self.snake.score()),
            SessionState::GameOver => format!(
                "Score: {}    Game Over! Press R to restart or Q to quit",
                self.snake.score()
            ),
        }
    }

    /// Snapshot of everything the presenter needs for this tick
    pub fn frame<'a>(&'a self, effects: &'a [EffectEvent]) -> Frame<'a> {
        Frame {
            trail: self.snake.trail(),
            radius: self.snake.radius(),
            food: &self.food,
            food_radius: self.config.food_draw_radius,
            obstacles: &self.obstacles,
            hud: self.hud_text(),
            state: self.state,
            effects,
        }
    }
}
