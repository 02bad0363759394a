use anyhow::Result;

use crate::effects::{EffectEvent, SoundCue};
use crate::food::FoodItem;
use crate::obstacle::Obstacle;
use crate::session::SessionState;
use crate::snake::Trail;

/// Everything drawn for one tick
#[derive(Debug)]
pub struct Frame<'a> {
    pub trail: &'a Trail,
    pub radius: f64,
    pub food: &'a [FoodItem],
    pub food_radius: f64,
    pub obstacles: &'a [Obstacle],
    pub hud: String,
    pub state: SessionState,
    pub effects: &'a [EffectEvent],
}

/// Screen and speaker the game loop draws and plays through
pub trait Presenter {
    fn render_frame(&mut self, frame: &Frame<'_>) -> Result<()>;

    /// Fire and forget, failures must not stop the game
    fn play_sound(&mut self, cue: SoundCue);
}
