// the game runs at a fixed tick rate: every tick samples the input, steps the
// session, plays the cues and renders, always in that order
use std::thread;
use std::time::Instant;

use anyhow::Result;
use tracing::info;

use crate::effects::EffectEvent;
use crate::input::InputSource;
use crate::presenter::Presenter;
use crate::session::GameSession;

/// Number of ticks an effect label stays on screen
pub const EFFECT_TICKS: u32 = 15;

#[derive(Debug, Clone, PartialEq)]
struct ActiveEffect {
    event: EffectEvent,
    ticks_left: u32,
}

pub struct GameLoop<I, P> {
    session: GameSession,
    input: I,
    presenter: P,
    effects: Vec<ActiveEffect>,
    visible: Vec<EffectEvent>,
    ticks: u64,
}

impl<I: InputSource, P: Presenter> GameLoop<I, P> {
    pub fn new(session: GameSession, input: I, presenter: P) -> Self {
        Self {
            session,
            input,
            presenter,
            effects: Vec::new(),
            visible: Vec::new(),
            ticks: 0,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Labels currently on screen
    pub fn visible_effects(&self) -> &[EffectEvent] {
        &self.visible
    }

    /// Run ticks at the configured rate until the player quits
    pub fn run(&mut self) -> Result<()> {
        let tick_interval = self.session.config().tick_interval();
        info!(?tick_interval, "game loop started");
        loop {
            let frame_start_time = Instant::now();
            if !self.tick()? {
                break;
            }
            // wait for next frame
            let elapsed = frame_start_time.elapsed();
            if elapsed < tick_interval {
                thread::sleep(tick_interval - elapsed);
            }
        }
        info!(ticks = self.ticks, score = self.session.score(), "player quit");
        Ok(())
    }

    /// Run a single tick, returns false once the player asked to quit
    pub fn tick(&mut self) -> Result<bool> {
        let intents = self.input.sample()?;
        let report = self.session.step(intents);
        self.ticks += 1;

        for cue in &report.sounds {
            self.presenter.play_sound(*cue);
        }

        if report.restarted {
            self.effects.clear();
        }
        // age the old labels before adding the ones of this tick
        self.effects.retain_mut(|effect| {
            effect.ticks_left -= 1;
            effect.ticks_left > 0
        });
        self.effects
            .extend(report.effects.into_iter().map(|event| ActiveEffect {
                event,
                ticks_left: EFFECT_TICKS,
            }));
        self.visible.clear();
        self.visible
            .extend(self.effects.iter().map(|effect| effect.event.clone()));

        let frame = self.session.frame(&self.visible);
        self.presenter.render_frame(&frame)?;

        // quitting still renders the current tick
        Ok(!intents.quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::effects::SoundCue;
    use crate::food::{FoodItem, FoodKind};
    use crate::geometry::Point;
    use crate::input::Intents;
    use crate::obstacle::Obstacle;
    use crate::presenter::Frame;
    use crate::snake::Snake;
    use anyhow::bail;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::VecDeque;

    struct ScriptedInput(VecDeque<Intents>);

    impl InputSource for ScriptedInput {
        fn sample(&mut self) -> Result<Intents> {
            Ok(self.0.pop_front().unwrap_or_default())
        }
    }

    struct FailingInput;

    impl InputSource for FailingInput {
        fn sample(&mut self) -> Result<Intents> {
            bail!("stdin closed")
        }
    }

    #[derive(Default)]
    struct RecordingPresenter {
        frames: Vec<(usize, String, usize)>,
        sounds: Vec<SoundCue>,
    }

    impl Presenter for RecordingPresenter {
        fn render_frame(&mut self, frame: &Frame<'_>) -> Result<()> {
            self.frames
                .push((frame.trail.len(), frame.hud.clone(), frame.effects.len()));
            Ok(())
        }

        fn play_sound(&mut self, cue: SoundCue) {
            self.sounds.push(cue);
        }
    }

    fn script(intents: &[Intents]) -> ScriptedInput {
        ScriptedInput(intents.iter().copied().collect())
    }

    fn quit() -> Intents {
        Intents {
            quit: true,
            ..Default::default()
        }
    }

    fn crash_session() -> GameSession {
        let config = GameConfig::default();
        GameSession::from_parts(
            config,
            StdRng::seed_from_u64(1),
            Snake::new(Point::new(100.0, 100.0), 10.0, 0.0),
            vec![FoodItem::new(Point::new(105.0, 100.0), FoodKind::Apple)],
            vec![Obstacle::new(Point::new(110.0, 100.0), 30.0)],
        )
    }

    fn open_session() -> GameSession {
        let config = GameConfig::default();
        let snake = Snake::spawn(&config);
        GameSession::from_parts(config, StdRng::seed_from_u64(9), snake, vec![], vec![])
    }

    #[test]
    fn test_quit_renders_last_tick() {
        let session = open_session();
        let mut game = GameLoop::new(
            session,
            script(&[Intents::default(), quit()]),
            RecordingPresenter::default(),
        );

        assert!(game.tick().expect("tick"));
        assert!(!game.tick().expect("tick"));
        assert_eq!(game.ticks(), 2);
        assert_eq!(game.presenter().frames.len(), 2);
        assert_eq!(game.presenter().frames[1].0, 3);
    }

    #[test]
    fn test_run_stops_on_quit() {
        let session = GameSession::new(GameConfig::default(), StdRng::seed_from_u64(9));
        let mut game = GameLoop::new(session, script(&[quit()]), RecordingPresenter::default());
        game.run().expect("run");
        assert_eq!(game.ticks(), 1);
    }

    #[test]
    fn test_sounds_and_effects_forwarded() {
        let mut game = GameLoop::new(
            crash_session(),
            script(&[Intents::default(), Intents::default()]),
            RecordingPresenter::default(),
        );

        game.tick().expect("tick");
        assert_eq!(game.presenter().sounds, vec![SoundCue::Eat, SoundCue::Crash]);
        assert_eq!(game.visible_effects().len(), 2);
        assert!(game.session().is_over());
        assert!(game.presenter().frames[0].1.contains("Game Over!"));

        // labels stay up while the game is over, and fade after a while
        for _ in 1..EFFECT_TICKS {
            game.tick().expect("tick");
            assert_eq!(game.visible_effects().len(), 2);
        }
        game.tick().expect("tick");
        assert!(game.visible_effects().is_empty());
        assert_eq!(game.presenter().sounds.len(), 2);
    }

    #[test]
    fn test_restart_clears_effects() {
        let restart = Intents {
            restart: true,
            ..Default::default()
        };
        let mut game = GameLoop::new(
            crash_session(),
            script(&[Intents::default(), restart]),
            RecordingPresenter::default(),
        );

        game.tick().expect("tick");
        game.tick().expect("tick");

        assert!(!game.session().is_over());
        assert!(game.visible_effects().is_empty());
        let (trail_len, hud, effects) = game.presenter().frames[1].clone();
        assert_eq!(trail_len, 1);
        assert_eq!(hud, "Score: 0");
        assert_eq!(effects, 0);
    }

    #[test]
    fn test_input_failure_stops_loop() {
        let session = GameSession::new(GameConfig::default(), StdRng::seed_from_u64(9));
        let mut game = GameLoop::new(session, FailingInput, RecordingPresenter::default());
        assert!(game.run().is_err());
        assert!(game.presenter().frames.is_empty());
    }
}
