use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::warn;

use crate::config::{ConfigError, GameConfig};
use crate::effects::{Rgb, SoundCue};
use crate::geometry::Point;
use crate::presenter::{Frame, Presenter};
use crate::session::SessionState;

/// Size of the character grid the field is scaled onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenConfig {
    pub cols: u16,
    pub rows: u16,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self { cols: 80, rows: 30 }
    }
}

impl ScreenConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(ConfigError::EmptyScreen {
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Body,
    Head,
    Food(Rgb),
    Obstacle,
    Text(char, Rgb),
}

fn clear_screen(out: &mut String) {
    out.push_str("\x1b[2J");
    out.push_str("\x1b[1;1H");
}

/// Draws frames as colored characters and plays cues on the terminal bell
pub struct TerminalPresenter<W: Write> {
    out: W,
    screen: ScreenConfig,
    cell_width: f64,
    cell_height: f64,
    canvas: Vec<Cell>,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, config: &GameConfig, screen: ScreenConfig) -> Result<Self, ConfigError> {
        screen.validate()?;
        Ok(Self {
            out,
            screen,
            cell_width: config.field_width() / f64::from(screen.cols),
            cell_height: config.field_height() / f64::from(screen.rows),
            canvas: vec![Cell::Empty; usize::from(screen.cols) * usize::from(screen.rows)],
        })
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn cols(&self) -> usize {
        usize::from(self.screen.cols)
    }

    fn rows(&self) -> usize {
        usize::from(self.screen.rows)
    }

    /// Grid cell containing `point`, points off the field are clipped to the border cells
    fn cell_of(&self, point: Point) -> (usize, usize) {
        let col = (point.x / self.cell_width).floor().max(0.0) as usize;
        let row = (point.y / self.cell_height).floor().max(0.0) as usize;
        (col.min(self.cols() - 1), row.min(self.rows() - 1))
    }

    fn set(&mut self, col: usize, row: usize, cell: Cell) {
        let cols = self.cols();
        self.canvas[row * cols + col] = cell;
    }

    /// Fill every cell whose center lies inside the circle, and always the cell holding the center
    fn stamp_circle(&mut self, center: Point, radius: f64, cell: Cell) {
        let (first_col, first_row) = self.cell_of(Point::new(center.x - radius, center.y - radius));
        let (last_col, last_row) = self.cell_of(Point::new(center.x + radius, center.y + radius));
        for row in first_row..=last_row {
            for col in first_col..=last_col {
                let cell_center = Point::new(
                    (col as f64 + 0.5) * self.cell_width,
                    (row as f64 + 0.5) * self.cell_height,
                );
                if cell_center.distance_to(center) <= radius {
                    self.set(col, row, cell);
                }
            }
        }
        let (col, row) = self.cell_of(center);
        self.set(col, row, cell);
    }

    fn stamp_text(&mut self, at: Point, text: &str, color: Rgb) {
        let (col, row) = self.cell_of(at);
        for (offset, ch) in text.chars().enumerate() {
            if col + offset >= self.cols() {
                break;
            }
            self.set(col + offset, row, Cell::Text(ch, color));
        }
    }

    fn paint(&mut self, frame: &Frame<'_>) {
        self.canvas.fill(Cell::Empty);
        for obstacle in frame.obstacles {
            self.stamp_circle(obstacle.center, obstacle.radius, Cell::Obstacle);
        }
        for food in frame.food {
            self.stamp_circle(food.position, frame.food_radius, Cell::Food(food.kind.color()));
        }
        // oldest segments first so the newer ones are drawn on top
        for segment in frame.trail.iter().skip(1).rev() {
            self.stamp_circle(*segment, frame.radius, Cell::Body);
        }
        if let Some(head) = frame.trail.front() {
            self.stamp_circle(*head, frame.radius, Cell::Body);
            let (col, row) = self.cell_of(*head);
            self.set(col, row, Cell::Head);
        }
        for effect in frame.effects {
            self.stamp_text(effect.position, effect.label, effect.color);
        }
    }

    fn compose(&self, frame: &Frame<'_>) -> String {
        let mut screen = String::new();
        clear_screen(&mut screen);
        //border up
        screen.push('▗');
        screen.push_str(&"▄".repeat(self.cols()));
        screen.push_str("▖\n");
        for row in self.canvas.chunks(self.cols()) {
            //border left
            screen.push('▐');
            for cell in row {
                let glyph = match cell {
                    Cell::Empty => " ".normal(),
                    Cell::Body => "⏺".truecolor(Rgb::SNAKE.0, Rgb::SNAKE.1, Rgb::SNAKE.2),
                    Cell::Head => "Ӫ".yellow(),
                    Cell::Food(Rgb(r, g, b)) => "♦".truecolor(*r, *g, *b),
                    Cell::Obstacle => {
                        "█".truecolor(Rgb::OBSTACLE.0, Rgb::OBSTACLE.1, Rgb::OBSTACLE.2)
                    }
                    Cell::Text(ch, Rgb(r, g, b)) => {
                        ch.to_string().as_str().truecolor(*r, *g, *b).bold()
                    }
                };
                let _ = write!(screen, "{glyph}");
            }
            //border right
            screen.push_str("▌\n");
        }
        //border down
        screen.push('▝');
        screen.push_str(&"▀".repeat(self.cols()));
        screen.push_str("▘\n");
        match frame.state {
            SessionState::Playing => screen.push_str(&frame.hud),
            SessionState::GameOver => {
                let _ = write!(screen, "{}", frame.hud.as_str().red().bold());
            }
        }
        screen.push('\n');
        screen
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render_frame(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.paint(frame);
        let screen = self.compose(frame);
        self.out
            .write_all(screen.as_bytes())
            .context("Failed to draw frame")?;
        self.out.flush().context("Failed to flush frame")?;
        Ok(())
    }

    fn play_sound(&mut self, cue: SoundCue) {
        // the terminal bell is the only speaker we have
        let result = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
        if let Err(err) = result {
            warn!(?cue, %err, "failed to ring the bell");
        }
    }
}
