//! Falling-block engine - active figure, locking, line clears, leveling
//!
//! The engine owns its grid, the active and next figures, the scheduler and the
//! high-score store. Illegal moves are not errors: a shift or rotation that would
//! collide is simply discarded.
//!
//! Action mapping:
//! - `Left` / `Right`: shift one column
//! - `Down`: hard drop (fall until blocked, then lock)
//! - `Primary`: rotate a quarter turn
//! - `Pause`: toggle pause
//! - `Terminate`: end the round
//! - `Up` / `None`: no-op

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::engine::Engine;
use crate::figure::Figure;
use crate::grid::Grid;
use crate::high_score::HighScoreStore;
use crate::rng::SimpleRng;
use crate::scheduler::{FrameScheduler, PacingStrategy};
use crate::scoring::{line_clear_points, tetris_level};
use crate::snapshot::{GridMatrix, RenderSnapshot};
use crate::types::{
    Action, GameStatus, DEFAULT_FRAME_MS, EMPTY_CELL, FIELD_HEIGHT, FIELD_WIDTH,
};

/// Complete falling-block game state
#[derive(Debug, Clone)]
pub struct TetrisEngine {
    grid: Grid,
    active: Figure,
    next: Figure,
    score: u32,
    level: u32,
    speed: u32,
    paused: bool,
    status: GameStatus,
    rng: SimpleRng,
    store: HighScoreStore,
    scheduler: FrameScheduler,
}

impl TetrisEngine {
    /// Create a new round
    pub fn new(seed: u32, store: HighScoreStore, base_frame: Duration) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = Figure::spawn(rng.next_shape());
        let next = Figure::spawn(rng.next_shape());

        Self {
            grid: Grid::new(),
            active,
            next,
            score: 0,
            level: 1,
            speed: 1,
            paused: false,
            status: GameStatus::Playing,
            rng,
            store,
            scheduler: FrameScheduler::new(
                PacingStrategy::ResidualAccumulator,
                base_frame,
                Instant::now(),
            ),
        }
    }

    /// Seeded engine with an in-memory high score and the default frame budget
    pub fn with_seed(seed: u32) -> Self {
        Self::new(
            seed,
            HighScoreStore::detached(),
            Duration::from_millis(DEFAULT_FRAME_MS),
        )
    }

    /// Engine backed by the configured high-score file
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.seed,
            HighScoreStore::open(config.tetris_high_score_path()),
            config.tetris_frame,
        )
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> &Figure {
        &self.active
    }

    pub fn next(&self) -> &Figure {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn high_score(&self) -> u32 {
        self.store.high_score()
    }

    fn accepts_moves(&self) -> bool {
        self.status.is_playing() && !self.paused
    }

    /// True when any filled cell of `figure` is outside the grid or on an occupied cell
    fn collides(&self, figure: &Figure) -> bool {
        figure.cells().any(|(x, y, _)| !self.grid.is_free(x, y))
    }

    fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let candidate = self.active.shifted(dx, dy);
        if self.collides(&candidate) {
            return false;
        }
        self.active = candidate;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.accepts_moves() && self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.accepts_moves() && self.try_move(1, 0)
    }

    /// Move the active figure down one row; a blocked move changes nothing.
    pub fn soft_drop(&mut self) -> bool {
        self.accepts_moves() && self.try_move(0, 1)
    }

    /// Drop the active figure as far as it goes and lock it
    pub fn hard_drop(&mut self) {
        if !self.accepts_moves() {
            return;
        }
        while self.try_move(0, 1) {}
        self.lock();
    }

    /// Rotate in place; an overlapping rotation leaves the figure untouched
    pub fn rotate(&mut self) -> bool {
        if !self.accepts_moves() {
            return false;
        }
        let candidate = self.active.rotated();
        if self.collides(&candidate) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Plant the active figure, clear rows, rescore and spawn the next figure
    fn lock(&mut self) {
        for (x, y, cell) in self.active.cells() {
            self.grid.set(x, y, cell);
        }

        let cleared = self.grid.clear_full_rows();
        let points = line_clear_points(cleared.len());
        self.score += points;
        self.store.record(self.score);
        self.level = tetris_level(self.score);
        self.speed = self.level;
        debug!(
            kind = ?self.active.kind,
            x = self.active.x,
            y = self.active.y,
            lines = cleared.len(),
            points,
            score = self.score,
            "figure locked"
        );

        self.spawn_next();
    }

    fn spawn_next(&mut self) {
        self.active = self.next;
        self.next = Figure::spawn(self.rng.next_shape());
        if self.collides(&self.active) {
            self.game_over();
        }
    }

    fn game_over(&mut self) {
        self.status = GameStatus::GameOver;
        self.paused = false;
        self.store.record(self.score);
        info!(score = self.score, high_score = self.store.high_score(), "tetris game over");
    }

    fn grid_with_active(&self) -> GridMatrix {
        let mut rows = [[EMPTY_CELL; FIELD_WIDTH]; FIELD_HEIGHT];
        self.grid.write_rows(&mut rows);
        for (x, y, cell) in self.active.cells() {
            if !self.grid.is_inside(x, y) {
                continue;
            }
            let slot = &mut rows[y as usize][x as usize];
            if *slot == EMPTY_CELL {
                *slot = cell;
            }
        }
        rows
    }
}

impl Engine for TetrisEngine {
    fn apply_action(&mut self, action: Action) {
        match action {
            Action::Terminate => self.game_over(),
            Action::Pause => {
                if self.status.is_playing() {
                    self.paused = !self.paused;
                }
            }
            _ if !self.accepts_moves() => {}
            Action::Left => {
                self.move_left();
            }
            Action::Right => {
                self.move_right();
            }
            Action::Down => self.hard_drop(),
            Action::Primary => {
                self.rotate();
            }
            Action::Up | Action::None => {}
        }
    }

    /// Automatic soft drop; a blocked figure locks instead of moving.
    fn tick(&mut self) {
        if !self.accepts_moves() {
            return;
        }
        if !self.try_move(0, 1) {
            self.lock();
        }
    }

    fn advance_if_due_at(&mut self, now: Instant) -> bool {
        if !self.status.is_playing() {
            return false;
        }
        let due = self.scheduler.poll(now, self.speed, 1.0, self.paused);
        if due {
            self.tick();
        }
        due
    }

    fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            grid: self.grid_with_active(),
            next: Some(self.next.blocks),
            score: self.score,
            high_score: self.store.high_score(),
            level: self.level,
            speed: self.speed,
            paused: self.paused,
            boosted: false,
            status: self.status,
        }
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn reset(&mut self) {
        self.grid.reset_all();
        self.active = Figure::spawn(self.rng.next_shape());
        self.next = Figure::spawn(self.rng.next_shape());
        self.score = 0;
        self.level = 1;
        self.speed = 1;
        self.paused = false;
        self.status = GameStatus::Playing;
        self.scheduler.rebase(Instant::now());
    }
}
