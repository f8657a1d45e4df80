//! Snake engine - body deque, direction gating, apples, growth
//!
//! The snake is painted into the engine's grid after every tick (body = 1,
//! head = 2, apple = 3), so apple placement and rendering read one source of truth.
//!
//! The reversal guard compares a requested direction against the direction applied
//! at the last committed tick, not against the pending one. Within one tick window
//! the pending direction may therefore change more than once.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::engine::Engine;
use crate::grid::Grid;
use crate::high_score::HighScoreStore;
use crate::rng::SimpleRng;
use crate::scheduler::{FrameScheduler, PacingStrategy};
use crate::scoring::snake_level;
use crate::snapshot::RenderSnapshot;
use crate::types::{
    Action, Direction, GameStatus, APPLE_CELL, DEFAULT_FRAME_MS, EMPTY_CELL, FIELD_HEIGHT,
    FIELD_WIDTH, SNAKE_BODY_CELL, SNAKE_BOOST_FACTOR, SNAKE_HEAD_CELL, SNAKE_INITIAL_LENGTH,
    SNAKE_WIN_LENGTH,
};

/// Grid position `(x, y)`
pub type Point = (i32, i32);

/// Column and row of the initial head
pub const SNAKE_START: Point = ((FIELD_WIDTH / 2) as i32, (FIELD_HEIGHT / 2) as i32);

/// Body segments, front = head
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Point>,
    direction: Direction,
    last_direction: Direction,
}

impl Snake {
    /// Vertical snake heading up, head at `(x, y)` and tail below it
    pub fn new(x: i32, y: i32) -> Self {
        let body = (0..SNAKE_INITIAL_LENGTH as i32).map(|i| (x, y + i)).collect();
        Self {
            body,
            direction: Direction::Up,
            last_direction: Direction::Up,
        }
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    /// Request a new heading. Rejected when it reverses the last applied direction.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.last_direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Advance one cell. The tail stays when `grows` accepts the new head.
    fn step(&mut self, grows: impl FnOnce(Point) -> bool) -> bool {
        let (hx, hy) = self.head();
        let (dx, dy) = self.direction.delta();
        let head = (hx + dx, hy + dy);

        self.body.push_front(head);
        let fed = grows(head);
        if !fed {
            self.body.pop_back();
        }
        self.last_direction = self.direction;
        fed
    }

    /// Head left the grid or ran into another segment
    fn is_dead(&self, grid: &Grid) -> bool {
        let head = self.head();
        !grid.is_inside(head.0, head.1) || self.body.iter().skip(1).any(|&seg| seg == head)
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new(SNAKE_START.0, SNAKE_START.1)
    }
}

/// Complete snake game state
#[derive(Debug, Clone)]
pub struct SnakeEngine {
    grid: Grid,
    snake: Snake,
    apple: Point,
    score: u32,
    level: u32,
    speed: u32,
    paused: bool,
    boosted: bool,
    status: GameStatus,
    rng: SimpleRng,
    store: HighScoreStore,
    scheduler: FrameScheduler,
}

impl SnakeEngine {
    pub fn new(seed: u32, store: HighScoreStore, base_frame: Duration) -> Self {
        let mut engine = Self {
            grid: Grid::new(),
            snake: Snake::default(),
            apple: (0, 0),
            score: 0,
            level: 1,
            speed: 1,
            paused: false,
            boosted: false,
            status: GameStatus::Playing,
            rng: SimpleRng::new(seed),
            store,
            scheduler: FrameScheduler::new(
                PacingStrategy::RecomputedBudget,
                base_frame,
                Instant::now(),
            ),
        };
        engine.paint_snake();
        engine.relocate_apple();
        engine
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
            HighScoreStore::open(config.snake_high_score_path()),
            config.snake_frame,
        )
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> Point {
        self.apple
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

    pub fn boosted(&self) -> bool {
        self.boosted
    }

    pub fn high_score(&self) -> u32 {
        self.store.high_score()
    }

    /// Tick-rate multiplier currently applied by the scheduler
    pub fn boost_factor(&self) -> f64 {
        if self.boosted {
            SNAKE_BOOST_FACTOR
        } else {
            1.0
        }
    }

    /// Move the apple to a specific free cell during play.
    ///
    /// Occupied or outside cells are refused, as is any call while paused or
    /// after the round has ended.
    pub fn place_apple(&mut self, x: i32, y: i32) -> bool {
        if !self.accepts_moves() || !self.grid.is_free(x, y) {
            return false;
        }
        let (ax, ay) = self.apple;
        if matches!(self.grid.try_get(ax, ay), Ok(APPLE_CELL)) {
            self.grid.set(ax, ay, EMPTY_CELL);
        }
        self.apple = (x, y);
        self.grid.set(x, y, APPLE_CELL);
        true
    }

    fn accepts_moves(&self) -> bool {
        self.status.is_playing() && !self.paused
    }

    fn erase_snake(&mut self) {
        for &(x, y) in self.snake.segments() {
            if self.grid.is_inside(x, y) {
                self.grid.set(x, y, EMPTY_CELL);
            }
        }
    }

    fn paint_snake(&mut self) {
        for &(x, y) in self.snake.segments().skip(1) {
            if self.grid.is_inside(x, y) {
                self.grid.set(x, y, SNAKE_BODY_CELL);
            }
        }
        let (hx, hy) = self.snake.head();
        if self.grid.is_inside(hx, hy) {
            self.grid.set(hx, hy, SNAKE_HEAD_CELL);
        }
    }

    /// Pick a uniformly random empty cell for the apple
    fn relocate_apple(&mut self) {
        let empty = self.grid.empty_cells();
        match self.rng.pick(&empty) {
            Some(&(x, y)) => {
                self.apple = (x, y);
                self.grid.set(x, y, APPLE_CELL);
                debug!(x, y, candidates = empty.len(), "apple placed");
            }
            None => self.finish(GameStatus::Win),
        }
    }

    fn eat(&mut self) {
        self.score += 1;
        self.store.record(self.score);
        self.level = snake_level(self.score);
        self.speed = self.level;

        if self.snake.len() >= SNAKE_WIN_LENGTH {
            self.finish(GameStatus::Win);
            return;
        }
        self.relocate_apple();
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        self.paused = false;
        self.store.record(self.score);
        info!(
            status = status.as_str(),
            score = self.score,
            length = self.snake.len(),
            "snake round finished"
        );
    }
}

impl Engine for SnakeEngine {
    fn apply_action(&mut self, action: Action) {
        match action {
            Action::Terminate => self.finish(GameStatus::GameOver),
            Action::Pause => {
                if self.status.is_playing() {
                    self.paused = !self.paused;
                }
            }
            _ if !self.accepts_moves() => {}
            Action::Primary => self.boosted = !self.boosted,
            Action::None => {}
            movement => {
                if let Some(direction) = Direction::from_action(movement) {
                    self.snake.set_direction(direction);
                }
            }
        }
    }

    fn tick(&mut self) {
        if !self.accepts_moves() {
            return;
        }

        self.erase_snake();
        let apple = self.apple;
        let fed = self.snake.step(|head| head == apple);
        let dead = self.snake.is_dead(&self.grid);
        self.paint_snake();

        if dead {
            self.finish(GameStatus::GameOver);
            return;
        }
        if fed {
            self.eat();
        }
    }

    fn advance_if_due_at(&mut self, now: Instant) -> bool {
        if !self.status.is_playing() {
            return false;
        }
        let due = self
            .scheduler
            .poll(now, self.speed, self.boost_factor(), self.paused);
        if due {
            self.tick();
        }
        due
    }

    fn snapshot(&self) -> RenderSnapshot {
        let mut grid = [[EMPTY_CELL; FIELD_WIDTH]; FIELD_HEIGHT];
        self.grid.write_rows(&mut grid);
        RenderSnapshot {
            grid,
            next: None,
            score: self.score,
            high_score: self.store.high_score(),
            level: self.level,
            speed: self.speed,
            paused: self.paused,
            boosted: self.boosted,
            status: self.status,
        }
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn reset(&mut self) {
        self.grid.reset_all();
        self.snake = Snake::default();
        self.score = 0;
        self.level = 1;
        self.speed = 1;
        self.paused = false;
        self.boosted = false;
        self.status = GameStatus::Playing;
        self.paint_snake();
        self.relocate_apple();
        self.scheduler.rebase(Instant::now());
    }
}
