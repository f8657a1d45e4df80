use brick_game::core::{Engine, SnakeEngine, TetrisEngine};
use brick_game::term::{FrameBuffer, GameView, Viewport};
use brick_game::types::{GameStatus, APPLE_CELL};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = TetrisEngine::with_seed(1).snapshot();
    let view = GameView::tetris();

    // With 2-column cells: field = 20x20, plus border => 22x22.
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = TetrisEngine::with_seed(1).snapshot();
    snap.grid[19][0] = 1;

    let fb = GameView::tetris().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = TetrisEngine::with_seed(1).snapshot();
    snap.score = 1234;
    snap.high_score = 5678;

    let all = screen_text(&GameView::tetris().render(&snap, Viewport::new(60, 22)));
    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("HIGH"));
    assert!(all.contains("5678"));
    assert!(all.contains("LEVEL"));
    assert!(all.contains("SPEED"));
}

#[test]
fn term_view_skips_side_panel_on_narrow_viewports() {
    let snap = TetrisEngine::with_seed(1).snapshot();
    let all = screen_text(&GameView::tetris().render(&snap, Viewport::new(22, 22)));
    assert!(!all.contains("SCORE"));
}

#[test]
fn term_view_centers_board_on_tall_viewports() {
    let snap = TetrisEngine::with_seed(1).snapshot();
    let fb = GameView::tetris().render(&snap, Viewport::new(22, 30));

    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_overlays_end_states() {
    let mut snap = SnakeEngine::with_seed(1).snapshot();
    let view = GameView::snake();

    snap.paused = true;
    assert!(screen_text(&view.render(&snap, Viewport::new(22, 22))).contains("PAUSED"));

    snap.paused = false;
    snap.status = GameStatus::GameOver;
    assert!(screen_text(&view.render(&snap, Viewport::new(22, 22))).contains("GAME OVER"));

    snap.status = GameStatus::Win;
    assert!(screen_text(&view.render(&snap, Viewport::new(22, 22))).contains("YOU WIN"));
}

#[test]
fn term_view_draws_apple() {
    let engine = SnakeEngine::with_seed(1);
    let snap = engine.snapshot();
    let (ax, ay) = engine.apple();
    assert_eq!(snap.grid[ay as usize][ax as usize], APPLE_CELL);

    let fb = GameView::snake().render(&snap, Viewport::new(22, 22));
    let cell = fb.get(1 + ax as u16 * 2, 1 + ay as u16).unwrap();
    assert_eq!(cell.ch, '█');
}
