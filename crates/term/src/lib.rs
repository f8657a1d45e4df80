//! Terminal front end for both games.
//!
//! A small, game-oriented rendering layer: the view turns a render snapshot
//! into a framebuffer, and the renderer flushes framebuffers to the terminal.
//! Grid cells are drawn two columns wide to compensate for glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use brick_game_core as core;
pub use brick_game_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Palette, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
