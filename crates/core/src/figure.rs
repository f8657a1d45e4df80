//! Figures module - falling-block shape templates and rotation
//!
//! Every figure is a 5x5 bitmask whose filled cells carry the shape's color id.
//! Rotation is a pure transform producing a new bitmask; callers validate the
//! result against the grid before committing it.

use crate::types::{Cell, EMPTY_CELL, FIELD_WIDTH, FIGURE_SIZE};

/// 5x5 figure bitmask, indexed `[row][col]`
pub type Bitmask = [[Cell; FIGURE_SIZE]; FIGURE_SIZE];

/// The seven figure templates
///
/// Each template has a fixed color id (1..=7) in declaration order:
/// - **I**: horizontal bar
/// - **J**: corner at top-left
/// - **L**: corner at top-right
/// - **O**: 2x2 square
/// - **S**: S-shaped
/// - **T**: T-shaped
/// - **Z**: Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeKind {
    /// All templates, in color-id order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// Color id written into the grid when this shape locks
    pub fn color_id(&self) -> Cell {
        match self {
            ShapeKind::I => 1,
            ShapeKind::J => 2,
            ShapeKind::L => 3,
            ShapeKind::O => 4,
            ShapeKind::S => 5,
            ShapeKind::T => 6,
            ShapeKind::Z => 7,
        }
    }

    pub fn from_color_id(id: Cell) -> Option<Self> {
        ShapeKind::ALL.iter().copied().find(|k| k.color_id() == id)
    }

    /// Spawn-orientation bitmask
    pub fn template(&self) -> Bitmask {
        let c = self.color_id();
        // (row, col) of the four filled cells
        let filled: [(usize, usize); 4] = match self {
            ShapeKind::I => [(2, 0), (2, 1), (2, 2), (2, 3)],
            ShapeKind::J => [(1, 1), (2, 1), (2, 2), (2, 3)],
            ShapeKind::L => [(1, 3), (2, 1), (2, 2), (2, 3)],
            ShapeKind::O => [(1, 1), (1, 2), (2, 1), (2, 2)],
            ShapeKind::S => [(1, 2), (1, 3), (2, 1), (2, 2)],
            ShapeKind::T => [(1, 2), (2, 1), (2, 2), (2, 3)],
            ShapeKind::Z => [(1, 1), (1, 2), (2, 2), (2, 3)],
        };

        let mut blocks = [[EMPTY_CELL; FIGURE_SIZE]; FIGURE_SIZE];
        for (r, col) in filled {
            blocks[r][col] = c;
        }
        blocks
    }
}

/// Quarter turn of a bitmask: `new[4 - c][r] = old[r][c]`
pub fn rotate_bitmask(blocks: &Bitmask) -> Bitmask {
    let mut out = [[EMPTY_CELL; FIGURE_SIZE]; FIGURE_SIZE];
    for (r, row) in blocks.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            out[FIGURE_SIZE - c - 1][r] = cell;
        }
    }
    out
}

/// Horizontal spawn column: the bitmask is centered on the field.
pub const SPAWN_X: i32 = (FIELD_WIDTH / 2) as i32 - (FIGURE_SIZE / 2) as i32;

/// A figure placed on the field: bitmask plus origin of its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Figure {
    pub kind: ShapeKind,
    pub x: i32,
    pub y: i32,
    pub blocks: Bitmask,
}

impl Figure {
    /// Create a figure at the spawn position in its template orientation
    pub fn spawn(kind: ShapeKind) -> Self {
        Self {
            kind,
            x: SPAWN_X,
            y: 0,
            blocks: kind.template(),
        }
    }

    /// Same figure shifted by (dx, dy)
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same origin, bitmask rotated a quarter turn
    pub fn rotated(&self) -> Self {
        Self {
            blocks: rotate_bitmask(&self.blocks),
            ..*self
        }
    }

    /// Field coordinates and value of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        self.blocks.iter().enumerate().flat_map(move |(r, row)| {
            row.iter().enumerate().filter_map(move |(c, &cell)| {
                (cell != EMPTY_CELL).then_some((self.x + c as i32, self.y + r as i32, cell))
            })
        })
    }
}
