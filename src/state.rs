//! Image State - The Record Threaded Through the Pipeline
//!
//! Each stage consumes an `ImageState` and returns a new one with one more
//! field populated. Nothing is mutated in place.

use serde::{Deserialize, Serialize};

/// Length of the digest produced by the hasher (MD5).
pub const HASH_LEN: usize = 16;

/// Cells per row and per column.
pub const GRID_SIDE: usize = 5;

/// Total cells before filtering.
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// Edge length of one painted cell, in pixels.
pub const CELL_SIZE: u32 = 50;

/// Edge length of the square canvas, in pixels.
pub const CANVAS_SIZE: u32 = CELL_SIZE * GRID_SIDE as u32;

/// An RGB color taken from the first three hash bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// One grid square: the hash byte it carries and its row-major position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub value: u8,
    pub index: usize,
}

impl Cell {
    pub const fn new(value: u8, index: usize) -> Self {
        Self { value, index }
    }

    pub const fn row(&self) -> usize {
        self.index / GRID_SIDE
    }

    pub const fn col(&self) -> usize {
        self.index % GRID_SIDE
    }

    pub const fn is_even(&self) -> bool {
        self.value % 2 == 0
    }
}

/// A pixel coordinate on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Corners of one painted block. `top_left` is inclusive, `bottom_right` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl PixelRect {
    /// Zero when the corners are inverted
    pub fn width(&self) -> u32 {
        self.bottom_right.x.saturating_sub(self.top_left.x)
    }

    pub fn height(&self) -> u32 {
        self.bottom_right.y.saturating_sub(self.top_left.y)
    }
}

/// The accumulating record.
///
/// `hash` is fixed at creation; the optional fields are filled in by later
/// stages. A stage that finds a field it needs still unset reports a
/// precondition violation. `filtered` is true only once odd squares have
/// been dropped from `grid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageState {
    pub hash: [u8; HASH_LEN],
    #[serde(default)]
    pub color: Option<Rgb>,
    #[serde(default)]
    pub grid: Option<Vec<Cell>>,
    #[serde(default)]
    pub filtered: bool,
    #[serde(default)]
    pub pixel_map: Option<Vec<PixelRect>>,
}

impl ImageState {
    /// A fresh record holding only the digest.
    pub fn from_hash(hash: [u8; HASH_LEN]) -> Self {
        Self {
            hash,
            color: None,
            grid: None,
            filtered: false,
            pixel_map: None,
        }
    }
}
