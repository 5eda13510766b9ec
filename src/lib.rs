//! Identicon Core - Deterministic Identicon Generator
//!
//! An input string is hashed with MD5 and the digest alone decides the image:
//! 1. The first three bytes are the color
//! 2. Fifteen bytes become five mirrored rows of a 5x5 grid
//! 3. Only even-valued cells are painted
//! 4. Each cell is a 50x50 block on a 250x250 PNG

pub mod state;
pub mod hashing;
pub mod color;
pub mod grid;
pub mod pixel_map;
pub mod render;
pub mod output;
pub mod logger;
pub mod pipeline;

pub use state::{ImageState, Cell, Rgb, Point, PixelRect};
pub use hashing::{hash_input, sha256_hex, input_from_os};
pub use color::pick_color;
pub use grid::{mirror_row, build_grid, filter_odd_squares};
pub use pixel_map::build_pixel_map;
pub use render::{render_png, RenderError};
pub use output::{OutputConfig, save_identicon};
pub use pipeline::{
    derive_state, generate_identicon, render_identicon, GeneratedIdenticon, IdenticonError,
};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
