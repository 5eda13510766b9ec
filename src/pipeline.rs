//! Identicon Pipeline - Single Entry Point
//!
//! hash -> color -> grid -> filter -> pixel map -> PNG. Every stage runs,
//! in this order, on every call.

use serde::Serialize;
use thiserror::Error;

use crate::color::pick_color;
use crate::grid::{build_grid, filter_odd_squares};
use crate::hashing::{hash_input, sha256_hex};
use crate::output::identicon_filename;
use crate::pixel_map::build_pixel_map;
use crate::render::{render_png, RenderError};
use crate::state::{ImageState, Rgb, CANVAS_SIZE};

#[derive(Debug, Error)]
pub enum IdenticonError {
    #[error("{stage} requires {missing}, which is not set")]
    Precondition {
        stage: &'static str,
        missing: &'static str,
    },

    #[error("Grid index {0} is outside the 5x5 grid")]
    CellOutOfRange(usize),

    #[error("Input is not valid UTF-8: {0}")]
    InputEncoding(String),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A rendered identicon plus the facts a caller may want to report
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedIdenticon {
    pub input: String,
    pub filename: String,
    pub size: [u32; 2],
    pub color: Rgb,
    pub painted_cells: usize,
    pub sha256: String,
    pub png_base64: String,
}

/// Run every stage up to (not including) rasterization
pub fn derive_state(input: &str) -> Result<ImageState, IdenticonError> {
    let state = hash_input(input);
    let state = pick_color(state);
    let state = build_grid(state);
    let state = filter_odd_squares(state)?;
    build_pixel_map(state)
}

/// Generate the PNG bytes of the identicon for `input`
pub fn generate_identicon(input: &str) -> Result<Vec<u8>, IdenticonError> {
    let state = derive_state(input)?;
    Ok(render_png(&state)?)
}

/// Generate the identicon and describe it
pub fn render_identicon(input: &str) -> Result<GeneratedIdenticon, IdenticonError> {
    let state = derive_state(input)?;
    let png = render_png(&state)?;

    let color = state.color.ok_or(IdenticonError::Precondition {
        stage: "render_identicon",
        missing: "color",
    })?;
    let painted_cells = state.pixel_map.as_ref().map_or(0, Vec::len);

    Ok(GeneratedIdenticon {
        input: input.to_string(),
        filename: identicon_filename(input),
        size: [CANVAS_SIZE, CANVAS_SIZE],
        color,
        painted_cells,
        sha256: sha256_hex(&png),
        png_base64: base64::Engine::encode(&base64::engine::general_purpose::STANDARD, &png),
    })
}
