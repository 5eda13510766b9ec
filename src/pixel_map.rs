//! Index-to-Pixel Mapping

use crate::pipeline::IdenticonError;
use crate::state::{Cell, ImageState, PixelRect, Point, CELL_SIZE, GRID_CELLS};

/// Canvas rectangle covered by a grid cell, or `None` for an index off the grid
pub fn cell_rect(cell: &Cell) -> Option<PixelRect> {
    if cell.index >= GRID_CELLS {
        return None;
    }

    let horizontal = cell.col() as u32 * CELL_SIZE;
    let vertical = cell.row() as u32 * CELL_SIZE;

    Some(PixelRect {
        top_left: Point::new(horizontal, vertical),
        bottom_right: Point::new(horizontal + CELL_SIZE, vertical + CELL_SIZE),
    })
}

/// Map every surviving cell to its rectangle, in grid order
pub fn build_pixel_map(state: ImageState) -> Result<ImageState, IdenticonError> {
    let grid = state.grid.as_ref().ok_or(IdenticonError::Precondition {
        stage: "build_pixel_map",
        missing: "grid",
    })?;
    if !state.filtered {
        return Err(IdenticonError::Precondition {
            stage: "build_pixel_map",
            missing: "filtered grid",
        });
    }

    let pixel_map = grid
        .iter()
        .map(|cell| cell_rect(cell).ok_or(IdenticonError::CellOutOfRange(cell.index)))
        .collect::<Result<Vec<PixelRect>, _>>()?;
    log::debug!("mapped {} cells to pixels", pixel_map.len());

    Ok(ImageState {
        pixel_map: Some(pixel_map),
        ..state
    })
}
