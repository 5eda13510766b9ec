//! Grid Construction and Filtering
//!
//! Fifteen of the sixteen digest bytes become five mirrored rows. The last
//! byte is never read.

use crate::pipeline::IdenticonError;
use crate::state::{Cell, ImageState, GRID_CELLS, GRID_SIDE};

const ROW_SEED: usize = 3;

/// Reflect a three-byte group into a symmetric five-byte row
pub fn mirror_row(row: [u8; ROW_SEED]) -> [u8; GRID_SIDE] {
    let [a, b, c] = row;
    [a, b, c, b, a]
}

/// Expand the digest into 25 (value, index) cells, row-major
pub fn build_grid(state: ImageState) -> ImageState {
    let mut cells = [Cell::new(0, 0); GRID_CELLS];

    // chunks_exact drops the trailing 16th byte
    let rows = state
        .hash
        .chunks_exact(ROW_SEED)
        .map(|chunk| mirror_row([chunk[0], chunk[1], chunk[2]]));

    for (row_idx, row) in rows.enumerate() {
        for (col_idx, value) in row.into_iter().enumerate() {
            let index = row_idx * GRID_SIDE + col_idx;
            cells[index] = Cell::new(value, index);
        }
    }

    log::debug!("built {} grid cells", cells.len());

    ImageState {
        grid: Some(cells.to_vec()),
        filtered: false,
        ..state
    }
}

/// Drop every cell whose value is odd, keeping the survivors in order
pub fn filter_odd_squares(state: ImageState) -> Result<ImageState, IdenticonError> {
    let grid = state.grid.as_ref().ok_or(IdenticonError::Precondition {
        stage: "filter_odd_squares",
        missing: "grid",
    })?;

    let kept: Vec<Cell> = grid.iter().copied().filter(Cell::is_even).collect();
    log::debug!("kept {} of {} grid cells", kept.len(), grid.len());

    Ok(ImageState {
        grid: Some(kept),
        filtered: true,
        ..state
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::hash_input;

    #[test]
    fn test_mirror_row() {
        assert_eq!(mirror_row([1, 2, 3]), [1, 2, 3, 2, 1]);
        assert_eq!(mirror_row([9, 9, 0]), [9, 9, 0, 9, 9]);
    }

    #[test]
    fn test_grid_has_25_ordered_cells() {
        let state = build_grid(hash_input("anything"));
        assert!(!state.filtered);
        let grid = state.grid.unwrap();
        assert_eq!(grid.len(), GRID_CELLS);
        for (i, cell) in grid.iter().enumerate() {
            assert_eq!(cell.index, i);
        }
    }

    #[test]
    fn test_grid_rows_mirror_hash_groups() {
        let hash: [u8; 16] = core::array::from_fn(|i| i as u8 * 10);
        let grid = build_grid(ImageState::from_hash(hash)).grid.unwrap();
        for row in 0..GRID_SIDE {
            let values: Vec<u8> = grid[row * GRID_SIDE..(row + 1) * GRID_SIDE]
                .iter()
                .map(|c| c.value)
                .collect();
            let seed = [hash[3 * row], hash[3 * row + 1], hash[3 * row + 2]];
            assert_eq!(values, mirror_row(seed));
        }
        // The last byte (150) shows up nowhere
        assert!(grid.iter().all(|c| c.value != 150));
    }

    #[test]
    fn test_known_first_row() {
        let grid = build_grid(hash_input("hash")).grid.unwrap();
        let first: Vec<(u8, usize)> = grid[..5].iter().map(|c| (c.value, c.index)).collect();
        assert_eq!(first, vec![(8, 0), (0, 1), (252, 2), (0, 3), (8, 4)]);
    }

    #[test]
    fn test_filter_keeps_even_in_order() {
        let state = build_grid(hash_input("hash"));
        let before = state.grid.clone().unwrap();
        let after = filter_odd_squares(state).unwrap().grid.unwrap();

        let expected: Vec<Cell> = before.into_iter().filter(|c| c.value % 2 == 0).collect();
        assert_eq!(after, expected);
        assert!(after.windows(2).all(|w| w[0].index < w[1].index));
    }

    #[test]
    fn test_filter_all_odd_yields_empty() {
        let state = build_grid(ImageState::from_hash([1; 16]));
        let filtered = filter_odd_squares(state).unwrap();
        assert_eq!(filtered.grid, Some(vec![]));
        assert!(filtered.filtered);
    }

    #[test]
    fn test_filter_without_grid_is_precondition_error() {
        let err = filter_odd_squares(hash_input("x")).unwrap_err();
        assert!(matches!(
            err,
            IdenticonError::Precondition { missing: "grid", .. }
        ));
    }
}
