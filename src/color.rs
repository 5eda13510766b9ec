//! Color Selection
//!
//! The whole identicon is painted in one color: the first three digest bytes.

use crate::state::{ImageState, Rgb};

/// Set `color` from `hash[0..3]`, leaving every other field as it was
pub fn pick_color(state: ImageState) -> ImageState {
    let [r, g, b, ..] = state.hash;
    let color = Rgb::new(r, g, b);
    log::debug!("picked color {:?}", color);

    ImageState {
        color: Some(color),
        ..state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::hash_input;

    #[test]
    fn test_color_from_first_three_bytes() {
        let state = pick_color(hash_input("hash"));
        assert_eq!(state.color, Some(Rgb::new(8, 0, 252)));
    }

    #[test]
    fn test_pick_color_keeps_hash() {
        let before = hash_input("keep me");
        let after = pick_color(before.clone());
        assert_eq!(after.hash, before.hash);
        assert!(after.grid.is_none());
    }
}
