//! Rasterization - Paint the Pixel Map and Encode PNG

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb as Pixel, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use thiserror::Error;

use crate::state::{ImageState, PixelRect, CANVAS_SIZE};

const BACKGROUND: Pixel<u8> = Pixel([255, 255, 255]);

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cannot render without a color")]
    MissingColor,

    #[error("Cannot render without a pixel map")]
    MissingPixelMap,

    #[error("Block {0:?} does not fit the canvas")]
    InvalidBlock(PixelRect),

    #[error("PNG encoding failed: {0}")]
    PngEncode(String),
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        Self::PngEncode(err.to_string())
    }
}

/// Paint every rectangle of the pixel map onto a white 250x250 canvas
pub fn draw_canvas(state: &ImageState) -> Result<RgbImage, RenderError> {
    let color = state.color.ok_or(RenderError::MissingColor)?;
    let pixel_map = state.pixel_map.as_ref().ok_or(RenderError::MissingPixelMap)?;

    let mut canvas = RgbImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, BACKGROUND);
    let fill = Pixel(color.to_array());

    for block in pixel_map {
        draw_filled_rect_mut(&mut canvas, to_rect(block)?, fill);
    }

    Ok(canvas)
}

/// Render the record to PNG bytes
pub fn render_png(state: &ImageState) -> Result<Vec<u8>, RenderError> {
    let canvas = draw_canvas(state)?;

    let mut png_bytes = Vec::new();
    PngEncoder::new(&mut png_bytes).write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgb8,
    )?;

    log::debug!("encoded {} byte png", png_bytes.len());
    Ok(png_bytes)
}

// Once the block is known to sit inside the 250px canvas the i32 casts are lossless
fn to_rect(block: &PixelRect) -> Result<Rect, RenderError> {
    let fits = block.width() > 0
        && block.height() > 0
        && block.bottom_right.x <= CANVAS_SIZE
        && block.bottom_right.y <= CANVAS_SIZE;
    if !fits {
        return Err(RenderError::InvalidBlock(*block));
    }

    Ok(Rect::at(block.top_left.x as i32, block.top_left.y as i32)
        .of_size(block.width(), block.height()))
}
