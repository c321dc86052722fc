use rayon::prelude::*;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use crate::core::patterns::recipe::RenderRecipe;

/// Rasterises `recipe` onto a fresh `width` x `height` surface.
///
/// `colour_index` selects the fill for cycling recipes and wraps modulo the
/// palette length; other recipes ignore it.
pub fn render_pattern(
    recipe: &RenderRecipe,
    colour_index: usize,
    width: u32,
    height: u32,
) -> Result<PixelBuffer, PixelBufferError> {
    let mut buffer = PixelBuffer::new(width, height)?;
    render_pattern_into(recipe, colour_index, &mut buffer);
    Ok(buffer)
}

/// Rasterises `recipe` over an existing surface, one rayon task per row.
pub fn render_pattern_into(recipe: &RenderRecipe, colour_index: usize, buffer: &mut PixelBuffer) {
    let width = buffer.width();
    let stride = buffer.row_stride();

    buffer
        .buffer_mut()
        .par_chunks_exact_mut(stride)
        .enumerate()
        .for_each(|(y, row)| match recipe {
            RenderRecipe::CyclingSolidColour { palette } => {
                fill_row(row, |_| palette.get_wrapped(colour_index));
            }
            RenderRecipe::Gradient { from, to } => {
                let span = f64::from(width.saturating_sub(1).max(1));
                fill_row(row, |x| from.lerp(*to, x as f64 / span));
            }
            RenderRecipe::RepeatingContrast {
                tile_size,
                dark,
                light,
            } => {
                let tile = (*tile_size).max(1) as usize;
                let tile_y = y / tile;
                fill_row(row, |x| {
                    if (x / tile + tile_y) % 2 == 1 {
                        *dark
                    } else {
                        *light
                    }
                });
            }
        });
}

fn fill_row(row: &mut [u8], colour_at: impl Fn(usize) -> Colour) {
    for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let colour = colour_at(x);
        pixel[0] = colour.r;
        pixel[1] = colour.g;
        pixel[2] = colour.b;
    }
}
