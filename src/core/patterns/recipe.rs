use crate::core::data::{colour::Colour, palette::ColourPalette};

pub const REFERENCE_CONTRAST_TILE_SIZE: u32 = 10;

/// How a diagnostic pattern is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderRecipe {
    /// Full-surface fill with one palette colour at a time.
    CyclingSolidColour { palette: ColourPalette },
    /// Horizontal ramp from `from` at the left edge to `to` at the right edge.
    Gradient { from: Colour, to: Colour },
    /// Checkerboard of square tiles, `light` in the top-left tile.
    RepeatingContrast {
        tile_size: u32,
        dark: Colour,
        light: Colour,
    },
}

impl RenderRecipe {
    #[must_use]
    pub fn reference_gradient() -> Self {
        Self::Gradient {
            from: Colour::BLACK,
            to: Colour::WHITE,
        }
    }

    #[must_use]
    pub fn reference_contrast() -> Self {
        Self::RepeatingContrast {
            tile_size: REFERENCE_CONTRAST_TILE_SIZE,
            dark: Colour::BLACK,
            light: Colour::WHITE,
        }
    }

    #[must_use]
    pub fn palette(&self) -> Option<&ColourPalette> {
        match self {
            Self::CyclingSolidColour { palette } => Some(palette),
            Self::Gradient { .. } | Self::RepeatingContrast { .. } => None,
        }
    }

    #[must_use]
    pub fn is_cycling(&self) -> bool {
        self.palette().is_some()
    }
}
