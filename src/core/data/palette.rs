use std::{error::Error, fmt};

use crate::core::data::colour::Colour;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    Empty,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "colour palette must contain at least one colour"),
        }
    }
}

impl Error for PaletteError {}

/// Ordered, non-empty sequence of solid colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourPalette {
    colours: Vec<Colour>,
}

impl ColourPalette {
    pub fn new(colours: Vec<Colour>) -> Result<Self, PaletteError> {
        if colours.is_empty() {
            return Err(PaletteError::Empty);
        }

        Ok(Self { colours })
    }

    /// White, black, red, green, blue.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            colours: vec![
                Colour::WHITE,
                Colour::BLACK,
                Colour::RED,
                Colour::GREEN,
                Colour::BLUE,
            ],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Colour at `index`, wrapping modulo the palette length.
    #[must_use]
    pub fn get_wrapped(&self, index: usize) -> Colour {
        self.colours[index % self.colours.len()]
    }
}
