use crate::core::data::palette::ColourPalette;
use crate::core::patterns::definition::PatternDefinition;
use crate::core::patterns::errors::CatalogError;
use crate::core::patterns::recipe::RenderRecipe;

pub const DEAD_PIXEL_ID: &str = "deadPixel";
pub const GRADIENT_ID: &str = "gradient";
pub const CONTRAST_ID: &str = "contrast";

/// Fixed, ordered registry of diagnostic patterns. Order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternCatalog {
    patterns: Vec<PatternDefinition>,
}

impl PatternCatalog {
    pub fn new(patterns: Vec<PatternDefinition>) -> Result<Self, CatalogError> {
        if patterns.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (i, pattern) in patterns.iter().enumerate() {
            if patterns[..i].iter().any(|earlier| earlier.id == pattern.id) {
                return Err(CatalogError::DuplicateId { id: pattern.id });
            }
        }

        Ok(Self { patterns })
    }

    /// Reference suite built from the given recipes, in dead pixel, gradient, contrast order.
    #[must_use]
    pub fn with_recipes(palette: ColourPalette, gradient: RenderRecipe, contrast: RenderRecipe) -> Self {
        Self {
            patterns: vec![
                PatternDefinition {
                    id: DEAD_PIXEL_ID,
                    name: "Dead Pixel Test",
                    description: "Cycle through solid colors to find dead or stuck pixels on your screen.",
                    recipe: RenderRecipe::CyclingSolidColour { palette },
                },
                PatternDefinition {
                    id: GRADIENT_ID,
                    name: "Gradient Test",
                    description: "Check for color banding issues with smooth color gradients.",
                    recipe: gradient,
                },
                PatternDefinition {
                    id: CONTRAST_ID,
                    name: "Contrast Test",
                    description: "Evaluate your monitor's contrast with black and white patterns.",
                    recipe: contrast,
                },
            ],
        }
    }

    #[must_use]
    pub fn list(&self) -> &[PatternDefinition] {
        &self.patterns
    }

    pub fn lookup(&self, id: &str) -> Result<&PatternDefinition, CatalogError> {
        self.patterns
            .iter()
            .find(|pattern| pattern.id == id)
            .ok_or_else(|| CatalogError::NotFound { id: id.to_owned() })
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::with_recipes(
            ColourPalette::reference(),
            RenderRecipe::reference_gradient(),
            RenderRecipe::reference_contrast(),
        )
    }
}
