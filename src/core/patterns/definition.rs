use crate::core::patterns::recipe::RenderRecipe;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub recipe: RenderRecipe,
}
