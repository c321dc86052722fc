#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKinds {
    #[default]
    ColourPalette,
    SvgShape,
    ComponentScaffolder,
    RegexGenerator,
    MonitorTest,
}

impl ToolKinds {
    pub const ALL: &'static [Self] = &[
        Self::ColourPalette,
        Self::SvgShape,
        Self::ComponentScaffolder,
        Self::RegexGenerator,
        Self::MonitorTest,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::ColourPalette => "color-palette",
            Self::SvgShape => "svg-shape",
            Self::ComponentScaffolder => "component-scaffolder",
            Self::RegexGenerator => "regex-generator",
            Self::MonitorTest => "monitor-test",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ColourPalette => "Color Palette Generator",
            Self::SvgShape => "SVG Shape Generator",
            Self::ComponentScaffolder => "Component Scaffolder",
            Self::RegexGenerator => "Regex Generator",
            Self::MonitorTest => "Monitor Test",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::ColourPalette => "🎨",
            Self::SvgShape => "🔷",
            Self::ComponentScaffolder => "🧱",
            Self::RegexGenerator => "🔍",
            Self::MonitorTest => "🖥",
        }
    }

    /// What a placeholder panel promises the tool will do.
    #[must_use]
    pub const fn teaser(self) -> &'static str {
        match self {
            Self::ColourPalette => "generate beautiful color palettes from text prompts",
            Self::SvgShape => "generate SVG shapes from text prompts",
            Self::ComponentScaffolder => "generate React components from text prompts",
            Self::RegexGenerator => "generate regular expressions from text prompts",
            Self::MonitorTest => "diagnose your monitor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(ToolKinds::ALL.first(), Some(&ToolKinds::default()));
    }

    #[test]
    fn ids_are_unique() {
        for (i, kind) in ToolKinds::ALL.iter().enumerate() {
            for other in &ToolKinds::ALL[i + 1..] {
                assert_ne!(kind.id(), other.id());
            }
        }
    }
}
