/// Host-confirmed fullscreen engagement. Never set optimistically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FullscreenStatus {
    #[default]
    Windowed,
    Engaged,
}

impl FullscreenStatus {
    #[must_use]
    pub const fn from_engaged(engaged: bool) -> Self {
        if engaged { Self::Engaged } else { Self::Windowed }
    }

    #[must_use]
    pub const fn is_engaged(self) -> bool {
        matches!(self, Self::Engaged)
    }
}
