/// Which diagnostic test, if any, is on screen.
///
/// The selector view and the idle state are the same thing, so there is no
/// separate selecting variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestSession {
    #[default]
    Idle,
    RunningTest { pattern_id: &'static str },
}

impl TestSession {
    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::RunningTest { .. })
    }

    #[must_use]
    pub const fn pattern_id(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::RunningTest { pattern_id } => Some(pattern_id),
        }
    }
}

/// Position in the active palette. Always below the palette length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColourCycle {
    index: usize,
}

impl ColourCycle {
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    pub fn advance(&mut self, len: usize) {
        if len == 0 {
            return;
        }

        self.index = (self.index + 1) % len;
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}
