use std::{error::Error, fmt};

/// The host refused or failed a request to enter fullscreen.
///
/// `name` is the host's classification of the failure, `message` its reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullscreenRequestDenied {
    pub name: String,
    pub message: String,
}

impl FullscreenRequestDenied {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Text shown to the user in the dismissible notice.
    #[must_use]
    pub fn notice_text(&self) -> String {
        format!(
            "Error attempting to enable full-screen mode: {} ({})",
            self.message, self.name
        )
    }
}

impl fmt::Display for FullscreenRequestDenied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fullscreen request denied: {} ({})", self.message, self.name)
    }
}

impl Error for FullscreenRequestDenied {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FullscreenNotification {
    /// The host's fullscreen engagement changed, whoever caused it.
    Changed { engaged: bool },
    /// A request to enter fullscreen settled as a failure.
    EnterDenied(FullscreenRequestDenied),
}
