use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorTestError {
    /// A pattern id that is not in the catalog reached the controller.
    InvalidPatternReference { id: String },
}

impl fmt::Display for MonitorTestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPatternReference { id } => {
                write!(f, "pattern '{}' is not in the catalog", id)
            }
        }
    }
}

impl Error for MonitorTestError {}
