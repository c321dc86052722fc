use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Empty,
    DuplicateId { id: &'static str },
    NotFound { id: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "pattern catalog must contain at least one pattern"),
            Self::DuplicateId { id } => write!(f, "pattern id '{}' is defined more than once", id),
            Self::NotFound { id } => write!(f, "no pattern with id '{}'", id),
        }
    }
}

impl Error for CatalogError {}
