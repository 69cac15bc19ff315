use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkirmishError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A saved record breaks one of the entity invariants.
    #[error("Invalid entity \"{name}\": {reason}")]
    InvalidEntity { name: String, reason: String },

    /// A fleet slot index that is out of range or points at a separator.
    #[error("No entity at slot {0}")]
    InvalidIndex(usize),
}

pub type Result<T> = std::result::Result<T, SkirmishError>;
