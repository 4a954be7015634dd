//! Error types for prioritizers and normalization policies.

/// Errors raised while building or querying a prioritizer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PrioritizeError {
    /// Text does not name one of the normalization policies.
    #[error("invalid priority type: {name:?} (expected raw, normalize or idealize)")]
    InvalidPolicy { name: String },

    /// An alternative or user name was empty or whitespace only.
    #[error("{kind} name must not be empty")]
    EmptyName { kind: &'static str },

    /// The alternative is already registered.
    #[error("alternative already exists: {name}")]
    DuplicateAlternative { name: String },

    /// The user is already registered.
    #[error("user already exists: {name}")]
    DuplicateUser { name: String },

    /// No alternative with this name.
    #[error("unknown alternative: {name}")]
    UnknownAlternative { name: String },

    /// No user with this name.
    #[error("unknown user: {name}")]
    UnknownUser { name: String },

    /// Scores must be finite.
    #[error("score for {alt} must be finite, got {value}")]
    NonFiniteScore { alt: String, value: f64 },

    /// Configuration rejected by validation.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PrioritizeError>;
