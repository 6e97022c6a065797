use thiserror::Error;

/// Errors that may occur when evaluating thermodynamic properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The input state is outside the model's valid domain.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The input state falls in a gap between fitted regions.
    ///
    /// The state is physically reasonable but no published coefficient table
    /// covers it, so the model refuses to extrapolate.
    #[error("unimplemented region: {context}")]
    UnimplementedRegion { context: String },

    /// The provided state is invalid or inconsistent.
    #[error("invalid state: {context}")]
    InvalidState { context: String },

    /// The calculation failed due to a numerical or internal error.
    ///
    /// For example, division by zero or a failure to converge.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}
