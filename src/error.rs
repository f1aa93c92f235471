use thiserror::Error;

/// Convenience result type for synthesis and processing operations.
pub type HofResult<T> = Result<T, HofError>;

/// Error type returned across the crate.
///
/// Shape problems are reported when a callable is synthesized, before any element is touched.
/// Everything else surfaces at call time.
#[derive(Debug, Error)]
pub enum HofError {
    /// The requested callable shape does not fit the operation (arity, element or accumulator
    /// types).
    #[error("shape mismatch: {message}")]
    ShapeMismatch { message: String },

    /// A textual signature could not be parsed.
    #[error("invalid signature at offset {offset}: {message}")]
    InvalidSignature { offset: usize, message: String },

    /// A JSON signature descriptor could not be decoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value crossing a call boundary does not have the declared type.
    #[error("type mismatch: {message}")]
    TypeMismatch { message: String },

    /// Reduce without a seed was called on an empty sequence.
    #[error("cannot reduce an empty sequence without a seed")]
    EmptyReduce,

    /// A slot was invoked before anything was installed into it.
    #[error("no implementation installed for slot '{signature}'")]
    SlotEmpty { signature: String },

    /// The supplied transform, predicate or combiner failed.
    #[error("user function failed: {0}")]
    UserFunction(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl HofError {
    /// Wrap an arbitrary error raised by a user-supplied function.
    pub fn user(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::UserFunction(err.into())
    }

    pub(crate) fn shape(message: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            message: message.into(),
        }
    }

    pub(crate) fn type_mismatch(message: impl Into<String>) -> Self {
        Self::TypeMismatch {
            message: message.into(),
        }
    }
}
