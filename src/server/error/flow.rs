use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FlowError {
    /// A flow with the same name is already registered.
    #[error("Flow '{0}' is already registered")]
    DuplicateName(String),

    /// Flow names must be non-empty and free of surrounding whitespace.
    #[error("Invalid flow name '{0}'")]
    InvalidName(String),

    /// The flow rejected or failed to process its input.
    #[error("Flow '{name}' failed: {reason}")]
    Execution {
        /// Name of the flow that failed
        name: String,
        /// Failure reported by the flow
        reason: String,
    },
}
