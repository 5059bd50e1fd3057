//! Error types for option binding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for an option run.
///
/// Every variant is terminal to the `next_options` call that produced it;
/// fields assigned earlier in the same run keep their values.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum BindError {
    /// Two fields of one destination declared the same alias
    #[error("alias '{0}' is declared by more than one field")]
    DuplicateAlias(String),

    /// An option token named an alias no field declares
    #[error("cannot find option '{0}'")]
    UnknownAlias(String),

    /// A value-consuming option appeared inside a bundled short group
    #[error("cannot use option '{0}' in that form as it requires a value")]
    BundledMultipart(String),

    /// A value-consuming option was the last token of the input
    #[error("option '{0}' was not supplied a value")]
    MissingValue(String),

    /// A value string could not be coerced to the field's type
    #[error("could not convert value '{value}' to {ty}")]
    Conversion {
        /// The raw value token as it appeared on the command line
        value: String,
        /// Name of the type the value was destined for
        ty: String,
    },
}

/// Result type alias for binding operations
pub type Result<T> = std::result::Result<T, BindError>;
