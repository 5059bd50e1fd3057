//! Sequential command-line token binding.
//!
//! This crate walks an ordered token sequence with a forward-only cursor,
//! classifying each token as positional or option, resolving option names
//! against caller-declared alias lists, and coercing raw values into each
//! field's semantic type. Nested sub-commands share one cursor: the outer
//! command consumes its own option run, the sub-command name arrives as the
//! next positional token, and the sub-command consumes its option run from
//! where the outer one stopped.

mod coerce;
mod cursor;
mod error;
mod schema;

// Re-export core types
pub use cursor::ArgCursor;
pub use error::{BindError, Result};
pub use schema::{Field, FieldTable, OptionSet, Slot};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
