//! CLI-level errors: everything that can go wrong before the search core
//! ever sees a board.

use blobwar_core::DeserializeError;

/// Errors raised while parsing and validating the three positional
/// arguments.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The board, hole mask, or player index failed to parse.
    #[error("failed to parse {what}: {source}")]
    Deserialize {
        /// Which argument failed (`"board"`, `"holes"`, or `"player"`).
        what: &'static str,
        /// The underlying parse error.
        #[source]
        source: DeserializeError,
    },
}
