//! Error types for the character sheet engine.

use std::path::PathBuf;

/// Errors that can occur while building, editing, or persisting a character.
///
/// Lookup misses (an ability or skill the character does not have) are never
/// errors; they resolve to `0`, `false`, or `None` at the call site.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    /// A character name was empty or whitespace.
    #[error("character name must not be empty")]
    EmptyName,

    /// A character level was below 1.
    #[error("invalid level {0}: level must be at least 1")]
    InvalidLevel(u32),

    /// A name could not be parsed as one of the six abilities.
    #[error("unknown ability: {0}")]
    UnknownAbility(String),

    /// A name could not be parsed as one of the eighteen skills.
    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    /// Reading or writing a character document failed.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// The file that was being read or written.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// A character document was not valid JSON or did not match the expected shape.
    #[error("malformed character document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for sheet operations.
pub type SheetResult<T> = Result<T, SheetError>;
