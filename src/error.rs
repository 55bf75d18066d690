//! Error types for the Routel scanner

use thiserror::Error;

/// Errors reported by the strict batch-scanning API.
///
/// The pull-based scanner itself never fails: malformed input degrades to
/// `Illegal` tokens and scanning continues. Only
/// [`Scanner::scan_tokens`](crate::Scanner::scan_tokens), which treats any
/// scan-time diagnostic as fatal, surfaces these.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// An `Illegal` token was produced while draining a scanner.
    ///
    /// **Triggered by:** unrecognized characters, unknown `$`/`@` names,
    /// malformed numeric literals, unterminated strings
    /// **Example:** `$bogus`, `12a`, `let s = 'oops`
    #[error("illegal token {lexeme:?}")]
    IllegalToken {
        /// Literal text of the offending lexeme, when the scanner captured
        /// one (empty for single unrecognized characters and sigil names).
        lexeme: String,
    },
}

/// Result type for Routel scanning operations
pub type Result<T> = std::result::Result<T, Error>;
