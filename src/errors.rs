//! Error types for engine construction and per-call validation.

use thiserror::Error;

/// Errors raised while resolving [`crate::EngineOptions`] into an engine.
///
/// All construction errors are terminal: the engine is never partially
/// built, and none of these conditions is retryable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The requested alphabet type is not one of the recognized kinds.
    #[error(
        "invalid alphabet type \"{0}\"; expected one of: numbers, custom, \
         lowercase, uppercase, symbols, base64, alphanumeric, ascii"
    )]
    InvalidType(String),

    /// The `custom` alphabet type was selected without supplying characters.
    #[error("custom alphabet requires a non-empty characters string")]
    MissingCharacters,

    /// Custom characters were supplied as a list rather than a string.
    #[error("custom alphabet characters must be supplied as a string")]
    InvalidCharacterType,
}

/// Errors raised while validating a secret or message on an encode/decode
/// call. The call produces no partial output when one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The secret (explicit or configured default) is absent or empty.
    #[error("secret must be a non-empty string")]
    EmptySecret,

    /// The message is empty.
    #[error("message must be a non-empty string")]
    EmptyMessage,

    /// A secret character has no position in the configured alphabet.
    /// Enforced on every call regardless of strict mode, since the secret
    /// drives the shift arithmetic.
    #[error("secret character '{ch}' is not in the \"{alphabet}\" alphabet")]
    IllegalSecretCharacter {
        /// The offending character.
        ch: char,
        /// The full universe the character was checked against.
        alphabet: String,
    },

    /// A message character has no position in the configured alphabet.
    /// Only raised in strict mode; lenient mode passes it through instead.
    #[error("message character '{ch}' is not in the \"{alphabet}\" alphabet")]
    IllegalMessageCharacter {
        /// The offending character.
        ch: char,
        /// The full universe the character was checked against.
        alphabet: String,
    },
}
