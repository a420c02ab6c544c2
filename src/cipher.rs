use crate::errors::{ConfigError, ValidationError};
use crate::types::{Alphabet, AlphabetKind, EngineOptions};

/// Transform direction: a decode undoes the shift an encode applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encode,
    Decode,
}

/// Polyalphabetic cipher engine over a fixed character universe.
///
/// Construction resolves and validates the alphabet once; the engine is
/// immutable afterwards, so a single instance can be shared freely across
/// threads. Every encode/decode call re-validates its secret and message.
#[derive(Debug, Clone)]
pub struct Engine {
    alphabet: Alphabet,
    strict: bool,
    default_secret: Option<String>,
}

/* ---------------- Validation ---------------- */

/// Resolves a secret into keystream positions, failing on the first
/// character without a position in the universe. The secret check does not
/// depend on strict mode: a secret symbol outside the universe has no index
/// to shift by.
fn secret_positions(
    secret: &str,
    alphabet: &Alphabet,
) -> Result<Vec<usize>, ValidationError> {
    if secret.is_empty() {
        return Err(ValidationError::EmptySecret);
    }
    secret
        .chars()
        .map(|ch| {
            alphabet
                .position(ch)
                .ok_or_else(|| ValidationError::IllegalSecretCharacter {
                    ch,
                    alphabet: alphabet.as_str().to_string(),
                })
        })
        .collect()
}

/// Checks a message against the universe. Lenient mode only rejects empty
/// messages; strict mode also rejects the first out-of-universe character.
fn validate_message(
    message: &str,
    alphabet: &Alphabet,
    strict: bool,
) -> Result<(), ValidationError> {
    if message.is_empty() {
        return Err(ValidationError::EmptyMessage);
    }
    if strict {
        if let Some(ch) = message.chars().find(|&c| !alphabet.contains(c)) {
            return Err(ValidationError::IllegalMessageCharacter {
                ch,
                alphabet: alphabet.as_str().to_string(),
            });
        }
    }
    Ok(())
}

/* ---------------- Transform ---------------- */

/// Applies the per-character modular shift.
///
/// The keystream is keyed by the absolute message index: a pass-through
/// character still advances the keystream phase even though it consumes no
/// shift arithmetic.
fn transform(
    message: &str,
    key: &[usize],
    alphabet: &Alphabet,
    direction: Direction,
) -> String {
    let modulus = alphabet.len();
    let symbols = alphabet.symbols();
    message
        .chars()
        .enumerate()
        .map(|(i, m)| match alphabet.position(m) {
            // out-of-universe characters pass through unchanged
            None => m,
            Some(y) => {
                let x = key[i % key.len()];
                let index = match direction {
                    Direction::Encode => (x + y) % modulus,
                    Direction::Decode => (y + modulus - x) % modulus,
                };
                symbols[index]
            }
        })
        .collect()
}

/* ---------------- Engine ---------------- */

impl Engine {
    /// Builds an engine from an options record.
    ///
    /// An unset `type` selects the base64 alphabet. The `characters` option
    /// is consulted only for the `custom` type.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::InvalidType`] for an unrecognized `type`
    /// * [`ConfigError::MissingCharacters`] for `custom` without a
    ///   non-empty characters string
    /// * [`ConfigError::InvalidCharacterType`] for `custom` characters
    ///   supplied as a list
    ///
    /// # Examples
    ///
    /// ```
    /// use tabula::{Engine, EngineOptions};
    ///
    /// let engine = Engine::new(EngineOptions {
    ///     kind: Some("lowercase".to_string()),
    ///     ..Default::default()
    /// })
    /// .unwrap();
    /// assert_eq!(engine.alphabet(), "abcdefghijklmnopqrstuvwxyz");
    /// ```
    pub fn new(options: EngineOptions) -> Result<Self, ConfigError> {
        let kind = match options.kind.as_deref() {
            None => AlphabetKind::Base64,
            Some(name) => AlphabetKind::from_name(name)
                .ok_or_else(|| ConfigError::InvalidType(name.to_string()))?,
        };
        let alphabet = Alphabet::resolve(kind, options.characters.as_ref())?;
        Ok(Self {
            alphabet,
            strict: options.strict,
            default_secret: options.secret,
        })
    }

    /// Returns the configured alphabet kind.
    pub fn kind(&self) -> AlphabetKind {
        self.alphabet.kind()
    }

    /// Returns the configured character universe as a string.
    pub fn alphabet(&self) -> &str {
        self.alphabet.as_str()
    }

    /// Returns `true` when strict message validation is enabled.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Encodes `message` with the configured default secret.
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptySecret`] when no default secret was
    /// configured, plus everything [`encode_with`](Self::encode_with)
    /// returns.
    pub fn encode(&self, message: &str) -> Result<String, ValidationError> {
        self.run(message, None, Direction::Encode)
    }

    /// Encodes `message` with `secret` as the repeating key.
    ///
    /// Each message character found in the universe is replaced by the
    /// symbol at `(pos(key) + pos(char)) mod len`; characters outside the
    /// universe pass through unchanged (lenient mode) or fail the call
    /// (strict mode).
    ///
    /// # Errors
    ///
    /// * [`ValidationError::EmptySecret`] / [`ValidationError::EmptyMessage`]
    ///   on empty input
    /// * [`ValidationError::IllegalSecretCharacter`] on a secret character
    ///   outside the universe, regardless of strict mode
    /// * [`ValidationError::IllegalMessageCharacter`] on a message character
    ///   outside the universe, in strict mode only
    pub fn encode_with(
        &self,
        message: &str,
        secret: &str,
    ) -> Result<String, ValidationError> {
        self.run(message, Some(secret), Direction::Encode)
    }

    /// Decodes `message` with the configured default secret.
    ///
    /// # Errors
    ///
    /// Same conditions as [`encode`](Self::encode).
    pub fn decode(&self, message: &str) -> Result<String, ValidationError> {
        self.run(message, None, Direction::Decode)
    }

    /// Decodes `message` with `secret` as the repeating key, the exact
    /// inverse of [`encode_with`](Self::encode_with) for the same secret
    /// and universe.
    ///
    /// # Errors
    ///
    /// Same conditions as [`encode_with`](Self::encode_with).
    pub fn decode_with(
        &self,
        message: &str,
        secret: &str,
    ) -> Result<String, ValidationError> {
        self.run(message, Some(secret), Direction::Decode)
    }

    /// Shared encode/decode path: resolve the secret, validate secret then
    /// message, then run the transform.
    fn run(
        &self,
        message: &str,
        secret: Option<&str>,
        direction: Direction,
    ) -> Result<String, ValidationError> {
        let secret = secret
            .or(self.default_secret.as_deref())
            .ok_or(ValidationError::EmptySecret)?;
        let key = secret_positions(secret, &self.alphabet)?;
        validate_message(message, &self.alphabet, self.strict)?;
        Ok(transform(message, &key, &self.alphabet, direction))
    }
}
