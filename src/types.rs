//! Alphabet kinds, character universes, and engine configuration.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// The digits `0-9`.
pub const NUMBERS: &str = "0123456789";

/// The lowercase Latin letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// The uppercase Latin letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The 32 ASCII punctuation symbols.
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// The base64 alphabet including `+`, `/`, and the `=` padding symbol.
pub const BASE64: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=";

/// Lowercase letters, then uppercase letters, then digits.
pub const ALPHANUMERIC: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// [`ALPHANUMERIC`], then [`SYMBOLS`], then the space character.
pub const ASCII: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ\
                         0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~ ";

/// Canonical kind names, in the fixed order used by error listings.
pub const KIND_NAMES: [&str; 8] = [
    "numbers",
    "custom",
    "lowercase",
    "uppercase",
    "symbols",
    "base64",
    "alphanumeric",
    "ascii",
];

/// The selectable alphabet kinds.
///
/// Each built-in kind resolves to one of the fixed universe constants above;
/// [`Custom`](AlphabetKind::Custom) resolves to a caller-supplied universe.
/// The kind is fixed once an engine is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlphabetKind {
    /// [`NUMBERS`].
    Numbers,
    /// A caller-supplied universe.
    Custom,
    /// [`LOWERCASE`].
    Lowercase,
    /// [`UPPERCASE`].
    Uppercase,
    /// [`SYMBOLS`].
    Symbols,
    /// [`BASE64`]. The default kind.
    Base64,
    /// [`ALPHANUMERIC`].
    Alphanumeric,
    /// [`ASCII`].
    Ascii,
}

impl AlphabetKind {
    /// Parses a canonical kind name. Matching is case-sensitive.
    ///
    /// # Arguments
    ///
    /// * `name` - One of the names in [`KIND_NAMES`]
    ///
    /// # Returns
    ///
    /// The matching kind, or `None` for an unrecognized name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "numbers" => Some(Self::Numbers),
            "custom" => Some(Self::Custom),
            "lowercase" => Some(Self::Lowercase),
            "uppercase" => Some(Self::Uppercase),
            "symbols" => Some(Self::Symbols),
            "base64" => Some(Self::Base64),
            "alphanumeric" => Some(Self::Alphanumeric),
            "ascii" => Some(Self::Ascii),
            _ => None,
        }
    }

    /// Returns the canonical lowercase name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Numbers => "numbers",
            Self::Custom => "custom",
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
            Self::Symbols => "symbols",
            Self::Base64 => "base64",
            Self::Alphanumeric => "alphanumeric",
            Self::Ascii => "ascii",
        }
    }
}

impl fmt::Display for AlphabetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Custom alphabet characters as supplied in an options record.
///
/// The original options object is duck-typed, so a deserialized `characters`
/// field may arrive as a string or as a list. Only the string form is valid;
/// the list form exists to be rejected with
/// [`ConfigError::InvalidCharacterType`] at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Characters {
    /// A plain string of symbols, the only accepted form.
    Text(String),
    /// A list, rejected even when non-empty.
    List(Vec<String>),
}

impl From<&str> for Characters {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Characters {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Configuration record for [`Engine::new`](crate::Engine::new).
///
/// Mirrors the options object of the original interface: every field is
/// optional and unset fields take the documented defaults (base64 alphabet,
/// lenient mode, no default secret).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Alphabet kind name; one of [`KIND_NAMES`]. Defaults to `base64`.
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Strict mode: when `true`, message characters outside the alphabet are
    /// rejected instead of passed through. Defaults to `false`.
    pub strict: bool,

    /// Custom universe; required (as a non-empty string) when `kind` is
    /// `custom`, ignored otherwise.
    pub characters: Option<Characters>,

    /// Default secret for calls that omit their own.
    pub secret: Option<String>,
}

/// A resolved character universe: the ordered symbols shifting arithmetic is
/// defined over, plus a position index built once at construction.
///
/// Position lookup is first-occurrence: when a custom universe contains
/// duplicate symbols, every occurrence maps to the index of the first one,
/// while the symbol table still addresses each slot by index.
#[derive(Debug, Clone)]
pub struct Alphabet {
    kind: AlphabetKind,
    text: String,
    symbols: Vec<char>,
    positions: HashMap<char, usize>,
}

impl Alphabet {
    /// Resolves an alphabet kind (plus custom characters, when applicable)
    /// into a usable universe.
    ///
    /// # Arguments
    ///
    /// * `kind` - The selected alphabet kind
    /// * `characters` - The `characters` option; only consulted for
    ///   [`AlphabetKind::Custom`]
    ///
    /// # Errors
    ///
    /// For the custom kind: [`ConfigError::MissingCharacters`] when
    /// `characters` is absent or an empty string, and
    /// [`ConfigError::InvalidCharacterType`] when it is a list.
    pub fn resolve(
        kind: AlphabetKind,
        characters: Option<&Characters>,
    ) -> Result<Self, ConfigError> {
        let text = match kind {
            AlphabetKind::Numbers => NUMBERS,
            AlphabetKind::Lowercase => LOWERCASE,
            AlphabetKind::Uppercase => UPPERCASE,
            AlphabetKind::Symbols => SYMBOLS,
            AlphabetKind::Base64 => BASE64,
            AlphabetKind::Alphanumeric => ALPHANUMERIC,
            AlphabetKind::Ascii => ASCII,
            AlphabetKind::Custom => match characters {
                None => return Err(ConfigError::MissingCharacters),
                Some(Characters::List(_)) => {
                    return Err(ConfigError::InvalidCharacterType);
                }
                Some(Characters::Text(text)) if text.is_empty() => {
                    return Err(ConfigError::MissingCharacters);
                }
                Some(Characters::Text(text)) => text.as_str(),
            },
        };
        Ok(Self::from_text(kind, text))
    }

    fn from_text(kind: AlphabetKind, text: &str) -> Self {
        let symbols: Vec<char> = text.chars().collect();
        let mut positions = HashMap::with_capacity(symbols.len());
        for (i, &c) in symbols.iter().enumerate() {
            // first occurrence wins for duplicate symbols
            positions.entry(c).or_insert(i);
        }
        Self {
            kind,
            text: text.to_string(),
            symbols,
            positions,
        }
    }

    /// Returns the kind this universe was resolved from.
    pub fn kind(&self) -> AlphabetKind {
        self.kind
    }

    /// Returns the universe as the string it was defined by.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the number of symbols, i.e. the shift modulus.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the universe has no symbols. Never true for an
    /// alphabet obtained through [`resolve`](Self::resolve).
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the position of `symbol`, first occurrence winning, or `None`
    /// for a symbol outside the universe.
    pub fn position(&self, symbol: char) -> Option<usize> {
        self.positions.get(&symbol).copied()
    }

    /// Returns `true` if `symbol` belongs to the universe.
    pub fn contains(&self, symbol: char) -> bool {
        self.positions.contains_key(&symbol)
    }

    pub(crate) fn symbols(&self) -> &[char] {
        &self.symbols
    }
}
