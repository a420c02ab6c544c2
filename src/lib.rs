//! # tabula
//!
//! A configurable Vigenère-style polyalphabetic substitution cipher for
//! encoding and decoding text against a repeating secret key, over a
//! selectable character alphabet.
//!
//! ## Alphabets
//!
//! - **numbers:** the digits `0-9`
//! - **lowercase** / **uppercase:** the Latin letters
//! - **symbols:** the 32 ASCII punctuation symbols
//! - **base64:** `A-Z a-z 0-9 + / =` (the default)
//! - **alphanumeric:** lowercase + uppercase + digits
//! - **ascii:** alphanumeric + symbols + space
//! - **custom:** any caller-supplied string of symbols
//!
//! ## Features
//!
//! - Shift arithmetic modulo the alphabet size, generalizing the classical
//!   26-letter Vigenère cipher to arbitrary symbol universes
//! - Lenient mode passes characters outside the alphabet through unchanged
//!   without disturbing the keystream phase; strict mode rejects them
//! - Secrets are always validated against the alphabet, strict or not
//! - A default secret can be configured and overridden per call
//!
//! ## Example
//!
//! ```rust
//! use tabula::{Engine, EngineOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = Engine::new(EngineOptions {
//!     kind: Some("lowercase".to_string()),
//!     ..Default::default()
//! })?;
//!
//! let encoded = engine.encode_with("hello", "key")?;
//! assert_eq!(encoded, "rijvs");
//!
//! let decoded = engine.decode_with(&encoded, "key")?;
//! assert_eq!(decoded, "hello");
//! # Ok(())
//! # }
//! ```
//!
//! ## Security Considerations
//!
//! This is a keyed symmetric transform, not encryption. A repeating-key
//! substitution cipher is trivially breakable and offers obfuscation or
//! puzzle-grade transformation only; do not use it where confidentiality
//! matters.

mod cipher;
mod errors;
mod types;

pub use cipher::Engine;
pub use errors::{ConfigError, ValidationError};
pub use types::*;
