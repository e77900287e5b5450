// Cifra Test Fixture Protocol
// JSON case files consumed by the round-trip contract checks

use std::path::Path;

use serde::Deserialize;

use crate::transform::CipherEngine;

/// Errors raised while loading a fixture file
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Root of a fixture file
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureFile {
    /// Cases to run, in file order
    #[serde(default)]
    pub tests: Vec<FixtureCase>,
}

/// A single fixture case.
///
/// A missing shift is treated as zero; a missing language tag selects the
/// engine's default alphabet.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureCase {
    /// Text to round-trip
    pub input: String,

    /// Signed shift offset
    #[serde(default)]
    pub shift: i64,

    /// Alphabet tag
    #[serde(default)]
    pub lang: Option<String>,

    /// Expected canonical form of `input`; computed by the engine if absent
    #[serde(default)]
    pub normalized: Option<String>,
}

impl FixtureFile {
    /// Load and deserialize a fixture file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Deserialize a fixture from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(content)?)
    }
}

impl FixtureCase {
    /// Alphabet this case runs under, falling back to `default`.
    pub fn alphabet_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.lang.as_deref().unwrap_or(default)
    }

    /// Check the round-trip contract for this case against an engine.
    ///
    /// `decrypt(encrypt(input, shift), shift)` must equal the expected
    /// canonical form of the input: the `normalized` field when present,
    /// otherwise the engine's own canonicalization.
    pub fn check(&self, engine: &CipherEngine) -> bool {
        let alphabet = self.alphabet_or(engine.default_alphabet());
        let encrypted = engine.encrypt(&self.input, self.shift, alphabet);
        let decrypted = engine.decrypt(&encrypted, self.shift, alphabet);
        let expected = match &self.normalized {
            Some(normalized) => normalized.clone(),
            None => engine.canonical_text(&self.input, alphabet),
        };
        decrypted == expected
    }
}
