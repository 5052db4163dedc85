//! Type-safe language identifiers.
//!
//! The site ships with one canonical language (English, the language the
//! seeded content document is written in) and one translation target
//! (Spanish). All translated documents are derived from the canonical one.

use anyhow::{bail, Result};

/// A supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// English, the canonical source language.
    En,
    /// Spanish, the translation target.
    Es,
}

impl Language {
    /// The canonical (source) language.
    pub fn canonical() -> Language {
        Language::En
    }

    /// Create a Language from an ISO 639-1 code.
    pub fn from_code(code: &str) -> Result<Language> {
        match code {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            other => bail!("Unknown language code: '{}'", other),
        }
    }

    /// The ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// The English name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Spanish",
        }
    }

    /// The language name in its native form.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
        }
    }

    /// Whether this is the canonical source language.
    pub fn is_canonical(&self) -> bool {
        *self == Language::canonical()
    }
}
