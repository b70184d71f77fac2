//! Narrative Localization
//!
//! Every piece of advice text exists in exactly three variants. A single
//! resolved [`Language`] selects one of them for the whole document.

use serde::{Deserialize, Serialize};

/// Supported narrative languages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Hinglish,
}

impl Language {
    /// Resolve a language tag. Anything other than `hi` or `hinglish`
    /// (case-insensitive) is English.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "hi" => Self::Hi,
            "hinglish" => Self::Hinglish,
            _ => Self::En,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Hinglish => "hinglish",
        }
    }

    pub const fn pick<'a>(self, english: &'a str, hindi: &'a str, hinglish: &'a str) -> &'a str {
        match self {
            Self::En => english,
            Self::Hi => hindi,
            Self::Hinglish => hinglish,
        }
    }
}

/// Three-way selector over a raw language tag
pub fn text<'a>(language_tag: &str, english: &'a str, hindi: &'a str, hinglish: &'a str) -> &'a str {
    Language::from_tag(language_tag).pick(english, hindi, hinglish)
}

/// A narrative string in all supported languages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phrase {
    pub en: &'static str,
    pub hi: &'static str,
    pub hinglish: &'static str,
}

impl Phrase {
    pub const fn new(en: &'static str, hi: &'static str, hinglish: &'static str) -> Self {
        Self { en, hi, hinglish }
    }

    pub const fn resolve(&self, language: Language) -> &'static str {
        language.pick(self.en, self.hi, self.hinglish)
    }
}
