//! Locale handling for resource-file naming and prompt titles.

use std::{fmt::Display, str::FromStr};

use unic_langid::LanguageIdentifier;

use crate::error::Error;

/// A locale participating in the localization flow.
///
/// Wraps a BCP 47 language identifier and carries the `app_<lang>.arb`
/// file-naming convention used by Flutter's `gen_l10n` tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    id: LanguageIdentifier,
}

impl Locale {
    pub fn new(code: &str) -> Result<Self, Error> {
        let id: LanguageIdentifier = code
            .parse()
            .map_err(|_| Error::InvalidLocale(code.to_string()))?;
        Ok(Locale { id })
    }

    pub fn language_identifier(&self) -> &LanguageIdentifier {
        &self.id
    }

    /// Base language subtag, e.g. `de` for `de-AT`.
    pub fn language(&self) -> &str {
        self.id.language.as_str()
    }

    /// Resource file name for this locale, e.g. `app_de.arb`.
    pub fn arb_file_name(&self) -> String {
        format!("app_{}.arb", self.language())
    }

    /// English display name used in prompt titles.
    ///
    /// Curated for the languages this tool is typically pointed at; anything
    /// else falls back to the language subtag itself.
    pub fn display_name(&self) -> &str {
        match self.language() {
            "de" => "German",
            "en" => "English",
            "fr" => "French",
            "es" => "Spanish",
            "it" => "Italian",
            "pt" => "Portuguese",
            "nl" => "Dutch",
            "pl" => "Polish",
            "ru" => "Russian",
            "ja" => "Japanese",
            "zh" => "Chinese",
            "ko" => "Korean",
            _ => self.language(),
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::new(s)
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
