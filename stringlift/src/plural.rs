//! Substitution-rule table for marker replacement.
//!
//! When a literal carries a `$`-marker, its prefill text substitutes the
//! marker with an ICU plural template, and the base-language resource file
//! gains placeholder metadata for the generated key. Both come from a rule
//! table keyed by base language subtag, so the single built-in convention is
//! data rather than control flow.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use unic_langid::LanguageIdentifier;

/// A typed placeholder recorded in resource-file metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub name: String,
    pub kind: String,
}

impl Placeholder {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Placeholder {
            name: name.into(),
            kind: kind.into(),
        }
    }
}

/// A per-language substitution rule: the placeholder it declares and the
/// plural template it renders into the prompt prefill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRule {
    pub placeholder: Placeholder,
}

impl SubstitutionRule {
    fn counted(name: &str) -> Self {
        SubstitutionRule {
            placeholder: Placeholder::new(name, "int"),
        }
    }

    /// Renders the plural template a detected marker is replaced with.
    ///
    /// For the English rule with placeholder `n` this is exactly
    /// `{n, plural, =1{one n} other{{n} ns}}`.
    pub fn render_template(&self) -> String {
        let n = &self.placeholder.name;
        format!("{{{n}, plural, =1{{one {n}}} other{{{{{n}}} {n}s}}}}")
    }
}

lazy_static! {
    /// Static mapping from base language subtag → substitution rule.
    ///
    /// Only English is populated; this tool targets a single toolchain
    /// convention and its one-vs-other plural shape.
    static ref RULE_TABLE: BTreeMap<&'static str, SubstitutionRule> = {
        let mut m = BTreeMap::new();
        m.insert("en", SubstitutionRule::counted("n"));
        m
    };
}

/// Returns the substitution rule for a language identifier.
///
/// Unknown locales fall back to the English rule, preserving the single
/// built-in convention.
pub fn rule_for(lang: &LanguageIdentifier) -> SubstitutionRule {
    let lang_str = lang.language.as_str();
    RULE_TABLE
        .get(lang_str)
        .cloned()
        .unwrap_or_else(|| RULE_TABLE["en"].clone())
}

/// Helper for string language codes (accepts underscores, normalizes to hyphen).
pub fn rule_for_str(lang: &str) -> SubstitutionRule {
    let normalized = lang.replace('_', "-");
    let parsed: LanguageIdentifier = normalized.parse().unwrap_or_else(|_| "und".parse().unwrap());
    rule_for(&parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_template_shape() {
        let rule = rule_for_str("en");
        assert_eq!(
            rule.render_template(),
            "{n, plural, =1{one n} other{{n} ns}}"
        );
    }

    #[test]
    fn test_english_placeholder_metadata() {
        let rule = rule_for_str("en");
        assert_eq!(rule.placeholder.name, "n");
        assert_eq!(rule.placeholder.kind, "int");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        let rule = rule_for_str("ja");
        assert_eq!(rule, rule_for_str("en"));
    }

    #[test]
    fn test_rule_for_region_variant() {
        let lang: LanguageIdentifier = "en-GB".parse().unwrap();
        assert_eq!(rule_for(&lang), rule_for_str("en"));
    }

    #[test]
    fn test_rule_for_str_with_underscore() {
        let rule = rule_for_str("en_US");
        assert_eq!(rule.placeholder.name, "n");
    }
}
