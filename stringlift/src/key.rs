//! Key-name derivation from the base-language translation text.

/// Derives a default localization key from translation text.
///
/// The text is trimmed, every character outside letters and spaces is
/// stripped, the remainder is split on single spaces, and at most the first
/// five words are camel-cased together (first word lowercased at its first
/// letter, subsequent words uppercased at theirs, remaining characters left
/// as-is).
///
/// Letter-free input derives an empty key; emptiness is only rejected when
/// the operator confirms the final key name.
pub fn derive_key(text: &str) -> String {
    let stripped: String = text
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect();

    stripped
        .split(' ')
        .take(5)
        .enumerate()
        .map(|(i, word)| recase_word(word, i == 0))
        .collect()
}

fn recase_word(word: &str, lowercase_first: bool) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let first = if lowercase_first {
                first.to_ascii_lowercase()
            } else {
                first.to_ascii_uppercase()
            };
            let mut out = String::with_capacity(word.len());
            out.push(first);
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_key_basic() {
        assert_eq!(derive_key("Welcome message"), "welcomeMessage");
    }

    #[test]
    fn test_derive_key_strips_punctuation_and_digits() {
        assert_eq!(derive_key("It's a Test! 123"), "itsATest");
    }

    #[test]
    fn test_derive_key_limits_to_five_words() {
        assert_eq!(
            derive_key("one two three four five six seven"),
            "oneTwoThreeFourFive"
        );
    }

    #[test]
    fn test_derive_key_single_word() {
        assert_eq!(derive_key("Hello"), "hello");
    }

    #[test]
    fn test_derive_key_preserves_inner_casing() {
        // Only the first letter of each word is recased.
        assert_eq!(derive_key("enable WiFi now"), "enableWiFiNow");
    }

    #[test]
    fn test_derive_key_letter_free_input_is_empty() {
        assert_eq!(derive_key("1234 %!"), "");
        assert_eq!(derive_key(""), "");
    }

    #[test]
    fn test_derive_key_consecutive_spaces_spend_word_slots() {
        // Splitting on single spaces keeps empty words, which still count
        // toward the five-word limit.
        assert_eq!(derive_key("a  b c d e"), "aBCD");
    }
}
