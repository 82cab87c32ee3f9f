//! Quick-fix candidate detection.
//!
//! A host offers a "Localize String" action on any line containing a quote
//! character; invoking it runs the localizer with that line's index. Pure
//! predicate and descriptor construction, no state.

use serde::Serialize;

/// Command identifier a host binds the action invocation to.
pub const LOCALIZE_COMMAND: &str = "stringlift.localizeString";

/// Title shown on the offered action.
pub const ACTION_TITLE: &str = "Localize String";

/// A quick-fix descriptor: which command to run, with which line argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeAction {
    pub title: String,
    pub command: String,
    pub line: usize,
}

/// True if the line could hold a localizable literal (contains a double or
/// single quote character).
pub fn line_has_candidate(line_text: &str) -> bool {
    line_text.contains('"') || line_text.contains('\'')
}

/// Actions offered for one line: zero or one descriptor.
pub fn actions_for_line(line_text: &str, line: usize) -> Vec<CodeAction> {
    let mut actions = Vec::new();
    if line_has_candidate(line_text) {
        actions.push(CodeAction {
            title: ACTION_TITLE.to_string(),
            command: LOCALIZE_COMMAND.to_string(),
            line,
        });
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_with_double_quote_offers_action() {
        let actions = actions_for_line(r#"Text("hi")"#, 4);
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].title, "Localize String");
        assert_eq!(actions[0].command, LOCALIZE_COMMAND);
        assert_eq!(actions[0].line, 4);
    }

    #[test]
    fn test_line_with_single_quote_offers_action() {
        assert_eq!(actions_for_line("Text('hi')", 0).len(), 1);
    }

    #[test]
    fn test_line_without_quotes_offers_nothing() {
        assert!(actions_for_line("final x = 42;", 2).is_empty());
    }

    #[test]
    fn test_lone_quote_still_offers_action() {
        // The predicate is a quote-character check, not a literal match; the
        // localizer itself no-ops when no full literal is present.
        assert_eq!(actions_for_line("// it's a comment", 9).len(), 1);
    }
}
