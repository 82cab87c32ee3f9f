//! The ordered three-step prompt sequence of a localization run.
//!
//! Each step produces a value or a cancellation that short-circuits the
//! remaining steps. An empty submission counts as a cancellation, so a
//! confirmed key name is always non-empty.

use crate::{
    host::{PromptRequest, PromptStep, TextHost},
    key::derive_key,
};

/// The three confirmed values of a completed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionValues {
    pub foreign_text: String,
    pub base_text: String,
    pub key: String,
}

/// Result of running the prompt sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed(SessionValues),
    Cancelled(PromptStep),
}

/// Prompt titles for one run, derived from the configured locale pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSession {
    foreign_title: String,
    base_title: String,
}

impl PromptSession {
    pub fn new(foreign_display_name: &str, base_display_name: &str) -> Self {
        PromptSession {
            foreign_title: format!("{} Text", foreign_display_name),
            base_title: format!("{} Text", base_display_name),
        }
    }

    /// Runs the sequence: foreign text, base text, then the key name
    /// pre-filled with a default derived from the base text.
    pub fn run<H: TextHost>(&self, host: &mut H, prefill: &str) -> SessionOutcome {
        let Some(foreign_text) = self.ask(host, PromptStep::ForeignText, &self.foreign_title, prefill)
        else {
            return SessionOutcome::Cancelled(PromptStep::ForeignText);
        };

        let Some(base_text) = self.ask(host, PromptStep::BaseText, &self.base_title, prefill) else {
            return SessionOutcome::Cancelled(PromptStep::BaseText);
        };

        let default_key = derive_key(&base_text);
        let Some(key) = self.ask(host, PromptStep::KeyName, "Localization Name", &default_key)
        else {
            return SessionOutcome::Cancelled(PromptStep::KeyName);
        };

        SessionOutcome::Completed(SessionValues {
            foreign_text,
            base_text,
            key,
        })
    }

    fn ask<H: TextHost>(
        &self,
        host: &mut H,
        step: PromptStep,
        title: &str,
        prefill: &str,
    ) -> Option<String> {
        let request = PromptRequest {
            step,
            title: title.to_string(),
            prefill: prefill.to_string(),
        };
        match host.prompt(&request) {
            Some(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MemoryHost, PromptAnswer};

    fn session() -> PromptSession {
        PromptSession::new("German", "English")
    }

    #[test]
    fn test_completed_session() {
        let mut host = MemoryHost::new().with_document("").with_answers([
            PromptAnswer::Submit("Hallo".to_string()),
            PromptAnswer::Submit("Hello".to_string()),
            PromptAnswer::AcceptDefault,
        ]);

        let outcome = session().run(&mut host, "Hello");
        assert_eq!(
            outcome,
            SessionOutcome::Completed(SessionValues {
                foreign_text: "Hallo".to_string(),
                base_text: "Hello".to_string(),
                key: "hello".to_string(),
            })
        );

        let titles: Vec<_> = host.prompts_seen().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["German Text", "English Text", "Localization Name"]);
    }

    #[test]
    fn test_key_prompt_prefilled_with_derived_default() {
        let mut host = MemoryHost::new().with_document("").with_answers([
            PromptAnswer::AcceptDefault,
            PromptAnswer::Submit("It's a Test! 123".to_string()),
            PromptAnswer::AcceptDefault,
        ]);

        let outcome = session().run(&mut host, "It's a Test! 123");
        let SessionOutcome::Completed(values) = outcome else {
            panic!("expected completion");
        };
        assert_eq!(values.key, "itsATest");
        assert_eq!(host.prompts_seen()[2].prefill, "itsATest");
    }

    #[test]
    fn test_cancel_at_first_prompt() {
        let mut host = MemoryHost::new()
            .with_document("")
            .with_answers([PromptAnswer::Cancel]);

        let outcome = session().run(&mut host, "Hello");
        assert_eq!(outcome, SessionOutcome::Cancelled(PromptStep::ForeignText));
        assert_eq!(host.prompts_seen().len(), 1);
    }

    #[test]
    fn test_cancel_at_second_prompt_stops_sequence() {
        let mut host = MemoryHost::new().with_document("").with_answers([
            PromptAnswer::Submit("Hallo".to_string()),
            PromptAnswer::Cancel,
        ]);

        let outcome = session().run(&mut host, "Hello");
        assert_eq!(outcome, SessionOutcome::Cancelled(PromptStep::BaseText));
        assert_eq!(host.prompts_seen().len(), 2);
    }

    #[test]
    fn test_empty_submission_is_cancellation() {
        let mut host = MemoryHost::new().with_document("").with_answers([
            PromptAnswer::Submit("Hallo".to_string()),
            PromptAnswer::Submit(String::new()),
        ]);

        let outcome = session().run(&mut host, "Hello");
        assert_eq!(outcome, SessionOutcome::Cancelled(PromptStep::BaseText));
    }

    #[test]
    fn test_empty_derived_key_accepted_as_default_cancels() {
        // Letter-free base text derives an empty key; accepting the empty
        // default counts as cancelling the key prompt.
        let mut host = MemoryHost::new().with_document("").with_answers([
            PromptAnswer::Submit("!!!".to_string()),
            PromptAnswer::Submit("123".to_string()),
            PromptAnswer::AcceptDefault,
        ]);

        let outcome = session().run(&mut host, "123");
        assert_eq!(outcome, SessionOutcome::Cancelled(PromptStep::KeyName));
    }
}
