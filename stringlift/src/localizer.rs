//! The localization routine: detect a literal on one source line, collect
//! translations, append resource entries, and rewrite the line to reference
//! the generated key.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use crate::{
    arb::{self, ArbEntry},
    error::Error,
    host::{DocumentEdit, LineSpan, PromptStep, TextHost},
    literal::{find_literal, find_marker},
    locale::Locale,
    plural,
    session::{PromptSession, SessionOutcome},
};

/// Import statement inserted when the document does not already reference
/// the generated localization class.
pub const GEN_L10N_IMPORT: &str =
    "import 'package:flutter_gen/gen_l10n/app_localizations.dart';";

/// Configuration for one [`Localizer`].
///
/// The defaults reproduce the Flutter `gen_l10n` convention this tool was
/// built for: German and English resources under `lib/l10n`, accessed
/// through `AppLocalizations`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizerConfig {
    /// Locale of the first (foreign-language) resource file.
    pub foreign: Locale,
    /// Locale of the second (base-language) resource file; key derivation
    /// and placeholder metadata follow this one.
    pub base: Locale,
    /// Resource directory, relative to the workspace root.
    pub l10n_dir: PathBuf,
    /// Name of the generated accessor class.
    pub accessor_class: String,
    /// Import line to insert when absent from the document.
    pub import_line: String,
}

impl Default for LocalizerConfig {
    fn default() -> Self {
        LocalizerConfig {
            foreign: Locale::new("de").expect("static locale"),
            base: Locale::new("en").expect("static locale"),
            l10n_dir: PathBuf::from("lib/l10n"),
            accessor_class: "AppLocalizations".to_string(),
            import_line: GEN_L10N_IMPORT.to_string(),
        }
    }
}

impl LocalizerConfig {
    /// Resource-file path for `locale` under `root`.
    pub fn arb_path(&self, root: &Path, locale: &Locale) -> PathBuf {
        root.join(&self.l10n_dir).join(locale.arb_file_name())
    }
}

/// Why a run ended without touching anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No active document is open.
    NoDocument,
    /// No line index was provided with the invocation.
    NoLineIndex,
    /// The provided line index is past the end of the document.
    LineOutOfRange,
    /// The line holds no quoted literal.
    NoLiteral,
    /// No workspace root is available to resolve resource-file paths.
    NoWorkspaceRoot,
    /// The operator dismissed one of the prompts.
    Cancelled(PromptStep),
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NoDocument => write!(f, "no active document"),
            SkipReason::NoLineIndex => write!(f, "no line index provided"),
            SkipReason::LineOutOfRange => write!(f, "line index out of range"),
            SkipReason::NoLiteral => write!(f, "no string literal on this line"),
            SkipReason::NoWorkspaceRoot => write!(f, "no workspace root available"),
            SkipReason::Cancelled(step) => {
                let step = match step {
                    PromptStep::ForeignText => "foreign-text",
                    PromptStep::BaseText => "base-text",
                    PromptStep::KeyName => "key-name",
                };
                write!(f, "cancelled at the {} prompt", step)
            }
        }
    }
}

/// A successfully applied localization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// The confirmed key name.
    pub key: String,
    /// The accessor expression the literal was replaced with.
    pub replacement: String,
    /// Foreign-language resource file that gained an entry.
    pub foreign_file: PathBuf,
    /// Base-language resource file that gained an entry (and placeholder
    /// metadata when a marker was present).
    pub base_file: PathBuf,
    /// Whether the import line was inserted by this run.
    pub import_added: bool,
    /// Whether a substitution marker was detected and recorded.
    pub has_placeholder: bool,
}

/// Result of one localization attempt. Skips are not errors: every
/// precondition failure and cancellation is a silent no-op by design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied(Applied),
    Skipped(SkipReason),
}

/// Drives the end-to-end flow against a [`TextHost`].
#[derive(Debug, Clone, Default)]
pub struct Localizer {
    config: LocalizerConfig,
}

impl Localizer {
    pub fn new(config: LocalizerConfig) -> Self {
        Localizer { config }
    }

    pub fn config(&self) -> &LocalizerConfig {
        &self.config
    }

    /// Localizes the first quoted literal on the given line of the host's
    /// active document.
    ///
    /// `line` is the 0-based line index; `None` means no line was provided
    /// with the invocation and the run is a no-op. Line 0 is a valid target.
    ///
    /// Resource-file appends happen before the document edit and are not
    /// transactional with it: an edit failure leaves the appends in place.
    pub fn localize_line<H: TextHost>(
        &self,
        host: &mut H,
        line: Option<usize>,
    ) -> Result<Outcome, Error> {
        let Some(document_text) = host.document_text() else {
            return Ok(Outcome::Skipped(SkipReason::NoDocument));
        };
        let Some(index) = line else {
            return Ok(Outcome::Skipped(SkipReason::NoLineIndex));
        };
        let Some(line_text) = host.line_text(index) else {
            return Ok(Outcome::Skipped(SkipReason::LineOutOfRange));
        };
        let Some(literal) = find_literal(&line_text) else {
            return Ok(Outcome::Skipped(SkipReason::NoLiteral));
        };
        let Some(root) = host.workspace_root() else {
            return Ok(Outcome::Skipped(SkipReason::NoWorkspaceRoot));
        };

        let marker = find_marker(&literal.inner);
        let rule = plural::rule_for(self.config.base.language_identifier());

        let prefill = match &marker {
            Some(marker) => literal
                .inner
                .replacen(marker.token(), &rule.render_template(), 1),
            None => literal.inner.clone(),
        };

        let session = PromptSession::new(
            self.config.foreign.display_name(),
            self.config.base.display_name(),
        );
        let values = match session.run(host, &prefill) {
            SessionOutcome::Completed(values) => values,
            SessionOutcome::Cancelled(step) => {
                return Ok(Outcome::Skipped(SkipReason::Cancelled(step)));
            }
        };

        let foreign_file = self.config.arb_path(&root, &self.config.foreign);
        let base_file = self.config.arb_path(&root, &self.config.base);

        arb::append_entry(
            &foreign_file,
            &ArbEntry::value(&values.key, &values.foreign_text),
        )?;
        arb::append_entry(&base_file, &ArbEntry::value(&values.key, &values.base_text))?;
        if marker.is_some() {
            arb::append_entry(
                &base_file,
                &ArbEntry::placeholder_meta(&values.key, rule.placeholder.clone()),
            )?;
        }

        let accessor = format!("{}.of(context)", self.config.accessor_class);
        let replacement = match &marker {
            Some(marker) => format!("{}.{}({})", accessor, values.key, marker.argument_name()),
            None => format!("{}.{}", accessor, values.key),
        };

        let import_added = !document_text.contains(&self.config.import_line);
        let edit = DocumentEdit {
            span: LineSpan {
                line: index,
                start: literal.start,
                end: literal.end,
            },
            replacement: replacement.clone(),
            prepend: import_added.then(|| format!("{}\n", self.config.import_line)),
        };
        host.apply_edit(&edit)?;

        Ok(Outcome::Applied(Applied {
            key: values.key,
            replacement,
            foreign_file,
            base_file,
            import_added,
            has_placeholder: marker.is_some(),
        }))
    }
}
