#![forbid(unsafe_code)]
//! Lift hard-coded string literals out of Flutter/Dart sources into ARB
//! localization resources.
//!
//! Given one line of a source file, stringlift detects the first quoted
//! literal, collects a foreign and a base translation plus a key name
//! through its host's prompts, appends entries to the per-locale `.arb`
//! files, and rewrites the literal into an `AppLocalizations` accessor call,
//! inserting the generated-localizations import when it is missing.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stringlift::{Localizer, MemoryHost, PromptAnswer};
//!
//! let mut host = MemoryHost::new()
//!     .with_document("return Text('Hello');")
//!     .with_root("/path/to/project")
//!     .with_answers([
//!         PromptAnswer::Submit("Hallo".to_string()),
//!         PromptAnswer::Submit("Hello".to_string()),
//!         PromptAnswer::AcceptDefault,
//!     ]);
//!
//! let outcome = Localizer::default().localize_line(&mut host, Some(0))?;
//! # Ok::<(), stringlift::Error>(())
//! ```
//!
//! All host interaction goes through the [`host::TextHost`] trait, so the
//! same flow runs behind an editor command, a CLI, or an in-memory script.

pub mod arb;
pub mod error;
pub mod host;
pub mod key;
pub mod literal;
pub mod locale;
pub mod localizer;
pub mod plural;
pub mod quickfix;
pub mod session;

// Re-export most used types for easy consumption
pub use crate::{
    arb::ArbEntry,
    error::Error,
    host::{
        BufferDocument, DocumentEdit, LineSpan, MemoryHost, PromptAnswer, PromptRequest,
        PromptStep, TextHost,
    },
    key::derive_key,
    literal::{LiteralMatch, Marker, find_literal, find_marker},
    locale::Locale,
    localizer::{Applied, Localizer, LocalizerConfig, Outcome, SkipReason},
    quickfix::{CodeAction, actions_for_line},
};
