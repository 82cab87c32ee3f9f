//! File-backed [`TextHost`] for terminal use.
//!
//! The active document is a source file loaded into a buffer; prompts are
//! plain stdin lines, with per-step preset answers so flag-driven runs never
//! block on input.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use stringlift::{
    BufferDocument, DocumentEdit, Error, PromptRequest, PromptStep, TextHost,
};

/// Answers supplied up front via command-line flags.
///
/// A preset of `Some("")` reaches the session as an empty submission, which
/// cancels the run — the flag equivalent of dismissing the prompt.
#[derive(Debug, Clone, Default)]
pub struct PresetAnswers {
    pub foreign_text: Option<String>,
    pub base_text: Option<String>,
    pub key_name: Option<String>,
}

impl PresetAnswers {
    fn for_step(&self, step: PromptStep) -> Option<&String> {
        match step {
            PromptStep::ForeignText => self.foreign_text.as_ref(),
            PromptStep::BaseText => self.base_text.as_ref(),
            PromptStep::KeyName => self.key_name.as_ref(),
        }
    }
}

/// Terminal host: buffered document, workspace root, preset or stdin prompts.
#[derive(Debug)]
pub struct ConsoleHost {
    document: BufferDocument,
    root: Option<PathBuf>,
    presets: PresetAnswers,
}

impl ConsoleHost {
    pub fn new(document: BufferDocument, root: Option<PathBuf>, presets: PresetAnswers) -> Self {
        ConsoleHost {
            document,
            root,
            presets,
        }
    }

    pub fn document(&self) -> &BufferDocument {
        &self.document
    }

    /// Reads one answer from stdin. An empty line accepts the prefill;
    /// end-of-input dismisses the prompt.
    fn read_answer(&self, request: &PromptRequest) -> Option<String> {
        print!("{} [{}]: ", request.title, request.prefill);
        io::stdout().flush().ok()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line).ok()?;
        if read == 0 {
            return None;
        }
        let line = line.trim_end_matches(['\n', '\r']);
        if line.is_empty() {
            Some(request.prefill.clone())
        } else {
            Some(line.to_string())
        }
    }
}

impl TextHost for ConsoleHost {
    fn document_text(&self) -> Option<String> {
        Some(self.document.text().to_string())
    }

    fn line_text(&self, index: usize) -> Option<String> {
        self.document.line(index).map(str::to_string)
    }

    fn apply_edit(&mut self, edit: &DocumentEdit) -> Result<(), Error> {
        self.document.apply(edit)
    }

    fn prompt(&mut self, request: &PromptRequest) -> Option<String> {
        if let Some(preset) = self.presets.for_step(request.step) {
            return Some(preset.clone());
        }
        self.read_answer(request)
    }

    fn workspace_root(&self) -> Option<PathBuf> {
        self.root.clone()
    }
}
