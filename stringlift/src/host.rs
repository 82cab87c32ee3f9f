//! The capability surface a host environment provides to the localizer.
//!
//! All editor interactions — active-document lookup, line text access,
//! range replacement, modal prompts, workspace-root resolution — go through
//! the [`TextHost`] trait. The transformation logic has no dependency on a
//! specific editor; a CLI, a language-server shim, or a test double all plug
//! in here.

use std::{collections::VecDeque, ops::Range, path::PathBuf};

use crate::error::Error;

/// One of the three interactive steps of a localization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStep {
    /// The translated text for the foreign-language resource file.
    ForeignText,
    /// The translated text for the base-language resource file.
    BaseText,
    /// The generated localization key name.
    KeyName,
}

/// A single modal prompt: a title and a pre-filled default value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub step: PromptStep,
    pub title: String,
    pub prefill: String,
}

/// A byte range within one line of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSpan {
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

/// A single atomic document edit: one in-line range replacement, plus an
/// optional text block inserted at the very start of the document.
///
/// Both parts apply together or not at all, from the host's perspective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEdit {
    pub span: LineSpan,
    pub replacement: String,
    pub prepend: Option<String>,
}

/// Narrow capability interface over the host environment.
pub trait TextHost {
    /// Full text of the active document, or `None` if no document is open.
    fn document_text(&self) -> Option<String>;

    /// Text of one line (newline excluded), or `None` when no document is
    /// open or the index is out of range.
    fn line_text(&self, index: usize) -> Option<String>;

    /// Applies one atomic edit to the active document.
    fn apply_edit(&mut self, edit: &DocumentEdit) -> Result<(), Error>;

    /// Shows a modal prompt. Returns the submitted value, or `None` when the
    /// operator dismissed the prompt.
    fn prompt(&mut self, request: &PromptRequest) -> Option<String>;

    /// Root of the first workspace folder, if any.
    fn workspace_root(&self) -> Option<PathBuf>;
}

/// A line-indexed text buffer backing file- and memory-based hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferDocument {
    text: String,
}

impl BufferDocument {
    pub fn new(text: impl Into<String>) -> Self {
        BufferDocument { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Text of line `index`, newline excluded.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.text.split('\n').nth(index)
    }

    /// Byte range of line `index` within the full text, newline excluded.
    fn line_range(&self, index: usize) -> Option<Range<usize>> {
        let mut start = 0usize;
        for (i, line) in self.text.split('\n').enumerate() {
            if i == index {
                return Some(start..start + line.len());
            }
            start += line.len() + 1;
        }
        None
    }

    /// Applies an atomic edit: the in-line replacement first, then the
    /// optional prepend (so the span is interpreted against the unshifted
    /// document).
    pub fn apply(&mut self, edit: &DocumentEdit) -> Result<(), Error> {
        let range = self.line_range(edit.span.line).ok_or_else(|| {
            Error::InvalidEdit(format!("line {} out of range", edit.span.line))
        })?;
        let line_len = range.len();
        if edit.span.start > edit.span.end || edit.span.end > line_len {
            return Err(Error::InvalidEdit(format!(
                "span {}..{} exceeds line {} (length {})",
                edit.span.start, edit.span.end, edit.span.line, line_len
            )));
        }
        let abs = range.start + edit.span.start..range.start + edit.span.end;
        if !self.text.is_char_boundary(abs.start) || !self.text.is_char_boundary(abs.end) {
            return Err(Error::InvalidEdit(format!(
                "span {}..{} splits a character",
                edit.span.start, edit.span.end
            )));
        }
        self.text.replace_range(abs, &edit.replacement);
        if let Some(prepend) = &edit.prepend {
            self.text.insert_str(0, prepend);
        }
        Ok(())
    }
}

/// A scripted answer for one prompt, used by [`MemoryHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAnswer {
    /// Submit this exact value.
    Submit(String),
    /// Submit the prompt's pre-filled default unchanged.
    AcceptDefault,
    /// Dismiss the prompt.
    Cancel,
}

/// In-memory host: a buffer document, a queued prompt script, and an
/// optional workspace root.
///
/// Used for embedding the localizer outside an editor and for driving it in
/// tests. Prompts consume answers front-to-back; an exhausted queue behaves
/// like a dismissed prompt.
#[derive(Debug, Default)]
pub struct MemoryHost {
    document: Option<BufferDocument>,
    answers: VecDeque<PromptAnswer>,
    root: Option<PathBuf>,
    prompts_seen: Vec<PromptRequest>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, text: impl Into<String>) -> Self {
        self.document = Some(BufferDocument::new(text));
        self
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_answers(mut self, answers: impl IntoIterator<Item = PromptAnswer>) -> Self {
        self.answers = answers.into_iter().collect();
        self
    }

    pub fn document(&self) -> Option<&BufferDocument> {
        self.document.as_ref()
    }

    /// Every prompt the localizer issued, in order.
    pub fn prompts_seen(&self) -> &[PromptRequest] {
        &self.prompts_seen
    }
}

impl TextHost for MemoryHost {
    fn document_text(&self) -> Option<String> {
        self.document.as_ref().map(|d| d.text().to_string())
    }

    fn line_text(&self, index: usize) -> Option<String> {
        self.document
            .as_ref()
            .and_then(|d| d.line(index))
            .map(str::to_string)
    }

    fn apply_edit(&mut self, edit: &DocumentEdit) -> Result<(), Error> {
        match self.document.as_mut() {
            Some(doc) => doc.apply(edit),
            None => Err(Error::InvalidEdit("no active document".to_string())),
        }
    }

    fn prompt(&mut self, request: &PromptRequest) -> Option<String> {
        self.prompts_seen.push(request.clone());
        match self.answers.pop_front() {
            Some(PromptAnswer::Submit(value)) => Some(value),
            Some(PromptAnswer::AcceptDefault) => Some(request.prefill.clone()),
            Some(PromptAnswer::Cancel) | None => None,
        }
    }

    fn workspace_root(&self) -> Option<PathBuf> {
        self.root.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(line: usize, start: usize, end: usize, replacement: &str) -> DocumentEdit {
        DocumentEdit {
            span: LineSpan { line, start, end },
            replacement: replacement.to_string(),
            prepend: None,
        }
    }

    #[test]
    fn test_buffer_line_access() {
        let doc = BufferDocument::new("one\ntwo\nthree");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line(0), Some("one"));
        assert_eq!(doc.line(2), Some("three"));
        assert_eq!(doc.line(3), None);
    }

    #[test]
    fn test_buffer_trailing_newline_yields_empty_last_line() {
        let doc = BufferDocument::new("one\n");
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.line(1), Some(""));
    }

    #[test]
    fn test_apply_replacement() {
        let mut doc = BufferDocument::new("say('hi');\nnext");
        doc.apply(&edit(0, 4, 8, "greet")).unwrap();
        assert_eq!(doc.text(), "say(greet);\nnext");
    }

    #[test]
    fn test_apply_replacement_on_later_line() {
        let mut doc = BufferDocument::new("first\nsay('hi');");
        doc.apply(&edit(1, 4, 8, "greet")).unwrap();
        assert_eq!(doc.text(), "first\nsay(greet);");
    }

    #[test]
    fn test_apply_with_prepend() {
        let mut doc = BufferDocument::new("body('x')");
        let mut e = edit(0, 5, 8, "expr");
        e.prepend = Some("header\n".to_string());
        doc.apply(&e).unwrap();
        assert_eq!(doc.text(), "header\nbody(expr)");
    }

    #[test]
    fn test_apply_rejects_out_of_range_line() {
        let mut doc = BufferDocument::new("only");
        let err = doc.apply(&edit(3, 0, 1, "x")).unwrap_err();
        assert!(matches!(err, Error::InvalidEdit(_)));
    }

    #[test]
    fn test_apply_rejects_span_past_line_end() {
        let mut doc = BufferDocument::new("short\nlonger line");
        let err = doc.apply(&edit(0, 0, 9, "x")).unwrap_err();
        assert!(matches!(err, Error::InvalidEdit(_)));
    }

    #[test]
    fn test_memory_host_prompt_script() {
        let mut host = MemoryHost::new().with_document("x").with_answers([
            PromptAnswer::Submit("Hallo".to_string()),
            PromptAnswer::AcceptDefault,
            PromptAnswer::Cancel,
        ]);

        let request = PromptRequest {
            step: PromptStep::ForeignText,
            title: "German Text".to_string(),
            prefill: "Hello".to_string(),
        };

        assert_eq!(host.prompt(&request), Some("Hallo".to_string()));
        assert_eq!(host.prompt(&request), Some("Hello".to_string()));
        assert_eq!(host.prompt(&request), None);
        // Exhausted script keeps behaving like a dismissal.
        assert_eq!(host.prompt(&request), None);
        assert_eq!(host.prompts_seen().len(), 4);
    }

    #[test]
    fn test_memory_host_without_document() {
        let host = MemoryHost::new();
        assert_eq!(host.document_text(), None);
        assert_eq!(host.line_text(0), None);
    }
}
