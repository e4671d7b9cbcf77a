//! Rendering parse errors against the source text.
//!
//! The compiler itself never prints. Callers that want a human-readable
//! report hand the error and the source to [`ErrorPrinter`] and decide
//! where the rendered text goes.

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use crate::error::ParseError;

/// Builder-pattern renderer for a [`ParseError`].
pub struct ErrorPrinter<'e, 's> {
    error: &'e ParseError,
    source: &'s str,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> ErrorPrinter<'e, 's> {
    pub fn new(error: &'e ParseError, source: &'s str) -> Self {
        Self {
            error,
            source,
            path: None,
            colored: false,
        }
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let message = self.error.to_string();

        // Whole-grammar errors have no span to annotate.
        let Some(offset) = self.error.offset() else {
            return format!("error: {message}\n");
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let mut snippet = Snippet::source(self.source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(span_at(self.source, offset))
                .label(&message),
        );
        if let Some(path) = self.path {
            snippet = snippet.path(path);
        }

        let report: Vec<Group> = vec![Level::ERROR.primary_title(&message).element(snippet)];
        let mut out = renderer.render(&report);
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}

/// One-character span at `offset`, clamped into the source and aligned to
/// char boundaries so multi-byte text cannot split.
fn span_at(source: &str, offset: usize) -> std::ops::Range<usize> {
    let len = source.len();
    if len == 0 {
        return 0..0;
    }

    let mut start = offset.min(len - 1);
    while start > 0 && !source.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = start + 1;
    while end < len && !source.is_char_boundary(end) {
        end += 1;
    }
    start..end
}
