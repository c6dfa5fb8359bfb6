//! Document ending inside a string or a procedure header.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use codespan::Span;
use codespan_reporting::diagnostic::{Diagnostic, Label};

use super::{FileId, ToDiagnostic};
use crate::lexer::ToSpan;

/// A document ended while the lexer was still in a state other than the start state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IncompleteConstructError {
  /// Name of the state still active at the end of the document.
  pub state: &'static str,
  /// Zero based line on which that state was entered.
  pub line: usize,
  /// From the text that entered that state to the end of the document.
  pub unclosed_span: Span,
}

impl IncompleteConstructError {
  /// Constructs a new `IncompleteConstructError`.
  pub fn new<S>(state: &'static str, line: usize, unclosed: S) -> Self
    where S: ToSpan
  {
    IncompleteConstructError {
      state,
      line,
      unclosed_span: unclosed.to_span(),
    }
  }
}

impl Display for IncompleteConstructError {
  fn fmt(&self, fmt: &mut Formatter) -> FmtResult {
    write!(fmt, "document ends inside an unterminated `{}` construct", self.state)
  }
}

impl Error for IncompleteConstructError {}

impl ToDiagnostic for IncompleteConstructError {
  fn to_diagnostic(&self, file: FileId) -> Diagnostic<FileId> {
    let primary =
        Label::primary(file, self.unclosed_span).with_message(format!("`{}` opened here", self.state));

    Diagnostic::warning().with_message(self.to_string()).with_labels(vec![primary])
  }
}
