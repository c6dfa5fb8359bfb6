//! Transition into a state that is not declared.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use codespan_reporting::diagnostic::Diagnostic;

use super::{FileId, ToDiagnostic};

/// Error that occurs when a rule names a next state missing from the table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownStateError {
  /// State declaring the rule.
  pub state: &'static str,
  /// Index of the rule within its state.
  pub rule: usize,
  /// The undeclared state name.
  pub next: &'static str,
}

impl UnknownStateError {
  /// Constructs a new `UnknownStateError`.
  pub fn new(state: &'static str, rule: usize, next: &'static str) -> Self {
    UnknownStateError { state, rule, next }
  }
}

impl Display for UnknownStateError {
  fn fmt(&self, fmt: &mut Formatter) -> FmtResult {
    write!(
      fmt,
      "rule {} of state `{}` transitions to undeclared state `{}`",
      self.rule,
      self.state,
      self.next
    )
  }
}

impl Error for UnknownStateError {}

impl ToDiagnostic for UnknownStateError {
  fn to_diagnostic(&self, _file: FileId) -> Diagnostic<FileId> {
    Diagnostic::error().with_message(self.to_string())
  }
}
