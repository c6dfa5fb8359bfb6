//! Per-group labels that do not line up with the pattern's capture groups.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use codespan_reporting::diagnostic::Diagnostic;

use super::{FileId, ToDiagnostic};

/// Error that occurs when a rule has a different number of group labels than capture groups.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LabelCountError {
  /// State declaring the rule.
  pub state: &'static str,
  /// Index of the rule within its state.
  pub rule: usize,
  /// The rule's pattern.
  pub pattern: &'static str,
  /// Number of labels given.
  pub labels: usize,
  /// Number of explicit capture groups in the pattern.
  pub groups: usize,
}

impl Display for LabelCountError {
  fn fmt(&self, fmt: &mut Formatter) -> FmtResult {
    write!(
      fmt,
      "rule {} of state `{}` has {} labels for {} capture groups",
      self.rule,
      self.state,
      self.labels,
      self.groups
    )
  }
}

impl Error for LabelCountError {}

impl ToDiagnostic for LabelCountError {
  fn to_diagnostic(&self, _file: FileId) -> Diagnostic<FileId> {
    Diagnostic::error()
        .with_message(self.to_string())
        .with_notes(vec![format!("pattern: {}", self.pattern)])
  }
}
