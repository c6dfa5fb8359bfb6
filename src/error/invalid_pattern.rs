//! Rule patterns that cannot be used.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use codespan_reporting::diagnostic::Diagnostic;

use super::{FileId, ToDiagnostic};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PatternProblem {
  /// The regex engine rejected the pattern.
  Syntax(String),
  /// The pattern can match without consuming input.
  MatchesEmpty,
}

/// Error that occurs when a rule's pattern does not compile or can match the empty string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidPatternError {
  /// State declaring the rule.
  pub state: &'static str,
  /// Index of the rule within its state.
  pub rule: usize,
  /// The offending pattern.
  pub pattern: &'static str,
  pub problem: PatternProblem,
}

impl Display for InvalidPatternError {
  fn fmt(&self, fmt: &mut Formatter) -> FmtResult {
    match &self.problem {
      PatternProblem::Syntax(reason) => {
        write!(
          fmt,
          "rule {} of state `{}` has an invalid pattern: {}",
          self.rule,
          self.state,
          reason
        )
      }
      PatternProblem::MatchesEmpty => {
        write!(
          fmt,
          "rule {} of state `{}` can match the empty string",
          self.rule,
          self.state
        )
      }
    }
  }
}

impl Error for InvalidPatternError {}

impl ToDiagnostic for InvalidPatternError {
  fn to_diagnostic(&self, _file: FileId) -> Diagnostic<FileId> {
    Diagnostic::error()
        .with_message(self.to_string())
        .with_notes(vec![format!("pattern: {}", self.pattern)])
  }
}
