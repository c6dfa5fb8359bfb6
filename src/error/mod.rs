/*!

Errors raised while building a lexer from its configuration, and the diagnostic a caller may report
for a document that ends inside an unterminated construct.

Configuration errors are fatal: nothing is partially built. Lexing itself never fails.

*/

mod duplicate_keyword;
mod incomplete_construct;
mod invalid_pattern;
mod label_count;
mod unknown_state;

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use codespan_reporting::diagnostic::Diagnostic;

pub use duplicate_keyword::DuplicateKeywordError;
pub use incomplete_construct::IncompleteConstructError;
pub use invalid_pattern::{InvalidPatternError, PatternProblem};
pub use label_count::LabelCountError;
pub use unknown_state::UnknownStateError;

/// Handle of a source file in a `codespan_reporting` file database.
pub type FileId = usize;

/// Errors that can be rendered by `codespan_reporting`.
pub trait ToDiagnostic {
  fn to_diagnostic(&self, file: FileId) -> Diagnostic<FileId>;
}


/// A defect in a state topology or keyword table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
  DuplicateKeyword(DuplicateKeywordError),
  DuplicateState(&'static str),       //< two states share a name
  UnknownState(UnknownStateError),
  LabelCount(LabelCountError),
  InvalidPattern(InvalidPatternError),
  MissingStartState(&'static str),    //< the named start state is not declared
  TooManyStates(usize),               //< state ids are a byte
}

impl Display for ConfigError {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    match self {
      ConfigError::DuplicateKeyword(e) => write!(f, "{}", e),
      ConfigError::DuplicateState(name) => write!(f, "state `{}` is declared more than once", name),
      ConfigError::UnknownState(e) => write!(f, "{}", e),
      ConfigError::LabelCount(e) => write!(f, "{}", e),
      ConfigError::InvalidPattern(e) => write!(f, "{}", e),
      ConfigError::MissingStartState(name) => write!(f, "start state `{}` is not declared", name),
      ConfigError::TooManyStates(count) => {
        write!(f, "{} states declared, at most {} are supported", count, u8::MAX as usize + 1)
      }
    }
  }
}

impl Error for ConfigError {}

impl ToDiagnostic for ConfigError {
  fn to_diagnostic(&self, file: FileId) -> Diagnostic<FileId> {
    match self {
      ConfigError::DuplicateKeyword(e) => e.to_diagnostic(file),
      ConfigError::UnknownState(e) => e.to_diagnostic(file),
      ConfigError::LabelCount(e) => e.to_diagnostic(file),
      ConfigError::InvalidPattern(e) => e.to_diagnostic(file),
      _ => Diagnostic::error().with_message(self.to_string()),
    }
  }
}

impl From<DuplicateKeywordError> for ConfigError {
  fn from(e: DuplicateKeywordError) -> Self {
    ConfigError::DuplicateKeyword(e)
  }
}

impl From<UnknownStateError> for ConfigError {
  fn from(e: UnknownStateError) -> Self {
    ConfigError::UnknownState(e)
  }
}

impl From<LabelCountError> for ConfigError {
  fn from(e: LabelCountError) -> Self {
    ConfigError::LabelCount(e)
  }
}

impl From<InvalidPatternError> for ConfigError {
  fn from(e: InvalidPatternError) -> Self {
    ConfigError::InvalidPattern(e)
  }
}
