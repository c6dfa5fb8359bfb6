//! Keyword listed under two categories.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use codespan_reporting::diagnostic::Diagnostic;

use super::{FileId, ToDiagnostic};
use crate::lexer::Category;

/// Error that occurs when a keyword appears in more than one category list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DuplicateKeywordError {
  /// The keyword, case folded.
  pub keyword: String,
  /// Category the keyword was first listed under.
  pub first: Category,
  /// Category that listed it again.
  pub second: Category,
}

impl DuplicateKeywordError {
  /// Constructs a new `DuplicateKeywordError`.
  pub fn new<S>(keyword: S, first: Category, second: Category) -> Self
    where S: Into<String>
  {
    DuplicateKeywordError {
      keyword: keyword.into(),
      first,
      second,
    }
  }
}

impl Display for DuplicateKeywordError {
  fn fmt(&self, fmt: &mut Formatter) -> FmtResult {
    write!(
      fmt,
      "keyword `{}` is listed as both `{}` and `{}`",
      self.keyword,
      self.first,
      self.second
    )
  }
}

impl Error for DuplicateKeywordError {}

impl ToDiagnostic for DuplicateKeywordError {
  fn to_diagnostic(&self, _file: FileId) -> Diagnostic<FileId> {
    Diagnostic::error()
        .with_message(self.to_string())
        .with_notes(vec!["a keyword must belong to exactly one category".to_string()])
  }
}
