use codespan::Span;

use super::Category;


/// A categorized slice of one line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token<'t> {
  pub category : Category,
  pub text     : &'t str, //< exactly the matched text
  pub start    : usize,   //< byte offset within the line
}

impl<'t> Token<'t> {
  pub fn new(category: Category, text: &'t str, start: usize) -> Self {
    Token { category, text, start }
  }

  /// Byte offset one past the last byte of the token.
  pub fn end(&self) -> usize {
    self.start + self.text.len()
  }
}


pub trait ToSpan {
  fn to_span(&self) -> Span;
}

impl ToSpan for Span {
  fn to_span(&self) -> Span {
    *self
  }
}

impl<'a, T: ToSpan> ToSpan for &'a T {
  fn to_span(&self) -> Span {
    (*self).to_span()
  }
}

impl ToSpan for std::ops::Range<usize> {
  fn to_span(&self) -> Span {
    Span::new(self.start as u32, self.end as u32)
  }
}

/// The span is relative to the start of the token's line.
impl<'t> ToSpan for Token<'t> {
  fn to_span(&self) -> Span {
    Span::new(self.start as u32, self.end() as u32)
  }
}
