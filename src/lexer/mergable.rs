/*!

Coalescing of adjacent tokens.

The lexer emits default-category characters one at a time, so the body of a string arrives as one
token per character. An editor draws such runs as a single token; `coalesce` produces that view.

*/

use super::Token;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Merged<T, U> {
  Yes(T),
  No(U, U)
}

pub trait Mergable<'t> {

  /*
    Two tokens are mergable if they share a category and the second begins exactly where the first
    ends. Tokens separated by a skipped character are not mergable, since the merged token would
    claim text no rule matched.
  */
  fn mergable(&self, other: &Self) -> bool;

  /*
    Attempts to merge `self` and `other`, producing `Merged::Yes(merged)` on success and
    `Merged::No(self, other)` otherwise. The merged text is re-sliced from `line`, the line both
    tokens were cut from.
  */
  fn merged(self, other: Self, line: &'t str) -> Merged<Self, Self>
    where Self: std::marker::Sized;
}

impl<'t> Mergable<'t> for Token<'t> {

  fn mergable(&self, other: &Self) -> bool {
    self.category == other.category && self.end() == other.start
  }

  fn merged(self, other: Self, line: &'t str) -> Merged<Self, Self> {
    if !self.mergable(&other) {
      return Merged::No(self, other);
    }

    match line.get(self.start..other.end()) {
      Some(text) => Merged::Yes(Token::new(self.category, text, self.start)),
      None => Merged::No(self, other),
    }
  }
}

pub fn merge_or_push_item<'t, T>(items: &mut Vec<T>, item: T, line: &'t str)
  where T: Mergable<'t>
{
  match items.pop() {
    None => items.push(item),

    Some(last_item) => {
      match last_item.merged(item, line) {
        Merged::Yes(merged) => items.push(merged),
        Merged::No(last_item, item) => {
          items.push(last_item);
          items.push(item);
        }
      }
    }
  }
}

/// Merges runs of adjacent same-category tokens cut from `line`.
pub fn coalesce<'t>(line: &'t str, tokens: Vec<Token<'t>>) -> Vec<Token<'t>> {
  tokens.into_iter().fold(Vec::new(), |mut items, token| {
    merge_or_push_item(&mut items, token, line);
    items
  })
}


#[cfg(test)]
mod test {
  use super::*;
  use crate::lexer::Category;

  #[test]
  fn runs_merge() {
    let line = "'abc'";
    let tokens = vec![
      Token::new(Category::String, "'", 0),
      Token::new(Category::String, "a", 1),
      Token::new(Category::String, "b", 2),
      Token::new(Category::Escape, "c", 3),
      Token::new(Category::String, "'", 4),
    ];
    assert_eq!(
      coalesce(line, tokens),
      vec![
        Token::new(Category::String, "'ab", 0),
        Token::new(Category::Escape, "c", 3),
        Token::new(Category::String, "'", 4),
      ]
    );
  }

  #[test]
  fn gap_prevents_merge() {
    let line = "a b";
    let tokens = vec![
      Token::new(Category::Identifier, "a", 0),
      Token::new(Category::Identifier, "b", 2),
    ];
    assert_eq!(coalesce(line, tokens.clone()), tokens);
  }
}
