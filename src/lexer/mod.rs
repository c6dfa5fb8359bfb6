/*!

The rule-table lexer engine.

A `Lexer` pairs a `RuleTable` with a `KeywordTable`. Both are immutable and shared through `Arc`,
so a `Lexer` is cheap to clone and can be used from any number of threads, each document carrying
its own `LexerSession`.

*/

mod category;
mod keyword;
mod mergable;
mod rule;
mod session;
mod state;
mod token;

#[cfg(test)]
mod property_tests;

use std::sync::Arc;

pub use category::{Category, UnknownCategory};
pub use keyword::KeywordTable;
pub use mergable::{coalesce, merge_or_push_item, Mergable, Merged};
pub use rule::{Emit, Label, RuleSpec};
pub use session::LexerSession;
pub use state::{RuleTable, StateSpec, START_STATE};
pub use token::{ToSpan, Token};

use crate::error::IncompleteConstructError;
use rule::{Rule, RuleMatch};

/// Index of a state in its `RuleTable`.
pub type StateId = u8;


#[derive(Clone)]
pub struct Lexer {
  rules    : Arc<RuleTable>,
  keywords : Arc<KeywordTable>,
}

impl Lexer {
  pub fn new(rules: Arc<RuleTable>, keywords: Arc<KeywordTable>) -> Self {
    Lexer { rules, keywords }
  }

  pub fn rules(&self) -> &RuleTable {
    &self.rules
  }

  pub fn keywords(&self) -> &KeywordTable {
    &self.keywords
  }

  /// A session for a freshly opened document.
  pub fn session(&self) -> LexerSession {
    LexerSession::new(self.rules.start())
  }

  pub fn state_name(&self, session: LexerSession) -> &'static str {
    self.rules.state_name(session.state())
  }

  pub fn is_start(&self, session: LexerSession) -> bool {
    session.state() == self.rules.start()
  }

  /// Lexes one line (without its line terminator) entered in `session`, returning the tokens in
  /// left to right order and the session for the following line.
  pub fn tokenize_line<'t>(
    &self,
    session : LexerSession,
    line    : &'t str,
  ) -> (Vec<Token<'t>>, LexerSession)
  {
    let mut tokens = Vec::new();
    let (session, _) = self.lex_into(session, line, &mut tokens);
    (tokens, session)
  }

  /// Lexes a whole buffer, line by line. Lines are split on `\n`; a `\r` before it is not part of
  /// the line.
  pub fn tokenize_document<'t>(&self, text: &'t str) -> LexedDocument<'t> {
    let mut session = self.session();
    let mut lines   = Vec::new();
    let mut opened  = None; // (line index, absolute offset) where the current non-start state began

    let mut offset = 0;
    for (index, raw_line) in text.split('\n').enumerate() {
      let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);

      let mut tokens = Vec::new();
      let entered = session;
      let (exit, last_switch) = self.lex_into(session, line, &mut tokens);

      if self.is_start(exit) {
        opened = None;
      } else if let Some(column) = last_switch {
        opened = Some((index, offset + column));
      } else if opened.is_none() {
        opened = Some((index, offset));
      }

      lines.push(LexedLine { text: line, offset, entered, tokens });
      session = exit;
      offset += raw_line.len() + 1;
    }

    LexedDocument {
      lines,
      session,
      state: self.state_name(session),
      opened,
      length: text.len(),
    }
  }

  /*
    The engine proper. Returns the exit session and the column of the last rule match that switched
    state on this line, if any.
  */
  fn lex_into<'t>(
    &self,
    session : LexerSession,
    line    : &'t str,
    tokens  : &mut Vec<Token<'t>>,
  ) -> (LexerSession, Option<usize>)
  {
    let mut state       = session.state();
    let mut last_switch = None;
    let mut cursor      = 0;

    while cursor < line.len() {
      let current = self.rules.state(state);
      let found = current.rules
                         .iter()
                         .find_map(|rule| rule.match_at(line, cursor).map(|found| (rule, found)));

      match found {
        Some((rule, found)) => {
          tracing::trace!(state = current.name, column = cursor, pattern = rule.pattern, "matched");
          self.emit(rule, &found, line, tokens);

          if let Some(next) = rule.next {
            state = next;
            last_switch = Some(found.start);
          }

          cursor = advance(line, cursor, found.end);
        }

        None => {
          let width = char_width(line, cursor);
          match current.default {
            Some(category) => {
              tokens.push(Token::new(category, &line[cursor..cursor + width], cursor));
            }
            None => {
              tracing::trace!(state = current.name, column = cursor, "skipped unmatched character");
            }
          }
          cursor += width;
        }
      }
    }

    (LexerSession::new(state), last_switch)
  }

  fn emit<'t>(&self, rule: &Rule, found: &RuleMatch, line: &'t str, tokens: &mut Vec<Token<'t>>) {
    match rule.emit {
      Emit::Whole(label) => {
        let text = &line[found.start..found.end];
        tokens.push(Token::new(self.resolve(label, text), text, found.start));
      }

      Emit::Groups(labels) => {
        for (label, group) in labels.iter().zip(found.groups.iter()) {
          if let Some((start, end)) = *group {
            if end > start {
              let text = &line[start..end];
              tokens.push(Token::new(self.resolve(*label, text), text, start));
            }
          }
        }
      }
    }
  }

  fn resolve(&self, label: Label, text: &str) -> Category {
    match label {
      Label::Fixed(category) => category,
      Label::Keyword => self.keywords.classify(text).unwrap_or(Category::Identifier),
    }
  }
}

/// The cursor after a match ending at `end`. Tables never hold a rule that can match the empty
/// string, but an empty match would still move the cursor over one character.
fn advance(line: &str, cursor: usize, end: usize) -> usize {
  if end > cursor {
    end
  } else {
    cursor + char_width(line, cursor)
  }
}

/// Byte width of the character at `cursor`, which must be a character boundary.
fn char_width(line: &str, cursor: usize) -> usize {
  line[cursor..].chars().next().map_or(1, char::len_utf8)
}


/// The tokens of one line of a lexed document.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct LexedLine<'t> {
  pub text    : &'t str,        //< the line, without its terminator
  pub offset  : usize,          //< byte offset of the line in the document
  pub entered : LexerSession,   //< session the line was lexed in
  pub tokens  : Vec<Token<'t>>,
}


#[derive(Clone, Eq, PartialEq, Debug)]
pub struct LexedDocument<'t> {
  pub lines   : Vec<LexedLine<'t>>,
  /// Session after the last line.
  pub session : LexerSession,
  state       : &'static str,
  opened      : Option<(usize, usize)>,
  length      : usize,
}

impl<'t> LexedDocument<'t> {

  /// Reports a document that ends outside the start state, for example inside a string. The
  /// span runs from the rule match that entered the open state to the end of the document.
  pub fn incomplete_construct(&self) -> Option<IncompleteConstructError> {
    self.opened.map(|(line, start)| {
      IncompleteConstructError::new(self.state, line, start..self.length)
    })
  }

  pub fn tokens(&self) -> impl Iterator<Item = &Token<'t>> {
    self.lines.iter().flat_map(|line| line.tokens.iter())
  }
}
