//! Property-based tests for the lexer, run against the Gibiane configuration.
//!
//! 1. **Tokens reconstruct the line**: every token's text is the line slice at its offset, and
//!    the characters between tokens are exactly the ones no rule covered
//! 2. **Tokens are ordered and non-overlapping**
//! 3. **Lexing is idempotent**: same session and line give the same tokens and session
//! 4. **Line by line equals whole document**

use std::sync::LazyLock;

use proptest::prelude::*;

use super::{Lexer, Token};
use crate::language::dgibi;

/// Gibiane fragments the generators splice together.
const FRAGMENTS: &[&str] = &[
  "DEBP MAPROC",
  "DEBM METH1 ",
  "FINP RES;",
  "REPE BLOC1 10;",
  "FIN BLOC1;",
  "X = 1.5e-3;",
  "TAB1 . 'CLE' = VRAI;",
  "'it''s fine'",
  "'open",
  "*MAILLAGE",
  " * commentaire",
  "&BLOC1",
  "SI (A EGA B);",
  "SINON;",
  "**",
  "<EG",
  "ENTIER *MOT;",
  "@#$%",
  "   ",
];

fn gibiane_line() -> impl Strategy<Value = String> {
  prop::collection::vec(prop::sample::select(FRAGMENTS), 0..6).prop_map(|parts| parts.concat())
}

fn any_line() -> impl Strategy<Value = String> {
  prop_oneof![gibiane_line(), "[^\n\r]{0,80}"]
}

// Compiling the Gibiane table dominates a case, so every case shares one lexer.
static LEXER: LazyLock<Lexer> =
    LazyLock::new(|| dgibi::lexer().expect("Gibiane configuration is valid"));

fn check_line(line: &str, tokens: &[Token]) -> Result<(), TestCaseError> {
  let mut previous_end = 0;
  for token in tokens {
    prop_assert!(token.start >= previous_end, "{:?} overlaps its predecessor", token);
    prop_assert!(!token.text.is_empty(), "{:?} is empty", token);
    prop_assert_eq!(line.get(token.start..token.end()), Some(token.text));
    previous_end = token.end();
  }
  prop_assert!(previous_end <= line.len());
  Ok(())
}

proptest! {
  #[test]
  fn tokens_are_slices_of_the_line(line in any_line()) {
    let lexer = &*LEXER;
    let mut session = lexer.session();
    // Both in the start state and in whatever state the line leaves us in.
    for _ in 0..2 {
      let (tokens, next) = lexer.tokenize_line(session, &line);
      check_line(&line, &tokens)?;
      session = next;
    }
  }

  #[test]
  fn tokenize_line_is_idempotent(line in any_line()) {
    let lexer = &*LEXER;
    let (first, first_session) = lexer.tokenize_line(lexer.session(), &line);
    let (second, second_session) = lexer.tokenize_line(lexer.session(), &line);
    prop_assert_eq!(first, second);
    prop_assert_eq!(first_session, second_session);
  }

  #[test]
  fn line_by_line_equals_document(lines in prop::collection::vec(gibiane_line(), 0..8)) {
    let lexer = &*LEXER;
    let text = lines.join("\n");
    let document = lexer.tokenize_document(&text);

    let mut session = lexer.session();
    let mut expected = Vec::new();
    for line in text.split('\n') {
      let (tokens, next) = lexer.tokenize_line(session, line);
      expected.push(tokens);
      session = next;
    }

    let actual: Vec<Vec<Token>> = document.lines.iter().map(|l| l.tokens.clone()).collect();
    prop_assert_eq!(actual, expected);
    prop_assert_eq!(document.session, session);
  }
}
