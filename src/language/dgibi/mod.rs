/*!

Cast3M's Gibiane command language, the contents of `.dgibi` files.

Three states:

  - `start`: comments, strings, brackets, numbers, procedure and method headers, loop headers and
    ends, `&` parameters, assignments, dotted names, operators, and keyword lookup for bare words.
    Case insensitive, and characters no rule covers are skipped. Word, digit and space classes are
    ASCII, so accented letters and non-Latin digits outside strings and comments are skipped too.
  - `string`: entered on `'`. A doubled quote is an escape, a single quote returns to `start`,
    anything else is string text. Strings may run over several lines.
  - `procmethdef`: the argument list of a `DEBP`/`DEBM` header up to the terminating `;`.

`outputs` finds the variables a script hands back to the program that runs it, and `results`
reads their values once Cast3M has run.

*/

use std::sync::Arc;

mod keywords;
pub mod outputs;
pub mod results;

use crate::error::ConfigError;
use crate::lexer::{Category, KeywordTable, Label, Lexer, RuleSpec, RuleTable, StateSpec};

pub use keywords::{BUILTINS, CONSTANTS, CONTROL, STORAGE_TYPES};
pub use outputs::{accepts_dataset, discover, Output, OutputSource};
pub use results::{read_results, OutputValue};

pub const LANGUAGE_ID    : &str = "gibi";
pub const FILE_EXTENSION : &str = "dgibi";

pub const KEYWORDS: &[(Category, &str)] = &[
  (Category::LanguageConstant, CONSTANTS),
  (Category::StorageType,      STORAGE_TYPES),
  (Category::ControlKeyword,   CONTROL),
  (Category::BuiltinFunction,  BUILTINS),
];

const TEXT: Label = Label::Fixed(Category::Text);

const PROCEDURE_HEADER: &[Label] = &[
  Label::Fixed(Category::StorageType),
  TEXT,
  Label::Fixed(Category::FunctionName),
];

const LOOP_HEADER: &[Label] = &[
  Label::Fixed(Category::ControlKeyword),
  TEXT,
  Label::Fixed(Category::Parameter),
  TEXT,
  Label::Fixed(Category::Variable),
];

const LOOP_END: &[Label] = &[
  Label::Fixed(Category::ControlKeyword),
  TEXT,
  Label::Fixed(Category::Parameter),
  Label::Fixed(Category::Punctuation),
];

const PROCEDURE_END: &[Label] = &[
  Label::Fixed(Category::ControlKeyword),
  TEXT,
  Label::Fixed(Category::Variable),
];

const ASSIGNMENT: &[Label] = &[
  Label::Fixed(Category::Variable),
  TEXT,
  Label::Fixed(Category::Operator),
];

const DOTTED_NAME: &[Label] = &[Label::Fixed(Category::Variable)];

// Order is significant: the first rule matching at the cursor wins.
const START: &[RuleSpec] = &[
  RuleSpec::token(r"^\s?\*(?u:.)+$", Category::Comment),
  RuleSpec::token("'", Category::String).then("string"),
  RuleSpec::token(r"[\[({]", Category::LeftParen),
  RuleSpec::token(r"[\])}]", Category::RightParen),
  RuleSpec::token(r"[+-]?\d+(\.\d+)?(e[-]?\d+)?\b", Category::Numeric),
  RuleSpec::groups(r"(DEBP|DEBM)(\s+)([a-zA-Z_][a-zA-Z0-9_]*)", PROCEDURE_HEADER)
      .then("procmethdef"),
  RuleSpec::groups(
    r"(REPE)(\s+)([a-zA-Z_][a-zA-Z0-9_]*)?(\s+)([a-zA-Z_][a-zA-Z0-9_]*)?",
    LOOP_HEADER
  ),
  RuleSpec::token(r"&[a-zA-Z][a-zA-Z0-9_]?", Category::Parameter),
  RuleSpec::groups(r"(FIN)(\s+)([a-zA-Z_][a-zA-Z0-9_]*)?(;)", LOOP_END),
  RuleSpec::groups(r"(FINP|FINM)(\s+)([a-zA-Z_][a-zA-Z0-9_]*)?", PROCEDURE_END),
  RuleSpec::groups(r"^([a-zA-Z_][a-zA-Z0-9_]*)(\s+)?(=)", ASSIGNMENT),
  RuleSpec::groups(r"^(\s?[a-zA-Z_][a-zA-Z0-9_]*\s?\.)", DOTTED_NAME),
  RuleSpec::token(r"ET |OU |EGA |NEG |NON |>EG|<EG|\*\*|[*/+\-<>=.]", Category::Operator),
  RuleSpec::keyword(r"\b\w+\b"),
  RuleSpec::token(";", Category::Punctuation),
];

const STRING: &[RuleSpec] = &[
  RuleSpec::token("''", Category::Escape),
  RuleSpec::token("'", Category::String).then("start"),
];

const PROCEDURE_SIGNATURE: &[RuleSpec] = &[
  RuleSpec::token("[A-Za-z][A-Za-z0-9_]+", Category::Parameter),
  RuleSpec::token(r"\*[A-Za-z]+", Category::StorageType),
  RuleSpec::token(";", Category::Punctuation).then("start"),
];

pub const STATES: &[StateSpec] = &[
  StateSpec {
    name             : "start",
    case_insensitive : true,
    default          : None,
    rules            : START,
  },
  StateSpec {
    name             : "string",
    case_insensitive : false,
    default          : Some(Category::String),
    rules            : STRING,
  },
  StateSpec {
    name             : "procmethdef",
    case_insensitive : false,
    default          : Some(Category::Text),
    rules            : PROCEDURE_SIGNATURE,
  },
];

/// Builds the Gibiane lexer. Call once and clone the result; clones share their tables.
pub fn lexer() -> Result<Lexer, ConfigError> {
  let rules    = RuleTable::new(STATES)?;
  let keywords = KeywordTable::new(KEYWORDS)?;
  Ok(Lexer::new(Arc::new(rules), Arc::new(keywords)))
}


#[cfg(test)]
mod test {
  use super::*;
  use crate::lexer::{coalesce, Token};
  use crate::lexer::Category::*;

  fn lex(line: &str) -> (Vec<(Category, &str)>, &'static str) {
    let lexer = lexer().unwrap();
    let (tokens, session) = lexer.tokenize_line(lexer.session(), line);
    let pairs = tokens.into_iter().map(|t| (t.category, t.text)).collect();
    (pairs, lexer.state_name(session))
  }

  #[test]
  fn configuration_is_valid() {
    let lexer = lexer().unwrap();
    assert_eq!(lexer.rules().len(), 3);
    assert!(lexer.rules().unreachable_states().is_empty());
    assert_eq!(lexer.state_name(lexer.session()), "start");
  }

  #[test]
  fn keyword_classification() {
    let lexer = lexer().unwrap();
    let keywords = lexer.keywords();
    assert_eq!(keywords.classify("SI"), Some(ControlKeyword));
    assert_eq!(keywords.classify("ENTIER"), Some(StorageType));
    assert_eq!(keywords.classify("vrai"), Some(LanguageConstant));
    assert_eq!(keywords.classify("PROG"), Some(BuiltinFunction));
    assert_eq!(keywords.classify("notakeyword"), None);
  }

  #[test]
  fn shared_words_keep_their_specific_category() {
    let lexer = lexer().unwrap();
    assert_eq!(lexer.keywords().classify("REPE"), Some(ControlKeyword));
    assert_eq!(lexer.keywords().classify("MOTS"), Some(StorageType));
    assert_eq!(lexer.keywords().classify("CCDONCHI"), Some(BuiltinFunction));
  }

  #[test]
  fn loop_header() {
    let (tokens, state) = lex("REPE BLOC1 10;");
    assert_eq!(
      tokens,
      vec![
        (ControlKeyword, "REPE"),
        (Text, " "),
        (Parameter, "BLOC1"),
        (Text, " "),
        (Numeric, "10"),
        (Punctuation, ";"),
      ]
    );
    assert_eq!(state, "start");
  }

  #[test]
  fn loop_end() {
    let (tokens, _) = lex("FIN BLOC1;");
    assert_eq!(
      tokens,
      vec![(ControlKeyword, "FIN"), (Text, " "), (Parameter, "BLOC1"), (Punctuation, ";")]
    );
  }

  #[test]
  fn procedure_header() {
    let lexer = lexer().unwrap();
    let (tokens, session) = lexer.tokenize_line(lexer.session(), "DEBP MAPROC;");
    assert_eq!(
      tokens,
      vec![
        Token::new(StorageType, "DEBP", 0),
        Token::new(Text, " ", 4),
        Token::new(FunctionName, "MAPROC", 5),
        Token::new(Punctuation, ";", 11),
      ]
    );
    assert!(lexer.is_start(session));
  }

  #[test]
  fn procedure_signature_spans_lines() {
    let lexer = lexer().unwrap();
    let (_, session) = lexer.tokenize_line(lexer.session(), "debm Calcul ");
    assert_eq!(lexer.state_name(session), "procmethdef");

    let (tokens, session) = lexer.tokenize_line(session, "ENT1*ENTIER X*MAILLAGE;");
    let pairs: Vec<(Category, &str)> = tokens.iter().map(|t| (t.category, t.text)).collect();
    assert_eq!(
      pairs,
      vec![
        (Parameter, "ENT1"),
        (StorageType, "*ENTIER"),
        (Text, " "),
        (Text, "X"),
        (StorageType, "*MAILLAGE"),
        (Punctuation, ";"),
      ]
    );
    assert_eq!(lexer.state_name(session), "start");
  }

  #[test]
  fn procedure_end() {
    let (tokens, _) = lex("FINP RES;");
    assert_eq!(
      tokens,
      vec![(ControlKeyword, "FINP"), (Text, " "), (Variable, "RES"), (Punctuation, ";")]
    );
  }

  #[test]
  fn doubled_quote_does_not_end_string() {
    let lexer = lexer().unwrap();
    let line = "'it''s fine'";
    let (tokens, session) = lexer.tokenize_line(lexer.session(), line);
    assert!(lexer.is_start(session));
    assert_eq!(
      coalesce(line, tokens),
      vec![
        Token::new(String, "'it", 0),
        Token::new(Escape, "''", 3),
        Token::new(String, "s fine'", 5),
      ]
    );
  }

  #[test]
  fn string_runs_over_lines() {
    let lexer = lexer().unwrap();
    let (_, session) = lexer.tokenize_line(lexer.session(), "MESS 'debut");
    assert_eq!(lexer.state_name(session), "string");
    let (tokens, session) = lexer.tokenize_line(session, "fin' ;");
    assert_eq!(tokens.last(), Some(&Token::new(Punctuation, ";", 5)));
    assert!(lexer.is_start(session));
  }

  #[test]
  fn assignment() {
    let (tokens, _) = lex("X = 1.5e-3;");
    assert_eq!(
      tokens,
      vec![
        (Variable, "X"),
        (Text, " "),
        (Operator, "="),
        (Numeric, "1.5e-3"),
        (Punctuation, ";"),
      ]
    );
  }

  #[test]
  fn dotted_name() {
    let (tokens, state) = lex("TAB1 . 'CLE' = VRAI;");
    assert_eq!(tokens[0], (Variable, "TAB1 ."));
    assert_eq!(tokens[tokens.len() - 2], (LanguageConstant, "VRAI"));
    assert_eq!(state, "start");
  }

  #[test]
  fn comments_only_at_line_start() {
    assert_eq!(lex(" * maillage du cube").0, vec![(Comment, " * maillage du cube")]);
    let (tokens, _) = lex("A * B");
    assert_eq!(tokens, vec![(Identifier, "A"), (Operator, "*"), (Identifier, "B")]);
  }

  #[test]
  fn word_operator_wins_over_keyword() {
    // `ET` is also a built-in name, but the operator rule comes first and needs the space.
    let (tokens, _) = lex("A ET B");
    assert_eq!(tokens, vec![(Identifier, "A"), (Operator, "ET "), (Identifier, "B")]);
    let (tokens, _) = lex("A ET");
    assert_eq!(tokens, vec![(Identifier, "A"), (BuiltinFunction, "ET")]);
  }

  #[test]
  fn loop_rule_needs_whitespace() {
    assert_eq!(lex("REPETER").0, vec![(ControlKeyword, "REPETER")]);
    assert_eq!(lex("FINSI;").0, vec![(ControlKeyword, "FINSI"), (Punctuation, ";")]);
  }

  #[test]
  fn start_state_is_case_insensitive() {
    let (tokens, state) = lex("si x ega 2;");
    assert_eq!(
      tokens,
      vec![
        (ControlKeyword, "si"),
        (Identifier, "x"),
        (Operator, "ega "),
        (Numeric, "2"),
        (Punctuation, ";"),
      ]
    );
    assert_eq!(state, "start");
  }

  #[test]
  fn brackets_and_parameters() {
    let (tokens, _) = lex("(&I)");
    assert_eq!(tokens, vec![(LeftParen, "("), (Parameter, "&I"), (RightParen, ")")]);
  }

  #[test]
  fn stray_character_is_skipped() {
    let lexer = lexer().unwrap();
    let (tokens, session) = lexer.tokenize_line(lexer.session(), "@ SI");
    assert_eq!(tokens, vec![Token::new(ControlKeyword, "SI", 2)]);
    assert!(lexer.is_start(session));
  }

  #[test]
  fn non_ascii_characters_are_skipped() {
    assert_eq!(lex("é").0, vec![]);
    assert_eq!(
      lex("X = ٣;").0,
      vec![(Variable, "X"), (Text, " "), (Operator, "="), (Punctuation, ";")]
    );
    assert_eq!(
      lex("CAFÉ = 1;").0,
      vec![(Identifier, "CAF"), (Operator, "="), (Numeric, "1"), (Punctuation, ";")]
    );
  }

  #[test]
  fn comments_and_strings_keep_non_ascii_text() {
    assert_eq!(lex("* déplacement").0, vec![(Comment, "* déplacement")]);

    let lexer = lexer().unwrap();
    let line = "'été'";
    let (tokens, session) = lexer.tokenize_line(lexer.session(), line);
    assert!(lexer.is_start(session));
    assert_eq!(coalesce(line, tokens), vec![Token::new(String, "'été'", 0)]);
  }

  #[test]
  fn unterminated_string_at_end_of_document() {
    let lexer = lexer().unwrap();
    let document = lexer.tokenize_document("OPTI DIME 3;\nMESS 'oops;\n");
    let error = document.incomplete_construct().unwrap();
    assert_eq!(error.state, "string");
    assert_eq!(error.line, 1);
    assert_eq!(error.unclosed_span.start().to_usize(), 18);
  }
}
