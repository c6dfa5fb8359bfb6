/*!

A rule-table lexer for syntax highlighting line-oriented, keyword-driven command languages, with
the configuration for Cast3M's Gibiane (`.dgibi`) language.

The engine knows nothing about Gibiane. A language is a list of named states, each an ordered list
of regex rules, plus a keyword table consulted by identifier rules. The caller feeds the lexer one
line at a time and hands back the `LexerSession` it received for the previous line.

```ignore
let lexer   = gibi_lex::language::dgibi::lexer()?;
let session = lexer.session();
let (tokens, session) = lexer.tokenize_line(session, "DEBP MAPROC;");
```

*/

pub mod error;
pub mod language;
pub mod lexer;

pub use error::{ConfigError, ToDiagnostic};
pub use lexer::{
  coalesce,
  Category,
  Emit,
  KeywordTable,
  Label,
  LexedDocument,
  LexedLine,
  Lexer,
  LexerSession,
  RuleSpec,
  RuleTable,
  StateSpec,
  Token,
};
