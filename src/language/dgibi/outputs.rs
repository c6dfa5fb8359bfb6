/*!

Output variables of a Gibiane dataset, found by reading its token stream.

A script exposes a result to the program driving it in one of these ways:

  - `MESS 'name=' name;` prints a scalar to the console, which ends up in `out.txt`.
  - `OPTI SORT 'file';` followed by `SORT 'CHAI' name;` writes `name` to `file`.
  - `OPTI SORT 'file.csv';` followed by `SORT 'EXCE' tab;` writes the columns of `tab` to
    `file.csv`. The column names come from the `tab . 'column' = ...;` assignments of a
    `tab = TABLE;`, or failing that from `tab = EVOL MANU 'x' ... 'y' ...;` or
    `tab = EXTR ... 'component';`.
  - `@EXCEL1 name 'file.csv';` or `@EXCEL1 name (CHAI 'prefix' VAR '.csv');` writes `name` to a
    CSV file, the name of which may be assembled from literals and variables.

Tokens are grouped into statements, each ending with `;`. Comments are dropped, so a statement may
run over several lines and commented-out code is never reported. Command names compare without
regard to case.

*/

use std::fmt::{Display, Formatter};
use std::mem;
use std::path::Path;

use crate::lexer::{Category, LexedDocument, Token};

use super::FILE_EXTENSION;

/// The file a console output is read back from.
pub const CONSOLE_FILE: &str = "out.txt";


/// Where the value of an output variable is written.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum OutputSource {
  /// Printed by `MESS`, looked up by name in `out.txt`.
  Console,
  /// Written to the named file by `OPTI SORT` or `@EXCEL1`.
  File(String),
}

impl OutputSource {
  pub fn is_csv(&self) -> bool {
    match self {
      OutputSource::Console => false,
      OutputSource::File(name) => name.ends_with(".csv"),
    }
  }

  pub fn file_name(&self) -> &str {
    match self {
      OutputSource::Console => CONSOLE_FILE,
      OutputSource::File(name) => name,
    }
  }
}

impl Display for OutputSource {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.pad(self.file_name())
  }
}


#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Output {
  pub name   : String,
  pub source : OutputSource,
}


/// Whether `path` is a Gibiane dataset this crate knows how to read.
pub fn accepts_dataset(path: &Path) -> bool {
  path.is_file() && has_dataset_extension(path)
}

pub fn has_dataset_extension(path: &Path) -> bool {
  path.extension().map_or(false, |extension| extension == FILE_EXTENSION)
}


/// Lists the output variables of a lexed Gibiane script. A name declared twice keeps its first
/// position and its last source.
pub fn discover(document: &LexedDocument) -> Vec<Output> {
  let statements = statements(document);
  let mut outputs = Vec::new();

  for statement in &statements {
    if let Some(name) = printed_name(statement) {
      record(&mut outputs, name, OutputSource::Console);
    }
  }

  for (sort, name, file) in sort_outputs(&statements) {
    match sort {
      SortKind::Chain => record(&mut outputs, name, OutputSource::File(file.to_string())),

      SortKind::Excel => {
        let columns = table_columns(&statements, name);
        if columns.is_empty() {
          tracing::warn!(table = name, file, "no column definitions found for table written by SORT");
        }
        for column in columns {
          record(&mut outputs, &column, OutputSource::File(file.to_string()));
        }
      }
    }
  }

  for statement in &statements {
    if let Some((name, file)) = excel1_output(&statements, statement) {
      record(&mut outputs, name, OutputSource::File(file));
    }
  }

  outputs
}

fn record(outputs: &mut Vec<Output>, name: &str, source: OutputSource) {
  match outputs.iter_mut().find(|output| output.name == name) {
    Some(output) => output.source = source,
    None => outputs.push(Output { name: name.to_string(), source }),
  }
}


/// A statement reduced to what output discovery looks at.
#[derive(Clone, Debug, Eq, PartialEq)]
enum Item<'t> {
  Word(&'t str),
  /// Body of a quoted string, doubled quotes undone.
  Literal(String),
  Symbol(&'t str),
}

type Statement<'t> = Vec<Item<'t>>;

impl<'t> Item<'t> {
  fn is_word(&self, word: &str) -> bool {
    matches!(self, Item::Word(w) if w.eq_ignore_ascii_case(word))
  }

  fn is_symbol(&self, symbol: &str) -> bool {
    matches!(self, Item::Symbol(s) if *s == symbol)
  }

  fn word(&self) -> Option<&'t str> {
    match self {
      Item::Word(word) => Some(*word),
      _ => None,
    }
  }

  fn literal(&self) -> Option<&str> {
    match self {
      Item::Literal(text) => Some(text.as_str()),
      _ => None,
    }
  }
}

fn statements<'t>(document: &LexedDocument<'t>) -> Vec<Statement<'t>> {
  let mut statements = Vec::new();
  let mut current    = Vec::new();
  let mut literal: Option<String> = None;

  for line in &document.lines {
    for token in &line.tokens {
      if let Some(mut body) = literal.take() {
        match token.category {
          Category::String if token.text == "'" => current.push(Item::Literal(body)),
          Category::Escape => {
            body.push('\'');
            literal = Some(body);
          }
          _ => {
            body.push_str(token.text);
            literal = Some(body);
          }
        }
        continue;
      }

      match token.category {
        Category::Comment => {}
        Category::String => literal = Some(String::new()),
        Category::Punctuation if token.text == ";" => {
          if !current.is_empty() {
            statements.push(mem::take(&mut current));
          }
        }
        Category::Text => {
          let text = token.text.trim();
          if !text.is_empty() {
            current.push(Item::Word(text));
          }
        }
        Category::Operator | Category::Punctuation | Category::LeftParen | Category::RightParen => {
          current.push(Item::Symbol(token.text.trim()));
        }
        // `TAB . ` at the start of a line is one token.
        Category::Variable if token.text.ends_with('.') => {
          let text = token.text;
          current.push(Item::Word(text[..text.len() - 1].trim()));
          current.push(Item::Symbol("."));
        }
        _ => current.push(Item::Word(word_at(line.text, token))),
      }
    }

    if let Some(body) = literal.as_mut() {
      body.push('\n');
    }
  }

  if !current.is_empty() {
    statements.push(current);
  }
  statements
}

/// The token's text, with the `@` of a procedure call such as `@EXCEL1`, which no rule matches.
fn word_at<'t>(line: &'t str, token: &Token<'t>) -> &'t str {
  if token.start > 0 && line.as_bytes()[token.start - 1] == b'@' {
    &line[token.start - 1..token.end()]
  } else {
    token.text
  }
}

fn is_name(text: &str) -> bool {
  !text.is_empty() && text.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}


// `MESS 'name=' ...;`
fn printed_name<'s>(statement: &'s Statement) -> Option<&'s str> {
  if !statement.first()?.is_word("MESS") {
    return None;
  }
  let text = statement.get(1)?.literal()?;
  let end  = text.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))?;
  let name = &text[..end];

  if is_name(name) && text[end..].trim() == "=" {
    Some(name)
  } else {
    None
  }
}


#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum SortKind {
  Chain,
  Excel,
}

// `OPTI SORT 'file';` immediately followed by `SORT 'EXCE' name;` or `SORT 'CHAI' name;`.
fn sort_outputs<'s>(statements: &'s [Statement]) -> Vec<(SortKind, &'s str, &'s str)> {
  let mut found = Vec::new();

  for pair in statements.windows(2) {
    let (opti, sort) = (&pair[0], &pair[1]);

    let file = match opti.as_slice() {
      [first, second, Item::Literal(file)] if first.is_word("OPTI") && second.is_word("SORT") => file,
      _ => continue,
    };
    if file.is_empty() || !file.split('.').all(|part| part.is_empty() || is_name(part)) {
      continue;
    }

    if let [keyword, Item::Literal(kind), Item::Word(name)] = sort.as_slice() {
      if !keyword.is_word("SORT") || !is_name(name) {
        continue;
      }
      let kind = kind.to_ascii_uppercase();
      match kind.as_str() {
        "EXCE" | "EXCEL" => found.push((SortKind::Excel, *name, file.as_str())),
        "CHAI" | "CHAINE" => found.push((SortKind::Chain, *name, file.as_str())),
        _ => {}
      }
    }
  }

  found
}


/// Column names of the table `name` written by `SORT 'EXCE'`.
fn table_columns(statements: &[Statement], name: &str) -> Vec<String> {
  let declared = statements.iter().position(|statement| {
    matches!(statement.as_slice(), [var, eq, table]
      if var.is_word(name) && eq.is_symbol("=") && table.is_word("TABLE"))
  });

  if let Some(declared) = declared {
    let columns: Vec<String> = statements[declared + 1..]
        .iter()
        .filter_map(|statement| table_field(statement, name))
        .map(str::to_string)
        .collect();
    if !columns.is_empty() {
      return columns;
    }
  }

  for statement in statements {
    let rest = match assigned(statement, name) {
      Some(rest) => rest,
      None => continue,
    };

    // `name = EVOL MANU 'x' xs 'y' ys;`
    if rest.len() > 2 && rest[0].is_word("EVOL") && rest[1].is_word("MANU") {
      let titles: Vec<&str> = rest[2..].iter().filter_map(Item::literal).collect();
      if titles.len() == 2 {
        return titles.into_iter().map(str::to_string).collect();
      }
    }

    // `name = EXTR object 'component';` yields one unnamed column.
    if rest.first().map_or(false, |item| item.is_word("EXTR"))
        && rest.iter().filter_map(Item::literal).count() == 1
    {
      return vec![name.to_string()];
    }
  }

  Vec::new()
}

// `name . 'field' = ...;`
fn table_field<'s>(statement: &'s Statement, name: &str) -> Option<&'s str> {
  match statement.as_slice() {
    [var, dot, Item::Literal(field), eq, ..]
      if var.is_word(name) && dot.is_symbol(".") && eq.is_symbol("=") =>
    {
      let field = field.trim_end();
      if is_name(field) { Some(field) } else { None }
    }
    _ => None,
  }
}

/// The right-hand side of `name = ...;`.
fn assigned<'a, 't>(statement: &'a Statement<'t>, name: &str) -> Option<&'a [Item<'t>]> {
  match statement.as_slice() {
    [var, eq, rest @ ..] if var.is_word(name) && eq.is_symbol("=") => Some(rest),
    _ => None,
  }
}


// `@EXCEL1 name 'file.csv';` or `@EXCEL1 name (CHAI[NE] parts...);`
fn excel1_output<'s>(statements: &[Statement], statement: &'s Statement) -> Option<(&'s str, String)> {
  if !statement.first()?.is_word("@EXCEL1") {
    return None;
  }
  let name = statement.get(1)?.word().filter(|name| is_name(name))?;

  match &statement[2..] {
    [Item::Literal(file), ..] => {
      let stem = file.strip_suffix(".csv")?;
      if is_name(stem) { Some((name, file.clone())) } else { None }
    }

    [open, chain, parts @ ..] if open.is_symbol("(") && (chain.is_word("CHAI") || chain.is_word("CHAINE")) => {
      let mut file = String::new();
      for part in parts.iter().take_while(|part| !part.is_symbol(")")) {
        match part {
          Item::Literal(text) => file.push_str(text),
          Item::Word(variable) => match value_of(statements, variable) {
            Some(value) => file.push_str(&value),
            None => {
              tracing::warn!(output = name, variable = *variable, "cannot resolve @EXCEL1 file name");
              return None;
            }
          },
          Item::Symbol(_) => return None,
        }
      }
      Some((name, file))
    }

    _ => None,
  }
}

/// The text assigned to `variable` by its first `variable = ...;` statement.
fn value_of(statements: &[Statement], variable: &str) -> Option<String> {
  let rest = statements.iter().find_map(|statement| assigned(statement, variable))?;
  if rest.is_empty() {
    return None;
  }

  let parts: Vec<&str> = rest
      .iter()
      .map(|item| match item {
        Item::Word(text) | Item::Symbol(text) => *text,
        Item::Literal(text) => text.as_str(),
      })
      .collect();
  Some(parts.join(" "))
}
