/*!
  Token categories. Each category carries the dotted scope label editor themes key their styles
  on, so a host maps a token straight to a style without knowing anything about the language.
*/

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use phf::phf_map;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Category {
  Comment,
  String,
  Escape,
  LeftParen,
  RightParen,
  Numeric,
  StorageType,
  Text,
  FunctionName,
  ControlKeyword,
  Parameter,
  Variable,
  Operator,
  Punctuation,
  LanguageConstant,
  BuiltinFunction,
  Identifier,
}

static CATEGORY_LABELS: phf::Map<&'static str, Category> = phf_map! {
  "comment.line.character"   => Category::Comment,
  "string"                   => Category::String,
  "constant.language.escape" => Category::Escape,
  "paren.lparen"             => Category::LeftParen,
  "paren.rparen"             => Category::RightParen,
  "constant.numeric"         => Category::Numeric,
  "storage.type"             => Category::StorageType,
  "text"                     => Category::Text,
  "entity.name.function"     => Category::FunctionName,
  "keyword.control"          => Category::ControlKeyword,
  "variable.parameter"       => Category::Parameter,
  "variable.other"           => Category::Variable,
  "keyword.operator"         => Category::Operator,
  "punctuation.operator"     => Category::Punctuation,
  "constant.language"        => Category::LanguageConstant,
  "support.function"         => Category::BuiltinFunction,
  "identifier"               => Category::Identifier,
};

impl Category {
  /// The dotted scope label of this category.
  pub fn label(&self) -> &'static str {
    match self {
      Category::Comment          => "comment.line.character",
      Category::String           => "string",
      Category::Escape           => "constant.language.escape",
      Category::LeftParen        => "paren.lparen",
      Category::RightParen       => "paren.rparen",
      Category::Numeric          => "constant.numeric",
      Category::StorageType      => "storage.type",
      Category::Text             => "text",
      Category::FunctionName     => "entity.name.function",
      Category::ControlKeyword   => "keyword.control",
      Category::Parameter        => "variable.parameter",
      Category::Variable         => "variable.other",
      Category::Operator         => "keyword.operator",
      Category::Punctuation      => "punctuation.operator",
      Category::LanguageConstant => "constant.language",
      Category::BuiltinFunction  => "support.function",
      Category::Identifier       => "identifier",
    }
  }

  pub fn from_label(label: &str) -> Option<Category> {
    CATEGORY_LABELS.get(label).copied()
  }

  /// Every known label, in no particular order.
  pub fn labels() -> impl Iterator<Item = &'static str> {
    CATEGORY_LABELS.keys().copied()
  }
}

impl Display for Category {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.pad(self.label())
  }
}


/// A string that names no category.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownCategory(pub String);

impl Display for UnknownCategory {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "unknown token category `{}`", self.0)
  }
}

impl Error for UnknownCategory {}

impl FromStr for Category {
  type Err = UnknownCategory;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Category::from_label(s).ok_or_else(|| UnknownCategory(s.to_string()))
  }
}
