/*!
  The command line options of the `gibi-lex` binary.
*/

use codespan_reporting::term::termcolor::ColorChoice;
use structopt::StructOpt;

use gibi_lex::Category;

#[derive(Debug, StructOpt)]
#[structopt(name = "gibi-lex", about = "Lexes Gibiane (.dgibi) source into highlighting tokens.")]
pub struct Options {

  #[structopt(name = "FILE", default_value = "STDIN")]
  /// The Gibiane source file
  pub in_file: String,

  #[structopt(short, long)]
  /// Merge adjacent tokens of the same category
  pub coalesce: bool,

  #[structopt(long = "only", number_of_values = 1)]
  /// Print only tokens of CATEGORY, e.g. keyword.control (repeatable)
  pub only: Vec<Category>,

  #[structopt(long)]
  /// Print the keywords beginning with PREFIX and exit
  pub complete: Option<String>,

  #[structopt(short, long)]
  /// Report line counts and lexing time on stderr
  pub stats: bool,

  #[structopt(long)]
  /// Print the output variables the script declares instead of its tokens
  pub outputs: bool,

  #[structopt(long, value_name = "DIR")]
  /// Print the values of the script's output variables found in the run directory DIR
  pub results: Option<String>,

  #[structopt(long, default_value = "auto", possible_values = &["auto", "always", "never"])]
  /// Color diagnostics
  pub color: String,
}

impl Options {

  pub fn reads_stdin(&self) -> bool {
    self.in_file == "STDIN"
  }

  pub fn color_choice(&self) -> ColorChoice {
    match self.color.as_str() {
      "always" => ColorChoice::Always,
      "never"  => ColorChoice::Never,
      _        => ColorChoice::Auto,
    }
  }

  /// Whether a token of `category` should be printed.
  pub fn shows(&self, category: Category) -> bool {
    self.only.is_empty() || self.only.contains(&category)
  }
}
