/*!
  `gibi-lex`: prints the highlighting tokens of a Gibiane source file, one per line, as
  `line:column<TAB>category<TAB>text`. Lines and columns count from one; columns are bytes.
  With `--outputs` it prints the script's output variables and their files instead, and with
  `--results DIR` their values as found in the run directory `DIR`.

  Exits with status 1 when the file ends inside an unterminated string or procedure header, and
  with status 2 when the file cannot be read.
*/

mod options;

use std::error::Error;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::{self, termcolor::StandardStream};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use gibi_lex::error::FileId;
use gibi_lex::language::dgibi;
use gibi_lex::{coalesce, ToDiagnostic};

use options::Options;

type SourceFiles = SimpleFiles<String, String>;


fn main() {
  tracing_subscriber::fmt()
      .with_env_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gibi_lex=warn"))
      )
      .with_writer(std::io::stderr)
      .init();

  let options = Options::from_args();

  let status = match run(&options) {
    Ok(status) => status,
    Err(e) => {
      eprintln!("Error: {}", e);
      2
    }
  };

  std::process::exit(status)
}


fn run(options: &Options) -> Result<i32, Box<dyn Error>> {
  let mut files = SourceFiles::new();

  let lexer = match dgibi::lexer() {
    Ok(lexer) => lexer,
    Err(e) => {
      report(&e, &files, 0, options)?;
      return Ok(2);
    }
  };

  if let Some(prefix) = &options.complete {
    for (word, category) in lexer.keywords().completions(prefix) {
      println!("{:<12}{}", word, category);
    }
    return Ok(0);
  }

  let (name, source) = read_source(options)?;
  if !options.reads_stdin() && !dgibi::accepts_dataset(Path::new(&name)) {
    tracing::warn!(file = name.as_str(), "not a .{} file, lexing as Gibiane anyway", dgibi::FILE_EXTENSION);
  }
  let file_id = files.add(name, source.clone());

  let started  = quanta::Instant::now();
  let document = lexer.tokenize_document(&source);
  let elapsed  = quanta::Instant::now().duration_since(started);

  let stdout = std::io::stdout();
  let mut out = BufWriter::new(stdout.lock());
  let mut printed = 0;

  if options.outputs || options.results.is_some() {
    let outputs = dgibi::discover(&document);

    match &options.results {
      Some(dir) => {
        for (name, value) in dgibi::read_results(&outputs, Path::new(dir)) {
          writeln!(out, "{}\t{}", name, value)?;
          printed += 1;
        }
      }
      None => {
        for output in &outputs {
          writeln!(out, "{}\t{}", output.name, output.source)?;
          printed += 1;
        }
      }
    }
  } else {
    for (index, line) in document.lines.iter().enumerate() {
      let tokens = if options.coalesce {
        coalesce(line.text, line.tokens.clone())
      } else {
        line.tokens.clone()
      };

      for token in tokens.iter().filter(|token| options.shows(token.category)) {
        writeln!(out, "{}:{}\t{}\t{:?}", index + 1, token.start + 1, token.category, token.text)?;
        printed += 1;
      }
    }
  }
  out.flush()?;

  if options.stats {
    eprintln!(
      "{} lines, {} lines of output, lexed in {:?}",
      document.lines.len(),
      printed,
      elapsed
    );
  }

  match document.incomplete_construct() {
    Some(incomplete) => {
      report(&incomplete, &files, file_id, options)?;
      Ok(1)
    }
    None => Ok(0),
  }
}


/// Reads the input file, or STDIN, returning its display name and contents.
fn read_source(options: &Options) -> std::io::Result<(String, String)> {
  let mut source = String::default();

  if options.reads_stdin() {
    std::io::stdin().read_to_string(&mut source)?;
  } else {
    std::fs::File::open(&options.in_file)?.read_to_string(&mut source)?;
  }

  Ok((options.in_file.clone(), source))
}


fn report<D>(error: &D, files: &SourceFiles, file: FileId, options: &Options) -> std::io::Result<()>
  where D: ToDiagnostic
{
  let writer = StandardStream::stderr(options.color_choice());
  let config = term::Config::default();
  let result = term::emit(&mut writer.lock(), &config, files, &error.to_diagnostic(file));
  result
}
