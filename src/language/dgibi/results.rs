/*!

Reading the values of output variables back from a finished Cast3M run.

  - Console outputs are looked up in `out.txt`, where `MESS 'name=' name;` printed `name= value`.
  - Outputs written to a plain file hold a single number.
  - Outputs written to a CSV file (`;` separated) are either one column, found by its header, or,
    when the file has no header row, the whole file.

A value that cannot be found is reported as `OutputValue::Missing` with the reason, never as an
error, so that one missing file does not hide the other results.

*/

use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

use super::outputs::{Output, OutputSource, CONSOLE_FILE};


#[derive(Clone, Debug, PartialEq)]
pub enum OutputValue {
  Scalar(f64),
  /// One CSV column, header excluded.
  Column(Vec<f64>),
  /// Every column of a CSV file without a header row.
  Table(Vec<Vec<f64>>),
  /// Why no value could be read.
  Missing(String),
}

impl Display for OutputValue {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      OutputValue::Scalar(value) => write!(f, "{}", value),
      OutputValue::Column(values) => write!(f, "{:?}", values),
      OutputValue::Table(columns) => write!(f, "{:?}", columns),
      OutputValue::Missing(reason) => write!(f, "missing: {}", reason),
    }
  }
}


/// Reads the value of every output from the run directory `dir`, in the order of `outputs`.
/// Console outputs are skipped altogether when the run produced no `out.txt`.
pub fn read_results(outputs: &[Output], dir: &Path) -> Vec<(String, OutputValue)> {
  let console = fs::read_to_string(dir.join(CONSOLE_FILE)).ok();
  let mut results = Vec::with_capacity(outputs.len());

  for output in outputs {
    let value = match &output.source {
      OutputSource::Console => match &console {
        Some(text) => console_value(text, &output.name),
        None => continue,
      },
      source => {
        let file = source.file_name();
        match fs::read_to_string(dir.join(file)) {
          Ok(text) if source.is_csv() => csv_value(&text, &output.name, file),
          Ok(text) => file_value(&text, file),
          Err(e) => {
            tracing::debug!(file, error = %e, "cannot read output file");
            OutputValue::Missing(format!("missing output file '{}'", file))
          }
        }
      }
    };
    results.push((output.name.clone(), value));
  }

  results
}

fn console_value(text: &str, name: &str) -> OutputValue {
  match look_for_scalar(text, name) {
    Some(value) => OutputValue::Scalar(value),
    None => OutputValue::Missing(format!("no value for '{}' in '{}'", name, CONSOLE_FILE)),
  }
}

fn file_value(text: &str, file: &str) -> OutputValue {
  match text.trim().parse() {
    Ok(value) => OutputValue::Scalar(value),
    Err(_) => OutputValue::Missing(format!("cannot parse the content of '{}'", file)),
  }
}

fn csv_value(text: &str, name: &str, file: &str) -> OutputValue {
  let columns = read_columns(text);
  let first = match columns.first().and_then(|column| column.first()) {
    Some(first) => first,
    None => return OutputValue::Missing(format!("'{}' is empty", file)),
  };

  if first.parse::<f64>().is_ok() {
    return OutputValue::Table(columns.iter().map(|column| numbers(column)).collect());
  }

  columns
      .iter()
      .find(|column| {
        let header = column[0].as_str();
        !header.is_empty() && (header.contains(name) || name.starts_with(header))
      })
      .map(|column| OutputValue::Column(numbers(&column[1..])))
      .unwrap_or_else(|| OutputValue::Missing(format!("no column '{}' in '{}'", name, file)))
}

/// Cells that are not numbers read as NaN.
fn numbers(cells: &[String]) -> Vec<f64> {
  cells.iter().map(|cell| cell.parse().unwrap_or(f64::NAN)).collect()
}


/// Finds `name= value` in console output. Lines starting with `$` are echoed input and are
/// ignored, as is anything after a `;`. The name matches without regard to case.
pub fn look_for_scalar(text: &str, name: &str) -> Option<f64> {
  if name.is_empty() {
    return None;
  }

  text.lines()
      .filter(|line| !line.starts_with('$'))
      .filter_map(|line| scalar_in(line.split(';').next().unwrap_or(""), name))
      .find_map(|value| value.parse().ok())
}

// The number following the first `name=` of `code` that is followed by one.
fn scalar_in<'c>(code: &'c str, name: &str) -> Option<&'c str> {
  let bytes = code.as_bytes();
  let width = name.len();

  (0..bytes.len()).find_map(|at| {
    let key = bytes.get(at..at + width)?;
    if !key.eq_ignore_ascii_case(name.as_bytes()) || bytes.get(at + width) != Some(&b'=') {
      return None;
    }

    let rest  = &code[at + width + 1..];
    let rest  = rest.trim_start();
    let end   = rest
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')))
        .unwrap_or_else(|| rest.len());

    if end > 0 { Some(&rest[..end]) } else { None }
  })
}


/// Splits `;` separated text into trimmed columns. Short rows are padded with empty cells and
/// columns that are empty throughout are dropped.
pub fn read_columns(text: &str) -> Vec<Vec<String>> {
  let rows: Vec<Vec<&str>> = text
      .lines()
      .filter(|line| !line.trim().is_empty())
      .map(|line| line.split(';').map(|cell| cell.trim().trim_matches('"')).collect())
      .collect();
  let width = rows.iter().map(Vec::len).max().unwrap_or(0);

  (0..width)
      .map(|column| {
        rows.iter()
            .map(|row| row.get(column).copied().unwrap_or("").to_string())
            .collect::<Vec<String>>()
      })
      .filter(|column| column.iter().any(|cell| !cell.is_empty()))
      .collect()
}


#[cfg(test)]
mod test {
  use std::fs;

  use super::*;

  const OUT_TXT: &str = "\
$ MESS 'dep_P2=' dep_P2;
 dep_P2= -1.23450E-03
 force=  2.5E+04 ; fin
";

  const RES_CSV: &str = "\
TEMPS;DX1;;REACT
0.0;0.0;;0.0
0.01;1.5E-4;;1.8459E+003
";

  #[test]
  fn scalar_from_console_output() {
    assert_eq!(look_for_scalar(OUT_TXT, "dep_P2"), Some(-1.2345e-3));
    assert_eq!(look_for_scalar(OUT_TXT, "DEP_p2"), Some(-1.2345e-3));
    assert_eq!(look_for_scalar(OUT_TXT, "force"), Some(2.5e4));
    assert_eq!(look_for_scalar(OUT_TXT, "absent"), None);
  }

  #[test]
  fn echoed_input_is_ignored() {
    assert_eq!(look_for_scalar("$ x= 1\n x= 2\n", "x"), Some(2.0));
    assert_eq!(look_for_scalar("x= abc\nx=3", "x"), Some(3.0));
  }

  #[test]
  fn columns_drop_empty_ones() {
    let columns = read_columns(RES_CSV);
    assert_eq!(columns.len(), 3);
    assert_eq!(columns[0], vec!["TEMPS", "0.0", "0.01"]);
    assert_eq!(columns[2], vec!["REACT", "0.0", "1.8459E+003"]);
  }

  #[test]
  fn column_found_by_header() {
    assert_eq!(csv_value(RES_CSV, "REACT", "res.csv"), OutputValue::Column(vec![0.0, 1845.9]));
    assert_eq!(csv_value(RES_CSV, "DX1", "res.csv"), OutputValue::Column(vec![0.0, 1.5e-4]));
    assert!(matches!(csv_value(RES_CSV, "DY1", "res.csv"), OutputValue::Missing(_)));
  }

  #[test]
  fn headerless_csv_is_a_table() {
    assert_eq!(
      csv_value("1;2\n3;4\n", "T", "t.csv"),
      OutputValue::Table(vec![vec![1.0, 3.0], vec![2.0, 4.0]])
    );
  }

  #[test]
  fn values_from_a_run_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("out.txt"), OUT_TXT).unwrap();
    fs::write(dir.path().join("res.csv"), RES_CSV).unwrap();
    fs::write(dir.path().join("v.txt"), " 42.5\n").unwrap();

    let output = |name: &str, source: OutputSource| Output { name: name.to_string(), source };
    let outputs = vec![
      output("dep_P2", OutputSource::Console),
      output("absent", OutputSource::Console),
      output("REACT", OutputSource::File("res.csv".to_string())),
      output("v", OutputSource::File("v.txt".to_string())),
      output("w", OutputSource::File("w.txt".to_string())),
    ];

    let results = read_results(&outputs, dir.path());
    let names: Vec<&str> = results.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["dep_P2", "absent", "REACT", "v", "w"]);
    assert_eq!(results[0].1, OutputValue::Scalar(-1.2345e-3));
    assert!(matches!(results[1].1, OutputValue::Missing(_)));
    assert_eq!(results[2].1, OutputValue::Column(vec![0.0, 1845.9]));
    assert_eq!(results[3].1, OutputValue::Scalar(42.5));
    assert_eq!(results[4].1, OutputValue::Missing("missing output file 'w.txt'".to_string()));
  }

  #[test]
  fn console_outputs_need_out_txt() {
    let dir = tempfile::tempdir().unwrap();
    let outputs = vec![Output { name: "x".to_string(), source: OutputSource::Console }];
    assert!(read_results(&outputs, dir.path()).is_empty());
  }
}
