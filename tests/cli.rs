//! Runs the `gibi-lex` binary on small scripts and checks its output and exit status.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn gibi_lex(args: &[&str], stdin: &str) -> Output {
  let mut child = Command::new(env!("CARGO_BIN_EXE_gibi-lex"))
      .args(args)
      .env("RUST_LOG", "off")
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped())
      .spawn()
      .expect("gibi-lex starts");

  child.stdin
       .take()
       .expect("stdin is piped")
       .write_all(stdin.as_bytes())
       .expect("stdin accepts the script");
  child.wait_with_output().expect("gibi-lex runs to completion")
}

fn stdout(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
  String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn prints_tokens() {
  let output = gibi_lex(&[], "SI (X EGA 2);\n");
  assert_eq!(output.status.code(), Some(0));
  let printed = stdout(&output);
  assert!(printed.starts_with("1:1\tkeyword.control\t\"SI\"\n"), "{}", printed);
  assert!(printed.contains("1:13\tpunctuation.operator\t\";\"\n"), "{}", printed);
}

#[test]
fn category_filter_and_coalescing() {
  let output = gibi_lex(&["--coalesce", "--only", "string"], "MESS 'bonjour';\n");
  assert_eq!(stdout(&output), "1:6\tstring\t\"'bonjour'\"\n");
}

#[test]
fn unterminated_string_exits_with_one() {
  let output = gibi_lex(&["--color", "never"], "OPTI DIME 3;\nMESS 'oops;\n");
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("unterminated `string` construct"), "{}", stderr(&output));
}

#[test]
fn completions() {
  let output = gibi_lex(&["--complete", "fins"], "");
  assert_eq!(output.status.code(), Some(0));
  let printed = stdout(&output);
  assert!(
    printed.lines().any(|line| line.starts_with("FINSI") && line.ends_with("keyword.control")),
    "{}",
    printed
  );
  assert!(printed.lines().all(|line| line.starts_with("FINS")), "{}", printed);
}

#[test]
fn stats_go_to_stderr() {
  let output = gibi_lex(&["--stats"], "X = 1;\nY = 2;\n");
  assert_eq!(output.status.code(), Some(0));
  assert!(stderr(&output).starts_with("3 lines, 10 lines of output, lexed in "), "{}", stderr(&output));
}

#[test]
fn lists_outputs() {
  let script = "MESS 'dep_P2=' dep_P2;\nOPTI SORT 'res.txt';\nSORT 'CHAI' ch;\n";
  let output = gibi_lex(&["--outputs"], script);
  assert_eq!(output.status.code(), Some(0));
  assert_eq!(stdout(&output), "dep_P2\tout.txt\nch\tres.txt\n");
}

#[test]
fn reads_results_from_run_directory() {
  let dir = tempfile::tempdir().unwrap();
  fs::write(dir.path().join("out.txt"), " dep_P2= -1.5E-03\n").unwrap();
  let script = dir.path().join("poutre.dgibi");
  fs::write(&script, "MESS 'dep_P2=' dep_P2;\nMESS 'absent=' absent;\n").unwrap();

  let run = dir.path().to_str().unwrap();
  let output = gibi_lex(&["--results", run, script.to_str().unwrap()], "");
  assert_eq!(output.status.code(), Some(0));
  assert_eq!(stdout(&output), "dep_P2\t-0.0015\nabsent\tmissing: no value for 'absent' in 'out.txt'\n");
}

#[test]
fn missing_file_exits_with_two() {
  let output = gibi_lex(&["does/not/exist.dgibi"], "");
  assert_eq!(output.status.code(), Some(2));
  assert!(stderr(&output).starts_with("Error: "), "{}", stderr(&output));
}
