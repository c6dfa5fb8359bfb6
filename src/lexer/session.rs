use super::StateId;

/// Per-document lexing state: which state the next line starts in.
///
/// Sessions are plain values. Lexing a line consumes one and returns its successor, so a host can
/// keep the session each line was entered with and restart lexing from any line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct LexerSession {
  state: StateId,
}

impl LexerSession {
  pub(crate) fn new(state: StateId) -> Self {
    LexerSession { state }
  }

  pub fn state(&self) -> StateId {
    self.state
  }
}
