/*!

States and the table holding them.

A state is what lex calls a start condition: a named, ordered list of rules that are active while
the lexer is in that state. Order matters. At each position the first rule that matches wins,
regardless of match length.

*/

use byte_set::ByteSet;

use super::rule::{Rule, RuleSpec};
use super::{Category, StateId};
use crate::error::{ConfigError, UnknownStateError};

/// The state a fresh session starts in unless the table says otherwise.
pub const START_STATE: &str = "start";


#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct StateSpec {
  pub name             : &'static str,
  pub case_insensitive : bool,              //< applies to every pattern of the state
  pub default          : Option<Category>,  //< category of characters no rule matches
  pub rules            : &'static [RuleSpec],
}


pub(crate) struct State {
  pub name    : &'static str,
  pub default : Option<Category>,
  pub rules   : Vec<Rule>,
}


/// The compiled state topology of a language. Immutable once built.
pub struct RuleTable {
  /// A `StateId` is just an index into `states`.
  states : Vec<State>,
  start  : StateId,
}

impl RuleTable {

  /// Compiles `specs`, starting sessions in the state named `"start"`.
  pub fn new(specs: &[StateSpec]) -> Result<Self, ConfigError> {
    Self::with_start(specs, START_STATE)
  }

  pub fn with_start(specs: &[StateSpec], start: &'static str) -> Result<Self, ConfigError> {
    if specs.len() > u8::MAX as usize + 1 {
      return Err(ConfigError::TooManyStates(specs.len()));
    }

    // Since the total number of states will always be small, we perform linear searches.
    for (index, spec) in specs.iter().enumerate() {
      if specs[..index].iter().any(|earlier| earlier.name == spec.name) {
        return Err(ConfigError::DuplicateState(spec.name));
      }
    }
    let id_of = |name: &str| specs.iter().position(|spec| spec.name == name).map(|i| i as StateId);

    let start_id = id_of(start).ok_or(ConfigError::MissingStartState(start))?;

    let mut states = Vec::with_capacity(specs.len());
    for spec in specs {
      let mut rules = Vec::with_capacity(spec.rules.len());

      for (index, rule) in spec.rules.iter().enumerate() {
        let next = match rule.next {
          Some(name) => {
            Some(id_of(name).ok_or_else(|| UnknownStateError::new(spec.name, index, name))?)
          }
          None => None,
        };
        rules.push(Rule::compile(rule, spec.name, index, spec.case_insensitive, next)?);
      }

      states.push(State {
        name: spec.name,
        default: spec.default,
        rules,
      });
    }

    let table = RuleTable { states, start: start_id };
    for name in table.unreachable_states() {
      tracing::warn!(state = name, "state is never entered");
    }
    tracing::debug!(states = table.states.len(), start, "built rule table");

    Ok(table)
  }

  pub fn start(&self) -> StateId {
    self.start
  }

  pub fn len(&self) -> usize {
    self.states.len()
  }

  pub fn is_empty(&self) -> bool {
    self.states.is_empty()
  }

  pub fn state_id(&self, name: &str) -> Option<StateId> {
    self.states.iter().position(|state| state.name == name).map(|i| i as StateId)
  }

  /// Name of the state with id `id`. Ids come from this table, so they are always in range.
  pub fn state_name(&self, id: StateId) -> &'static str {
    self.states[id as usize].name
  }

  pub(crate) fn state(&self, id: StateId) -> &State {
    &self.states[id as usize]
  }

  /// Names of declared states that no chain of transitions from the start state enters.
  pub fn unreachable_states(&self) -> Vec<&'static str> {
    let mut reached = ByteSet::new();
    let mut pending = vec![self.start];
    reached.insert(self.start);

    while let Some(id) = pending.pop() {
      for next in self.states[id as usize].rules.iter().filter_map(|rule| rule.next) {
        if !reached.contains(next) {
          reached.insert(next);
          pending.push(next);
        }
      }
    }

    self.states
        .iter()
        .enumerate()
        .filter(|(id, _)| !reached.contains(*id as StateId))
        .map(|(_, state)| state.name)
        .collect()
  }
}
