/*!

Rules: a pattern, what to emit when it matches, and an optional state to switch to.

A `RuleSpec` is the declared, `const` form. `Rule` is the compiled form held by a `RuleTable`.
Patterns are compiled with `regex-automata`'s meta engine so that a search can be anchored at the
cursor while the pattern still sees the whole line: `^` keeps meaning "start of line", not "start
of the remaining text".

Patterns are ASCII by default: `\w`, `\d`, `\s`, `\b` and case folding ignore non-ASCII text, so
characters outside the ASCII range are only matched by literals or by an explicit `(?u:...)` group.

*/

use regex_automata::meta::Regex;
use regex_automata::util::syntax;
use regex_automata::{Anchored, Input, PatternID};
use smallvec::SmallVec;

use super::{Category, StateId};
use crate::error::{ConfigError, InvalidPatternError, LabelCountError, PatternProblem};

/// What a matched text (or capture group) is tagged with.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Label {
  Fixed(Category),
  /// Resolved through the keyword table; words it does not know are `Category::Identifier`.
  Keyword,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Emit {
  /// One token spanning the whole match.
  Whole(Label),
  /// One token per non-empty capture group; label `i` tags group `i + 1`.
  Groups(&'static [Label]),
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct RuleSpec {
  pub pattern : &'static str,         //< regex tried at the cursor
  pub emit    : Emit,                 //< tokens produced by a match
  pub next    : Option<&'static str>, //< state to switch to after a match
}

impl RuleSpec {
  pub const fn token(pattern: &'static str, category: Category) -> Self {
    RuleSpec {
      pattern,
      emit: Emit::Whole(Label::Fixed(category)),
      next: None,
    }
  }

  pub const fn keyword(pattern: &'static str) -> Self {
    RuleSpec {
      pattern,
      emit: Emit::Whole(Label::Keyword),
      next: None,
    }
  }

  pub const fn groups(pattern: &'static str, labels: &'static [Label]) -> Self {
    RuleSpec {
      pattern,
      emit: Emit::Groups(labels),
      next: None,
    }
  }

  /// The same rule, switching to `state` when it matches.
  pub const fn then(self, state: &'static str) -> Self {
    RuleSpec {
      next: Some(state),
      ..self
    }
  }
}


/// Byte ranges of a successful match, relative to the start of the line.
pub(crate) struct RuleMatch {
  pub start  : usize,
  pub end    : usize,
  /// Group spans in label order; `None` for groups that did not participate.
  pub groups : SmallVec<[Option<(usize, usize)>; 6]>,
}


pub(crate) struct Rule {
  regex       : Regex,
  pub pattern : &'static str,
  pub emit    : Emit,
  pub next    : Option<StateId>,
}

impl Rule {

  /// Compiles `spec`, the `index`-th rule of `state`. `next` is the already resolved target
  /// state.
  pub fn compile(
    spec             : &RuleSpec,
    state            : &'static str,
    index            : usize,
    case_insensitive : bool,
    next             : Option<StateId>,
  ) -> Result<Rule, ConfigError>
  {
    let config = syntax::Config::new().unicode(false).case_insensitive(case_insensitive);
    let invalid = |problem| {
      InvalidPatternError {
        state,
        rule: index,
        pattern: spec.pattern,
        problem,
      }
    };

    let hir = syntax::parse_with(spec.pattern, &config)
        .map_err(|e| invalid(PatternProblem::Syntax(e.to_string())))?;
    if hir.properties().minimum_len() == Some(0) {
      return Err(invalid(PatternProblem::MatchesEmpty).into());
    }

    let regex = Regex::builder()
        .syntax(config)
        .build(spec.pattern)
        .map_err(|e| invalid(PatternProblem::Syntax(e.to_string())))?;

    if let Emit::Groups(labels) = spec.emit {
      // The group count includes the implicit whole-match group.
      let groups = regex.group_info().group_len(PatternID::ZERO) - 1;
      if groups != labels.len() {
        return Err(
          LabelCountError {
            state,
            rule: index,
            pattern: spec.pattern,
            labels: labels.len(),
            groups,
          }.into()
        );
      }
    }

    Ok(Rule {
      regex,
      pattern: spec.pattern,
      emit: spec.emit,
      next,
    })
  }

  /// Attempts a match beginning exactly at `cursor`.
  pub fn match_at(&self, line: &str, cursor: usize) -> Option<RuleMatch> {
    let input = Input::new(line).range(cursor..).anchored(Anchored::Yes);

    match self.emit {
      Emit::Whole(_) => {
        let found = self.regex.search(&input)?;
        Some(RuleMatch {
          start: found.start(),
          end: found.end(),
          groups: SmallVec::new(),
        })
      }

      Emit::Groups(labels) => {
        let mut captures = self.regex.create_captures();
        self.regex.search_captures(&input, &mut captures);
        let found = captures.get_match()?;
        let groups = (1..=labels.len())
            .map(|group| captures.get_group(group).map(|span| (span.start, span.end)))
            .collect();

        Some(RuleMatch {
          start: found.start(),
          end: found.end(),
          groups,
        })
      }
    }
  }
}
