/*!

The keyword classifier: an immutable map from keyword to category, consulted by rules whose label
is `Label::Keyword`.

Keywords are stored case folded to uppercase and `classify` folds its argument the same way, so
callers never fold. The table lives in a Patricia trie, which also yields the keywords sharing a
prefix for completion.

*/

use patricia_tree::PatriciaMap;

use super::Category;
use crate::error::{ConfigError, DuplicateKeywordError};

pub struct KeywordTable {
  words: PatriciaMap<Category>,
}

impl KeywordTable {

  /// Builds the table from `(category, space separated keywords)` pairs. A keyword listed under
  /// two different categories is rejected.
  pub fn new(lists: &[(Category, &str)]) -> Result<Self, ConfigError> {
    let mut words = PatriciaMap::new();

    for &(category, list) in lists {
      for word in list.split_whitespace() {
        let key = fold(word);
        match words.get(key.as_bytes()) {
          Some(&first) if first != category => {
            return Err(DuplicateKeywordError::new(key, first, category).into());
          }
          Some(_) => {} // Listed twice under the same category.
          None => {
            words.insert(key.as_bytes(), category);
          }
        }
      }
    }

    tracing::debug!(keywords = words.len(), "built keyword table");
    Ok(KeywordTable { words })
  }

  pub fn classify(&self, word: &str) -> Option<Category> {
    self.words.get(fold(word).as_bytes()).copied()
  }

  /// All keywords beginning with `prefix`, in lexicographic order.
  pub fn completions(&self, prefix: &str) -> Vec<(String, Category)> {
    let mut found: Vec<(String, Category)> =
      self.words
          .iter_prefix(fold(prefix).as_bytes())
          .map(|(key, &category)| (String::from_utf8_lossy(&key).into_owned(), category))
          .collect();
    found.sort_by(|a, b| a.0.cmp(&b.0));
    found
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }
}

fn fold(word: &str) -> String {
  word.to_uppercase()
}
