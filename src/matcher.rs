/*!
Patterns over json paths.

A pattern is a fixed-length sequence of literal keys, literal indexes
and wildcards. It matches a path only when the lengths are equal and
every position agrees, so there is no prefix matching in either
direction.
*/

use crate::jsonpath::JsonPath;
use crate::jsonpath::Step;

/// One pattern element. `Wildcard` stands for any array index at that
/// position, and only an index, never a key.
#[derive(Debug,Clone,PartialEq,Eq)]
pub enum Pat {
  Key(String),
  Index(u64),
  Wildcard,
}

/// The sentinel to write in place of a literal index. Immutable, no
/// behaviour beyond being itself.
pub const WILDCARD : Pat = Pat::Wildcard;

impl Pat {
  fn admits(&self, step : &Step) -> bool {
    match (self, step) {
      (Pat::Wildcard, Step::Index(_)) => true,
      (Pat::Key(k), Step::Key(name)) => k == name,
      (Pat::Index(i), Step::Index(n)) => i == n,
      _ => false,
    }
  }
}

impl From<&str> for Pat {
  fn from(s: &str) -> Self { Self::Key(s.into()) }
}

impl From<String> for Pat {
  fn from(s: String) -> Self { Self::Key(s) }
}

impl From<u64> for Pat {
  fn from(n: u64) -> Self { Self::Index(n) }
}

/// Built once before iteration starts, immutable thereafter, reusable
/// for any number of paths.
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Matcher(Vec<Pat>);

impl Matcher {
  pub fn new(pats : Vec<Pat>) -> Self {
    Self(pats)
  }

  pub fn matches(&self, path : &JsonPath) -> bool {
    if path.len() != self.0.len() { return false }
    self.0.iter().zip(path.iter()).all(|(pat, step)| pat.admits(step))
  }
}

/// The comfortable way to build a [`Matcher`]: string literals become
/// keys, integers become indexes, [`WILDCARD`] stays itself.
///
/// ```
/// use jpick::matcher::WILDCARD;
/// let m = jpick::matcher!["some", WILDCARD, "nested", "structure"];
/// ```
#[macro_export]
macro_rules! matcher {
  ($($seg:expr),* $(,)?) => {
    $crate::matcher::Matcher::new(vec![$($crate::matcher::Pat::from($seg)),*])
  };
}
