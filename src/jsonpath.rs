/*!
This is a json path, ie an ordered set of steps,
where each step is either a key name or an index.
It must be optimised for add/remove the last element,
and cloning should be cheap, because every recursion frame
of the traversal keeps its own version.

`rpds::Vector` meets those requirements.
*/

/// The type for Index elements of a json path.
///
/// Highly unlikely the number of elements in a json array will exceed
/// 2^64 ie 18,446,744,073,709,551,616
type IndexInteger = u64;

/// One step in the path, which is either a tag name, or an integer index.
#[derive(Debug,Clone,Ord,PartialEq,Eq,PartialOrd)]
pub enum Step {
  Key(String),
  Index(IndexInteger),
}

/// Display form collapses indexes: `."name"` for keys, `[]` for indexes.
impl std::fmt::Display for Step {
  fn fmt(&self, f : &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match &self {
      Step::Key(v) => write!(f, ".{v:?}"),
      Step::Index(_) => write!(f, "[]"),
    }
  }
}

impl From<IndexInteger> for Step {
  fn from(s: IndexInteger) -> Self { Self::Index(s) }
}

// These are all effectively AsRef
// But E0119 prevents implementing them using a trait.
impl From<&str> for Step {
  fn from(s: &str) -> Self { Self::Key(s.into()) }
}

impl From<String> for Step {
  fn from(s: String) -> Self { Self::Key(s) }
}

// https://docs.rs/rpds/latest/rpds/vector/struct.Vector.html
pub type JsonPath = rpds::Vector<Step>;

/// Renders a whole path root-to-leaf. The empty path renders as the
/// empty string, ie the document root.
pub struct PathDisplay<'a>(pub &'a JsonPath);

impl std::fmt::Display for PathDisplay<'_> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for step in self.0.iter() {
      write!(f, "{step}")?
    }
    Ok(())
  }
}
