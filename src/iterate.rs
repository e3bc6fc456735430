/*!
This traverses the incoming json tokens and calls back at every value
position with the path of that value.

The callback is handed the token source as well, so it can decode the
value it was called for through the same cursor. The traversal notices
that, by the consumption cursor having moved, and resumes at the
sibling position instead of descending itself.
*/

use crate::jsonpath::JsonPath;
use crate::jsonpath::PathDisplay;
use crate::jsonpath::Step;
use crate::parser::Token;
use crate::parser::TokenError;
use crate::parser::TokenSource;

/// Why an iteration ended early. `Stop` carries the callback's own
/// error value untouched, so callers can test for the exact sentinel
/// they handed in.
#[derive(thiserror::Error,Debug,PartialEq)]
pub enum IterateError<E> {
  #[error(transparent)]
  Parse(#[from] TokenError),
  #[error("stopped by callback: {0}")]
  Stop(E),
}

/// Walk the whole document on `src`, calling `visit` with the path of
/// every value: composites before descending into them, scalars at the
/// leaf. The callback fires before the value's first token is pulled,
/// so it may consume the value itself via the source it is given.
///
/// Returns after the root value is fully consumed, or on the first
/// error, the callback's included.
pub fn iterate<S, F, E>(src : &mut S, mut visit : F) -> Result<(), IterateError<E>>
where
  S : TokenSource,
  F : FnMut(&JsonPath, &mut S) -> Result<(), E>,
{
  walk(src, &JsonPath::new(), &mut visit)
}

// One value position. parents is the path of the value about to be
// read. Each frame builds its own extended path, so unwinding on any
// exit, error included, restores the parent's view by construction.
fn walk<S, F, E>(src : &mut S, parents : &JsonPath, visit : &mut F) -> Result<(), IterateError<E>>
where
  S : TokenSource,
  F : FnMut(&JsonPath, &mut S) -> Result<(), E>,
{
  let mark = src.tokens_read();
  visit(parents, src).map_err(IterateError::Stop)?;
  if src.tokens_read() != mark {
    // the callback decoded this value through the shared source,
    // the cursor is already at the sibling
    return Ok(())
  }

  match src.next_token()? {
    Token::StartObject => object(src, parents, visit),
    Token::StartArray => array(src, parents, visit),
    Token::String(_) | Token::Number(_) | Token::Boolean(_) | Token::Null => Ok(()),
    token => panic!("should never receive {token:?} at {}", PathDisplay(parents)),
  }
}

fn object<S, F, E>(src : &mut S, parents : &JsonPath, visit : &mut F) -> Result<(), IterateError<E>>
where
  S : TokenSource,
  F : FnMut(&JsonPath, &mut S) -> Result<(), E>,
{
  loop {
    match src.next_token()? {
      Token::Key(key) => walk(src, &parents.push_back(Step::Key(key)), visit)?,
      Token::EndObject => return Ok(()),
      token => panic!("should never receive {token:?} at {}", PathDisplay(parents)),
    }
  }
}

fn array<S, F, E>(src : &mut S, parents : &JsonPath, visit : &mut F) -> Result<(), IterateError<E>>
where
  S : TokenSource,
  F : FnMut(&JsonPath, &mut S) -> Result<(), E>,
{
  let mut index : u64 = 0;
  loop {
    if matches!(*src.peek()?, Token::EndArray) {
      src.next_token()?;
      return Ok(())
    }
    walk(src, &parents.push_back(index.into()), visit)?;
    index += 1;
  }
}
