//! Decodes the next complete value from the token stream into a
//! serde_json::Value. This is the routine a traversal callback hands
//! the shared token source to when it wants the whole subtree.

use crate::parser::Token;
use crate::parser::TokenError;
use crate::parser::TokenSource;

/// Consume the next whole value, scalar or composite, leaving the
/// cursor just past it, ie at the following sibling.
pub fn decode_value<S>(src : &mut S) -> Result<serde_json::Value, TokenError>
where S : TokenSource + ?Sized
{
  let token = src.next_token()?;
  value_from(src, token)
}

fn value_from<S>(src : &mut S, token : Token) -> Result<serde_json::Value, TokenError>
where S : TokenSource + ?Sized
{
  match token {
    Token::Null => Ok(serde_json::Value::Null),
    Token::Boolean(v) => Ok(serde_json::Value::Bool(v)),
    Token::String(v) => Ok(serde_json::Value::String(v)),
    Token::Number(v) => {
      let number : serde_json::Number = match serde_json::from_str(&v) {
        Ok(n) => n,
        Err(msg) => return Err(TokenError::Syntax(format!("{v} appears to be not-a-number {msg}"))),
      };
      Ok(serde_json::Value::Number(number))
    }
    Token::StartArray => {
      let mut elements = vec![];
      loop {
        if matches!(*src.peek()?, Token::EndArray) {
          src.next_token()?;
          return Ok(serde_json::Value::Array(elements))
        }
        elements.push(decode_value(src)?);
      }
    }
    Token::StartObject => {
      let mut members = serde_json::Map::new();
      loop {
        match src.next_token()? {
          Token::Key(key) => { members.insert(key, decode_value(src)?); }
          Token::EndObject => return Ok(serde_json::Value::Object(members)),
          token => return Err(TokenError::Syntax(format!("unexpected {token:?} inside object"))),
        }
      }
    }
    token @ (Token::EndArray | Token::EndObject | Token::Key(_)) =>
      Err(TokenError::Syntax(format!("unexpected {token:?} at value position"))),
  }
}

#[cfg(test)]
mod test_decode_value {
  use super::*;
  use crate::parser::JsonTokens;

  fn decoded(doc : &str) -> serde_json::Value {
    let mut tokens = JsonTokens::new(doc.as_bytes());
    decode_value(&mut tokens).unwrap()
  }

  #[test]
  fn scalars() {
    assert_eq!(decoded("1"), serde_json::json!(1));
    assert_eq!(decoded("-2.5e3"), serde_json::json!(-2.5e3));
    assert_eq!(decoded(r#""hello""#), serde_json::json!("hello"));
    assert_eq!(decoded("true"), serde_json::json!(true));
    assert_eq!(decoded("null"), serde_json::json!(null));
  }

  #[test]
  fn nested() {
    let doc = r#"{"some": [{"nested": {"structure": {"a": 1}}}, [2, 3], []]}"#;
    assert_eq!(decoded(doc), serde_json::json!(
      {"some": [{"nested": {"structure": {"a": 1}}}, [2, 3], []]}
    ));
  }

  #[test]
  fn empty_composites() {
    assert_eq!(decoded("{}"), serde_json::json!({}));
    assert_eq!(decoded("[]"), serde_json::json!([]));
  }

  #[test]
  fn cursor_stops_at_sibling() {
    let mut tokens = JsonTokens::new(r#"[[1, 2], "after"]"#.as_bytes());
    use crate::parser::TokenSource;
    assert_eq!(tokens.next_token().unwrap(), Token::StartArray);
    assert_eq!(decode_value(&mut tokens).unwrap(), serde_json::json!([1, 2]));
    assert_eq!(tokens.next_token().unwrap(), Token::String("after".into()));
  }

  #[test]
  fn truncated_decode_is_eof() {
    let mut tokens = JsonTokens::new(r#"{"a": [1,"#.as_bytes());
    assert_eq!(decode_value(&mut tokens), Err(TokenError::Eof));
  }
}
