/*!
Adapter over the streaming json tokenizer.

Wraps `json_event_parser` so the rest of the crate sees owned
`Token`s, a byte offset, and a consumption cursor. The tokenizer
itself stays an external dependency, this file only adapts it.
*/

use std::cell::RefCell;
use std::rc::Rc;

/// One atomic unit from the tokenizer: a structural marker, an object
/// key, or a scalar. Numbers keep their raw text until someone decodes
/// them, same trick as the tokenizer uses.
#[derive(Debug,Clone,PartialEq,Eq)]
pub enum Token {
  StartObject,
  EndObject,
  StartArray,
  EndArray,
  Key(String),
  String(String),
  Number(String),
  Boolean(bool),
  Null,
}

impl Token {
  fn from_event(ev : json_event_parser::JsonEvent) -> Self {
    use json_event_parser::JsonEvent;
    match ev {
      JsonEvent::String(v) => Token::String(v.to_string()),
      JsonEvent::Number(v) => Token::Number(v.to_string()),
      JsonEvent::Boolean(v) => Token::Boolean(v),
      JsonEvent::Null => Token::Null,
      JsonEvent::StartArray => Token::StartArray,
      JsonEvent::EndArray => Token::EndArray,
      JsonEvent::StartObject => Token::StartObject,
      JsonEvent::EndObject => Token::EndObject,
      JsonEvent::ObjectKey(v) => Token::Key(v.to_string()),
      JsonEvent::Eof => panic!("Eof is not a token"),
    }
  }
}

/// End-of-stream and malformed input are different failures: a streaming
/// caller may treat `Eof` as "more data could still arrive", while
/// `Syntax` is final. The syntax message comes verbatim from the
/// tokenizer.
#[derive(thiserror::Error,Debug,Clone,PartialEq,Eq)]
pub enum TokenError {
  #[error("unexpected end of input")]
  Eof,
  #[error("{0}")]
  Syntax(String),
}

// The tokenizer reports truncated input as a parse error at end of
// file rather than a distinct kind, so fold that shape into Eof here.
fn classify(err : json_event_parser::JsonParseError) -> TokenError {
  let msg = err.to_string();
  let lower = msg.to_ascii_lowercase();
  if lower.contains("end of file") || lower.contains("end of input") || lower.contains("eof") {
    TokenError::Eof
  } else {
    TokenError::Syntax(msg)
  }
}

/// Source of json tokens. The traversal in `iterate` and the decoder in
/// `valuer` only know about this, so they can be fed from anything.
pub trait TokenSource {
  fn next_token(&mut self) -> Result<Token, TokenError>;

  /// Look at the next token without consuming it. Needed to probe for
  /// EndArray without pulling the first token of an element value.
  fn peek(&mut self) -> Result<&Token, TokenError>;

  /// Bytes the tokenizer has pulled from its input so far.
  fn offset(&self) -> u64;

  /// Count of tokens handed out by `next_token`. This is the
  /// consumption cursor: it moves for whoever reads from the source,
  /// peeking does not move it.
  fn tokens_read(&self) -> u64;
}

// The tokenizer owns its reader outright, so the byte counter sits in
// an Rc the adapter keeps a second handle to.
struct SharedReader<R>(Rc<RefCell<countio::Counter<R>>>);

impl<R : std::io::Read> std::io::Read for SharedReader<R> {
  fn read(&mut self, buf : &mut [u8]) -> std::io::Result<usize> {
    use std::io::Read;
    self.0.borrow_mut().read(buf)
  }
}

/// The production `TokenSource`: json tokens from anything `Read`.
pub struct JsonTokens<R : std::io::Read> {
  parser : json_event_parser::ReaderJsonParser<SharedReader<R>>,
  counter : Rc<RefCell<countio::Counter<R>>>,
  peeked : Option<Token>,
  read : u64,
}

impl<R : std::io::Read> JsonTokens<R> {
  pub fn new(istream : R) -> Self {
    let counter = Rc::new(RefCell::new(countio::Counter::new(istream)));
    let parser = json_event_parser::ReaderJsonParser::new(SharedReader(Rc::clone(&counter)));
    Self{parser, counter, peeked: None, read: 0}
  }

  fn pull(&mut self) -> Result<Token, TokenError> {
    match self.parser.parse_next() {
      Ok(json_event_parser::JsonEvent::Eof) => Err(TokenError::Eof),
      Ok(ev) => Ok(Token::from_event(ev)),
      Err(err) => Err(classify(err)),
    }
  }
}

impl<R : std::io::Read> TokenSource for JsonTokens<R> {
  fn next_token(&mut self) -> Result<Token, TokenError> {
    let token = match self.peeked.take() {
      Some(token) => token,
      None => self.pull()?,
    };
    self.read += 1;
    Ok(token)
  }

  fn peek(&mut self) -> Result<&Token, TokenError> {
    if self.peeked.is_none() {
      self.peeked = Some(self.pull()?);
    }
    // just stashed above
    Ok(self.peeked.as_ref().unwrap())
  }

  fn offset(&self) -> u64 {
    self.counter.borrow().reader_bytes() as u64
  }

  fn tokens_read(&self) -> u64 {
    self.read
  }
}
