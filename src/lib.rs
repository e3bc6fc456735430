// tokenizer adapter and path model
pub mod parser;
pub mod jsonpath;

// matching, traversal, decoding
pub mod matcher;
pub mod iterate;
pub mod valuer;

pub use iterate::iterate;
pub use iterate::IterateError;
pub use jsonpath::JsonPath;
pub use jsonpath::PathDisplay;
pub use jsonpath::Step;
pub use matcher::Matcher;
pub use matcher::Pat;
pub use matcher::WILDCARD;
pub use parser::JsonTokens;
pub use parser::Token;
pub use parser::TokenError;
pub use parser::TokenSource;
pub use valuer::decode_value;

/// The idea here was something like ruby's ARGF, ie stdin and then all command line args that are files.
/// But currently it only handles either stdin or a single file.
pub fn make_readable<S>(maybe_readable_args : &[S]) -> Box<dyn std::io::BufRead>
where S : AsRef<str> + std::convert::AsRef<std::path::Path> + std::fmt::Debug
{
  match &maybe_readable_args[..] {
    [] => Box::new(std::io::stdin().lock()),
    [arg_fn] => {
      let file = std::fs::File::open(arg_fn).unwrap_or_else(|err| panic!("cannot open file {arg_fn:?} because {err}"));
      Box::new(std::io::BufReader::new(file))
    }
    _ => panic!("too many args {maybe_readable_args:?}")
  }
}
