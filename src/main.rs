use jpick::iterate;
use jpick::jsonpath::PathDisplay;
use jpick::parser::JsonTokens;
use jpick::parser::TokenError;
use jpick::valuer;

use std::process::exit;

/// Prints the path of every value in the incoming json, streaming, so
/// it works on documents of any size. With -d, also decodes and prints
/// each value whose rendered path equals the given one.
fn main() {
  env_logger::init();

  // Quick'n'Dirty command line arg dispatch
  let args : Vec<String> = std::env::args().collect();
  let args : Vec<&str> = args.iter().map(String::as_str).collect();
  match &args[1..] {
    ["-h"] => {
      println!("jpick [-d PATH] [file]\n  reads json from file or stdin, prints the path of every value\n  -d PATH   also decode and print values at the rendered path, eg -d '.\"some\"[].\"nested\"'");
    }
    ["-d", target, rst @ ..] => run(rst, Some(*target)),
    rst => run(rst, None),
  }
}

fn run<S>(maybe_readable_args : &[S], target : Option<&str>)
where S : AsRef<str> + std::convert::AsRef<std::path::Path> + std::fmt::Debug
{
  let istream = jpick::make_readable(maybe_readable_args);
  let mut tokens = JsonTokens::new(istream);

  let res = iterate::iterate(&mut tokens, |path, src| {
    let rendered = PathDisplay(path).to_string();
    println!("{rendered}");
    if target == Some(rendered.as_str()) {
      let value = valuer::decode_value(src)?;
      println!("{value}");
    }
    Ok::<(), TokenError>(())
  });

  if let Err(err) = res {
    log::error!("ending event reading because {err}");
    exit(1)
  }
}
