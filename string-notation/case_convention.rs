//! The everyday programming notations and the casing helpers behind them.
//!
//! Case mapping uses the default Unicode mappings of `char::to_lowercase` and
//! `char::to_uppercase`, character by character, with no locale tailoring.

use crate::{
  Tendril,
  rule::{Rule, Splitter, keep, rule_notation, whitespace},
};

pub fn to_lower_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  to_lower_case_with(text, &mut res);
  res
}

pub fn to_lower_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  text.for_each(|c| buf.extend(c.to_lowercase()));
}

pub fn to_upper_case(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  to_upper_case_with(text, &mut res);
  res
}

pub fn to_upper_case_with(text: impl Iterator<Item = char>, buf: &mut Tendril) {
  text.for_each(|c| buf.extend(c.to_uppercase()));
}

/// Uppercases the first character and lowercases the rest.
pub fn to_capitalized(text: impl Iterator<Item = char>) -> Tendril {
  let mut res = Tendril::new();
  to_capitalized_with(text, &mut res);
  res
}

pub fn to_capitalized_with(mut text: impl Iterator<Item = char>, buf: &mut Tendril) {
  if let Some(first) = text.next() {
    buf.extend(first.to_uppercase());
  }
  to_lower_case_with(text, buf);
}

fn capitalize(_index: usize, part: &str) -> Tendril {
  to_capitalized(part.chars())
}

fn capitalize_inner(index: usize, part: &str) -> Tendril {
  if index == 0 {
    to_lower_case(part.chars())
  } else {
    to_capitalized(part.chars())
  }
}

fn uppercase(_index: usize, part: &str) -> Tendril {
  to_upper_case(part.chars())
}

rule_notation! {
  /// The `UpperCamelCase` notation.
  ///
  /// A new part starts at every uppercase letter, so acronyms split into
  /// single letters: `HTTPServer` parses as `h`, `t`, `t`, `p`, `server`.
  UpperCamelCase => Rule::new("UpperCamelCase", Splitter::CamelCase).before_print(capitalize)
}

rule_notation! {
  /// The `lowerCamelCase` notation.
  LowerCamelCase => Rule::new("LowerCamelCase", Splitter::CamelCase).before_print(capitalize_inner)
}

rule_notation! {
  /// The `snake_case` notation. Parts keep their case in both directions.
  SnakeCase => Rule::new("SnakeCase", Splitter::Char('_'))
    .after_parse(keep)
    .separated_by("_")
}

rule_notation! {
  /// The `SCREAMING_SNAKE_CASE` notation.
  ScreamingSnakeCase => Rule::new("ScreamingSnakeCase", Splitter::Char('_'))
    .before_print(uppercase)
    .separated_by("_")
}

rule_notation! {
  /// Words written like in normal language. Parts are separated by one or
  /// more whitespace characters and printed separated by a single space.
  NormalWords => Rule::new("NormalWords", Splitter::Pattern(whitespace))
    .after_parse(keep)
    .separated_by(" ")
}
