//! The split/fold engine every notation is built from.
//!
//! A [`Rule`] describes a notation through a handful of hooks:
//!
//! - a [`Splitter`] marking the boundaries between parts,
//! - a [`Blanks`] policy deciding whether blank fragments become parts,
//! - a transform applied to every part after parsing (default: lowercase),
//! - a transform applied to every part before printing (default: identity),
//! - a [`Separator`] printed in front of parts.
//!
//! Parsing splits the source at every boundary and transforms the fragments
//! by position. Printing transforms the parts by position and folds them left
//! to right, emitting the separator in front of each one.
//!
//! ```
//! use string_notation::{Word, rule::{Rule, Splitter}};
//!
//! const KEBAB: Rule = Rule::new("KebabCase", Splitter::Char('-')).separated_by("-");
//!
//! assert_eq!(KEBAB.parse("Some-Kebab"), Word::new(["some", "kebab"]));
//! assert_eq!(KEBAB.print(&Word::new(["a", "b"])), "a-b");
//! ```

use std::fmt;

use notation_core::chars::char_is_uppercase_letter;
use once_cell::sync::Lazy;
use regex_automata::meta::Regex;
use smallvec::SmallVec;

use crate::{
  Tendril,
  case_convention::to_lower_case,
  notation::Notation,
  word::Word,
};

pub type PartHook = fn(usize, &str) -> Tendril;

/// Where a source string is split into parts.
#[derive(Clone, Copy)]
pub enum Splitter {
  /// At every occurrence of the character, which is dropped.
  Char(char),
  /// At every match of the pattern, which is dropped.
  Pattern(fn() -> &'static Regex),
  /// In front of every uppercase letter that is preceded by any character.
  CamelCase,
  /// At every `_`, which is dropped, and at every camel-case boundary.
  SnakeOrCamelCase,
}

impl Splitter {
  /// Splits `source` into fragments. There is always at least one fragment,
  /// empty input yields a single empty fragment.
  pub fn split<'a>(&self, source: &'a str) -> SmallVec<[&'a str; 8]> {
    match *self {
      Self::Char(separator) => source.split(separator).collect(),
      Self::Pattern(pattern) => pattern()
        .split(source)
        .map(|span| &source[span.range()])
        .collect(),
      Self::CamelCase => split_camel_case(source, false),
      Self::SnakeOrCamelCase => split_camel_case(source, true),
    }
  }
}

impl fmt::Debug for Splitter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Char(separator) => f.debug_tuple("Char").field(separator).finish(),
      Self::Pattern(_) => f.write_str("Pattern"),
      Self::CamelCase => f.write_str("CamelCase"),
      Self::SnakeOrCamelCase => f.write_str("SnakeOrCamelCase"),
    }
  }
}

fn split_camel_case(source: &str, at_underscore: bool) -> SmallVec<[&str; 8]> {
  let mut fragments = SmallVec::new();
  let mut start = 0;
  for (index, ch) in source.char_indices() {
    if at_underscore && ch == '_' {
      fragments.push(&source[start..index]);
      start = index + ch.len_utf8();
    } else if index > 0 && char_is_uppercase_letter(ch) {
      fragments.push(&source[start..index]);
      start = index;
    }
  }
  fragments.push(&source[start..]);
  fragments
}

/// One or more whitespace characters.
pub fn whitespace() -> &'static Regex {
  static REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::builder()
      .build(r"\s+")
      .expect("whitespace regex should compile")
  });
  &REGEX
}

/// What happens to fragments that are empty or consist of whitespace only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blanks {
  /// Blank fragments are not parts. Consecutive separators collapse.
  Drop,
  /// Every fragment is a part. A leading empty part records a leading
  /// separator, which is how absolute paths survive a round trip.
  Keep,
}

impl Blanks {
  #[inline]
  pub fn keeps(self, fragment: &str) -> bool {
    match self {
      Self::Drop => !fragment.trim().is_empty(),
      Self::Keep => true,
    }
  }
}

/// What is printed in front of a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
  None,
  /// The string is printed in front of every part but the first.
  Inner(&'static str),
}

impl Separator {
  #[inline]
  pub fn before(self, index: usize) -> &'static str {
    match self {
      Self::Inner(separator) if index > 0 => separator,
      _ => "",
    }
  }
}

/// Lowercases every part.
pub fn lowercase(_index: usize, part: &str) -> Tendril {
  to_lower_case(part.chars())
}

/// Leaves parts untouched.
pub fn keep(_index: usize, part: &str) -> Tendril {
  Tendril::from(part)
}

#[derive(Clone, Copy)]
pub struct Rule {
  pub name:         &'static str,
  pub split:        Splitter,
  pub blanks:       Blanks,
  pub after_parse:  PartHook,
  pub before_print: PartHook,
  pub separator:    Separator,
}

impl Rule {
  /// A rule that drops blank fragments, lowercases parsed parts, prints parts
  /// unchanged and prints no separator.
  pub const fn new(name: &'static str, split: Splitter) -> Self {
    Self {
      name,
      split,
      blanks: Blanks::Drop,
      after_parse: lowercase,
      before_print: keep,
      separator: Separator::None,
    }
  }

  pub const fn keep_blanks(mut self) -> Self {
    self.blanks = Blanks::Keep;
    self
  }

  pub const fn after_parse(mut self, hook: PartHook) -> Self {
    self.after_parse = hook;
    self
  }

  pub const fn before_print(mut self, hook: PartHook) -> Self {
    self.before_print = hook;
    self
  }

  pub const fn separated_by(mut self, separator: &'static str) -> Self {
    self.separator = Separator::Inner(separator);
    self
  }

  pub fn parse(&self, source: &str) -> Word {
    let word: Word = self
      .split
      .split(source)
      .into_iter()
      .filter(|fragment| self.blanks.keeps(fragment))
      .enumerate()
      .map(|(index, fragment)| (self.after_parse)(index, fragment))
      .collect();
    tracing::trace!(notation = self.name, parts = word.len(), "parsed {source:?}");
    word
  }

  pub fn print(&self, word: &Word) -> String {
    let printed = word
      .parts()
      .enumerate()
      .map(|(index, part)| (self.before_print)(index, part))
      .enumerate()
      .fold(String::new(), |mut printed, (index, part)| {
        printed.push_str(self.separator.before(index));
        printed.push_str(&part);
        printed
      });
    tracing::trace!(notation = self.name, parts = word.len(), "printed {printed:?}");
    printed
  }
}

impl fmt::Debug for Rule {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Rule")
      .field("name", &self.name)
      .field("split", &self.split)
      .field("blanks", &self.blanks)
      .field("separator", &self.separator)
      .finish_non_exhaustive()
  }
}

impl Notation for Rule {
  fn parse(&self, source: &str) -> Word {
    Rule::parse(self, source)
  }

  fn print(&self, word: &Word) -> String {
    Rule::print(self, word)
  }
}

/// Declares a unit struct notation backed entirely by a [`Rule`].
macro_rules! rule_notation {
  ($(#[$meta:meta])* $name:ident => $rule:expr) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct $name;

    impl $name {
      pub const RULE: $crate::rule::Rule = $rule;
    }

    impl $crate::notation::Notation for $name {
      fn parse(&self, source: &str) -> $crate::word::Word {
        Self::RULE.parse(source)
      }

      fn print(&self, word: &$crate::word::Word) -> String {
        Self::RULE.print(word)
      }
    }
  };
}

pub(crate) use rule_notation;

#[cfg(test)]
mod test {
  use super::*;
  use crate::word;

  const DASHED: Rule = Rule::new("Dashed", Splitter::Char('-')).separated_by("-");
  const SPACED: Rule = Rule::new("Spaced", Splitter::Pattern(whitespace))
    .keep_blanks()
    .after_parse(keep)
    .separated_by(" ");

  #[test]
  fn test_split_camel_case() {
    assert_eq!(Splitter::CamelCase.split("imInCamelCase").as_slice(), [
      "im", "In", "Camel", "Case"
    ]);
    assert_eq!(Splitter::CamelCase.split("ABCWord").as_slice(), [
      "A", "B", "C", "Word"
    ]);
    assert_eq!(Splitter::CamelCase.split("Über").as_slice(), ["Über"]);
    assert_eq!(Splitter::CamelCase.split("").as_slice(), [""]);
  }

  #[test]
  fn test_split_snake_or_camel_case() {
    assert_eq!(Splitter::SnakeOrCamelCase.split("a_bC").as_slice(), [
      "a", "b", "C"
    ]);
    assert_eq!(Splitter::SnakeOrCamelCase.split("a_B").as_slice(), [
      "a", "", "B"
    ]);
    assert_eq!(Splitter::SnakeOrCamelCase.split("_a_").as_slice(), [
      "", "a", ""
    ]);
  }

  #[test]
  fn test_split_pattern() {
    assert_eq!(Splitter::Pattern(whitespace).split("a \t b\nc").as_slice(), [
      "a", "b", "c"
    ]);
    assert_eq!(Splitter::Pattern(whitespace).split("").as_slice(), [""]);
    assert_eq!(Splitter::Pattern(whitespace).split(" a ").as_slice(), [
      "", "a", ""
    ]);
  }

  #[test]
  fn test_split_char() {
    assert_eq!(Splitter::Char('/').split("/a//b/").as_slice(), [
      "", "a", "", "b", ""
    ]);
  }

  #[test]
  fn default_hooks() {
    assert_eq!(DASHED.parse("Some-MIXED-case"), word!("some", "mixed", "case"));
    assert_eq!(DASHED.print(&word!("Some", "MIXED")), "Some-MIXED");
  }

  #[test]
  fn drops_blank_fragments() {
    assert_eq!(DASHED.parse("-a--b- -"), word!("a", "b"));
    assert_eq!(DASHED.parse(""), word!());
    assert_eq!(DASHED.print(&word!()), "");
  }

  #[test]
  fn keeps_blank_fragments() {
    assert_eq!(SPACED.parse(" A b "), word!("", "A", "b", ""));
    assert_eq!(SPACED.parse(""), word!(""));
    assert_eq!(SPACED.print(&word!("", "A", "b", "")), " A b ");
  }

  #[test]
  fn separator_is_printed_between_parts() {
    assert_eq!(Separator::None.before(0), "");
    assert_eq!(Separator::None.before(3), "");
    assert_eq!(Separator::Inner("_").before(0), "");
    assert_eq!(Separator::Inner("_").before(1), "_");
    assert_eq!(DASHED.print(&word!("", "", "a")), "--a");
  }

  #[test]
  fn hooks_receive_part_index() {
    fn number(index: usize, part: &str) -> Tendril {
      format!("{index}{part}").into()
    }
    let rule = Rule::new("Numbered", Splitter::Char('.'))
      .after_parse(number)
      .before_print(number)
      .separated_by(".");
    assert_eq!(rule.parse("a.b.c"), word!("0a", "1b", "2c"));
    assert_eq!(rule.print(&word!("a", "b")), "0a.1b");
  }
}
