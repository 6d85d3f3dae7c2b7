//! The notation-agnostic representation of a string.
//!
//! A [`Word`] is a "word" in the sense of a word over the Unicode alphabet,
//! not a word of a spoken language. It consists of ordered parts: a
//! [`Notation`] parses an input into parts and prints a word by combining its
//! parts. Words are values; every combinator returns a new word and leaves
//! the receiver untouched.
//!
//! # Example
//!
//! ```
//! use string_notation::{LowerCamelCase, NormalWords, SnakeCase, Word, word};
//!
//! let word = Word::from_notation("parse thisInput", &NormalWords)
//!   .parts_from_notation(&LowerCamelCase)
//!   .plus("now");
//! assert_eq!(word, word!("parse", "this", "input", "now"));
//! assert_eq!(word.to_notation(&SnakeCase), "parse_this_input_now");
//! ```

use std::{
  fmt,
  ops::Add,
};

use smallvec::SmallVec;

use crate::{
  Tendril,
  notation::Notation,
};

/// Builds a [`Word`] from a list of parts.
///
/// ```
/// use string_notation::{Word, word};
///
/// assert_eq!(word!("with", "parts"), Word::new(["with", "parts"]));
/// assert!(word!().is_empty());
/// ```
#[macro_export]
macro_rules! word {
  ($($part:expr),* $(,)?) => {{
    let parts: ::std::vec::Vec<$crate::Tendril> = ::std::vec![$($crate::Tendril::from($part)),*];
    $crate::Word::from(parts)
  }};
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
  parts: SmallVec<[Tendril; 4]>,
}

impl Word {
  pub fn new<I, S>(parts: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<Tendril>,
  {
    Self {
      parts: parts.into_iter().map(Into::into).collect(),
    }
  }

  /// Parses `source`, which is expected to be written in `notation`.
  pub fn from_notation<N: Notation + ?Sized>(source: &str, notation: &N) -> Self {
    notation.parse(source)
  }

  /// The parts of this word, in order. Every call starts a fresh iteration.
  pub fn parts(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + Clone + '_ {
    self.parts.iter().map(|part| part.as_str())
  }

  pub fn parts_list(&self) -> &[Tendril] {
    &self.parts
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.parts.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.parts.is_empty()
  }

  /// Prints this word according to `notation`.
  pub fn to_notation<N: Notation + ?Sized>(&self, notation: &N) -> String {
    notation.print(self)
  }

  /// A new word with `part` appended.
  pub fn plus(&self, part: impl Into<Tendril>) -> Self {
    let mut parts = self.parts.clone();
    parts.push(part.into());
    Self { parts }
  }

  /// A new word with all parts of `other` appended.
  pub fn plus_word(&self, other: &Word) -> Self {
    let mut parts = self.parts.clone();
    parts.extend(other.parts.iter().cloned());
    Self { parts }
  }

  pub fn map_parts<F, S>(&self, mut f: F) -> Self
  where
    F: FnMut(&str) -> S,
    S: Into<Tendril>,
  {
    self
      .parts()
      .map(|part| f(part).into())
      .collect::<SmallVec<[Tendril; 4]>>()
      .into()
  }

  /// Replaces every part with the parts `f` produces for it. A part may be
  /// replaced by any number of parts, including none.
  pub fn flat_map_parts<F, I>(&self, mut f: F) -> Self
  where
    F: FnMut(&str) -> I,
    I: IntoIterator,
    I::Item: Into<Tendril>,
  {
    self
      .parts()
      .flat_map(|part| f(part).into_iter().map(Into::into))
      .collect::<SmallVec<[Tendril; 4]>>()
      .into()
  }

  /// Parses every part again using `notation` and flattens the results.
  ///
  /// This composes notations: split on whitespace first, then split every
  /// resulting token on its camel-case boundaries.
  pub fn parts_from_notation<N: Notation + ?Sized>(&self, notation: &N) -> Self {
    self.flat_map_parts(|part| notation.parse(part))
  }
}

impl From<SmallVec<[Tendril; 4]>> for Word {
  fn from(parts: SmallVec<[Tendril; 4]>) -> Self {
    Self { parts }
  }
}

impl<S: Into<Tendril>> From<Vec<S>> for Word {
  fn from(parts: Vec<S>) -> Self {
    Self::new(parts)
  }
}

impl<S: Into<Tendril>, const N: usize> From<[S; N]> for Word {
  fn from(parts: [S; N]) -> Self {
    Self::new(parts)
  }
}

impl<S: Into<Tendril>> FromIterator<S> for Word {
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    Self::new(iter)
  }
}

impl IntoIterator for Word {
  type Item = Tendril;
  type IntoIter = smallvec::IntoIter<[Tendril; 4]>;

  fn into_iter(self) -> Self::IntoIter {
    self.parts.into_iter()
  }
}

impl<'a> IntoIterator for &'a Word {
  type Item = &'a Tendril;
  type IntoIter = std::slice::Iter<'a, Tendril>;

  fn into_iter(self) -> Self::IntoIter {
    self.parts.iter()
  }
}

impl Add<&str> for Word {
  type Output = Word;

  fn add(mut self, part: &str) -> Word {
    self.parts.push(part.into());
    self
  }
}

impl Add<&Word> for Word {
  type Output = Word;

  fn add(mut self, other: &Word) -> Word {
    self.parts.extend(other.parts.iter().cloned());
    self
  }
}

impl Add<Word> for Word {
  type Output = Word;

  fn add(mut self, other: Word) -> Word {
    self.parts.extend(other.parts);
    self
  }
}

impl fmt::Display for Word {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Word(")?;
    for (index, part) in self.parts().enumerate() {
      if index > 0 {
        f.write_str(", ")?;
      }
      write!(f, "{part:?}")?;
    }
    f.write_str(")")
  }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::{LowerCamelCase, NormalWords, ScreamingSnakeCase, word};

  #[test]
  fn exposes_parts_as_list() {
    assert_eq!(word!("with", "parts").parts_list(), ["with", "parts"]);
    assert_eq!(Word::from(vec!["with", "parts"]).parts_list(), ["with", "parts"]);
    assert_eq!(
      Word::new(["with", "parts"].into_iter().map(String::from)).parts_list(),
      ["with", "parts"]
    );
  }

  #[test]
  fn parts_can_be_iterated_repeatedly() {
    let word = word!("with", "parts");
    assert_eq!(word.parts().collect::<Vec<_>>(), ["with", "parts"]);
    assert_eq!(word.parts().rev().collect::<Vec<_>>(), ["parts", "with"]);
    let parts = word.parts();
    assert_eq!(parts.clone().count(), 2);
    assert_eq!(parts.collect::<Vec<_>>(), ["with", "parts"]);
  }

  #[test]
  fn allows_to_add_parts() {
    let word = word!("with");
    let longer = word.plus("more").plus("parts");
    assert_eq!(longer, word!("with", "more", "parts"));
    assert_eq!(word, word!("with"));

    assert_eq!(word!("with") + "more" + "parts", word!("with", "more", "parts"));
  }

  #[test]
  fn allows_to_add_words() {
    let word = word!("with");
    let other = word!("more", "parts");
    assert_eq!(word.plus_word(&other), word!("with", "more", "parts"));
    assert_eq!(word.clone() + &other, word!("with", "more", "parts"));
    assert_eq!(word + other, word!("with", "more", "parts"));
  }

  #[test]
  fn maps_parts() {
    let word = word!("a", "bc");
    assert_eq!(word.map_parts(str::to_uppercase), word!("A", "BC"));
    assert_eq!(word, word!("a", "bc"));
  }

  #[test]
  fn flat_maps_parts() {
    let word = word!("a-b", "", "c");
    assert_eq!(
      word.flat_map_parts(|part| {
        part
          .split('-')
          .filter(|s| !s.is_empty())
          .map(String::from)
          .collect::<Vec<_>>()
      }),
      word!("a", "b", "c")
    );
  }

  #[test]
  fn reparses_parts_in_another_notation() {
    let word = Word::from_notation("some wordsInCamel CASE", &NormalWords);
    assert_eq!(word, word!("some", "wordsInCamel", "CASE"));
    assert_eq!(
      word.parts_from_notation(&LowerCamelCase),
      word!("some", "words", "in", "camel", "c", "a", "s", "e")
    );
    assert_eq!(
      word.parts_from_notation(&ScreamingSnakeCase),
      word!("some", "wordsincamel", "case")
    );
  }

  #[test]
  fn equality_is_structural() {
    assert_eq!(word!("a", "b"), Word::from(["a", "b"]));
    assert_ne!(word!("a", "b"), word!("ab"));
    assert_ne!(word!("a", "b"), word!("b", "a"));
    assert_ne!(word!(), word!(""));
  }

  #[test]
  fn displays_parts() {
    assert_eq!(word!("with", "parts").to_string(), r#"Word("with", "parts")"#);
    assert_eq!(word!().to_string(), "Word()");
  }
}
