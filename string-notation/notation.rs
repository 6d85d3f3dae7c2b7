use std::fmt::Debug;

use crate::word::Word;

/// A convention for representing [`Word`]s as strings.
///
/// Notations carry no state; both operations are total and never fail.
pub trait Notation: Debug + Send + Sync {
  /// Transforms `source`, which is written in this notation, into a
  /// notation-agnostic [`Word`].
  fn parse(&self, source: &str) -> Word;

  /// Formats `word` according to this notation.
  fn print(&self, word: &Word) -> String;
}

pub fn parse<N: Notation + ?Sized>(source: &str, notation: &N) -> Word {
  notation.parse(source)
}

pub fn print<N: Notation + ?Sized>(word: &Word, notation: &N) -> String {
  notation.print(word)
}

/// Parses `source` in the `from` notation and prints it in the `to` notation.
pub fn convert<F, T>(source: &str, from: &F, to: &T) -> String
where
  F: Notation + ?Sized,
  T: Notation + ?Sized,
{
  to.print(&from.parse(source))
}
