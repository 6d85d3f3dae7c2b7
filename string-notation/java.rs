//! Notations for Java identifiers.
//!
//! When printing, these notations drop every character that is not allowed in
//! a Java identifier. A result that is empty becomes `__`, and a result that
//! is a reserved word gets `_` appended.
//!
//! ```
//! use string_notation::{JavaMemberName, JavaTypeName, Notation, word};
//!
//! assert_eq!(JavaTypeName.print(&word!("1", "type", "name", "4", "you")), "TypeName4You");
//! assert_eq!(JavaMemberName.print(&word!("enum")), "enum_");
//! assert_eq!(JavaTypeName.print(&word!("")), "__");
//! ```

use notation_core::chars::{
  char_is_java_identifier_part,
  char_is_java_identifier_start,
  is_java_keyword,
};

use crate::{
  Tendril,
  case_convention::{ScreamingSnakeCase, UpperCamelCase, to_capitalized, to_lower_case},
  notation::Notation,
  rule::{Rule, Splitter, keep, lowercase, rule_notation},
  word::Word,
};

/// Printed in place of an identifier that has no valid characters left.
pub const EMPTY_IDENTIFIER: &str = "__";

/// Drops everything in front of the first identifier-start character and
/// every non-identifier character after it.
fn keep_identifier_chars(text: &str) -> Tendril {
  text
    .chars()
    .skip_while(|&c| !char_is_java_identifier_start(c))
    .filter(|&c| char_is_java_identifier_part(c))
    .collect()
}

fn keep_identifier_part_chars(text: &str) -> Tendril {
  text.chars().filter(|&c| char_is_java_identifier_part(c)).collect()
}

fn neutralize_keyword(ident: &str) -> String {
  if ident.is_empty() {
    tracing::debug!("no identifier characters left, using {EMPTY_IDENTIFIER:?}");
    EMPTY_IDENTIFIER.to_owned()
  } else if is_java_keyword(ident) {
    tracing::debug!(keyword = ident, "neutralizing reserved word");
    format!("{ident}_")
  } else {
    ident.to_owned()
  }
}

/// Turns `text` into a valid Java identifier.
///
/// Sanitizing is idempotent: a sanitized identifier is returned unchanged.
pub fn sanitize_identifier(text: &str) -> String {
  neutralize_keyword(&keep_identifier_chars(text))
}

/// Filters the parts of `word` so that their concatenation can only start
/// with an identifier-start character.
fn filter_parts(index: usize, part: &str) -> Tendril {
  if index == 0 {
    keep_identifier_chars(part)
  } else {
    keep_identifier_part_chars(part)
  }
}

/// Java type names. Parsed like [`UpperCamelCase`]; printed like it after
/// dropping characters that are not allowed in an identifier.
///
/// Only the first part is trimmed to an identifier start. A digit that a
/// later part contributes is kept even if it ends up leading the name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct JavaTypeName;

impl Notation for JavaTypeName {
  fn parse(&self, source: &str) -> Word {
    UpperCamelCase::RULE.parse(source)
  }

  fn print(&self, word: &Word) -> String {
    let filtered: Word = word
      .parts()
      .enumerate()
      .map(|(index, part)| filter_parts(index, part))
      .collect();
    neutralize_keyword(&UpperCamelCase::RULE.print(&filtered))
  }
}

/// Java member names, in `lowerCamelCase`.
///
/// Capitalization follows the letters actually printed: until a letter has
/// been emitted, parts are lowercased, so a word starting with `_` or `$`
/// prints as `_underscoreStart` rather than `_UnderscoreStart`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct JavaMemberName;

impl JavaMemberName {
  pub const RULE: Rule = Rule::new("JavaMemberName", Splitter::CamelCase);
}

impl Notation for JavaMemberName {
  fn parse(&self, source: &str) -> Word {
    Self::RULE.parse(source)
  }

  fn print(&self, word: &Word) -> String {
    let printed = word
      .parts()
      .enumerate()
      .fold(String::new(), |mut printed, (index, part)| {
        let filtered = filter_parts(index, part);
        let next = if printed.chars().any(char::is_alphabetic) {
          to_capitalized(filtered.chars())
        } else {
          to_lower_case(filtered.chars())
        };
        printed.push_str(Self::RULE.separator.before(index));
        printed.push_str(&next);
        printed
      });
    sanitize_identifier(&printed)
  }
}

fn lowercase_identifier(_index: usize, part: &str) -> Tendril {
  Tendril::from(sanitize_identifier(&to_lower_case(part.chars())))
}

/// Java package parts. Parsing recognizes both `snake_case` and camel-case
/// boundaries, although real-world inputs usually yield a single part.
/// Printing concatenates the lowercased parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct JavaPackagePart;

impl JavaPackagePart {
  pub const RULE: Rule = Rule::new("JavaPackagePart", Splitter::SnakeOrCamelCase)
    .before_print(lowercase);
}

impl Notation for JavaPackagePart {
  fn parse(&self, source: &str) -> Word {
    Self::RULE.parse(source)
  }

  fn print(&self, word: &Word) -> String {
    sanitize_identifier(&Self::RULE.print(word))
  }
}

rule_notation! {
  /// Whole Java package names, one part per package segment. Every segment
  /// is lowercased and sanitized on its own.
  JavaPackageName => Rule::new("JavaPackageName", Splitter::Char('.'))
    .after_parse(keep)
    .before_print(lowercase_identifier)
    .separated_by(".")
}

/// Names of `static final` fields. Parsed and printed like
/// [`ScreamingSnakeCase`], then sanitized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct JavaConstantName;

impl Notation for JavaConstantName {
  fn parse(&self, source: &str) -> Word {
    ScreamingSnakeCase::RULE.parse(source)
  }

  fn print(&self, word: &Word) -> String {
    sanitize_identifier(&ScreamingSnakeCase::RULE.print(word))
  }
}
