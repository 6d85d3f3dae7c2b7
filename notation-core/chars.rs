//! Character classification for notation boundaries and identifier grammars.
//!
//! The Java predicates follow the rules of `Character.isJavaIdentifierStart`
//! and `Character.isJavaIdentifierPart`, expressed over Unicode general
//! categories so they work on any `char` without a JVM at hand.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Reserved words of the Java language, sorted for binary search.
///
/// Besides the keywords proper this contains the literals `true`, `false`
/// and `null` and, since Java 9, the single underscore.
pub const JAVA_KEYWORDS: &[&str] = &[
  "_",
  "abstract",
  "assert",
  "boolean",
  "break",
  "byte",
  "case",
  "catch",
  "char",
  "class",
  "const",
  "continue",
  "default",
  "do",
  "double",
  "else",
  "enum",
  "extends",
  "false",
  "final",
  "finally",
  "float",
  "for",
  "goto",
  "if",
  "implements",
  "import",
  "instanceof",
  "int",
  "interface",
  "long",
  "native",
  "new",
  "null",
  "package",
  "private",
  "protected",
  "public",
  "return",
  "short",
  "static",
  "strictfp",
  "super",
  "switch",
  "synchronized",
  "this",
  "throw",
  "throws",
  "transient",
  "true",
  "try",
  "void",
  "volatile",
  "while",
];

/// Whether `ident` cannot be used as a Java identifier because the language
/// reserves it.
#[inline]
pub fn is_java_keyword(ident: &str) -> bool {
  JAVA_KEYWORDS.binary_search(&ident).is_ok()
}

/// An uppercase letter (`Lu`). A camel-case boundary sits in front of every
/// such letter that is not the first character.
#[inline]
pub fn char_is_uppercase_letter(ch: char) -> bool {
  matches!(get_general_category(ch), GeneralCategory::UppercaseLetter)
}

#[inline]
pub fn char_is_java_identifier_start(ch: char) -> bool {
  matches!(
    get_general_category(ch),
    GeneralCategory::UppercaseLetter
      | GeneralCategory::LowercaseLetter
      | GeneralCategory::TitlecaseLetter
      | GeneralCategory::ModifierLetter
      | GeneralCategory::OtherLetter
      | GeneralCategory::LetterNumber
      | GeneralCategory::CurrencySymbol
      | GeneralCategory::ConnectorPunctuation
  )
}

#[inline]
pub fn char_is_java_identifier_part(ch: char) -> bool {
  char_is_java_identifier_start(ch)
    || char_is_java_identifier_ignorable(ch)
    || matches!(
      get_general_category(ch),
      GeneralCategory::DecimalNumber | GeneralCategory::NonspacingMark | GeneralCategory::SpacingMark
    )
}

/// Characters the Java compiler silently ignores inside identifiers: format
/// characters and the non-whitespace ISO control characters.
#[inline]
pub fn char_is_java_identifier_ignorable(ch: char) -> bool {
  match ch {
    '\u{0000}'..='\u{0008}' | '\u{000E}'..='\u{001B}' | '\u{007F}'..='\u{009F}' => true,
    ch => matches!(get_general_category(ch), GeneralCategory::Format),
  }
}
