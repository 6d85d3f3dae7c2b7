//! Paths on Unix and Windows file systems.
//!
//! Both notations keep every fragment when parsing, including empty ones, so
//! that `"/home/user"` parses as `""`, `"home"`, `"user"` and prints back
//! with its leading slash. To print an absolute path, start the word with an
//! empty part.

use crate::{
  Tendril,
  rule::{Rule, Splitter, keep, rule_notation},
};

#[inline]
fn char_is_unix_path_forbidden(ch: char) -> bool {
  matches!(ch, '\0' | '/')
}

#[inline]
fn char_is_windows_path_forbidden(ch: char) -> bool {
  ch.is_ascii_control() || matches!(ch, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*')
}

fn strip_unix_part(_index: usize, part: &str) -> Tendril {
  part.chars().filter(|&c| !char_is_unix_path_forbidden(c)).collect()
}

/// The first part may keep a trailing `:` so drive letters survive.
fn strip_windows_part(index: usize, part: &str) -> Tendril {
  let mut stripped: Tendril = part.chars().filter(|&c| !char_is_windows_path_forbidden(c)).collect();
  if index == 0 && part.ends_with(':') {
    stripped.push(':');
  }
  stripped
}

rule_notation! {
  /// Paths on a Unix file system. Parts are separated by `/`; when printing,
  /// `NUL` and `/` are removed from every part.
  UnixPath => Rule::new("UnixPath", Splitter::Char('/'))
    .keep_blanks()
    .after_parse(keep)
    .before_print(strip_unix_part)
    .separated_by("/")
}

rule_notation! {
  /// Paths on a Windows file system. Parts are separated by `\`; when
  /// printing, ASCII control characters and `<`, `>`, `:`, `"`, `/`, `\`,
  /// `|`, `?`, `*` are removed from every part.
  WindowsPath => Rule::new("WindowsPath", Splitter::Char('\\'))
    .keep_blanks()
    .after_parse(keep)
    .before_print(strip_windows_part)
    .separated_by("\\")
}
