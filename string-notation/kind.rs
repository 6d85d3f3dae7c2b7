//! Naming notations at runtime.
//!
//! [`NotationKind`] names every notation of this crate so that conversions
//! can be chosen by name, for example from a configuration file:
//!
//! ```
//! use string_notation::{Conversion, NotationKind};
//!
//! let kind: NotationKind = "screaming-snake-case".parse().unwrap();
//! assert_eq!(kind, NotationKind::ScreamingSnakeCase);
//!
//! let conversion = Conversion::new(NotationKind::LowerCamelCase, kind);
//! assert_eq!(conversion.apply("myVariable"), "MY_VARIABLE");
//! ```

use std::{
  fmt,
  str::FromStr,
};

use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;

use crate::{
  case_convention::{LowerCamelCase, NormalWords, ScreamingSnakeCase, SnakeCase, UpperCamelCase},
  java::{JavaConstantName, JavaMemberName, JavaPackageName, JavaPackagePart, JavaTypeName},
  notation::{Notation, convert},
  path::{UnixPath, WindowsPath},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("unknown notation '{name}'")]
  UnknownNotation { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotationKind {
  UpperCamelCase,
  LowerCamelCase,
  SnakeCase,
  ScreamingSnakeCase,
  NormalWords,
  UnixPath,
  WindowsPath,
  JavaTypeName,
  JavaMemberName,
  JavaPackagePart,
  JavaPackageName,
  JavaConstantName,
}

impl NotationKind {
  pub const ALL: [NotationKind; 12] = [
    Self::UpperCamelCase,
    Self::LowerCamelCase,
    Self::SnakeCase,
    Self::ScreamingSnakeCase,
    Self::NormalWords,
    Self::UnixPath,
    Self::WindowsPath,
    Self::JavaTypeName,
    Self::JavaMemberName,
    Self::JavaPackagePart,
    Self::JavaPackageName,
    Self::JavaConstantName,
  ];

  pub const fn name(self) -> &'static str {
    match self {
      Self::UpperCamelCase => "UpperCamelCase",
      Self::LowerCamelCase => "LowerCamelCase",
      Self::SnakeCase => "SnakeCase",
      Self::ScreamingSnakeCase => "ScreamingSnakeCase",
      Self::NormalWords => "NormalWords",
      Self::UnixPath => "UnixPath",
      Self::WindowsPath => "WindowsPath",
      Self::JavaTypeName => "JavaTypeName",
      Self::JavaMemberName => "JavaMemberName",
      Self::JavaPackagePart => "JavaPackagePart",
      Self::JavaPackageName => "JavaPackageName",
      Self::JavaConstantName => "JavaConstantName",
    }
  }

  pub fn notation(self) -> &'static dyn Notation {
    match self {
      Self::UpperCamelCase => &UpperCamelCase,
      Self::LowerCamelCase => &LowerCamelCase,
      Self::SnakeCase => &SnakeCase,
      Self::ScreamingSnakeCase => &ScreamingSnakeCase,
      Self::NormalWords => &NormalWords,
      Self::UnixPath => &UnixPath,
      Self::WindowsPath => &WindowsPath,
      Self::JavaTypeName => &JavaTypeName,
      Self::JavaMemberName => &JavaMemberName,
      Self::JavaPackagePart => &JavaPackagePart,
      Self::JavaPackageName => &JavaPackageName,
      Self::JavaConstantName => &JavaConstantName,
    }
  }
}

impl fmt::Display for NotationKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Accepts the type name (`UpperCamelCase`) as well as its kebab-case and
/// snake_case spellings, ignoring case.
impl FromStr for NotationKind {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let normalized: String = s
      .chars()
      .filter(|&c| !matches!(c, '-' | '_' | ' '))
      .flat_map(char::to_lowercase)
      .collect();
    Self::ALL
      .into_iter()
      .find(|kind| kind.name().eq_ignore_ascii_case(&normalized))
      .ok_or_else(|| Error::UnknownNotation { name: s.to_owned() })
  }
}

/// A conversion from one notation into another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Conversion {
  pub from: NotationKind,
  pub to:   NotationKind,
}

impl Conversion {
  pub const fn new(from: NotationKind, to: NotationKind) -> Self {
    Self { from, to }
  }

  pub fn apply(&self, source: &str) -> String {
    convert(source, self.from.notation(), self.to.notation())
  }
}
