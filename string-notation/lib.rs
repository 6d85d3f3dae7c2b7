//! Conversion between the string notations commonly found in programming.
//!
//! A string is [parsed](Notation::parse) into a notation-agnostic [`Word`]
//! and the word is [printed](Notation::print) in another notation:
//!
//! ```
//! use string_notation::{LowerCamelCase, ScreamingSnakeCase, Word, word};
//!
//! let word = Word::from_notation("myVariable", &LowerCamelCase);
//! assert_eq!(word, word!("my", "variable"));
//! assert_eq!(word.to_notation(&ScreamingSnakeCase), "MY_VARIABLE");
//! ```
use smartstring::{LazyCompact, SmartString};

pub mod case_convention;
pub mod java;
pub mod kind;
pub mod notation;
pub mod path;
pub mod rule;
pub mod word;

pub use case_convention::{LowerCamelCase, NormalWords, ScreamingSnakeCase, SnakeCase, UpperCamelCase};
pub use java::{JavaConstantName, JavaMemberName, JavaPackageName, JavaPackagePart, JavaTypeName};
pub use kind::{Conversion, Error, NotationKind};
pub use notation::{Notation, convert, parse, print};
pub use path::{UnixPath, WindowsPath};
pub use word::Word;

pub type Tendril = SmartString<LazyCompact>;
