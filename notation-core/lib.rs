//! Character-level building blocks shared by the string notations.

pub mod chars;
