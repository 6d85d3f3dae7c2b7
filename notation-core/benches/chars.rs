//! Benchmarks for character classification in notation-core.
//!
//! Run with: `cargo bench -p notation-core --bench chars`

use divan::{
  Bencher,
  black_box,
};
use notation_core::chars::{
  char_is_java_identifier_part,
  char_is_java_identifier_start,
  char_is_uppercase_letter,
  is_java_keyword,
};

fn main() {
  divan::main();
}

mod uppercase {
  use super::*;

  #[divan::bench]
  fn ascii(bencher: Bencher) {
    bencher.bench(|| assert!(char_is_uppercase_letter(black_box('Q'))));
  }

  #[divan::bench]
  fn cyrillic(bencher: Bencher) {
    bencher.bench(|| assert!(char_is_uppercase_letter(black_box('Д'))));
  }

  #[divan::bench]
  fn not_uppercase(bencher: Bencher) {
    bencher.bench(|| assert!(!char_is_uppercase_letter(black_box('q'))));
  }
}

mod identifier {
  use super::*;

  #[divan::bench]
  fn start_letter(bencher: Bencher) {
    bencher.bench(|| assert!(char_is_java_identifier_start(black_box('a'))));
  }

  #[divan::bench]
  fn start_currency(bencher: Bencher) {
    bencher.bench(|| assert!(char_is_java_identifier_start(black_box('$'))));
  }

  #[divan::bench]
  fn part_digit(bencher: Bencher) {
    bencher.bench(|| assert!(char_is_java_identifier_part(black_box('7'))));
  }

  #[divan::bench]
  fn part_format_char(bencher: Bencher) {
    // Zero-width space is ignorable, so it counts as a part
    bencher.bench(|| assert!(char_is_java_identifier_part(black_box('\u{200B}'))));
  }

  #[divan::bench]
  fn not_part_punctuation(bencher: Bencher) {
    bencher.bench(|| assert!(!char_is_java_identifier_part(black_box('!'))));
  }
}

mod keyword {
  use super::*;

  #[divan::bench]
  fn hit(bencher: Bencher) {
    bencher.bench(|| assert!(is_java_keyword(black_box("synchronized"))));
  }

  #[divan::bench]
  fn miss(bencher: Bencher) {
    bencher.bench(|| assert!(!is_java_keyword(black_box("notAKeyword"))));
  }
}
