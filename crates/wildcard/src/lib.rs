//! A lightweight wildcard pattern matching library.
//!
//! This crate provides wildcard pattern matching with `*` (zero or more characters)
//! and `?` (exactly one UTF-8 character) wildcards.
//!
//! A pattern is compiled once into a sequence of segments split at `*`,
//! each segment bound to the front, the end, or the leftmost matching position of the
//! remaining candidate. Matching walks the segments left to right without backtracking,
//! so it always finishes in time bounded by the product of pattern and candidate lengths.
//!
//! # Pattern Syntax
//!
//! - `*` - Matches zero or more characters
//! - `?` - Matches exactly one UTF-8 character
//! - `\*`, `\?`, `\\` - Escaped literal characters
//! - Any other character matches itself, ASCII letters ignore case by default
//! - A `\` not followed by `*`, `?` or `\` is a literal backslash
//!
//! # Examples
//!
//! ```
//! use wildcard::Pattern;
//!
//! let pattern = Pattern::new("*.txt");
//! assert!(pattern.matches("hello.txt"));
//! assert!(pattern.matches("HELLO.TXT"));
//! assert!(!pattern.matches("hello.rs"));
//!
//! let pattern = Pattern::new("test?.log");
//! assert!(pattern.matches("test1.log"));
//! assert!(!pattern.matches("test.log"));
//! assert!(!pattern.matches("test12.log"));
//!
//! // One-shot matching
//! assert!(wildcard::match_str_once(r"a\*b", "a*b", true));
//! assert!(!wildcard::match_str_once(r"a\*b", "axb", true));
//! ```
//!
//! # UTF-8 Handling
//!
//! The `?` wildcard matches exactly one UTF-8 character, not one byte:
//!
//! ```
//! use wildcard::Pattern;
//!
//! let pattern = Pattern::new("*???.txt");
//! assert!(pattern.matches("文件名.txt"));
//! assert!(!pattern.matches("名.txt"));
//! ```
//!
//! # Pattern Display
//!
//! Patterns can be converted back to strings, with repeated `*` collapsed:
//!
//! ```
//! use wildcard::Pattern;
//!
//! let pattern = Pattern::new("hello**world");
//! assert_eq!(pattern.to_string(), "hello*world");
//!
//! let pattern = Pattern::new(r"file\*.txt");
//! assert_eq!(pattern.to_string(), r"file\*.txt");
//! ```

mod matching;
mod pattern;
mod utf8;

pub use pattern::*;
