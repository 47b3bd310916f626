use std::convert::Infallible;
use std::fmt;
use std::mem::take;
use std::str::FromStr;

use crate::matching::Matcher;

/// A compiled wildcard pattern for matching text strings and byte sequences.
///
/// Patterns are created from strings containing wildcard characters:
/// - `*` matches zero or more characters
/// - `?` matches exactly one UTF-8 character
/// - `\*`, `\?` and `\\` match `*`, `?` and `\` literally
/// - `\` followed by anything else, or at the end of the pattern, is a literal backslash
///
/// Matching is ASCII case-insensitive unless requested otherwise.
///
/// # Examples
///
/// ```
/// use wildcard::Pattern;
///
/// let pattern = Pattern::new("*.TXT");
/// assert!(pattern.matches("readme.txt"));
/// assert!(!pattern.matches("readme.md"));
///
/// let pattern = Pattern::with_case_sensitivity("test?.log", true);
/// assert!(pattern.matches("test1.log"));
/// assert!(!pattern.matches("TEST1.log"));
/// assert!(!pattern.matches("test.log"));
/// ```
///
/// A compiled pattern is immutable, so a single instance can be shared between threads
/// and matched against any number of candidates.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Pattern {
    case_sensitive: bool,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Creates a new case-insensitive pattern from a string.
    ///
    /// This function is infallible; all input strings are valid patterns.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("hello*");
    /// assert!(pattern.matches("Hello world"));
    ///
    /// // Escaped wildcards
    /// let pattern = Pattern::new(r"file\*.txt");
    /// assert!(pattern.matches("file*.txt"));
    /// assert!(!pattern.matches("file123.txt"));
    ///
    /// // Trailing backslash is literal
    /// let pattern = Pattern::new(r"path\");
    /// assert!(pattern.matches(r"path\"));
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self::with_case_sensitivity(raw, false)
    }

    /// Creates a new pattern from a string with the given case sensitivity.
    pub fn with_case_sensitivity(raw: impl AsRef<str>, case_sensitive: bool) -> Self {
        Self {
            case_sensitive,
            segments: Compiler::new().compile(raw.as_ref()),
        }
    }

    /// Returns `true` if letters are compared case-sensitively.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Returns the compiled segments in the order they are matched.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    /// Tests whether the pattern matches the given text.
    ///
    /// Returns `true` if the entire text matches the pattern, `false` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("*.rs");
    /// assert!(pattern.matches("main.rs"));
    /// assert!(!pattern.matches("main.txt"));
    ///
    /// // UTF-8 character matching
    /// let pattern = Pattern::new("??");
    /// assert!(pattern.matches("ab"));
    /// assert!(pattern.matches("🦀🎉"));
    /// assert!(!pattern.matches("a"));
    /// ```
    pub fn matches(&self, text: &str) -> bool {
        self.matches_bytes(text.as_bytes())
    }

    #[inline]
    /// Tests whether the pattern matches the given byte sequence.
    ///
    /// The candidate does not have to be valid UTF-8,
    /// `?` consumes a single byte wherever no well-formed character starts.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("log?");
    /// assert!(pattern.matches_bytes(b"log\xff"));
    /// assert!(pattern.matches_bytes("logé".as_bytes()));
    /// ```
    pub fn matches_bytes(&self, candidate: &[u8]) -> bool {
        Matcher::new(self.case_sensitive).run(&self.segments, candidate)
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::new("")
    }
}

impl FromStr for Pattern {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.segments.first() else {
            return f.write_str("*");
        };

        if matches!(first.role, Role::Floating | Role::AnchoredEnd) {
            f.write_str("*")?;
        }

        for segment in &self.segments {
            f.write_str(&segment.raw)?;
            if matches!(segment.role, Role::AnchoredStart | Role::Floating) {
                f.write_str("*")?;
            }
        }

        Ok(())
    }
}

/// Compiles a pattern with the given case sensitivity.
pub fn compile(raw: &str, case_sensitive: bool) -> Pattern {
    Pattern::with_case_sensitivity(raw, case_sensitive)
}

/// Compiles the pattern and matches it against `candidate` once.
///
/// Prefer compiling a [`Pattern`] when matching many candidates.
///
/// ```
/// assert!(wildcard::match_once("a*b?b", b"aaaabbbb", true));
/// ```
pub fn match_once(raw: &str, candidate: &[u8], case_sensitive: bool) -> bool {
    compile(raw, case_sensitive).matches_bytes(candidate)
}

/// Compiles the pattern and matches it against `text` once.
pub fn match_str_once(raw: &str, text: &str, case_sensitive: bool) -> bool {
    match_once(raw, text.as_bytes(), case_sensitive)
}

// ---

/// Position where a segment has to be found in the remaining candidate.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Role {
    /// At the front of the remaining candidate.
    AnchoredStart,
    /// At the leftmost position where it matches.
    Floating,
    /// At the end of the remaining candidate, always the last segment.
    AnchoredEnd,
    /// The whole candidate, used only when the pattern has no `*`.
    FullMatch,
}

/// Part of a segment, either literal bytes or a single character wildcard.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SubExpr {
    Literal(Vec<u8>),
    AnyChar,
}

/// A span of the pattern between `*` wildcards.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Segment {
    role: Role,
    raw: String,
    subexprs: Vec<SubExpr>,
}

impl Segment {
    fn new(role: Role, raw: String) -> Self {
        let subexprs = decompose(&raw);
        Self { role, raw, subexprs }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Source text of the segment with escape sequences intact.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn subexprs(&self) -> &[SubExpr] {
        &self.subexprs
    }
}

// ---

struct Compiler {
    segments: Vec<Segment>,
    role: Role,
    buf: String,
}

impl Compiler {
    fn new() -> Self {
        Self {
            segments: Vec::new(),
            role: Role::AnchoredStart,
            buf: String::new(),
        }
    }

    fn flush(&mut self) {
        if !self.buf.is_empty() {
            self.segments.push(Segment::new(self.role, take(&mut self.buf)));
        }
    }

    // Splits the pattern at unescaped `*`, escape sequences are kept for `decompose`.
    fn compile(mut self, raw: &str) -> Vec<Segment> {
        let mut escape = false;
        for ch in raw.chars() {
            match ch {
                '\\' => {
                    self.buf.push(ch);
                    escape = !escape;
                }
                '*' if !escape => {
                    self.flush();
                    self.role = Role::Floating;
                }
                _ => {
                    self.buf.push(ch);
                    escape = false;
                }
            }
        }

        if !self.buf.is_empty() {
            self.role = match self.role {
                Role::AnchoredStart => Role::FullMatch,
                _ => Role::AnchoredEnd,
            };
            self.flush();
        } else if self.role == Role::AnchoredStart {
            // empty pattern matches only empty input
            self.segments.push(Segment::new(Role::FullMatch, String::new()));
        }

        self.segments
    }
}

fn decompose(raw: &str) -> Vec<SubExpr> {
    let mut result = Vec::new();
    let mut literal = Vec::new();
    let mut escape = false;

    for &b in raw.as_bytes() {
        match b {
            b'\\' | b'?' | b'*' if escape => {
                literal.push(b);
                escape = false;
            }
            b'\\' => {
                escape = true;
            }
            b'?' => {
                if !literal.is_empty() {
                    result.push(SubExpr::Literal(take(&mut literal)));
                }
                result.push(SubExpr::AnyChar);
            }
            _ => {
                if escape {
                    literal.push(b'\\');
                    escape = false;
                }
                literal.push(b);
            }
        }
    }

    if escape {
        literal.push(b'\\');
    }
    if !literal.is_empty() {
        result.push(SubExpr::Literal(literal));
    }

    result
}
