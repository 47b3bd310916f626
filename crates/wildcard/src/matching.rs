use memchr::{memchr, memchr2};

use crate::pattern::{Role, Segment, SubExpr};
use crate::utf8::{first_char_len, last_char_len};

/// Matches compiled segments against a candidate.
///
/// Segments are consumed left to right and each successful segment shrinks the remaining
/// candidate. A floating segment commits to its leftmost match, there is no backtracking.
#[derive(Clone, Copy)]
pub(crate) struct Matcher {
    case_sensitive: bool,
}

impl Matcher {
    pub(crate) fn new(case_sensitive: bool) -> Self {
        Self { case_sensitive }
    }

    pub(crate) fn run(self, segments: &[Segment], mut text: &[u8]) -> bool {
        for segment in segments {
            let subexprs = segment.subexprs();
            let rest = match segment.role() {
                Role::AnchoredStart => self.prefix(subexprs, text),
                Role::Floating => self.infix(subexprs, text),
                Role::AnchoredEnd => return self.suffix(subexprs, text),
                Role::FullMatch => return self.exact(subexprs, text),
            };
            match rest {
                Some(rest) => text = rest,
                None => return false,
            }
        }

        true
    }

    #[inline]
    fn equal(self, a: &[u8], b: &[u8]) -> bool {
        if self.case_sensitive {
            a == b
        } else {
            a.eq_ignore_ascii_case(b)
        }
    }

    // Returns the rest of `text` after the subexpressions matched at its front.
    fn prefix<'a>(self, subexprs: &[SubExpr], mut text: &'a [u8]) -> Option<&'a [u8]> {
        for sub in subexprs {
            match sub {
                SubExpr::Literal(literal) => {
                    let head = text.get(..literal.len())?;
                    if !self.equal(head, literal) {
                        return None;
                    }
                    text = &text[literal.len()..];
                }
                SubExpr::AnyChar => {
                    let n = first_char_len(text);
                    if n == 0 {
                        return None;
                    }
                    text = &text[n..];
                }
            }
        }

        Some(text)
    }

    // Returns the rest of `text` after the leftmost match of the subexpressions.
    fn infix<'a>(self, subexprs: &[SubExpr], text: &'a [u8]) -> Option<&'a [u8]> {
        let first = match subexprs.first() {
            Some(SubExpr::Literal(literal)) => literal.first().copied(),
            _ => None,
        };

        // jump between occurrences of the first literal byte
        if let Some(first) = first {
            let mut offset = 0;
            while offset < text.len() {
                let at = offset + self.find_byte(first, &text[offset..])?;
                if let Some(rest) = self.prefix(subexprs, &text[at..]) {
                    return Some(rest);
                }
                offset = at + 1;
            }
            return None;
        }

        let mut offset = 0;
        loop {
            if let Some(rest) = self.prefix(subexprs, &text[offset..]) {
                return Some(rest);
            }
            let n = first_char_len(&text[offset..]);
            if n == 0 {
                return None;
            }
            offset += n;
        }
    }

    fn suffix(self, subexprs: &[SubExpr], mut text: &[u8]) -> bool {
        for sub in subexprs.iter().rev() {
            match sub {
                SubExpr::Literal(literal) => {
                    let Some(start) = text.len().checked_sub(literal.len()) else {
                        return false;
                    };
                    if !self.equal(&text[start..], literal) {
                        return false;
                    }
                    text = &text[..start];
                }
                SubExpr::AnyChar => {
                    let n = last_char_len(text);
                    if n == 0 {
                        return false;
                    }
                    text = &text[..text.len() - n];
                }
            }
        }

        true
    }

    fn exact(self, subexprs: &[SubExpr], text: &[u8]) -> bool {
        self.prefix(subexprs, text).is_some_and(|rest| rest.is_empty())
    }

    #[inline]
    fn find_byte(self, b: u8, haystack: &[u8]) -> Option<usize> {
        if !self.case_sensitive && b.is_ascii_alphabetic() {
            memchr2(b.to_ascii_lowercase(), b.to_ascii_uppercase(), haystack)
        } else {
            memchr(b, haystack)
        }
    }
}
