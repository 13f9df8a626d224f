// Copyright 2016 The Fancy Regex Authors.
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! A parser for the pattern dialect.
//!
//! The grammar is flat: an optional leading `^`, a sequence of atoms each with an optional
//! quantifier, and an optional trailing `$`. Parsing never fails. Constructs that cannot be read
//! (an unterminated `[`, a `{` that is not a well-formed count) are taken as literal bytes and
//! recorded as a [`Fallback`].

use crate::class::CharClass;

/// Upper bound of a repetition without a maximum, as in `*`, `+` and `{n,}`.
pub const UNBOUNDED: usize = usize::MAX;

/// Regular expression AST. Each item matches at a single position in the text, with repetition
/// expressed by [`Expr::Repeat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Any byte, written `.`
    Any,
    /// A literal byte
    Literal(u8),
    /// A bracket expression
    Class(CharClass),
    /// Zero-width assertion
    Assertion(Assertion),
    /// Repeat of the child expression. `hi` is [`UNBOUNDED`] for `*`, `+` and `{n,}`.
    Repeat {
        /// The atom being repeated
        child: Box<Expr>,
        /// Minimum number of repetitions
        lo: usize,
        /// Maximum number of repetitions
        hi: usize,
    },
    /// Sequence of expressions
    Concat(Vec<Expr>),
}

/// Type of assertions
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Assertion {
    /// Start of the text, `^` at the beginning of the pattern
    StartText,
    /// End of the text, `$` at the end of the pattern
    EndText,
}

/// What kind of construct was read literally.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FallbackKind {
    /// `[` without a closing `]`; the `[` is a literal byte.
    UnterminatedClass,
    /// `{` not followed by a count and `}`; the `{` is a literal byte.
    MalformedRepeat,
    /// A range such as `z-a`; it is accepted with its bounds swapped.
    ReversedRange,
}

/// A construct that was read in a degraded way. Matching proceeds normally.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Fallback {
    /// Byte position of the construct in the pattern
    pub pos: usize,
    /// What happened
    pub kind: FallbackKind,
}

/// A parsed pattern, together with the fallbacks taken while reading it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprTree {
    /// The root of the tree, always an [`Expr::Concat`]
    pub expr: Expr,
    /// Constructs that were read literally or adjusted
    pub fallbacks: Vec<Fallback>,
}

impl Expr {
    /// Parse the pattern and return an expression tree.
    pub fn parse_tree(re: &str) -> ExprTree {
        Parser::new(re.as_bytes()).parse()
    }
}

struct Parser<'a> {
    re: &'a [u8],
    fallbacks: Vec<Fallback>,
}

impl<'a> Parser<'a> {
    fn new(re: &'a [u8]) -> Self {
        Parser {
            re,
            fallbacks: Vec::new(),
        }
    }

    fn parse(mut self) -> ExprTree {
        let re = self.re;
        let mut children = Vec::new();
        let mut ix = 0;
        if re.first() == Some(&b'^') {
            children.push(Expr::Assertion(Assertion::StartText));
            ix = 1;
        }
        while ix < re.len() {
            if re[ix] == b'$' && ix + 1 == re.len() {
                children.push(Expr::Assertion(Assertion::EndText));
                break;
            }
            let (atom, next) = self.parse_atom(ix);
            let (lo, hi, end) = match re.get(next) {
                Some(b'*') => (0, UNBOUNDED, next + 1),
                Some(b'+') => (1, UNBOUNDED, next + 1),
                Some(b'?') => (0, 1, next + 1),
                Some(b'{') => match parse_repeat(re, next + 1) {
                    Some(repeat) => repeat,
                    None => {
                        self.fallback(next, FallbackKind::MalformedRepeat);
                        children.push(atom);
                        ix = next;
                        continue;
                    }
                },
                _ => {
                    children.push(atom);
                    ix = next;
                    continue;
                }
            };
            children.push(Expr::Repeat {
                child: Box::new(atom),
                lo,
                hi,
            });
            ix = end;
        }
        ExprTree {
            expr: Expr::Concat(children),
            fallbacks: self.fallbacks,
        }
    }

    // Returns the atom starting at `ix` and the position after it.
    fn parse_atom(&mut self, ix: usize) -> (Expr, usize) {
        let re = self.re;
        match re[ix] {
            b'[' => match re[ix + 1..].iter().position(|&b| b == b']') {
                Some(len) => {
                    let end = ix + 1 + len;
                    let class = CharClass::parse(&re[ix + 1..end]);
                    if class.has_reversed_range() {
                        self.fallback(ix, FallbackKind::ReversedRange);
                    }
                    (Expr::Class(class), end + 1)
                }
                None => {
                    self.fallback(ix, FallbackKind::UnterminatedClass);
                    (Expr::Literal(b'['), ix + 1)
                }
            },
            b'.' => (Expr::Any, ix + 1),
            b => (Expr::Literal(b), ix + 1),
        }
    }

    fn fallback(&mut self, pos: usize, kind: FallbackKind) {
        self.fallbacks.push(Fallback { pos, kind });
    }
}

// Parse the inside of `{n}`, `{n,}` or `{n,m}` starting right after the `{`. Returns the bounds
// and the position after the closing `}`.
fn parse_repeat(re: &[u8], ix: usize) -> Option<(usize, usize, usize)> {
    let (lo, mut ix) = parse_decimal(re, ix);
    let hi = if re.get(ix) == Some(&b',') {
        ix += 1;
        if re.get(ix).map_or(false, u8::is_ascii_digit) {
            let (hi, end) = parse_decimal(re, ix);
            ix = end;
            hi
        } else {
            UNBOUNDED
        }
    } else {
        lo
    };
    if re.get(ix) != Some(&b'}') {
        return None;
    }
    // an upper bound below the lower one still requires exactly `lo`
    Some((lo, hi.max(lo), ix + 1))
}

// An empty digit run reads as 0.
fn parse_decimal(re: &[u8], mut ix: usize) -> (usize, usize) {
    let mut n: usize = 0;
    while let Some(&b) = re.get(ix).filter(|b| b.is_ascii_digit()) {
        n = n.saturating_mul(10).saturating_add(usize::from(b - b'0'));
        ix += 1;
    }
    (n, ix)
}
