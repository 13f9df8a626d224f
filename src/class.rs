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

//! Bracket expressions.
//!
//! A bracket expression is the text between `[` and the first `]` that follows it. A leading `^`
//! negates the class. The rest is read left to right: `x-y` is an inclusive range unless the
//! `-` is the last content byte, anything else is a single byte. There is no escape syntax.

use bit_set::BitSet;

/// Number of distinct byte values a class decides membership for.
const BYTE_VALUES: usize = 256;

/// One member of a bracket expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassItem {
    /// A single byte
    Byte(u8),
    /// An inclusive range, in the order written in the pattern
    Range(u8, u8),
}

/// A parsed bracket expression, e.g. `[a-z_]` or `[^0-9]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass {
    /// Whether the class was written with a leading `^`
    pub negated: bool,
    /// The members in pattern order
    pub items: Vec<ClassItem>,
}

#[inline]
pub(crate) fn fold(b: u8, casei: bool) -> u8 {
    if casei {
        b.to_ascii_lowercase()
    } else {
        b
    }
}

impl CharClass {
    /// Parse the content of a bracket expression, without the surrounding brackets.
    pub fn parse(content: &[u8]) -> CharClass {
        let (negated, content) = match content.split_first() {
            Some((b'^', rest)) => (true, rest),
            _ => (false, content),
        };
        let mut items = Vec::new();
        let mut ix = 0;
        while ix < content.len() {
            if ix + 2 < content.len() && content[ix + 1] == b'-' {
                items.push(ClassItem::Range(content[ix], content[ix + 2]));
                ix += 3;
            } else {
                items.push(ClassItem::Byte(content[ix]));
                ix += 1;
            }
        }
        CharClass { negated, items }
    }

    /// Whether any range is written with its upper bound first, like `z-a`.
    ///
    /// Such ranges are accepted with their bounds swapped.
    pub fn has_reversed_range(&self) -> bool {
        self.items.iter().any(|item| match *item {
            ClassItem::Range(lo, hi) => lo > hi,
            ClassItem::Byte(_) => false,
        })
    }

    /// Decide membership of a single byte.
    ///
    /// With `casei`, the byte and every member (both range endpoints included) are folded to
    /// ASCII lowercase before comparing.
    pub fn matches(&self, b: u8, casei: bool) -> bool {
        let b = fold(b, casei);
        let found = self.items.iter().any(|item| match *item {
            ClassItem::Byte(member) => fold(member, casei) == b,
            ClassItem::Range(start, end) => {
                let (start, end) = (fold(start, casei), fold(end, casei));
                let (lo, hi) = if start <= end {
                    (start, end)
                } else {
                    (end, start)
                };
                lo <= b && b <= hi
            }
        });
        found != self.negated
    }

    /// Evaluate the class for every byte value at once.
    pub(crate) fn to_byte_set(&self, casei: bool) -> BitSet {
        let mut set = BitSet::with_capacity(BYTE_VALUES);
        for b in 0..=u8::MAX {
            if self.matches(b, casei) {
                set.insert(usize::from(b));
            }
        }
        set
    }
}
