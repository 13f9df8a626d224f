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

//! Analysis of regex expressions.

use crate::parse::{Assertion, Expr, ExprTree, UNBOUNDED};

/// Facts about a pattern that let the search skip start positions which cannot match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Info {
    /// Fewest bytes any match consumes
    pub(crate) min_size: usize,
    /// Most bytes any match consumes, `None` if unbounded
    pub(crate) max_size: Option<usize>,
    /// Pattern starts with `^`
    pub(crate) start_anchored: bool,
    /// Pattern ends with `$`
    pub(crate) end_anchored: bool,
}

impl Info {
    /// Start positions worth trying in a text of length `len`, in increasing order.
    ///
    /// Every position outside the range is guaranteed to fail.
    pub(crate) fn start_positions(&self, len: usize) -> std::ops::RangeInclusive<usize> {
        if self.start_anchored {
            return 0..=0;
        }
        let last = len.saturating_sub(self.min_size);
        let first = match self.max_size {
            Some(max_size) if self.end_anchored => len.saturating_sub(max_size),
            _ => 0,
        };
        first..=last
    }
}

fn size_of(expr: &Expr) -> (usize, Option<usize>) {
    match *expr {
        Expr::Any | Expr::Literal(_) | Expr::Class(_) => (1, Some(1)),
        Expr::Assertion(_) => (0, Some(0)),
        Expr::Repeat {
            ref child,
            lo,
            hi,
        } => {
            let (child_min, child_max) = size_of(child);
            let max = if hi == UNBOUNDED {
                None
            } else {
                child_max.and_then(|m| m.checked_mul(hi))
            };
            (child_min.saturating_mul(lo), max)
        }
        Expr::Concat(ref v) => v.iter().fold((0, Some(0)), |(min, max), child| {
            let (child_min, child_max) = size_of(child);
            (
                min.saturating_add(child_min),
                max.and_then(|m| child_max.and_then(|c| m.checked_add(c))),
            )
        }),
    }
}

/// Analyze the parsed expression.
pub fn analyze(tree: &ExprTree) -> Info {
    let (min_size, max_size) = size_of(&tree.expr);
    let children: &[Expr] = match tree.expr {
        Expr::Concat(ref v) => v,
        ref other => std::slice::from_ref(other),
    };
    Info {
        min_size,
        max_size,
        start_anchored: children.first() == Some(&Expr::Assertion(Assertion::StartText)),
        end_anchored: children.last() == Some(&Expr::Assertion(Assertion::EndText)),
    }
}
