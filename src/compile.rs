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

//! Compilation of regexes to VM.

use crate::analyze::{analyze, Info};
use crate::parse::ExprTree;
use crate::vm::{Insn, Matcher, Prog};
use crate::Expr;
use crate::RegexOptions;

struct Compiler {
    body: Vec<Insn>,
    casei: bool,
}

impl Compiler {
    fn new(casei: bool) -> Compiler {
        Compiler {
            body: Vec::new(),
            casei,
        }
    }

    fn visit(&mut self, expr: &Expr) {
        match *expr {
            Expr::Concat(ref children) => {
                for child in children {
                    self.visit(child);
                }
            }
            Expr::Assertion(assertion) => self.body.push(Insn::Assertion(assertion)),
            Expr::Repeat {
                ref child,
                lo: 1,
                hi: 1,
            } => {
                let matcher = self.matcher(child);
                self.body.push(Insn::Atom(matcher));
            }
            Expr::Repeat { ref child, lo, hi } => {
                let matcher = self.matcher(child);
                self.body.push(Insn::Repeat {
                    matcher,
                    lo,
                    hi: hi.max(lo),
                });
            }
            Expr::Any | Expr::Literal(_) | Expr::Class(_) => {
                let matcher = self.matcher(expr);
                self.body.push(Insn::Atom(matcher));
            }
        }
    }

    fn matcher(&self, atom: &Expr) -> Matcher {
        match *atom {
            Expr::Any => Matcher::Any,
            Expr::Literal(val) if self.casei && val.is_ascii_alphabetic() => Matcher::Lit {
                val: val.to_ascii_lowercase(),
                casei: true,
            },
            Expr::Literal(val) => Matcher::Lit { val, casei: false },
            Expr::Class(ref class) => Matcher::Set(class.to_byte_set(self.casei)),
            Expr::Assertion(_) | Expr::Repeat { .. } | Expr::Concat(_) => {
                unreachable!("only single-byte atoms can be repeated")
            }
        }
    }
}

pub(crate) fn compile_with_options(tree: &ExprTree, info: Info, options: RegexOptions) -> Prog {
    let mut c = Compiler::new(options.casei);
    c.visit(&tree.expr);
    c.body.push(Insn::End);
    Prog::new(c.body, info)
}

/// Compile the analyzed expressions into a program, with default options.
pub fn compile(tree: &ExprTree) -> Prog {
    compile_with_options(tree, analyze(tree), RegexOptions::default())
}
