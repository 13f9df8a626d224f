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

//! Backtracking VM.
//!
//! The VM executes a sequence of instructions (a program) against an input text. It keeps track
//! of a program counter (PC) and an index into the text (IX).
//!
//! `Atom` matches a single byte. If it matches, the PC advances to the next instruction and the
//! IX to the next byte. If not, the current thread fails.
//!
//! `Repeat` is the only instruction that can succeed in more than one way. It is greedy: it
//! consumes the longest run of matching bytes (up to its maximum) and continues after it. The
//! shorter runs, down to the minimum, are not pushed one by one; a single backtrack branch holds
//! a cursor that is moved back by one byte every time the branch is popped. So the stack never
//! holds more branches than there are `Repeat` instructions in the program.
//!
//! If execution reaches an `End` instruction, the program is successful. If a thread fails and
//! the stack is empty, there is no match at this start position.
//!
//! Program for the pattern `a*ab`:
//!
//! ```text
//! 0: Repeat { matcher: Lit { val: 97, casei: false }, lo: 0, hi: 18446744073709551615 }
//! 1: Atom(Lit { val: 97, casei: false })
//! 2: Atom(Lit { val: 98, casei: false })
//! 3: End
//! ```
//!
//! Against `aaab`, `Repeat` consumes all three `a` and pushes a branch resuming PC 1 at IX 2,
//! floor 0. `Atom(a)` fails at IX 3, the branch is popped with IX 2 and its cursor moves to 1.
//! `Atom(a)` and `Atom(b)` match and `End` is reached.

use bit_set::BitSet;
use std::fmt;
use std::sync::Arc;

use crate::analyze::Info;
use crate::error::RuntimeError;
use crate::Assertion;
use crate::Error;
use crate::Result;

/// Enable tracing of VM execution. Only for debugging/investigating.
const OPTION_TRACE: u32 = 1 << 0;

/// No limit on backtracking, which is the default.
pub(crate) const DEFAULT_BACKTRACK_LIMIT: usize = usize::MAX;

/// Decides whether a single byte is accepted.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Any byte
    Any,
    /// A literal byte
    Lit {
        /// The byte, already lowercased when `casei` is set
        val: u8,
        /// Compare against the ASCII lowercase of the input byte
        casei: bool,
    },
    /// Membership in a set of byte values
    Set(BitSet),
}

impl Matcher {
    /// Whether the byte is accepted.
    #[inline]
    pub fn is_match(&self, b: u8) -> bool {
        match *self {
            Matcher::Any => true,
            Matcher::Lit { val, casei: false } => b == val,
            Matcher::Lit { val, casei: true } => b.to_ascii_lowercase() == val,
            Matcher::Set(ref set) => set.contains(usize::from(b)),
        }
    }
}

/// Instruction of the VM.
#[derive(Debug)]
pub enum Insn {
    /// Successful end of program
    End,
    /// Match a single byte
    Atom(Matcher),
    /// Greedy repetition of a single byte matcher
    Repeat {
        /// The byte matcher being repeated
        matcher: Matcher,
        /// Minimum number of matches
        lo: usize,
        /// Maximum number of matches
        hi: usize,
    },
    /// Assertions
    Assertion(Assertion),
}

/// Sequence of instructions for the VM to execute.
#[derive(Debug)]
pub struct Prog {
    /// Instructions of the program
    pub body: Vec<Insn>,
    info: Info,
}

impl Prog {
    pub(crate) fn new(body: Vec<Insn>, info: Info) -> Prog {
        Prog { body, info }
    }

    #[cfg(debug_assertions)]
    #[doc(hidden)]
    pub(crate) fn debug_print(&self) {
        for (i, insn) in self.body.iter().enumerate() {
            println!("{i:3}: {insn:?}");
        }
    }
}

/// A pending alternative of a `Repeat`: resume at `pc` with every IX from `ix` down to `floor`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Branch {
    pc: usize,
    ix: usize,
    floor: usize,
}

#[derive(Debug)]
pub(crate) struct State {
    /// Stack of backtrack branches.
    stack: Vec<Branch>,
}

#[derive(Debug, Clone)]
pub(crate) struct Machine {
    pub prog: Arc<Prog>,
    pub options: u32,
    pub backtrack_limit: usize,
}

#[derive(Debug)]
pub(crate) struct Session {
    pub prog: Arc<Prog>,
    pub options: u32,
    pub backtrack_limit: usize,
    state: State,
}

impl State {
    fn new() -> State {
        State { stack: Vec::new() }
    }

    fn reset(&mut self) {
        self.stack.clear();
    }
}

impl Machine {
    pub(crate) fn new(prog: Arc<Prog>, backtrack_limit: usize, options: u32) -> Machine {
        Machine {
            prog,
            options,
            backtrack_limit,
        }
    }

    pub(crate) fn create_state() -> State {
        State::new()
    }

    pub(crate) fn create_session(self, state: State) -> Session {
        Session {
            prog: self.prog,
            options: self.options,
            backtrack_limit: self.backtrack_limit,
            state,
        }
    }

    #[cfg(debug_assertions)]
    #[doc(hidden)]
    pub(crate) fn debug_print(&self) {
        self.prog.debug_print();
    }
}

impl Session {
    // push a backtrack branch
    fn push(&mut self, pc: usize, ix: usize, floor: usize) {
        debug_assert!(floor <= ix);
        self.state.stack.push(Branch { pc, ix, floor });
        self.trace_stack("push");
    }

    // take the next alternative from the top branch, dropping the branch once it is exhausted
    fn pop(&mut self) -> (usize, usize) {
        let top = self
            .state
            .stack
            .last_mut()
            .expect("pop from an empty backtrack stack");
        let (pc, ix) = (top.pc, top.ix);
        if top.ix > top.floor {
            top.ix -= 1;
        } else {
            self.state.stack.pop();
        }
        self.trace_stack("pop");
        (pc, ix)
    }

    fn trace_stack(&self, operation: &str) {
        self.trace(format_args!(
            "stack after {}: {:?}",
            operation, self.state.stack
        ));
    }

    fn trace(&self, args: fmt::Arguments) {
        #[cfg(debug_assertions)]
        if self.options & OPTION_TRACE != 0 {
            Self::do_trace(args);
        }
        let _ = args;
    }

    #[cold]
    #[cfg(debug_assertions)]
    fn do_trace(args: fmt::Arguments) {
        eprintln!("{args}");
    }

    pub(crate) fn run_with_options(&mut self, s: &[u8], options: u32) -> Result<bool> {
        let old_options = self.options;
        self.options = options;
        let r = self.run(s);
        self.options = old_options;
        r
    }

    /// Try every start position in order and stop at the first one that matches.
    ///
    /// The backtrack limit applies to the whole search, not to each start position.
    pub(crate) fn run(&mut self, s: &[u8]) -> Result<bool> {
        let prog = Arc::clone(&self.prog);
        let mut backtrack_count = 0;
        for pos in prog.info.start_positions(s.len()) {
            if self.run_inner(&prog, s, pos, &mut backtrack_count)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn run_inner(
        &mut self,
        prog: &Prog,
        s: &[u8],
        start: usize,
        backtrack_count: &mut usize,
    ) -> Result<bool> {
        self.trace(format_args!("start at {start}\npos\tinstruction"));
        self.state.reset();
        let mut pc = 0;
        let mut ix = start;
        loop {
            // break from this loop to fail, causes stack to pop
            'fail: loop {
                self.trace(format_args!("{}\t{} {:?}", ix, pc, prog.body[pc]));
                match prog.body[pc] {
                    Insn::End => return Ok(true),
                    Insn::Atom(ref matcher) => {
                        if ix < s.len() && matcher.is_match(s[ix]) {
                            ix += 1;
                        } else {
                            break 'fail;
                        }
                    }
                    Insn::Repeat {
                        ref matcher,
                        lo,
                        hi,
                    } => {
                        let run = s[ix..]
                            .iter()
                            .take(hi)
                            .take_while(|&&b| matcher.is_match(b))
                            .count();
                        if run < lo {
                            break 'fail;
                        }
                        if run > lo {
                            self.push(pc + 1, ix + run - 1, ix + lo);
                        }
                        ix += run;
                    }
                    Insn::Assertion(Assertion::StartText) => {
                        if ix != 0 {
                            break 'fail;
                        }
                    }
                    Insn::Assertion(Assertion::EndText) => {
                        if ix != s.len() {
                            break 'fail;
                        }
                    }
                }
                pc += 1;
            }
            self.trace(format_args!("fail"));
            // "break 'fail" goes here
            if self.state.stack.is_empty() {
                return Ok(false);
            }

            *backtrack_count += 1;
            if *backtrack_count > self.backtrack_limit {
                return Err(Error::RuntimeError(RuntimeError::BacktrackLimitExceeded));
            }

            let (newpc, newix) = self.pop();
            pc = newpc;
            ix = newix;
        }
    }
}

fn create_session(prog: Arc<Prog>, options: u32) -> Session {
    let state = Machine::create_state();
    let machine = Machine::new(prog, DEFAULT_BACKTRACK_LIMIT, options);

    machine.create_session(state)
}

/// Run the program with trace printing for debugging.
#[doc(hidden)]
pub fn run_trace(prog: Arc<Prog>, s: &str) -> Result<bool> {
    let mut session = create_session(prog, 0);
    session.run_with_options(s.as_bytes(), OPTION_TRACE)
}

/// Run the program with default options.
#[doc(hidden)]
pub fn run_default(prog: Arc<Prog>, s: &str) -> Result<bool> {
    let mut session = create_session(prog, 0);
    session.run(s.as_bytes())
}
