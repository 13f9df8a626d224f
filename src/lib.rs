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

/*!
A small regex dialect matched by a backtracking engine.

The dialect has literals, the `.` wildcard, `^` and `$` anchors, bracket classes with ranges and
negation, and the greedy quantifiers `*`, `+`, `?` and `{n,m}`. Matching answers a single
question: does the pattern match somewhere in the text? There are no capture groups and no match
positions.

Text is matched byte by byte. Case-insensitive matching folds ASCII letters only.

# Usage

For a one-off check, use [`is_match`]:

```rust
assert!(regexlite::is_match("a*a", "aaaa"));
assert!(!regexlite::is_match("x$", "xw"));
```

To match the same pattern against many texts, compile it once:

```rust
use regexlite::Regex;

let re = Regex::new("[a-c]{2,3}d");
assert!(re.is_match("xxabd").unwrap());
assert!(!re.is_match("xxad").unwrap());
```

Note that the pattern needs anchors like `^` and `$` to match against the entire input text.

## Example: Case-insensitive matching

```rust
use regexlite::RegexBuilder;

let re = RegexBuilder::new().case_insensitive(true).build("ABC");
assert!(re.is_match("xabcx").unwrap());
```

## Example: Searching lines

```rust
use regexlite::Regex;

let re = Regex::new("^b");
let input = "apple\nbanana\ncherry\nblueberry\n";
let numbers: Vec<usize> = re
    .search_lines(input.as_bytes())
    .map(|m| m.unwrap().number())
    .collect();
assert_eq!(numbers, vec![2, 4]);
```

# Syntax

`c`
: a literal byte \
`.`
: any byte \
`[abc]`, `[a-z]`
: a byte in the set; a range is inclusive \
`[^abc]`
: a byte not in the set \
`^`
: start of text, only at the very beginning of the pattern \
`$`
: end of text, only at the very end of the pattern

Each atom (literal, `.` or bracket class) may be followed by one quantifier:

`x*`
: zero or more \
`x+`
: one or more \
`x?`
: zero or one \
`x{n}`
: exactly n \
`x{n,}`
: at least n \
`x{n,m}`
: at least n and at most m

All quantifiers are greedy: the longest run is tried first, then shorter ones.

There is no escape character. A bracket class ends at the first `]`. Malformed constructs are not
errors: an unterminated `[` or a `{` that does not form a count is matched as a literal byte. Such
fallbacks are recorded and can be inspected with [`Regex::fallbacks()`]:

```rust
use regexlite::{FallbackKind, Regex};

let re = Regex::new("a{2");
assert!(re.is_match("a{2").unwrap());
assert_eq!(re.fallbacks()[0].kind, FallbackKind::MalformedRepeat);
```

# Backtracking

Nested quantifiers can take exponential time on some inputs. By default the search is unbounded;
set [`RegexBuilder::backtrack_limit()`] to turn runaway searches into an error:

```rust
use regexlite::{Error, RegexBuilder, RuntimeError};

let re = RegexBuilder::new().backtrack_limit(1000).build("a*a*a*a*b");
let result = re.is_match(&"a".repeat(40));
assert!(matches!(
    result,
    Err(Error::RuntimeError(RuntimeError::BacktrackLimitExceeded))
));
```
*/

#![doc(html_root_url = "https://docs.rs/regexlite/0.1.0")]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![warn(clippy::pedantic)]
#![allow(clippy::enum_glob_use)]
#![allow(clippy::if_not_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::redundant_else)]
#![allow(clippy::similar_names)]

use regex_automata::util::pool::Pool;
use std::io::BufRead;
use std::panic::{RefUnwindSafe, UnwindSafe};
use std::str::FromStr;
use std::sync::Arc;
use vm::{Machine, Session, DEFAULT_BACKTRACK_LIMIT};

mod analyze;
mod class;
mod compile;
mod error;
mod lines;
mod parse;
mod vm;

use crate::analyze::analyze;
use crate::compile::compile_with_options;
pub use crate::class::{CharClass, ClassItem};
pub use crate::error::{Error, Result, RuntimeError};
pub use crate::lines::{LineMatch, LineMatches};
pub use crate::parse::{Assertion, Expr, ExprTree, Fallback, FallbackKind, UNBOUNDED};

// the public API

/// Check whether `pattern` matches anywhere in `text`, with default options.
///
/// Default options are case-sensitive and put no limit on backtracking, so this cannot fail.
/// For ASCII case-insensitive matching, build the regex with
/// [`RegexBuilder::case_insensitive()`] instead:
///
/// ```rust
/// use regexlite::RegexBuilder;
///
/// assert!(!regexlite::is_match("ABC", "abc"));
/// let re = RegexBuilder::new().case_insensitive(true).build("ABC");
/// assert!(re.is_match("abc").unwrap());
/// ```
///
/// ```rust
/// assert!(regexlite::is_match("", ""));
/// assert!(regexlite::is_match("ab?c", "ac"));
/// assert!(!regexlite::is_match("a+", "b"));
/// ```
#[must_use]
pub fn is_match(pattern: &str, text: &str) -> bool {
    matches!(Regex::new(pattern).is_match(text), Ok(true))
}

type SessionPool = Pool<Session, Box<dyn Fn() -> Session + Send + Sync + UnwindSafe + RefUnwindSafe>>;

/// A compiled regular expression.
#[derive(Debug)]
pub struct Regex {
    pattern: Arc<String>,
    tree: Arc<ExprTree>,
    machine: Machine,
    session: SessionPool,
}

impl Regex {
    /// Parse and compile a regex with default options, see [`RegexBuilder`].
    ///
    /// Compilation never fails; malformed constructs are matched literally.
    #[must_use]
    #[inline]
    pub fn new(re: impl Into<String>) -> Regex {
        RegexBuilder::new().build(re)
    }

    fn new_with_options(pattern: String, options: RegexOptions) -> Regex {
        let tree = Expr::parse_tree(&pattern);
        let info = analyze(&tree);
        let prog = Arc::new(compile_with_options(&tree, info, options));
        let machine = Machine::new(prog, options.backtrack_limit, 0);

        Regex {
            pattern: Arc::new(pattern),
            tree: Arc::new(tree),
            machine: machine.clone(),
            session: new_session_pool(machine),
        }
    }

    /// Returns the original pattern string used to create this regex.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Returns the expression tree of this regex.
    #[must_use]
    #[inline]
    pub fn as_expr_tree(&self) -> &ExprTree {
        &self.tree
    }

    /// Returns the constructs of the pattern that were read literally or adjusted.
    ///
    /// An empty slice means the pattern is well-formed.
    #[must_use]
    #[inline]
    pub fn fallbacks(&self) -> &[Fallback] {
        &self.tree.fallbacks
    }

    /// Check if the regex matches the input text.
    ///
    /// # Example
    ///
    /// Test if some text ends with a digit:
    ///
    /// ```rust
    /// # use regexlite::Regex;
    /// let re = Regex::new("[0-9]$");
    /// assert!(re.is_match("route 66").unwrap());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an [`Error::RuntimeError`] if the backtrack limit is exceeded.
    #[inline]
    pub fn is_match(&self, text: &str) -> Result<bool> {
        self.is_match_bytes(text.as_bytes())
    }

    /// Check if the regex matches the input bytes.
    ///
    /// ```rust
    /// # use regexlite::Regex;
    /// let re = Regex::new("a.c");
    /// assert!(re.is_match_bytes(b"a\xffc").unwrap());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an [`Error::RuntimeError`] if the backtrack limit is exceeded.
    #[inline]
    pub fn is_match_bytes(&self, text: &[u8]) -> Result<bool> {
        self.session.get().run(text)
    }

    /// Returns an iterator over the lines of `reader` that match, see [`LineMatches`].
    #[must_use]
    #[inline]
    pub fn search_lines<R: BufRead>(&self, reader: R) -> LineMatches<'_, R> {
        LineMatches::new(self, reader)
    }

    // for debugging only
    #[cfg(debug_assertions)]
    #[doc(hidden)]
    pub fn debug_print(&self) {
        self.machine.debug_print();
    }
}

fn new_session_pool(machine: Machine) -> SessionPool {
    Pool::new(Box::new(move || {
        let state = Machine::create_state();

        machine.clone().create_session(state)
    }))
}

impl Clone for Regex {
    fn clone(&self) -> Self {
        let machine = self.machine.clone();
        Regex {
            pattern: self.pattern.clone(),
            tree: self.tree.clone(),
            machine: machine.clone(),
            session: new_session_pool(machine),
        }
    }
}

impl FromStr for Regex {
    type Err = std::convert::Infallible;

    /// Parses a string into a regular expression
    fn from_str(s: &str) -> std::result::Result<Regex, Self::Err> {
        Ok(Regex::new(s))
    }
}

#[derive(Copy, Clone, Debug)]
struct RegexOptions {
    casei: bool,
    backtrack_limit: usize,
}

impl Default for RegexOptions {
    fn default() -> Self {
        RegexOptions {
            casei: false,
            backtrack_limit: DEFAULT_BACKTRACK_LIMIT,
        }
    }
}

/// A builder for a `Regex` to allow configuring options.
#[derive(Debug, Copy, Clone, Default)]
pub struct RegexBuilder(RegexOptions);

impl RegexBuilder {
    /// Create a new regex builder with default options.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the [`Regex`].
    #[must_use]
    #[inline]
    pub fn build(&self, pattern: impl Into<String>) -> Regex {
        Regex::new_with_options(pattern.into(), self.0)
    }

    /// Compare ASCII letters without regard to case. This applies to literals and to bracket
    /// classes, members and range endpoints alike.
    ///
    /// Default is `false`.
    #[inline]
    pub fn case_insensitive(&mut self, yes: bool) -> &mut Self {
        self.0.casei = yes;
        self
    }

    /// Limit for how many times backtracking should be attempted in one search. If this limit is
    /// exceeded, execution returns an [`Error::RuntimeError`] with
    /// [`RuntimeError::BacktrackLimitExceeded`].
    /// This is for preventing a regex with catastrophic backtracking to run for too long.
    ///
    /// Default is no limit.
    #[inline]
    pub fn backtrack_limit(&mut self, limit: usize) -> &mut Self {
        self.0.backtrack_limit = limit;
        self
    }
}

/// The internal module only exists so that tests and benchmarks can access internals for
/// debugging and experimenting.
#[doc(hidden)]
pub mod internal {
    pub use crate::analyze::analyze;
    pub use crate::compile::compile;
    pub use crate::vm::{run_default, run_trace, Insn, Matcher, Prog};
}
