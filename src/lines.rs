//! Line-by-line search over a reader.

use std::borrow::Cow;
use std::io::BufRead;

use crate::{Error, Regex, Result};

/// A line that matched, with its 1-based line number.
///
/// The line terminator (`\n` or `\r\n`) is not part of the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    number: usize,
    line: Vec<u8>,
}

impl LineMatch {
    /// Returns the 1-based number of the line in the input.
    #[must_use]
    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }

    /// Returns the line without its terminator.
    #[must_use]
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.line
    }

    /// Returns the line, replacing invalid UTF-8 with `U+FFFD`.
    #[must_use]
    #[inline]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.line)
    }

    /// Consumes the match, returning the line.
    #[must_use]
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.line
    }
}

/// An iterator over the lines of a reader that match a regex.
///
/// Created by [`Regex::search_lines()`]. A read error is yielded once and ends the iteration; a
/// runtime error on one line is yielded and the search goes on with the next line.
#[derive(Debug)]
pub struct LineMatches<'r, R> {
    re: &'r Regex,
    reader: R,
    number: usize,
    buf: Vec<u8>,
    done: bool,
}

impl<'r, R: BufRead> LineMatches<'r, R> {
    pub(crate) fn new(re: &'r Regex, reader: R) -> Self {
        LineMatches {
            re,
            reader,
            number: 0,
            buf: Vec::new(),
            done: false,
        }
    }

    /// Return the underlying regex.
    #[must_use]
    #[inline]
    pub fn regex(&self) -> &'r Regex {
        self.re
    }
}

impl<'r, R: BufRead> Iterator for LineMatches<'r, R> {
    type Item = Result<LineMatch>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    self.number += 1;
                    strip_line_terminator(&mut self.buf);
                    match self.re.is_match_bytes(&self.buf) {
                        Ok(true) => {
                            return Some(Ok(LineMatch {
                                number: self.number,
                                line: self.buf.clone(),
                            }))
                        }
                        Ok(false) => {}
                        Err(error) => return Some(Err(error)),
                    }
                }
                Err(error) => {
                    self.done = true;
                    return Some(Err(Error::Io(error)));
                }
            }
        }
        None
    }
}

fn strip_line_terminator(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
}
