// src/terminal/input.rs

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Splits a line-oriented reader into whitespace-separated tokens.
///
/// Tokens may share a line ("2 AAPL 10") or arrive one per line; both read
/// the same. Bytes that aren't valid UTF-8 are replaced rather than treated
/// as a read error, so garbage input still comes back as a token.
/// `next_token` returns `None` once the reader is exhausted.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(String::from_utf8_lossy(&line).split_whitespace().map(str::to_string));
        }
    }
}
