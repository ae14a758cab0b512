//! Bounded buffer backing the fake terminal.

use crate::config::MAX_LOG_LINES;
use log::debug;
use std::collections::VecDeque;

/// Ordered sequence of rendered lines, oldest first.
///
/// The line count is tracked explicitly; whenever it exceeds `cap` after an
/// append, the oldest lines are evicted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleLog {
    lines: VecDeque<String>,
    cap: usize,
    evicted_total: u64,
}

impl VisibleLog {
    /// Create an empty log holding at most `cap` lines.
    ///
    /// Preallocation is bounded by [`MAX_LOG_LINES`], so huge caps stay cheap.
    pub fn new(cap: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(cap.min(MAX_LOG_LINES) + 1),
            cap,
            evicted_total: 0,
        }
    }

    /// Append a line and return how many old lines were evicted.
    pub fn push(&mut self, line: impl Into<String>) -> usize {
        self.lines.push_back(line.into());

        let mut evicted = 0;
        while self.lines.len() > self.cap {
            self.lines.pop_front();
            evicted += 1;
        }
        if evicted > 0 {
            self.evicted_total += evicted as u64;
            debug!("evicted {} line(s), {} total", evicted, self.evicted_total);
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn evicted_total(&self) -> u64 {
        self.evicted_total
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    /// Lines joined with `\n`, as shown in the terminal widget.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(line);
        }
        out
    }
}
