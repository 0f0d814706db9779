// animation/zigzag.rs
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

pub const MARKER: &str = "********";
pub const BOUND: usize = 5;

/// Bouncing indentation counter: 0,1,..,bound-1 then back down to 0 and up
/// again, forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zigzag {
    indent: usize,
    increasing: bool,
    bound: usize,
}

impl Default for Zigzag {
    fn default() -> Self {
        Self::new(BOUND)
    }
}

impl Zigzag {
    pub fn new(bound: usize) -> Self {
        Self {
            indent: 0,
            increasing: true,
            bound: bound.max(1),
        }
    }

    fn step(&mut self) {
        if self.bound == 1 {
            return;
        }
        if self.increasing {
            if self.indent + 1 == self.bound {
                self.increasing = false;
                self.indent -= 1;
            } else {
                self.indent += 1;
            }
        } else if self.indent == 0 {
            self.increasing = true;
            self.indent += 1;
        } else {
            self.indent -= 1;
        }
    }
}

impl Iterator for Zigzag {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.indent;
        self.step();
        Some(current)
    }
}

pub fn frame(indent: usize, marker: &str) -> String {
    format!("{}{}", " ".repeat(indent), marker)
}

/// Draws one frame per `interval` until `stop` is set or `limit` frames
/// have been drawn. Returns the number of frames written.
pub fn run<W: Write>(
    out: &mut W,
    interval: Duration,
    limit: Option<u64>,
    stop: &AtomicBool,
) -> io::Result<u64> {
    let mut drawn = 0;

    let done = |drawn: u64| stop.load(Ordering::SeqCst) || limit.is_some_and(|n| drawn >= n);

    for indent in Zigzag::default() {
        if done(drawn) {
            break;
        }

        writeln!(out, "{}", frame(indent, MARKER))?;
        out.flush()?;
        drawn += 1;

        if done(drawn) {
            break;
        }
        thread::sleep(interval);
    }

    Ok(drawn)
}
