//! Console signal sink.
//!
//! Writes one human-readable line per [`Signal`] to any [`Write`]r; the
//! binary uses stdout.  Each line is flushed immediately so the output
//! order matches the call order.

use std::io::{self, Write};

use crate::app::ports::SignalSink;
use crate::app::signals::Signal;
use crate::error::Result;

pub struct ConsoleSink<W = io::Stdout> {
    out: W,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &dyn core::fmt::Display) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> SignalSink for ConsoleSink<W> {
    fn emit(&mut self, signal: Signal) -> Result<()> {
        self.line(&signal)
    }

    fn separator(&mut self, text: &str) -> Result<()> {
        self.line(&text)
    }
}
