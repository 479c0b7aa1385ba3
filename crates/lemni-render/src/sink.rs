//! The `FrameSink` trait and its implementations.

use std::io::{self, Stdout, Write};

use crate::{Frame, RenderResult};

/// Receives emitted frames.  Only the coordinator worker ever holds the sink,
/// so implementations need `Send` but not `Sync`.
pub trait FrameSink: Send {
    /// Write one full frame.
    fn emit(&mut self, frame: &Frame) -> RenderResult<()>;

    /// Flush and release any underlying handle.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> RenderResult<()> {
        Ok(())
    }
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn emit(&mut self, frame: &Frame) -> RenderResult<()> {
        (**self).emit(frame)
    }

    fn finish(&mut self) -> RenderResult<()> {
        (**self).finish()
    }
}

// ── ConsoleSink ───────────────────────────────────────────────────────────────

/// Writes each frame to a byte stream in a single `write_all`, so frames are
/// never interleaved with other output on the same stream.
pub struct ConsoleSink<W: Write + Send> {
    out:      W,
    finished: bool,
}

impl ConsoleSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> FrameSink for ConsoleSink<W> {
    fn emit(&mut self, frame: &Frame) -> RenderResult<()> {
        self.out.write_all(frame.to_text().as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> RenderResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}

// ── MemorySink ────────────────────────────────────────────────────────────────

/// Keeps every frame in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub frames:   Vec<Frame>,
    pub finished: bool,
}

impl FrameSink for MemorySink {
    fn emit(&mut self, frame: &Frame) -> RenderResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn finish(&mut self) -> RenderResult<()> {
        self.finished = true;
        Ok(())
    }
}

// ── NoopSink ──────────────────────────────────────────────────────────────────

/// Discards every frame.
pub struct NoopSink;

impl FrameSink for NoopSink {
    fn emit(&mut self, _frame: &Frame) -> RenderResult<()> {
        Ok(())
    }
}
