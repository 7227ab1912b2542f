use std::io::{self, Write};

/// Tracing target used by [`TracingSink`].
pub const NARRATION_TARGET: &str = "cardsim_engine::narration";

/// Line-oriented consumer of game narration.
///
/// The engine only ever hands a sink one line of text at a time; where the
/// lines end up (memory, a stream, a structured logger) is the caller's choice.
pub trait EventSink {
    fn emit(&mut self, line: &str);
}

impl EventSink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, line: &str) {
        (**self).emit(line);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn emit(&mut self, line: &str) {
        (**self).emit(line);
    }
}

/// Discards every line.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _line: &str) {}
}

/// Adapts a closure into a sink.
pub struct FnSink<F>(pub F);

impl<F: FnMut(&str)> EventSink for FnSink<F> {
    fn emit(&mut self, line: &str) {
        (self.0)(line);
    }
}

/// Writes each line LF-terminated to an [`io::Write`].
///
/// Emission cannot fail mid-game, so the first I/O error is kept and further
/// lines are dropped; [`WriterSink::finish`] flushes and reports it.
pub struct WriterSink<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> EventSink for WriterSink<W> {
    fn emit(&mut self, line: &str) {
        if self.error.is_some() {
            return;
        }
        let res = self
            .writer
            .write_all(line.as_bytes())
            .and_then(|_| self.writer.write_all(b"\n"));
        if let Err(err) = res {
            self.error = Some(err);
        }
    }
}

/// Forwards each line to `tracing` at INFO level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, line: &str) {
        tracing::info!(target: NARRATION_TARGET, "{}", line);
    }
}
