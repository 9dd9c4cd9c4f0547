use std::io::Write;

/// Where rendered frames go.
///
/// [`repaint`](RepaintSink::repaint) replaces the previously painted
/// block in place; [`clear`](RepaintSink::clear) and
/// [`freeze`](RepaintSink::freeze) are the two ways a redraw loop leaves
/// the terminal behind on stop.
pub trait RepaintSink {
    /// Overwrites the previously painted block with `frame`.
    fn repaint(&mut self, frame: &str) -> Result<(), std::io::Error>;

    /// Erases the painted block, restoring the terminal to its prior
    /// state.
    fn clear(&mut self) -> Result<(), std::io::Error>;

    /// Leaves the painted block on screen and moves past it; later
    /// repaints start a new block below.
    fn freeze(&mut self) -> Result<(), std::io::Error>;
}

/// In-place terminal repainting over any [`Write`] target.
///
/// Tracks how many lines the last frame occupied and rewinds the cursor
/// over them before painting the next one. The erase sequence is flushed
/// separately from the frame content.
///
/// ```rust,ignore
/// let mut sink = LogUpdate::stderr();
/// sink.repaint("one\ntwo")?;
/// sink.repaint("three")?; // replaces both lines
/// sink.freeze()?;         // "three" stays in the scrollback
/// ```
pub struct LogUpdate<W: Write> {
    target: W,
    painted_lines: usize,
}

impl LogUpdate<std::io::Stderr> {
    /// Sink painting to standard error.
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write> LogUpdate<W> {
    pub fn new(target: W) -> Self {
        Self {
            target,
            painted_lines: 0,
        }
    }

    /// Consumes the sink and returns the underlying target.
    pub fn into_target(self) -> W {
        self.target
    }

    fn erase_block(&mut self) -> Result<(), std::io::Error> {
        if self.painted_lines > 0 {
            write!(self.target, "\r\x1b[{}A\x1b[2K\x1b[J", self.painted_lines)?;
            self.target.flush()?;
        }
        self.painted_lines = 0;
        Ok(())
    }
}

impl<W: Write> RepaintSink for LogUpdate<W> {
    fn repaint(&mut self, frame: &str) -> Result<(), std::io::Error> {
        self.erase_block()?;
        writeln!(self.target, "{frame}")?;
        self.target.flush()?;
        self.painted_lines = frame.bytes().filter(|&b| b == b'\n').count() + 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), std::io::Error> {
        self.erase_block()
    }

    fn freeze(&mut self) -> Result<(), std::io::Error> {
        // The frame already ended with a newline, so the cursor sits
        // below the block; forgetting the line count is enough.
        self.painted_lines = 0;
        self.target.flush()
    }
}
