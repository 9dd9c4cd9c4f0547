/// A frame-based spinner animation.
///
/// Holds no clock: [`Spinner::tick`] advances exactly one frame, so the
/// animation rate is whatever rate the caller renders at. The tree
/// renderer keeps one spinner per sibling list for its overflow summary
/// lines and ticks it once per pass.
///
/// ```rust,ignore
/// let mut spinner = Spinner::dots();
/// spinner.tick();
/// write!(f, "{} {} other tasks pending", spinner.frame(), n)?;
/// ```
#[derive(Debug, Clone)]
pub struct Spinner {
    frames: &'static [&'static str],
    index: usize,
}

impl Spinner {
    /// Braille dot spinner (the most common choice).
    pub fn dots() -> Self {
        Self {
            frames: &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            index: 0,
        }
    }

    /// Classic line spinner.
    pub fn line() -> Self {
        Self {
            frames: &["|", "/", "-", "\\"],
            index: 0,
        }
    }

    /// Custom frames.
    pub fn custom(frames: &'static [&'static str]) -> Self {
        Self { frames, index: 0 }
    }

    /// Advance to the next frame.
    pub fn tick(&mut self) {
        self.index = (self.index + 1) % self.frames.len();
    }

    /// Current frame string.
    pub fn frame(&self) -> &'static str {
        self.frames[self.index]
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::dots()
    }
}

impl std::fmt::Display for Spinner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.frame())
    }
}
