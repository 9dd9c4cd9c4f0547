//! Text and animation utilities used by the tree renderer.
//!
//! # Text helpers
//!
//! [`indent`] prefixes a line with two spaces per nesting level.
//! [`strip_ansi`] removes CSI/OSC escape sequences. [`last_nonblank_line`]
//! picks the line shown for a multi-line status payload.
//! [`truncate_to_width`] shortens to a visual column limit:
//!
//! ```rust,ignore
//! let line = strip_ansi(raw_output);
//! let line = last_nonblank_line(&line).unwrap_or_default();
//! let line = truncate_to_width(line, columns - 3);
//! // never wraps — at most `columns - 3` display columns
//! ```
//!
//! # Spinner
//!
//! [`Spinner`] cycles through animation frames on each [`tick`](Spinner::tick):
//!
//! ```rust,ignore
//! let mut spinner = Spinner::dots(); // ⠋ ⠙ ⠹ ...
//! spinner.tick();
//! write!(f, "{} 3 other tasks pending", spinner.frame())?;
//!
//! // Custom frames:
//! let s = Spinner::custom(&["🌑", "🌒", "🌓", "🌔", "🌕"]);
//! ```

mod spinner;
mod text;

pub use spinner::*;
pub use text::*;
