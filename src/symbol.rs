use owo_colors::OwoColorize;

use crate::TaskNode;
use crate::options::RenderOptions;

/// Maps a task's current status to the short glyph shown before its
/// title.
///
/// Resolution must be deterministic for a given status — the periodic
/// redraw calls it on every pass and unchanged tasks should not flicker.
pub trait SymbolResolver {
    fn symbol<N: TaskNode>(&self, task: &N, options: &RenderOptions) -> String;
}

/// Colored unicode status glyphs.
///
/// `✔` completed, `✖` failed (`❯` for a failed parent), `↓` skipped,
/// `❯` for a pending parent with visible subtasks, `●` otherwise. A node
/// where no status predicate holds gets a blank glyph.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSymbols;

impl SymbolResolver for DefaultSymbols {
    fn symbol<N: TaskNode>(&self, task: &N, options: &RenderOptions) -> String {
        let parent = !task.subtasks().is_empty();
        if task.is_completed() {
            return "✔".green().to_string();
        }
        if task.has_failed() {
            return match parent {
                true => "❯".red().to_string(),
                false => "✖".red().to_string(),
            };
        }
        if task.is_skipped() {
            return "↓".yellow().to_string();
        }
        if task.is_pending() {
            return match options.show_subtasks && parent {
                true => "❯".yellow().to_string(),
                false => "●".yellow().to_string(),
            };
        }
        " ".to_string()
    }
}
