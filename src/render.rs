use indexmap::IndexMap;
use owo_colors::OwoColorize;

use crate::TaskNode;
use crate::options::RenderOptions;
use crate::symbol::{DefaultSymbols, SymbolResolver};
use crate::util::{Spinner, indent, last_nonblank_line, strip_ansi, truncate_to_width};

/// Columns kept free between a status line and the right edge.
const OUTPUT_MARGIN: usize = 3;

/// Column count assumed when the terminal won't say.
const FALLBACK_COLUMNS: usize = 80;

/// Converts a task tree into an indented text block.
///
/// [`render`](TreeRenderer::render) is deterministic for its inputs with
/// one controlled exception: every pass advances each overflow spinner
/// it touches by exactly one frame. Spinners are keyed per sibling list,
/// so two lists animate independently and keep their phase across
/// redraws; an entry whose list goes unrendered for a pass is dropped.
///
/// ```rust,ignore
/// let mut tree = TreeRenderer::new();
/// let block = tree.render(&tasks, &RenderOptions::default());
/// sink.repaint(&block)?;
/// ```
pub struct TreeRenderer<S = DefaultSymbols> {
    symbols: S,
    spinners: IndexMap<usize, Spinner>,
    columns: Option<usize>,
}

impl TreeRenderer<DefaultSymbols> {
    pub fn new() -> Self {
        Self::with_symbols(DefaultSymbols)
    }
}

impl Default for TreeRenderer<DefaultSymbols> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SymbolResolver> TreeRenderer<S> {
    /// Renderer with a custom status-glyph resolver.
    pub fn with_symbols(symbols: S) -> Self {
        Self {
            symbols,
            spinners: IndexMap::new(),
            columns: None,
        }
    }

    /// Fixes the column width instead of querying the terminal.
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Renders `tasks` as a newline-joined block. An empty list renders
    /// as an empty string.
    pub fn render<N: TaskNode>(&mut self, tasks: &[N], options: &RenderOptions) -> String {
        let columns = self.columns.unwrap_or_else(|| {
            crossterm::terminal::size()
                .map(|(cols, _)| cols as usize)
                .unwrap_or(FALLBACK_COLUMNS)
        });

        let mut touched = Vec::new();
        let lines = self.render_level(tasks, options, 0, columns, &mut touched);
        self.spinners.retain(|key, _| touched.contains(key));
        lines.join("\n")
    }

    fn render_level<N: TaskNode>(
        &mut self, tasks: &[N], options: &RenderOptions, level: usize, columns: usize,
        touched: &mut Vec<usize>,
    ) -> Vec<String> {
        let mut lines = Vec::new();

        // In-flight siblings, listed or not. Disabled tasks count too.
        let pending = tasks
            .iter()
            .filter(|t| !t.is_completed() && !t.is_skipped() && !t.has_failed())
            .count();

        let cap = options.cap();
        let mut listed = 0;
        let mut listed_pending = 0;

        for task in tasks {
            if options.hide_completed && task.is_completed() {
                continue;
            }
            if !task.is_enabled() {
                continue;
            }

            let subtasks = task.subtasks();
            let symbol = self.symbols.symbol(task, options);
            let tag = match task.is_skipped() {
                true => format!(" {}", "[skipped]".dimmed()),
                false => String::new(),
            };

            if options.show_subtasks && options.aggregate && !subtasks.is_empty() {
                let done = subtasks.iter().filter(|t| t.is_completed()).count();
                let total = subtasks.len();
                let pct = (done as f64 * 100.0 / total as f64).round() as usize;
                let title = task.title();
                lines.push(indent(
                    &format!(" {symbol} {title} ({done}/{total} ~ {pct}%){tag}"),
                    level,
                ));
            } else if options.hide_completed {
                // List up to cap-1 siblings individually, or all of them
                // when every in-flight sibling fits under the cap.
                // Failures are always listed. A capped task emits
                // nothing: no status line, no recursion.
                if listed + 1 < cap || pending <= cap || task.has_failed() {
                    listed += 1;
                    listed_pending += usize::from(task.is_pending());
                    lines.push(indent(&format!(" {symbol} {}{tag}", task.title()), level));
                } else {
                    continue;
                }
            } else {
                lines.push(indent(&format!(" {symbol} {}{tag}", task.title()), level));
            }

            if (task.is_pending() || task.is_skipped() || task.has_failed())
                && let Some(raw) = task.output()
            {
                let stripped = strip_ansi(raw);
                if let Some(data) = last_nonblank_line(&stripped) {
                    let arrow = indent(&format!("→ {data}"), level);
                    let fitted = truncate_to_width(&arrow, columns.saturating_sub(OUTPUT_MARGIN));
                    lines.push(format!("   {}", fitted.bright_black()));
                }
            }

            let recurse = !subtasks.is_empty()
                && (task.is_pending() || task.has_failed() || !options.collapse)
                && (task.has_failed() || options.show_subtasks)
                && (task.has_failed() || cap > 0);
            if recurse {
                // An aggregated parent already summarized its completed
                // children; they must not reappear below it.
                let child_options = match options.aggregate {
                    true => options.with_hidden(),
                    false => *options,
                };
                lines.extend(self.render_level(subtasks, &child_options, level + 1, columns, touched));
            }
        }

        if options.hide_completed && cap > 0 && pending > listed_pending {
            let key = tasks.as_ptr() as usize;
            touched.push(key);
            let spinner = self.spinners.entry(key).or_default();
            spinner.tick();
            let remaining = pending - listed_pending;
            lines.push(indent(
                &format!(" {} {remaining} other tasks pending", spinner.frame().yellow()),
                level,
            ));
        }

        lines
    }
}
