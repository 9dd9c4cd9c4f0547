/// Rendering configuration, fixed for the lifetime of a redraw loop.
///
/// Built once and read on every pass; the renderer never mutates it. The
/// only derived variant is [`with_hidden`](RenderOptions::with_hidden),
/// used when recursing out of an aggregated parent.
///
/// ```rust,ignore
/// let options = RenderOptions::default()
///     .aggregate(true)
///     .max_subtasks(4)
///     .clear_output(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render subtrees at all. `false` suppresses them entirely.
    pub show_subtasks: bool,
    /// Hide a subtree once its parent is no longer active. `false`
    /// forces subtree rendering even under a completed parent.
    pub collapse: bool,
    /// Replace a subtree with a `(done/total ~ pct%)` summary line.
    pub aggregate: bool,
    /// Omit completed tasks from the output.
    pub hide_completed: bool,
    /// Ceiling on individually listed siblings while `hide_completed` is
    /// active; the remainder folds into a spinner summary line. `None`
    /// means unbounded.
    pub max_subtasks: Option<usize>,
    /// On a clean stop, erase the rendered block instead of freezing it.
    pub clear_output: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_subtasks: true,
            collapse: true,
            aggregate: false,
            hide_completed: false,
            max_subtasks: None,
            clear_output: false,
        }
    }
}

impl RenderOptions {
    pub fn show_subtasks(mut self, yes: bool) -> Self {
        self.show_subtasks = yes;
        self
    }

    pub fn collapse(mut self, yes: bool) -> Self {
        self.collapse = yes;
        self
    }

    pub fn aggregate(mut self, yes: bool) -> Self {
        self.aggregate = yes;
        self
    }

    pub fn hide_completed(mut self, yes: bool) -> Self {
        self.hide_completed = yes;
        self
    }

    pub fn max_subtasks(mut self, cap: usize) -> Self {
        self.max_subtasks = Some(cap);
        self
    }

    pub fn clear_output(mut self, yes: bool) -> Self {
        self.clear_output = yes;
        self
    }

    /// Copy of these options with `hide_completed` forced on.
    ///
    /// Children of an aggregated parent must not repeat lines the
    /// summary already covers.
    pub(crate) fn with_hidden(mut self) -> Self {
        self.hide_completed = true;
        self
    }

    /// Listing ceiling as a plain count. Unset means unbounded.
    pub(crate) fn cap(&self) -> usize {
        self.max_subtasks.unwrap_or(usize::MAX)
    }
}
