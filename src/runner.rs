use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{debug, trace};

use crate::options::RenderOptions;
use crate::render::TreeRenderer;
use crate::symbol::{DefaultSymbols, SymbolResolver};
use crate::task::TaskSource;
use crate::writer::RepaintSink;

/// Periodic redraw driver for a task tree.
///
/// Owns the renderer and the sink; reads task state through a
/// [`TaskSource`] snapshot on every tick. Starts idle; [`start`]
/// transitions to active, [`stop`] back to idle. Repaints are serialized
/// behind one mutex, so frames never interleave.
///
/// ```rust,ignore
/// let mut ui = RedrawLoop::new(tasks, LogUpdate::stderr(), options)
///     .interval(Duration::from_millis(80));
/// ui.start();
/// // ... run tasks ...
/// ui.stop(false);
/// ```
///
/// [`start`]: RedrawLoop::start
/// [`stop`]: RedrawLoop::stop
pub struct RedrawLoop<S: TaskSource, K: RepaintSink, Y = DefaultSymbols> {
    shared: Arc<Mutex<Shared<S, K, Y>>>,
    interval: Duration,
    ticker: Option<Ticker>,
}

struct Shared<S, K, Y> {
    source: S,
    options: RenderOptions,
    tree: TreeRenderer<Y>,
    sink: K,
}

struct Ticker {
    stop: Sender<()>,
    thread: JoinHandle<()>,
}

impl<S, K, Y> Shared<S, K, Y>
where
    S: TaskSource,
    K: RepaintSink,
    Y: SymbolResolver,
{
    fn repaint(&mut self) {
        let Shared {
            source,
            options,
            tree,
            sink,
        } = self;
        let frame = source.with_tasks(|tasks| tree.render(tasks, options));
        trace!(lines = frame.lines().count(), "repaint");
        // A dropped frame beats a panicking ticker thread.
        let _ = sink.repaint(&frame);
    }
}

impl<S, K> RedrawLoop<S, K, DefaultSymbols>
where
    S: TaskSource + Send + 'static,
    K: RepaintSink + Send + 'static,
{
    /// Loop with the default glyphs and a 100 ms repaint interval.
    pub fn new(source: S, sink: K, options: RenderOptions) -> Self {
        Self::with_tree(source, sink, options, TreeRenderer::new())
    }
}

impl<S, K, Y> RedrawLoop<S, K, Y>
where
    S: TaskSource + Send + 'static,
    K: RepaintSink + Send + 'static,
    Y: SymbolResolver + Send + 'static,
{
    /// Loop around a preconfigured renderer (custom symbols or a fixed
    /// column width).
    pub fn with_tree(source: S, sink: K, options: RenderOptions, tree: TreeRenderer<Y>) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                source,
                options,
                tree,
                sink,
            })),
            interval: Duration::from_millis(100),
            ticker: None,
        }
    }

    /// Set the repaint interval.
    pub fn interval(mut self, d: Duration) -> Self {
        self.interval = d;
        self
    }

    /// Whether a ticker is currently running.
    pub fn is_active(&self) -> bool {
        self.ticker.is_some()
    }

    /// Begins periodic render-and-repaint cycles.
    ///
    /// Returns `false` without doing anything when the loop is already
    /// active — a reentrant call never schedules a second ticker.
    pub fn start(&mut self) -> bool {
        if self.ticker.is_some() {
            return false;
        }
        debug!(interval_ms = self.interval.as_millis() as u64, "redraw loop started");

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let shared = Arc::clone(&self.shared);
        let interval = self.interval;
        // A dropped RedrawLoop disconnects the channel, which also ends
        // the ticker.
        let thread = std::thread::spawn(move || {
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => shared.lock().unwrap().repaint(),
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        self.ticker = Some(Ticker {
            stop: stop_tx,
            thread,
        });
        true
    }

    /// Halts the periodic cycle and paints one final frame reflecting
    /// the tasks' current state.
    ///
    /// With `clear_output` configured and `failed == false` the painted
    /// block is erased; otherwise it is frozen in place. Safe to call
    /// while idle — the final repaint still happens.
    pub fn stop(&mut self, failed: bool) {
        if let Some(ticker) = self.ticker.take() {
            let _ = ticker.stop.send(());
            let _ = ticker.thread.join();
        }
        debug!(failed, "redraw loop stopped");

        let mut shared = self.shared.lock().unwrap();
        shared.repaint();
        let clear = shared.options.clear_output && !failed;
        let _ = match clear {
            true => shared.sink.clear(),
            false => shared.sink.freeze(),
        };
    }
}
