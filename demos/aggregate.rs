//! Aggregated subtrees: each parent renders as a `(done/total ~ pct%)`
//! summary while its remaining children are listed below it.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use tasklight::{LogUpdate, RedrawLoop, RenderOptions, Task, TaskStatus};

fn main() {
    let suites = ["unit", "integration", "doc"];
    let tasks = Arc::new(RwLock::new(
        suites
            .iter()
            .map(|suite| {
                let mut parent = Task::new(format!("{suite} tests"));
                for i in 1..=6 {
                    parent = parent.subtask(Task::new(format!("{suite}_{i:02}")));
                }
                parent
            })
            .collect::<Vec<_>>(),
    ));

    let options = RenderOptions::default().aggregate(true);
    let mut ui = RedrawLoop::new(tasks.clone(), LogUpdate::stderr(), options)
        .interval(Duration::from_millis(80));
    ui.start();

    for case in 0..6 {
        for suite in 0..suites.len() {
            std::thread::sleep(Duration::from_millis(250));
            let mut tasks = tasks.write().unwrap();
            tasks[suite].subtasks_mut()[case].set_status(TaskStatus::Completed);
        }
    }
    for suite in 0..suites.len() {
        tasks.write().unwrap()[suite].set_status(TaskStatus::Completed);
    }

    ui.stop(false);
}
