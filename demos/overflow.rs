//! Wide task lists under `hide_completed` + `max_subtasks`: finished
//! tasks disappear, a handful of running ones are listed, and the rest
//! fold into an animated "N other tasks pending" line.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use tasklight::{LogUpdate, RedrawLoop, RenderOptions, Task, TaskStatus};

fn main() {
    let tasks = Arc::new(RwLock::new(
        (1..=14)
            .map(|i| Task::new(format!("shard {i:02}")))
            .collect::<Vec<_>>(),
    ));

    let options = RenderOptions::default()
        .hide_completed(true)
        .max_subtasks(4)
        .clear_output(true);
    let mut ui = RedrawLoop::new(tasks.clone(), LogUpdate::stderr(), options)
        .interval(Duration::from_millis(80));
    ui.start();

    for i in 0..14 {
        tasks.write().unwrap()[i].set_output(format!("migrating rows, batch {}", i + 1));
        std::thread::sleep(Duration::from_millis(350));
        tasks.write().unwrap()[i].set_status(TaskStatus::Completed);
    }

    // Clean run with clear_output: the block vanishes entirely.
    ui.stop(false);
    eprintln!("all shards migrated");
}
